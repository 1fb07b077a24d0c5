//! Time-driven slide animation
//!
//! A slide is a plain value: start and end pixel coordinates plus a duration,
//! advanced by frame delta time. The board core never sees pixels or timers;
//! the adapter samples `offset()` each frame and writes it to the tile's
//! style.

use std::collections::VecDeque;

use glam::Vec2;

use crate::board::SlideMove;
use crate::cell_origin;

/// One tile sliding between two pixel coordinates
#[derive(Debug, Clone, Copy)]
pub struct SlideAnimation {
    mv: SlideMove,
    from_px: Vec2,
    to_px: Vec2,
    duration: f32,
    elapsed: f32,
}

impl SlideAnimation {
    pub fn new(mv: SlideMove, from_px: Vec2, to_px: Vec2, duration: f32) -> Self {
        Self {
            mv,
            from_px,
            to_px,
            duration,
            elapsed: 0.0,
        }
    }

    /// The move being animated
    pub fn slide(&self) -> SlideMove {
        self.mv
    }

    /// Advance by `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    /// Interpolation factor in [0, 1]. A non-positive duration completes
    /// immediately.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    /// Current pixel offset relative to the origin cell
    pub fn offset(&self) -> Vec2 {
        (self.to_px - self.from_px) * self.progress()
    }

    /// Current absolute pixel position
    pub fn position(&self) -> Vec2 {
        self.from_px.lerp(self.to_px, self.progress())
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Serializes slides so at most one animates at a time.
///
/// Click-driven moves and whole shuffle sequences go through the same queue;
/// while a slide is in flight the adapter ignores further move requests.
#[derive(Debug)]
pub struct SlideQueue {
    cell_size: f32,
    duration: f32,
    pending: VecDeque<SlideMove>,
    active: Option<SlideAnimation>,
}

impl SlideQueue {
    pub fn new(cell_size: f32, duration: f32) -> Self {
        Self {
            cell_size,
            duration,
            pending: VecDeque::new(),
            active: None,
        }
    }

    /// True while a slide is animating or waiting its turn
    pub fn busy(&self) -> bool {
        self.active.is_some() || !self.pending.is_empty()
    }

    /// The animation currently in flight
    pub fn active(&self) -> Option<&SlideAnimation> {
        self.active.as_ref()
    }

    pub fn push(&mut self, mv: SlideMove) {
        self.pending.push_back(mv);
    }

    pub fn extend(&mut self, moves: impl IntoIterator<Item = SlideMove>) {
        self.pending.extend(moves);
    }

    /// Drop everything, in-flight slide included (reset snaps tiles home)
    pub fn clear(&mut self) {
        self.pending.clear();
        self.active = None;
    }

    /// Advance by `dt` seconds. Returns the move whose animation completed
    /// this frame, if any, so the adapter can re-parent the tile element.
    /// The next pending move starts automatically on a later frame.
    pub fn advance(&mut self, dt: f32) -> Option<SlideMove> {
        if self.active.is_none() {
            let mv = self.pending.pop_front()?;
            self.active = Some(SlideAnimation::new(
                mv,
                cell_origin(mv.from, self.cell_size),
                cell_origin(mv.to, self.cell_size),
                self.duration,
            ));
        }

        let anim = self.active.as_mut()?;
        anim.advance(dt);
        if anim.finished() {
            let done = anim.slide();
            self.active = None;
            return Some(done);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TILE_SIZE_PX;

    fn mv(tile: usize, from: usize, to: usize) -> SlideMove {
        SlideMove { tile, from, to }
    }

    #[test]
    fn test_animation_interpolates_linearly() {
        // Tile at 7 sliding right into the gap at 8
        let from = cell_origin(7, TILE_SIZE_PX);
        let to = cell_origin(8, TILE_SIZE_PX);
        let mut anim = SlideAnimation::new(mv(7, 7, 8), from, to, 0.5);

        assert_eq!(anim.offset(), Vec2::ZERO);
        assert!(!anim.finished());

        anim.advance(0.25);
        assert!((anim.offset().x - TILE_SIZE_PX / 2.0).abs() < 1e-4);
        assert_eq!(anim.offset().y, 0.0);

        anim.advance(0.25);
        assert!(anim.finished());
        assert_eq!(anim.offset(), to - from);
        assert_eq!(anim.position(), to);

        // Overshoot clamps
        anim.advance(1.0);
        assert_eq!(anim.position(), to);
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let mut anim = SlideAnimation::new(mv(0, 0, 1), Vec2::ZERO, Vec2::X, 0.0);
        assert_eq!(anim.progress(), 1.0);
        anim.advance(0.016);
        assert!(anim.finished());
    }

    #[test]
    fn test_queue_runs_moves_one_at_a_time() {
        let mut queue = SlideQueue::new(TILE_SIZE_PX, 0.1);
        assert!(!queue.busy());

        queue.push(mv(7, 7, 8));
        queue.push(mv(4, 4, 7));
        assert!(queue.busy());

        // First advance starts the first move; it isn't done yet
        assert_eq!(queue.advance(0.05), None);
        assert_eq!(queue.active().map(|a| a.slide()), Some(mv(7, 7, 8)));

        // Completes exactly once
        assert_eq!(queue.advance(0.05), Some(mv(7, 7, 8)));
        assert!(queue.active().is_none());
        assert!(queue.busy());

        // Second move runs only after the first finished
        assert_eq!(queue.advance(0.2), Some(mv(4, 4, 7)));
        assert!(!queue.busy());
        assert_eq!(queue.advance(0.1), None);
    }

    #[test]
    fn test_queue_preserves_shuffle_order() {
        let moves = vec![mv(7, 7, 8), mv(4, 4, 7), mv(5, 5, 4)];
        let mut queue = SlideQueue::new(TILE_SIZE_PX, 0.0);
        queue.extend(moves.clone());

        let mut completed = Vec::new();
        while let Some(done) = queue.advance(0.016) {
            completed.push(done);
        }
        assert_eq!(completed, moves);
    }

    #[test]
    fn test_clear_drops_in_flight_slide() {
        let mut queue = SlideQueue::new(TILE_SIZE_PX, 0.5);
        queue.push(mv(7, 7, 8));
        queue.push(mv(4, 4, 7));
        queue.advance(0.1);
        assert!(queue.busy());

        queue.clear();
        assert!(!queue.busy());
        assert_eq!(queue.advance(0.1), None);
    }
}
