//! Tile Slide - a 3x3 sliding tile puzzle for the browser
//!
//! Core modules:
//! - `board`: Deterministic puzzle state (adjacency, moves, shuffle)
//! - `anim`: Time-driven slide animation, decoupled from move validation
//!
//! The DOM adapter (event wiring, re-parenting, the rAF loop) lives in the
//! wasm entry point in `main.rs`.

pub mod anim;
pub mod board;

pub use anim::{SlideAnimation, SlideQueue};
pub use board::{MoveResult, PuzzleState, SlideMove};

use glam::Vec2;

/// Puzzle configuration constants
pub mod consts {
    /// Cells per side (the board is GRID_SIZE x GRID_SIZE)
    pub const GRID_SIZE: usize = 3;
    /// Total cell count
    pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;
    /// Movable tiles (every cell but the gap)
    pub const TILE_COUNT: usize = CELL_COUNT - 1;
    /// The gap's position in the solved layout (bottom-right)
    pub const HOME_EMPTY_POS: usize = CELL_COUNT - 1;

    /// Moves applied per shuffle
    pub const SHUFFLE_MOVES: usize = 25;

    /// Fallback tile edge length when the DOM can't be measured
    pub const TILE_SIZE_PX: f32 = 100.0;
    /// One slide animation, in seconds (1 px per 5 ms across a 100 px tile)
    pub const SLIDE_DURATION: f32 = 0.5;
}

/// Pixel origin (top-left corner) of a cell, row-major from the board's origin
#[inline]
pub fn cell_origin(pos: usize, cell_size: f32) -> Vec2 {
    let row = pos / consts::GRID_SIZE;
    let col = pos % consts::GRID_SIZE;
    Vec2::new(col as f32 * cell_size, row as f32 * cell_size)
}
