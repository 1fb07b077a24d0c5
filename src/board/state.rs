//! Puzzle state and core types
//!
//! The board is the single source of truth for tile positions. Exactly one
//! cell is empty at all times; every other cell holds exactly one tile.

use std::fmt;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::{CELL_COUNT, GRID_SIZE, HOME_EMPTY_POS, TILE_COUNT};

/// A movable tile. `home` is its solved position and doubles as its identity;
/// `pos` is the cell it currently occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub home: usize,
    pub pos: usize,
}

/// One applied slide: the tile left `from` and now sits at `to`, which was
/// the empty cell when the move was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideMove {
    /// Home index of the tile that slid
    pub tile: usize,
    /// Cell the tile slid out of
    pub from: usize,
    /// Cell the tile slid into (the previous empty position)
    pub to: usize,
}

/// Outcome of a move request. Rejection is an expected, frequent outcome,
/// not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// The tile bordered the gap and slid into it
    Moved(SlideMove),
    /// The selected cell does not border the gap (or is the gap itself)
    Rejected { pos: usize },
}

impl MoveResult {
    pub fn is_moved(&self) -> bool {
        matches!(self, MoveResult::Moved(_))
    }
}

/// Complete puzzle state (deterministic)
#[derive(Debug, Clone)]
pub struct PuzzleState {
    /// Shuffle seed for reproducibility
    pub seed: u64,
    /// Seeded RNG driving shuffles
    pub(crate) rng: Pcg32,
    /// The currently empty cell
    pub(crate) empty_pos: usize,
    /// Tiles indexed by home position
    pub(crate) tiles: [Tile; TILE_COUNT],
}

impl PuzzleState {
    /// Create a solved board with the given shuffle seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            empty_pos: HOME_EMPTY_POS,
            tiles: std::array::from_fn(|home| Tile { home, pos: home }),
        }
    }

    /// The currently empty cell
    pub fn empty_pos(&self) -> usize {
        self.empty_pos
    }

    /// All tiles, in home order
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Tile with the given home index
    pub fn tile(&self, home: usize) -> &Tile {
        assert!(home < TILE_COUNT, "tile {home} out of range");
        &self.tiles[home]
    }

    /// Tile currently occupying `pos`, if it isn't the empty cell
    pub fn tile_at(&self, pos: usize) -> Option<&Tile> {
        assert!(pos < CELL_COUNT, "position {pos} out of range");
        self.tiles.iter().find(|t| t.pos == pos)
    }

    /// Put every tile back at home and the gap at bottom-right. Idempotent.
    pub fn reset(&mut self) {
        for tile in &mut self.tiles {
            tile.pos = tile.home;
        }
        self.empty_pos = HOME_EMPTY_POS;
        log::info!("Board reset to solved layout");
    }
}

impl fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pos in 0..CELL_COUNT {
            match self.tile_at(pos) {
                Some(tile) => write!(f, "{:2} ", tile.home + 1)?,
                None => write!(f, " . ")?,
            }
            if pos % GRID_SIZE == GRID_SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_solved() {
        let state = PuzzleState::new(12345);
        assert_eq!(state.empty_pos(), HOME_EMPTY_POS);
        assert!(state.tiles().all(|t| t.pos == t.home));
        assert_eq!(state.tiles().count(), TILE_COUNT);
    }

    #[test]
    fn test_tile_at_solved_layout() {
        let state = PuzzleState::new(1);
        for pos in 0..TILE_COUNT {
            assert_eq!(state.tile_at(pos).map(|t| t.home), Some(pos));
        }
        assert_eq!(state.tile_at(HOME_EMPTY_POS), None);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_tile_at_out_of_range_panics() {
        PuzzleState::new(1).tile_at(CELL_COUNT);
    }

    #[test]
    fn test_display_renders_grid() {
        let state = PuzzleState::new(0);
        assert_eq!(state.to_string(), " 1  2  3 \n 4  5  6 \n 7  8  . \n");
    }
}
