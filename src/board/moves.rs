//! The move engine
//!
//! Free functions that advance a `PuzzleState`: single click-driven moves and
//! the random-walk shuffle. Only legal moves ever mutate the board, so a
//! shuffled board stays solvable.

use rand::Rng;

use super::grid::is_adjacent;
use super::state::{MoveResult, PuzzleState, SlideMove};
use crate::consts::{CELL_COUNT, TILE_COUNT};

/// Try to slide the tile at `tile_pos` into the empty cell.
///
/// Selecting the empty cell itself, or a tile that doesn't border it, is
/// rejected and leaves the board untouched. Positions outside the grid are an
/// adapter integration bug and panic.
pub fn request_move(state: &mut PuzzleState, tile_pos: usize) -> MoveResult {
    assert!(tile_pos < CELL_COUNT, "position {tile_pos} out of range");

    if tile_pos == state.empty_pos || !is_adjacent(tile_pos, state.empty_pos) {
        log::debug!(
            "Rejected move from {} (empty at {})",
            tile_pos,
            state.empty_pos
        );
        return MoveResult::Rejected { pos: tile_pos };
    }

    MoveResult::Moved(apply_slide(state, tile_pos))
}

/// Scramble the board with a random walk of `move_count` legal moves.
///
/// Each step draws tiles uniformly until one borders the gap, then slides it
/// in (reject-and-resample). Returns the applied moves in order, for the
/// adapter to animate sequentially.
pub fn shuffle(state: &mut PuzzleState, move_count: usize) -> Vec<SlideMove> {
    let mut moves = Vec::with_capacity(move_count);

    for _ in 0..move_count {
        loop {
            let tile = state.rng.random_range(0..TILE_COUNT);
            let tile_pos = state.tiles[tile].pos;
            if is_adjacent(tile_pos, state.empty_pos) {
                moves.push(apply_slide(state, tile_pos));
                break;
            }
        }
    }

    log::info!("Shuffled {} moves (seed {})", moves.len(), state.seed);
    moves
}

/// Slide the tile at `from` into the gap. Adjacency is the caller's problem.
fn apply_slide(state: &mut PuzzleState, from: usize) -> SlideMove {
    let to = state.empty_pos;
    let tile = state
        .tiles
        .iter_mut()
        .find(|t| t.pos == from)
        .expect("every non-empty cell holds a tile");
    tile.pos = to;
    let mv = SlideMove {
        tile: tile.home,
        from,
        to,
    };
    state.empty_pos = from;
    mv
}
