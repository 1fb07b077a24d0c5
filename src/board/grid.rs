//! Grid cell arithmetic
//!
//! Cells are addressed by a linear position index in `0..CELL_COUNT`,
//! row-major. Everything here is pure math over those indices.

use crate::consts::{CELL_COUNT, GRID_SIZE};

/// Row of a position index
#[inline]
pub fn row_of(pos: usize) -> usize {
    pos / GRID_SIZE
}

/// Column of a position index
#[inline]
pub fn col_of(pos: usize) -> usize {
    pos % GRID_SIZE
}

/// True iff `a` and `b` are direct horizontal or vertical neighbors.
///
/// Exactly one of the row/column differences must be 1 and the other 0, so a
/// cell is never adjacent to itself or to a diagonal neighbor. Out-of-range
/// positions are a caller bug and panic.
pub fn is_adjacent(a: usize, b: usize) -> bool {
    assert!(a < CELL_COUNT, "position {a} out of range");
    assert!(b < CELL_COUNT, "position {b} out of range");

    let row_diff = row_of(a).abs_diff(row_of(b));
    let col_diff = col_of(a).abs_diff(col_of(b));
    row_diff == 1 && col_diff == 0 || row_diff == 0 && col_diff == 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_row_col_derivation() {
        assert_eq!(row_of(0), 0);
        assert_eq!(col_of(0), 0);
        assert_eq!(row_of(5), 1);
        assert_eq!(col_of(5), 2);
        assert_eq!(row_of(8), 2);
        assert_eq!(col_of(8), 2);
    }

    #[test]
    fn test_center_adjacent_to_edge_midpoints_only() {
        for pos in 0..CELL_COUNT {
            assert_eq!(
                is_adjacent(4, pos),
                [1, 3, 5, 7].contains(&pos),
                "center vs {pos}"
            );
        }
    }

    #[test]
    fn test_corner_neighbors() {
        assert!(is_adjacent(8, 7));
        assert!(is_adjacent(8, 5));
        // Diagonal
        assert!(!is_adjacent(8, 4));
        assert!(!is_adjacent(0, 4));
        // Far apart
        assert!(!is_adjacent(0, 8));
        // Index neighbors split across a row boundary (2 ends row 0, 3 starts row 1)
        assert!(!is_adjacent(2, 3));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_position_panics() {
        is_adjacent(0, CELL_COUNT);
    }

    proptest! {
        #[test]
        fn never_self_adjacent(p in 0..CELL_COUNT) {
            prop_assert!(!is_adjacent(p, p));
        }

        #[test]
        fn adjacency_is_symmetric(a in 0..CELL_COUNT, b in 0..CELL_COUNT) {
            prop_assert_eq!(is_adjacent(a, b), is_adjacent(b, a));
        }

        #[test]
        fn adjacency_is_manhattan_distance_one(a in 0..CELL_COUNT, b in 0..CELL_COUNT) {
            let manhattan = row_of(a).abs_diff(row_of(b)) + col_of(a).abs_diff(col_of(b));
            prop_assert_eq!(is_adjacent(a, b), manhattan == 1);
        }
    }
}
