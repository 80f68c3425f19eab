//! Rotational symmetry and the mandatory-rotation rule.
//!
//! Rotating a quadrant whose content survives a quarter turn unchanged
//! cannot produce a new board state, so such a quadrant gives the mover a
//! no-op escape and makes skipping legal. Rotation is mandatory exactly
//! when no quadrant offers that escape.

use crate::core::{matrix, Board, Quadrant};

/// Whether the quadrant's content is unchanged by a quarter turn in either
/// direction.
///
/// An all-empty quadrant is trivially symmetric.
#[must_use]
pub fn has_rotational_symmetry(board: &Board, quadrant: Quadrant) -> bool {
    let grid = board.extract_quadrant(quadrant);
    grid == matrix::rotate_clockwise(&grid) || grid == matrix::rotate_counter_clockwise(&grid)
}

/// Whether the pending rotation may not be skipped: true iff no quadrant
/// has rotational symmetry.
#[must_use]
pub fn is_rotation_mandatory(board: &Board) -> bool {
    Quadrant::ALL
        .into_iter()
        .all(|quadrant| !has_rotational_symmetry(board, quadrant))
}
