//! Line-of-five win detection.
//!
//! Placement only ever completes a line through the cell just played, so
//! [`has_line_of_five`] checks the four axes through one cell. Rotation can
//! assemble a line anywhere in the moved quadrant, so
//! [`has_any_line_of_five`] rescans every cell the player occupies.

use crate::core::{Board, Player};

/// Contiguous same-player marbles needed to win a game.
pub const WIN_LENGTH: u32 = 5;

/// The four axes, as (row, col) steps: horizontal, vertical, diagonal,
/// anti-diagonal. Each is walked in both directions.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Whether `player` has a line of five running through (row, col).
///
/// Counts contiguous marbles outward along each axis in both directions,
/// plus the origin cell itself; the walk stops at the first mismatching or
/// out-of-bounds cell.
#[must_use]
pub fn has_line_of_five(board: &Board, row: usize, col: usize, player: Player) -> bool {
    AXES.iter().any(|&(dr, dc)| {
        let count = 1
            + count_from(board, row, col, dr, dc, player)
            + count_from(board, row, col, -dr, -dc, player);
        count >= WIN_LENGTH
    })
}

/// Whether `player` has a line of five anywhere on the board.
#[must_use]
pub fn has_any_line_of_five(board: &Board, player: Player) -> bool {
    board
        .occupied_cells(player)
        .any(|(row, col)| has_line_of_five(board, row, col, player))
}

fn count_from(
    board: &Board,
    row: usize,
    col: usize,
    dr: isize,
    dc: isize,
    player: Player,
) -> u32 {
    let mut count = 0;
    let mut r = row as isize + dr;
    let mut c = col as isize + dc;
    while board.occupant(r, c) == Some(player) {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}
