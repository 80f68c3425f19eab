//! The 6×6 board, its quadrant decomposition, and cell addressing.
//!
//! ## Board
//!
//! A 6×6 row-major grid of cells. Placement rejects occupied or
//! out-of-range cells; quadrant rotation permutes the nine cells of one
//! quadrant and never changes which marbles exist on the board.
//!
//! ## Quadrant
//!
//! One of four fixed 3×3 sub-boards. The mapping from quadrant to absolute
//! coordinates is fixed and total; using an enum rather than a raw index
//! makes invalid quadrants unrepresentable.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::matrix;
use crate::engine::IllegalMove;

/// Side length of the board.
pub const BOARD_SIZE: usize = 6;

/// Side length of a quadrant.
pub const QUADRANT_SIZE: usize = 3;

/// One of the two players. Black moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Black => write!(f, "Player 1 (Black)"),
            Player::White => write!(f, "Player 2 (White)"),
        }
    }
}

/// A board cell: empty, or holding one player's marble.
pub type Cell = Option<Player>;

/// One of the four fixed 3×3 sub-boards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    /// All quadrants, in index order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    /// Quadrant index, 0-3.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Quadrant::TopLeft => 0,
            Quadrant::TopRight => 1,
            Quadrant::BottomLeft => 2,
            Quadrant::BottomRight => 3,
        }
    }

    /// Absolute (row, col) of the quadrant's top-left cell.
    #[must_use]
    pub const fn origin(self) -> (usize, usize) {
        match self {
            Quadrant::TopLeft => (0, 0),
            Quadrant::TopRight => (0, QUADRANT_SIZE),
            Quadrant::BottomLeft => (QUADRANT_SIZE, 0),
            Quadrant::BottomRight => (QUADRANT_SIZE, QUADRANT_SIZE),
        }
    }

    /// The nine absolute (row, col) pairs of this quadrant, in row-major
    /// order within the quadrant.
    #[must_use]
    pub fn cells(self) -> SmallVec<[(usize, usize); 9]> {
        let (r0, c0) = self.origin();
        let mut coords = SmallVec::new();
        for i in 0..QUADRANT_SIZE {
            for j in 0..QUADRANT_SIZE {
                coords.push((r0 + i, c0 + j));
            }
        }
        coords
    }

    /// Display name, matching the on-screen labels.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Quadrant::TopLeft => "Top-Left",
            Quadrant::TopRight => "Top-Right",
            Quadrant::BottomLeft => "Bottom-Left",
            Quadrant::BottomRight => "Bottom-Right",
        }
    }
}

impl std::fmt::Display for Quadrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Direction of a quadrant rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

impl std::fmt::Display for Rotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rotation::Clockwise => f.write_str("clockwise"),
            Rotation::CounterClockwise => f.write_str("counter-clockwise"),
        }
    }
}

/// The 6×6 playing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// The cell at (row, col). Both must be less than [`BOARD_SIZE`].
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// The occupant at signed coordinates, `None` when the coordinates are
    /// off the board or the cell is empty. Used by line walks that step
    /// past the edges.
    #[must_use]
    pub fn occupant(&self, row: isize, col: isize) -> Option<Player> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        self.cells[row][col]
    }

    /// Place a marble for `player` at (row, col).
    ///
    /// Fails without mutating when the coordinates are out of range or the
    /// cell is occupied.
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> Result<(), IllegalMove> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(IllegalMove::OutOfRange { row, col });
        }
        if self.cells[row][col].is_some() {
            return Err(IllegalMove::CellOccupied { row, col });
        }
        self.cells[row][col] = Some(player);
        Ok(())
    }

    /// Copy a quadrant out as a 3×3 matrix, row-major per
    /// [`Quadrant::cells`].
    #[must_use]
    pub fn extract_quadrant(&self, quadrant: Quadrant) -> [[Cell; 3]; 3] {
        let mut flat = [None; 9];
        for (k, &(row, col)) in quadrant.cells().iter().enumerate() {
            flat[k] = self.cells[row][col];
        }
        matrix::unflatten(&flat)
    }

    /// Rotate a quadrant in place.
    ///
    /// The quadrant is read out in [`Quadrant::cells`] order, rotated, and
    /// written back to the same coordinates in the same order, so rotation
    /// only ever moves marbles within the quadrant.
    pub fn rotate_quadrant(&mut self, quadrant: Quadrant, rotation: Rotation) {
        let grid = self.extract_quadrant(quadrant);
        let rotated = match rotation {
            Rotation::Clockwise => matrix::rotate_clockwise(&grid),
            Rotation::CounterClockwise => matrix::rotate_counter_clockwise(&grid),
        };
        let flat = matrix::flatten(&rotated);
        for (k, &(row, col)) in quadrant.cells().iter().enumerate() {
            self.cells[row][col] = flat[k];
        }
    }

    /// Iterate the coordinates of every cell occupied by `player`.
    pub fn occupied_cells(&self, player: Player) -> impl Iterator<Item = (usize, usize)> {
        let cells = self.cells;
        (0..BOARD_SIZE).flat_map(move |row| {
            (0..BOARD_SIZE)
                .filter_map(move |col| (cells[row][col] == Some(player)).then_some((row, col)))
        })
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_some())
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let symbol = match cell {
                    Some(Player::Black) => 'B',
                    Some(Player::White) => 'W',
                    None => '.',
                };
                write!(f, "{symbol}")?;
                if col + 1 < BOARD_SIZE {
                    f.write_str(" ")?;
                }
            }
            if row + 1 < BOARD_SIZE {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.occupied_count(), 0);
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                assert_eq!(board.cell(row, col), None);
            }
        }
    }

    #[test]
    fn test_place_and_read_back() {
        let mut board = Board::new();
        board.place(2, 4, Player::Black).unwrap();

        assert_eq!(board.cell(2, 4), Some(Player::Black));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_place_occupied_cell_fails() {
        let mut board = Board::new();
        board.place(0, 0, Player::Black).unwrap();

        let err = board.place(0, 0, Player::White).unwrap_err();
        assert_eq!(err, IllegalMove::CellOccupied { row: 0, col: 0 });
        assert_eq!(board.cell(0, 0), Some(Player::Black));
    }

    #[test]
    fn test_place_out_of_range_fails() {
        let mut board = Board::new();

        assert_eq!(
            board.place(6, 0, Player::Black),
            Err(IllegalMove::OutOfRange { row: 6, col: 0 })
        );
        assert_eq!(
            board.place(0, 9, Player::Black),
            Err(IllegalMove::OutOfRange { row: 0, col: 9 })
        );
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_quadrant_origins() {
        assert_eq!(Quadrant::TopLeft.origin(), (0, 0));
        assert_eq!(Quadrant::TopRight.origin(), (0, 3));
        assert_eq!(Quadrant::BottomLeft.origin(), (3, 0));
        assert_eq!(Quadrant::BottomRight.origin(), (3, 3));
    }

    #[test]
    fn test_quadrant_cells_are_row_major() {
        let coords = Quadrant::TopRight.cells();
        assert_eq!(coords.len(), 9);
        assert_eq!(coords[0], (0, 3));
        assert_eq!(coords[1], (0, 4));
        assert_eq!(coords[3], (1, 3));
        assert_eq!(coords[8], (2, 5));
    }

    #[test]
    fn test_rotate_quadrant_clockwise_moves_corner() {
        let mut board = Board::new();
        board.place(0, 0, Player::Black).unwrap();

        board.rotate_quadrant(Quadrant::TopLeft, Rotation::Clockwise);

        assert_eq!(board.cell(0, 0), None);
        assert_eq!(board.cell(0, 2), Some(Player::Black));
    }

    #[test]
    fn test_rotate_quadrant_counter_clockwise_is_inverse() {
        let mut board = Board::new();
        board.place(3, 4, Player::White).unwrap();
        board.place(5, 5, Player::Black).unwrap();
        let before = board;

        board.rotate_quadrant(Quadrant::BottomRight, Rotation::Clockwise);
        board.rotate_quadrant(Quadrant::BottomRight, Rotation::CounterClockwise);

        assert_eq!(board, before);
    }

    #[test]
    fn test_rotate_quadrant_preserves_occupancy() {
        let mut board = Board::new();
        board.place(0, 1, Player::Black).unwrap();
        board.place(1, 1, Player::White).unwrap();
        board.place(2, 0, Player::Black).unwrap();

        board.rotate_quadrant(Quadrant::TopLeft, Rotation::Clockwise);

        assert_eq!(board.occupied_count(), 3);
        assert_eq!(board.occupied_cells(Player::Black).count(), 2);
        assert_eq!(board.occupied_cells(Player::White).count(), 1);
    }

    #[test]
    fn test_rotate_quadrant_leaves_other_quadrants_alone() {
        let mut board = Board::new();
        board.place(0, 0, Player::Black).unwrap();
        board.place(5, 5, Player::White).unwrap();

        board.rotate_quadrant(Quadrant::TopLeft, Rotation::Clockwise);

        assert_eq!(board.cell(5, 5), Some(Player::White));
    }

    #[test]
    fn test_occupant_out_of_bounds_is_none() {
        let mut board = Board::new();
        board.place(0, 0, Player::Black).unwrap();

        assert_eq!(board.occupant(-1, 0), None);
        assert_eq!(board.occupant(0, 6), None);
        assert_eq!(board.occupant(0, 0), Some(Player::Black));
    }

    #[test]
    fn test_display_renders_marbles() {
        let mut board = Board::new();
        board.place(0, 0, Player::Black).unwrap();
        board.place(0, 1, Player::White).unwrap();

        let rendered = board.to_string();
        assert!(rendered.starts_with("B W . . . ."));
    }
}
