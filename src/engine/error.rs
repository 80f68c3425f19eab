//! The engine's single error kind.

/// A rejected player action.
///
/// Every variant is recoverable: the engine refuses the action at the
/// boundary and mutates nothing. The UI is expected to disable most of
/// these inputs up front, but the engine enforces them regardless.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalMove {
    /// Placement coordinates outside the board.
    OutOfRange { row: usize, col: usize },
    /// Placement on a cell that already holds a marble.
    CellOccupied { row: usize, col: usize },
    /// Placement attempted while a rotation is pending.
    PlacementNotAllowed,
    /// Rotation or skip attempted while no rotation is pending.
    RotationNotAllowed,
    /// Skip attempted while no quadrant is symmetric.
    RotationMandatory,
    /// Any placement or rotation after the set has been decided.
    GameOver,
}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::OutOfRange { row, col } => {
                write!(f, "cell ({row}, {col}) is outside the board")
            }
            IllegalMove::CellOccupied { row, col } => {
                write!(f, "cell ({row}, {col}) is already occupied")
            }
            IllegalMove::PlacementNotAllowed => {
                write!(f, "cannot place a marble while a rotation is pending")
            }
            IllegalMove::RotationNotAllowed => {
                write!(f, "no rotation is pending")
            }
            IllegalMove::RotationMandatory => {
                write!(f, "rotation is mandatory and cannot be skipped")
            }
            IllegalMove::GameOver => write!(f, "the set is already decided"),
        }
    }
}

impl std::error::Error for IllegalMove {}
