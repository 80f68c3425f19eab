//! Player actions and their history records.
//!
//! Every accepted action is recorded in the game's action history with the
//! player who took it and a sequence number. Records double as the source
//! for the human-readable move descriptions handed to the move sink.

use serde::{Deserialize, Serialize};

use super::board::{Player, Quadrant, Rotation};

/// An action a player can submit to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    /// Place a marble on an empty cell.
    Place { row: usize, col: usize },
    /// Rotate one quadrant a quarter turn.
    Rotate {
        quadrant: Quadrant,
        rotation: Rotation,
    },
    /// Decline to rotate. Only legal when some quadrant is symmetric.
    Skip,
}

impl GameAction {
    /// Human-readable description of `player` taking this action.
    ///
    /// Coordinates are 1-based, matching what players see on screen.
    #[must_use]
    pub fn describe(&self, player: Player) -> String {
        match self {
            GameAction::Place { row, col } => {
                format!("{player} placed a marble at ({}, {})", row + 1, col + 1)
            }
            GameAction::Rotate { quadrant, rotation } => {
                format!("{player} rotated the {quadrant} quadrant {rotation}")
            }
            GameAction::Skip => format!("{player} skipped rotation"),
        }
    }
}

/// A recorded action with metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took the action.
    pub player: Player,
    /// The action taken.
    pub action: GameAction,
    /// Position in the current game's action sequence.
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: Player, action: GameAction, sequence: u32) -> Self {
        Self {
            player,
            action,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_place_is_one_based() {
        let action = GameAction::Place { row: 0, col: 1 };
        assert_eq!(
            action.describe(Player::Black),
            "Player 1 (Black) placed a marble at (1, 2)"
        );
    }

    #[test]
    fn test_describe_rotate() {
        let action = GameAction::Rotate {
            quadrant: Quadrant::TopLeft,
            rotation: Rotation::CounterClockwise,
        };
        assert_eq!(
            action.describe(Player::White),
            "Player 2 (White) rotated the Top-Left quadrant counter-clockwise"
        );
    }

    #[test]
    fn test_describe_skip() {
        assert_eq!(
            GameAction::Skip.describe(Player::White),
            "Player 2 (White) skipped rotation"
        );
    }

    #[test]
    fn test_record_roundtrips_through_json() {
        let record = ActionRecord::new(Player::Black, GameAction::Place { row: 3, col: 5 }, 7);

        let json = serde_json::to_string(&record).unwrap();
        let decoded: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, record);
    }
}
