//! The game state value.
//!
//! `GameState` is the single source of truth: the board, whose turn it is,
//! the phase flags, both scores, and the per-game action history. It is a
//! plain value; cloning it yields a detached snapshot, which is what the
//! undo stack and the persistence store hold. The action history is a
//! persistent vector, so clones share structure and stay cheap no matter
//! how long a game runs.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{ActionRecord, GameAction};
use super::board::{Board, Player};

/// Game wins needed to take the set.
pub const SET_TARGET: u32 = 5;

/// The engine's phase, derived from the state flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// The current player places a marble.
    Placing,
    /// The current player rotates a quadrant, or skips when allowed.
    AwaitingRotation,
    /// The set is decided; no further placements or rotations.
    GameWon,
}

/// Complete game state.
///
/// Invariants:
/// - exactly `moves_made` cells are occupied outside of rotation;
/// - `rotation_mandatory` is meaningful only while `awaiting_rotation` is
///   true and is recomputed after every completed placement;
/// - a non-`None` `set_winner` is terminal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The playing surface.
    pub board: Board,
    /// The player whose action the engine is waiting for.
    pub current_player: Player,
    /// Whether the pending rotation may not be skipped.
    pub rotation_mandatory: bool,
    /// Marbles placed in the current game.
    pub moves_made: u32,
    /// Games won by Black in this set.
    pub black_score: u32,
    /// Games won by White in this set.
    pub white_score: u32,
    /// Winner of the set, once decided.
    pub set_winner: Option<Player>,
    /// True strictly between a non-terminal placement and the following
    /// rotation or skip.
    pub awaiting_rotation: bool,
    /// Accepted actions of the current game, oldest first.
    pub action_history: Vector<ActionRecord>,
}

impl GameState {
    /// Fresh state: empty board, Black to place, zero scores.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::Black,
            rotation_mandatory: false,
            moves_made: 0,
            black_score: 0,
            white_score: 0,
            set_winner: None,
            awaiting_rotation: false,
            action_history: Vector::new(),
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.set_winner.is_some() {
            Phase::GameWon
        } else if self.awaiting_rotation {
            Phase::AwaitingRotation
        } else {
            Phase::Placing
        }
    }

    /// Game wins for `player` in this set.
    #[must_use]
    pub fn score(&self, player: Player) -> u32 {
        match player {
            Player::Black => self.black_score,
            Player::White => self.white_score,
        }
    }

    /// Credit `player` with a game win.
    pub fn add_score(&mut self, player: Player) {
        match player {
            Player::Black => self.black_score += 1,
            Player::White => self.white_score += 1,
        }
    }

    /// Append an action to the current game's history.
    pub fn record_action(&mut self, player: Player, action: GameAction) {
        let sequence = self.action_history.len() as u32;
        self.action_history
            .push_back(ActionRecord::new(player, action, sequence));
    }

    /// Start a new game on a cleared board. Scores and the set winner are
    /// untouched; Black opens.
    pub fn reset_board(&mut self) {
        self.board = Board::new();
        self.current_player = Player::Black;
        self.rotation_mandatory = false;
        self.moves_made = 0;
        self.awaiting_rotation = false;
        self.action_history = Vector::new();
    }

    /// Reset the whole set: new game plus cleared scores and set winner.
    pub fn reset_set(&mut self) {
        self.reset_board();
        self.black_score = 0;
        self.white_score = 0;
        self.set_winner = None;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_defaults() {
        let state = GameState::new();

        assert_eq!(state.current_player, Player::Black);
        assert_eq!(state.phase(), Phase::Placing);
        assert_eq!(state.moves_made, 0);
        assert_eq!(state.score(Player::Black), 0);
        assert_eq!(state.score(Player::White), 0);
        assert_eq!(state.set_winner, None);
        assert!(state.action_history.is_empty());
    }

    #[test]
    fn test_phase_follows_flags() {
        let mut state = GameState::new();
        assert_eq!(state.phase(), Phase::Placing);

        state.awaiting_rotation = true;
        assert_eq!(state.phase(), Phase::AwaitingRotation);

        state.set_winner = Some(Player::White);
        assert_eq!(state.phase(), Phase::GameWon);
    }

    #[test]
    fn test_add_score() {
        let mut state = GameState::new();

        state.add_score(Player::White);
        state.add_score(Player::White);
        state.add_score(Player::Black);

        assert_eq!(state.score(Player::White), 2);
        assert_eq!(state.score(Player::Black), 1);
    }

    #[test]
    fn test_record_action_sequences() {
        let mut state = GameState::new();

        state.record_action(Player::Black, GameAction::Place { row: 0, col: 0 });
        state.record_action(Player::Black, GameAction::Skip);

        assert_eq!(state.action_history.len(), 2);
        assert_eq!(state.action_history[0].sequence, 0);
        assert_eq!(state.action_history[1].sequence, 1);
        assert_eq!(state.action_history[1].action, GameAction::Skip);
    }

    #[test]
    fn test_reset_board_preserves_scores() {
        let mut state = GameState::new();
        state.board.place(1, 1, Player::White).unwrap();
        state.moves_made = 1;
        state.current_player = Player::White;
        state.awaiting_rotation = true;
        state.add_score(Player::Black);
        state.record_action(Player::White, GameAction::Place { row: 1, col: 1 });

        state.reset_board();

        assert_eq!(state.board, Board::new());
        assert_eq!(state.current_player, Player::Black);
        assert_eq!(state.moves_made, 0);
        assert!(!state.awaiting_rotation);
        assert!(state.action_history.is_empty());
        assert_eq!(state.score(Player::Black), 1);
    }

    #[test]
    fn test_reset_set_clears_everything() {
        let mut state = GameState::new();
        state.add_score(Player::Black);
        state.add_score(Player::White);
        state.set_winner = Some(Player::Black);

        state.reset_set();

        assert_eq!(state.score(Player::Black), 0);
        assert_eq!(state.score(Player::White), 0);
        assert_eq!(state.set_winner, None);
        assert_eq!(state.phase(), Phase::Placing);
    }

    #[test]
    fn test_clone_is_a_detached_snapshot() {
        let mut state = GameState::new();
        state.board.place(0, 0, Player::Black).unwrap();
        state.record_action(Player::Black, GameAction::Place { row: 0, col: 0 });

        let snapshot = state.clone();
        state.board.place(5, 5, Player::White).unwrap();
        state.record_action(Player::White, GameAction::Place { row: 5, col: 5 });

        assert_eq!(snapshot.board.occupied_count(), 1);
        assert_eq!(snapshot.action_history.len(), 1);
        assert_eq!(state.board.occupied_count(), 2);
    }

    #[test]
    fn test_state_roundtrips_through_json() {
        let mut state = GameState::new();
        state.board.place(2, 3, Player::Black).unwrap();
        state.moves_made = 1;
        state.record_action(Player::Black, GameAction::Place { row: 2, col: 3 });

        let json = serde_json::to_string(&state).unwrap();
        let decoded: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, state);
    }
}
