//! The turn and phase state machine.
//!
//! `Game` owns the [`GameState`], the undo stack, and the injected
//! collaborators. Each player action is validated against the current
//! phase, applied to completion, and then reported to the snapshot store
//! and the move sink. Collaborator failures are logged and never affect
//! the transition that triggered them.
//!
//! ## Phases
//!
//! `Placing` → (placement) → `AwaitingRotation` → (rotate or skip) →
//! `Placing`, until a score reaches the set target, which is terminal.
//! A placement that ends the current game (win or draw) resets the board
//! and stays in `Placing`.
//!
//! ## Undo
//!
//! A full state snapshot is pushed before every accepted placement,
//! rotation, and skip; undo pops in LIFO order. The stack is cleared
//! whenever the board resets.

use tracing::{debug, warn};

use crate::adapters::{MoveSink, NullSink, SnapshotStore, SNAPSHOT_KEY};
use crate::core::{
    Board, GameAction, GameState, Phase, Player, Quadrant, Rotation, BOARD_SIZE, SET_TARGET,
};
use crate::rules::{has_any_line_of_five, has_line_of_five, is_rotation_mandatory};

use super::error::IllegalMove;

/// Wires a [`Game`] with its collaborators.
///
/// With a snapshot store attached, `build` resumes from the stored state
/// when one exists; an unreadable snapshot is logged and ignored.
pub struct GameBuilder {
    sink: Box<dyn MoveSink>,
    store: Option<Box<dyn SnapshotStore>>,
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            sink: Box::new(NullSink),
            store: None,
        }
    }

    /// Attach a move sink. Defaults to [`NullSink`].
    #[must_use]
    pub fn move_sink(mut self, sink: impl MoveSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Attach a snapshot store. Without one, nothing is persisted.
    #[must_use]
    pub fn snapshot_store(mut self, store: impl SnapshotStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    /// Build the game, resuming from the store when possible.
    #[must_use]
    pub fn build(self) -> Game {
        let state = match self.store.as_deref() {
            Some(store) => match store.load(SNAPSHOT_KEY) {
                Ok(Some(saved)) => {
                    debug!(moves_made = saved.moves_made, "resuming stored game");
                    saved
                }
                Ok(None) => GameState::new(),
                Err(err) => {
                    warn!(error = %err, "ignoring unreadable stored game state");
                    GameState::new()
                }
            },
            None => GameState::new(),
        };

        Game {
            state,
            history: Vec::new(),
            sink: self.sink,
            store: self.store,
        }
    }
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The game controller: state machine, undo history, and collaborators.
pub struct Game {
    state: GameState,
    history: Vec<GameState>,
    sink: Box<dyn MoveSink>,
    store: Option<Box<dyn SnapshotStore>>,
}

impl Game {
    /// A fresh game with no collaborators attached.
    #[must_use]
    pub fn new() -> Self {
        GameBuilder::new().build()
    }

    // === Accessors ===

    /// The full current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    /// The player whose action the engine is waiting for.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.state.current_player
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Game wins for `player` in this set.
    #[must_use]
    pub fn score(&self, player: Player) -> u32 {
        self.state.score(player)
    }

    /// Winner of the set, once decided.
    #[must_use]
    pub fn set_winner(&self) -> Option<Player> {
        self.state.set_winner
    }

    /// Whether a rotation or skip is pending.
    #[must_use]
    pub fn awaiting_rotation(&self) -> bool {
        self.state.awaiting_rotation
    }

    /// Whether the pending rotation may not be skipped.
    #[must_use]
    pub fn rotation_mandatory(&self) -> bool {
        self.state.rotation_mandatory
    }

    /// Marbles placed in the current game.
    #[must_use]
    pub fn moves_made(&self) -> u32 {
        self.state.moves_made
    }

    /// Whether undo would change anything.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    // === Transitions ===

    /// Place a marble for the current player.
    ///
    /// On a completed line of five the player scores and either takes the
    /// set or a fresh game starts; on a full board with no line the game
    /// is drawn and restarts. Otherwise the engine waits for a rotation.
    pub fn apply_place(&mut self, row: usize, col: usize) -> Result<GameState, IllegalMove> {
        self.ensure_placing()?;
        let player = self.state.current_player;

        let snapshot = self.state.clone();
        self.state.board.place(row, col, player)?;
        self.history.push(snapshot);

        self.state.moves_made += 1;
        self.log_action(GameAction::Place { row, col });

        if has_line_of_five(&self.state.board, row, col, player) {
            self.award_game(player);
        } else if self.state.moves_made as usize == BOARD_SIZE * BOARD_SIZE {
            debug!("board full with no line of five, game drawn");
            self.start_new_game();
        } else {
            self.state.rotation_mandatory = is_rotation_mandatory(&self.state.board);
            self.state.awaiting_rotation = true;
        }

        self.persist();
        Ok(self.state.clone())
    }

    /// Rotate a quadrant for the current player.
    ///
    /// The whole board is rescanned afterwards, since rotation can
    /// assemble a line far from the last placement. Without a win, play
    /// passes to the opponent.
    pub fn apply_rotate(
        &mut self,
        quadrant: Quadrant,
        rotation: Rotation,
    ) -> Result<GameState, IllegalMove> {
        self.ensure_awaiting_rotation()?;
        let player = self.state.current_player;

        self.history.push(self.state.clone());
        self.state.board.rotate_quadrant(quadrant, rotation);
        self.log_action(GameAction::Rotate { quadrant, rotation });

        self.state.awaiting_rotation = false;
        self.state.rotation_mandatory = false;

        if has_any_line_of_five(&self.state.board, player) {
            self.award_game(player);
        } else {
            self.state.current_player = player.opponent();
        }

        self.persist();
        Ok(self.state.clone())
    }

    /// Skip the pending rotation.
    ///
    /// Legal only while a rotation is pending and some quadrant is
    /// symmetric. The board does not change, so no win check runs.
    pub fn apply_skip(&mut self) -> Result<GameState, IllegalMove> {
        self.ensure_awaiting_rotation()?;
        if self.state.rotation_mandatory {
            return Err(IllegalMove::RotationMandatory);
        }
        let player = self.state.current_player;

        self.history.push(self.state.clone());
        self.log_action(GameAction::Skip);

        self.state.awaiting_rotation = false;
        self.state.current_player = player.opponent();

        self.persist();
        Ok(self.state.clone())
    }

    /// Restore the state from before the most recent action.
    ///
    /// A no-op when there is nothing to undo.
    pub fn undo(&mut self) -> GameState {
        if let Some(previous) = self.history.pop() {
            self.state = previous;
            self.persist();
        }
        self.state.clone()
    }

    /// Abandon the current game: cleared board, Black to open. Scores and
    /// the set winner are preserved.
    pub fn reset_game(&mut self) -> GameState {
        self.state.reset_board();
        self.history.clear();
        self.persist();
        self.state.clone()
    }

    /// Restart the set: cleared board, scores, and set winner.
    pub fn reset_set(&mut self) -> GameState {
        self.state.reset_set();
        self.history.clear();
        self.persist();
        self.state.clone()
    }

    // === Internals ===

    fn ensure_placing(&self) -> Result<(), IllegalMove> {
        match self.state.phase() {
            Phase::Placing => Ok(()),
            Phase::AwaitingRotation => Err(IllegalMove::PlacementNotAllowed),
            Phase::GameWon => Err(IllegalMove::GameOver),
        }
    }

    fn ensure_awaiting_rotation(&self) -> Result<(), IllegalMove> {
        match self.state.phase() {
            Phase::AwaitingRotation => Ok(()),
            Phase::Placing => Err(IllegalMove::RotationNotAllowed),
            Phase::GameWon => Err(IllegalMove::GameOver),
        }
    }

    /// Record the action in the state and hand its description to the sink.
    fn log_action(&mut self, action: GameAction) {
        let player = self.state.current_player;
        self.state.record_action(player, action);
        self.sink.log_move(&action.describe(player));
    }

    /// Score a game win and evaluate the set.
    ///
    /// At the set target the state becomes terminal with the final board
    /// left in place; otherwise a fresh game starts with scores kept.
    fn award_game(&mut self, winner: Player) {
        self.state.add_score(winner);
        debug!(player = %winner, score = self.state.score(winner), "game won");

        if self.state.score(winner) >= SET_TARGET {
            self.state.set_winner = Some(winner);
            self.state.awaiting_rotation = false;
            self.state.rotation_mandatory = false;
            self.history.clear();
        } else {
            self.start_new_game();
        }
    }

    fn start_new_game(&mut self) {
        self.state.reset_board();
        self.history.clear();
    }

    fn persist(&mut self) {
        if let Some(store) = self.store.as_mut() {
            if let Err(err) = store.save(SNAPSHOT_KEY, &self.state) {
                warn!(error = %err, "failed to persist game state");
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
