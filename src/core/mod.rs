//! Core value types: matrix transforms, the board, actions, and game state.
//!
//! Everything in this module is a plain value with no collaborators; the
//! state machine in `engine` owns the mutation policy.

pub mod action;
pub mod board;
pub mod matrix;
pub mod state;

pub use action::{ActionRecord, GameAction};
pub use board::{Board, Cell, Player, Quadrant, Rotation, BOARD_SIZE, QUADRANT_SIZE};
pub use state::{GameState, Phase, SET_TARGET};
