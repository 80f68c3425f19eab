//! The game state machine and its error kind.

pub mod error;
pub mod game;

pub use error::IllegalMove;
pub use game::{Game, GameBuilder};
