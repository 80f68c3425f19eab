//! # marble-rotation
//!
//! Rules engine for a two-player marble placement and rotation game on a
//! 6×6 board split into four 3×3 quadrants. A turn is a placement followed
//! by a quarter-turn rotation of one quadrant; the rotation may be skipped
//! only while some quadrant is rotationally symmetric (rotating it would
//! change nothing). Five in a row wins the game, five game wins take the
//! set.
//!
//! ## Design Principles
//!
//! 1. **One source of truth**: all game data lives in a single `GameState`
//!    value owned by the `Game` controller. No ambient globals.
//!
//! 2. **Commands over callbacks**: the presentation layer drives the engine
//!    through explicit methods (`apply_place`, `apply_rotate`, `apply_skip`,
//!    `undo`, resets) that return the resulting snapshot or `IllegalMove`.
//!
//! 3. **Cheap snapshots**: state clones are value snapshots (the board is
//!    a plain array, the action history a persistent vector), so the undo
//!    stack never shares mutable data with the live state.
//!
//! 4. **Fire-and-forget collaborators**: persistence and move logging sit
//!    behind injected traits, run after each successful transition, and
//!    can fail without touching the engine's consistency.
//!
//! ## Modules
//!
//! - `core`: matrix transforms, board, quadrants, actions, game state
//! - `rules`: line-of-five detection and the mandatory-rotation check
//! - `engine`: the phase state machine, undo history, `IllegalMove`
//! - `adapters`: snapshot store and move sink seams plus in-process impls

pub mod adapters;
pub mod core;
pub mod engine;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    ActionRecord, Board, Cell, GameAction, GameState, Phase, Player, Quadrant, Rotation,
    BOARD_SIZE, QUADRANT_SIZE, SET_TARGET,
};

pub use crate::rules::{
    has_any_line_of_five, has_line_of_five, has_rotational_symmetry, is_rotation_mandatory,
    WIN_LENGTH,
};

pub use crate::engine::{Game, GameBuilder, IllegalMove};

pub use crate::adapters::{
    ChannelSink, MemoryStore, MoveSink, NullSink, SnapshotStore, StoreError, SNAPSHOT_KEY,
};
