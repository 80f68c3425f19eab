//! Collaborator seams: snapshot persistence and move logging.
//!
//! The engine only knows the traits. Implementations here cover in-process
//! use and tests; embedders supply their own for real storage or
//! transport.

pub mod move_log;
pub mod persistence;

pub use move_log::{ChannelSink, MoveSink, NullSink};
pub use persistence::{MemoryStore, SnapshotStore, StoreError, SNAPSHOT_KEY};
