//! Snapshot persistence.
//!
//! The engine saves the full state after every successful transition under
//! a fixed key and resumes from it at startup. Stores hold structured
//! (JSON) data; what sits behind the trait is the embedder's business.
//! Store failures are logged by the engine and never surface to the
//! player.

use std::sync::{Arc, Mutex};

use rustc_hash::FxHashMap;

use crate::core::GameState;

/// The fixed key the engine saves and resumes under.
pub const SNAPSHOT_KEY: &str = "marble-rotation-game-state";

/// Errors a store implementation may produce.
pub type StoreError = Box<dyn std::error::Error + Send + Sync>;

/// Keyed persistence for full game snapshots.
pub trait SnapshotStore: Send {
    /// Persist `state` under `key`, replacing any previous snapshot.
    fn save(&mut self, key: &str, state: &GameState) -> Result<(), StoreError>;

    /// Fetch the snapshot under `key`; `Ok(None)` when there is none.
    fn load(&self, key: &str) -> Result<Option<GameState>, StoreError>;
}

/// In-process store keeping JSON-encoded snapshots in a map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a snapshot exists under `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl SnapshotStore for MemoryStore {
    fn save(&mut self, key: &str, state: &GameState) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(state)?;
        self.entries.insert(key.to_string(), encoded);
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<GameState>, StoreError> {
        match self.entries.get(key) {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }
}

/// Shared handle so an embedder can keep inspecting the store after
/// handing it to the engine.
impl SnapshotStore for Arc<Mutex<MemoryStore>> {
    fn save(&mut self, key: &str, state: &GameState) -> Result<(), StoreError> {
        let mut guard = self.lock().map_err(|_| "snapshot store mutex poisoned")?;
        guard.save(key, state)
    }

    fn load(&self, key: &str) -> Result<Option<GameState>, StoreError> {
        let guard = self.lock().map_err(|_| "snapshot store mutex poisoned")?;
        guard.load(key)
    }
}
