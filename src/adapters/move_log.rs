//! Move logging.
//!
//! After every accepted action the engine emits one human-readable
//! description ("Player 1 (Black) placed a marble at (1, 2)") to a sink.
//! Delivery is fire-and-forget: the engine never waits and a failed
//! delivery is logged, not surfaced.

use std::sync::mpsc::{self, Sender};
use std::thread;

use tracing::warn;

/// Receives one description per accepted action.
///
/// Implementations must not block: the engine calls this inside every
/// transition.
pub trait MoveSink: Send {
    fn log_move(&self, description: &str);
}

/// Discards every description.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl MoveSink for NullSink {
    fn log_move(&self, _description: &str) {}
}

/// Synchronous hand-off into a channel the embedder drains itself.
impl MoveSink for Sender<String> {
    fn log_move(&self, description: &str) {
        if self.send(description.to_string()).is_err() {
            warn!("move log receiver is gone, dropping description");
        }
    }
}

/// Forwards descriptions to a worker thread that delivers them.
///
/// `log_move` only enqueues, so slow or failing delivery (say, a remote
/// logging endpoint) never stalls a game transition.
pub struct ChannelSink {
    tx: Sender<String>,
}

impl ChannelSink {
    /// Spawn the delivery worker. It runs `deliver` for each description
    /// until the sink is dropped.
    #[must_use]
    pub fn spawn(mut deliver: impl FnMut(String) + Send + 'static) -> Self {
        let (tx, rx) = mpsc::channel::<String>();
        thread::spawn(move || {
            for description in rx {
                deliver(description);
            }
        });
        Self { tx }
    }
}

impl MoveSink for ChannelSink {
    fn log_move(&self, description: &str) {
        if self.tx.send(description.to_string()).is_err() {
            warn!("move log worker is gone, dropping description");
        }
    }
}
