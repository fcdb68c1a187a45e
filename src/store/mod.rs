//! Storage collaborator interfaces.
//!
//! The table itself is the source of truth for a running session; durable
//! storage is a recovery aid consulted only at process startup. These
//! traits abstract the two collaborators the coordinator's environment
//! provides: a player registry keyed by name (chips and lifetime stats
//! survive restarts) and an optional mirror of the activity log. They are
//! synchronous because the core is synchronous; async backends adapt
//! behind them.

pub mod memory;

pub use memory::MemoryStore;

use thiserror::Error;

use crate::game::entities::{Player, Username};
use crate::game::log::LogEntry;

/// Storage errors.
///
/// A store failure is never fatal to the session: callers persist
/// best-effort and keep the in-memory state authoritative.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend failure: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    pub fn backend(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Backend(err.into())
    }
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Durable registry of players keyed by name.
pub trait PlayerRegistry: Send + Sync {
    /// Read the stored record for a player, if one exists.
    fn load(&self, name: &Username) -> StoreResult<Option<Player>>;

    /// Write a player's current state back to storage.
    fn save(&self, player: &Player) -> StoreResult<()>;

    /// Remove a player's record entirely.
    fn delete(&self, name: &Username) -> StoreResult<()>;
}

/// Durable mirror of appended activity entries.
pub trait LogSink: Send + Sync {
    fn append(&self, entry: &LogEntry) -> StoreResult<()>;
}
