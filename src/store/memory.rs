//! In-memory store implementation.
//!
//! Useful for tests and for deployments that don't need durability. The
//! mutexes exist only because the store traits take `&self` so that one
//! store can sit behind an `Arc` shared with a transport layer; a poisoned
//! lock is recovered rather than propagated since the maps stay usable.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::game::entities::{Player, Username};
use crate::game::log::LogEntry;

use super::{LogSink, PlayerRegistry, StoreResult};

#[derive(Debug, Default)]
pub struct MemoryStore {
    players: Mutex<HashMap<Username, Player>>,
    entries: Mutex<Vec<LogEntry>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of mirrored log entries.
    #[must_use]
    pub fn num_entries(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Stored record for a player, if any.
    #[must_use]
    pub fn stored_player(&self, name: &Username) -> Option<Player> {
        self.players
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(name)
            .cloned()
    }
}

impl PlayerRegistry for MemoryStore {
    fn load(&self, name: &Username) -> StoreResult<Option<Player>> {
        Ok(self
            .players
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(name)
            .cloned())
    }

    fn save(&self, player: &Player) -> StoreResult<()> {
        self.players
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(player.name.clone(), player.clone());
        Ok(())
    }

    fn delete(&self, name: &Username) -> StoreResult<()> {
        self.players
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(name);
        Ok(())
    }
}

impl LogSink for MemoryStore {
    fn append(&self, entry: &LogEntry) -> StoreResult<()> {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(entry.clone());
        Ok(())
    }
}
