//! Store-backed table session.
//!
//! [`TableSession`] wires a [`Table`] to its storage collaborators. Every
//! mutating call delegates to the coordinator and then, on success only,
//! persists the players the operation touched and mirrors newly appended
//! activity entries. Persistence is best-effort: a store failure is logged
//! and the in-memory mutation stands (the running session is the source of
//! truth, storage is a recovery aid).

use std::sync::Arc;

use log::{info, warn};

use crate::game::entities::{Blinds, Chips, Player, Round, Username};
use crate::game::errors::TableResult;
use crate::store::{LogSink, PlayerRegistry};

use super::config::TableConfig;
use super::coordinator::Table;
use super::snapshot::TableSnapshot;

pub struct TableSession {
    table: Table,
    config: TableConfig,
    registry: Arc<dyn PlayerRegistry>,
    sink: Arc<dyn LogSink>,
    /// High-water mark of activity entries already mirrored to the sink.
    mirrored: usize,
}

impl TableSession {
    /// Wrap a coordinator (fresh, or restored from a snapshot at startup)
    /// with its storage collaborators. Entries already present in the
    /// table's log are assumed to have been mirrored previously.
    pub fn new(
        table: Table,
        config: TableConfig,
        registry: Arc<dyn PlayerRegistry>,
        sink: Arc<dyn LogSink>,
    ) -> Self {
        let mirrored = table.activity_log().len();
        Self {
            table,
            config,
            registry,
            sink,
            mirrored,
        }
    }

    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    #[must_use]
    pub fn snapshot(&self) -> TableSnapshot {
        self.table.snapshot()
    }

    /// Seat a participant, hydrating chips and lifetime stats from the
    /// registry when a record exists, otherwise starting them on the
    /// configured stack. Per-hand fields always start fresh.
    pub fn seat_player(&mut self, name: &Username) -> TableResult<()> {
        let stored = match self.registry.load(name) {
            Ok(stored) => stored,
            Err(err) => {
                warn!("failed to read registry record for {name}: {err}");
                None
            }
        };

        let mut player = Player::new(name.clone(), self.config.starting_stack);
        if let Some(stored) = stored {
            player.chips = stored.chips;
            player.total_won = stored.total_won;
            player.total_lost = stored.total_lost;
            player.hands_played = stored.hands_played;
            player.hands_won = stored.hands_won;
        }

        self.table.add_player(player)?;
        info!("{name} seated");
        self.persist_player(name);
        self.mirror_log();
        Ok(())
    }

    /// Remove a participant from the table, writing their final state back
    /// to the registry.
    pub fn remove_player(&mut self, name: &Username) -> TableResult<()> {
        let player = self.table.remove_player(name)?;
        info!("{name} left the table");
        if let Err(err) = self.registry.save(&player) {
            warn!("failed to persist departing player {name}: {err}");
        }
        self.mirror_log();
        Ok(())
    }

    /// Erase a participant entirely: unseat them if seated, then drop
    /// their registry record.
    pub fn delete_player(&mut self, name: &Username) {
        if self.table.remove_player(name).is_ok() {
            self.mirror_log();
        }
        if let Err(err) = self.registry.delete(name) {
            warn!("failed to delete registry record for {name}: {err}");
        }
    }

    pub fn reorder_players(&mut self, new_order: &[Username]) -> TableResult<()> {
        self.table.reorder_players(new_order)?;
        self.persist_all();
        Ok(())
    }

    pub fn start_hand(&mut self, blinds: Blinds) -> TableResult<()> {
        self.table.start_hand(blinds)?;
        info!("hand started at {blinds}");
        // The coordinator cleared the per-hand log.
        self.mirrored = 0;
        self.persist_all();
        self.mirror_log();
        Ok(())
    }

    pub fn post_blinds(&mut self) -> TableResult<()> {
        self.table.post_blinds()?;
        self.persist_all();
        self.mirror_log();
        Ok(())
    }

    pub fn place_bet(&mut self, name: &Username, amount: Chips) -> TableResult<()> {
        self.table.place_bet(name, amount)?;
        self.persist_player(name);
        self.mirror_log();
        Ok(())
    }

    pub fn fold_player(&mut self, name: &Username) -> TableResult<()> {
        self.table.fold_player(name)?;
        self.persist_player(name);
        self.mirror_log();
        Ok(())
    }

    pub fn unfold_player(&mut self, name: &Username) -> TableResult<()> {
        self.table.unfold_player(name)?;
        self.persist_player(name);
        self.mirror_log();
        Ok(())
    }

    pub fn next_round(&mut self) -> TableResult<Round> {
        let round = self.table.next_round()?;
        self.persist_all();
        self.mirror_log();
        Ok(round)
    }

    pub fn distribute_pot(&mut self, name: &Username, amount: Chips) -> TableResult<()> {
        self.table.distribute_pot(name, amount)?;
        self.persist_player(name);
        self.mirror_log();
        Ok(())
    }

    pub fn end_hand(&mut self) -> TableResult<()> {
        self.table.end_hand()?;
        info!("hand ended with ${} left in the pot", self.table.pot());
        self.mirror_log();
        Ok(())
    }

    /// Administrative stack correction. Returns the delta actually applied
    /// after clamping at a zero stack.
    pub fn adjust_chips(&mut self, name: &Username, delta: i64) -> TableResult<i64> {
        let applied = self.table.adjust_chips(name, delta)?;
        self.persist_player(name);
        Ok(applied)
    }

    fn persist_player(&self, name: &Username) {
        if let Some(player) = self.table.player(name) {
            if let Err(err) = self.registry.save(player) {
                warn!("failed to persist player {name}: {err}");
            }
        }
    }

    fn persist_all(&self) {
        for name in self.table.seating_order() {
            if let Some(player) = self.table.player(name) {
                if let Err(err) = self.registry.save(player) {
                    warn!("failed to persist player {name}: {err}");
                }
            }
        }
    }

    /// Mirror entries appended since the last flush. The watermark also
    /// survives a log reset, in case a caller drives the coordinator's
    /// `start_hand` directly.
    fn mirror_log(&mut self) {
        if self.table.activity_log().len() < self.mirrored {
            self.mirrored = 0;
        }
        for entry in &self.table.activity_log()[self.mirrored..] {
            if let Err(err) = self.sink.append(entry) {
                warn!("failed to mirror activity entry: {err}");
            }
        }
        self.mirrored = self.table.activity_log().len();
    }
}
