//! Full-state table snapshot.

use serde::{Deserialize, Serialize};

use crate::game::entities::{Chips, Player, Round, Username};
use crate::game::log::LogEntry;

/// A consistent, read-only view of the whole table, taken after a mutation
/// completes. This is what a transport layer broadcasts to connected
/// clients, and what a storage layer persists for recovery; it is also the
/// input to [`Table::restore`](crate::table::Table::restore) at process
/// startup.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TableSnapshot {
    /// Player summaries in seating order.
    pub players: Vec<Player>,
    pub seating_order: Vec<Username>,
    pub active: bool,
    pub pot: Chips,
    pub activity_log: Vec<LogEntry>,
    pub current_round: Round,
    /// Display name of `current_round`, for clients that render it as-is.
    pub round_name: String,
    pub small_blind: Chips,
    pub big_blind: Chips,
    pub dealer_index: usize,
}
