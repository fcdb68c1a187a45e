//! Core game model: the player ledger entity, betting rounds, activity log
//! entries, and the errors table operations can produce.

pub mod constants;
pub mod entities;
pub mod errors;
pub mod log;

pub use entities::{Blinds, Chips, Player, Round, UNSEATED, Username};
pub use errors::{TableError, TableResult};
pub use self::log::{Activity, BlindKind, LogEntry};
