//! # Chip Tracker
//!
//! A shared chip-count and betting ledger for in-person poker games played
//! with real cards. The crate coordinates players, seating order, blinds,
//! the pot, and betting rounds, and keeps an append-only activity log of
//! everything that happens at the table.
//!
//! It is deliberately *not* a poker engine: no cards are dealt, no hands
//! are evaluated, and no winners are determined. A human runs the game and
//! tells the table who to pay; the table keeps everyone's chip counts
//! honest. Bet legality (minimum raises and the like) and turn order are
//! likewise left to the people at the table.
//!
//! ## Architecture
//!
//! - [`game`]: the player ledger entity, betting rounds, activity log
//!   entries, and error types.
//! - [`table`]: the [`Table`] coordinator owning players, seating, pot,
//!   and rounds; [`TableSession`] wraps it with best-effort persistence.
//! - [`store`]: collaborator interfaces for a durable player registry and
//!   an activity log mirror, plus an in-memory implementation.
//!
//! All mutations are synchronous and assume a single writer; a transport
//! layer serializes calls, then broadcasts [`Table::snapshot`] to clients.
//!
//! ## Example
//!
//! ```
//! use chip_tracker::{Blinds, Player, Table, Username};
//!
//! let mut table = Table::new();
//! table.add_player(Player::new(Username::new("alice"), 1000)).unwrap();
//! table.add_player(Player::new(Username::new("bob"), 1000)).unwrap();
//!
//! table.start_hand(Blinds { small: 5, big: 10 }).unwrap();
//! table.place_bet(&Username::new("alice"), 25).unwrap();
//!
//! // A human decided alice won; pay her the pot.
//! let pot = table.pot();
//! table.distribute_pot(&Username::new("alice"), pot).unwrap();
//! table.end_hand().unwrap();
//! ```

/// Core game model: players, rounds, log entries, errors.
pub mod game;
pub use game::{
    Activity, BlindKind, Blinds, Chips, LogEntry, Player, Round, TableError, TableResult, UNSEATED,
    Username,
    constants::{self, DEFAULT_BIG_BLIND, DEFAULT_SMALL_BLIND, DEFAULT_STARTING_STACK},
};

/// Table coordination and the store-backed session.
pub mod table;
pub use table::{Table, TableConfig, TableSession, TableSnapshot};

/// Storage collaborator interfaces.
pub mod store;
pub use store::{LogSink, MemoryStore, PlayerRegistry, StoreError, StoreResult};
