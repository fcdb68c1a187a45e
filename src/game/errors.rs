//! Table error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entities::Chips;

/// Errors that can occur during table operations.
///
/// Every variant is an expected, handleable outcome that a transport layer
/// surfaces to the end user as a rejected action. None of them leaves the
/// table in a partially mutated state.
#[derive(Clone, Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum TableError {
    #[error("need 2+ players")]
    NotEnoughPlayers,
    #[error("player already seated")]
    AlreadySeated,
    #[error("player does not exist")]
    UnknownPlayer,
    #[error("no hand in progress")]
    HandNotActive,
    #[error("player has folded")]
    PlayerFolded,
    #[error("need ${required} but only have ${available}")]
    InsufficientChips { available: Chips, required: Chips },
    #[error("invalid amount: ${0}")]
    InvalidAmount(Chips),
    #[error("new order must contain exactly the seated players")]
    NotAPermutation,
    #[error("already at the river")]
    AtFinalRound,
}

/// Result type for table operations.
pub type TableResult<T> = Result<T, TableError>;
