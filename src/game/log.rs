//! The append-only activity log.
//!
//! Every table mutation appends one entry. Entries are immutable once
//! appended and are kept for audit/display only; they are never read back
//! to reconstruct state. Each log kind is its own variant carrying exactly
//! the fields relevant to that kind.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::entities::{Chips, Round, Username};

/// Which of the two forced bets a blind entry refers to.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlindKind {
    Small,
    Big,
}

impl fmt::Display for BlindKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Small => write!(f, "small"),
            Self::Big => write!(f, "big"),
        }
    }
}

/// A single table activity. The serde tag matches the log kind names a
/// transport layer exposes to clients.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Activity {
    System {
        message: String,
    },
    GameStart,
    Blinds {
        username: Username,
        amount: Chips,
        blind: BlindKind,
    },
    Bet {
        username: Username,
        amount: Chips,
        round: Round,
        /// Running pot total after the bet.
        pot: Chips,
    },
    Fold {
        username: Username,
        folded: bool,
    },
    RoundChange {
        round: Round,
    },
    Distribution {
        username: Username,
        amount: Chips,
        /// Pot remaining after the distribution.
        remaining: Chips,
    },
    GameEnd {
        pot: Chips,
    },
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::System { message } => message.clone(),
            Self::GameStart => "Game started".to_string(),
            Self::Blinds {
                username,
                amount,
                blind,
            } => format!("{username} posted {blind} blind: ${amount}"),
            Self::Bet {
                username,
                amount,
                round,
                pot,
            } => format!("{username} bet ${amount} in {round}. Total pot: ${pot}."),
            Self::Fold {
                username,
                folded: true,
            } => format!("{username} folded"),
            Self::Fold {
                username,
                folded: false,
            } => format!("{username} returned to game"),
            Self::RoundChange { round } => format!("Round changed to {round}"),
            Self::Distribution {
                username,
                amount,
                remaining,
            } => format!("{username} received ${amount} from the pot. Remaining pot: ${remaining}"),
            Self::GameEnd { pot } => format!("Game ended with pot: ${pot}"),
        };
        write!(f, "{repr}")
    }
}

/// A timestamped, immutable log entry.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub activity: Activity,
}

impl LogEntry {
    /// Stamp an activity with the current time.
    #[must_use]
    pub fn now(activity: Activity) -> Self {
        Self {
            timestamp: Utc::now(),
            activity,
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.timestamp.to_rfc3339(), self.activity)
    }
}
