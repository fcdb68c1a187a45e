use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::constants;

/// Type alias for whole chips. All bets and player stacks are represented
/// as whole chips (there's no point arguing over fractions of a chip).
///
/// If a single stack ever surpasses ~4.2 billion chips, then we may
/// have a problem.
pub type Chips = u32;

/// Seat position of a player that isn't seated at the table.
pub const UNSEATED: i32 = -1;

/// A participant's display name. Acts as the primary key for players,
/// case-sensitive and immutable once created. Construction normalizes
/// whitespace and truncates over-long input.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Username(String);

impl Username {
    pub fn new(s: &str) -> Self {
        let mut username: String = s
            .chars()
            .map(|c| if c.is_ascii_whitespace() { '_' } else { c })
            .collect();
        username.truncate(constants::MAX_USER_INPUT_LENGTH / 2);
        Self(username)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<'de> Deserialize<'de> for Username {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::new(&s))
    }
}

impl From<String> for Username {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

impl From<&str> for Username {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Blinds {
    pub small: Chips,
    pub big: Chips,
}

impl Default for Blinds {
    fn default() -> Self {
        Self {
            small: constants::DEFAULT_SMALL_BLIND,
            big: constants::DEFAULT_BIG_BLIND,
        }
    }
}

impl fmt::Display for Blinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = format!("${}/{}", self.small, self.big);
        write!(f, "{repr}")
    }
}

/// One of the four betting rounds within a hand. A hand always starts at
/// pre-flop and only ever advances forward; the river is terminal.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Round {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Round {
    /// The round that follows this one, or `None` at the river.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Preflop => Some(Self::Flop),
            Self::Flop => Some(Self::Turn),
            Self::Turn => Some(Self::River),
            Self::River => None,
        }
    }

    /// Human-facing name used in log messages and state snapshots.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Preflop => "Pre-Flop",
            Self::Flop => "Flop",
            Self::Turn => "Turn",
            Self::River => "River",
        }
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Per-participant chip stack and lifetime statistics.
///
/// A player knows nothing about other players or the table; all of its
/// transitions are small and local. `chips` can never go negative, and
/// `current_bet` never exceeds `total_bet`. The stack carries over between
/// hands; only per-hand fields are cleared by [`Player::start_new_hand`].
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Player {
    pub name: Username,
    pub chips: Chips,
    /// Amount committed in the active betting round.
    pub current_bet: Chips,
    /// Cumulative commitment across the whole hand.
    pub total_bet: Chips,
    pub folded: bool,
    /// Lifetime gross winnings.
    pub total_won: Chips,
    /// Lifetime gross spend. Incremented at bet time, not at hand
    /// resolution, so it counts chips put in the middle regardless of the
    /// hand's eventual outcome.
    pub total_lost: Chips,
    pub hands_played: u32,
    pub hands_won: u32,
    /// Index into the table's seating order, [`UNSEATED`] when not seated.
    pub seat_position: i32,
    /// Whether the player is seated in the current session.
    pub is_active: bool,
}

impl Player {
    #[must_use]
    pub fn new(name: Username, chips: Chips) -> Self {
        Self {
            name,
            chips,
            current_bet: 0,
            total_bet: 0,
            folded: false,
            total_won: 0,
            total_lost: 0,
            hands_played: 0,
            hands_won: 0,
            seat_position: UNSEATED,
            is_active: false,
        }
    }

    /// Move `amount` from the stack into the current bet. Fails (returning
    /// `false`, touching nothing) on a zero amount or insufficient funds.
    pub fn place_bet(&mut self, amount: Chips) -> bool {
        if amount == 0 || amount > self.chips {
            return false;
        }
        self.chips -= amount;
        self.current_bet += amount;
        self.total_bet += amount;
        self.total_lost += amount;
        true
    }

    /// Credit winnings to the stack. The caller is responsible for not
    /// awarding more than the pot holds; there is no upper bound here.
    pub fn collect_winnings(&mut self, amount: Chips) -> bool {
        if amount == 0 {
            return false;
        }
        self.chips += amount;
        self.total_won += amount;
        self.hands_won += 1;
        true
    }

    pub fn fold(&mut self) {
        self.folded = true;
    }

    pub fn unfold(&mut self) {
        self.folded = false;
    }

    /// Zero the current bet at the start of a new betting round. The
    /// whole-hand commitment (`total_bet`) is untouched.
    pub fn reset_current_bet(&mut self) {
        self.current_bet = 0;
    }

    /// Reset per-hand fields for a fresh hand. The chip stack carries over.
    pub fn start_new_hand(&mut self) {
        self.current_bet = 0;
        self.total_bet = 0;
        self.folded = false;
        self.hands_played += 1;
    }

    /// Administrative stack correction. A delta that would push the stack
    /// below zero or past `Chips::MAX` is clamped to the representable
    /// range rather than rejected. Returns the delta actually applied.
    pub fn adjust_chips(&mut self, delta: i64) -> i64 {
        let chips = i64::from(self.chips);
        let applied = delta.clamp(-chips, i64::from(Chips::MAX) - chips);
        self.chips = (chips + applied) as Chips;
        if applied > 0 {
            self.total_won += applied as Chips;
        } else if applied < 0 {
            self.total_lost += (-applied) as Chips;
        }
        applied
    }
}
