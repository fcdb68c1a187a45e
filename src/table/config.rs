//! Table configuration models.

use serde::{Deserialize, Serialize};

use crate::game::constants;
use crate::game::entities::{Blinds, Chips};

/// Table configuration.
///
/// `blinds.big >= blinds.small` is conventional and deliberately not
/// enforced here or anywhere else in the crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Stack handed to a participant the first time they register.
    pub starting_stack: Chips,

    /// Default blinds for a new hand. Callers may override per hand.
    pub blinds: Blinds,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            starting_stack: constants::DEFAULT_STARTING_STACK,
            blinds: Blinds::default(),
        }
    }
}

impl TableConfig {
    /// Validate configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.starting_stack == 0 {
            return Err("Starting stack must be positive".to_string());
        }

        if self.blinds.small == 0 || self.blinds.big == 0 {
            return Err("Blinds must be positive".to_string());
        }

        Ok(())
    }
}
