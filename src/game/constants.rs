//! Table-wide defaults and limits.

use super::entities::Chips;

/// Maximum length of raw user input accepted anywhere in the crate.
pub const MAX_USER_INPUT_LENGTH: usize = 32;

/// Stack handed to a participant the first time they register.
pub const DEFAULT_STARTING_STACK: Chips = 1000;

pub const DEFAULT_SMALL_BLIND: Chips = 5;
pub const DEFAULT_BIG_BLIND: Chips = 10;
