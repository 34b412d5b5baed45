//! Core domain types for the letter-tier game
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are immutable once built and safe to share across threads.

mod dictionary;
mod letter;
mod pool;
mod tier;

pub use dictionary::Dictionary;
pub use letter::{Letter, LetterTable, STANDARD_LETTERS};
pub use pool::Pool;
pub use tier::{MAX_TIER, MIN_TIER, Tier, TierError};

/// Longest candidate sequence the game allows
pub const MAX_SEQUENCE_LEN: usize = 6;
