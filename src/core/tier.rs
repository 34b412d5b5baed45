//! Letter tiers
//!
//! A tier is a rarity bucket from 1 to 6. Higher tiers unlock more letters.

use std::fmt;

/// Lowest tier in the game
pub const MIN_TIER: u8 = 1;

/// Highest tier in the game
pub const MAX_TIER: u8 = 6;

/// A validated tier number in `MIN_TIER..=MAX_TIER`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tier(u8);

/// Error type for out-of-range tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierError {
    OutOfRange(u8),
}

impl fmt::Display for TierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange(n) => {
                write!(f, "Tier must be between {MIN_TIER} and {MAX_TIER}, got {n}")
            }
        }
    }
}

impl std::error::Error for TierError {}

impl Tier {
    /// Create a tier from its number
    ///
    /// # Errors
    /// Returns `TierError::OutOfRange` if `n` is outside `MIN_TIER..=MAX_TIER`.
    ///
    /// # Examples
    /// ```
    /// use tier_optimizer::core::Tier;
    ///
    /// assert_eq!(Tier::new(3).unwrap().get(), 3);
    /// assert!(Tier::new(0).is_err());
    /// assert!(Tier::new(7).is_err());
    /// ```
    pub const fn new(n: u8) -> Result<Self, TierError> {
        if n < MIN_TIER || n > MAX_TIER {
            return Err(TierError::OutOfRange(n));
        }
        Ok(Self(n))
    }

    /// The tier number
    #[inline]
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Every tier, lowest first
    pub fn all() -> impl Iterator<Item = Self> {
        (MIN_TIER..=MAX_TIER).map(Self)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
