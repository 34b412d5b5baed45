//! Letter pools
//!
//! The ordered set of letters a sequence may draw from at a given tier.

use super::letter::Letter;

/// Letters available at a tier, in enumeration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    letters: Vec<Letter>,
}

impl Pool {
    #[must_use]
    pub const fn new(letters: Vec<Letter>) -> Self {
        Self { letters }
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Letter at a pool index
    ///
    /// # Panics
    /// Panics if `index >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter(&self, index: usize) -> Letter {
        self.letters[index]
    }

    /// Every letter of the pool concatenated, in pool order
    #[must_use]
    pub fn spell_all(&self) -> String {
        self.letters.iter().map(Letter::name).collect()
    }

    /// Number of ordered sequences of length `1..=max_len` over this pool
    ///
    /// Saturates at `u64::MAX` rather than overflowing.
    ///
    /// # Examples
    /// ```
    /// use tier_optimizer::core::{Letter, Pool};
    ///
    /// let pool = Pool::new(vec![Letter::new('e', 1, 1), Letter::new('t', 1, 1)]);
    /// assert_eq!(pool.sequence_count(3), 2 + 4 + 8);
    /// ```
    #[must_use]
    pub fn sequence_count(&self, max_len: usize) -> u64 {
        let base = self.letters.len() as u64;
        let mut total: u64 = 0;
        let mut power: u64 = 1;
        for _ in 0..max_len {
            power = power.saturating_mul(base);
            total = total.saturating_add(power);
        }
        total
    }
}
