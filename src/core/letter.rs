//! Letter representation and the game's letter table
//!
//! Every letter belongs to a tier and carries a point value. The standard table
//! lists the 26 English letters grouped by tier, most common letters first.

use super::pool::Pool;
use super::tier::Tier;
use std::fmt;

/// A game letter with its tier and point value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Letter {
    name: char,
    tier: u8,
    value: u64,
}

impl Letter {
    /// Create a letter
    ///
    /// The table values are explicit game data, so no relationship between
    /// `tier` and `value` is enforced.
    #[must_use]
    pub const fn new(name: char, tier: u8, value: u64) -> Self {
        Self { name, tier, value }
    }

    /// The character this letter spells
    #[inline]
    #[must_use]
    pub const fn name(&self) -> char {
        self.name
    }

    /// The tier that unlocks this letter
    #[inline]
    #[must_use]
    pub const fn tier(&self) -> u8 {
        self.tier
    }

    /// Point value contributed to a sequence
    #[inline]
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.value
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The standard game letters in table order
pub const STANDARD_LETTERS: [Letter; 26] = [
    Letter::new('e', 1, 1),
    Letter::new('t', 1, 1),
    Letter::new('a', 1, 1),
    Letter::new('i', 1, 1),
    Letter::new('o', 1, 1),
    Letter::new('n', 1, 1),
    Letter::new('s', 2, 4),
    Letter::new('h', 2, 4),
    Letter::new('r', 2, 4),
    Letter::new('d', 2, 4),
    Letter::new('l', 3, 9),
    Letter::new('c', 3, 9),
    Letter::new('u', 3, 9),
    Letter::new('m', 3, 9),
    Letter::new('w', 4, 16),
    Letter::new('f', 4, 16),
    Letter::new('g', 4, 16),
    Letter::new('y', 4, 16),
    Letter::new('p', 5, 25),
    Letter::new('b', 5, 25),
    Letter::new('v', 5, 25),
    Letter::new('k', 5, 25),
    Letter::new('j', 6, 36),
    Letter::new('x', 6, 36),
    Letter::new('q', 6, 36),
    Letter::new('z', 6, 36),
];

/// An immutable table of letters available to the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterTable {
    letters: Vec<Letter>,
}

impl LetterTable {
    /// Build a table from letters in table order
    #[must_use]
    pub const fn new(letters: Vec<Letter>) -> Self {
        Self { letters }
    }

    /// The standard 26-letter table
    #[must_use]
    pub fn standard() -> Self {
        Self::new(STANDARD_LETTERS.to_vec())
    }

    /// All letters in table order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Look up a letter by name
    #[must_use]
    pub fn get(&self, name: char) -> Option<&Letter> {
        self.letters.iter().find(|l| l.name == name)
    }

    /// Letters unlocked at `tier`
    ///
    /// The pool is cumulative: it holds every letter whose tier is at most
    /// `tier`, ordered by tier and then by table order.
    ///
    /// # Examples
    /// ```
    /// use tier_optimizer::core::{LetterTable, Tier};
    ///
    /// let table = LetterTable::standard();
    /// let pool = table.pool(Tier::new(2).unwrap());
    /// assert_eq!(pool.spell_all(), "etaionshrd");
    /// ```
    #[must_use]
    pub fn pool(&self, tier: Tier) -> Pool {
        let mut letters = Vec::new();
        for t in 1..=tier.get() {
            letters.extend(self.letters.iter().filter(|l| l.tier == t).copied());
        }
        Pool::new(letters)
    }
}

impl Default for LetterTable {
    fn default() -> Self {
        Self::standard()
    }
}
