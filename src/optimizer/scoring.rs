//! Candidate scoring
//!
//! A candidate's score is the sum of its letter values. If the letters spell a
//! dictionary word, the square of that sum is added on top.

use super::enumerate::IndexSequence;
use crate::core::{Dictionary, Letter, Pool};

/// Apply the word bonus to a value sum
///
/// ```
/// use tier_optimizer::optimizer::with_word_bonus;
///
/// assert_eq!(with_word_bonus(11), 132);
/// ```
#[inline]
#[must_use]
pub const fn with_word_bonus(value_sum: u64) -> u64 {
    value_sum.saturating_add(value_sum.saturating_mul(value_sum))
}

/// Score a sequence of letters against a dictionary
///
/// # Examples
/// ```
/// use tier_optimizer::core::{Dictionary, Letter};
/// use tier_optimizer::optimizer::score;
///
/// let dict = Dictionary::from_words(["cat"]);
/// let c = Letter::new('c', 3, 9);
/// let a = Letter::new('a', 1, 1);
/// let t = Letter::new('t', 1, 1);
///
/// assert_eq!(score(&[c, a, t], &dict), 11 + 11 * 11);
/// assert_eq!(score(&[t, a, c], &dict), 11);
/// ```
#[must_use]
pub fn score(letters: &[Letter], dictionary: &Dictionary) -> u64 {
    Scorer::new(dictionary).score(letters)
}

/// Reusable scorer that keeps one word buffer across calls
///
/// Scoring is still a pure function of the letters and the dictionary; the
/// buffer only avoids an allocation per candidate.
pub struct Scorer<'d> {
    dictionary: &'d Dictionary,
    word: String,
}

impl<'d> Scorer<'d> {
    #[must_use]
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Self {
            dictionary,
            word: String::with_capacity(crate::core::MAX_SEQUENCE_LEN * 4),
        }
    }

    /// Score letters in sequence order
    pub fn score(&mut self, letters: &[Letter]) -> u64 {
        self.score_letters(letters.iter().copied())
    }

    /// Score a sequence of pool indices
    ///
    /// # Panics
    /// Panics if an index is out of range for `pool`
    pub fn score_sequence(&mut self, pool: &Pool, sequence: &IndexSequence) -> u64 {
        self.score_letters(sequence.as_slice().iter().map(|&i| pool.letter(i)))
    }

    fn score_letters(&mut self, letters: impl Iterator<Item = Letter>) -> u64 {
        self.word.clear();
        let mut value_sum: u64 = 0;
        for letter in letters {
            value_sum = value_sum.saturating_add(letter.value());
            self.word.push(letter.name());
        }

        if self.dictionary.contains(&self.word) {
            with_word_bonus(value_sum)
        } else {
            value_sum
        }
    }
}
