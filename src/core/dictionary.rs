//! Dictionary of valid words
//!
//! Membership is exact and case-sensitive. Words are stored as given.

use rustc_hash::FxHashSet;

/// An immutable set of dictionary words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from words
    ///
    /// Words are kept verbatim; empty strings are dropped.
    ///
    /// # Examples
    /// ```
    /// use tier_optimizer::core::Dictionary;
    ///
    /// let dict = Dictionary::from_words(["cat", "tee"]);
    /// assert!(dict.contains("cat"));
    /// assert!(!dict.contains("Cat"));
    /// ```
    pub fn from_words<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        let words = words
            .into_iter()
            .map(Into::into)
            .filter(|w: &String| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Check whether `word` is in the dictionary
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
