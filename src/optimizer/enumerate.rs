//! Lazy enumeration of Cartesian powers
//!
//! Yields every ordered tuple of pool indices of a fixed length, with the last
//! position varying fastest. Nothing is materialized beyond the current tuple.

use crate::core::MAX_SEQUENCE_LEN;

/// A sequence of pool indices, at most `MAX_SEQUENCE_LEN` long
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexSequence {
    digits: [usize; MAX_SEQUENCE_LEN],
    len: usize,
}

impl IndexSequence {
    /// Pool indices in sequence order
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.digits[..self.len]
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Iterator over `radix^len` in product order
///
/// The first `prefix` positions can be pinned, which lets callers split one
/// power into disjoint, ordered slices. The iterator can be rewound with
/// [`CartesianPower::restart`].
///
/// # Examples
/// ```
/// use tier_optimizer::optimizer::CartesianPower;
///
/// let tuples: Vec<Vec<usize>> = CartesianPower::new(2, 2)
///     .map(|seq| seq.as_slice().to_vec())
///     .collect();
/// assert_eq!(tuples, vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]);
/// ```
#[derive(Debug, Clone)]
pub struct CartesianPower {
    radix: usize,
    digits: [usize; MAX_SEQUENCE_LEN],
    len: usize,
    fixed: usize,
    exhausted: bool,
}

impl CartesianPower {
    /// Enumerate every tuple of length `len` over `0..radix`
    ///
    /// Empty when `radix` is zero or `len` is outside `1..=MAX_SEQUENCE_LEN`.
    #[must_use]
    pub fn new(radix: usize, len: usize) -> Self {
        Self::with_prefix(radix, len, &[])
    }

    /// Enumerate tuples of length `len` whose leading positions equal `prefix`
    ///
    /// Empty when `prefix` is longer than `len` or holds a digit `>= radix`.
    #[must_use]
    pub fn with_prefix(radix: usize, len: usize, prefix: &[usize]) -> Self {
        let mut iter = Self {
            radix,
            digits: [0; MAX_SEQUENCE_LEN],
            len,
            fixed: prefix.len(),
            exhausted: true,
        };
        if prefix.len() <= MAX_SEQUENCE_LEN {
            iter.digits[..prefix.len()].copy_from_slice(prefix);
        }
        iter.exhausted = !iter.is_valid();
        iter
    }

    fn is_valid(&self) -> bool {
        self.radix > 0
            && (1..=MAX_SEQUENCE_LEN).contains(&self.len)
            && self.fixed <= self.len
            && self.digits[..self.fixed].iter().all(|&d| d < self.radix)
    }

    /// Rewind to the first tuple
    pub fn restart(&mut self) {
        if !self.is_valid() {
            return;
        }
        self.digits[self.fixed..self.len].fill(0);
        self.exhausted = false;
    }

    /// Number of tuples a full pass yields
    #[must_use]
    pub fn total(&self) -> u64 {
        if !self.is_valid() {
            return 0;
        }
        (self.radix as u64).saturating_pow((self.len - self.fixed) as u32)
    }

    fn advance(&mut self) {
        for pos in (self.fixed..self.len).rev() {
            self.digits[pos] += 1;
            if self.digits[pos] < self.radix {
                return;
            }
            self.digits[pos] = 0;
        }
        self.exhausted = true;
    }
}

impl Iterator for CartesianPower {
    type Item = IndexSequence;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let item = IndexSequence {
            digits: self.digits,
            len: self.len,
        };
        self.advance();
        Some(item)
    }
}

impl std::iter::FusedIterator for CartesianPower {}
