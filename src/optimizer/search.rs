//! Exhaustive best-sequence search
//!
//! Lengths are visited in ascending order and each length's Cartesian power in
//! product order. A candidate replaces the running best only with a strictly
//! greater score, so the earliest maximal candidate wins ties.

use super::enumerate::{CartesianPower, IndexSequence};
use super::progress::{ProgressObserver, ProgressTicker};
use super::scoring::Scorer;
use crate::core::{Dictionary, Letter, LetterTable, MAX_SEQUENCE_LEN, Pool, Tier};
use log::debug;
use rayon::prelude::*;

/// How the candidate space is traversed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// One thread, straight product order
    #[default]
    Sequential,
    /// Each length split by first letter across rayon workers
    Parallel,
}

/// Highest-scoring sequence found in a pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestSequence {
    pub letters: Vec<Letter>,
    pub score: u64,
}

impl BestSequence {
    /// The winning letters spelled out
    #[must_use]
    pub fn combination(&self) -> String {
        self.letters.iter().map(Letter::name).collect()
    }
}

/// Raw outcome of searching one pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub best: Option<BestSequence>,
    pub evaluated: u64,
}

/// Result of optimizing a single tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierResult {
    pub tier: Tier,
    pub pool_size: usize,
    pub evaluated: u64,
    pub best: Option<BestSequence>,
}

/// Finds the best sequence for each tier of a letter table
pub struct TierOptimizer<'a> {
    table: &'a LetterTable,
    dictionary: &'a Dictionary,
    mode: SearchMode,
}

impl<'a> TierOptimizer<'a> {
    /// Create a sequential optimizer
    #[must_use]
    pub const fn new(table: &'a LetterTable, dictionary: &'a Dictionary) -> Self {
        Self {
            table,
            dictionary,
            mode: SearchMode::Sequential,
        }
    }

    /// Switch traversal mode; results are identical either way
    #[must_use]
    pub const fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub const fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Pool of letters unlocked at `tier`
    #[must_use]
    pub fn pool(&self, tier: Tier) -> Pool {
        self.table.pool(tier)
    }

    /// Best sequence for `tier`
    ///
    /// # Examples
    /// ```
    /// use tier_optimizer::core::{Dictionary, Letter, LetterTable, Tier};
    /// use tier_optimizer::optimizer::TierOptimizer;
    ///
    /// let table = LetterTable::new(vec![Letter::new('e', 1, 1), Letter::new('t', 1, 1)]);
    /// let dict = Dictionary::from_words(["tee"]);
    /// let result = TierOptimizer::new(&table, &dict).optimize(Tier::new(1).unwrap());
    ///
    /// let best = result.best.unwrap();
    /// assert_eq!(best.combination(), "tee");
    /// assert_eq!(best.score, 12);
    /// ```
    #[must_use]
    pub fn optimize(&self, tier: Tier) -> TierResult {
        self.optimize_with_progress(tier, None)
    }

    /// Best sequence for `tier`, notifying `observer` as candidates are scored
    #[must_use]
    pub fn optimize_with_progress(
        &self,
        tier: Tier,
        observer: Option<&dyn ProgressObserver>,
    ) -> TierResult {
        let pool = self.pool(tier);
        debug!(
            "tier {tier}: pool '{}' ({} letters), {} candidates, {:?}",
            pool.spell_all(),
            pool.len(),
            pool.sequence_count(MAX_SEQUENCE_LEN),
            self.mode
        );

        let outcome = search_pool(&pool, self.dictionary, MAX_SEQUENCE_LEN, self.mode, observer);

        TierResult {
            tier,
            pool_size: pool.len(),
            evaluated: outcome.evaluated,
            best: outcome.best,
        }
    }
}

/// Search every sequence of length `1..=max_len` over `pool`
///
/// `max_len` is clamped to `MAX_SEQUENCE_LEN`.
#[must_use]
pub fn search_pool(
    pool: &Pool,
    dictionary: &Dictionary,
    max_len: usize,
    mode: SearchMode,
    observer: Option<&dyn ProgressObserver>,
) -> SearchOutcome {
    let max_len = max_len.min(MAX_SEQUENCE_LEN);
    let mut best: Option<Scored> = None;
    let mut evaluated = 0;

    for len in 1..=max_len {
        let partial = match mode {
            SearchMode::Sequential => {
                scan(pool, dictionary, CartesianPower::new(pool.len(), len), observer)
            }
            SearchMode::Parallel => scan_parallel(pool, dictionary, len, observer),
        };
        evaluated += partial.evaluated;
        best = keep_earliest(best, partial.best);
    }

    SearchOutcome {
        best: best.map(|(sequence, score)| BestSequence {
            letters: sequence.as_slice().iter().map(|&i| pool.letter(i)).collect(),
            score,
        }),
        evaluated,
    }
}

type Scored = (IndexSequence, u64);

struct Partial {
    best: Option<Scored>,
    evaluated: u64,
}

impl Partial {
    const EMPTY: Self = Self {
        best: None,
        evaluated: 0,
    };

    fn merge(self, later: Self) -> Self {
        Self {
            best: keep_earliest(self.best, later.best),
            evaluated: self.evaluated + later.evaluated,
        }
    }
}

/// Combine two bests where `later` was enumerated after `earlier`
///
/// Associative, so ordered parallel reductions agree with a sequential scan.
fn keep_earliest(earlier: Option<Scored>, later: Option<Scored>) -> Option<Scored> {
    match (earlier, later) {
        (Some(e), Some(l)) => Some(if l.1 > e.1 { l } else { e }),
        (e, None) => e,
        (None, l) => l,
    }
}

fn scan(
    pool: &Pool,
    dictionary: &Dictionary,
    sequences: CartesianPower,
    observer: Option<&dyn ProgressObserver>,
) -> Partial {
    let mut scorer = Scorer::new(dictionary);
    let mut ticker = ProgressTicker::new(observer);
    let mut best: Option<Scored> = None;
    let mut evaluated = 0;

    for sequence in sequences {
        let score = scorer.score_sequence(pool, &sequence);
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((sequence, score));
        }
        evaluated += 1;
        ticker.tick();
    }
    ticker.flush();

    Partial { best, evaluated }
}

fn scan_parallel(
    pool: &Pool,
    dictionary: &Dictionary,
    len: usize,
    observer: Option<&dyn ProgressObserver>,
) -> Partial {
    (0..pool.len())
        .into_par_iter()
        .map(|first| {
            scan(
                pool,
                dictionary,
                CartesianPower::with_prefix(pool.len(), len, &[first]),
                observer,
            )
        })
        .reduce(|| Partial::EMPTY, Partial::merge)
}
