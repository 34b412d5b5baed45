//! Best-sequence search per tier
//!
//! Enumerates every candidate sequence for a tier, scores it, and keeps the
//! earliest highest-scoring one.

mod enumerate;
mod progress;
mod scoring;
mod search;

pub use enumerate::{CartesianPower, IndexSequence};
pub use progress::{PROGRESS_STRIDE, ProgressObserver};
pub use scoring::{Scorer, score, with_word_bonus};
pub use search::{
    BestSequence, SearchMode, SearchOutcome, TierOptimizer, TierResult, search_pool,
};
