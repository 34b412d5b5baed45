//! Optimize command
//!
//! Runs the best-sequence search for every tier and collects timing data.

use crate::core::{Dictionary, LetterTable, MAX_SEQUENCE_LEN, Tier};
use crate::optimizer::{ProgressObserver, SearchMode, TierOptimizer, TierResult};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use log::info;
use std::time::{Duration, Instant};

/// Configuration for an optimize run
#[derive(Debug, Clone, Copy)]
pub struct OptimizeConfig {
    pub mode: SearchMode,
    pub show_progress: bool,
}

impl OptimizeConfig {
    #[must_use]
    pub const fn new(mode: SearchMode) -> Self {
        Self {
            mode,
            show_progress: true,
        }
    }
}

impl Default for OptimizeConfig {
    fn default() -> Self {
        Self::new(SearchMode::Sequential)
    }
}

/// One tier's result with its wall-clock time
#[derive(Debug, Clone)]
pub struct TierRun {
    pub result: TierResult,
    pub duration: Duration,
}

/// Results for every tier, lowest tier first
#[derive(Debug, Clone)]
pub struct RunReport {
    pub tiers: Vec<TierRun>,
    pub mode: SearchMode,
    pub total_time: Duration,
}

impl RunReport {
    /// Candidates scored across all tiers
    #[must_use]
    pub fn total_evaluated(&self) -> u64 {
        self.tiers.iter().map(|run| run.result.evaluated).sum()
    }
}

/// Progress bar adapter for the optimizer
struct TierProgress {
    bar: ProgressBar,
}

impl TierProgress {
    fn new(tier: Tier, total: u64, visible: bool) -> Self {
        let bar = ProgressBar::with_draw_target(
            Some(total),
            if visible {
                ProgressDrawTarget::stderr()
            } else {
                ProgressDrawTarget::hidden()
            },
        );
        bar.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} {msg} [{bar:40.cyan/blue}] {human_pos}/{human_len} ({percent}%) {per_sec} eta {eta}",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        bar.set_message(format!("Processing Tier {tier}"));
        Self { bar }
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressObserver for TierProgress {
    fn on_progress(&self, evaluated: u64) {
        self.bar.inc(evaluated);
    }
}

/// Find the best sequence for every tier
///
/// Progress bars are transient: each one is cleared once its tier finishes.
#[must_use]
pub fn run_optimize(
    table: &LetterTable,
    dictionary: &Dictionary,
    config: OptimizeConfig,
) -> RunReport {
    let optimizer = TierOptimizer::new(table, dictionary).with_mode(config.mode);
    let total_start = Instant::now();
    let mut tiers = Vec::new();

    for tier in Tier::all() {
        let total = optimizer.pool(tier).sequence_count(MAX_SEQUENCE_LEN);
        let progress = TierProgress::new(tier, total, config.show_progress);

        let start = Instant::now();
        let result = optimizer.optimize_with_progress(tier, Some(&progress));
        let duration = start.elapsed();
        progress.finish();

        match &result.best {
            Some(best) => info!(
                "tier {tier}: best '{}' score {} after {} candidates in {:.2}s",
                best.combination(),
                best.score,
                result.evaluated,
                duration.as_secs_f64()
            ),
            None => info!("tier {tier}: empty pool, nothing to score"),
        }

        tiers.push(TierRun { result, duration });
    }

    RunReport {
        tiers,
        mode: config.mode,
        total_time: total_start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Letter;

    fn quiet(mode: SearchMode) -> OptimizeConfig {
        OptimizeConfig {
            mode,
            show_progress: false,
        }
    }

    fn tiny_table() -> LetterTable {
        LetterTable::new(vec![
            Letter::new('e', 1, 1),
            Letter::new('t', 1, 1),
            Letter::new('s', 2, 4),
        ])
    }

    #[test]
    fn reports_every_tier_in_order() {
        let table = tiny_table();
        let dict = Dictionary::from_words(["tee", "set"]);
        let report = run_optimize(&table, &dict, quiet(SearchMode::Sequential));

        let tiers: Vec<u8> = report.tiers.iter().map(|r| r.result.tier.get()).collect();
        assert_eq!(tiers, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(report.mode, SearchMode::Sequential);
    }

    #[test]
    fn tier_results_use_cumulative_pools() {
        let table = tiny_table();
        let dict = Dictionary::from_words(["tee"]);
        let report = run_optimize(&table, &dict, quiet(SearchMode::Sequential));

        let first = &report.tiers[0].result;
        assert_eq!(first.pool_size, 2);
        assert_eq!(first.best.as_ref().unwrap().combination(), "tee");
        assert_eq!(first.best.as_ref().unwrap().score, 12);

        // Tier 2 unlocks 's': six of them outscore "tee"
        let second = &report.tiers[1].result;
        assert_eq!(second.pool_size, 3);
        assert_eq!(second.best.as_ref().unwrap().combination(), "ssssss");
        assert_eq!(second.best.as_ref().unwrap().score, 24);

        // No letters beyond tier 2, so later tiers repeat tier 2
        assert_eq!(report.tiers[5].result.best, second.best);
    }

    #[test]
    fn total_evaluated_sums_tiers() {
        let table = tiny_table();
        let dict = Dictionary::default();
        let report = run_optimize(&table, &dict, quiet(SearchMode::Parallel));

        let tier_one = table.pool(Tier::new(1).unwrap()).sequence_count(MAX_SEQUENCE_LEN);
        let tier_two = table.pool(Tier::new(2).unwrap()).sequence_count(MAX_SEQUENCE_LEN);
        assert_eq!(report.total_evaluated(), tier_one + tier_two * 5);
    }

    #[test]
    fn modes_agree() {
        let table = tiny_table();
        let dict = Dictionary::from_words(["tee", "set", "test", "sets"]);
        let seq = run_optimize(&table, &dict, quiet(SearchMode::Sequential));
        let par = run_optimize(&table, &dict, quiet(SearchMode::Parallel));

        for (a, b) in seq.tiers.iter().zip(&par.tiers) {
            assert_eq!(a.result, b.result);
        }
    }
}
