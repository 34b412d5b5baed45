//! Display functions for optimize results
//!
//! Result lines go to stdout in a fixed format. The run summary is decoration
//! and goes to stderr.

use super::formatters::{create_share_bar, format_count};
use crate::commands::RunReport;
use crate::optimizer::{BestSequence, TierResult};
use colored::Colorize;

/// Placeholder shown when a tier has no letters to combine
pub const NO_COMBINATION: &str = "(none)";

/// Format one tier's result line
///
/// # Examples
/// ```
/// use tier_optimizer::core::{Dictionary, Letter, LetterTable, Tier};
/// use tier_optimizer::optimizer::TierOptimizer;
/// use tier_optimizer::output::format_tier_line;
///
/// let table = LetterTable::new(vec![Letter::new('e', 1, 1), Letter::new('t', 1, 1)]);
/// let dict = Dictionary::from_words(["tee"]);
/// let result = TierOptimizer::new(&table, &dict).optimize(Tier::new(1).unwrap());
///
/// assert_eq!(format_tier_line(&result), "Tier 1: Best combination = tee, Score = 12");
/// ```
#[must_use]
pub fn format_tier_line(result: &TierResult) -> String {
    match &result.best {
        Some(best) => format!(
            "Tier {}: Best combination = {}, Score = {}",
            result.tier,
            best.combination(),
            best.score
        ),
        None => format!(
            "Tier {}: Best combination = {NO_COMBINATION}, Score = 0",
            result.tier
        ),
    }
}

/// Print one result line per tier to stdout
pub fn print_report(report: &RunReport) {
    for run in &report.tiers {
        println!("{}", format_tier_line(&run.result));
    }
}

/// Print per-tier statistics to stderr
pub fn print_run_summary(report: &RunReport) {
    let total_secs = report.total_time.as_secs_f64();

    eprintln!("\n{}", "═".repeat(60).cyan());
    eprintln!(" {} ", "TIER OPTIMIZER SUMMARY".bright_cyan().bold());
    eprintln!("{}", "═".repeat(60).cyan());

    for run in &report.tiers {
        let secs = run.duration.as_secs_f64();
        let bar = create_share_bar(secs, total_secs, 20);
        let best = run
            .result
            .best
            .as_ref()
            .map_or_else(|| NO_COMBINATION.to_string(), BestSequence::combination);
        eprintln!(
            "  Tier {}: {:>2} letters  {:>13} candidates  [{}] {:>7.2}s  {}",
            run.result.tier,
            run.result.pool_size,
            format_count(run.result.evaluated),
            bar.green(),
            secs,
            best.bright_yellow()
        );
    }

    eprintln!(
        "\n  Mode:        {:?}\n  Candidates:  {}\n  Total time:  {}",
        report.mode,
        format_count(report.total_evaluated()),
        format!("{total_secs:.2}s").bright_yellow().bold()
    );
}
