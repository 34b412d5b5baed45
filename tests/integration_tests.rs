// Integration tests for the tier optimizer
// These exercise loading, searching and reporting through the public API

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tier_optimizer::commands::{OptimizeConfig, run_optimize};
use tier_optimizer::core::{Dictionary, Letter, LetterTable, Tier};
use tier_optimizer::optimizer::{SearchMode, TierOptimizer, score};
use tier_optimizer::output::format_tier_line;
use tier_optimizer::wordlists::load_from_file;

fn write_wordlist(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "tier_optimizer_it_{}_{name}",
        std::process::id()
    ));
    fs::write(&path, content).unwrap();
    path
}

fn tier(n: u8) -> Tier {
    Tier::new(n).unwrap()
}

#[test]
fn test_end_to_end_tee_from_file() {
    let path = write_wordlist("tee.txt", "tee\n");
    let dictionary = load_from_file(&path).unwrap();
    fs::remove_file(&path).unwrap();

    let table = LetterTable::new(vec![Letter::new('e', 1, 1), Letter::new('t', 1, 1)]);
    let result = TierOptimizer::new(&table, &dictionary).optimize(tier(1));

    assert_eq!(
        format_tier_line(&result),
        "Tier 1: Best combination = tee, Score = 12"
    );
}

#[test]
fn test_cat_scoring_with_standard_letters() {
    let table = LetterTable::standard();
    let dictionary = Dictionary::from_words(["cat"]);
    let letters = |word: &str| -> Vec<Letter> {
        word.chars().map(|c| *table.get(c).unwrap()).collect()
    };

    assert_eq!(score(&letters("cat"), &dictionary), 132);
    assert_eq!(score(&letters("tac"), &dictionary), 11);
}

#[test]
fn test_standard_tier_one_and_two() {
    // Tier 1 letters are all worth 1, so the longest word wins
    let table = LetterTable::standard();
    let dictionary = Dictionary::from_words(["tie", "net", "tenet", "intone"]);
    let optimizer = TierOptimizer::new(&table, &dictionary);

    let first = optimizer.optimize(tier(1)).best.unwrap();
    assert_eq!(first.combination(), "intone");
    assert_eq!(first.score, 6 + 36);

    let second = optimizer.optimize(tier(2)).best.unwrap();
    assert!(second.score >= first.score);
}

#[test]
fn test_parallel_run_matches_sequential_run() {
    let table = LetterTable::new(vec![
        Letter::new('e', 1, 1),
        Letter::new('t', 1, 1),
        Letter::new('a', 1, 1),
        Letter::new('s', 2, 4),
        Letter::new('h', 2, 4),
        Letter::new('c', 3, 9),
    ]);
    let dictionary = Dictionary::from_words(["eat", "tea", "sea", "hat", "chat", "cast", "hashes"]);
    let quiet = |mode| OptimizeConfig {
        mode,
        show_progress: false,
    };

    let sequential = run_optimize(&table, &dictionary, quiet(SearchMode::Sequential));
    let parallel = run_optimize(&table, &dictionary, quiet(SearchMode::Parallel));

    let lines = |report: &tier_optimizer::commands::RunReport| -> Vec<String> {
        report
            .tiers
            .iter()
            .map(|run| format_tier_line(&run.result))
            .collect()
    };
    assert_eq!(lines(&sequential), lines(&parallel));
    assert_eq!(lines(&sequential).len(), 6);
}

#[test]
fn test_missing_wordlist_is_fatal() {
    let missing = std::env::temp_dir().join("tier_optimizer_it_missing_wordlist.txt");
    let output = Command::new(env!("CARGO_BIN_EXE_tier_optimizer"))
        .arg("--wordlist")
        .arg(&missing)
        .arg("--quiet")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load word list"));
}
