//! Tier Optimizer
//!
//! Brute-forces, for each letter tier of a word game, the ordered sequence of up
//! to six letters that scores highest. Spelling a dictionary word adds the square
//! of the letter-value sum as a bonus.
//!
//! # Quick Start
//!
//! ```rust
//! use tier_optimizer::core::{Dictionary, LetterTable, Tier};
//! use tier_optimizer::optimizer::TierOptimizer;
//!
//! let table = LetterTable::standard();
//! let dictionary = Dictionary::from_words(["tee", "ten"]);
//! let optimizer = TierOptimizer::new(&table, &dictionary);
//!
//! let pool = optimizer.pool(Tier::new(1).unwrap());
//! assert_eq!(pool.spell_all(), "etaion");
//! ```

// Core domain types
pub mod core;

// Enumeration, scoring and search
pub mod optimizer;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
