//! Terminal output formatting
//!
//! Result lines and the run summary.

pub mod display;
pub mod formatters;

pub use display::{format_tier_line, print_report, print_run_summary};
