//! Command implementations

pub mod optimize;

pub use optimize::{OptimizeConfig, RunReport, TierRun, run_optimize};
