pub mod coin_change;
pub mod odd_splits;

// Re-export dynamic programming algorithms with descriptive names
pub use coin_change::{count_denoms_splits, try_count_denoms_splits, SplitTable};
pub use odd_splits::{
    run, sum_odd_splits, OddSplitSummary, Parity, Report, Scenario, DEFAULT_AMOUNTS,
    DEFAULT_DENOMS, DEFAULT_TARGET,
};
