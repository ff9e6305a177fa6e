pub mod coin_change;

// Re-export dynamic programming algorithms with descriptive names
pub use coin_change::{
    count_change_ways, count_change_ways_with_config, optimal_change, optimal_change_with_config,
    MinCoinTable, OptimalChange,
};
