//! Greedy and dynamic-programming solvers for the coin change problem.
//!
//! ```
//! use coinchange::{greedy_change, optimal_change};
//!
//! let coins = [1, 3, 4];
//! assert_eq!(greedy_change(6, &coins).unwrap().coins_used, vec![4, 1, 1]);
//! assert_eq!(optimal_change(6, &coins).unwrap().coins_used, vec![3, 3]);
//! ```

pub mod cs;
pub mod error;

pub use cs::{approx, change, dynamic};
pub use cs::{
    compare_batch, compare_change, compare_change_with_config, count_change_ways,
    count_change_ways_with_config, greedy_change, greedy_change_with_config, optimal_change,
    optimal_change_with_config, parse_amount, solve, Algorithm, Breakdown, ChangeComparison,
    ChangeConfig, ChangeRequest, ChangeSolution, Denominations, GreedyChange, MinCoinTable,
    OptimalChange, Recommendation,
};
pub use error::{Error, Result};
