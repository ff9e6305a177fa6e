pub mod greedy_change;

pub use greedy_change::{greedy_change, greedy_change_with_config, GreedyChange};
