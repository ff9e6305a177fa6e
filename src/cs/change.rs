pub mod algorithm;
pub mod breakdown;
pub mod compare;
pub mod denominations;

pub use algorithm::{solve, Algorithm, ChangeSolution};
pub use breakdown::Breakdown;
pub use compare::{
    compare_batch, compare_change, compare_change_with_config, ChangeComparison, ChangeRequest,
    Recommendation,
};
pub use denominations::{parse_amount, ChangeConfig, Denominations};
