use std::fmt;
use std::str::FromStr;

use crate::cs::approx::greedy_change::{greedy_change, GreedyChange};
use crate::cs::change::compare::{compare_change, ChangeComparison};
use crate::cs::dynamic::coin_change::{optimal_change, OptimalChange};
use crate::error::{Error, Result};

/// Solver selection for [`solve`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Algorithm {
    Greedy,
    #[default]
    Dynamic,
    Compare,
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "greedy" => Ok(Algorithm::Greedy),
            "dynamic" | "dp" => Ok(Algorithm::Dynamic),
            "both" | "compare" => Ok(Algorithm::Compare),
            other => Err(Error::invalid_input(format!("unknown algorithm '{other}'"))),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Greedy => "greedy",
            Algorithm::Dynamic => "dynamic",
            Algorithm::Compare => "compare",
        };
        f.write_str(name)
    }
}

/// Result of [`solve`], shaped by the chosen algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeSolution {
    Greedy(GreedyChange),
    Optimal(OptimalChange),
    Comparison(ChangeComparison),
}

impl fmt::Display for ChangeSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeSolution::Greedy(change) => fmt::Display::fmt(change, f),
            ChangeSolution::Optimal(change) => fmt::Display::fmt(change, f),
            ChangeSolution::Comparison(comparison) => fmt::Display::fmt(comparison, f),
        }
    }
}

/// Solves with the requested algorithm.
///
/// ```
/// use coinchange::{solve, Algorithm, ChangeSolution};
///
/// let algorithm: Algorithm = "dp".parse().unwrap();
/// match solve(6, &[1, 3, 4], algorithm).unwrap() {
///     ChangeSolution::Optimal(change) => assert_eq!(change.min_coins, Some(2)),
///     other => panic!("unexpected solution {other:?}"),
/// }
/// ```
pub fn solve(
    amount: usize,
    denominations: &[usize],
    algorithm: Algorithm,
) -> Result<ChangeSolution> {
    match algorithm {
        Algorithm::Greedy => greedy_change(amount, denominations).map(ChangeSolution::Greedy),
        Algorithm::Dynamic => optimal_change(amount, denominations).map(ChangeSolution::Optimal),
        Algorithm::Compare => compare_change(amount, denominations).map(ChangeSolution::Comparison),
    }
}
