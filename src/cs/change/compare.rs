use std::fmt;

use log::debug;
use rayon::prelude::*;

use crate::cs::approx::greedy_change::{self, GreedyChange};
use crate::cs::change::{ChangeConfig, Denominations};
use crate::cs::dynamic::coin_change::{self, OptimalChange};
use crate::error::Result;

/// Which solver a caller should prefer for a given input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    /// Greedy left a remainder but exact change exists.
    GreedyFailed,
    /// Both succeed, greedy uses more coins.
    DynamicIsBetter,
    /// Both give the same coin count.
    Equivalent,
    /// Exact change is impossible with these denominations.
    NoExactChange,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Recommendation::GreedyFailed => {
                "Use Dynamic Programming - Greedy failed to find a solution"
            }
            Recommendation::DynamicIsBetter => "Use Dynamic Programming for optimal solution",
            Recommendation::Equivalent => "Both algorithms give the same result",
            Recommendation::NoExactChange => "Neither algorithm can make exact change",
        };
        f.write_str(msg)
    }
}

/// Side-by-side result of both solvers on one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeComparison {
    pub amount: usize,
    pub denominations: Vec<usize>,
    pub greedy: GreedyChange,
    pub optimal: OptimalChange,
}

impl ChangeComparison {
    /// Greedy matched the optimum, or neither could make exact change.
    pub fn greedy_is_optimal(&self) -> bool {
        match self.optimal.min_coins {
            Some(min) => self.greedy.is_exact() && self.greedy.coin_count() == min,
            None => true,
        }
    }

    /// Extra coins greedy spends, when both produced exact change.
    pub fn difference(&self) -> Option<usize> {
        let min = self.optimal.min_coins?;
        self.greedy
            .is_exact()
            .then(|| self.greedy.coin_count().saturating_sub(min))
    }

    pub fn recommendation(&self) -> Recommendation {
        match (self.greedy.is_exact(), self.optimal.min_coins) {
            (_, None) => Recommendation::NoExactChange,
            (false, Some(_)) => Recommendation::GreedyFailed,
            (true, Some(min)) if self.greedy.coin_count() > min => {
                Recommendation::DynamicIsBetter
            }
            (true, Some(_)) => Recommendation::Equivalent,
        }
    }
}

impl fmt::Display for ChangeComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Amount: {}", self.amount)?;
        writeln!(f, "Denominations: {:?}", self.denominations)?;
        writeln!(f, "-- Greedy --")?;
        writeln!(f, "{}", self.greedy)?;
        writeln!(f, "-- Dynamic Programming --")?;
        writeln!(f, "{}", self.optimal)?;
        write!(f, "Recommendation: {}", self.recommendation())
    }
}

/// Runs both solvers on the same input.
///
/// # Examples
///
/// ```
/// use coinchange::{compare_change, Recommendation};
///
/// let comparison = compare_change(6, &[1, 3, 4]).unwrap();
/// assert!(!comparison.greedy_is_optimal());
/// assert_eq!(comparison.difference(), Some(1));
/// assert_eq!(comparison.recommendation(), Recommendation::DynamicIsBetter);
/// ```
pub fn compare_change(amount: usize, denominations: &[usize]) -> Result<ChangeComparison> {
    compare_change_with_config(amount, denominations, &ChangeConfig::default())
}

pub fn compare_change_with_config(
    amount: usize,
    denominations: &[usize],
    config: &ChangeConfig,
) -> Result<ChangeComparison> {
    let coins = Denominations::with_config(denominations, config)?;
    let optimal = coin_change::solve_validated(amount, &coins, config)?;
    let greedy = greedy_change::solve_validated(amount, &coins, config)?;

    debug!(
        "compared amount {amount}: greedy {} coins (remainder {}), optimal {:?}",
        greedy.coin_count(),
        greedy.remaining_amount,
        optimal.min_coins
    );

    Ok(ChangeComparison {
        amount,
        denominations: coins.as_slice().to_vec(),
        greedy,
        optimal,
    })
}

/// One input for [`compare_batch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRequest {
    pub amount: usize,
    pub denominations: Vec<usize>,
}

impl ChangeRequest {
    pub fn new(amount: usize, denominations: Vec<usize>) -> Self {
        Self {
            amount,
            denominations,
        }
    }
}

/// Compares many independent inputs in parallel, preserving input order.
pub fn compare_batch(requests: &[ChangeRequest]) -> Vec<Result<ChangeComparison>> {
    requests
        .par_iter()
        .map(|request| compare_change(request.amount, &request.denominations))
        .collect()
}
