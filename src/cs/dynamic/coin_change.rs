use std::fmt;

use log::{debug, trace};

use crate::cs::change::{Breakdown, ChangeConfig, Denominations};
use crate::error::{Error, Result};

// Never incremented: comparisons check for it before adding a coin.
const INFEASIBLE: usize = usize::MAX;

/// Allocates a `0..=amount` table without panicking on huge amounts.
fn table_of<T: Clone>(amount: usize, value: T) -> Result<Vec<T>> {
    let len = amount
        .checked_add(1)
        .ok_or(Error::CapacityExceeded { amount })?;
    let mut table = Vec::new();
    table
        .try_reserve_exact(len)
        .map_err(|_| Error::CapacityExceeded { amount })?;
    table.resize(len, value);
    Ok(table)
}

/// Filled dynamic-programming tables for the minimum-coin problem.
///
/// `min_coins[i]` holds the fewest coins summing to `i`, and `last_coin[i]`
/// the denomination whose addition produced that minimum. Following
/// `last_coin` back from any feasible sub-amount reaches zero, so one table
/// answers every sub-amount up to the amount it was built for.
#[derive(Debug, Clone)]
pub struct MinCoinTable {
    min_coins: Vec<usize>,
    last_coin: Vec<Option<usize>>,
}

impl MinCoinTable {
    pub fn build(amount: usize, denominations: &Denominations) -> Result<Self> {
        Self::build_with_config(amount, denominations, &ChangeConfig::default())
    }

    /// Builds the table, refusing amounts above `config.max_amount`.
    pub fn build_with_config(
        amount: usize,
        denominations: &Denominations,
        config: &ChangeConfig,
    ) -> Result<Self> {
        config.check_amount(amount)?;
        Self::fill(amount, denominations.as_slice())
    }

    fn fill(amount: usize, coins: &[usize]) -> Result<Self> {
        let mut min_coins = table_of(amount, INFEASIBLE)?;
        let mut last_coin = table_of(amount, None)?;
        min_coins[0] = 0;

        // Ascending sub-amounts: every i - coin is already final when read.
        for sub_amount in 1..=amount {
            for &coin in coins {
                if coin > sub_amount {
                    continue;
                }
                let prev = min_coins[sub_amount - coin];
                // Strict improvement only, so the first coin in input order wins ties.
                if prev != INFEASIBLE && prev + 1 < min_coins[sub_amount] {
                    min_coins[sub_amount] = prev + 1;
                    last_coin[sub_amount] = Some(coin);
                    trace!("min_coins[{sub_amount}] = {} via {coin}", prev + 1);
                }
            }
        }

        Ok(Self {
            min_coins,
            last_coin,
        })
    }

    /// The largest sub-amount covered by this table.
    pub fn amount(&self) -> usize {
        self.min_coins.len() - 1
    }

    /// Minimum coin count for `sub_amount`, or `None` if it cannot be formed
    /// or lies outside the table.
    pub fn min_coins(&self, sub_amount: usize) -> Option<usize> {
        self.min_coins
            .get(sub_amount)
            .copied()
            .filter(|&count| count != INFEASIBLE)
    }

    /// The denomination recorded for `sub_amount`; `None` for zero and for
    /// infeasible entries.
    pub fn last_coin(&self, sub_amount: usize) -> Option<usize> {
        self.last_coin.get(sub_amount).copied().flatten()
    }

    /// Walks the choice table from `sub_amount` down to zero.
    pub fn reconstruct(&self, sub_amount: usize) -> Option<Vec<usize>> {
        let count = self.min_coins(sub_amount)?;
        let mut coins = Vec::with_capacity(count);
        let mut current = sub_amount;
        while current > 0 {
            let coin = self.last_coin(current)?;
            coins.push(coin);
            current -= coin;
        }
        Some(coins)
    }

    /// `(sub_amount, min_coins)` for every entry, `0..=amount`.
    pub fn rows(&self) -> impl Iterator<Item = (usize, Option<usize>)> + '_ {
        self.min_coins
            .iter()
            .enumerate()
            .map(|(i, &count)| (i, (count != INFEASIBLE).then_some(count)))
    }

    /// Renders sub-amounts `1..=amount` with their minimum coin counts.
    pub fn render_table(&self) -> String {
        let mut out = String::from("Amount -> Min Coins Needed\n");
        out.push_str("----------------------------\n");
        for (sub_amount, count) in self.rows().skip(1) {
            match count {
                Some(count) => out.push_str(&format!("{sub_amount:4}  ->  {count:2} coins\n")),
                None => out.push_str(&format!("{sub_amount:4}  ->  Not possible\n")),
            }
        }
        out
    }
}

/// Outcome of the exact minimum-coin search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimalChange {
    pub amount: usize,
    /// One optimal multiset of coins; empty when infeasible or `amount == 0`.
    pub coins_used: Vec<usize>,
    /// Minimum coin count, `None` when no combination reaches `amount`.
    pub min_coins: Option<usize>,
}

impl OptimalChange {
    pub fn is_possible(&self) -> bool {
        self.min_coins.is_some()
    }

    pub fn breakdown(&self) -> Breakdown {
        Breakdown::from_coins(&self.coins_used)
    }
}

impl fmt::Display for OptimalChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.min_coins {
            None => write!(f, "Not possible to make this amount with given coins"),
            Some(count) => {
                writeln!(f, "Coins Used: {:?}", self.coins_used)?;
                writeln!(f, "Minimum Coins: {count}")?;
                write!(f, "Breakdown: {}", self.breakdown())
            }
        }
    }
}

/// Computes a minimum-size multiset of coins summing exactly to `amount`.
///
/// Each denomination may be used any number of times. Runs in
/// O(amount × denominations) time and O(amount) space. When several optimal
/// multisets exist, the one recorded is determined by the input order of
/// `denominations`: at each sub-amount the first coin reaching the minimum is
/// kept.
///
/// Infeasibility is a normal outcome reported via `min_coins == None`.
///
/// # Errors
///
/// [`Error::InvalidInput`] for empty or zero denominations and
/// [`Error::AmountTooLarge`] when `amount` exceeds the default table limit.
///
/// # Examples
///
/// ```
/// use coinchange::optimal_change;
///
/// let change = optimal_change(6, &[1, 3, 4]).unwrap();
/// assert_eq!(change.coins_used, vec![3, 3]);
/// assert_eq!(change.min_coins, Some(2));
///
/// // 7 cannot be formed from 3s and 5s
/// let change = optimal_change(7, &[3, 5]).unwrap();
/// assert!(!change.is_possible());
/// assert!(change.coins_used.is_empty());
/// ```
pub fn optimal_change(amount: usize, denominations: &[usize]) -> Result<OptimalChange> {
    optimal_change_with_config(amount, denominations, &ChangeConfig::default())
}

pub fn optimal_change_with_config(
    amount: usize,
    denominations: &[usize],
    config: &ChangeConfig,
) -> Result<OptimalChange> {
    let denominations = Denominations::with_config(denominations, config)?;
    solve_validated(amount, &denominations, config)
}

/// Runs the optimizer against already validated denominations.
pub(crate) fn solve_validated(
    amount: usize,
    denominations: &Denominations,
    config: &ChangeConfig,
) -> Result<OptimalChange> {
    debug!(
        "optimal change for amount {amount} over {} denominations",
        denominations.len()
    );

    let table = MinCoinTable::build_with_config(amount, denominations, config)?;
    let result = match table.reconstruct(amount) {
        Some(coins_used) => OptimalChange {
            amount,
            min_coins: Some(coins_used.len()),
            coins_used,
        },
        None => OptimalChange {
            amount,
            coins_used: Vec::new(),
            min_coins: None,
        },
    };

    debug!("optimal change result: {:?}", result.min_coins);
    Ok(result)
}

/// Counts the distinct multisets of coins summing to `amount`.
///
/// Order does not matter (`1 + 2` and `2 + 1` are one way), and a repeated
/// denomination is counted once. There is exactly one way to form zero.
///
/// # Errors
///
/// [`Error::InvalidInput`] for invalid denominations, [`Error::AmountTooLarge`]
/// above the default amount limit, [`Error::CapacityExceeded`] if the table
/// cannot be allocated, and [`Error::Overflow`] if the count does not fit in
/// a `u128`.
///
/// # Examples
///
/// ```
/// use coinchange::count_change_ways;
///
/// // 1+1+1+1+1, 1+1+1+2, 1+2+2, 5
/// assert_eq!(count_change_ways(5, &[1, 2, 5]).unwrap(), 4);
/// ```
pub fn count_change_ways(amount: usize, denominations: &[usize]) -> Result<u128> {
    count_change_ways_with_config(amount, denominations, &ChangeConfig::default())
}

/// Like [`count_change_ways`] with a caller-supplied amount limit.
///
/// `dedup_denominations` has no effect here: duplicates are always collapsed.
pub fn count_change_ways_with_config(
    amount: usize,
    denominations: &[usize],
    config: &ChangeConfig,
) -> Result<u128> {
    let denominations = Denominations::with_config(denominations, config)?;
    config.check_amount(amount)?;

    // ways[i] = number of multisets summing to i using the coins seen so far.
    let mut ways = table_of(amount, 0_u128)?;
    ways[0] = 1;

    // Coins in the outer loop so each multiset is counted in one order only.
    for coin in denominations.distinct() {
        for sub_amount in coin..=amount {
            ways[sub_amount] = ways[sub_amount]
                .checked_add(ways[sub_amount - coin])
                .ok_or(Error::Overflow)?;
        }
    }

    Ok(ways[amount])
}
