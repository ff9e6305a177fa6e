use std::fmt;

use log::debug;

use crate::cs::change::{Breakdown, ChangeConfig, Denominations};
use crate::error::{Error, Result};

/// Outcome of the largest-coin-first heuristic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreedyChange {
    pub amount: usize,
    /// Coins taken, in descending value order.
    pub coins_used: Vec<usize>,
    /// Part of `amount` no remaining denomination could cover.
    pub remaining_amount: usize,
}

impl GreedyChange {
    pub fn coin_count(&self) -> usize {
        self.coins_used.len()
    }

    /// True when the whole amount was converted.
    pub fn is_exact(&self) -> bool {
        self.remaining_amount == 0
    }

    pub fn breakdown(&self) -> Breakdown {
        Breakdown::from_coins(&self.coins_used)
    }
}

impl fmt::Display for GreedyChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Coins Used: {:?}", self.coins_used)?;
        writeln!(f, "Total Coins: {}", self.coin_count())?;
        write!(f, "Remaining Amount: {}", self.remaining_amount)
    }
}

/// Makes change by always taking the largest denomination that still fits.
///
/// This is a heuristic: for canonical coin systems such as `[1, 5, 10, 25]` it
/// is optimal, for others it may use more coins than necessary or leave a
/// remainder even when exact change exists. A remainder is reported through
/// [`GreedyChange::remaining_amount`], never as an error.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] when `denominations` is empty or contains a
/// zero, [`Error::AmountTooLarge`] above the default amount limit, and
/// [`Error::CapacityExceeded`] if the coin list cannot be allocated.
///
/// # Examples
///
/// ```
/// use coinchange::greedy_change;
///
/// // Greedy picks 4 + 1 + 1 even though 3 + 3 is shorter
/// let change = greedy_change(6, &[1, 3, 4]).unwrap();
/// assert_eq!(change.coins_used, vec![4, 1, 1]);
/// assert_eq!(change.remaining_amount, 0);
///
/// // 5 fits once, then nothing fits the remaining 2
/// let partial = greedy_change(7, &[3, 5]).unwrap();
/// assert_eq!(partial.coins_used, vec![5]);
/// assert_eq!(partial.remaining_amount, 2);
/// ```
pub fn greedy_change(amount: usize, denominations: &[usize]) -> Result<GreedyChange> {
    greedy_change_with_config(amount, denominations, &ChangeConfig::default())
}

pub fn greedy_change_with_config(
    amount: usize,
    denominations: &[usize],
    config: &ChangeConfig,
) -> Result<GreedyChange> {
    let denominations = Denominations::with_config(denominations, config)?;
    solve_validated(amount, &denominations, config)
}

/// Runs the heuristic against already validated denominations.
pub(crate) fn solve_validated(
    amount: usize,
    denominations: &Denominations,
    config: &ChangeConfig,
) -> Result<GreedyChange> {
    config.check_amount(amount)?;
    debug!(
        "greedy change for amount {amount} over {} denominations",
        denominations.len()
    );

    // (coin, count) runs; equivalent to subtracting `coin` while it still fits
    let mut runs = Vec::new();
    let mut remaining = amount;
    for coin in denominations.descending() {
        let count = remaining / coin;
        if count > 0 {
            runs.push((coin, count));
            remaining -= coin * count;
        }
        if remaining == 0 {
            break;
        }
    }

    // Bounded by `amount` since every coin is at least 1.
    let total: usize = runs.iter().map(|(_, count)| count).sum();
    let mut coins_used = Vec::new();
    coins_used
        .try_reserve_exact(total)
        .map_err(|_| Error::CapacityExceeded { amount })?;
    for (coin, count) in runs {
        coins_used.extend(std::iter::repeat(coin).take(count));
    }

    debug!("greedy change used {total} coins, remainder {remaining}");

    Ok(GreedyChange {
        amount,
        coins_used,
        remaining_amount: remaining,
    })
}
