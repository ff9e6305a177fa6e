use std::collections::HashSet;

use log::warn;

use crate::error::{Error, Result};

/// Tuning knobs shared by the change-making solvers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeConfig {
    /// Largest amount either solver accepts; bounds the DP table and the
    /// greedy coin list.
    pub max_amount: usize,
    /// Drop repeated denominations (first occurrence wins) before solving.
    pub dedup_denominations: bool,
}

impl Default for ChangeConfig {
    fn default() -> Self {
        Self {
            max_amount: 10_000_000,
            dedup_denominations: false,
        }
    }
}

impl ChangeConfig {
    /// Rejects amounts above `max_amount`.
    pub fn check_amount(&self, amount: usize) -> Result<()> {
        if amount > self.max_amount {
            warn!("rejecting amount {amount} (limit {})", self.max_amount);
            return Err(Error::AmountTooLarge {
                amount,
                limit: self.max_amount,
            });
        }
        Ok(())
    }
}

/// A validated, non-empty list of positive coin values.
///
/// Input order is preserved: the optimal solver scans denominations in this
/// order, which fixes how ties between equally short solutions are broken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denominations {
    values: Vec<usize>,
}

impl Denominations {
    /// Validates `coins` with the default configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use coinchange::cs::change::Denominations;
    ///
    /// let coins = Denominations::new(&[1, 5, 10]).unwrap();
    /// assert_eq!(coins.as_slice(), &[1, 5, 10]);
    ///
    /// assert!(Denominations::new(&[]).is_err());
    /// assert!(Denominations::new(&[5, 0]).is_err());
    /// ```
    pub fn new(coins: &[usize]) -> Result<Self> {
        Self::with_config(coins, &ChangeConfig::default())
    }

    pub fn with_config(coins: &[usize], config: &ChangeConfig) -> Result<Self> {
        if coins.is_empty() {
            return Err(Error::invalid_input("denominations must not be empty"));
        }
        if let Some(index) = coins.iter().position(|&coin| coin == 0) {
            return Err(Error::invalid_input(format!(
                "denomination at index {index} must be positive"
            )));
        }

        let mut values = coins.to_vec();
        if config.dedup_denominations {
            let mut seen = HashSet::with_capacity(values.len());
            values.retain(|coin| seen.insert(*coin));
        }

        Ok(Self { values })
    }

    /// Validates signed input, rejecting negative and zero values.
    pub fn from_signed(coins: &[i64]) -> Result<Self> {
        let values = coins
            .iter()
            .map(|&coin| {
                usize::try_from(coin)
                    .ok()
                    .filter(|&value| value > 0)
                    .ok_or_else(|| {
                        Error::invalid_input(format!("denomination {coin} must be positive"))
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(&values)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a validated set; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Denominations sorted largest first.
    pub fn descending(&self) -> Vec<usize> {
        let mut sorted = self.values.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        sorted
    }

    /// Distinct denominations in first-occurrence order.
    pub fn distinct(&self) -> Vec<usize> {
        let mut seen = HashSet::with_capacity(self.values.len());
        self.values
            .iter()
            .copied()
            .filter(|coin| seen.insert(*coin))
            .collect()
    }
}

/// Converts a signed amount, failing fast on negative values.
///
/// ```
/// use coinchange::cs::change::parse_amount;
///
/// assert_eq!(parse_amount(93).unwrap(), 93);
/// assert!(parse_amount(-1).is_err());
/// ```
pub fn parse_amount(amount: i64) -> Result<usize> {
    usize::try_from(amount)
        .map_err(|_| Error::invalid_input(format!("amount {amount} must be non-negative")))
}
