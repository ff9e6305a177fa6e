use std::collections::BTreeMap;
use std::fmt;

/// Coins grouped by denomination, largest denomination first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Breakdown {
    entries: Vec<(usize, usize)>,
}

impl Breakdown {
    /// Groups a coin multiset into `(denomination, count)` pairs.
    ///
    /// ```
    /// use coinchange::cs::change::Breakdown;
    ///
    /// let breakdown = Breakdown::from_coins(&[1, 4, 1]);
    /// assert_eq!(breakdown.entries(), &[(4, 1), (1, 2)]);
    /// assert_eq!(breakdown.to_string(), "1×4 + 2×1");
    /// ```
    pub fn from_coins(coins: &[usize]) -> Self {
        let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
        for &coin in coins {
            *counts.entry(coin).or_insert(0) += 1;
        }
        Self {
            entries: counts.into_iter().rev().collect(),
        }
    }

    pub fn entries(&self) -> &[(usize, usize)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Breakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "None");
        }
        for (i, (coin, count)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{count}×{coin}")?;
        }
        Ok(())
    }
}
