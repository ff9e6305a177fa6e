use thiserror::Error;

/// Errors reported by the change-making solvers.
///
/// Infeasible amounts and partial greedy conversions are *not* errors; they are
/// represented in the solver results. Only malformed input ends up here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("amount {amount} exceeds the configured limit of {limit}")]
    AmountTooLarge { amount: usize, limit: usize },

    #[error("cannot allocate storage for amount {amount}")]
    CapacityExceeded { amount: usize },

    #[error("arithmetic overflow while counting change combinations")]
    Overflow,
}

impl Error {
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Error::InvalidInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
