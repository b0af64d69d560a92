use thiserror::Error;

/// Errors reported by the checked split counting API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A denomination of zero was supplied.
    #[error("denomination at index {index} is zero; denominations must be positive")]
    InvalidDenomination { index: usize },

    /// A split count no longer fits in the table's integer type.
    #[error("split count for amount {amount} overflows the count type")]
    Overflow { amount: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
