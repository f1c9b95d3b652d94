//! Error types for the budget simulator
//!
//! Every failure carries enough detail (which field, which index, which
//! amount) for the user to correct the input.

use thiserror::Error;

use crate::models::Money;

/// The main error type for budget operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Income or expense value that is negative or above `Money::MAX`
    #[error("Invalid amount for {field}: {amount} (amounts must be between 0 and {max})", max = Money::MAX)]
    InvalidAmount { field: String, amount: Money },

    /// Edit/delete target is not a position in the ledger
    #[error("Record index {index} is out of range (ledger has {len} records)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Progress against a non-positive goal is undefined
    #[error("Invalid investment goal: {0} (goal must be greater than zero)")]
    InvalidGoal(Money),

    /// Durable content could not be parsed into valid records
    #[error("Corrupt data in {path}: {reason}")]
    CorruptData { path: String, reason: String },

    /// Durable read/write failure other than "not found"
    #[error("I/O failure: {0}")]
    IoFailure(String),

    /// No record carries the requested id
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    /// User-supplied text that does not parse (money, period, category)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl BudgetError {
    /// Create an "invalid amount" error for a named field
    pub fn invalid_amount(field: impl Into<String>, amount: Money) -> Self {
        Self::InvalidAmount {
            field: field.into(),
            amount,
        }
    }

    /// Create a "corrupt data" error for a path
    pub fn corrupt(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::CorruptData {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error was raised by input validation
    ///
    /// Validation errors are detected before any mutation, so the ledger is
    /// unchanged when one is returned.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount { .. }
                | Self::IndexOutOfRange { .. }
                | Self::InvalidGoal(_)
                | Self::RecordNotFound(_)
                | Self::Validation(_)
        )
    }

    /// Check if this is a corrupt data error
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::CorruptData { .. })
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::IoFailure(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::corrupt("<memory>", err.to_string())
    }
}

/// Result type alias for budget operations
pub type BudgetResult<T> = Result<T, BudgetError>;
