//! Expense categories and per-record expense breakdowns
//!
//! The category set is closed. A breakdown always carries an amount for
//! every category; anything not supplied is zero.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;

/// The fixed set of expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Groceries,
    Electronics,
    Education,
    Transport,
    Discretionary,
    Investment,
}

impl ExpenseCategory {
    /// All categories in display order
    pub const ALL: [ExpenseCategory; 6] = [
        Self::Groceries,
        Self::Electronics,
        Self::Education,
        Self::Transport,
        Self::Discretionary,
        Self::Investment,
    ];

    /// Name used in the durable format and in user-facing output
    pub fn name(&self) -> &'static str {
        match self {
            Self::Groceries => "Groceries",
            Self::Electronics => "Electronics",
            Self::Education => "Education",
            Self::Transport => "Transport",
            Self::Discretionary => "Discretionary",
            Self::Investment => "Investment",
        }
    }

    /// Parse a category by name, ignoring case
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for ExpenseCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown expense category: {}", s))
    }
}

/// Expense amounts for one record, one per category
///
/// Unknown keys are rejected on deserialization, missing keys default to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExpenseBreakdown {
    #[serde(rename = "Groceries", default)]
    groceries: Money,
    #[serde(rename = "Electronics", default)]
    electronics: Money,
    #[serde(rename = "Education", default)]
    education: Money,
    #[serde(rename = "Transport", default)]
    transport: Money,
    #[serde(rename = "Discretionary", default)]
    discretionary: Money,
    #[serde(rename = "Investment", default)]
    investment: Money,
}

impl ExpenseBreakdown {
    /// Create an all-zero breakdown
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, category: ExpenseCategory, amount: Money) -> Self {
        self.set(category, amount);
        self
    }

    /// Get the amount for a category
    pub fn get(&self, category: ExpenseCategory) -> Money {
        match category {
            ExpenseCategory::Groceries => self.groceries,
            ExpenseCategory::Electronics => self.electronics,
            ExpenseCategory::Education => self.education,
            ExpenseCategory::Transport => self.transport,
            ExpenseCategory::Discretionary => self.discretionary,
            ExpenseCategory::Investment => self.investment,
        }
    }

    /// Set the amount for a category
    pub fn set(&mut self, category: ExpenseCategory, amount: Money) {
        let slot = match category {
            ExpenseCategory::Groceries => &mut self.groceries,
            ExpenseCategory::Electronics => &mut self.electronics,
            ExpenseCategory::Education => &mut self.education,
            ExpenseCategory::Transport => &mut self.transport,
            ExpenseCategory::Discretionary => &mut self.discretionary,
            ExpenseCategory::Investment => &mut self.investment,
        };
        *slot = amount;
    }

    /// Iterate over (category, amount) pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (ExpenseCategory, Money)> + '_ {
        ExpenseCategory::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    /// Sum of all expense amounts
    pub fn total(&self) -> Money {
        self.iter().map(|(_, amount)| amount).sum()
    }

    /// Amount put toward investment
    pub fn investment(&self) -> Money {
        self.investment
    }

    /// Validate that every amount is non-negative and at most `Money::MAX`
    ///
    /// Reports the first offending category in display order.
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        for (category, amount) in self.iter() {
            if amount.is_negative() {
                return Err(ExpenseValidationError::NegativeAmount { category, amount });
            }
            if !amount.within_limit() {
                return Err(ExpenseValidationError::TooLarge { category, amount });
            }
        }
        Ok(())
    }
}

impl FromIterator<(ExpenseCategory, Money)> for ExpenseBreakdown {
    fn from_iter<I: IntoIterator<Item = (ExpenseCategory, Money)>>(iter: I) -> Self {
        let mut breakdown = Self::new();
        for (category, amount) in iter {
            breakdown.set(category, amount);
        }
        breakdown
    }
}

/// Validation errors for expense breakdowns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NegativeAmount {
        category: ExpenseCategory,
        amount: Money,
    },
    TooLarge {
        category: ExpenseCategory,
        amount: Money,
    },
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount { category, amount } => {
                write!(f, "{} expense cannot be negative: {}", category, amount)
            }
            Self::TooLarge { category, amount } => {
                write!(f, "{} expense exceeds {}: {}", category, Money::MAX, amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
