//! Budget record model
//!
//! A record is one month's income and expenses. The balance is stored
//! alongside its inputs and must be recomputed whenever they change, so the
//! fields are private and every constructor and mutator goes through
//! `compute_balance`.

use serde::{Deserialize, Serialize};

use super::category::{ExpenseBreakdown, ExpenseValidationError};
use super::ids::RecordId;
use super::money::Money;
use super::period::Period;

/// Income minus the sum of all expenses
///
/// A negative result is valid data, not an error.
pub fn compute_balance(income: Money, expenses: &ExpenseBreakdown) -> Money {
    income - expenses.total()
}

/// Validation errors for budget records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    NegativeIncome(Money),
    IncomeTooLarge(Money),
    Expense(ExpenseValidationError),
}

impl std::fmt::Display for RecordValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeIncome(amount) => write!(f, "Income cannot be negative: {}", amount),
            Self::IncomeTooLarge(amount) => {
                write!(f, "Income exceeds {}: {}", Money::MAX, amount)
            }
            Self::Expense(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for RecordValidationError {}

/// One month's budget entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetRecord {
    #[serde(default = "RecordId::missing")]
    id: RecordId,
    period: Period,
    income: Money,
    expenses: ExpenseBreakdown,
    balance: Money,
}

impl BudgetRecord {
    /// Create a new record with a fresh id and a computed balance
    pub fn new(period: Period, income: Money, expenses: ExpenseBreakdown) -> Self {
        Self {
            id: RecordId::new(),
            period,
            income,
            expenses,
            balance: compute_balance(income, &expenses),
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn income(&self) -> Money {
        self.income
    }

    pub fn expenses(&self) -> &ExpenseBreakdown {
        &self.expenses
    }

    /// Stored balance
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Total of all expense categories
    pub fn total_expenses(&self) -> Money {
        self.expenses.total()
    }

    /// Amount put toward investment in this record
    pub fn investment(&self) -> Money {
        self.expenses.investment()
    }

    /// Replace income and expenses, recomputing the balance
    ///
    /// Period and id are immutable.
    pub fn set_amounts(&mut self, income: Money, expenses: ExpenseBreakdown) {
        self.income = income;
        self.expenses = expenses;
        self.balance = compute_balance(income, &expenses);
    }

    /// Give a record read from an id-less file a fresh id
    ///
    /// Returns whether an id was assigned.
    pub(crate) fn assign_missing_id(&mut self) -> bool {
        if self.id.is_missing() {
            self.id = RecordId::new();
            true
        } else {
            false
        }
    }

    /// Validate income and every expense amount
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        validate_amounts(self.income, &self.expenses)
    }
}

/// Validate income and expenses before they are applied to a record
///
/// Every amount must lie in `0..=Money::MAX`, which keeps the balance exact.
pub fn validate_amounts(
    income: Money,
    expenses: &ExpenseBreakdown,
) -> Result<(), RecordValidationError> {
    if income.is_negative() {
        return Err(RecordValidationError::NegativeIncome(income));
    }
    if !income.within_limit() {
        return Err(RecordValidationError::IncomeTooLarge(income));
    }
    expenses.validate().map_err(RecordValidationError::Expense)
}
