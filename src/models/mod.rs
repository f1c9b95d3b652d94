//! Core data models for the budget simulator
//!
//! Money, periods, the closed expense-category set, and the budget record
//! that ties them together.

pub mod category;
pub mod ids;
pub mod money;
pub mod period;
pub mod record;

pub use category::{ExpenseBreakdown, ExpenseCategory, ExpenseValidationError};
pub use ids::RecordId;
pub use money::{Money, MoneyParseError};
pub use period::{Period, PeriodParseError};
pub use record::{compute_balance, validate_amounts, BudgetRecord, RecordValidationError};
