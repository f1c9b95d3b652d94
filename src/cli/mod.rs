//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod export;
pub mod goal;
pub mod history;
pub mod record;
pub mod report;

pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use goal::{handle_goal_command, GoalCommands};
pub use history::handle_history_command;
pub use record::{handle_record_command, ExpenseArgs, RecordCommands};
pub use report::{handle_report_command, ReportCommands};

use crate::error::{BudgetError, BudgetResult};
use crate::models::Money;

/// Parse a user-entered amount, naming the field on failure
///
/// Sign is not checked here; the ledger rejects negative amounts.
pub(crate) fn parse_amount(field: &str, value: &str) -> BudgetResult<Money> {
    Money::parse(value).map_err(|e| {
        BudgetError::Validation(format!(
            "Invalid {} amount: '{}'. Use format like '1000.00' or '1000'. Error: {}",
            field, value, e
        ))
    })
}
