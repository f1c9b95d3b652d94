//! Display formatting for terminal output
//!
//! Turns records and ledger summaries into plain-text tables and reports.

pub mod record;
pub mod report;

pub use record::{format_record_details, format_record_table};
pub use report::{
    format_balance_trend, format_category_totals, format_goal_progress, format_investment_report,
};
