//! Service layer
//!
//! Business logic on top of the storage layer: record lifecycle with
//! validation, and read-only summaries of the ledger.

pub mod ledger;
pub mod summary;

pub use ledger::LedgerService;
pub use summary::{GoalProgress, PeriodFilter, SummaryService};
