//! Budget simulator - monthly income, categorized expenses and investment goals
//!
//! This library records monthly budget entries (income plus a fixed set of
//! expense categories), derives each month's balance, and summarizes the
//! history: balance trend, cumulative investment and progress toward an
//! investment goal.
//!
//! # Architecture
//!
//! - `config`: data directory and user settings
//! - `error`: custom error types
//! - `models`: money, periods, expense categories and budget records
//! - `storage`: JSON file storage with atomic writes
//! - `services`: record lifecycle and ledger summaries
//! - `audit`: append-only log of record mutations
//! - `export`: CSV, JSON and YAML export
//! - `display`: plain-text tables and reports
//! - `cli`: command handlers used by the `budget` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_sim::config::BudgetPaths;
//! use budget_sim::models::{ExpenseBreakdown, ExpenseCategory, Money, Period};
//! use budget_sim::services::LedgerService;
//! use budget_sim::storage::Storage;
//!
//! let mut storage = Storage::new(BudgetPaths::new()?)?;
//! storage.load_all()?;
//!
//! let expenses = ExpenseBreakdown::new()
//!     .with(ExpenseCategory::Groceries, Money::from_units(800))
//!     .with(ExpenseCategory::Investment, Money::from_units(500));
//! let record = LedgerService::new(&storage).add_record(Period::current(), Money::from_units(5000), expenses)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
