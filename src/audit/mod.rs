//! Audit logging
//!
//! Records every create, update and delete of a budget record, with
//! before/after values, in an append-only JSONL file.
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_sim::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! logger.log(&AuditEntry::create(&record))?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
