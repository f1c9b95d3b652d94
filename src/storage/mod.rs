//! Storage layer
//!
//! JSON file storage with atomic writes, plus the audit trail of record
//! mutations.

pub mod file_io;
pub mod records;

pub use file_io::{read_json, write_json_atomic};
pub use records::{load_records, save_records, RecordRepository};

use crate::audit::{generate_diff, AuditEntry, AuditLogger};
use crate::config::paths::BudgetPaths;
use crate::error::BudgetError;
use crate::models::BudgetRecord;

/// Storage coordinator: the record repository and the audit log
pub struct Storage {
    paths: BudgetPaths,
    pub records: RecordRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: BudgetPaths) -> Result<Self, BudgetError> {
        paths.ensure_directories()?;

        Ok(Self {
            records: RecordRepository::new(paths.records_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &BudgetPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), BudgetError> {
        self.records.load()
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Log a create operation
    pub fn log_create(&self, record: &BudgetRecord) -> Result<(), BudgetError> {
        self.audit.log(&AuditEntry::create(record))
    }

    /// Log an update operation, computing the diff
    pub fn log_update(&self, before: &BudgetRecord, after: &BudgetRecord) -> Result<(), BudgetError> {
        let diff = match (serde_json::to_value(before), serde_json::to_value(after)) {
            (Ok(b), Ok(a)) => generate_diff(&b, &a),
            _ => None,
        };
        self.audit.log(&AuditEntry::update(before, after, diff))
    }

    /// Log a delete operation
    pub fn log_delete(&self, record: &BudgetRecord) -> Result<(), BudgetError> {
        self.audit.log(&AuditEntry::delete(record))
    }
}
