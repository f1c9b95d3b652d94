//! Budget record repository for JSON storage
//!
//! The durable file is a top-level JSON array of records in ledger order.

use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::BudgetError;
use crate::models::{BudgetRecord, RecordId};

use super::file_io::{read_json, write_json_atomic};

/// Read records from a file
///
/// A missing file is an empty ledger. Content that parses as JSON but holds
/// out-of-range amounts is rejected as corrupt, like any other malformed
/// record. Records without an id get a fresh one.
pub fn load_records(path: &Path) -> Result<Vec<BudgetRecord>, BudgetError> {
    read_records(path).map(|(records, _)| records)
}

/// Like `load_records`, also reporting whether any id had to be assigned
fn read_records(path: &Path) -> Result<(Vec<BudgetRecord>, bool), BudgetError> {
    let mut records: Vec<BudgetRecord> = read_json(path)?;

    for (index, record) in records.iter().enumerate() {
        record.validate().map_err(|e| {
            BudgetError::corrupt(
                path.display().to_string(),
                format!("record {} ({}): {}", index, record.period(), e),
            )
        })?;
    }

    let mut assigned = 0;
    for record in &mut records {
        if record.assign_missing_id() {
            assigned += 1;
        }
    }

    tracing::debug!(path = %path.display(), count = records.len(), assigned, "loaded budget records");
    Ok((records, assigned > 0))
}

/// Write the full record list, replacing the file atomically
pub fn save_records(path: &Path, records: &[BudgetRecord]) -> Result<(), BudgetError> {
    write_json_atomic(path, records)?;
    tracing::debug!(path = %path.display(), count = records.len(), "saved budget records");
    Ok(())
}

/// Repository holding the in-memory ledger and its backing file
pub struct RecordRepository {
    path: PathBuf,
    records: RwLock<Vec<BudgetRecord>>,
}

impl RecordRepository {
    /// Create a new repository; nothing is read until `load`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            records: RwLock::new(Vec::new()),
        }
    }

    /// Replace the in-memory ledger with the file's contents
    ///
    /// Ids assigned to records from an older file are written back at once,
    /// so they stay the same across runs.
    pub fn load(&self) -> Result<(), BudgetError> {
        let (loaded, assigned) = read_records(&self.path)?;
        *self.write_lock()? = loaded;
        if assigned {
            tracing::info!(path = %self.path.display(), "assigned ids to legacy records");
            self.save()?;
        }
        Ok(())
    }

    /// Write the in-memory ledger to disk
    pub fn save(&self) -> Result<(), BudgetError> {
        let records = self.read_lock()?;
        save_records(&self.path, &records)
    }

    /// Get all records in ledger order
    pub fn get_all(&self) -> Result<Vec<BudgetRecord>, BudgetError> {
        Ok(self.read_lock()?.clone())
    }

    /// Get the record at a position
    pub fn get(&self, index: usize) -> Result<Option<BudgetRecord>, BudgetError> {
        Ok(self.read_lock()?.get(index).cloned())
    }

    /// Find the current position of a record by id
    pub fn position_of(&self, id: RecordId) -> Result<Option<usize>, BudgetError> {
        Ok(self.read_lock()?.iter().position(|r| r.id() == id))
    }

    /// Count records
    pub fn count(&self) -> Result<usize, BudgetError> {
        Ok(self.read_lock()?.len())
    }

    /// Append a record
    pub fn push(&self, record: BudgetRecord) -> Result<(), BudgetError> {
        self.write_lock()?.push(record);
        Ok(())
    }

    /// Replace the record at a position, returning the previous one
    pub fn replace(&self, index: usize, record: BudgetRecord) -> Result<BudgetRecord, BudgetError> {
        let mut records = self.write_lock()?;
        let len = records.len();
        let slot = records
            .get_mut(index)
            .ok_or(BudgetError::IndexOutOfRange { index, len })?;
        Ok(std::mem::replace(slot, record))
    }

    /// Insert a record at a position, shifting later records up
    pub fn insert(&self, index: usize, record: BudgetRecord) -> Result<(), BudgetError> {
        let mut records = self.write_lock()?;
        let len = records.len();
        if index > len {
            return Err(BudgetError::IndexOutOfRange { index, len });
        }
        records.insert(index, record);
        Ok(())
    }

    /// Remove the record at a position, shifting later records down
    pub fn remove(&self, index: usize) -> Result<BudgetRecord, BudgetError> {
        let mut records = self.write_lock()?;
        let len = records.len();
        if index >= len {
            return Err(BudgetError::IndexOutOfRange { index, len });
        }
        Ok(records.remove(index))
    }

    /// Remove the last record
    pub fn pop(&self) -> Result<Option<BudgetRecord>, BudgetError> {
        Ok(self.write_lock()?.pop())
    }

    fn read_lock(&self) -> Result<RwLockReadGuard<'_, Vec<BudgetRecord>>, BudgetError> {
        self.records
            .read()
            .map_err(|e| BudgetError::IoFailure(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_lock(&self) -> Result<RwLockWriteGuard<'_, Vec<BudgetRecord>>, BudgetError> {
        self.records
            .write()
            .map_err(|e| BudgetError::IoFailure(format!("Failed to acquire write lock: {}", e)))
    }
}
