//! Ledger service
//!
//! Record lifecycle: add, edit and delete, each validated before anything is
//! touched and followed synchronously by a save. If the save fails the
//! in-memory change is undone, so memory never runs ahead of disk.

use crate::error::{BudgetError, BudgetResult};
use crate::models::{
    compute_balance, validate_amounts, BudgetRecord, ExpenseBreakdown, ExpenseValidationError,
    Money, Period, RecordId, RecordValidationError,
};
use crate::storage::Storage;

/// Service for budget record management
pub struct LedgerService<'a> {
    storage: &'a Storage,
}

impl<'a> LedgerService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Balance the given amounts would produce, without saving anything
    pub fn preview_balance(&self, income: Money, expenses: &ExpenseBreakdown) -> BudgetResult<Money> {
        check_amounts(income, expenses)?;
        Ok(compute_balance(income, expenses))
    }

    /// Append a new record and persist the ledger
    pub fn add_record(
        &self,
        period: Period,
        income: Money,
        expenses: ExpenseBreakdown,
    ) -> BudgetResult<BudgetRecord> {
        check_amounts(income, &expenses)?;

        let record = BudgetRecord::new(period, income, expenses);
        self.storage.records.push(record.clone())?;

        if let Err(e) = self.storage.records.save() {
            self.storage.records.pop()?;
            return Err(e);
        }

        tracing::info!(id = %record.id(), period = %record.period(), balance = %record.balance(), "added budget record");
        self.audit(self.storage.log_create(&record));

        Ok(record)
    }

    /// Replace income and expenses of the record at `index`
    ///
    /// The record keeps its period and id; the balance is recomputed.
    pub fn edit_record(
        &self,
        index: usize,
        income: Money,
        expenses: ExpenseBreakdown,
    ) -> BudgetResult<BudgetRecord> {
        let before = self.record_at(index)?;
        check_amounts(income, &expenses)?;

        let mut updated = before.clone();
        updated.set_amounts(income, expenses);
        self.storage.records.replace(index, updated.clone())?;

        if let Err(e) = self.storage.records.save() {
            self.storage.records.replace(index, before)?;
            return Err(e);
        }

        tracing::info!(index, id = %updated.id(), period = %updated.period(), "edited budget record");
        self.audit(self.storage.log_update(&before, &updated));

        Ok(updated)
    }

    /// Edit a record located by its stable id
    pub fn edit_record_by_id(
        &self,
        id: RecordId,
        income: Money,
        expenses: ExpenseBreakdown,
    ) -> BudgetResult<BudgetRecord> {
        let index = self.index_of(id)?;
        self.edit_record(index, income, expenses)
    }

    /// Remove the record at `index`; later records shift down by one
    pub fn delete_record(&self, index: usize) -> BudgetResult<BudgetRecord> {
        let removed = self.storage.records.remove(index)?;

        if let Err(e) = self.storage.records.save() {
            self.storage.records.insert(index, removed)?;
            return Err(e);
        }

        tracing::info!(index, id = %removed.id(), period = %removed.period(), "deleted budget record");
        self.audit(self.storage.log_delete(&removed));

        Ok(removed)
    }

    /// Delete a record located by its stable id
    pub fn delete_record_by_id(&self, id: RecordId) -> BudgetResult<BudgetRecord> {
        let index = self.index_of(id)?;
        self.delete_record(index)
    }

    /// Get the record at a position
    pub fn get_record(&self, index: usize) -> BudgetResult<BudgetRecord> {
        self.record_at(index)
    }

    /// All records in ledger order
    pub fn list_records(&self) -> BudgetResult<Vec<BudgetRecord>> {
        self.storage.records.get_all()
    }

    fn record_at(&self, index: usize) -> BudgetResult<BudgetRecord> {
        match self.storage.records.get(index)? {
            Some(record) => Ok(record),
            None => Err(BudgetError::IndexOutOfRange {
                index,
                len: self.storage.records.count()?,
            }),
        }
    }

    fn index_of(&self, id: RecordId) -> BudgetResult<usize> {
        self.storage
            .records
            .position_of(id)?
            .ok_or_else(|| BudgetError::RecordNotFound(id.short()))
    }

    // The ledger is already saved when the audit append runs
    fn audit(&self, result: BudgetResult<()>) {
        if let Err(e) = result {
            tracing::warn!(error = %e, "failed to write audit entry");
        }
    }
}

fn check_amounts(income: Money, expenses: &ExpenseBreakdown) -> BudgetResult<()> {
    validate_amounts(income, expenses).map_err(|e| match e {
        RecordValidationError::NegativeIncome(amount)
        | RecordValidationError::IncomeTooLarge(amount) => {
            BudgetError::invalid_amount("income", amount)
        }
        RecordValidationError::Expense(
            ExpenseValidationError::NegativeAmount { category, amount }
            | ExpenseValidationError::TooLarge { category, amount },
        ) => BudgetError::invalid_amount(category.name(), amount),
    })
}
