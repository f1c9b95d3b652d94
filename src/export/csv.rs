//! CSV export
//!
//! One row per record in ledger order, one column per expense category, the
//! same history table the presentation layer shows.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetRecord, ExpenseCategory};
use crate::services::PeriodFilter;
use crate::storage::Storage;

/// Export records matching the filter to CSV
pub fn export_records_csv<W: Write>(
    storage: &Storage,
    writer: W,
    filter: PeriodFilter,
) -> BudgetResult<()> {
    let records: Vec<_> = storage
        .records
        .get_all()?
        .into_iter()
        .filter(|r| filter.matches(r))
        .collect();
    write_records_csv(&records, writer)
}

pub(crate) fn write_records_csv<W: Write>(records: &[BudgetRecord], writer: W) -> BudgetResult<()> {
    let err = |e: csv::Error| BudgetError::Export(e.to_string());
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = vec!["ID".to_string(), "Period".to_string(), "Income".to_string()];
    header.extend(ExpenseCategory::ALL.iter().map(|c| c.name().to_string()));
    header.push("Balance".to_string());
    csv_writer.write_record(&header).map_err(err)?;

    for record in records {
        let mut row = vec![
            record.id().to_string(),
            record.period().to_string(),
            record.income().to_string(),
        ];
        row.extend(record.expenses().iter().map(|(_, amount)| amount.to_string()));
        row.push(record.balance().to_string());
        csv_writer.write_record(&row).map_err(err)?;
    }

    csv_writer
        .flush()
        .map_err(|e| BudgetError::Export(e.to_string()))
}
