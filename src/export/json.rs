//! JSON export
//!
//! Exports the ledger with a schema version and summary metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetRecord, Money, Period};
use crate::services::summary::{distinct_periods, total_investment};
use crate::services::PeriodFilter;
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,
    pub records: Vec<BudgetRecord>,
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub record_count: usize,
    pub earliest_period: Option<Period>,
    pub latest_period: Option<Period>,
    pub total_income: Money,
    pub total_investment: Money,
}

impl LedgerExport {
    /// Build an export from the records in storage matching `filter`
    pub fn from_storage(storage: &Storage, filter: PeriodFilter) -> BudgetResult<Self> {
        let records = storage
            .records
            .get_all()?
            .into_iter()
            .filter(|r| filter.matches(r))
            .collect();
        Ok(Self::from_records(records))
    }

    pub fn from_records(records: Vec<BudgetRecord>) -> Self {
        let periods = distinct_periods(&records);
        let metadata = ExportMetadata {
            record_count: records.len(),
            earliest_period: periods.first().copied(),
            latest_period: periods.last().copied(),
            total_income: records.iter().map(BudgetRecord::income).sum(),
            total_investment: total_investment(&records),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            records,
            metadata,
        }
    }
}

/// Export the ledger as pretty-printed JSON
pub fn export_ledger_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    filter: PeriodFilter,
) -> BudgetResult<()> {
    let export = LedgerExport::from_storage(storage, filter)?;
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| BudgetError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseBreakdown, ExpenseCategory};

    #[test]
    fn test_metadata() {
        let records = vec![
            BudgetRecord::new(
                Period::new(2025, 2).unwrap(),
                Money::from_units(3000),
                ExpenseBreakdown::new().with(ExpenseCategory::Investment, Money::from_units(100)),
            ),
            BudgetRecord::new(
                Period::new(2024, 11).unwrap(),
                Money::from_units(2000),
                ExpenseBreakdown::new(),
            ),
        ];

        let export = LedgerExport::from_records(records);
        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.metadata.record_count, 2);
        assert_eq!(export.metadata.earliest_period, Period::new(2024, 11).ok());
        assert_eq!(export.metadata.latest_period, Period::new(2025, 2).ok());
        assert_eq!(export.metadata.total_income, Money::from_units(5000));
        assert_eq!(export.metadata.total_investment, Money::from_units(100));
    }

    #[test]
    fn test_export_filters_by_period() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let paths = crate::config::BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        let march = Period::new(2025, 3).unwrap();
        storage
            .records
            .push(BudgetRecord::new(march, Money::from_units(100), ExpenseBreakdown::new()))
            .unwrap();
        storage
            .records
            .push(BudgetRecord::new(
                Period::new(2025, 4).unwrap(),
                Money::from_units(200),
                ExpenseBreakdown::new(),
            ))
            .unwrap();

        let export = LedgerExport::from_storage(&storage, PeriodFilter::Period(march)).unwrap();
        assert_eq!(export.metadata.record_count, 1);
        assert_eq!(export.records[0].period(), march);
        assert_eq!(export.metadata.total_income, Money::from_units(100));

        let mut buffer = Vec::new();
        export_ledger_json(&storage, &mut buffer, PeriodFilter::All).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["records"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_empty_export() {
        let export = LedgerExport::from_records(Vec::new());
        assert_eq!(export.metadata.record_count, 0);
        assert!(export.metadata.earliest_period.is_none());

        let json = serde_json::to_string(&export).unwrap();
        let back: LedgerExport = serde_json::from_str(&json).unwrap();
        assert!(back.records.is_empty());
    }
}
