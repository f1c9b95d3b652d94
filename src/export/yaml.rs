//! YAML export
//!
//! Same content as the JSON export, in a human-readable form.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::export::json::LedgerExport;
use crate::services::PeriodFilter;
use crate::storage::Storage;

/// Export the ledger as YAML with a short header comment
pub fn export_ledger_yaml<W: Write>(
    storage: &Storage,
    writer: &mut W,
    filter: PeriodFilter,
) -> BudgetResult<()> {
    let export = LedgerExport::from_storage(storage, filter)?;
    write_yaml(&export, writer)
}

pub(crate) fn write_yaml<W: Write>(export: &LedgerExport, writer: &mut W) -> BudgetResult<()> {
    let err = |e: std::io::Error| BudgetError::Export(e.to_string());

    writeln!(writer, "# Budget ledger export").map_err(err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(err)?;
    writeln!(writer).map_err(err)?;

    serde_yaml::to_writer(writer, export).map_err(|e| BudgetError::Export(e.to_string()))
}
