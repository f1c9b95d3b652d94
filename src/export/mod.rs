//! Export module
//!
//! - CSV: the record history table (spreadsheet-compatible)
//! - JSON: machine-readable ledger export with metadata
//! - YAML: human-readable ledger export

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_records_csv;
pub use self::json::{export_ledger_json, LedgerExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_ledger_yaml;
