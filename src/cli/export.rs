//! CLI command for exporting the ledger

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::{BudgetError, BudgetResult};
use crate::export::{export_ledger_json, export_ledger_yaml, export_records_csv};
use crate::services::PeriodFilter;
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (record table)
    Csv,
    /// JSON format (records plus metadata)
    Json,
    /// YAML format (records plus metadata, human-readable)
    Yaml,
}

/// Export arguments
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(value_enum)]
    pub format: ExportFormat,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only export records for this period (MM/YYYY), or "all"
    #[arg(short, long, default_value = "all")]
    pub period: String,
}

/// Handle the export command
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> BudgetResult<()> {
    let filter = PeriodFilter::parse(&args.period)?;

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                BudgetError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };

    match args.format {
        ExportFormat::Csv => export_records_csv(storage, &mut writer, filter)?,
        ExportFormat::Json => export_ledger_json(storage, &mut writer, filter)?,
        ExportFormat::Yaml => export_ledger_yaml(storage, &mut writer, filter)?,
    }

    writer
        .flush()
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    if let Some(path) = &args.output {
        println!("Ledger exported to: {}", path.display());
    }

    Ok(())
}
