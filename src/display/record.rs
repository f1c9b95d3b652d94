//! Budget record display formatting
//!
//! Formats records as a history table and as a single-record detail view.

use crate::config::Settings;
use crate::models::{BudgetRecord, ExpenseCategory};

/// Format records as a table, numbering rows from 1
///
/// Each record is paired with its ledger position so filtered views still
/// show the number that `edit` and `delete` expect.
pub fn format_record_table(records: &[(usize, BudgetRecord)], settings: &Settings) -> String {
    if records.is_empty() {
        return "No budget records found.\n\nUse 'budget record add <income>' to create one."
            .to_string();
    }

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(records.len());
    for (index, record) in records {
        let mut row = vec![
            (index + 1).to_string(),
            record.period().to_string(),
            settings.format_money(record.income()),
        ];
        row.extend(
            record
                .expenses()
                .iter()
                .map(|(_, amount)| settings.format_money(amount)),
        );
        row.push(settings.format_money(record.balance()));
        rows.push(row);
    }

    let mut header = vec!["#".to_string(), "Period".to_string(), "Income".to_string()];
    header.extend(ExpenseCategory::ALL.iter().map(|c| c.name().to_string()));
    header.push("Balance".to_string());

    let widths: Vec<usize> = (0..header.len())
        .map(|col| {
            rows.iter()
                .map(|row| row[col].chars().count())
                .chain(std::iter::once(header[col].len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut output = String::new();
    output.push_str(&format_row(&header, &widths));
    output.push_str(&format!(
        "{}\n",
        "-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1))
    ));
    for row in &rows {
        output.push_str(&format_row(row, &widths));
    }
    output.push_str(&format!("\n{} record(s)\n", rows.len()));

    output
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(col, (cell, width))| {
            // First two columns are labels; amounts are right-aligned
            if col < 2 {
                format!("{:<width$}", cell, width = width)
            } else {
                format!("{:>width$}", cell, width = width)
            }
        })
        .collect::<Vec<_>>()
        .join("  ");
    format!("{}\n", line.trim_end())
}

/// Format one record with its expense breakdown
pub fn format_record_details(index: usize, record: &BudgetRecord, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Budget {} - {}\n", index + 1, record.period()));
    output.push_str(&format!("{}\n", "=".repeat(40)));
    output.push_str(&format!("ID:       {}\n", record.id().short()));
    output.push_str(&format!("Income:   {}\n", settings.format_money(record.income())));
    output.push_str(&format!("Balance:  {}\n", settings.format_money(record.balance())));
    output.push_str("Expenses:\n");

    for (category, amount) in record.expenses().iter() {
        output.push_str(&format!(
            "  - {:<14} {}\n",
            format!("{}:", category),
            settings.format_money(amount)
        ));
    }

    output.push_str(&format!(
        "  {:<16} {}\n",
        "Total:",
        settings.format_money(record.total_expenses())
    ));

    output
}
