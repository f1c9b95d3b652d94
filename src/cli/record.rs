//! Budget record CLI commands
//!
//! Records are addressed by their 1-based position in the ledger, the same
//! number `record list` shows, or by id (full UUID or the `rec-` short form).

use clap::{Args, Subcommand};

use super::parse_amount;
use crate::config::Settings;
use crate::display::{format_record_details, format_record_table};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetRecord, ExpenseBreakdown, ExpenseCategory, Money, Period, RecordId};
use crate::services::{LedgerService, PeriodFilter, SummaryService};
use crate::storage::Storage;

/// Per-category expense amounts
#[derive(Args, Debug, Default)]
pub struct ExpenseArgs {
    /// Groceries amount
    #[arg(long)]
    pub groceries: Option<String>,
    /// Electronics amount
    #[arg(long)]
    pub electronics: Option<String>,
    /// Education amount
    #[arg(long)]
    pub education: Option<String>,
    /// Transport amount
    #[arg(long)]
    pub transport: Option<String>,
    /// Discretionary spending amount
    #[arg(long)]
    pub discretionary: Option<String>,
    /// Amount invested
    #[arg(long)]
    pub investment: Option<String>,
}

impl ExpenseArgs {
    fn value(&self, category: ExpenseCategory) -> Option<&str> {
        match category {
            ExpenseCategory::Groceries => self.groceries.as_deref(),
            ExpenseCategory::Electronics => self.electronics.as_deref(),
            ExpenseCategory::Education => self.education.as_deref(),
            ExpenseCategory::Transport => self.transport.as_deref(),
            ExpenseCategory::Discretionary => self.discretionary.as_deref(),
            ExpenseCategory::Investment => self.investment.as_deref(),
        }
    }

    /// Apply the given amounts on top of `base`; omitted categories keep
    /// their value from `base`
    pub fn apply_to(&self, base: ExpenseBreakdown) -> BudgetResult<ExpenseBreakdown> {
        let mut expenses = base;
        for category in ExpenseCategory::ALL {
            if let Some(value) = self.value(category) {
                expenses.set(category, parse_amount(category.name(), value)?);
            }
        }
        Ok(expenses)
    }

    /// Breakdown with omitted categories at zero
    pub fn to_breakdown(&self) -> BudgetResult<ExpenseBreakdown> {
        self.apply_to(ExpenseBreakdown::new())
    }
}

/// Record subcommands
#[derive(Subcommand)]
pub enum RecordCommands {
    /// Add a budget record
    Add {
        /// Monthly income (e.g., "5000" or "5000.00")
        #[arg(allow_hyphen_values = true)]
        income: String,
        /// Period as MM/YYYY (default: current month)
        #[arg(short, long)]
        period: Option<String>,
        #[command(flatten)]
        expenses: ExpenseArgs,
    },
    /// Replace the income and expenses of a record
    ///
    /// Categories not given keep their current amount.
    Edit {
        /// Record number as shown by `record list`, or record id
        record: String,
        /// New monthly income
        #[arg(allow_hyphen_values = true)]
        income: String,
        #[command(flatten)]
        expenses: ExpenseArgs,
    },
    /// Delete a record
    Delete {
        /// Record number as shown by `record list`, or record id
        record: String,
    },
    /// List records
    List {
        /// Period as MM/YYYY, or "all"
        #[arg(short, long, default_value = "all")]
        period: String,
    },
    /// List the distinct periods that have records
    Periods,
    /// Show the balance the given amounts would produce without saving
    Preview {
        /// Monthly income
        #[arg(allow_hyphen_values = true)]
        income: String,
        #[command(flatten)]
        expenses: ExpenseArgs,
    },
}

/// How the user addressed a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecordTarget {
    Index(usize),
    Id(RecordId),
}

/// Convert a 1-based record number to a ledger index
fn to_index(number: usize) -> BudgetResult<usize> {
    number
        .checked_sub(1)
        .ok_or_else(|| BudgetError::Validation("Record numbers start at 1".into()))
}

/// Resolve a record number, full id or short id against the ledger
fn resolve_target(records: &[BudgetRecord], text: &str) -> BudgetResult<RecordTarget> {
    let text = text.trim();

    if let Ok(number) = text.parse::<usize>() {
        return to_index(number).map(RecordTarget::Index);
    }
    if let Ok(id) = text.parse::<RecordId>() {
        return Ok(RecordTarget::Id(id));
    }

    let matches: Vec<_> = records
        .iter()
        .filter(|r| r.id().short().eq_ignore_ascii_case(text))
        .collect();
    match matches.as_slice() {
        [record] => Ok(RecordTarget::Id(record.id())),
        [] => Err(BudgetError::RecordNotFound(text.to_string())),
        _ => Err(BudgetError::Validation(format!(
            "'{}' matches more than one record; use the full id",
            text
        ))),
    }
}

fn parse_period(period: Option<&str>) -> BudgetResult<Period> {
    match period {
        Some(text) => Period::parse(text).map_err(|e| BudgetError::Validation(e.to_string())),
        None => Ok(Period::current()),
    }
}

/// Handle a record command
pub fn handle_record_command(
    storage: &Storage,
    settings: &Settings,
    cmd: RecordCommands,
) -> BudgetResult<()> {
    let ledger = LedgerService::new(storage);

    match cmd {
        RecordCommands::Add {
            income,
            period,
            expenses,
        } => {
            let period = parse_period(period.as_deref())?;
            let income = parse_amount("income", &income)?;
            let expenses = expenses.to_breakdown()?;

            let record = ledger.add_record(period, income, expenses)?;
            let index = storage.records.count()?.saturating_sub(1);

            println!("Added budget record for {}", record.period());
            print!("{}", format_record_details(index, &record, settings));
        }

        RecordCommands::Edit {
            record,
            income,
            expenses,
        } => {
            let records = ledger.list_records()?;
            let income = parse_amount("income", &income)?;

            let (index, updated) = match resolve_target(&records, &record)? {
                RecordTarget::Index(index) => {
                    let current = ledger.get_record(index)?;
                    let expenses = expenses.apply_to(*current.expenses())?;
                    (index, ledger.edit_record(index, income, expenses)?)
                }
                RecordTarget::Id(id) => {
                    let (index, current) = records
                        .iter()
                        .enumerate()
                        .find(|(_, r)| r.id() == id)
                        .ok_or_else(|| BudgetError::RecordNotFound(id.short()))?;
                    let expenses = expenses.apply_to(*current.expenses())?;
                    (index, ledger.edit_record_by_id(id, income, expenses)?)
                }
            };

            println!("Updated budget record {}", index + 1);
            print!("{}", format_record_details(index, &updated, settings));
        }

        RecordCommands::Delete { record } => {
            let records = ledger.list_records()?;
            let removed = match resolve_target(&records, &record)? {
                RecordTarget::Index(index) => ledger.delete_record(index)?,
                RecordTarget::Id(id) => ledger.delete_record_by_id(id)?,
            };

            println!(
                "Deleted budget record {} ({}, balance {})",
                removed.id().short(),
                removed.period(),
                settings.format_money(removed.balance())
            );
        }

        RecordCommands::List { period } => {
            let filter = PeriodFilter::parse(&period)?;
            let rows: Vec<_> = ledger
                .list_records()?
                .into_iter()
                .enumerate()
                .filter(|(_, record)| filter.matches(record))
                .collect();
            print!("{}", format_record_table(&rows, settings));
        }

        RecordCommands::Periods => {
            let periods = SummaryService::new(storage).list_distinct_periods()?;
            if periods.is_empty() {
                println!("No budget records found.");
            }
            for period in periods {
                println!("{}", period);
            }
        }

        RecordCommands::Preview { income, expenses } => {
            let income = parse_amount("income", &income)?;
            let expenses = expenses.to_breakdown()?;
            let balance: Money = ledger.preview_balance(income, &expenses)?;

            println!("Income:   {}", settings.format_money(income));
            println!("Expenses: {}", settings.format_money(expenses.total()));
            println!("Balance:  {}", settings.format_money(balance));
        }
    }

    Ok(())
}
