//! Report CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_balance_trend, format_category_totals, format_investment_report};
use crate::error::BudgetResult;
use crate::services::{PeriodFilter, SummaryService};
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Balance of each record, oldest first
    Trend,
    /// Running investment total and progress toward the goal
    Investment,
    /// Expense totals per category
    Categories {
        /// Period as MM/YYYY, or "all"
        #[arg(short, long, default_value = "all")]
        period: String,
    },
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> BudgetResult<()> {
    let summary = SummaryService::new(storage);

    match cmd {
        ReportCommands::Trend => {
            let trend = summary.balance_trend()?;
            print!("{}", format_balance_trend(&trend, settings));
        }

        ReportCommands::Investment => {
            let periods: Vec<_> = summary
                .balance_trend()?
                .into_iter()
                .map(|(period, _)| period)
                .collect();
            let cumulative = summary.cumulative_investment(None)?;
            let progress = match settings.investment_goal {
                Some(goal) => Some(summary.goal_progress(goal)?),
                None => None,
            };

            print!(
                "{}",
                format_investment_report(&periods, &cumulative, progress.as_ref(), settings)
            );
        }

        ReportCommands::Categories { period } => {
            let filter = PeriodFilter::parse(&period)?;
            let totals = summary.category_totals(filter)?;
            print!("{}", format_category_totals(&totals, filter, settings));
        }
    }

    Ok(())
}
