use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_sim::cli::{
    handle_export_command, handle_goal_command, handle_history_command, handle_record_command,
    handle_report_command, ExportArgs, GoalCommands, RecordCommands, ReportCommands,
};
use budget_sim::config::{BudgetPaths, Settings};
use budget_sim::logging::init_tracing;
use budget_sim::storage::Storage;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Monthly budget simulator",
    long_about = "Records monthly income and expenses across a fixed set of categories, \
                  derives each month's balance, and tracks cumulative investment \
                  against a savings goal."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Budget record commands
    #[command(subcommand, alias = "rec")]
    Record(RecordCommands),

    /// Balance, investment and category reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Investment goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Export the ledger as CSV, JSON or YAML
    Export(ExportArgs),

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = BudgetPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Record(cmd)) => {
            handle_record_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Goal(cmd)) => {
            handle_goal_command(&storage, &mut settings, cmd)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&storage, args)?;
        }
        Some(Commands::History { limit }) => {
            handle_history_command(&storage, limit)?;
        }
        Some(Commands::Config) => {
            println!("Budget Simulator Configuration");
            println!("==============================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Records file:   {}", paths.records_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:   {:?}", settings.currency_symbol);
            match settings.investment_goal {
                Some(goal) => println!("  Investment goal:   {}", settings.format_money(goal)),
                None => println!("  Investment goal:   (not set)"),
            }
            println!("  Records loaded:    {}", storage.records.count()?);
        }
        None => {
            println!("Budget Simulator - monthly income, expenses and investment goals");
            println!();
            println!("Run 'budget --help' for usage information.");
            println!("Run 'budget record add <income>' to record your first month.");
        }
    }

    Ok(())
}
