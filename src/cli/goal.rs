//! Investment goal CLI commands
//!
//! The goal lives in the settings file, next to the currency symbol.

use clap::Subcommand;
use tracing::info;

use super::parse_amount;
use crate::config::Settings;
use crate::display::format_goal_progress;
use crate::error::{BudgetError, BudgetResult};
use crate::services::SummaryService;
use crate::storage::Storage;

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Set the investment goal
    Set {
        /// Target amount (must be greater than zero)
        amount: String,
    },
    /// Show progress toward the investment goal
    Show,
    /// Remove the investment goal
    Clear,
}

/// Handle a goal command
///
/// Takes the settings mutably since `set` and `clear` persist them.
pub fn handle_goal_command(
    storage: &Storage,
    settings: &mut Settings,
    cmd: GoalCommands,
) -> BudgetResult<()> {
    match cmd {
        GoalCommands::Set { amount } => {
            let goal = parse_amount("goal", &amount)?;
            if !goal.is_positive() {
                return Err(BudgetError::InvalidGoal(goal));
            }

            settings.investment_goal = Some(goal);
            settings.save(storage.paths())?;
            info!(goal = %goal, "investment goal set");

            println!("Investment goal set to {}", settings.format_money(goal));
        }

        GoalCommands::Show => match settings.investment_goal {
            Some(goal) => {
                let progress = SummaryService::new(storage).goal_progress(goal)?;
                print!("{}", format_goal_progress(&progress, settings));
            }
            None => {
                println!("No investment goal set.");
                println!("Use 'budget goal set <amount>' to set one.");
            }
        },

        GoalCommands::Clear => {
            if settings.investment_goal.take().is_some() {
                settings.save(storage.paths())?;
                info!("investment goal cleared");
                println!("Investment goal cleared.");
            } else {
                println!("No investment goal set.");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BudgetPaths;
    use crate::models::Money;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_set_persists_goal() {
        let (_temp_dir, storage) = create_test_storage();
        let mut settings = Settings::default();

        handle_goal_command(
            &storage,
            &mut settings,
            GoalCommands::Set {
                amount: "10000".into(),
            },
        )
        .unwrap();

        let reloaded = Settings::load_or_create(storage.paths()).unwrap();
        assert_eq!(reloaded.investment_goal, Some(Money::from_units(10000)));
    }

    #[test]
    fn test_set_rejects_zero_goal() {
        let (_temp_dir, storage) = create_test_storage();
        let mut settings = Settings::default();

        let err = handle_goal_command(
            &storage,
            &mut settings,
            GoalCommands::Set { amount: "0".into() },
        )
        .unwrap_err();

        assert!(matches!(err, BudgetError::InvalidGoal(_)));
        assert!(settings.investment_goal.is_none());
    }

    #[test]
    fn test_clear_removes_goal() {
        let (_temp_dir, storage) = create_test_storage();
        let mut settings = Settings {
            investment_goal: Some(Money::from_units(500)),
            ..Settings::default()
        };

        handle_goal_command(&storage, &mut settings, GoalCommands::Clear).unwrap();

        assert!(settings.investment_goal.is_none());
        let reloaded = Settings::load_or_create(storage.paths()).unwrap();
        assert!(reloaded.investment_goal.is_none());
    }
}
