//! Summary service
//!
//! Read-only views over the ledger: period filtering, the distinct period
//! list, balance trend, category totals, cumulative investment and progress
//! toward an investment goal. Each view is a pure function over a record
//! slice; the service applies them to the loaded ledger.

use std::collections::BTreeSet;
use std::fmt;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetRecord, ExpenseBreakdown, ExpenseCategory, Money, Period};
use crate::storage::Storage;

/// Period selection for listing and totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PeriodFilter {
    /// Every record
    #[default]
    All,
    /// Only records for one period
    Period(Period),
}

impl PeriodFilter {
    /// Parse `all` (or `todos`) as the sentinel, anything else as a period
    pub fn parse(s: &str) -> BudgetResult<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") || s.eq_ignore_ascii_case("todos") {
            return Ok(Self::All);
        }
        Period::parse(s)
            .map(Self::Period)
            .map_err(|e| BudgetError::Validation(e.to_string()))
    }

    pub fn matches(&self, record: &BudgetRecord) -> bool {
        match self {
            Self::All => true,
            Self::Period(period) => record.period() == *period,
        }
    }
}

impl fmt::Display for PeriodFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Period(period) => write!(f, "{}", period),
        }
    }
}

/// Progress toward an investment goal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalProgress {
    pub goal: Money,
    pub invested: Money,
    /// Percentage of the goal reached; may exceed 100
    pub percent: f64,
}

impl GoalProgress {
    /// Amount still needed; zero once the goal is reached
    pub fn remaining(&self) -> Money {
        if self.invested >= self.goal {
            Money::zero()
        } else {
            self.goal - self.invested
        }
    }

    pub fn is_reached(&self) -> bool {
        self.invested >= self.goal
    }
}

/// Records matching the filter, in ledger order
pub fn filter_by_period(records: &[BudgetRecord], filter: PeriodFilter) -> Vec<BudgetRecord> {
    records.iter().filter(|r| filter.matches(r)).cloned().collect()
}

/// Distinct periods present in the ledger, oldest first
pub fn distinct_periods(records: &[BudgetRecord]) -> Vec<Period> {
    records
        .iter()
        .map(BudgetRecord::period)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Running total of the Investment category, one entry per record
///
/// With `through`, stops after that position (inclusive).
pub fn cumulative_investment(
    records: &[BudgetRecord],
    through: Option<usize>,
) -> BudgetResult<Vec<Money>> {
    let end = match through {
        Some(index) if index >= records.len() => {
            return Err(BudgetError::IndexOutOfRange {
                index,
                len: records.len(),
            })
        }
        Some(index) => index + 1,
        None => records.len(),
    };

    Ok(records[..end]
        .iter()
        .scan(Money::zero(), |total, record| {
            *total += record.investment();
            Some(*total)
        })
        .collect())
}

/// Sum of the Investment category across all records
pub fn total_investment(records: &[BudgetRecord]) -> Money {
    records.iter().map(BudgetRecord::investment).sum()
}

/// Percentage of `goal` covered by total investment
///
/// Fails for a goal of zero or less. Not clamped at 100.
pub fn investment_goal_progress(records: &[BudgetRecord], goal: Money) -> BudgetResult<f64> {
    if !goal.is_positive() {
        return Err(BudgetError::InvalidGoal(goal));
    }
    Ok(total_investment(records).as_f64() / goal.as_f64() * 100.0)
}

/// (period, balance) pairs in ledger order
pub fn balance_trend(records: &[BudgetRecord]) -> Vec<(Period, Money)> {
    records.iter().map(|r| (r.period(), r.balance())).collect()
}

/// Total spent per category over the matching records
pub fn category_totals(records: &[BudgetRecord], filter: PeriodFilter) -> ExpenseBreakdown {
    ExpenseCategory::ALL
        .into_iter()
        .map(|category| {
            let total: Money = records
                .iter()
                .filter(|r| filter.matches(r))
                .map(|r| r.expenses().get(category))
                .sum();
            (category, total)
        })
        .collect()
}

/// Service for ledger summaries
pub struct SummaryService<'a> {
    storage: &'a Storage,
}

impl<'a> SummaryService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn filter_by_period(&self, filter: PeriodFilter) -> BudgetResult<Vec<BudgetRecord>> {
        Ok(filter_by_period(&self.storage.records.get_all()?, filter))
    }

    pub fn list_distinct_periods(&self) -> BudgetResult<Vec<Period>> {
        Ok(distinct_periods(&self.storage.records.get_all()?))
    }

    pub fn cumulative_investment(&self, through: Option<usize>) -> BudgetResult<Vec<Money>> {
        cumulative_investment(&self.storage.records.get_all()?, through)
    }

    pub fn total_investment(&self) -> BudgetResult<Money> {
        Ok(total_investment(&self.storage.records.get_all()?))
    }

    pub fn investment_goal_progress(&self, goal: Money) -> BudgetResult<f64> {
        investment_goal_progress(&self.storage.records.get_all()?, goal)
    }

    /// Goal, amount invested so far and percentage in one value
    pub fn goal_progress(&self, goal: Money) -> BudgetResult<GoalProgress> {
        let records = self.storage.records.get_all()?;
        let percent = investment_goal_progress(&records, goal)?;
        Ok(GoalProgress {
            goal,
            invested: total_investment(&records),
            percent,
        })
    }

    pub fn balance_trend(&self) -> BudgetResult<Vec<(Period, Money)>> {
        Ok(balance_trend(&self.storage.records.get_all()?))
    }

    pub fn category_totals(&self, filter: PeriodFilter) -> BudgetResult<ExpenseBreakdown> {
        Ok(category_totals(&self.storage.records.get_all()?, filter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BudgetPaths;
    use crate::services::LedgerService;
    use tempfile::TempDir;

    fn period(month: u32) -> Period {
        Period::new(2025, month).unwrap()
    }

    fn record(month: u32, income: i64, groceries: i64, investment: i64) -> BudgetRecord {
        let expenses = ExpenseBreakdown::new()
            .with(ExpenseCategory::Groceries, Money::from_units(groceries))
            .with(ExpenseCategory::Investment, Money::from_units(investment));
        BudgetRecord::new(period(month), Money::from_units(income), expenses)
    }

    fn sample_ledger() -> Vec<BudgetRecord> {
        vec![
            record(3, 5000, 800, 500),
            record(1, 4000, 700, 250),
            record(3, 1000, 100, 0),
        ]
    }

    #[test]
    fn test_period_filter_parse() {
        assert_eq!(PeriodFilter::parse("all").unwrap(), PeriodFilter::All);
        assert_eq!(PeriodFilter::parse("Todos").unwrap(), PeriodFilter::All);
        assert_eq!(
            PeriodFilter::parse("03/2025").unwrap(),
            PeriodFilter::Period(period(3))
        );
        assert!(PeriodFilter::parse("March").unwrap_err().is_validation());
    }

    #[test]
    fn test_filter_all_preserves_order() {
        let ledger = sample_ledger();
        assert_eq!(filter_by_period(&ledger, PeriodFilter::All), ledger);
    }

    #[test]
    fn test_filter_by_period() {
        let ledger = sample_ledger();
        let march = filter_by_period(&ledger, PeriodFilter::Period(period(3)));

        assert_eq!(march, vec![ledger[0].clone(), ledger[2].clone()]);
        assert!(filter_by_period(&ledger, PeriodFilter::Period(period(7))).is_empty());
    }

    #[test]
    fn test_distinct_periods_sorted() {
        let mut ledger = sample_ledger();
        ledger.push(BudgetRecord::new(
            Period::new(2024, 12).unwrap(),
            Money::zero(),
            ExpenseBreakdown::new(),
        ));

        assert_eq!(
            distinct_periods(&ledger),
            vec![Period::new(2024, 12).unwrap(), period(1), period(3)]
        );
        assert!(distinct_periods(&[]).is_empty());
    }

    #[test]
    fn test_cumulative_investment() {
        let ledger = sample_ledger();

        assert_eq!(
            cumulative_investment(&ledger, None).unwrap(),
            vec![
                Money::from_units(500),
                Money::from_units(750),
                Money::from_units(750)
            ]
        );
        assert_eq!(
            cumulative_investment(&ledger, Some(0)).unwrap(),
            vec![Money::from_units(500)]
        );
        assert!(cumulative_investment(&[], None).unwrap().is_empty());
    }

    #[test]
    fn test_cumulative_investment_out_of_range() {
        let ledger = sample_ledger();
        assert!(matches!(
            cumulative_investment(&ledger, Some(3)),
            Err(BudgetError::IndexOutOfRange { index: 3, len: 3 })
        ));
    }

    #[test]
    fn test_goal_progress() {
        let ledger = sample_ledger();

        let percent = investment_goal_progress(&ledger, Money::from_units(1000)).unwrap();
        assert!((percent - 75.0).abs() < 1e-9);

        let over = investment_goal_progress(&ledger, Money::from_units(500)).unwrap();
        assert!((over - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_goal_must_be_positive() {
        let ledger = sample_ledger();
        assert!(matches!(
            investment_goal_progress(&ledger, Money::zero()),
            Err(BudgetError::InvalidGoal(_))
        ));
        assert!(matches!(
            investment_goal_progress(&ledger, Money::from_units(-10)),
            Err(BudgetError::InvalidGoal(_))
        ));
    }

    #[test]
    fn test_balance_trend() {
        let ledger = sample_ledger();
        assert_eq!(
            balance_trend(&ledger),
            vec![
                (period(3), Money::from_units(3700)),
                (period(1), Money::from_units(3050)),
                (period(3), Money::from_units(900)),
            ]
        );
    }

    #[test]
    fn test_category_totals() {
        let ledger = sample_ledger();

        let all = category_totals(&ledger, PeriodFilter::All);
        assert_eq!(all.get(ExpenseCategory::Groceries), Money::from_units(1600));
        assert_eq!(all.get(ExpenseCategory::Investment), Money::from_units(750));
        assert!(all.get(ExpenseCategory::Electronics).is_zero());

        let march = category_totals(&ledger, PeriodFilter::Period(period(3)));
        assert_eq!(march.get(ExpenseCategory::Groceries), Money::from_units(900));
    }

    #[test]
    fn test_first_month_scenario() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        let expenses = ExpenseBreakdown::new()
            .with(ExpenseCategory::Groceries, Money::from_units(800))
            .with(ExpenseCategory::Electronics, Money::zero())
            .with(ExpenseCategory::Education, Money::zero())
            .with(ExpenseCategory::Transport, Money::from_units(200))
            .with(ExpenseCategory::Discretionary, Money::zero())
            .with(ExpenseCategory::Investment, Money::from_units(500));

        let record = LedgerService::new(&storage)
            .add_record(period(1), Money::from_units(5000), expenses)
            .unwrap();
        assert_eq!(record.balance(), Money::from_units(3500));

        let summary = SummaryService::new(&storage);
        assert_eq!(
            summary
                .filter_by_period(PeriodFilter::parse("01/2025").unwrap())
                .unwrap(),
            vec![record]
        );
        assert_eq!(
            summary.cumulative_investment(None).unwrap(),
            vec![Money::from_units(500)]
        );

        let progress = summary.goal_progress(Money::from_units(2000)).unwrap();
        assert_eq!(progress.invested, Money::from_units(500));
        assert_eq!(progress.remaining(), Money::from_units(1500));
        assert!(!progress.is_reached());
        assert!((progress.percent - 25.0).abs() < 1e-9);
    }
}
