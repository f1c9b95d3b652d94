//! Report formatting for terminal output
//!
//! Balance trend, cumulative investment with goal progress, and expense
//! totals per category.

use crate::config::Settings;
use crate::models::{ExpenseBreakdown, Money, Period};
use crate::services::{GoalProgress, PeriodFilter};

const BAR_WIDTH: usize = 20;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format the balance of each record in ledger order
///
/// Negative balances get no bar; the amount column still shows the sign.
pub fn format_balance_trend(trend: &[(Period, Money)], settings: &Settings) -> String {
    if trend.is_empty() {
        return "No budget records found.\n".to_string();
    }

    let max = trend
        .iter()
        .map(|(_, balance)| balance.as_f64())
        .fold(0.0_f64, f64::max);
    let amounts: Vec<String> = trend
        .iter()
        .map(|(_, balance)| settings.format_money(*balance))
        .collect();
    let width = amounts.iter().map(|a| a.chars().count()).max().unwrap_or(0);

    let mut output = String::new();
    output.push_str("Balance Trend\n");
    output.push_str(&format!("{}\n", separator(width + BAR_WIDTH + 11)));

    for ((period, balance), amount) in trend.iter().zip(&amounts) {
        output.push_str(&format!(
            "{}  {:>width$}  {}\n",
            period,
            amount,
            format_bar(balance.as_f64(), max, BAR_WIDTH),
            width = width
        ));
    }

    output
}

/// Format the running investment total, with goal progress when a goal is set
pub fn format_investment_report(
    periods: &[Period],
    cumulative: &[Money],
    progress: Option<&GoalProgress>,
    settings: &Settings,
) -> String {
    let mut output = String::new();
    output.push_str("Cumulative Investment\n");
    output.push_str(&format!("{}\n", separator(40)));

    if cumulative.is_empty() {
        output.push_str("No budget records found.\n");
    }

    for (period, total) in periods.iter().zip(cumulative) {
        output.push_str(&format!("{}  {:>16}\n", period, settings.format_money(*total)));
    }

    if let Some(progress) = progress {
        output.push('\n');
        output.push_str(&format_goal_progress(progress, settings));
    }

    output
}

/// Format progress toward the investment goal
pub fn format_goal_progress(progress: &GoalProgress, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Goal:      {}\n", settings.format_money(progress.goal)));
    output.push_str(&format!("Invested:  {}\n", settings.format_money(progress.invested)));
    output.push_str(&format!(
        "Progress:  {} {}\n",
        format_bar(progress.percent.min(100.0), 100.0, BAR_WIDTH),
        format_percentage(progress.percent)
    ));

    if progress.is_reached() {
        output.push_str("Goal reached!\n");
    } else {
        output.push_str(&format!(
            "Remaining: {}\n",
            settings.format_money(progress.remaining())
        ));
    }

    output
}

/// Format expense totals per category with each category's share
pub fn format_category_totals(
    totals: &ExpenseBreakdown,
    filter: PeriodFilter,
    settings: &Settings,
) -> String {
    let total = totals.total();

    let mut output = String::new();
    output.push_str(&format!("Expenses by Category ({})\n", filter));
    output.push_str(&format!("{}\n", separator(60)));

    for (category, amount) in totals.iter() {
        let share = if total.is_positive() {
            amount.as_f64() / total.as_f64() * 100.0
        } else {
            0.0
        };
        output.push_str(&format!(
            "{:<14} {:>16}  {}  {}\n",
            category.name(),
            settings.format_money(amount),
            format_bar(share, 100.0, BAR_WIDTH),
            format_percentage(share)
        ));
    }

    output.push_str(&format!("{}\n", separator(60)));
    output.push_str(&format!("{:<14} {:>16}\n", "Total", settings.format_money(total)));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseCategory;

    fn settings() -> Settings {
        Settings {
            currency_symbol: "$".into(),
            ..Settings::default()
        }
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(50.0), "50%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(-5.0, 100.0, 4), "    ");
    }

    #[test]
    fn test_balance_trend() {
        let trend = vec![
            (Period::new(2025, 1).unwrap(), Money::from_units(1000)),
            (Period::new(2025, 2).unwrap(), Money::from_units(-200)),
        ];
        let text = format_balance_trend(&trend, &settings());

        assert!(text.contains("01/2025"));
        assert!(text.contains("$1000.00"));
        assert!(text.contains("02/2025"));
        assert!(text.contains("-$200.00"));
    }

    #[test]
    fn test_goal_progress() {
        let progress = GoalProgress {
            goal: Money::from_units(1000),
            invested: Money::from_units(250),
            percent: 25.0,
        };
        let text = format_goal_progress(&progress, &settings());

        assert!(text.contains("Goal:      $1000.00"));
        assert!(text.contains("25%"));
        assert!(text.contains("Remaining: $750.00"));
    }

    #[test]
    fn test_category_totals_empty() {
        let text = format_category_totals(&ExpenseBreakdown::new(), PeriodFilter::All, &settings());

        assert!(text.contains(ExpenseCategory::Groceries.name()));
        assert!(text.contains("$0.00"));
    }
}
