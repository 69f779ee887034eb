//! Terminal rendering of the per-category expense distribution.

use crate::ledger::CategorySummary;

const CHART_TITLE: &str = "Expense Distribution by Category";
const BAR_WIDTH: usize = 30;

pub fn print_chart(summary: &CategorySummary) {
    for line in render(summary) {
        println!("{line}");
    }
}

/// Builds the chart lines: a title, then one bar per category with its
/// percentage share of the grand total. Empty summaries render nothing.
pub fn render(summary: &CategorySummary) -> Vec<String> {
    if summary.is_empty() {
        return Vec::new();
    }

    let label_width = summary
        .iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(0);
    let max_amount = summary.iter().map(|(_, amount)| amount).fold(0.0_f64, f64::max);

    let mut lines = vec![CHART_TITLE.to_string()];
    for (name, amount) in summary.iter() {
        let bar = format_bar(amount, max_amount, BAR_WIDTH);
        let share = format_percentage(summary.share_of_total(amount));
        lines.push(format!("{name:<label_width$}  {bar} {share:>6}"));
    }
    lines
}

/// Proportional bar representation of `value` against `max_value`.
fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Percentage with precision that tightens for small shares.
fn format_percentage(pct: f64) -> String {
    if pct > 0.0 && pct < 0.1 {
        format!("{pct:.2}%")
    } else if pct < 10.0 {
        format!("{pct:.1}%")
    } else {
        format!("{pct:.0}%")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_summary() -> CategorySummary {
        let mut summary = CategorySummary::default();
        summary.add("Food", 75.0);
        summary.add("Transport", 25.0);
        summary
    }

    #[test]
    fn render_includes_title_and_one_line_per_category() {
        let lines = render(&sample_summary());
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CHART_TITLE);
        assert!(lines[1].starts_with("Food"));
        assert!(lines[1].contains("75%"));
        assert!(lines[2].starts_with("Transport"));
        assert!(lines[2].contains("25%"));
    }

    #[test]
    fn render_skips_empty_summary() {
        assert!(render(&CategorySummary::default()).is_empty());
    }

    #[test]
    fn format_bar_scales_against_max() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(bar.chars().filter(|c| *c == '░').count(), 5);
    }

    #[test]
    fn format_bar_blanks_non_positive_values() {
        assert_eq!(format_bar(-4.0, 100.0, 8), " ".repeat(8));
        assert_eq!(format_bar(4.0, 0.0, 8), " ".repeat(8));
    }

    #[test]
    fn format_percentage_precision() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(50.0), "50%");
    }
}
