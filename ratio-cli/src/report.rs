//! Plain-text rendering of analysis results for the terminal.

use std::fmt::Write;

use ratio_core::{
    FinancialInput, FinancialReport, PeriodRatios, RatioKind, classify, format_thousands,
};
use rust_decimal::Decimal;

const FAVORABLE: &str = "+";
const UNFAVORABLE: &str = "!";

/// Ratio value with exactly two decimals and its unit suffix, e.g. `7.50%`.
pub fn format_ratio(
    kind: RatioKind,
    value: Decimal,
) -> String {
    let mut value = value;
    value.rescale(2);
    format!("{value}{}", kind.suffix())
}

/// Full report for one analysis: the inputs, one block per ratio, the score.
pub fn render_report(
    report: &FinancialReport,
    input: &FinancialInput,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", report.company_name, report.period_year);
    let _ = writeln!(out);

    let amounts = [
        ("Net income", input.net_income),
        ("Current assets", input.current_assets),
        ("Current liabilities", input.current_liabilities),
        ("Revenue", input.revenue),
        ("Total equity", input.total_equity),
    ];
    for (name, amount) in amounts {
        let _ = writeln!(out, "  {name:<20} {:>20}", format_thousands(amount));
    }
    let _ = writeln!(out);

    for assessment in &report.assessments {
        let marker = if assessment.label.is_favorable() {
            FAVORABLE
        } else {
            UNFAVORABLE
        };
        let _ = writeln!(
            out,
            "{marker} {:<18} {:>10}  [{}]",
            assessment.kind.display_name(),
            format_ratio(assessment.kind, assessment.value),
            assessment.label
        );
        let _ = writeln!(out, "    {}", assessment.insight);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Health Score: {}/100", report.health_score);
    out
}

/// Table of saved periods with their derived ratios.
pub fn render_history(trend: &[PeriodRatios]) -> String {
    if trend.is_empty() {
        return "No saved records.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>5}  {:<28} {:>6}  {:>24}  {:>24}  {:>24}  {:>6}",
        "ID", "Company", "Year", "Current Ratio", "Net Profit Margin", "Return on Equity", "Health"
    );
    for period in trend {
        let _ = write!(
            out,
            "{:>5}  {:<28} {:>6}",
            period.record_id, period.company_name, period.period_year
        );
        for kind in RatioKind::ALL {
            let value = period.ratios.get(kind);
            let cell = format!("{} {}", format_ratio(kind, value), classify(kind, value));
            let _ = write!(out, "  {cell:>24}");
        }
        let _ = writeln!(out, "  {:>6}", period.health_score);
    }
    out
}
