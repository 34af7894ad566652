//! Horizontal bar chart of one ratio across saved periods.

use std::fmt::Write;

use ratio_core::{PeriodRatios, RatioKind};
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

use crate::report::format_ratio;

pub const DEFAULT_WIDTH: usize = 40;
const BAR: char = '#';

/// Bar length for `value` when `max` fills `width` cells.
///
/// Zero and negative values get no bar.
fn bar_len(
    value: Decimal,
    max: Decimal,
    width: usize,
) -> usize {
    if value <= Decimal::ZERO || max <= Decimal::ZERO {
        return 0;
    }
    let Some(width_dec) = Decimal::from_usize(width) else {
        return 0;
    };
    (value / max * width_dec)
        .round()
        .to_usize()
        .unwrap_or(0)
        .min(width)
}

/// One line per period: `company year | bars value`.
pub fn render_bar_chart(
    kind: RatioKind,
    trend: &[PeriodRatios],
    width: usize,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", kind.display_name());
    if trend.is_empty() {
        let _ = writeln!(out, "No saved records.");
        return out;
    }

    let max = trend
        .iter()
        .map(|period| period.ratios.get(kind))
        .max()
        .unwrap_or(Decimal::ZERO);
    let label_width = trend
        .iter()
        .map(|period| period.company_name.chars().count())
        .max()
        .unwrap_or(0);

    for period in trend {
        let value = period.ratios.get(kind);
        let bar: String = std::iter::repeat_n(BAR, bar_len(value, max, width)).collect();
        let _ = writeln!(
            out,
            "{:<label_width$} {} | {:<width$} {}",
            period.company_name,
            period.period_year,
            bar,
            format_ratio(kind, value)
        );
    }
    out
}
