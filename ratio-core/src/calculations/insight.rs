//! One-sentence explanations per ratio value.
//!
//! Insights use three tiers with inclusive lower bounds, independent of the
//! strict thresholds used for labels.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::RatioKind;

pub const NO_ANALYSIS: &str = "No analysis available.";

/// Picks the explanatory sentence for a ratio value.
///
/// | Ratio | Top tier | Middle tier |
/// |-------|----------|-------------|
/// | Current ratio | >= 2 | >= 1 |
/// | Net profit margin | >= 20 | >= 10 |
/// | Return on equity | >= 15 | >= 8 |
pub fn insight(
    kind: RatioKind,
    value: Decimal,
) -> &'static str {
    match kind {
        RatioKind::CurrentRatio => {
            if value >= dec!(2) {
                "Very safe: current assets cover short-term liabilities at least twice over."
            } else if value >= dec!(1) {
                "Adequate: current assets cover short-term liabilities, but the buffer is thin and worth watching."
            } else {
                "High risk: current assets are not enough to pay short-term liabilities."
            }
        }
        RatioKind::NetProfitMargin => {
            if value >= dec!(20) {
                "Very efficient: at least a fifth of every sale is kept as net profit."
            } else if value >= dec!(10) {
                "Standard: profitability sits in the normal range for most industries."
            } else {
                "Thin margin: costs absorb most of the revenue, so pricing and expenses deserve a review."
            }
        }
        RatioKind::ReturnOnEquity => {
            if value >= dec!(15) {
                "Very effective: shareholders' equity is producing strong returns."
            } else if value >= dec!(8) {
                "Stable: equity earns a moderate, steady return."
            } else {
                "Low return: equity is not being put to productive use."
            }
        }
    }
}

/// String-keyed variant of [`insight`]; unknown keys yield [`NO_ANALYSIS`].
pub fn insight_key(
    key: &str,
    value: Decimal,
) -> &'static str {
    RatioKind::parse(key).map_or(NO_ANALYSIS, |kind| insight(kind, value))
}
