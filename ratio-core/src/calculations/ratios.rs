//! Ratio formulas.
//!
//! | Ratio | Formula | Zero denominator |
//! |-------|---------|------------------|
//! | Current ratio | current assets / current liabilities | 0 |
//! | Net profit margin | net income / revenue × 100 | 0 |
//! | Return on equity | net income / total equity × 100 | 0 |
//!
//! All three are rounded to two decimals with [`round_half_up`].

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::calculations::common::round_half_up;
use crate::{FinancialInput, RatioResult};

/// Divides and scales, returning zero when the denominator is zero or the
/// arithmetic leaves the representable range.
fn ratio(
    numerator: Decimal,
    denominator: Decimal,
    scale: Decimal,
) -> Decimal {
    if denominator.is_zero() {
        return Decimal::ZERO;
    }
    numerator
        .checked_div(denominator)
        .and_then(|quotient| quotient.checked_mul(scale))
        .map(round_half_up)
        .unwrap_or_else(|| {
            warn!(%numerator, %denominator, "ratio overflowed, reporting zero");
            Decimal::ZERO
        })
}

/// Computes the three ratios for one period.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use ratio_core::{FinancialInput, compute_ratios};
///
/// let input = FinancialInput {
///     company_name: "PT Ratio Finansial".to_string(),
///     period_year: 2026,
///     net_income: dec!(150000000),
///     current_assets: dec!(500000000),
///     current_liabilities: dec!(300000000),
///     revenue: dec!(2000000000),
///     total_equity: dec!(1000000000),
/// };
///
/// let result = compute_ratios(&input);
///
/// assert_eq!(result.current_ratio, dec!(1.67));
/// assert_eq!(result.net_profit_margin, dec!(7.50));
/// assert_eq!(result.return_on_equity, dec!(15.00));
/// ```
pub fn compute_ratios(input: &FinancialInput) -> RatioResult {
    let result = RatioResult {
        current_ratio: ratio(input.current_assets, input.current_liabilities, Decimal::ONE),
        net_profit_margin: ratio(input.net_income, input.revenue, Decimal::ONE_HUNDRED),
        return_on_equity: ratio(input.net_income, input.total_equity, Decimal::ONE_HUNDRED),
    };
    debug!(
        company = %input.company_name,
        year = input.period_year,
        current_ratio = %result.current_ratio,
        net_profit_margin = %result.net_profit_margin,
        return_on_equity = %result.return_on_equity,
        "computed ratios"
    );
    result
}
