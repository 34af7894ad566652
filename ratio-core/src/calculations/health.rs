//! Aggregate 0-100 health score.
//!
//! | Ratio | Full points | Half points | Otherwise |
//! |-------|-------------|-------------|-----------|
//! | Current ratio | 30 if >= 1.5 | 15 if >= 1.0 | 0 |
//! | Net profit margin | 40 if >= 15 | 20 if >= 5 | 0 |
//! | Return on equity | 30 if >= 15 | 15 if >= 8 | 0 |

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::RatioResult;

/// Points awarded for one ratio: `(threshold, points)` pairs, best first.
type Buckets = [(Decimal, u8); 2];

const CURRENT_RATIO_BUCKETS: Buckets = [(dec!(1.5), 30), (dec!(1.0), 15)];
const NET_PROFIT_MARGIN_BUCKETS: Buckets = [(dec!(15), 40), (dec!(5), 20)];
const RETURN_ON_EQUITY_BUCKETS: Buckets = [(dec!(15), 30), (dec!(8), 15)];

fn points(
    value: Decimal,
    buckets: &Buckets,
) -> u8 {
    buckets
        .iter()
        .find(|(threshold, _)| value >= *threshold)
        .map_or(0, |(_, points)| *points)
}

/// Scores a set of ratios from 0 to 100.
///
/// ```
/// use rust_decimal_macros::dec;
/// use ratio_core::{RatioResult, health_score};
///
/// let ratios = RatioResult {
///     current_ratio: dec!(1.67),
///     net_profit_margin: dec!(7.50),
///     return_on_equity: dec!(15.00),
/// };
///
/// assert_eq!(health_score(&ratios), 80);
/// ```
pub fn health_score(result: &RatioResult) -> u8 {
    points(result.current_ratio, &CURRENT_RATIO_BUCKETS)
        + points(result.net_profit_margin, &NET_PROFIT_MARGIN_BUCKETS)
        + points(result.return_on_equity, &RETURN_ON_EQUITY_BUCKETS)
}
