//! Status labels for ratio values.
//!
//! Each ratio has a single strict threshold: a value must be *above* it to
//! earn the favorable label.
//!
//! | Ratio | Above threshold | At or below |
//! |-------|-----------------|-------------|
//! | Current ratio (1.5) | Healthy | Liquidity Risk |
//! | Net profit margin (10%) | Efficient | Low Margin |
//! | Return on equity (15%) | Very Good | Suboptimal |

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::{Label, RatioKind};

pub const CURRENT_RATIO_HEALTHY_ABOVE: Decimal = dec!(1.5);
pub const NET_PROFIT_MARGIN_EFFICIENT_ABOVE: Decimal = dec!(10);
pub const RETURN_ON_EQUITY_VERY_GOOD_ABOVE: Decimal = dec!(15);

/// Classifies a ratio value.
///
/// ```
/// use rust_decimal_macros::dec;
/// use ratio_core::{Label, RatioKind, classify};
///
/// assert_eq!(classify(RatioKind::CurrentRatio, dec!(1.51)), Label::Healthy);
/// assert_eq!(classify(RatioKind::CurrentRatio, dec!(1.50)), Label::LiquidityRisk);
/// ```
pub fn classify(
    kind: RatioKind,
    value: Decimal,
) -> Label {
    match kind {
        RatioKind::CurrentRatio if value > CURRENT_RATIO_HEALTHY_ABOVE => Label::Healthy,
        RatioKind::CurrentRatio => Label::LiquidityRisk,
        RatioKind::NetProfitMargin if value > NET_PROFIT_MARGIN_EFFICIENT_ABOVE => {
            Label::Efficient
        }
        RatioKind::NetProfitMargin => Label::LowMargin,
        RatioKind::ReturnOnEquity if value > RETURN_ON_EQUITY_VERY_GOOD_ABOVE => Label::VeryGood,
        RatioKind::ReturnOnEquity => Label::Suboptimal,
    }
}

/// Classifies by string key, for callers that carry ratio names as text.
///
/// Returns [`Label::Unknown`] when the key names no known ratio.
pub fn classify_key(
    key: &str,
    value: Decimal,
) -> Label {
    RatioKind::parse(key).map_or(Label::Unknown, |kind| classify(kind, value))
}
