use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::RatioKind;

/// The three ratios for one period, each rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RatioResult {
    pub current_ratio: Decimal,
    pub net_profit_margin: Decimal,
    pub return_on_equity: Decimal,
}

impl RatioResult {
    pub fn get(
        &self,
        kind: RatioKind,
    ) -> Decimal {
        match kind {
            RatioKind::CurrentRatio => self.current_ratio,
            RatioKind::NetProfitMargin => self.net_profit_margin,
            RatioKind::ReturnOnEquity => self.return_on_equity,
        }
    }
}
