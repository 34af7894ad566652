use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::parse_amount;

/// One period of figures for one company, already in numeric form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialInput {
    pub company_name: String,
    pub period_year: i32,
    pub net_income: Decimal,
    pub current_assets: Decimal,
    pub current_liabilities: Decimal,
    pub revenue: Decimal,
    pub total_equity: Decimal,
}

impl FinancialInput {
    /// Builds an input from display-formatted amounts such as `"1.250.000"`.
    ///
    /// Every amount goes through [`parse_amount`], so blank or garbled
    /// fields become zero instead of failing.
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use ratio_core::FinancialInput;
    ///
    /// let input = FinancialInput::from_raw(
    ///     "PT Ratio Finansial",
    ///     2026,
    ///     ["150.000.000", "500.000.000", "300.000.000", "", "1.000.000.000"],
    /// );
    ///
    /// assert_eq!(input.net_income, dec!(150000000));
    /// assert_eq!(input.revenue, dec!(0));
    /// ```
    ///
    /// The amounts are ordered net income, current assets, current
    /// liabilities, revenue, total equity.
    pub fn from_raw(
        company_name: &str,
        period_year: i32,
        amounts: [&str; 5],
    ) -> Self {
        let [net_income, current_assets, current_liabilities, revenue, total_equity] = amounts;
        Self {
            company_name: company_name.trim().to_string(),
            period_year,
            net_income: parse_amount(net_income),
            current_assets: parse_amount(current_assets),
            current_liabilities: parse_amount(current_liabilities),
            revenue: parse_amount(revenue),
            total_equity: parse_amount(total_equity),
        }
    }
}
