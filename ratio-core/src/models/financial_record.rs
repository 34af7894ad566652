use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::FinancialInput;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialRecord {
    pub id: i64,
    pub company_name: String,
    pub period_year: i32,
    pub net_income: Decimal,
    pub current_assets: Decimal,
    pub current_liabilities: Decimal,
    pub revenue: Decimal,
    pub total_equity: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// For creating new records (no id or timestamps)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFinancialRecord {
    pub company_name: String,
    pub period_year: i32,
    pub net_income: Decimal,
    pub current_assets: Decimal,
    pub current_liabilities: Decimal,
    pub revenue: Decimal,
    pub total_equity: Decimal,
}

impl From<&FinancialRecord> for FinancialInput {
    fn from(record: &FinancialRecord) -> Self {
        Self {
            company_name: record.company_name.clone(),
            period_year: record.period_year,
            net_income: record.net_income,
            current_assets: record.current_assets,
            current_liabilities: record.current_liabilities,
            revenue: record.revenue,
            total_equity: record.total_equity,
        }
    }
}

impl From<FinancialInput> for NewFinancialRecord {
    fn from(input: FinancialInput) -> Self {
        Self {
            company_name: input.company_name,
            period_year: input.period_year,
            net_income: input.net_income,
            current_assets: input.current_assets,
            current_liabilities: input.current_liabilities,
            revenue: input.revenue,
            total_equity: input.total_equity,
        }
    }
}

impl FinancialRecord {
    /// Copies the figures of `new` onto this record, keeping id and timestamps.
    pub fn apply(
        &mut self,
        new: NewFinancialRecord,
    ) {
        self.company_name = new.company_name;
        self.period_year = new.period_year;
        self.net_income = new.net_income;
        self.current_assets = new.current_assets;
        self.current_liabilities = new.current_liabilities;
        self.revenue = new.revenue;
        self.total_equity = new.total_equity;
    }
}
