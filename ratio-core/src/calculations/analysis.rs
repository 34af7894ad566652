//! Whole-period analysis built from the individual engine functions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::{classify, compute_ratios, health_score, insight};
use crate::{FinancialInput, FinancialRecord, Label, RatioKind, RatioResult};

/// Value, label and insight for one ratio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatioAssessment {
    pub kind: RatioKind,
    pub value: Decimal,
    pub label: Label,
    pub insight: String,
}

impl RatioAssessment {
    pub fn new(
        kind: RatioKind,
        value: Decimal,
    ) -> Self {
        Self {
            kind,
            value,
            label: classify(kind, value),
            insight: insight(kind, value).to_string(),
        }
    }
}

/// Everything a report needs for one company and period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialReport {
    pub company_name: String,
    pub period_year: i32,
    pub ratios: RatioResult,
    /// One entry per [`RatioKind::ALL`], in that order.
    pub assessments: Vec<RatioAssessment>,
    pub health_score: u8,
}

/// Runs the full engine over one input.
pub fn analyze(input: &FinancialInput) -> FinancialReport {
    let ratios = compute_ratios(input);
    FinancialReport {
        company_name: input.company_name.clone(),
        period_year: input.period_year,
        ratios,
        assessments: RatioKind::ALL
            .iter()
            .map(|kind| RatioAssessment::new(*kind, ratios.get(*kind)))
            .collect(),
        health_score: health_score(&ratios),
    }
}

/// Ratios derived from a stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodRatios {
    pub record_id: i64,
    pub company_name: String,
    pub period_year: i32,
    pub ratios: RatioResult,
    pub health_score: u8,
}

/// Recomputes ratios for stored records, ordered by company then year.
pub fn period_trend(records: &[FinancialRecord]) -> Vec<PeriodRatios> {
    let mut trend: Vec<PeriodRatios> = records
        .iter()
        .map(|record| {
            let ratios = compute_ratios(&FinancialInput::from(record));
            PeriodRatios {
                record_id: record.id,
                company_name: record.company_name.clone(),
                period_year: record.period_year,
                ratios,
                health_score: health_score(&ratios),
            }
        })
        .collect();
    trend.sort_by(|a, b| {
        a.company_name
            .cmp(&b.company_name)
            .then(a.period_year.cmp(&b.period_year))
    });
    trend
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn reference_input() -> FinancialInput {
        FinancialInput {
            company_name: "PT Ratio Finansial".to_string(),
            period_year: 2026,
            net_income: dec!(150000000),
            current_assets: dec!(500000000),
            current_liabilities: dec!(300000000),
            revenue: dec!(2000000000),
            total_equity: dec!(1000000000),
        }
    }

    fn record(
        id: i64,
        company_name: &str,
        period_year: i32,
        current_liabilities: Decimal,
    ) -> FinancialRecord {
        let now = Utc::now();
        FinancialRecord {
            id,
            company_name: company_name.to_string(),
            period_year,
            net_income: dec!(100),
            current_assets: dec!(300),
            current_liabilities,
            revenue: dec!(1000),
            total_equity: dec!(500),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn analyze_reference_scenario() {
        let report = analyze(&reference_input());

        assert_eq!(report.company_name, "PT Ratio Finansial");
        assert_eq!(report.period_year, 2026);
        assert_eq!(report.health_score, 80);

        let labels: Vec<Label> = report.assessments.iter().map(|a| a.label).collect();
        assert_eq!(labels, vec![Label::Healthy, Label::LowMargin, Label::Suboptimal]);

        let kinds: Vec<RatioKind> = report.assessments.iter().map(|a| a.kind).collect();
        assert_eq!(kinds, RatioKind::ALL.to_vec());
    }

    #[test]
    fn analyze_zero_liabilities_is_liquidity_risk() {
        let mut input = reference_input();
        input.current_liabilities = dec!(0);

        let report = analyze(&input);

        assert_eq!(report.ratios.current_ratio, dec!(0));
        assert_eq!(report.assessments[0].label, Label::LiquidityRisk);
        assert_eq!(
            report.assessments[0].insight,
            insight(RatioKind::CurrentRatio, dec!(0))
        );
    }

    #[test]
    fn period_trend_sorts_by_company_then_year() {
        let records = vec![
            record(1, "PT B", 2024, dec!(100)),
            record(2, "PT A", 2025, dec!(100)),
            record(3, "PT A", 2023, dec!(300)),
        ];

        let trend = period_trend(&records);

        let keys: Vec<(i64, &str, i32)> = trend
            .iter()
            .map(|p| (p.record_id, p.company_name.as_str(), p.period_year))
            .collect();
        assert_eq!(
            keys,
            vec![(3, "PT A", 2023), (2, "PT A", 2025), (1, "PT B", 2024)]
        );
        assert_eq!(trend[0].ratios.current_ratio, dec!(1.00));
        assert_eq!(trend[1].ratios.current_ratio, dec!(3.00));
    }

    #[test]
    fn period_trend_of_nothing_is_empty() {
        assert!(period_trend(&[]).is_empty());
    }
}
