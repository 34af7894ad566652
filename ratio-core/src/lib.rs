pub mod calculations;
pub mod db;
pub mod models;

pub use calculations::{
    FinancialReport, PeriodRatios, RatioAssessment, analyze, classify, classify_key,
    compute_ratios, format_thousands, health_score, insight, insight_key, parse_amount,
    period_trend,
};
pub use db::repository::{RatioRepository, RepositoryError, SaveOutcome, save_record};
pub use models::*;
