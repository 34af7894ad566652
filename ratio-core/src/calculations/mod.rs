//! Ratio engine: amount normalization, ratio formulas, classification,
//! insight text and the aggregate health score.
//!
//! Every function in this module is pure and total. Bad input degrades to
//! zero or to a sentinel value instead of an error, so callers never have to
//! handle a failure from the engine itself.

pub mod amount;
pub mod analysis;
pub mod classification;
pub mod common;
pub mod health;
pub mod insight;
pub mod ratios;

pub use amount::{format_thousands, parse_amount};
pub use analysis::{FinancialReport, PeriodRatios, RatioAssessment, analyze, period_trend};
pub use classification::{classify, classify_key};
pub use health::health_score;
pub use insight::{insight, insight_key};
pub use ratios::compute_ratios;
