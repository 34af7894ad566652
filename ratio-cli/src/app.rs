//! Glue between the command line and the engine and repository.

use ratio_core::db::RepositoryRegistry;
use ratio_core::{
    FinancialInput, FinancialReport, NewFinancialRecord, PeriodRatios, RatioRepository,
    RepositoryError, SaveOutcome, analyze, period_trend, save_record,
};
use ratio_db_sqlite::SqliteRepositoryFactory;
use thiserror::Error;
use tracing::{debug, info};

/// Registry with every backend this binary ships with.
pub fn build_registry() -> RepositoryRegistry {
    let mut registry = RepositoryRegistry::new();
    registry.register(Box::new(SqliteRepositoryFactory));
    registry
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("company name is required")]
    MissingCompanyName,

    #[error("invalid period year '{0}'")]
    InvalidYear(String),
}

/// Analysis form as typed by the user. Amounts stay display-formatted
/// until [`AnalysisForm::validate`].
#[derive(Debug, Clone, Default)]
pub struct AnalysisForm {
    pub company_name: String,
    pub period_year: String,
    pub net_income: String,
    pub current_assets: String,
    pub current_liabilities: String,
    pub revenue: String,
    pub total_equity: String,
}

impl AnalysisForm {
    /// Checks the required fields and normalizes the amounts.
    ///
    /// Only the company name and the year can fail; amounts that do not
    /// parse are read as zero.
    pub fn validate(&self) -> Result<FinancialInput, FormError> {
        let company_name = self.company_name.trim();
        if company_name.is_empty() {
            return Err(FormError::MissingCompanyName);
        }
        let period_year = self
            .period_year
            .trim()
            .parse::<i32>()
            .map_err(|_| FormError::InvalidYear(self.period_year.clone()))?;

        Ok(FinancialInput::from_raw(
            company_name,
            period_year,
            [
                self.net_income.as_str(),
                self.current_assets.as_str(),
                self.current_liabilities.as_str(),
                self.revenue.as_str(),
                self.total_equity.as_str(),
            ],
        ))
    }
}

/// Runs the engine and, when `repo` is given, stores the figures.
pub async fn run_analysis(
    input: &FinancialInput,
    repo: Option<&dyn RatioRepository>,
) -> Result<(FinancialReport, Option<SaveOutcome>), RepositoryError> {
    let report = analyze(input);
    debug!(
        company = %report.company_name,
        year = report.period_year,
        score = report.health_score,
        "analysis complete"
    );

    let saved = match repo {
        Some(repo) => {
            let outcome = save_record(repo, NewFinancialRecord::from(input.clone())).await?;
            match &outcome {
                SaveOutcome::Created(record) => info!(id = record.id, "record saved"),
                SaveOutcome::Updated(record) => info!(id = record.id, "record replaced"),
            }
            Some(outcome)
        }
        None => None,
    };
    Ok((report, saved))
}

/// Saved periods with recomputed ratios, optionally for one company.
pub async fn load_trend(
    repo: &dyn RatioRepository,
    company_name: Option<&str>,
) -> Result<Vec<PeriodRatios>, RepositoryError> {
    let records = repo.list_records(company_name).await?;
    debug!(count = records.len(), "records loaded");
    Ok(period_trend(&records))
}

/// Deletes one saved record, reporting its company and year.
pub async fn delete_record(
    repo: &dyn RatioRepository,
    id: i64,
) -> Result<(String, i32), RepositoryError> {
    let record = repo.get_record(id).await?;
    repo.delete_record(id).await?;
    info!(id, company = %record.company_name, year = record.period_year, "record deleted");
    Ok((record.company_name, record.period_year))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratio_core::db::DbConfig;
    use rust_decimal_macros::dec;

    use super::*;

    fn form(company_name: &str) -> AnalysisForm {
        AnalysisForm {
            company_name: company_name.to_string(),
            period_year: "2026".to_string(),
            net_income: "150.000.000".to_string(),
            current_assets: "500.000.000".to_string(),
            current_liabilities: "300.000.000".to_string(),
            revenue: "2.000.000.000".to_string(),
            total_equity: "1.000.000.000".to_string(),
        }
    }

    async fn memory_repo() -> Box<dyn RatioRepository> {
        let config = DbConfig {
            backend: "sqlite".to_string(),
            connection_string: ":memory:".to_string(),
        };
        build_registry().create(&config).await.unwrap()
    }

    #[test]
    fn registry_offers_sqlite() {
        assert_eq!(build_registry().available_backends(), vec!["sqlite"]);
    }

    #[test]
    fn blank_company_name_is_rejected() {
        assert_eq!(form("   ").validate(), Err(FormError::MissingCompanyName));
    }

    #[test]
    fn bad_year_is_rejected() {
        let mut form = form("PT Ratio Finansial");
        form.period_year = "twenty".to_string();

        assert_eq!(
            form.validate(),
            Err(FormError::InvalidYear("twenty".to_string()))
        );
    }

    #[test]
    fn validate_normalizes_amounts() {
        let input = form("  PT Ratio Finansial ").validate().unwrap();

        assert_eq!(input.company_name, "PT Ratio Finansial");
        assert_eq!(input.period_year, 2026);
        assert_eq!(input.revenue, dec!(2000000000));
        assert_eq!(input.total_equity, dec!(1000000000));
    }

    #[tokio::test]
    async fn analysis_without_repo_saves_nothing() {
        let input = form("PT Ratio Finansial").validate().unwrap();

        let (report, saved) = run_analysis(&input, None).await.unwrap();

        assert_eq!(report.health_score, 80);
        assert!(saved.is_none());
    }

    #[tokio::test]
    async fn saving_twice_replaces_the_period() {
        let repo = memory_repo().await;
        let input = form("PT Ratio Finansial").validate().unwrap();

        let (_, first) = run_analysis(&input, Some(&*repo)).await.unwrap();
        assert!(matches!(first, Some(SaveOutcome::Created(_))));

        let mut changed = input.clone();
        changed.net_income = dec!(400000000);
        let (report, second) = run_analysis(&changed, Some(&*repo)).await.unwrap();
        assert!(matches!(second, Some(SaveOutcome::Updated(_))));

        let trend = load_trend(&*repo, None).await.unwrap();
        assert_eq!(trend.len(), 1);
        assert_eq!(trend[0].ratios, report.ratios);
    }

    #[tokio::test]
    async fn trend_filters_by_company() {
        let repo = memory_repo().await;
        for name in ["PT Ratio Finansial", "CV Sumber Makmur"] {
            let input = form(name).validate().unwrap();
            run_analysis(&input, Some(&*repo)).await.unwrap();
        }

        let all = load_trend(&*repo, None).await.unwrap();
        let one = load_trend(&*repo, Some("CV Sumber Makmur")).await.unwrap();

        assert_eq!(all.len(), 2);
        assert_eq!(all[0].company_name, "CV Sumber Makmur");
        assert_eq!(one.len(), 1);
    }

    #[tokio::test]
    async fn delete_removes_the_record() {
        let repo = memory_repo().await;
        let input = form("PT Ratio Finansial").validate().unwrap();
        let (_, saved) = run_analysis(&input, Some(&*repo)).await.unwrap();
        let id = saved.unwrap().record().id;

        let deleted = delete_record(&*repo, id).await.unwrap();

        assert_eq!(deleted, ("PT Ratio Finansial".to_string(), 2026));
        assert_eq!(delete_record(&*repo, id).await, Err(RepositoryError::NotFound));
    }
}
