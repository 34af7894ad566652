use async_trait::async_trait;
use thiserror::Error;

use crate::models::{FinancialRecord, NewFinancialRecord};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Storage for raw financial figures. Ratios are never stored; callers
/// recompute them from the records they read back.
#[async_trait]
pub trait RatioRepository: Send + Sync {
    async fn create_record(
        &self,
        record: NewFinancialRecord,
    ) -> Result<FinancialRecord, RepositoryError>;

    async fn get_record(
        &self,
        id: i64,
    ) -> Result<FinancialRecord, RepositoryError>;

    /// The record for one company and year, or [`RepositoryError::NotFound`].
    async fn get_record_for_period(
        &self,
        company_name: &str,
        period_year: i32,
    ) -> Result<FinancialRecord, RepositoryError>;

    async fn update_record(
        &self,
        record: &FinancialRecord,
    ) -> Result<(), RepositoryError>;

    async fn delete_record(
        &self,
        id: i64,
    ) -> Result<(), RepositoryError>;

    /// All records, or one company's records, ordered by company then year.
    async fn list_records(
        &self,
        company_name: Option<&str>,
    ) -> Result<Vec<FinancialRecord>, RepositoryError>;

    async fn list_companies(&self) -> Result<Vec<String>, RepositoryError>;
}

/// Outcome of [`save_record`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Created(FinancialRecord),
    Updated(FinancialRecord),
}

impl SaveOutcome {
    pub fn record(&self) -> &FinancialRecord {
        match self {
            Self::Created(record) | Self::Updated(record) => record,
        }
    }
}

/// Inserts `new`, or overwrites the figures of the existing record for the
/// same company and year.
pub async fn save_record<R: RatioRepository + ?Sized>(
    repo: &R,
    new: NewFinancialRecord,
) -> Result<SaveOutcome, RepositoryError> {
    match repo
        .get_record_for_period(&new.company_name, new.period_year)
        .await
    {
        Ok(mut existing) => {
            existing.apply(new);
            repo.update_record(&existing).await?;
            let refreshed = repo.get_record(existing.id).await?;
            Ok(SaveOutcome::Updated(refreshed))
        }
        Err(RepositoryError::NotFound) => repo.create_record(new).await.map(SaveOutcome::Created),
        Err(e) => Err(e),
    }
}
