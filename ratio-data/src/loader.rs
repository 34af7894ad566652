use std::io::Read;

use ratio_core::{
    NewFinancialRecord, RatioRepository, RepositoryError, SaveOutcome, parse_amount, save_record,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur when loading financial records.
#[derive(Debug, Error)]
pub enum RecordLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("Line {line}: company name is empty")]
    MissingCompanyName { line: usize },

    #[error("Line {line}: period year must be positive, got {year}")]
    InvalidYear { line: usize, year: i32 },

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl From<csv::Error> for RecordLoaderError {
    fn from(err: csv::Error) -> Self {
        RecordLoaderError::CsvParse(err.to_string())
    }
}

/// A single row of the records CSV file.
///
/// Amount columns may be display-formatted (`1.250.000`) or plain; a blank
/// amount counts as zero.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RecordRow {
    pub company_name: String,
    pub period_year: i32,
    #[serde(deserialize_with = "deserialize_amount")]
    pub net_income: Decimal,
    #[serde(deserialize_with = "deserialize_amount")]
    pub current_assets: Decimal,
    #[serde(deserialize_with = "deserialize_amount")]
    pub current_liabilities: Decimal,
    #[serde(deserialize_with = "deserialize_amount")]
    pub revenue: Decimal,
    #[serde(deserialize_with = "deserialize_amount")]
    pub total_equity: Decimal,
}

fn deserialize_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().map_or(Decimal::ZERO, parse_amount))
}

impl From<RecordRow> for NewFinancialRecord {
    fn from(row: RecordRow) -> Self {
        Self {
            company_name: row.company_name,
            period_year: row.period_year,
            net_income: row.net_income,
            current_assets: row.current_assets,
            current_liabilities: row.current_liabilities,
            revenue: row.revenue,
            total_equity: row.total_equity,
        }
    }
}

/// Counts of what [`FinancialRecordLoader::load`] did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub created: usize,
    pub updated: usize,
}

impl LoadSummary {
    pub fn total(&self) -> usize {
        self.created + self.updated
    }
}

/// Loader for financial records from CSV files.
///
/// Works against any [`RatioRepository`], so the same CSV can be loaded into
/// whichever backend is configured.
pub struct FinancialRecordLoader;

impl FinancialRecordLoader {
    /// Parse and validate records from a CSV reader.
    ///
    /// Company names are trimmed. Line numbers in errors count the header as
    /// line 1.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<RecordRow>, RecordLoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(reader);
        let mut rows = Vec::new();

        for (index, result) in csv_reader.deserialize().enumerate() {
            let line = index + 2;
            let mut row: RecordRow = result?;
            row.company_name = row.company_name.trim().to_string();

            if row.company_name.is_empty() {
                return Err(RecordLoaderError::MissingCompanyName { line });
            }
            if row.period_year <= 0 {
                return Err(RecordLoaderError::InvalidYear {
                    line,
                    year: row.period_year,
                });
            }
            rows.push(row);
        }

        debug!(rows = rows.len(), "parsed records CSV");
        Ok(rows)
    }

    /// Store the rows, replacing any record already saved for the same
    /// company and year.
    ///
    /// Loading is idempotent: running the same file twice leaves the store
    /// unchanged the second time and reports every row as updated.
    pub async fn load<R: RatioRepository + ?Sized>(
        repo: &R,
        rows: &[RecordRow],
    ) -> Result<LoadSummary, RecordLoaderError> {
        let mut summary = LoadSummary::default();

        for row in rows {
            match save_record(repo, NewFinancialRecord::from(row.clone())).await? {
                SaveOutcome::Created(_) => summary.created += 1,
                SaveOutcome::Updated(_) => summary.updated += 1,
            }
        }

        info!(
            created = summary.created,
            updated = summary.updated,
            "loaded financial records"
        );
        Ok(summary)
    }
}
