use std::str::FromStr;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use ratio_core::{FinancialRecord, NewFinancialRecord, RatioRepository, RepositoryError};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqliteRow};
use sqlx::Row;
use tracing::debug;

use crate::decimal::get_decimal;

const SELECT_RECORD: &str = "SELECT id, company_name, period_year, net_income, current_assets,
        current_liabilities, revenue, total_equity, created_at, updated_at
     FROM financial_record";

pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    /// Connects to `database_url`, creating the database file if missing.
    ///
    /// Accepts a sqlx URL (`sqlite:ratios.db`), a bare path (`ratios.db`)
    /// or `:memory:`.
    pub async fn new(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("Invalid database URL: {}", database_url))?
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(options)
            .await
            .with_context(|| format!("Failed to connect to database: {}", database_url))?;
        Ok(Self { pool })
    }

    pub async fn new_with_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("Failed to run database migrations")?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn row_to_financial_record(row: &SqliteRow) -> Result<FinancialRecord, RepositoryError> {
    Ok(FinancialRecord {
        id: row
            .try_get("id")
            .map_err(|e| RepositoryError::Database(e.to_string()))?,
        company_name: row
            .try_get("company_name")
            .map_err(|e| RepositoryError::Database(e.to_string()))?,
        period_year: row
            .try_get("period_year")
            .map_err(|e| RepositoryError::Database(e.to_string()))?,
        net_income: get_decimal(row, "net_income")?,
        current_assets: get_decimal(row, "current_assets")?,
        current_liabilities: get_decimal(row, "current_liabilities")?,
        revenue: get_decimal(row, "revenue")?,
        total_equity: get_decimal(row, "total_equity")?,
        created_at: row
            .try_get::<DateTime<Utc>, _>("created_at")
            .map_err(|e| RepositoryError::Database(format!("Failed to get created_at: {}", e)))?,
        updated_at: row
            .try_get::<DateTime<Utc>, _>("updated_at")
            .map_err(|e| RepositoryError::Database(format!("Failed to get updated_at: {}", e)))?,
    })
}

#[async_trait]
impl RatioRepository for SqliteRepository {
    async fn create_record(
        &self,
        record: NewFinancialRecord,
    ) -> Result<FinancialRecord, RepositoryError> {
        let now = Utc::now();

        let result = sqlx::query(
            "INSERT INTO financial_record (
                company_name, period_year, net_income, current_assets,
                current_liabilities, revenue, total_equity, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&record.company_name)
        .bind(record.period_year)
        .bind(record.net_income.to_string())
        .bind(record.current_assets.to_string())
        .bind(record.current_liabilities.to_string())
        .bind(record.revenue.to_string())
        .bind(record.total_equity.to_string())
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        let id = result.last_insert_rowid();
        debug!(id, company = %record.company_name, year = record.period_year, "created record");
        self.get_record(id).await
    }

    async fn get_record(
        &self,
        id: i64,
    ) -> Result<FinancialRecord, RepositoryError> {
        let row = sqlx::query(&format!("{} WHERE id = ?", SELECT_RECORD))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?
            .ok_or(RepositoryError::NotFound)?;

        row_to_financial_record(&row)
    }

    async fn get_record_for_period(
        &self,
        company_name: &str,
        period_year: i32,
    ) -> Result<FinancialRecord, RepositoryError> {
        let row = sqlx::query(&format!(
            "{} WHERE company_name = ? AND period_year = ?",
            SELECT_RECORD
        ))
        .bind(company_name)
        .bind(period_year)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?
        .ok_or(RepositoryError::NotFound)?;

        row_to_financial_record(&row)
    }

    async fn update_record(
        &self,
        record: &FinancialRecord,
    ) -> Result<(), RepositoryError> {
        let now = Utc::now();

        let result = sqlx::query(
            "UPDATE financial_record SET
                company_name = ?, period_year = ?, net_income = ?, current_assets = ?,
                current_liabilities = ?, revenue = ?, total_equity = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(&record.company_name)
        .bind(record.period_year)
        .bind(record.net_income.to_string())
        .bind(record.current_assets.to_string())
        .bind(record.current_liabilities.to_string())
        .bind(record.revenue.to_string())
        .bind(record.total_equity.to_string())
        .bind(now)
        .bind(record.id)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        debug!(id = record.id, "updated record");
        Ok(())
    }

    async fn delete_record(
        &self,
        id: i64,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM financial_record WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        debug!(id, "deleted record");
        Ok(())
    }

    async fn list_records(
        &self,
        company_name: Option<&str>,
    ) -> Result<Vec<FinancialRecord>, RepositoryError> {
        let rows = match company_name {
            Some(company) => {
                sqlx::query(&format!(
                    "{} WHERE company_name = ? ORDER BY company_name, period_year",
                    SELECT_RECORD
                ))
                .bind(company)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query(&format!("{} ORDER BY company_name, period_year", SELECT_RECORD))
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        rows.iter().map(row_to_financial_record).collect()
    }

    async fn list_companies(&self) -> Result<Vec<String>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT DISTINCT company_name FROM financial_record ORDER BY company_name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        rows.iter()
            .map(|row| {
                row.try_get("company_name")
                    .map_err(|e| RepositoryError::Database(e.to_string()))
            })
            .collect()
    }
}
