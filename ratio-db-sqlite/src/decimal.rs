use std::str::FromStr;

use ratio_core::RepositoryError;
use rust_decimal::Decimal;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, TypeInfo, ValueRef};

/// Reads an amount column.
///
/// Amounts are written as TEXT so they come back digit for digit. Rows
/// written by other tools may hold INTEGER or REAL amounts; those decode
/// too. NULL is an error.
pub fn get_decimal(
    row: &SqliteRow,
    column: &str,
) -> Result<Decimal, RepositoryError> {
    let value_ref = row
        .try_get_raw(column)
        .map_err(|e| RepositoryError::Database(format!("Column '{}' not found: {}", column, e)))?;

    if value_ref.is_null() {
        return Err(RepositoryError::Database(format!(
            "Column '{}' is NULL",
            column
        )));
    }

    let type_name = value_ref.type_info().name().to_string();
    match type_name.as_str() {
        "TEXT" => {
            let text: String = row.try_get(column).map_err(|e| {
                RepositoryError::Database(format!("Failed to get TEXT from '{}': {}", column, e))
            })?;
            Decimal::from_str(text.trim()).map_err(|e| {
                RepositoryError::Database(format!(
                    "Invalid decimal '{}' in '{}': {}",
                    text, column, e
                ))
            })
        }
        "INTEGER" => {
            let val: i64 = row.try_get(column).map_err(|e| {
                RepositoryError::Database(format!(
                    "Failed to get INTEGER from '{}': {}",
                    column, e
                ))
            })?;
            Ok(Decimal::from(val))
        }
        "REAL" => {
            let val: f64 = row.try_get(column).map_err(|e| {
                RepositoryError::Database(format!("Failed to get REAL from '{}': {}", column, e))
            })?;
            Decimal::try_from(val).map_err(|e| {
                RepositoryError::Database(format!("Failed to convert {} to Decimal: {}", val, e))
            })
        }
        other => Err(RepositoryError::Database(format!(
            "Unexpected type '{}' for column '{}'",
            other, column
        ))),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

    use super::*;

    async fn setup_test_db() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create in-memory database");

        sqlx::query(
            "CREATE TABLE amounts (
                id INTEGER PRIMARY KEY,
                text_value TEXT,
                big_text_value TEXT,
                garbled_value TEXT,
                int_value INTEGER,
                real_value REAL,
                null_value REAL,
                blob_value BLOB
            )",
        )
        .execute(&pool)
        .await
        .expect("Failed to create test table");

        sqlx::query(
            "INSERT INTO amounts (id, text_value, big_text_value, garbled_value,
                int_value, real_value, null_value, blob_value)
             VALUES (1, '-1250000.75', '9007199254740993', 'abc',
                150000000, 1250000.5, NULL, x'00ff')",
        )
        .execute(&pool)
        .await
        .expect("Failed to insert test row");

        pool
    }

    async fn fetch_row(pool: &SqlitePool) -> SqliteRow {
        sqlx::query("SELECT * FROM amounts WHERE id = 1")
            .fetch_one(pool)
            .await
            .expect("Failed to fetch test row")
    }

    #[tokio::test]
    async fn reads_text_column_exactly() {
        let pool = setup_test_db().await;
        let row = fetch_row(&pool).await;

        assert_eq!(get_decimal(&row, "text_value"), Ok(dec!(-1250000.75)));
        assert_eq!(
            get_decimal(&row, "big_text_value"),
            Ok(dec!(9007199254740993))
        );
    }

    #[tokio::test]
    async fn rejects_text_that_is_not_a_number() {
        let pool = setup_test_db().await;
        let row = fetch_row(&pool).await;

        assert!(matches!(
            get_decimal(&row, "garbled_value"),
            Err(RepositoryError::Database(msg)) if msg.contains("Invalid decimal 'abc'")
        ));
    }

    #[tokio::test]
    async fn reads_integer_column() {
        let pool = setup_test_db().await;
        let row = fetch_row(&pool).await;

        assert_eq!(get_decimal(&row, "int_value"), Ok(dec!(150000000)));
    }

    #[tokio::test]
    async fn reads_real_column() {
        let pool = setup_test_db().await;
        let row = fetch_row(&pool).await;

        assert_eq!(get_decimal(&row, "real_value"), Ok(dec!(1250000.5)));
    }

    #[tokio::test]
    async fn rejects_null_column() {
        let pool = setup_test_db().await;
        let row = fetch_row(&pool).await;

        assert!(matches!(
            get_decimal(&row, "null_value"),
            Err(RepositoryError::Database(msg)) if msg.contains("NULL")
        ));
    }

    #[tokio::test]
    async fn rejects_blob_column() {
        let pool = setup_test_db().await;
        let row = fetch_row(&pool).await;

        assert!(matches!(
            get_decimal(&row, "blob_value"),
            Err(RepositoryError::Database(msg)) if msg.contains("Unexpected type")
        ));
    }

    #[tokio::test]
    async fn rejects_missing_column() {
        let pool = setup_test_db().await;
        let row = fetch_row(&pool).await;

        assert!(matches!(
            get_decimal(&row, "no_such_column"),
            Err(RepositoryError::Database(msg)) if msg.contains("not found")
        ));
    }
}
