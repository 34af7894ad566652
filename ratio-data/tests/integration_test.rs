//! Integration tests for record loading against the SQLite backend.

use pretty_assertions::assert_eq;
use ratio_core::{RatioRepository, health_score, period_trend};
use ratio_data::{FinancialRecordLoader, LoadSummary, RecordLoaderError};
use ratio_db_sqlite::SqliteRepository;
use rust_decimal_macros::dec;
use sqlx::sqlite::SqlitePoolOptions;

const TEST_CSV: &str = include_str!("../test-data/records.csv");

async fn setup_test_db() -> SqliteRepository {
    let pool = SqlitePoolOptions::new()
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    let repo = SqliteRepository::new_with_pool(pool).await;
    repo.run_migrations()
        .await
        .expect("Failed to run migrations");
    repo
}

#[tokio::test]
async fn test_load_all_records() {
    let repo = setup_test_db().await;
    let rows = FinancialRecordLoader::parse(TEST_CSV.as_bytes()).expect("Should parse CSV");
    assert_eq!(rows.len(), 5);

    let summary = FinancialRecordLoader::load(&repo, &rows)
        .await
        .expect("Should load records");

    assert_eq!(
        summary,
        LoadSummary {
            created: 5,
            updated: 0
        }
    );
    assert_eq!(
        repo.list_companies().await.expect("Should list companies"),
        vec!["CV Sumber Makmur".to_string(), "PT Ratio Finansial".to_string()]
    );
}

#[tokio::test]
async fn test_loaded_amounts_are_normalized() {
    let repo = setup_test_db().await;
    let rows = FinancialRecordLoader::parse(TEST_CSV.as_bytes()).expect("Should parse CSV");
    FinancialRecordLoader::load(&repo, &rows)
        .await
        .expect("Should load records");

    let record = repo
        .get_record_for_period("PT Ratio Finansial", 2026)
        .await
        .expect("Should find 2026 record");

    assert_eq!(record.net_income, dec!(150000000));
    assert_eq!(record.current_assets, dec!(500000000));
    assert_eq!(record.current_liabilities, dec!(300000000));
    assert_eq!(record.revenue, dec!(2000000000));
    assert_eq!(record.total_equity, dec!(1000000000));

    let blank_revenue = repo
        .get_record_for_period("CV Sumber Makmur", 2026)
        .await
        .expect("Should find CV 2026 record");
    assert_eq!(blank_revenue.revenue, dec!(0));
}

#[tokio::test]
async fn test_reload_is_idempotent() {
    let repo = setup_test_db().await;
    let rows = FinancialRecordLoader::parse(TEST_CSV.as_bytes()).expect("Should parse CSV");
    FinancialRecordLoader::load(&repo, &rows)
        .await
        .expect("First load");
    let before = repo.list_records(None).await.expect("Should list");

    let summary = FinancialRecordLoader::load(&repo, &rows)
        .await
        .expect("Second load");
    let after = repo.list_records(None).await.expect("Should list");

    assert_eq!(
        summary,
        LoadSummary {
            created: 0,
            updated: 5
        }
    );
    assert_eq!(after.len(), before.len());
    for (a, b) in after.iter().zip(&before) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.net_income, b.net_income);
    }
}

#[tokio::test]
async fn test_corrected_row_replaces_stored_figures() {
    let repo = setup_test_db().await;
    let rows = FinancialRecordLoader::parse(TEST_CSV.as_bytes()).expect("Should parse CSV");
    FinancialRecordLoader::load(&repo, &rows)
        .await
        .expect("First load");

    let correction = "company_name,period_year,net_income,current_assets,current_liabilities,revenue,total_equity\n\
                      CV Sumber Makmur,2025,5.000.000,90.000.000,120.000.000,400.000.000,100.000.000\n";
    let rows = FinancialRecordLoader::parse(correction.as_bytes()).expect("Should parse CSV");
    FinancialRecordLoader::load(&repo, &rows)
        .await
        .expect("Correction load");

    let record = repo
        .get_record_for_period("CV Sumber Makmur", 2025)
        .await
        .expect("Should find record");
    assert_eq!(record.net_income, dec!(5000000));
    assert_eq!(record.total_equity, dec!(100000000));
}

#[tokio::test]
async fn test_trend_over_loaded_records() {
    let repo = setup_test_db().await;
    let rows = FinancialRecordLoader::parse(TEST_CSV.as_bytes()).expect("Should parse CSV");
    FinancialRecordLoader::load(&repo, &rows)
        .await
        .expect("Should load records");

    let records = repo
        .list_records(Some("PT Ratio Finansial"))
        .await
        .expect("Should list records");
    let trend = period_trend(&records);

    let years: Vec<i32> = trend.iter().map(|p| p.period_year).collect();
    assert_eq!(years, vec![2024, 2025, 2026]);

    let latest = &trend[2];
    assert_eq!(latest.ratios.current_ratio, dec!(1.67));
    assert_eq!(latest.ratios.net_profit_margin, dec!(7.50));
    assert_eq!(latest.ratios.return_on_equity, dec!(15.00));
    assert_eq!(latest.health_score, health_score(&latest.ratios));
    assert_eq!(latest.health_score, 80);
}

#[tokio::test]
async fn test_zero_equity_record_scores_without_error() {
    let repo = setup_test_db().await;
    let rows = FinancialRecordLoader::parse(TEST_CSV.as_bytes()).expect("Should parse CSV");
    FinancialRecordLoader::load(&repo, &rows)
        .await
        .expect("Should load records");

    let records = repo
        .list_records(Some("CV Sumber Makmur"))
        .await
        .expect("Should list records");
    let trend = period_trend(&records);

    // 2025: 90/120 = 0.75, -15/400 = -3.75%, equity zero
    assert_eq!(trend[0].ratios.current_ratio, dec!(0.75));
    assert_eq!(trend[0].ratios.net_profit_margin, dec!(-3.75));
    assert_eq!(trend[0].ratios.return_on_equity, dec!(0));
    assert_eq!(trend[0].health_score, 0);
}

#[test]
fn test_invalid_csv_is_rejected_before_loading() {
    let csv = "company_name,period_year,net_income,current_assets,current_liabilities,revenue,total_equity\n\
               ,2025,1,2,3,4,5\n";

    let result = FinancialRecordLoader::parse(csv.as_bytes());

    assert!(matches!(
        result,
        Err(RecordLoaderError::MissingCompanyName { line: 2 })
    ));
}
