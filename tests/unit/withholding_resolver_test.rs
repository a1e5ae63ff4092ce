// Behavioral tests for the withholding tax resolver
//
// The resolver matches the exact net salary (fractional yen included)
// against the monthly withholding table, reads the configured column,
// and treats missing amounts on formula rows as zero.

use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use shaho::core::AppError;
use shaho::modules::withholding::models::{TaxColumn, WithholdingTaxBracket};
use shaho::modules::withholding::repositories::InMemoryWithholdingTaxBracketRepository;
use shaho::modules::withholding::services::WithholdingTaxResolver;

// A slice of the real table, with a deliberate gap between 88000 and
// 245000
fn table() -> Vec<WithholdingTaxBracket> {
    let mut formula_row = WithholdingTaxBracket::new(3500000, 999999999, None, None);
    formula_row.calculation_formula = Some("Special formula for amounts exceeding 3,500,000".to_string());

    vec![
        WithholdingTaxBracket::new(0, 88000, Some(0), Some(3200)),
        WithholdingTaxBracket::new(245000, 250000, Some(0), Some(0)),
        WithholdingTaxBracket::new(250000, 255000, Some(0), Some(0)),
        WithholdingTaxBracket::new(255000, 260000, Some(6640), Some(0)),
        WithholdingTaxBracket::new(2170000, 2210000, Some(593340), None),
        formula_row,
    ]
}

fn resolver(column: TaxColumn) -> WithholdingTaxResolver {
    let repo = Arc::new(InMemoryWithholdingTaxBracketRepository::new(table()));
    WithholdingTaxResolver::new(repo, column)
}

#[tokio::test]
async fn fractional_net_salary_resolves_inside_its_band() {
    let tax = resolver(TaxColumn::Ko).resolve(dec!(255285.00)).await.unwrap();
    assert_eq!(tax, dec!(6640));
}

#[tokio::test]
async fn band_boundary_takes_the_earlier_row() {
    // 255000 closes one band and opens the next; the earlier row wins
    let tax = resolver(TaxColumn::Ko).resolve(dec!(255000)).await.unwrap();
    assert_eq!(tax, Decimal::ZERO);
}

#[tokio::test]
async fn formula_rows_without_an_amount_resolve_to_zero() {
    let tax = resolver(TaxColumn::Ko).resolve(dec!(4000000)).await.unwrap();
    assert_eq!(tax, Decimal::ZERO);
}

#[tokio::test]
async fn otsu_column_reads_its_own_amounts() {
    let tax = resolver(TaxColumn::Otsu).resolve(dec!(50000)).await.unwrap();
    assert_eq!(tax, dec!(3200));

    let tax = resolver(TaxColumn::Otsu).resolve(dec!(2200000)).await.unwrap();
    assert_eq!(tax, Decimal::ZERO);
}

#[tokio::test]
async fn gap_in_the_table_is_an_error() {
    let err = resolver(TaxColumn::Ko).resolve(dec!(100000)).await.unwrap_err();
    match err {
        AppError::WithholdingBracketNotFound { net_salary } => {
            assert_eq!(net_salary, dec!(100000));
        }
        other => panic!("expected WithholdingBracketNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn negative_net_salary_is_an_error() {
    let err = resolver(TaxColumn::Ko).resolve(dec!(-0.01)).await.unwrap_err();
    assert!(matches!(err, AppError::WithholdingBracketNotFound { .. }));
}
