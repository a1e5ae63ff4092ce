// End-to-end tests for the social insurance quote computation over
// in-memory reference tables
//
// Covers the 50/50 premium split, the care age threshold, bracket
// boundary resolution, policy overrides, and every domain error path.

use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use shaho::core::AppError;
use shaho::modules::employment::models::EmploymentInsuranceRate;
use shaho::modules::employment::repositories::InMemoryEmploymentInsuranceRateRepository;
use shaho::modules::premiums::models::PremiumBracket;
use shaho::modules::premiums::repositories::InMemoryPremiumBracketRepository;
use shaho::modules::quotes::services::{QuotePolicy, SocialInsuranceQueryService};
use shaho::modules::withholding::models::{TaxColumn, WithholdingTaxBracket};
use shaho::modules::withholding::repositories::InMemoryWithholdingTaxBracketRepository;

fn premium_rows() -> Vec<PremiumBracket> {
    vec![
        PremiumBracket::new("19", 240000, 230000, 250000, dec!(23808.00), dec!(27624.00), dec!(43920.00)),
        PremiumBracket::new("20", 260000, 250000, 270000, dec!(25792.00), dec!(29926.00), dec!(47580.00)),
        PremiumBracket::new("21", 280000, 270000, 290000, dec!(27776.00), dec!(32228.00), dec!(51240.00)),
        PremiumBracket::new("22", 300000, 290000, 310000, dec!(29760.00), dec!(34530.00), dec!(54900.00)),
    ]
}

fn withholding_rows() -> Vec<WithholdingTaxBracket> {
    vec![
        WithholdingTaxBracket::new(210000, 215000, Some(0), Some(0)),
        WithholdingTaxBracket::new(245000, 250000, Some(0), Some(0)),
        WithholdingTaxBracket::new(250000, 255000, Some(0), Some(0)),
        WithholdingTaxBracket::new(255000, 260000, Some(6640), Some(0)),
    ]
}

fn insurance_rows() -> Vec<EmploymentInsuranceRate> {
    vec![
        EmploymentInsuranceRate::new("general business", dec!(5.50), dec!(5.50), dec!(3.50)),
        EmploymentInsuranceRate::new("agriculture, forestry and fisheries", dec!(6.50), dec!(6.50), dec!(3.50)),
        EmploymentInsuranceRate::new("construction", dec!(6.50), dec!(6.50), dec!(4.50)),
    ]
}

fn service() -> SocialInsuranceQueryService {
    SocialInsuranceQueryService::new(
        Arc::new(InMemoryPremiumBracketRepository::new(premium_rows())),
        Arc::new(InMemoryWithholdingTaxBracketRepository::new(withholding_rows())),
        Arc::new(InMemoryEmploymentInsuranceRateRepository::new(insurance_rows())),
    )
}

fn service_with_policy(policy: QuotePolicy) -> SocialInsuranceQueryService {
    SocialInsuranceQueryService::with_policy(
        Arc::new(InMemoryPremiumBracketRepository::new(premium_rows())),
        Arc::new(InMemoryWithholdingTaxBracketRepository::new(withholding_rows())),
        Arc::new(InMemoryEmploymentInsuranceRateRepository::new(insurance_rows())),
        policy,
    )
}

#[tokio::test]
async fn quote_matches_the_reference_case() {
    // 300000 lands in grade 22; the employee half of the premiums is
    // 44715.00, leaving a net salary of 255285.00 in the 6640 tax band
    let quote = service().quote(300000, 45, None).await.unwrap();

    assert_eq!(quote.employee_cost.health_cost_with_no_care, dec!(14880.00));
    assert_eq!(quote.employee_cost.care_cost, dec!(2385.00));
    assert_eq!(quote.employee_cost.pension, dec!(27450.00));
    assert_eq!(quote.employee_cost.withholding_tax, dec!(6640));
    assert_eq!(quote.employee_cost.employment_insurance, dec!(1650.00));

    assert_eq!(quote.employer_cost.health_cost_with_no_care, dec!(14880.00));
    assert_eq!(quote.employer_cost.care_cost, dec!(2385.00));
    assert_eq!(quote.employer_cost.pension, dec!(27450.00));
    assert_eq!(quote.employer_cost.withholding_tax, Decimal::ZERO);
    assert_eq!(quote.employer_cost.employment_insurance, dec!(2700.00));
}

#[tokio::test]
async fn premiums_split_evenly_between_the_parties() {
    let quote = service().quote(250000, 50, None).await.unwrap();

    assert_eq!(
        quote.employee_cost.health_cost_with_no_care,
        quote.employer_cost.health_cost_with_no_care
    );
    assert_eq!(quote.employee_cost.care_cost, quote.employer_cost.care_cost);
    assert_eq!(quote.employee_cost.pension, quote.employer_cost.pension);
}

#[tokio::test]
async fn employer_never_bears_withholding_tax() {
    let quote = service().quote(300000, 45, Some("construction")).await.unwrap();
    assert_eq!(quote.employer_cost.withholding_tax, Decimal::ZERO);
}

#[tokio::test]
async fn care_premium_starts_at_forty() {
    let below = service().quote(300000, 39, None).await.unwrap();
    assert_eq!(below.employee_cost.care_cost, Decimal::ZERO);
    assert_eq!(below.employer_cost.care_cost, Decimal::ZERO);

    let at = service().quote(300000, 40, None).await.unwrap();
    assert_eq!(at.employee_cost.care_cost, dec!(2385.00));
}

#[tokio::test]
async fn boundary_salary_takes_the_bracket_with_the_larger_minimum() {
    // 290000 is both grade 21's upper bound and grade 22's lower bound
    let quote = service().quote(290000, 45, None).await.unwrap();

    assert_eq!(quote.employee_cost.health_cost_with_no_care, dec!(14880.00));
    assert_eq!(quote.employee_cost.pension, dec!(27450.00));
    // Net salary 245285.00 falls in a zero-tax band
    assert_eq!(quote.employee_cost.withholding_tax, Decimal::ZERO);
}

#[tokio::test]
async fn omitted_business_type_defaults_to_general_business() {
    let defaulted = service().quote(300000, 45, None).await.unwrap();
    let named = service().quote(300000, 45, Some("general business")).await.unwrap();
    assert_eq!(defaulted, named);
}

#[tokio::test]
async fn empty_business_type_defaults_to_general_business() {
    let quote = service().quote(300000, 45, Some("")).await.unwrap();
    assert_eq!(quote.employee_cost.employment_insurance, dec!(1650.00));
}

#[tokio::test]
async fn named_business_type_uses_its_own_rates() {
    let quote = service().quote(300000, 45, Some("construction")).await.unwrap();
    assert_eq!(quote.employee_cost.employment_insurance, dec!(1950.00));
    assert_eq!(quote.employer_cost.employment_insurance, dec!(3300.00));
}

#[tokio::test]
async fn salary_below_every_bracket_is_rejected() {
    let err = service().quote(-5, 45, None).await.unwrap_err();
    match err {
        AppError::BracketNotFound { salary } => assert_eq!(salary, -5),
        other => panic!("expected BracketNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn unknown_business_type_is_rejected() {
    let err = service().quote(300000, 45, Some("space mining")).await.unwrap_err();
    assert!(matches!(err, AppError::RateNotFound { .. }));
}

#[tokio::test]
async fn net_salary_outside_the_tax_table_is_rejected() {
    // 310000 still sits in grade 22, but its net salary of 265285.00
    // falls past the seeded tax bands
    let err = service().quote(310000, 45, None).await.unwrap_err();
    match err {
        AppError::WithholdingBracketNotFound { net_salary } => {
            assert_eq!(net_salary, dec!(265285.00));
        }
        other => panic!("expected WithholdingBracketNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn policy_overrides_reach_every_knob() {
    let policy = QuotePolicy {
        care_minimum_age: 65,
        tax_column: TaxColumn::Otsu,
        default_business_type: "construction".to_string(),
    };
    let quote = service_with_policy(policy).quote(300000, 45, None).await.unwrap();

    // 45 is below the raised care age, so the net salary is 257670.00
    // and the otsu column of that band reads zero
    assert_eq!(quote.employee_cost.care_cost, Decimal::ZERO);
    assert_eq!(quote.employee_cost.withholding_tax, Decimal::ZERO);
    // The default business type now points at construction rates
    assert_eq!(quote.employee_cost.employment_insurance, dec!(1950.00));
}
