// Property-based tests for the premium component calculation
//
// Validates:
// - The care component applies only from the minimum age up
// - From that age it equals the spread between the two health premiums
// - Halving splits every component exactly in two, with no drift
//   between the net-salary subtraction and the final breakdown

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use shaho::modules::premiums::models::PremiumBracket;
use shaho::modules::premiums::services::{PremiumCalculator, CARE_MINIMUM_AGE};

fn bracket(no_care_cents: u64, spread_cents: u64, pension_cents: u64) -> PremiumBracket {
    let health_no_care = Decimal::from(no_care_cents) / Decimal::from(100);
    let health_care = health_no_care + Decimal::from(spread_cents) / Decimal::from(100);
    let pension = Decimal::from(pension_cents) / Decimal::from(100);
    PremiumBracket::new("22", 300000, 290000, 310000, health_no_care, health_care, pension)
}

proptest! {
    #[test]
    fn care_is_zero_below_the_minimum_age(
        no_care in 0u64..10_000_000u64,
        spread in 0u64..1_000_000u64,
        pension in 0u64..10_000_000u64,
        age in 0u32..CARE_MINIMUM_AGE
    ) {
        let totals = PremiumCalculator::default().totals(&bracket(no_care, spread, pension), age);
        prop_assert_eq!(totals.care, Decimal::ZERO);
    }

    #[test]
    fn care_equals_the_health_premium_spread_from_the_minimum_age(
        no_care in 0u64..10_000_000u64,
        spread in 0u64..1_000_000u64,
        pension in 0u64..10_000_000u64,
        age in CARE_MINIMUM_AGE..120u32
    ) {
        let totals = PremiumCalculator::default().totals(&bracket(no_care, spread, pension), age);
        prop_assert_eq!(totals.care, Decimal::from(spread) / Decimal::from(100));
    }

    #[test]
    fn halves_double_back_to_the_full_totals(
        no_care in 0u64..10_000_000u64,
        spread in 0u64..1_000_000u64,
        pension in 0u64..10_000_000u64,
        age in 0u32..120u32
    ) {
        let totals = PremiumCalculator::default().totals(&bracket(no_care, spread, pension), age);
        let halves = totals.halved();
        prop_assert_eq!(halves.health_no_care * Decimal::TWO, totals.health_no_care);
        prop_assert_eq!(halves.care * Decimal::TWO, totals.care);
        prop_assert_eq!(halves.pension * Decimal::TWO, totals.pension);
        prop_assert_eq!(halves.sum() * Decimal::TWO, totals.sum());
    }

    #[test]
    fn totals_are_never_negative(
        no_care in 0u64..10_000_000u64,
        spread in 0u64..1_000_000u64,
        pension in 0u64..10_000_000u64,
        age in 0u32..120u32
    ) {
        let totals = PremiumCalculator::default().totals(&bracket(no_care, spread, pension), age);
        prop_assert!(totals.health_no_care >= Decimal::ZERO);
        prop_assert!(totals.care >= Decimal::ZERO);
        prop_assert!(totals.pension >= Decimal::ZERO);
        prop_assert!(totals.sum() >= Decimal::ZERO);
    }
}

#[test]
fn grade_22_reference_totals() {
    let bracket = PremiumBracket::new(
        "22",
        300000,
        290000,
        310000,
        dec!(29760.00),
        dec!(34530.00),
        dec!(54900.00),
    );

    let totals = PremiumCalculator::default().totals(&bracket, 45);
    assert_eq!(totals.health_no_care, dec!(29760.00));
    assert_eq!(totals.care, dec!(4770.00));
    assert_eq!(totals.pension, dec!(54900.00));

    let halves = totals.halved();
    assert_eq!(halves.health_no_care, dec!(14880.00));
    assert_eq!(halves.care, dec!(2385.00));
    assert_eq!(halves.pension, dec!(27450.00));
    assert_eq!(halves.sum(), dec!(44715.00));
}

#[test]
fn age_exactly_at_the_threshold_pays_care() {
    let bracket = PremiumBracket::new(
        "22",
        300000,
        290000,
        310000,
        dec!(29760.00),
        dec!(34530.00),
        dec!(54900.00),
    );

    let calculator = PremiumCalculator::default();
    assert_eq!(calculator.totals(&bracket, 39).care, Decimal::ZERO);
    assert_eq!(calculator.totals(&bracket, 40).care, dec!(4770.00));
}
