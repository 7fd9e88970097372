use precon_core::mortgage::{compute_mortgage, MortgageInput};
use precon_core::PreconError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Amortization formula
// ===========================================================================

#[test]
fn test_reference_estimate_105k_at_11_5() {
    // loan=105k, 11.5% annual, 20 years, 0.9% insurance
    // monthly rate = 0.115/12 ≈ 0.0095833, n = 240
    // P+I ≈ $1,120; insurance = 105000 * 0.009 / 12 = 78.75 exact
    let input = MortgageInput {
        loan_amount: dec!(105_000),
        annual_interest_rate: dec!(11.5),
        years: 20,
        insurance_percent_annual: dec!(0.9),
    };
    let result = compute_mortgage(&input).unwrap();
    let out = &result.result;

    assert!(
        out.monthly_principal_interest > dec!(1_110)
            && out.monthly_principal_interest < dec!(1_130),
        "P+I out of expected range: {}",
        out.monthly_principal_interest
    );
    assert_eq!(out.monthly_insurance, dec!(78.75));
    assert_eq!(
        out.monthly_total,
        out.monthly_principal_interest + out.monthly_insurance
    );
}

#[test]
fn test_textbook_300k_at_6_over_30_years() {
    // Widely published reference: 300k at 6% over 30 years ≈ $1,798.65/month
    let input = MortgageInput {
        loan_amount: dec!(300_000),
        annual_interest_rate: dec!(6),
        years: 30,
        insurance_percent_annual: Decimal::ZERO,
    };
    let result = compute_mortgage(&input).unwrap();
    let pi = result.result.monthly_principal_interest.round_dp(2);

    assert!(
        (pi - dec!(1_798.65)).abs() < dec!(0.05),
        "expected ~1798.65, got {pi}"
    );
    assert_eq!(result.result.monthly_insurance, Decimal::ZERO);
}

#[test]
fn test_zero_rate_is_exact_straight_line() {
    let input = MortgageInput {
        loan_amount: dec!(90_000),
        annual_interest_rate: Decimal::ZERO,
        years: 15,
        insurance_percent_annual: dec!(1),
    };
    let result = compute_mortgage(&input).unwrap();
    let out = &result.result;

    // 90k over 180 payments = 500 exactly
    assert_eq!(out.monthly_principal_interest, dec!(500));
    // 90k * 1% / 12 = 75 exactly
    assert_eq!(out.monthly_insurance, dec!(75));
    assert_eq!(out.monthly_total, dec!(575));
}

// ===========================================================================
// Degenerate and guarded inputs
// ===========================================================================

#[test]
fn test_zero_loan_is_degenerate_success() {
    let input = MortgageInput {
        loan_amount: Decimal::ZERO,
        annual_interest_rate: dec!(8),
        years: 20,
        insurance_percent_annual: dec!(1),
    };
    let result = compute_mortgage(&input).unwrap();
    let out = &result.result;

    assert_eq!(out.monthly_principal_interest, Decimal::ZERO);
    assert_eq!(out.monthly_insurance, Decimal::ZERO);
    assert_eq!(out.monthly_total, Decimal::ZERO);
    assert_eq!(out.years, 20);
}

#[test]
fn test_zero_years_is_rejected_not_a_division_fault() {
    let input = MortgageInput {
        loan_amount: dec!(100_000),
        annual_interest_rate: dec!(7),
        years: 0,
        insurance_percent_annual: dec!(1),
    };
    match compute_mortgage(&input) {
        Err(PreconError::InvalidInput { field, .. }) => assert_eq!(field, "years"),
        other => panic!("expected InvalidInput for years=0, got {other:?}"),
    }
}

#[test]
fn test_negative_rate_accepted_with_warning() {
    let input = MortgageInput {
        loan_amount: dec!(60_000),
        annual_interest_rate: dec!(-1),
        years: 10,
        insurance_percent_annual: Decimal::ZERO,
    };
    let result = compute_mortgage(&input).unwrap();

    // Degrades to straight-line
    assert_eq!(result.result.monthly_principal_interest, dec!(500));
    assert!(result
        .warnings
        .iter()
        .any(|w| w.contains("Negative interest rate")));
}

// ===========================================================================
// Purity
// ===========================================================================

#[test]
fn test_repeat_calls_are_bit_identical() {
    let input = MortgageInput {
        loan_amount: dec!(105_000),
        annual_interest_rate: dec!(11.5),
        years: 20,
        insurance_percent_annual: dec!(0.9),
    };
    let first = compute_mortgage(&input).unwrap();
    let second = compute_mortgage(&input).unwrap();
    assert_eq!(first.result, second.result);
}
