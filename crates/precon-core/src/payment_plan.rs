use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::PreconError;
use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::PreconResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for a pre-construction staged payment plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentPlanInput {
    /// Full property price
    pub price: Money,
    /// Separation (reservation) fee, paid immediately
    pub separation: Money,
    /// Target % of price due at contract signing (0–100)
    pub initial_percent: Percent,
    /// Total % of price paid before delivery, including the initial % (0–100)
    pub total_construction_percent: Percent,
    /// Construction duration over which monthly installments run
    pub months: u32,
}

/// The staged payment schedule derived from a plan input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentPlanSummary {
    /// Full property price (echoed)
    pub property_price: Money,
    /// Separation fee already paid (echoed)
    pub separation_paid: Money,
    /// Additional amount due at contract signing, net of the separation fee
    pub due_at_signing: Money,
    /// Level monthly installment during construction
    pub monthly_payment: Money,
    /// Number of monthly installments
    pub number_of_months: u32,
    /// Sum of all monthly installments
    pub total_during_construction: Money,
    /// Balance due at delivery (typically financed via mortgage)
    pub final_payment: Money,
    /// Total equity paid before delivery (price × total construction %)
    pub total_equity_invested: Money,
}

/// The input percentages, echoed back for renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentPlanPercentages {
    pub initial_target: Percent,
    pub total_equity: Percent,
}

/// Complete payment plan output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentPlanOutput {
    pub summary: PaymentPlanSummary,
    pub percentages: PaymentPlanPercentages,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Derive the staged payment schedule for a pre-construction purchase:
/// separation fee, amount due at signing, level monthly installments over
/// the construction period, and the final balance due at delivery.
///
/// The separation fee is credited against the signing target, and upfront
/// payments are credited against the construction equity target; both
/// adjustments clamp at zero rather than going negative.
pub fn compute_payment_plan(
    input: &PaymentPlanInput,
) -> PreconResult<ComputationOutput<PaymentPlanOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_input(input)?;

    // --- Equity targets ---
    let total_equity_target = input.price * input.total_construction_percent / dec!(100);
    let initial_signing_target = input.price * input.initial_percent / dec!(100);

    // --- Due at signing: signing target net of the separation fee ---
    let due_at_signing = if initial_signing_target > input.separation {
        initial_signing_target - input.separation
    } else {
        Decimal::ZERO
    };

    if due_at_signing.is_zero() && input.separation > Decimal::ZERO && initial_signing_target > Decimal::ZERO {
        warnings.push(
            "Separation fee already covers the signing target — nothing further due at signing"
                .into(),
        );
    }

    // --- Monthly installments over the construction period ---
    let total_paid_upfront = input.separation + due_at_signing;
    let mut remaining_equity_to_pay = total_equity_target - total_paid_upfront;

    if remaining_equity_to_pay < Decimal::ZERO {
        remaining_equity_to_pay = Decimal::ZERO;
        warnings.push(
            "Upfront payments already meet the construction equity target — monthly installments are zero"
                .into(),
        );
    }

    let monthly_payment = remaining_equity_to_pay / Decimal::from(input.months);

    // --- Final balance at delivery ---
    let final_payment = input.price - total_equity_target;

    if final_payment.is_zero() {
        warnings.push("Final payment is zero — the property is fully paid before delivery".into());
    }

    let output = PaymentPlanOutput {
        summary: PaymentPlanSummary {
            property_price: input.price,
            separation_paid: input.separation,
            due_at_signing,
            monthly_payment,
            number_of_months: input.months,
            total_during_construction: remaining_equity_to_pay,
            final_payment,
            total_equity_invested: total_equity_target,
        },
        percentages: PaymentPlanPercentages {
            initial_target: input.initial_percent,
            total_equity: input.total_construction_percent,
        },
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Pre-Construction Staged Payment Plan",
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_input(input: &PaymentPlanInput) -> PreconResult<()> {
    if input.price <= Decimal::ZERO || input.months == 0 {
        return Err(PreconError::InvalidInput {
            field: "price/months".into(),
            reason: "price and months must be greater than zero".into(),
        });
    }

    if input.total_construction_percent < input.initial_percent {
        return Err(PreconError::InvalidInput {
            field: "total_construction_percent".into(),
            reason: "total construction percent cannot be less than initial percent".into(),
        });
    }

    // Range checks keep the un-clamped final payment from going negative
    if input.initial_percent < Decimal::ZERO || input.initial_percent > dec!(100) {
        return Err(PreconError::InvalidInput {
            field: "initial_percent".into(),
            reason: "initial percent must be between 0 and 100".into(),
        });
    }

    if input.total_construction_percent > dec!(100) {
        return Err(PreconError::InvalidInput {
            field: "total_construction_percent".into(),
            reason: "total construction percent must be between 0 and 100".into(),
        });
    }

    if input.separation < Decimal::ZERO {
        return Err(PreconError::InvalidInput {
            field: "separation".into(),
            reason: "separation fee cannot be negative".into(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn default_input() -> PaymentPlanInput {
        PaymentPlanInput {
            price: dec!(150_000),
            separation: dec!(2_000),
            initial_percent: dec!(10),
            total_construction_percent: dec!(30),
            months: 24,
        }
    }

    #[test]
    fn test_reference_schedule() {
        // 10% of 150k = 15k signing target, minus 2k separation = 13k due
        // 30% of 150k = 45k equity target, minus 15k upfront = 30k over 24 months
        let result = compute_payment_plan(&default_input()).unwrap();
        let summary = &result.result.summary;

        assert_eq!(summary.due_at_signing, dec!(13_000));
        assert_eq!(summary.monthly_payment, dec!(1_250));
        assert_eq!(summary.total_during_construction, dec!(30_000));
        assert_eq!(summary.final_payment, dec!(105_000));
        assert_eq!(summary.total_equity_invested, dec!(45_000));
        assert_eq!(summary.number_of_months, 24);
    }

    #[test]
    fn test_percentages_echoed() {
        let result = compute_payment_plan(&default_input()).unwrap();
        assert_eq!(result.result.percentages.initial_target, dec!(10));
        assert_eq!(result.result.percentages.total_equity, dec!(30));
    }

    #[test]
    fn test_zero_price_rejected() {
        let mut input = default_input();
        input.price = Decimal::ZERO;
        let err = compute_payment_plan(&input).unwrap_err();
        assert!(err
            .to_string()
            .contains("price and months must be greater than zero"));
    }

    #[test]
    fn test_zero_months_rejected() {
        let mut input = default_input();
        input.months = 0;
        assert!(compute_payment_plan(&input).is_err());
    }

    #[test]
    fn test_total_below_initial_rejected() {
        let mut input = default_input();
        input.total_construction_percent = dec!(5);
        let err = compute_payment_plan(&input).unwrap_err();
        assert!(err
            .to_string()
            .contains("total construction percent cannot be less than initial percent"));
    }

    #[test]
    fn test_total_above_100_rejected() {
        let mut input = default_input();
        input.total_construction_percent = dec!(110);
        assert!(compute_payment_plan(&input).is_err());
    }

    #[test]
    fn test_zero_initial_percent_means_nothing_due_at_signing() {
        let mut input = default_input();
        input.initial_percent = Decimal::ZERO;
        let result = compute_payment_plan(&input).unwrap();
        assert_eq!(result.result.summary.due_at_signing, Decimal::ZERO);
    }

    #[test]
    fn test_separation_exceeding_signing_target_clamps_to_zero() {
        let mut input = default_input();
        input.separation = dec!(20_000);
        let result = compute_payment_plan(&input).unwrap();
        let summary = &result.result.summary;

        assert_eq!(summary.due_at_signing, Decimal::ZERO);
        // Equity target 45k minus 20k upfront = 25k over 24 months
        assert_eq!(summary.total_during_construction, dec!(25_000));
        assert!(!result.warnings.is_empty());
    }

    #[test]
    fn test_upfront_exceeding_equity_target_zeroes_installments() {
        let mut input = default_input();
        input.separation = dec!(60_000);
        let result = compute_payment_plan(&input).unwrap();
        let summary = &result.result.summary;

        assert_eq!(summary.total_during_construction, Decimal::ZERO);
        assert_eq!(summary.monthly_payment, Decimal::ZERO);
    }

    #[test]
    fn test_accounting_identity_without_clamping() {
        // separation ≤ signing target and upfront ≤ equity target:
        // upfront + installments + final == price
        let input = default_input();
        let result = compute_payment_plan(&input).unwrap();
        let summary = &result.result.summary;

        let upfront = summary.separation_paid + summary.due_at_signing;
        assert_eq!(
            upfront + summary.total_during_construction + summary.final_payment,
            input.price
        );
    }

    #[test]
    fn test_idempotent() {
        let input = default_input();
        let first = compute_payment_plan(&input).unwrap();
        let second = compute_payment_plan(&input).unwrap();
        assert_eq!(first.result, second.result);
    }

    #[test]
    fn test_full_equity_plan_warns_on_zero_final_payment() {
        let mut input = default_input();
        input.total_construction_percent = dec!(100);
        let result = compute_payment_plan(&input).unwrap();

        assert_eq!(result.result.summary.final_payment, Decimal::ZERO);
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("Final payment is zero")));
    }
}
