use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::PreconError;
use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::PreconResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for a levered monthly payment estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MortgageInput {
    /// Principal to finance (typically the payment plan's final payment)
    pub loan_amount: Money,
    /// Annual interest rate as a percentage (11.5 = 11.5%)
    pub annual_interest_rate: Percent,
    /// Loan term in years
    pub years: u32,
    /// Annual insurance (life/fire) rate as a percentage of the principal
    #[serde(default = "default_insurance_percent")]
    pub insurance_percent_annual: Percent,
}

fn default_insurance_percent() -> Percent {
    Decimal::ONE
}

/// Monthly payment estimate for a fixed-rate loan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageOutput {
    /// Level principal + interest payment (annuity formula)
    pub monthly_principal_interest: Money,
    /// Monthly insurance charge on the principal
    pub monthly_insurance: Money,
    /// Total monthly bank payment
    pub monthly_total: Money,
    /// Principal financed (echoed)
    pub loan_amount: Money,
    /// Annual interest rate (echoed)
    pub annual_interest_rate: Percent,
    /// Loan term in years (echoed)
    pub years: u32,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Estimate the monthly bank payment for a fixed-rate loan: level
/// principal + interest via the standard annuity formula, plus a flat
/// monthly insurance charge on the principal.
///
/// A non-positive loan amount is a degenerate success (all-zero result),
/// not an error. A zero rate degrades to straight-line repayment.
pub fn compute_mortgage(input: &MortgageInput) -> PreconResult<ComputationOutput<MortgageOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.years == 0 {
        return Err(PreconError::InvalidInput {
            field: "years".into(),
            reason: "loan term must be at least one year".into(),
        });
    }

    // Nothing to finance: all-zero estimate rather than an error
    if input.loan_amount <= Decimal::ZERO {
        let output = MortgageOutput {
            monthly_principal_interest: Decimal::ZERO,
            monthly_insurance: Decimal::ZERO,
            monthly_total: Decimal::ZERO,
            loan_amount: input.loan_amount,
            annual_interest_rate: input.annual_interest_rate,
            years: input.years,
        };
        let elapsed = start.elapsed().as_micros() as u64;
        return Ok(with_metadata(
            "Fixed-Rate Mortgage Estimate (Level Amortization)",
            warnings,
            elapsed,
            output,
        ));
    }

    if input.annual_interest_rate < Decimal::ZERO {
        warnings.push("Negative interest rate — treated as straight-line repayment".into());
    } else if input.annual_interest_rate > dec!(20) {
        warnings.push(format!(
            "Interest rate {}% exceeds 20% — unusually high, verify bank terms",
            input.annual_interest_rate
        ));
    }

    let monthly_rate = input.annual_interest_rate / dec!(100) / dec!(12);
    let n_payments = Decimal::from(input.years * 12);

    // --- Level payment: P * r(1+r)^n / ((1+r)^n - 1) ---
    let monthly_principal_interest = if monthly_rate > Decimal::ZERO {
        let factor = (Decimal::ONE + monthly_rate).powd(n_payments);
        let denominator = factor - Decimal::ONE;
        if denominator.is_zero() {
            return Err(PreconError::DivisionByZero {
                context: "amortization factor ((1+r)^n - 1)".into(),
            });
        }
        input.loan_amount * monthly_rate * factor / denominator
    } else {
        // Zero (or negative) rate: straight-line over the term
        input.loan_amount / n_payments
    };

    let monthly_insurance = input.loan_amount * input.insurance_percent_annual / dec!(100) / dec!(12);
    let monthly_total = monthly_principal_interest + monthly_insurance;

    let output = MortgageOutput {
        monthly_principal_interest,
        monthly_insurance,
        monthly_total,
        loan_amount: input.loan_amount,
        annual_interest_rate: input.annual_interest_rate,
        years: input.years,
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Fixed-Rate Mortgage Estimate (Level Amortization)",
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
