use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use precon_core::mortgage::{self, MortgageInput};

use crate::input;

/// Arguments for the fixed-rate mortgage estimate
#[derive(Args)]
pub struct MortgageArgs {
    /// Path to a JSON file with a full mortgage input
    #[arg(long)]
    pub input: Option<String>,

    /// Principal to finance (typically the plan's final payment)
    #[arg(long)]
    pub loan_amount: Option<Decimal>,

    /// Annual interest rate in percent (11.5 = 11.5%)
    #[arg(long, allow_hyphen_values = true)]
    pub annual_rate: Option<Decimal>,

    /// Loan term in years
    #[arg(long, default_value = "20")]
    pub years: u32,

    /// Annual insurance rate in percent of the principal
    #[arg(long, default_value = "1.0")]
    pub insurance_percent: Decimal,
}

pub fn run_mortgage(args: MortgageArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let mortgage_input = resolve_input(&args)?;
    let result = mortgage::compute_mortgage(&mortgage_input)?;
    Ok(serde_json::to_value(&result)?)
}

fn resolve_input(args: &MortgageArgs) -> Result<MortgageInput, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return input::file::read_json(path);
    }
    if let Some(data) = input::stdin::read_stdin()? {
        return Ok(serde_json::from_value(data)?);
    }

    let loan_amount = args
        .loan_amount
        .ok_or("--loan-amount, --input <file.json>, or piped stdin required for a mortgage estimate")?;
    let annual_rate = args
        .annual_rate
        .ok_or("--annual-rate required for a mortgage estimate")?;

    Ok(MortgageInput {
        loan_amount,
        annual_interest_rate: annual_rate,
        years: args.years,
        insurance_percent_annual: args.insurance_percent,
    })
}
