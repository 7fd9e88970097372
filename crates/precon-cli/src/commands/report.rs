use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use std::fs;

use precon_core::mortgage::{self, MortgageInput};
use precon_core::payment_plan::{self, PaymentPlanInput};
use precon_core::report::render_report;

use crate::input;

/// Arguments for the PDF investment analysis report
#[derive(Args)]
pub struct ReportArgs {
    /// Path to a JSON file with a full payment plan input
    #[arg(long)]
    pub input: Option<String>,

    /// Property price
    #[arg(long)]
    pub price: Option<Decimal>,

    /// Separation (reservation) fee already paid
    #[arg(long, default_value = "0")]
    pub separation: Decimal,

    /// Target % of price due at contract signing
    #[arg(long, default_value = "10")]
    pub initial_percent: Decimal,

    /// Total % of price paid before delivery, including the initial %
    #[arg(long, default_value = "30")]
    pub total_construction_percent: Decimal,

    /// Construction duration in months
    #[arg(long, default_value = "24")]
    pub months: u32,

    /// Annual mortgage rate in percent; adds the bank financing section,
    /// chained from the plan's final payment
    #[arg(long)]
    pub mortgage_rate: Option<Decimal>,

    /// Mortgage term in years
    #[arg(long, default_value = "20")]
    pub mortgage_years: u32,

    /// Annual mortgage insurance rate in percent
    #[arg(long, default_value = "1.0")]
    pub mortgage_insurance_percent: Decimal,

    /// Output path for the PDF
    #[arg(long, default_value = "payment-plan-report.pdf")]
    pub out: String,
}

#[derive(Serialize)]
struct ReportReceipt {
    path: String,
    bytes_written: usize,
    mortgage_included: bool,
}

pub fn run_report(args: ReportArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let plan_input = resolve_plan_input(&args)?;
    let plan = payment_plan::compute_payment_plan(&plan_input)?.result;

    let mortgage = match args.mortgage_rate {
        Some(rate) => {
            let mortgage_input = MortgageInput {
                loan_amount: plan.summary.final_payment,
                annual_interest_rate: rate,
                years: args.mortgage_years,
                insurance_percent_annual: args.mortgage_insurance_percent,
            };
            Some(mortgage::compute_mortgage(&mortgage_input)?.result)
        }
        None => None,
    };

    let bytes = render_report(&plan, mortgage.as_ref())?;
    fs::write(&args.out, &bytes)
        .map_err(|e| format!("Failed to write '{}': {}", args.out, e))?;

    let receipt = ReportReceipt {
        path: args.out,
        bytes_written: bytes.len(),
        mortgage_included: mortgage.is_some(),
    };
    Ok(serde_json::to_value(receipt)?)
}

fn resolve_plan_input(args: &ReportArgs) -> Result<PaymentPlanInput, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return input::file::read_json(path);
    }
    if let Some(data) = input::stdin::read_stdin()? {
        return Ok(serde_json::from_value(data)?);
    }

    let price = args
        .price
        .ok_or("--price, --input <file.json>, or piped stdin required for a report")?;

    Ok(PaymentPlanInput {
        price,
        separation: args.separation,
        initial_percent: args.initial_percent,
        total_construction_percent: args.total_construction_percent,
        months: args.months,
    })
}
