use clap::Args;
use colored::Colorize;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::Value;

use precon_core::payment_plan::{self, PaymentPlanInput, PaymentPlanOutput};
use precon_core::types::format_money;

use crate::input;

const CHART_WIDTH: usize = 40;

/// Arguments for the staged payment plan
#[derive(Args)]
pub struct PlanArgs {
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

    /// Print a bar-chart breakdown of the payment stages
    #[arg(long)]
    pub chart: bool,
}

pub fn run_plan(args: PlanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let plan_input = resolve_input(&args)?;
    let result = payment_plan::compute_payment_plan(&plan_input)?;

    if args.chart {
        print_breakdown_chart(&result.result);
    }

    Ok(serde_json::to_value(&result)?)
}

fn resolve_input(args: &PlanArgs) -> Result<PaymentPlanInput, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return input::file::read_json(path);
    }
    if let Some(data) = input::stdin::read_stdin()? {
        return Ok(serde_json::from_value(data)?);
    }

    let price = args
        .price
        .ok_or("--price, --input <file.json>, or piped stdin required for a payment plan")?;

    Ok(PaymentPlanInput {
        price,
        separation: args.separation,
        initial_percent: args.initial_percent,
        total_construction_percent: args.total_construction_percent,
        months: args.months,
    })
}

/// Horizontal bar chart of the four payment stages, scaled to the largest.
fn print_breakdown_chart(output: &PaymentPlanOutput) {
    let summary = &output.summary;
    let stages = [
        ("Separation", summary.separation_paid),
        ("Contract Signing", summary.due_at_signing),
        ("During Construction (Total)", summary.total_during_construction),
        ("Final Payment", summary.final_payment),
    ];

    let max = stages
        .iter()
        .map(|(_, amount)| *amount)
        .max()
        .unwrap_or(Decimal::ONE);

    println!("{}", "Payment Breakdown".bold());
    for (i, (label, amount)) in stages.iter().enumerate() {
        let filled = if max > Decimal::ZERO {
            (*amount / max * Decimal::from(CHART_WIDTH as u64))
                .to_usize()
                .unwrap_or(0)
                .min(CHART_WIDTH)
        } else {
            0
        };

        let bar = "\u{2588}".repeat(filled);
        let bar = match i % 4 {
            0 => bar.as_str().cyan(),
            1 => bar.as_str().green(),
            2 => bar.as_str().yellow(),
            _ => bar.as_str().magenta(),
        };
        println!("{label:<28} {bar} {}", format_money(*amount));
    }
    println!();
}
