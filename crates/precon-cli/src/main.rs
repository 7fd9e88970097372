mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::mortgage::MortgageArgs;
use commands::plan::PlanArgs;
use commands::report::ReportArgs;

/// Pre-construction payment plan and mortgage estimate calculator
#[derive(Parser)]
#[command(
    name = "precon",
    version,
    about = "Pre-construction payment plan and mortgage estimate calculator",
    long_about = "Computes the staged payment schedule for off-plan property purchases \
                  (separation fee, contract-signing installment, monthly construction \
                  installments, final balance), estimates the bank financing for the \
                  final balance, and renders a PDF investment analysis report."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the staged payment plan for a pre-construction purchase
    Plan(PlanArgs),
    /// Estimate the monthly bank payment for a fixed-rate loan
    Mortgage(MortgageArgs),
    /// Render the PDF investment analysis report
    Report(ReportArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Plan(args) => commands::plan::run_plan(args),
        Commands::Mortgage(args) => commands::mortgage::run_mortgage(args),
        Commands::Report(args) => commands::report::run_report(args),
        Commands::Version => {
            println!("precon {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
