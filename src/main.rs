//! Quotation System CLI
//!
//! Command-line interface for pricing Platinum Life quotations

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rust_decimal::Decimal;

use quotation_system::config;
use quotation_system::quote::{
    quote, EducationLevel, Gender, PresenterInfo, Quotation, QuotationInput, SmokerStatus,
};
use quotation_system::rates::load_rate_table;
use quotation_system::render::layout::TAX_RELIEF_NOTICE;
use quotation_system::render::{kshs, render_quotation};

#[derive(Parser, Debug)]
#[command(version, about = "Price a Platinum Life premium quotation")]
struct Cli {
    /// Client full name printed on the quotation
    #[arg(long, default_value = "")]
    client_name: String,

    /// Age last birthday (18-55)
    #[arg(long, default_value_t = 30)]
    age: u8,

    /// Gender of the client
    #[arg(long, value_enum, default_value = "male")]
    gender: Gender,

    /// Smoker status of the client
    #[arg(long, value_enum, default_value = "smoker")]
    smoker_status: SmokerStatus,

    /// Highest education level of the client
    #[arg(long, value_enum, default_value = "tertiary")]
    education: EducationLevel,

    /// Sum assured in whole KShs (1,000,000 - 35,000,000)
    #[arg(long, default_value_t = 1_000_000)]
    sum_assured: u64,

    /// Presenter full name
    #[arg(long)]
    presenter_name: Option<String>,

    /// Distribution channel the quotation goes out through
    #[arg(long)]
    distribution_channel: Option<String>,

    /// Presenter's agent code
    #[arg(long)]
    presenter_code: Option<String>,

    /// Rate table CSV, overriding RATE_TABLE_PATH and the shipped default
    #[arg(long)]
    rates: Option<PathBuf>,

    /// Write the quotation PDF to this path
    #[arg(long)]
    pdf: Option<PathBuf>,

    /// Print the quotation as JSON instead of the console summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let rates_path = cli.rates.clone().unwrap_or_else(config::rate_table_path);
    let table = load_rate_table(&rates_path)
        .with_context(|| format!("loading rate table {}", rates_path.display()))?;

    let input = QuotationInput {
        client_name: cli.client_name.clone(),
        age: cli.age,
        gender: cli.gender,
        smoker_status: cli.smoker_status,
        education: cli.education,
        sum_assured: cli.sum_assured,
    };
    let presenter = PresenterInfo {
        presenter_name: cli.presenter_name.clone(),
        distribution_channel: cli.distribution_channel.clone(),
        presenter_code: cli.presenter_code.clone(),
    }
    .normalized();

    let quotation = quote(&table, input, presenter)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&quotation)?);
    } else {
        print_quotation(&quotation);
    }

    if let Some(path) = &cli.pdf {
        let branding = config::branding_path();
        let bytes = render_quotation(&quotation, Some(&branding))?;
        fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
        println!("\nQuotation PDF written to: {}", path.display());
    }

    Ok(())
}

fn print_quotation(quotation: &Quotation) {
    let input = &quotation.input;
    let breakdown = &quotation.breakdown;

    println!("Platinum Life Premium Autorater v0.1.0");
    println!("======================================\n");

    println!("Client Details:");
    println!("  Client Name: {}", input.client_name);
    println!("  Age: {}", input.age);
    println!("  Gender: {}", input.gender);
    println!("  Smoker: {}", input.smoker_status);
    println!("  Education Level: {}", input.education);
    println!("  Sum Assured: {}", kshs(Decimal::from(input.sum_assured)));
    println!();

    println!("Premium Breakdown:");
    println!("  Base Premium: {}", kshs(breakdown.base));
    println!("  PHCF Levy: {}", kshs(breakdown.phcf));
    println!("  Stamp Duty: {}", kshs(breakdown.stamp_duty));
    println!();

    println!("Total Monthly Premium: {}", kshs(breakdown.total));
    println!("\n{}", TAX_RELIEF_NOTICE);
}
