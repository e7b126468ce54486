use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use gotax_core::{AgeCategory, SlabTable, TaxRegime};
use gotax_data::SlabScheduleLoader;
use rust_decimal::Decimal;

/// Validate a slab schedule CSV file and print its tables.
///
/// The CSV file should have the following columns:
/// - regime: old or new
/// - age_category: below-60, 60-80 or above-80 (empty for the new regime)
/// - upper_bound: inclusive upper bound (empty for unbounded)
/// - rate: marginal rate as a decimal (e.g., 0.05)
/// - base_tax: tax accumulated by all lower slabs
#[derive(Parser, Debug)]
#[command(name = "gotax-slab-check")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the CSV file containing the slab schedule
    #[arg(short, long)]
    file: PathBuf,

    /// Also print the slab tax each table levies on this taxable income
    #[arg(short, long)]
    income: Option<Decimal>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Loading slab schedule from: {}", args.file.display());

    let schedule = SlabScheduleLoader::load_from_path(&args.file)
        .with_context(|| format!("Failed to load slab schedule: {}", args.file.display()))?;

    let tables = [
        (TaxRegime::New, AgeCategory::Below60, "new"),
        (TaxRegime::Old, AgeCategory::Below60, "old/below-60"),
        (TaxRegime::Old, AgeCategory::From60To80, "old/60-80"),
        (TaxRegime::Old, AgeCategory::Above80, "old/above-80"),
    ];

    for (regime, age, name) in tables {
        let table = schedule.table(regime, age);
        println!();
        print_table(name, table);
        if let Some(income) = args.income {
            println!("  tax on {income}: {}", table.tax_for(income).round_dp(2));
        }
    }

    println!();
    println!("Slab schedule is valid.");

    Ok(())
}

fn print_table(
    name: &str,
    table: &SlabTable,
) {
    println!(
        "{name} (basic exemption {})",
        table.basic_exemption()
    );

    let mut lower = Decimal::ZERO;
    for slab in table.slabs() {
        let upper = slab
            .upper_bound
            .map_or_else(|| "and above".to_string(), |bound| bound.to_string());
        println!(
            "  {lower:>10} - {upper:<10} {:>5}%  base {}",
            (slab.rate * Decimal::ONE_HUNDRED).normalize(),
            slab.base_tax
        );
        if let Some(bound) = slab.upper_bound {
            lower = bound;
        }
    }
}
