//! Command-line definition and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use gotax_core::{
    AgeCategory, CalculationError, ContactRequest, ContactResponse, Deductions, EmployeeType,
    GratuityCalculator, IncomeHeads, IncomeType, ItrCalculator, LeaveEncashmentCalculator,
    PaymentFrequency, RegimeComparator, SlabSchedule, TaxInput, TaxRegime, TaxYearConfig,
    TaxpayerCategory, TdsCalculator, TdsCategory, recommend_itr_form,
};
use gotax_data::SlabScheduleLoader;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::report;
use crate::utils::parse_decimal;

/// Indian income-tax calculators from GoTaxHub.
///
/// Amounts accept thousands separators in either Indian or western
/// grouping, e.g. `12,50,000` or `1,250,000`.
#[derive(Debug, Parser)]
#[command(name = "gotaxhub", version, about, long_about = None)]
pub struct Cli {
    /// Slab schedule CSV to use instead of the built-in AY 2025-26 slabs.
    #[arg(long, global = true, value_name = "CSV")]
    pub slabs: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `gotax_core=trace`. Overrides RUST_LOG.
    #[arg(long, global = true, value_name = "FILTER")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Full income-tax computation from the heads of income.
    Itr(ItrArgs),
    /// Tax deducted at source for one payment category.
    Tds(TdsArgs),
    /// Gratuity and its exempt portion.
    Gratuity(GratuityArgs),
    /// Leave encashment and its exempt portion.
    Leave(LeaveArgs),
    /// Compare the old and new regimes for one income.
    Compare(CompareArgs),
    /// Which ITR form to file for an income profile.
    ItrForm(ItrFormArgs),
    /// Validate a contact form submission and print the relay e-mail.
    Contact(ContactArgs),
}

#[derive(Debug, Args)]
pub struct ItrArgs {
    #[arg(long, default_value = "new")]
    pub regime: TaxRegime,

    /// below-60, 60-80 or above-80.
    #[arg(long, default_value = "below-60")]
    pub age: AgeCategory,

    /// individual, huf, firm, company or trust.
    #[arg(long, default_value = "individual")]
    pub category: TaxpayerCategory,

    /// Echoed in the report; defaults to the built-in year.
    #[arg(long, default_value = "")]
    pub assessment_year: String,

    #[arg(long, default_value = "0", value_parser = parse_decimal)]
    pub salary: Decimal,

    #[arg(long, default_value = "0", value_parser = parse_decimal, allow_hyphen_values = true)]
    pub house_property: Decimal,

    #[arg(long, default_value = "0", value_parser = parse_decimal)]
    pub business: Decimal,

    #[arg(long, default_value = "0", value_parser = parse_decimal)]
    pub capital_gains: Decimal,

    #[arg(long, default_value = "0", value_parser = parse_decimal)]
    pub other_sources: Decimal,

    /// Old regime only; capped at 1,50,000.
    #[arg(long = "section-80c", default_value = "0", value_parser = parse_decimal)]
    pub section_80c: Decimal,

    /// Old regime only.
    #[arg(long = "section-80d", default_value = "0", value_parser = parse_decimal)]
    pub section_80d: Decimal,

    /// Old regime only.
    #[arg(long = "section-80g", default_value = "0", value_parser = parse_decimal)]
    pub section_80g: Decimal,
}

impl ItrArgs {
    fn to_input(&self) -> Result<TaxInput, CalculationError> {
        let heads = IncomeHeads {
            salary: self.salary,
            house_property: self.house_property,
            business: self.business,
            capital_gains: self.capital_gains,
            other_sources: self.other_sources,
        };

        Ok(TaxInput {
            age_category: self.age,
            taxpayer_category: self.category,
            assessment_year: self.assessment_year.clone(),
            deductions: Deductions {
                section_80c: self.section_80c,
                section_80d: self.section_80d,
                section_80g: self.section_80g,
            },
            ..TaxInput::from_heads(&heads, self.regime)?
        })
    }
}

#[derive(Debug, Args)]
pub struct TdsArgs {
    /// salary, interest, professional, rent, commission, contractor or dividend.
    #[arg(long)]
    pub category: TdsCategory,

    #[arg(long, value_parser = parse_decimal)]
    pub income: Decimal,

    /// Whether --income is a monthly or annual amount.
    #[arg(long, default_value = "annual")]
    pub frequency: PaymentFrequency,
}

#[derive(Debug, Args)]
pub struct GratuityArgs {
    /// Last drawn monthly salary (basic + DA).
    #[arg(long, value_parser = parse_decimal)]
    pub salary: Decimal,

    #[arg(long, value_parser = parse_decimal)]
    pub years: Decimal,

    #[arg(long, default_value = "private")]
    pub employee: EmployeeType,
}

#[derive(Debug, Args)]
pub struct LeaveArgs {
    /// Monthly salary (basic + DA).
    #[arg(long, value_parser = parse_decimal)]
    pub salary: Decimal,

    #[arg(long, value_parser = parse_decimal)]
    pub leave_days: Decimal,

    #[arg(long, value_parser = parse_decimal)]
    pub years: Decimal,

    #[arg(long, default_value = "private")]
    pub employee: EmployeeType,
}

#[derive(Debug, Args)]
pub struct CompareArgs {
    #[arg(long, value_parser = parse_decimal)]
    pub income: Decimal,

    #[arg(long = "section-80c", default_value = "0", value_parser = parse_decimal)]
    pub section_80c: Decimal,
}

#[derive(Debug, Args)]
pub struct ItrFormArgs {
    /// salary, salary-property, business, capital-gains, foreign, firm,
    /// company or trust.
    pub income_type: IncomeType,
}

#[derive(Debug, Args)]
pub struct ContactArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub phone: String,

    #[arg(long)]
    pub service: Option<String>,

    #[arg(long)]
    pub message: Option<String>,

    /// Envelope sender of the relay e-mail.
    #[arg(long, default_value = "noreply@gotaxhub.com")]
    pub sender: String,
}

impl ContactArgs {
    fn to_request(&self) -> ContactRequest {
        ContactRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            service: self.service.clone(),
            message: self.message.clone(),
        }
    }
}

/// Runs the selected command and returns the rendered report.
pub fn run(cli: &Cli) -> Result<String> {
    let config = TaxYearConfig::builtin();
    let loaded;
    let schedule = match &cli.slabs {
        Some(path) => {
            loaded = SlabScheduleLoader::load_from_path(path)
                .with_context(|| format!("Failed to load slab schedule: {}", path.display()))?;
            info!(path = %path.display(), "using slab schedule from file");
            &loaded
        }
        None => SlabSchedule::builtin(),
    };

    debug!(command = ?cli.command, "running command");

    match &cli.command {
        Command::Itr(args) => {
            let breakdown = args
                .to_input()
                .and_then(|input| ItrCalculator::new(config, schedule).calculate(&input))
                .context("Failed to compute income tax")?;
            Ok(report::render_breakdown(&breakdown))
        }
        Command::Tds(args) => {
            let result = TdsCalculator::new(config, schedule)
                .calculate(args.income, args.frequency, args.category)
                .context("Failed to compute TDS")?;
            Ok(report::render_tds(&result))
        }
        Command::Gratuity(args) => {
            let result = GratuityCalculator::new(config)
                .calculate(args.salary, args.years, args.employee)
                .context("Failed to compute gratuity")?;
            Ok(report::render_gratuity(&result))
        }
        Command::Leave(args) => {
            let result = LeaveEncashmentCalculator::new(config)
                .calculate(args.salary, args.leave_days, args.years, args.employee)
                .context("Failed to compute leave encashment")?;
            Ok(report::render_leave_encashment(&result))
        }
        Command::Compare(args) => {
            let result = RegimeComparator::new(config, schedule)
                .compare(args.income, args.section_80c)
                .context("Failed to compare regimes")?;
            Ok(report::render_comparison(&result))
        }
        Command::ItrForm(args) => Ok(report::render_itr_form(&recommend_itr_form(
            args.income_type,
        ))),
        Command::Contact(args) => {
            let request = args.to_request();
            if let Err(err) = request.validate() {
                let response = ContactResponse::rejected(&err);
                return Err(anyhow::Error::new(err).context(response.message));
            }
            let email = request.compose_email(&args.sender, Utc::now());
            let mut out = report::render_contact_email(&email);
            out.push('\n');
            out.push_str(&ContactResponse::accepted().message);
            out.push('\n');
            Ok(out)
        }
    }
}
