//! Income tax return computation.
//!
//! Runs the full pipeline for one taxpayer:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Total income (sum of the heads of income) |
//! | 2    | Standard deduction (75,000 new regime / 50,000 old regime) |
//! | 3    | Chapter VI-A deductions: min(80C, 1.5L) + 80D + 80G (old regime only) |
//! | 4    | Taxable income: Step 1 - Step 2 - Step 3, minimum 0 |
//! | 5    | Income tax from the slab table for regime and age |
//! | 6    | Surcharge (individuals and HUFs above 50L) |
//! | 7    | Health and Education Cess: 4% of Step 5 + Step 6 |
//! | 8    | Section 87A rebate |
//! | 9    | Total tax: Step 5 + Step 6 + Step 7 - Step 8, minimum 0 |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use gotax_core::{TaxInput, TaxRegime, compute_itr};
//!
//! let breakdown = compute_itr(&TaxInput::individual(dec!(1000000), TaxRegime::New)).unwrap();
//!
//! assert_eq!(breakdown.taxable_income, dec!(925000));
//! assert_eq!(breakdown.income_tax, dec!(42500));
//! assert_eq!(breakdown.cess, dec!(1700));
//! assert_eq!(breakdown.total_tax, dec!(44200));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::CalculationError;
use crate::calculations::common::{max, round_half_up};
use crate::calculations::error::{checked, require_non_negative, require_positive};
use crate::calculations::levies::{cess_for, surcharge_for};
use crate::calculations::planning_tip::planning_tip;
use crate::calculations::rebate::rebate_for;
use crate::{
    AgeCategory, Deductions, SlabSchedule, TaxInput, TaxRegime, TaxYearConfig, TaxpayerCategory,
};

/// Result of an ITR computation, one field per pipeline step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    pub regime: TaxRegime,
    pub age_category: AgeCategory,
    pub taxpayer_category: TaxpayerCategory,
    pub assessment_year: String,

    pub total_income: Decimal,
    pub standard_deduction: Decimal,
    /// Chapter VI-A deductions actually allowed (zero under the new regime).
    pub total_deductions: Decimal,
    pub taxable_income: Decimal,
    /// Zero-rate band of the slab table that was applied.
    pub basic_exemption: Decimal,
    pub income_tax: Decimal,
    pub surcharge: Decimal,
    pub cess: Decimal,
    pub rebate: Decimal,
    pub total_tax: Decimal,
}

impl TaxBreakdown {
    /// Total tax as a percentage of total income, to two decimals.
    pub fn effective_tax_rate(&self) -> Decimal {
        if self.total_income.is_zero() {
            return Decimal::ZERO;
        }
        round_half_up(self.total_tax / self.total_income * Decimal::ONE_HUNDRED)
    }

    pub fn planning_tip(&self) -> &'static str {
        planning_tip(self.regime, self.total_deductions, self.total_income)
    }
}

/// Calculator for the ITR pipeline.
#[derive(Debug, Clone)]
pub struct ItrCalculator<'a> {
    config: &'a TaxYearConfig,
    schedule: &'a SlabSchedule,
}

impl Default for ItrCalculator<'static> {
    fn default() -> Self {
        Self::new(TaxYearConfig::builtin(), SlabSchedule::builtin())
    }
}

impl<'a> ItrCalculator<'a> {
    pub fn new(
        config: &'a TaxYearConfig,
        schedule: &'a SlabSchedule,
    ) -> Self {
        Self { config, schedule }
    }

    /// Runs every step of the pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError`] if gross income is not positive, any
    /// deduction is negative, or an amount exceeds the decimal range.
    pub fn calculate(
        &self,
        input: &TaxInput,
    ) -> Result<TaxBreakdown, CalculationError> {
        let total_income = require_positive("gross_income", input.gross_income)?;
        self.validate_deductions(&input.deductions)?;

        let standard_deduction = self.standard_deduction(input.regime);
        let total_deductions = self.chapter_via_deductions(input.regime, &input.deductions)?;
        let taxable_income = self.taxable_income(total_income, standard_deduction, total_deductions);

        let table = self.schedule.table(input.regime, input.age_category);
        let basic_exemption = table.basic_exemption();
        let income_tax = round_half_up(table.tax_for(taxable_income));

        let surcharge = surcharge_for(
            self.config,
            taxable_income,
            income_tax,
            input.taxpayer_category,
        );
        let levied = checked("total_tax", income_tax.checked_add(surcharge))?;
        let cess = cess_for(self.config, levied);
        let rebate = rebate_for(self.config, taxable_income, input.regime, income_tax);
        let total_tax = max(
            checked("total_tax", levied.checked_add(cess))? - rebate,
            Decimal::ZERO,
        );

        debug!(
            regime = %input.regime,
            %taxable_income,
            %income_tax,
            %surcharge,
            %cess,
            %rebate,
            %total_tax,
            "computed income tax"
        );

        let assessment_year = if input.assessment_year.is_empty() {
            self.config.assessment_year.clone()
        } else {
            input.assessment_year.clone()
        };

        Ok(TaxBreakdown {
            regime: input.regime,
            age_category: input.age_category,
            taxpayer_category: input.taxpayer_category,
            assessment_year,
            total_income,
            standard_deduction,
            total_deductions,
            taxable_income,
            basic_exemption,
            income_tax,
            surcharge,
            cess,
            rebate,
            total_tax,
        })
    }

    fn validate_deductions(
        &self,
        deductions: &Deductions,
    ) -> Result<(), CalculationError> {
        require_non_negative("section_80c", deductions.section_80c)?;
        require_non_negative("section_80d", deductions.section_80d)?;
        require_non_negative("section_80g", deductions.section_80g)?;
        Ok(())
    }

    fn standard_deduction(
        &self,
        regime: TaxRegime,
    ) -> Decimal {
        match regime {
            TaxRegime::New => self.config.new_regime_standard_deduction,
            TaxRegime::Old => self.config.old_regime_standard_deduction,
        }
    }

    /// 80C is capped; 80D and 80G are taken as given.
    fn chapter_via_deductions(
        &self,
        regime: TaxRegime,
        deductions: &Deductions,
    ) -> Result<Decimal, CalculationError> {
        match regime {
            TaxRegime::New => Ok(Decimal::ZERO),
            TaxRegime::Old => {
                let total = deductions
                    .section_80c
                    .min(self.config.section_80c_limit)
                    .checked_add(deductions.section_80d)
                    .and_then(|v| v.checked_add(deductions.section_80g));
                checked("total_deductions", total).map(round_half_up)
            }
        }
    }

    fn taxable_income(
        &self,
        total_income: Decimal,
        standard_deduction: Decimal,
        total_deductions: Decimal,
    ) -> Decimal {
        max(
            round_half_up(total_income - standard_deduction - total_deductions),
            Decimal::ZERO,
        )
    }
}

/// Runs the ITR pipeline with the built-in rules.
pub fn compute_itr(input: &TaxInput) -> Result<TaxBreakdown, CalculationError> {
    ItrCalculator::default().calculate(input)
}
