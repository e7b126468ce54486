use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AgeCategory, TaxRegime, TaxpayerCategory};
use crate::CalculationError;

/// Chapter VI-A deductions claimed under the old regime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deductions {
    /// Investments and payments under Section 80C (capped by the calculator).
    pub section_80c: Decimal,
    /// Health insurance premiums under Section 80D.
    pub section_80d: Decimal,
    /// Donations under Section 80G.
    pub section_80g: Decimal,
}

/// Income split by the five heads of income.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeHeads {
    pub salary: Decimal,
    pub house_property: Decimal,
    pub business: Decimal,
    pub capital_gains: Decimal,
    pub other_sources: Decimal,
}

impl IncomeHeads {
    /// Sum of every head; fails with [`CalculationError::Overflow`] if the
    /// sum leaves the decimal range.
    pub fn total(&self) -> Result<Decimal, CalculationError> {
        [
            self.house_property,
            self.business,
            self.capital_gains,
            self.other_sources,
        ]
        .into_iter()
        .try_fold(self.salary, Decimal::checked_add)
        .ok_or(CalculationError::Overflow {
            field: "gross_income",
        })
    }
}

/// Everything the ITR calculator needs for one computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxInput {
    pub gross_income: Decimal,
    pub regime: TaxRegime,
    pub age_category: AgeCategory,
    pub taxpayer_category: TaxpayerCategory,
    /// Free-form tag such as `"AY 2025-26"`, echoed in the breakdown.
    pub assessment_year: String,
    /// Ignored under the new regime.
    pub deductions: Deductions,
}

impl TaxInput {
    /// Convenience constructor for an individual below 60 with no deductions.
    pub fn individual(
        gross_income: Decimal,
        regime: TaxRegime,
    ) -> Self {
        Self {
            gross_income,
            regime,
            age_category: AgeCategory::default(),
            taxpayer_category: TaxpayerCategory::default(),
            assessment_year: String::new(),
            deductions: Deductions::default(),
        }
    }

    pub fn from_heads(
        heads: &IncomeHeads,
        regime: TaxRegime,
    ) -> Result<Self, CalculationError> {
        Ok(Self::individual(heads.total()?, regime))
    }
}
