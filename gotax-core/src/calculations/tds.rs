//! Tax deducted at source.
//!
//! Each income category carries its own section, annual threshold and
//! rate. Salary is the exception: it has no threshold and is withheld at
//! the new-regime slab rates plus cess.
//!
//! | Category | Section | Threshold | Rate |
//! |--------------|---------|-----------|------------|
//! | salary | 192 | 0 | slab-based |
//! | interest | 194A | 40,000 | 10% |
//! | professional | 194J | 30,000 | 10% |
//! | rent | 194-IB | 2,40,000 | 2% |
//! | commission | 194H | 15,000 | 2% |
//! | contractor | 194C | 30,000 | 1% |
//! | dividend | 194 | 5,000 | 10% |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use gotax_core::{PaymentFrequency, TdsCategory, compute_tds};
//!
//! let result = compute_tds(dec!(25000), PaymentFrequency::Monthly, TdsCategory::Rent).unwrap();
//!
//! assert_eq!(result.annual_income, dec!(300000));
//! assert_eq!(result.tds_amount, dec!(6000));
//! assert_eq!(result.monthly_amount, dec!(500));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::CalculationError;
use crate::calculations::common::round_half_up;
use crate::calculations::error::{checked, require_positive};
use crate::calculations::levies::with_cess;
use crate::calculations::slab_tax::slab_tax_for;
use crate::models::selector_from_str;
use crate::{AgeCategory, SlabSchedule, TaxRegime, TaxYearConfig};

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Category of payment subject to TDS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TdsCategory {
    Salary,
    Interest,
    Professional,
    Rent,
    Commission,
    Contractor,
    Dividend,
}

impl TdsCategory {
    pub const ALL: [TdsCategory; 7] = [
        Self::Salary,
        Self::Interest,
        Self::Professional,
        Self::Rent,
        Self::Commission,
        Self::Contractor,
        Self::Dividend,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Salary => "salary",
            Self::Interest => "interest",
            Self::Professional => "professional",
            Self::Rent => "rent",
            Self::Commission => "commission",
            Self::Contractor => "contractor",
            Self::Dividend => "dividend",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
    }

    /// The withholding rule for this category.
    pub fn rule(self) -> TdsRule {
        let (section, threshold, rate) = match self {
            Self::Salary => ("Section 192", dec!(0), TdsRate::SlabBased),
            Self::Interest => ("Section 194A", dec!(40000), TdsRate::Flat(dec!(0.10))),
            Self::Professional => ("Section 194J", dec!(30000), TdsRate::Flat(dec!(0.10))),
            Self::Rent => ("Section 194-IB", dec!(240000), TdsRate::Flat(dec!(0.02))),
            Self::Commission => ("Section 194H", dec!(15000), TdsRate::Flat(dec!(0.02))),
            // Individual/HUF payee rate; companies are not distinguished.
            Self::Contractor => ("Section 194C", dec!(30000), TdsRate::Flat(dec!(0.01))),
            Self::Dividend => ("Section 194", dec!(5000), TdsRate::Flat(dec!(0.10))),
        };
        TdsRule {
            category: self,
            section,
            threshold,
            rate,
        }
    }
}

selector_from_str!(TdsCategory, "TDS category");

/// Whether the entered amount is per month or per year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentFrequency {
    Monthly,
    #[default]
    Annual,
}

impl PaymentFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Annual => "annual",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" => Some(Self::Monthly),
            "annual" | "annually" | "yearly" => Some(Self::Annual),
            _ => None,
        }
    }

    fn annualise(
        &self,
        amount: Decimal,
    ) -> Option<Decimal> {
        match self {
            Self::Monthly => amount.checked_mul(MONTHS_PER_YEAR),
            Self::Annual => Some(amount),
        }
    }
}

selector_from_str!(PaymentFrequency, "payment frequency");

/// Withholding rate of a [`TdsRule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TdsRate {
    /// Fraction of the annual payment.
    Flat(Decimal),
    /// Computed from the income-tax slabs.
    SlabBased,
}

impl std::fmt::Display for TdsRate {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Self::Flat(rate) => write!(f, "{}%", (rate * Decimal::ONE_HUNDRED).normalize()),
            Self::SlabBased => f.write_str("As per tax slabs"),
        }
    }
}

/// Statutory rule for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TdsRule {
    pub category: TdsCategory,
    pub section: &'static str,
    /// Annual amount up to which nothing is withheld.
    pub threshold: Decimal,
    pub rate: TdsRate,
}

/// Outcome of a TDS computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TdsResult {
    pub category: TdsCategory,
    pub section: String,
    pub threshold: Decimal,
    pub rate: TdsRate,
    pub annual_income: Decimal,
    /// Amount TDS is levied on; zero when below threshold.
    pub applicable_income: Decimal,
    pub tds_amount: Decimal,
    pub monthly_amount: Decimal,
    /// Set when annual income did not exceed the threshold.
    pub below_threshold: bool,
}

/// Calculator for TDS.
#[derive(Debug, Clone)]
pub struct TdsCalculator<'a> {
    config: &'a TaxYearConfig,
    schedule: &'a SlabSchedule,
}

impl Default for TdsCalculator<'static> {
    fn default() -> Self {
        Self::new(TaxYearConfig::builtin(), SlabSchedule::builtin())
    }
}

impl<'a> TdsCalculator<'a> {
    pub fn new(
        config: &'a TaxYearConfig,
        schedule: &'a SlabSchedule,
    ) -> Self {
        Self { config, schedule }
    }

    /// Computes annual and monthly TDS.
    ///
    /// # Errors
    ///
    /// - [`CalculationError::NonPositive`] if `income` is not positive
    /// - [`CalculationError::Overflow`] if an amount exceeds the decimal range
    pub fn calculate(
        &self,
        income: Decimal,
        frequency: PaymentFrequency,
        category: TdsCategory,
    ) -> Result<TdsResult, CalculationError> {
        let income = require_positive("income", income)?;
        let rule = category.rule();
        let annual_income = checked("annual_income", frequency.annualise(income))?;

        let (applicable_income, tds_amount, below_threshold) = match rule.rate {
            TdsRate::SlabBased => (annual_income, self.salary_tds(annual_income)?, false),
            TdsRate::Flat(_) if annual_income <= rule.threshold => {
                debug!(
                    category = %category,
                    %annual_income,
                    threshold = %rule.threshold,
                    "income at or below TDS threshold"
                );
                (Decimal::ZERO, Decimal::ZERO, true)
            }
            TdsRate::Flat(rate) => {
                let tds = checked("tds_amount", annual_income.checked_mul(rate))?;
                (annual_income, round_half_up(tds), false)
            }
        };

        Ok(TdsResult {
            category,
            section: rule.section.to_string(),
            threshold: rule.threshold,
            rate: rule.rate,
            annual_income,
            applicable_income,
            tds_amount,
            monthly_amount: round_half_up(tds_amount / MONTHS_PER_YEAR),
            below_threshold,
        })
    }

    /// New-regime slab tax on the gross annual salary, plus cess.
    fn salary_tds(
        &self,
        annual_income: Decimal,
    ) -> Result<Decimal, CalculationError> {
        let tax = slab_tax_for(
            self.schedule,
            annual_income,
            TaxRegime::New,
            AgeCategory::Below60,
        );
        checked("tds_amount", with_cess(self.config, tax))
    }
}

/// Computes TDS with the built-in rules.
pub fn compute_tds(
    income: Decimal,
    frequency: PaymentFrequency,
    category: TdsCategory,
) -> Result<TdsResult, CalculationError> {
    TdsCalculator::default().calculate(income, frequency, category)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn rent_monthly_above_threshold() {
        let result = compute_tds(dec!(25000), PaymentFrequency::Monthly, TdsCategory::Rent).unwrap();

        assert_eq!(result.section, "Section 194-IB");
        assert_eq!(result.threshold, dec!(240000));
        assert_eq!(result.annual_income, dec!(300000));
        assert_eq!(result.applicable_income, dec!(300000));
        assert_eq!(result.tds_amount, dec!(6000));
        assert_eq!(result.monthly_amount, dec!(500));
        assert!(!result.below_threshold);
    }

    #[test]
    fn income_equal_to_threshold_is_not_taxed() {
        let result =
            compute_tds(dec!(40000), PaymentFrequency::Annual, TdsCategory::Interest).unwrap();

        assert!(result.below_threshold);
        assert_eq!(result.applicable_income, dec!(0));
        assert_eq!(result.tds_amount, dec!(0));
        assert_eq!(result.monthly_amount, dec!(0));
    }

    #[test]
    fn flat_rates_per_category() {
        let cases = [
            (TdsCategory::Interest, dec!(5000)),
            (TdsCategory::Professional, dec!(5000)),
            (TdsCategory::Rent, dec!(1000)),
            (TdsCategory::Commission, dec!(1000)),
            (TdsCategory::Contractor, dec!(500)),
            (TdsCategory::Dividend, dec!(5000)),
        ];

        for (category, expected) in cases {
            let result = compute_tds(dec!(50000), PaymentFrequency::Annual, category).unwrap();
            if category == TdsCategory::Rent {
                // 50000 is below the rent threshold
                assert!(result.below_threshold);
                continue;
            }
            assert_eq!(result.tds_amount, expected, "{category}");
        }
    }

    #[test]
    fn salary_uses_new_regime_slabs_with_cess() {
        let result =
            compute_tds(dec!(100000), PaymentFrequency::Monthly, TdsCategory::Salary).unwrap();

        // 1200000: 50000 + 200000 * 0.15 = 80000, plus 4% cess
        assert_eq!(result.annual_income, dec!(1200000));
        assert_eq!(result.tds_amount, dec!(83200));
        assert_eq!(result.monthly_amount, dec!(6933.33));
        assert_eq!(result.threshold, dec!(0));
        assert_eq!(result.rate, TdsRate::SlabBased);
        assert!(!result.below_threshold);
    }

    #[test]
    fn low_salary_has_zero_tds_but_is_not_below_threshold() {
        let result =
            compute_tds(dec!(250000), PaymentFrequency::Annual, TdsCategory::Salary).unwrap();

        assert_eq!(result.tds_amount, dec!(0));
        assert_eq!(result.applicable_income, dec!(250000));
        assert!(!result.below_threshold);
    }

    #[test]
    fn rejects_non_positive_income() {
        let result = compute_tds(dec!(-5), PaymentFrequency::Annual, TdsCategory::Dividend);

        assert_eq!(
            result,
            Err(CalculationError::NonPositive {
                field: "income",
                value: dec!(-5),
            })
        );
    }

    #[test]
    fn oversized_monthly_income_reports_overflow() {
        let result = compute_tds(Decimal::MAX, PaymentFrequency::Monthly, TdsCategory::Rent);

        assert_eq!(
            result,
            Err(CalculationError::Overflow {
                field: "annual_income",
            })
        );
    }

    #[test]
    fn every_category_parses_from_its_name() {
        for category in TdsCategory::ALL {
            assert_eq!(category.as_str().parse::<TdsCategory>(), Ok(category));
        }
        assert!("lottery".parse::<TdsCategory>().is_err());
    }

    #[test]
    fn rate_display() {
        assert_eq!(TdsRate::Flat(dec!(0.02)).to_string(), "2%");
        assert_eq!(TdsRate::SlabBased.to_string(), "As per tax slabs");
    }
}
