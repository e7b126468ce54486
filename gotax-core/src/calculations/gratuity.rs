//! Gratuity and its Section 10(10) exemption.
//!
//! | Sector | Gratuity | Exemption limit |
//! |------------|------------------------------------------|-----------------|
//! | Government | salary × years ÷ 2 | 25L |
//! | Private | salary × 15 × round(years) ÷ 26 | 20L |
//!
//! The exempt portion is the smallest of the gratuity itself, the sector
//! limit and `salary × 10 × years ÷ 2`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculations::CalculationError;
use crate::calculations::common::{max, min_of, round_half_up, round_whole};
use crate::calculations::error::{checked, require_positive};
use crate::{EmployeeType, TaxYearConfig};

/// Outcome of a gratuity computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GratuityResult {
    pub employee_type: EmployeeType,
    /// Service years used by the formula (rounded for private employees).
    pub years_counted: Decimal,
    pub gratuity: Decimal,
    pub exemption_limit: Decimal,
    /// `salary × 10 × years ÷ 2`.
    pub ten_months_salary: Decimal,
    pub exempt_amount: Decimal,
    pub taxable_amount: Decimal,
}

/// Calculator for gratuity.
#[derive(Debug, Clone)]
pub struct GratuityCalculator<'a> {
    config: &'a TaxYearConfig,
}

impl Default for GratuityCalculator<'static> {
    fn default() -> Self {
        Self::new(TaxYearConfig::builtin())
    }
}

impl<'a> GratuityCalculator<'a> {
    pub fn new(config: &'a TaxYearConfig) -> Self {
        Self { config }
    }

    /// Computes gratuity and splits it into exempt and taxable parts.
    ///
    /// # Errors
    ///
    /// - [`CalculationError::NonPositive`] if salary or years is not positive
    /// - [`CalculationError::GratuityIneligible`] if service is shorter than
    ///   the minimum (five years)
    /// - [`CalculationError::Overflow`] if an amount exceeds the decimal range
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use gotax_core::{EmployeeType, compute_gratuity};
    ///
    /// let result = compute_gratuity(dec!(50000), dec!(6), EmployeeType::Private).unwrap();
    ///
    /// assert_eq!(result.gratuity, dec!(173076.92));
    /// assert_eq!(result.exempt_amount, dec!(173076.92));
    /// assert_eq!(result.taxable_amount, dec!(0));
    /// ```
    pub fn calculate(
        &self,
        last_salary: Decimal,
        years: Decimal,
        employee_type: EmployeeType,
    ) -> Result<GratuityResult, CalculationError> {
        let salary = require_positive("salary", last_salary)?;
        let years = require_positive("years_of_service", years)?;

        if years < self.config.gratuity_min_years {
            warn!(%years, "service below minimum for gratuity");
            return Err(CalculationError::GratuityIneligible {
                years,
                required: self.config.gratuity_min_years,
            });
        }

        let (years_counted, gratuity, exemption_limit) = match employee_type {
            EmployeeType::Government => {
                let earned = checked("gratuity", salary.checked_mul(years))?;
                (
                    years,
                    round_half_up(earned / dec!(2)),
                    self.config.gratuity_limit_government,
                )
            }
            EmployeeType::Private => {
                let rounded = round_whole(years);
                let earned = checked(
                    "gratuity",
                    salary
                        .checked_mul(dec!(15))
                        .and_then(|v| v.checked_mul(rounded)),
                )?;
                (
                    rounded,
                    round_half_up(earned / dec!(26)),
                    self.config.gratuity_limit_private,
                )
            }
        };

        let ten_months = checked(
            "ten_months_salary",
            salary
                .checked_mul(dec!(10))
                .and_then(|v| v.checked_mul(years)),
        )?;
        let ten_months_salary = round_half_up(ten_months / dec!(2));
        let exempt_amount = min_of(&[gratuity, exemption_limit, ten_months_salary]);
        let taxable_amount = max(gratuity - exempt_amount, Decimal::ZERO);

        Ok(GratuityResult {
            employee_type,
            years_counted,
            gratuity,
            exemption_limit,
            ten_months_salary,
            exempt_amount,
            taxable_amount,
        })
    }
}

/// Computes gratuity with the built-in limits.
pub fn compute_gratuity(
    last_salary: Decimal,
    years: Decimal,
    employee_type: EmployeeType,
) -> Result<GratuityResult, CalculationError> {
    GratuityCalculator::default().calculate(last_salary, years, employee_type)
}
