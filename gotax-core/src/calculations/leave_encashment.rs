//! Leave encashment and its Section 10(10AA) exemption.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::calculations::CalculationError;
use crate::calculations::common::{max, min_of, round_half_up};
use crate::calculations::error::{checked, require_positive};
use crate::{EmployeeType, TaxYearConfig};

const DAYS_PER_MONTH: Decimal = dec!(30);

/// Outcome of a leave encashment computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveEncashmentResult {
    pub employee_type: EmployeeType,
    /// Monthly salary ÷ 30.
    pub daily_salary: Decimal,
    pub total_encashment: Decimal,
    /// 30 days of salary for each year of service.
    pub thirty_days_per_year: Decimal,
    pub ten_months_salary: Decimal,
    /// Statutory ceiling; `None` for government employees.
    pub exemption_limit: Option<Decimal>,
    pub exempt_amount: Decimal,
    pub taxable_amount: Decimal,
}

/// Calculator for leave encashment.
#[derive(Debug, Clone)]
pub struct LeaveEncashmentCalculator<'a> {
    config: &'a TaxYearConfig,
}

impl Default for LeaveEncashmentCalculator<'static> {
    fn default() -> Self {
        Self::new(TaxYearConfig::builtin())
    }
}

impl<'a> LeaveEncashmentCalculator<'a> {
    pub fn new(config: &'a TaxYearConfig) -> Self {
        Self { config }
    }

    /// Computes the encashment and its exempt/taxable split.
    ///
    /// Government employees are fully exempt. For everyone else the
    /// exemption is the least of the encashment, 30 days' salary per year
    /// of service, ten months' salary and the statutory limit.
    ///
    /// # Errors
    ///
    /// - [`CalculationError::NonPositive`] if any input is not positive
    /// - [`CalculationError::Overflow`] if an amount exceeds the decimal range
    pub fn calculate(
        &self,
        salary: Decimal,
        leave_days: Decimal,
        years: Decimal,
        employee_type: EmployeeType,
    ) -> Result<LeaveEncashmentResult, CalculationError> {
        let salary = require_positive("salary", salary)?;
        let leave_days = require_positive("leave_days", leave_days)?;
        let years = require_positive("years_of_service", years)?;

        let daily = salary / DAYS_PER_MONTH;
        let total_encashment =
            round_half_up(checked("total_encashment", daily.checked_mul(leave_days))?);
        let thirty_days_per_year = round_half_up(checked(
            "thirty_days_per_year",
            daily
                .checked_mul(DAYS_PER_MONTH)
                .and_then(|v| v.checked_mul(years)),
        )?);
        let ten_months_salary =
            round_half_up(checked("ten_months_salary", salary.checked_mul(dec!(10)))?);

        let (exemption_limit, exempt_amount) = match employee_type {
            EmployeeType::Government => (None, total_encashment),
            EmployeeType::Private => {
                let limit = self.config.leave_encashment_limit;
                let exempt = min_of(&[
                    total_encashment,
                    thirty_days_per_year,
                    ten_months_salary,
                    limit,
                ]);
                (Some(limit), exempt)
            }
        };

        Ok(LeaveEncashmentResult {
            employee_type,
            daily_salary: round_half_up(daily),
            total_encashment,
            thirty_days_per_year,
            ten_months_salary,
            exemption_limit,
            exempt_amount,
            taxable_amount: max(total_encashment - exempt_amount, Decimal::ZERO),
        })
    }
}

/// Computes leave encashment with the built-in limit.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use gotax_core::{EmployeeType, compute_leave_encashment};
///
/// let result =
///     compute_leave_encashment(dec!(60000), dec!(300), dec!(8), EmployeeType::Private).unwrap();
///
/// assert_eq!(result.total_encashment, dec!(600000));
/// assert_eq!(result.exempt_amount, dec!(480000));
/// assert_eq!(result.taxable_amount, dec!(120000));
/// ```
pub fn compute_leave_encashment(
    salary: Decimal,
    leave_days: Decimal,
    years: Decimal,
    employee_type: EmployeeType,
) -> Result<LeaveEncashmentResult, CalculationError> {
    LeaveEncashmentCalculator::default().calculate(salary, leave_days, years, employee_type)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn government_employee_is_fully_exempt() {
        let result =
            compute_leave_encashment(dec!(90000), dec!(300), dec!(30), EmployeeType::Government)
                .unwrap();

        assert_eq!(result.daily_salary, dec!(3000));
        assert_eq!(result.total_encashment, dec!(900000));
        assert_eq!(result.exemption_limit, None);
        assert_eq!(result.exempt_amount, dec!(900000));
        assert_eq!(result.taxable_amount, dec!(0));
    }

    #[test]
    fn private_limited_by_service_years() {
        let result =
            compute_leave_encashment(dec!(60000), dec!(300), dec!(8), EmployeeType::Private)
                .unwrap();

        // 2000/day: encashment 600000, 30 days x 8 years = 480000, 10 months = 600000
        assert_eq!(result.thirty_days_per_year, dec!(480000));
        assert_eq!(result.ten_months_salary, dec!(600000));
        assert_eq!(result.exemption_limit, Some(dec!(2500000)));
        assert_eq!(result.exempt_amount, dec!(480000));
        assert_eq!(result.taxable_amount, dec!(120000));
    }

    #[test]
    fn private_limited_by_ten_months_salary() {
        let result =
            compute_leave_encashment(dec!(30000), dec!(450), dec!(20), EmployeeType::Private)
                .unwrap();

        assert_eq!(result.total_encashment, dec!(450000));
        assert_eq!(result.exempt_amount, dec!(300000));
        assert_eq!(result.taxable_amount, dec!(150000));
    }

    #[test]
    fn private_limited_by_statutory_ceiling() {
        let result =
            compute_leave_encashment(dec!(600000), dec!(300), dec!(35), EmployeeType::Private)
                .unwrap();

        assert_eq!(result.total_encashment, dec!(6000000));
        assert_eq!(result.exempt_amount, dec!(2500000));
        assert_eq!(result.taxable_amount, dec!(3500000));
    }

    #[test]
    fn small_encashment_is_fully_exempt() {
        let result =
            compute_leave_encashment(dec!(50000), dec!(45), dec!(10), EmployeeType::Private)
                .unwrap();

        assert_eq!(result.daily_salary, dec!(1666.67));
        assert_eq!(result.total_encashment, dec!(75000));
        assert_eq!(result.exempt_amount, dec!(75000));
        assert_eq!(result.taxable_amount, dec!(0));
    }

    #[test]
    fn oversized_salary_reports_overflow() {
        let result =
            compute_leave_encashment(Decimal::MAX, dec!(300), dec!(10), EmployeeType::Private);

        assert_eq!(
            result,
            Err(CalculationError::Overflow {
                field: "total_encashment",
            })
        );
    }

    #[test]
    fn rejects_zero_leave_days() {
        let result = compute_leave_encashment(dec!(50000), dec!(0), dec!(10), EmployeeType::Private);

        assert_eq!(
            result,
            Err(CalculationError::NonPositive {
                field: "leave_days",
                value: dec!(0),
            })
        );
    }
}
