use rust_decimal::Decimal;
use thiserror::Error;

/// Errors returned by the calculators.
///
/// `NonPositive`, `Negative` and `Overflow` mean the caller supplied an
/// unusable figure; `GratuityIneligible` means the figures were fine but a
/// tax rule denies the benefit.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CalculationError {
    /// A required amount was zero or negative.
    #[error("{field} must be greater than zero, got {value}")]
    NonPositive { field: &'static str, value: Decimal },

    /// An optional amount (e.g. a deduction) was negative.
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: Decimal },

    /// An intermediate amount exceeded the range of [`Decimal`].
    #[error("{field} is too large to compute")]
    Overflow { field: &'static str },

    /// Gratuity is payable only after the minimum continuous service.
    #[error("gratuity is payable only after {required} years of continuous service, got {years}")]
    GratuityIneligible { years: Decimal, required: Decimal },
}

impl CalculationError {
    /// True for the caller-input variants, false for rule-based refusals.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::NonPositive { .. } | Self::Negative { .. } | Self::Overflow { .. }
        )
    }
}

/// Fails with [`CalculationError::NonPositive`] unless `value > 0`.
pub(crate) fn require_positive(
    field: &'static str,
    value: Decimal,
) -> Result<Decimal, CalculationError> {
    if value <= Decimal::ZERO {
        return Err(CalculationError::NonPositive { field, value });
    }
    Ok(value)
}

/// Fails with [`CalculationError::Negative`] if `value < 0`.
pub(crate) fn require_non_negative(
    field: &'static str,
    value: Decimal,
) -> Result<Decimal, CalculationError> {
    if value < Decimal::ZERO {
        return Err(CalculationError::Negative { field, value });
    }
    Ok(value)
}

/// Maps the result of a `checked_*` operation to [`CalculationError::Overflow`].
pub(crate) fn checked(
    field: &'static str,
    value: Option<Decimal>,
) -> Result<Decimal, CalculationError> {
    value.ok_or(CalculationError::Overflow { field })
}
