//! Slab tax: marginal-rate tax on taxable income before any levies.

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;
use crate::{AgeCategory, SlabSchedule, TaxRegime};

/// Computes income tax on `taxable_income` using the built-in slabs.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use gotax_core::{AgeCategory, TaxRegime, compute_slab_tax};
///
/// // 5% of the 4L between 3L and 7L
/// let tax = compute_slab_tax(dec!(700000), TaxRegime::New, AgeCategory::Below60);
/// assert_eq!(tax, dec!(20000));
/// ```
pub fn compute_slab_tax(
    taxable_income: Decimal,
    regime: TaxRegime,
    age: AgeCategory,
) -> Decimal {
    slab_tax_for(SlabSchedule::builtin(), taxable_income, regime, age)
}

/// Like [`compute_slab_tax`] against an explicit schedule.
pub fn slab_tax_for(
    schedule: &SlabSchedule,
    taxable_income: Decimal,
    regime: TaxRegime,
    age: AgeCategory,
) -> Decimal {
    round_half_up(schedule.table(regime, age).tax_for(taxable_income))
}
