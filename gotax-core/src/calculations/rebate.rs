//! Section 87A rebate.

use rust_decimal::Decimal;

use crate::{TaxRegime, TaxYearConfig};

/// Rebate under Section 87A.
///
/// Available in full, up to the regime's cap, when taxable income does not
/// exceed the regime's limit. Never larger than `income_tax`.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use gotax_core::{TaxRegime, compute_rebate};
///
/// assert_eq!(compute_rebate(dec!(700000), TaxRegime::New, dec!(20000)), dec!(20000));
/// assert_eq!(compute_rebate(dec!(700001), TaxRegime::New, dec!(20000.10)), dec!(0));
/// ```
pub fn compute_rebate(
    taxable_income: Decimal,
    regime: TaxRegime,
    income_tax: Decimal,
) -> Decimal {
    rebate_for(TaxYearConfig::builtin(), taxable_income, regime, income_tax)
}

/// [`compute_rebate`] against an explicit config.
pub(crate) fn rebate_for(
    config: &TaxYearConfig,
    taxable_income: Decimal,
    regime: TaxRegime,
    income_tax: Decimal,
) -> Decimal {
    let (limit, cap) = match regime {
        TaxRegime::New => (
            config.new_regime_rebate_income_limit,
            config.new_regime_rebate_cap,
        ),
        TaxRegime::Old => (
            config.old_regime_rebate_income_limit,
            config.old_regime_rebate_cap,
        ),
    };

    if taxable_income > limit {
        return Decimal::ZERO;
    }
    income_tax.min(cap).max(Decimal::ZERO)
}
