//! Surcharge and Health and Education Cess.

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;
use crate::{TaxYearConfig, TaxpayerCategory};

/// Tiered surcharge on `income_tax`, keyed on taxable income.
///
/// Only individuals and HUFs attract it.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use gotax_core::{TaxpayerCategory, compute_surcharge};
///
/// let surcharge = compute_surcharge(dec!(6000000), dec!(1500000), TaxpayerCategory::Individual);
/// assert_eq!(surcharge, dec!(150000));
/// ```
pub fn compute_surcharge(
    taxable_income: Decimal,
    income_tax: Decimal,
    taxpayer: TaxpayerCategory,
) -> Decimal {
    surcharge_for(TaxYearConfig::builtin(), taxable_income, income_tax, taxpayer)
}

/// [`compute_surcharge`] against an explicit config.
pub(crate) fn surcharge_for(
    config: &TaxYearConfig,
    taxable_income: Decimal,
    income_tax: Decimal,
    taxpayer: TaxpayerCategory,
) -> Decimal {
    if !taxpayer.attracts_surcharge() {
        return Decimal::ZERO;
    }

    let rate = config
        .surcharge_tiers
        .iter()
        .rev()
        .find(|tier| taxable_income > tier.above)
        .map_or(Decimal::ZERO, |tier| tier.rate);

    round_half_up(income_tax * rate)
}

/// 4% cess on tax plus surcharge.
pub fn compute_cess(tax_plus_surcharge: Decimal) -> Decimal {
    cess_for(TaxYearConfig::builtin(), tax_plus_surcharge)
}

/// [`compute_cess`] against an explicit config.
pub(crate) fn cess_for(
    config: &TaxYearConfig,
    tax_plus_surcharge: Decimal,
) -> Decimal {
    round_half_up(tax_plus_surcharge * config.cess_rate)
}

/// Tax plus its cess, as the quick estimators apply it; `None` on overflow.
pub(crate) fn with_cess(
    config: &TaxYearConfig,
    tax: Decimal,
) -> Option<Decimal> {
    tax.checked_add(cess_for(config, tax))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // surcharge tests
    // =========================================================================

    #[test]
    fn no_surcharge_up_to_fifty_lakh() {
        let surcharge =
            compute_surcharge(dec!(5000000), dec!(1312500), TaxpayerCategory::Individual);

        assert_eq!(surcharge, dec!(0));
    }

    #[test]
    fn surcharge_tiers_apply_on_exclusive_lower_bounds() {
        let cases = [
            (dec!(5000001), dec!(0.10)),
            (dec!(10000000), dec!(0.10)),
            (dec!(10000001), dec!(0.15)),
            (dec!(20000000), dec!(0.15)),
            (dec!(20000001), dec!(0.25)),
            (dec!(50000000), dec!(0.25)),
            (dec!(50000001), dec!(0.37)),
        ];

        for (income, rate) in cases {
            let surcharge = compute_surcharge(income, dec!(100000), TaxpayerCategory::Huf);
            assert_eq!(surcharge, dec!(100000) * rate, "income {income}");
        }
    }

    #[test]
    fn entities_other_than_individual_and_huf_pay_no_surcharge() {
        for taxpayer in [
            TaxpayerCategory::Firm,
            TaxpayerCategory::Company,
            TaxpayerCategory::Trust,
        ] {
            assert_eq!(
                compute_surcharge(dec!(90000000), dec!(27000000), taxpayer),
                dec!(0)
            );
        }
    }

    // =========================================================================
    // cess tests
    // =========================================================================

    #[test]
    fn cess_is_four_percent() {
        assert_eq!(compute_cess(dec!(42500)), dec!(1700));
    }

    #[test]
    fn cess_rounds_to_paise() {
        assert_eq!(compute_cess(dec!(12345.67)), dec!(493.83));
    }

    #[test]
    fn with_cess_scales_by_one_point_zero_four() {
        let config = TaxYearConfig::builtin();

        assert_eq!(with_cess(config, dec!(20000)), Some(dec!(20800)));
    }

    #[test]
    fn with_cess_reports_overflow() {
        let config = TaxYearConfig::builtin();

        assert_eq!(with_cess(config, Decimal::MAX), None);
    }
}
