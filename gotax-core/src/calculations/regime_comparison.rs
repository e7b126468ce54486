//! Side-by-side old/new regime estimate.
//!
//! This is the quick comparison: the new regime is taxed on the raw income,
//! the old regime on income less 80C and the old standard deduction, both
//! for a taxpayer below 60 and both with cess but without rebate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::CalculationError;
use crate::calculations::common::max;
use crate::calculations::error::{checked, require_non_negative, require_positive};
use crate::calculations::levies::with_cess;
use crate::calculations::slab_tax::slab_tax_for;
use crate::{AgeCategory, SlabSchedule, TaxRegime, TaxYearConfig};

/// Outcome of a regime comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeComparison {
    pub new_regime_tax: Decimal,
    pub old_regime_tax: Decimal,
    /// New regime iff it is strictly cheaper.
    pub recommended_regime: TaxRegime,
    /// `|old - new|`.
    pub savings: Decimal,
}

/// Compares the two regimes for one income.
#[derive(Debug, Clone)]
pub struct RegimeComparator<'a> {
    config: &'a TaxYearConfig,
    schedule: &'a SlabSchedule,
}

impl Default for RegimeComparator<'static> {
    fn default() -> Self {
        Self::new(TaxYearConfig::builtin(), SlabSchedule::builtin())
    }
}

impl<'a> RegimeComparator<'a> {
    pub fn new(
        config: &'a TaxYearConfig,
        schedule: &'a SlabSchedule,
    ) -> Self {
        Self { config, schedule }
    }

    /// # Errors
    ///
    /// Returns [`CalculationError`] if `income` is not positive,
    /// `deduction_80c` is negative, or a tax exceeds the decimal range.
    pub fn compare(
        &self,
        income: Decimal,
        deduction_80c: Decimal,
    ) -> Result<RegimeComparison, CalculationError> {
        let income = require_positive("income", income)?;
        let deduction_80c = require_non_negative("section_80c", deduction_80c)?;

        let new_regime_tax = self.regime_tax(income, TaxRegime::New)?;

        let old_taxable = max(
            income - deduction_80c - self.config.old_regime_standard_deduction,
            Decimal::ZERO,
        );
        let old_regime_tax = self.regime_tax(old_taxable, TaxRegime::Old)?;

        let recommended_regime = if new_regime_tax < old_regime_tax {
            TaxRegime::New
        } else {
            TaxRegime::Old
        };
        let savings = (old_regime_tax - new_regime_tax).abs();

        debug!(
            %new_regime_tax,
            %old_regime_tax,
            recommended = %recommended_regime,
            "compared tax regimes"
        );

        Ok(RegimeComparison {
            new_regime_tax,
            old_regime_tax,
            recommended_regime,
            savings,
        })
    }

    fn regime_tax(
        &self,
        taxable_income: Decimal,
        regime: TaxRegime,
    ) -> Result<Decimal, CalculationError> {
        let tax = slab_tax_for(self.schedule, taxable_income, regime, AgeCategory::Below60);
        checked("regime_tax", with_cess(self.config, tax))
    }
}

/// Compares regimes with the built-in rules.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use gotax_core::{TaxRegime, compare_regimes};
///
/// let cmp = compare_regimes(dec!(1200000), dec!(150000)).unwrap();
///
/// assert_eq!(cmp.new_regime_tax, dec!(83200));
/// assert_eq!(cmp.old_regime_tax, dec!(117000));
/// assert_eq!(cmp.recommended_regime, TaxRegime::New);
/// assert_eq!(cmp.savings, dec!(33800));
/// ```
pub fn compare_regimes(
    income: Decimal,
    deduction_80c: Decimal,
) -> Result<RegimeComparison, CalculationError> {
    RegimeComparator::default().compare(income, deduction_80c)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::{Slab, SlabTable};

    #[test]
    fn new_regime_recommended_for_twelve_lakh() {
        let result = compare_regimes(dec!(1200000), dec!(150000)).unwrap();

        // old: 1000000 taxable -> 112500 * 1.04
        assert_eq!(result.old_regime_tax, dec!(117000));
        assert_eq!(result.new_regime_tax, dec!(83200));
        assert_eq!(result.recommended_regime, TaxRegime::New);
        assert_eq!(result.savings, dec!(33800));
    }

    #[test]
    fn tie_recommends_old_regime() {
        // both regimes owe nothing
        let result = compare_regimes(dec!(250000), dec!(0)).unwrap();

        assert_eq!(result.new_regime_tax, dec!(0));
        assert_eq!(result.old_regime_tax, dec!(0));
        assert_eq!(result.recommended_regime, TaxRegime::Old);
        assert_eq!(result.savings, dec!(0));
    }

    #[test]
    fn old_regime_wins_with_large_deduction_at_low_income() {
        // new: 400000 -> 5000 * 1.04 = 5200; old: 400000 - 150000 - 50000 = 200000 -> 0
        let result = compare_regimes(dec!(400000), dec!(150000)).unwrap();

        assert_eq!(result.new_regime_tax, dec!(5200));
        assert_eq!(result.old_regime_tax, dec!(0));
        assert_eq!(result.recommended_regime, TaxRegime::Old);
        assert_eq!(result.savings, dec!(5200));
    }

    #[test]
    fn decision_rule_and_savings_hold_across_incomes() {
        for income in [dec!(300000), dec!(650000), dec!(910000), dec!(2750000)] {
            for deduction in [dec!(0), dec!(80000), dec!(150000), dec!(400000)] {
                let r = compare_regimes(income, deduction).unwrap();
                assert_eq!(
                    r.recommended_regime == TaxRegime::New,
                    r.new_regime_tax < r.old_regime_tax
                );
                assert_eq!(r.savings, (r.old_regime_tax - r.new_regime_tax).abs());
            }
        }
    }

    #[test]
    fn cess_beyond_decimal_range_reports_overflow() {
        let schedule = SlabSchedule {
            new_regime: SlabTable::new(vec![Slab {
                upper_bound: None,
                rate: dec!(1),
                base_tax: dec!(0),
            }])
            .unwrap(),
            ..SlabSchedule::ay_2025_26()
        };
        let config = TaxYearConfig::ay_2025_26();

        let result = RegimeComparator::new(&config, &schedule).compare(Decimal::MAX, dec!(0));

        assert_eq!(
            result,
            Err(CalculationError::Overflow {
                field: "regime_tax",
            })
        );
    }

    #[test]
    fn rejects_negative_deduction() {
        let result = compare_regimes(dec!(900000), dec!(-1));

        assert_eq!(
            result,
            Err(CalculationError::Negative {
                field: "section_80c",
                value: dec!(-1),
            })
        );
    }
}
