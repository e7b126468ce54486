//! Marginal-rate slab tables and the per-regime schedule that groups them.

use std::sync::LazyLock;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{AgeCategory, TaxRegime};

/// Errors raised when a slab table violates its structural invariants.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SlabTableError {
    #[error("slab table has no slabs")]
    Empty,

    #[error("slab upper bounds must be strictly increasing ({previous} then {next})")]
    NotIncreasing { previous: Decimal, next: Decimal },

    #[error("only the last slab may be unbounded (slab {index} has no upper bound)")]
    UnboundedBeforeEnd { index: usize },

    #[error("last slab must be unbounded, found upper bound {0}")]
    LastSlabBounded(Decimal),

    #[error("marginal rate must be between 0 and 1, got {0}")]
    InvalidRate(Decimal),

    #[error("slab {index} base tax must equal the tax accumulated below it ({expected}), got {found}")]
    BaseTaxMismatch {
        index: usize,
        expected: Decimal,
        found: Decimal,
    },
}

/// One bracket of a slab table.
///
/// The lower bound is implicit: it is the previous slab's upper bound, or
/// zero for the first slab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slab {
    /// Inclusive upper bound; `None` means unbounded.
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
    /// Tax accumulated by all lower slabs.
    pub base_tax: Decimal,
}

impl Slab {
    fn new(
        upper_bound: Option<Decimal>,
        rate: Decimal,
        base_tax: Decimal,
    ) -> Self {
        Self {
            upper_bound,
            rate,
            base_tax,
        }
    }
}

/// An ordered, exhaustive list of slabs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlabTable {
    slabs: Vec<Slab>,
}

impl SlabTable {
    /// Builds a table, checking that bounds strictly increase, that only
    /// the final slab is unbounded and that each base tax equals the tax
    /// accumulated by the slabs below it.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use gotax_core::{Slab, SlabTable, SlabTableError};
    ///
    /// let result = SlabTable::new(vec![Slab {
    ///     upper_bound: Some(dec!(250000)),
    ///     rate: dec!(0),
    ///     base_tax: dec!(0),
    /// }]);
    ///
    /// assert_eq!(result, Err(SlabTableError::LastSlabBounded(dec!(250000))));
    /// ```
    pub fn new(slabs: Vec<Slab>) -> Result<Self, SlabTableError> {
        Self::validate(&slabs)?;
        Ok(Self { slabs })
    }

    fn validate(slabs: &[Slab]) -> Result<(), SlabTableError> {
        let last = slabs.last().ok_or(SlabTableError::Empty)?;
        if let Some(bound) = last.upper_bound {
            return Err(SlabTableError::LastSlabBounded(bound));
        }

        let mut previous = Decimal::ZERO;
        let mut accumulated = Decimal::ZERO;
        for (index, slab) in slabs.iter().enumerate() {
            if slab.rate < Decimal::ZERO || slab.rate > Decimal::ONE {
                return Err(SlabTableError::InvalidRate(slab.rate));
            }
            if slab.base_tax != accumulated {
                return Err(SlabTableError::BaseTaxMismatch {
                    index,
                    expected: accumulated,
                    found: slab.base_tax,
                });
            }
            match slab.upper_bound {
                Some(next) if next <= previous => {
                    return Err(SlabTableError::NotIncreasing { previous, next });
                }
                Some(next) => {
                    // Rates are at most 1, so this never exceeds `next`.
                    accumulated = slab.base_tax + (next - previous) * slab.rate;
                    previous = next;
                }
                None if index + 1 < slabs.len() => {
                    return Err(SlabTableError::UnboundedBeforeEnd { index });
                }
                None => {}
            }
        }
        Ok(())
    }

    pub fn slabs(&self) -> &[Slab] {
        &self.slabs
    }

    /// Income taxed at zero: the upper bound of a leading zero-rate slab.
    pub fn basic_exemption(&self) -> Decimal {
        match self.slabs.first() {
            Some(slab) if slab.rate.is_zero() => slab.upper_bound.unwrap_or(Decimal::ZERO),
            _ => Decimal::ZERO,
        }
    }

    /// Unrounded tax on `income`.
    ///
    /// Bounds are inclusive and checked in ascending order, so income that
    /// sits exactly on a boundary is taxed in the lower slab. Non-positive
    /// income yields zero.
    pub fn tax_for(
        &self,
        income: Decimal,
    ) -> Decimal {
        if income <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        let mut lower = Decimal::ZERO;
        for slab in &self.slabs {
            match slab.upper_bound {
                Some(upper) if income > upper => lower = upper,
                _ => {
                    let tax = slab.base_tax + (income - lower) * slab.rate;
                    return tax.max(Decimal::ZERO);
                }
            }
        }

        // Validation guarantees an unbounded last slab.
        Decimal::ZERO
    }
}

/// The full set of slab tables for one assessment year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlabSchedule {
    pub new_regime: SlabTable,
    pub old_below_60: SlabTable,
    pub old_60_to_80: SlabTable,
    pub old_above_80: SlabTable,
}

static BUILTIN: LazyLock<SlabSchedule> = LazyLock::new(SlabSchedule::ay_2025_26);

impl SlabSchedule {
    /// Slabs in force for assessment year 2025-26.
    pub fn ay_2025_26() -> Self {
        let new_regime = SlabTable {
            slabs: vec![
                Slab::new(Some(dec!(300000)), dec!(0), dec!(0)),
                Slab::new(Some(dec!(700000)), dec!(0.05), dec!(0)),
                Slab::new(Some(dec!(1000000)), dec!(0.10), dec!(20000)),
                Slab::new(Some(dec!(1200000)), dec!(0.15), dec!(50000)),
                Slab::new(Some(dec!(1500000)), dec!(0.20), dec!(80000)),
                Slab::new(None, dec!(0.30), dec!(140000)),
            ],
        };

        Self {
            new_regime,
            old_below_60: Self::old_regime_table(dec!(250000)),
            old_60_to_80: Self::old_regime_table(dec!(300000)),
            old_above_80: Self::old_regime_table(dec!(500000)),
        }
    }

    /// Old regime: zero up to `exemption`, then 5% to 5L, 20% to 10L and
    /// 30% beyond. The 5% band disappears when the exemption reaches 5L.
    fn old_regime_table(exemption: Decimal) -> SlabTable {
        let five_lakh = dec!(500000);
        let ten_lakh = dec!(1000000);
        let base_at_five_lakh = (five_lakh - exemption) * dec!(0.05);
        let base_at_ten_lakh = base_at_five_lakh + (ten_lakh - five_lakh) * dec!(0.20);

        let mut slabs = vec![Slab::new(Some(exemption), dec!(0), dec!(0))];
        if exemption < five_lakh {
            slabs.push(Slab::new(Some(five_lakh), dec!(0.05), dec!(0)));
        }
        slabs.push(Slab::new(Some(ten_lakh), dec!(0.20), base_at_five_lakh));
        slabs.push(Slab::new(None, dec!(0.30), base_at_ten_lakh));

        SlabTable { slabs }
    }

    /// The process-wide compiled-in schedule.
    pub fn builtin() -> &'static SlabSchedule {
        &BUILTIN
    }

    /// Selects the table for a regime and age; the new regime ignores age.
    pub fn table(
        &self,
        regime: TaxRegime,
        age: AgeCategory,
    ) -> &SlabTable {
        match (regime, age) {
            (TaxRegime::New, _) => &self.new_regime,
            (TaxRegime::Old, AgeCategory::Below60) => &self.old_below_60,
            (TaxRegime::Old, AgeCategory::From60To80) => &self.old_60_to_80,
            (TaxRegime::Old, AgeCategory::Above80) => &self.old_above_80,
        }
    }
}
