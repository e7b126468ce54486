use std::sync::LazyLock;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// One surcharge band: `rate` applies when taxable income exceeds `above`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurchargeTier {
    pub above: Decimal,
    pub rate: Decimal,
}

/// Compiled-in constants for one assessment year.
///
/// Slab tables live separately in [`SlabSchedule`](super::SlabSchedule) so
/// they can be swapped out (e.g. loaded from CSV) without touching these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxYearConfig {
    pub assessment_year: String,
    pub new_regime_standard_deduction: Decimal,
    pub old_regime_standard_deduction: Decimal,
    /// Ceiling on the Section 80C deduction.
    pub section_80c_limit: Decimal,
    /// Health and Education Cess rate.
    pub cess_rate: Decimal,
    /// Ascending by `above`.
    pub surcharge_tiers: Vec<SurchargeTier>,
    pub new_regime_rebate_income_limit: Decimal,
    pub new_regime_rebate_cap: Decimal,
    pub old_regime_rebate_income_limit: Decimal,
    pub old_regime_rebate_cap: Decimal,
    pub gratuity_min_years: Decimal,
    pub gratuity_limit_government: Decimal,
    pub gratuity_limit_private: Decimal,
    pub leave_encashment_limit: Decimal,
}

static BUILTIN: LazyLock<TaxYearConfig> = LazyLock::new(TaxYearConfig::ay_2025_26);

impl TaxYearConfig {
    /// Rules for assessment year 2025-26 (financial year 2024-25, Budget 2024).
    pub fn ay_2025_26() -> Self {
        Self {
            assessment_year: "AY 2025-26".to_string(),
            new_regime_standard_deduction: dec!(75000),
            old_regime_standard_deduction: dec!(50000),
            section_80c_limit: dec!(150000),
            cess_rate: dec!(0.04),
            surcharge_tiers: vec![
                SurchargeTier {
                    above: dec!(5000000),
                    rate: dec!(0.10),
                },
                SurchargeTier {
                    above: dec!(10000000),
                    rate: dec!(0.15),
                },
                SurchargeTier {
                    above: dec!(20000000),
                    rate: dec!(0.25),
                },
                SurchargeTier {
                    above: dec!(50000000),
                    rate: dec!(0.37),
                },
            ],
            new_regime_rebate_income_limit: dec!(700000),
            new_regime_rebate_cap: dec!(25000),
            old_regime_rebate_income_limit: dec!(500000),
            old_regime_rebate_cap: dec!(12500),
            gratuity_min_years: dec!(5),
            gratuity_limit_government: dec!(2500000),
            gratuity_limit_private: dec!(2000000),
            leave_encashment_limit: dec!(2500000),
        }
    }

    /// The process-wide default configuration.
    pub fn builtin() -> &'static TaxYearConfig {
        &BUILTIN
    }
}

impl Default for TaxYearConfig {
    fn default() -> Self {
        Self::ay_2025_26()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn surcharge_tiers_are_ascending() {
        let config = TaxYearConfig::builtin();

        assert!(
            config
                .surcharge_tiers
                .windows(2)
                .all(|pair| pair[0].above < pair[1].above)
        );
    }

    #[test]
    fn default_matches_builtin() {
        assert_eq!(&TaxYearConfig::default(), TaxYearConfig::builtin());
    }
}
