use serde::{Deserialize, Serialize};

use super::selector::selector_from_str;

/// The two alternative Indian income-tax computation schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxRegime {
    /// Pre-2020 regime with chapter VI-A deductions and age-based exemptions.
    Old,
    /// Section 115BAC regime: lower slabs, no chapter VI-A deductions.
    New,
}

impl TaxRegime {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Old => "old",
            Self::New => "new",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "old" => Some(Self::Old),
            "new" => Some(Self::New),
            _ => None,
        }
    }

    /// Human readable name used in reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Old => "Old Tax Regime",
            Self::New => "New Tax Regime (Section 115BAC)",
        }
    }
}

selector_from_str!(TaxRegime, "tax regime");

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_accepts_known_codes() {
        assert_eq!(TaxRegime::parse("old"), Some(TaxRegime::Old));
        assert_eq!(TaxRegime::parse(" NEW "), Some(TaxRegime::New));
    }

    #[test]
    fn from_str_rejects_unknown_code() {
        let err = "flat".parse::<TaxRegime>().unwrap_err();

        assert_eq!(err.to_string(), "unknown tax regime 'flat'");
    }

    #[test]
    fn display_round_trips_through_parse() {
        for regime in [TaxRegime::Old, TaxRegime::New] {
            assert_eq!(regime.to_string().parse::<TaxRegime>(), Ok(regime));
        }
    }
}
