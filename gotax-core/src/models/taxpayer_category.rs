use serde::{Deserialize, Serialize};

use super::selector::selector_from_str;

/// Legal status of the assessee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxpayerCategory {
    #[default]
    Individual,
    /// Hindu Undivided Family.
    Huf,
    Firm,
    Company,
    Trust,
}

impl TaxpayerCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Huf => "huf",
            Self::Firm => "firm",
            Self::Company => "company",
            Self::Trust => "trust",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "individual" => Some(Self::Individual),
            "huf" => Some(Self::Huf),
            "firm" => Some(Self::Firm),
            "company" => Some(Self::Company),
            "trust" => Some(Self::Trust),
            _ => None,
        }
    }

    /// Whether the tiered individual surcharge applies to this category.
    pub fn attracts_surcharge(&self) -> bool {
        matches!(self, Self::Individual | Self::Huf)
    }
}

selector_from_str!(TaxpayerCategory, "taxpayer category");
