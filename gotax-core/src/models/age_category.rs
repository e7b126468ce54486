use serde::{Deserialize, Serialize};

use super::selector::selector_from_str;

/// Age bracket of an individual taxpayer.
///
/// Only the old regime distinguishes between these; the new regime
/// applies the same slabs at every age.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeCategory {
    #[default]
    #[serde(rename = "below-60")]
    Below60,
    #[serde(rename = "60-80")]
    From60To80,
    #[serde(rename = "above-80")]
    Above80,
}

impl AgeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Below60 => "below-60",
            Self::From60To80 => "60-80",
            Self::Above80 => "above-80",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "below-60" | "below60" => Some(Self::Below60),
            "60-80" | "60to80" => Some(Self::From60To80),
            "above-80" | "above80" => Some(Self::Above80),
            _ => None,
        }
    }
}

selector_from_str!(AgeCategory, "age category");
