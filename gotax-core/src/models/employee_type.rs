use serde::{Deserialize, Serialize};

use super::selector::selector_from_str;

/// Employment sector, which selects the gratuity and leave encashment rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeType {
    /// Central or state government employee.
    Government,
    #[default]
    Private,
}

impl EmployeeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Government => "government",
            Self::Private => "private",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "government" | "govt" => Some(Self::Government),
            "private" => Some(Self::Private),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Government => "Government Employee",
            Self::Private => "Private Sector Employee",
        }
    }
}

selector_from_str!(EmployeeType, "employee type");
