use thiserror::Error;

/// Error returned when a selector string does not name a known variant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownSelector {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownSelector {
    pub(crate) fn new(
        kind: &'static str,
        value: &str,
    ) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Implements `FromStr` in terms of an inherent `parse` returning `Option`.
macro_rules! selector_from_str {
    ($ty:ty, $kind:literal) => {
        impl std::str::FromStr for $ty {
            type Err = $crate::models::UnknownSelector;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s).ok_or_else(|| $crate::models::UnknownSelector::new($kind, s))
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(
                &self,
                f: &mut std::fmt::Formatter<'_>,
            ) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use selector_from_str;
