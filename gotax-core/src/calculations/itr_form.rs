//! Which ITR form a taxpayer should file.

use serde::{Deserialize, Serialize};

use crate::models::selector_from_str;

/// Dominant income profile of the filer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IncomeType {
    Salary,
    /// Salary plus multiple house properties or capital gains.
    SalaryProperty,
    Business,
    CapitalGains,
    Foreign,
    Firm,
    Company,
    Trust,
}

impl IncomeType {
    pub const ALL: [IncomeType; 8] = [
        Self::Salary,
        Self::SalaryProperty,
        Self::Business,
        Self::CapitalGains,
        Self::Foreign,
        Self::Firm,
        Self::Company,
        Self::Trust,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Salary => "salary",
            Self::SalaryProperty => "salary-property",
            Self::Business => "business",
            Self::CapitalGains => "capital-gains",
            Self::Foreign => "foreign",
            Self::Firm => "firm",
            Self::Company => "company",
            Self::Trust => "trust",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

selector_from_str!(IncomeType, "income type");

/// The form to file and why.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItrFormRecommendation {
    pub form: &'static str,
    pub description: &'static str,
    pub applicability: &'static str,
}

/// Maps an income profile to the ITR form that covers it.
///
/// ```
/// use gotax_core::{IncomeType, recommend_itr_form};
///
/// assert_eq!(recommend_itr_form(IncomeType::Business).form, "ITR-3");
/// ```
pub fn recommend_itr_form(income_type: IncomeType) -> ItrFormRecommendation {
    let (form, description, applicability) = match income_type {
        IncomeType::Salary => (
            "ITR-1 (Sahaj)",
            "For individuals with salary income, one house property, and other sources",
            "Total income up to ₹50 lakhs, no business/capital gains income",
        ),
        IncomeType::SalaryProperty => (
            "ITR-2",
            "For individuals with salary income and multiple house properties or capital gains",
            "No business or professional income, can have capital gains",
        ),
        IncomeType::Business => (
            "ITR-3",
            "For individuals/HUFs with business or professional income",
            "Income from business, profession, or presumptive income schemes",
        ),
        IncomeType::CapitalGains => (
            "ITR-2",
            "For individuals with capital gains from investments or property",
            "Capital gains from sale of property, shares, mutual funds etc.",
        ),
        IncomeType::Foreign => (
            "ITR-2 or ITR-3",
            "For individuals with foreign income or assets",
            "Foreign income, foreign assets, or resident but not ordinarily resident",
        ),
        IncomeType::Firm => (
            "ITR-5",
            "For firms, LLPs, and Association of Persons (AOP)",
            "Partnership firms, Limited Liability Partnerships, AOP, BOI",
        ),
        IncomeType::Company => (
            "ITR-6",
            "For companies other than companies claiming exemption under section 11",
            "All companies except those claiming exemption u/s 11",
        ),
        IncomeType::Trust => (
            "ITR-7",
            "For trusts, political parties, institutions, and exempt entities",
            "Religious/charitable trusts, political parties, research institutions",
        ),
    };

    ItrFormRecommendation {
        form,
        description,
        applicability,
    }
}
