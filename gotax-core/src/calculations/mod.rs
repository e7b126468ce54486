//! Indian income-tax calculators.
//!
//! Every calculator is a pure function of its inputs. Each has a struct
//! form that borrows an explicit [`TaxYearConfig`](crate::TaxYearConfig)
//! and/or [`SlabSchedule`](crate::SlabSchedule), and a `compute_*` free
//! function that uses the built-in rules.

pub mod common;
mod error;
pub mod gratuity;
pub mod itr;
pub mod itr_form;
pub mod leave_encashment;
pub mod levies;
pub mod planning_tip;
pub mod rebate;
pub mod regime_comparison;
pub mod slab_tax;
pub mod tds;

pub use error::CalculationError;
pub use gratuity::{GratuityCalculator, GratuityResult, compute_gratuity};
pub use itr::{ItrCalculator, TaxBreakdown, compute_itr};
pub use itr_form::{IncomeType, ItrFormRecommendation, recommend_itr_form};
pub use leave_encashment::{
    LeaveEncashmentCalculator, LeaveEncashmentResult, compute_leave_encashment,
};
pub use levies::{compute_cess, compute_surcharge};
pub use planning_tip::planning_tip;
pub use rebate::compute_rebate;
pub use regime_comparison::{RegimeComparator, RegimeComparison, compare_regimes};
pub use slab_tax::compute_slab_tax;
pub use tds::{
    PaymentFrequency, TdsCalculator, TdsCategory, TdsRate, TdsResult, TdsRule, compute_tds,
};
