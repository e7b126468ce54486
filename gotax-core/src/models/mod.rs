mod age_category;
mod employee_type;
mod regime;
mod selector;
mod slab_table;
mod tax_input;
mod tax_year_config;
mod taxpayer_category;

pub use age_category::AgeCategory;
pub use employee_type::EmployeeType;
pub use regime::TaxRegime;
pub use selector::UnknownSelector;
pub(crate) use selector::selector_from_str;
pub use slab_table::{Slab, SlabSchedule, SlabTable, SlabTableError};
pub use tax_input::{Deductions, IncomeHeads, TaxInput};
pub use tax_year_config::{SurchargeTier, TaxYearConfig};
pub use taxpayer_category::TaxpayerCategory;
