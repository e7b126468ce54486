//! Indian income-tax calculators for the GoTaxHub website.
//!
//! The crate is split into the value types in [`models`], the pure
//! calculators in [`calculations`] and the contact form handling in
//! [`contact`]. The most common entry points are re-exported at the root.

pub mod calculations;
pub mod contact;
pub mod models;

pub use calculations::*;
pub use contact::{ContactEmail, ContactError, ContactRequest, ContactResponse};
pub use models::*;
