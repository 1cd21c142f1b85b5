//! Inventory entities owned by a business.
//!
//! Categories and suppliers group products; their detail read models are the
//! page data behind the category and supplier screens.

mod category;
mod product;
mod supplier;
mod validation;

#[cfg(test)]
mod tests;

pub use category::{Category, CategoryDetails, CategoryDraft};
pub use product::{Product, ProductDraft};
pub use supplier::{Supplier, SupplierDetails, SupplierDraft};

/// Validation errors returned by inventory constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogueValidationError {
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },
    #[error("{field} must not be negative (got {value})")]
    NegativeValue { field: &'static str, value: i64 },
    #[error("{field} is not a valid email address")]
    InvalidEmail { field: &'static str },
}
