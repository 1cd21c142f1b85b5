//! Sales entities: discounts, orders and the analytics summary.

mod analytics;
mod discount;
mod order;


pub use analytics::{AnalyticsSummary, ProductSales, StatusCount};
pub use discount::{Discount, DiscountDraft, DiscountFilter};
pub use order::{
    DEFAULT_ORDER_PAGE_SIZE, MAX_ORDER_PAGE_SIZE, Order, OrderDetails, OrderDraft, OrderFilter,
    OrderLine, OrderLineDraft, OrderList, OrderPage,
};

/// Validation errors returned by sales constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SalesValidationError {
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },
    #[error("{field} must not be negative (got {value})")]
    NegativeValue { field: &'static str, value: i64 },
    #[error("{field} must be positive (got {value})")]
    NonPositiveValue { field: &'static str, value: i64 },
    #[error("percentage discounts must be at most 10000 basis points (got {value})")]
    PercentageTooLarge { value: i64 },
    #[error("discount of {discount_cents} exceeds subtotal of {subtotal_cents}")]
    DiscountExceedsSubtotal {
        discount_cents: i64,
        subtotal_cents: i64,
    },
    #[error("order lines total {lines_cents} but the order subtotal is {subtotal_cents}")]
    SubtotalMismatch {
        lines_cents: i64,
        subtotal_cents: i64,
    },
    #[error("page size must be between 1 and {max} (got {value})")]
    InvalidPageSize { value: u32, max: u32 },
}

fn non_negative(value: i64, field: &'static str) -> Result<i64, SalesValidationError> {
    if value < 0 {
        return Err(SalesValidationError::NegativeValue { field, value });
    }
    Ok(value)
}

fn positive(value: i64, field: &'static str) -> Result<i64, SalesValidationError> {
    if value <= 0 {
        return Err(SalesValidationError::NonPositiveValue { field, value });
    }
    Ok(value)
}

fn non_empty(value: String, field: &'static str) -> Result<String, SalesValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SalesValidationError::EmptyField { field });
    }
    Ok(trimmed.to_owned())
}
