//! Domain primitives, aggregates and ports.
//!
//! Purpose: define strongly typed point-of-sale entities and the page-data
//! read models the HTTP adapter renders. Types are immutable once
//! constructed; each constructor documents the invariants it enforces.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic error payload.
//! - TenantFilter / ScopedFilter: business membership predicate every
//!   tenant-owned query must carry.
//! - DomainEnum / EnumSchema: closed string enumerations with derived
//!   validators.
//! - Scope / Provider and the `use_*` accessors: page-data binding.
//! - FetcherSubmission / SuccessGate: client fetcher reset contract.

pub mod catalogue;
pub mod enums;
pub mod error;
pub mod fetcher;
pub mod ids;
pub mod page_context;
pub mod ports;
pub mod sales;
pub mod tenancy;
pub mod trace_id;
pub mod user;

pub use self::catalogue::{
    CatalogueValidationError, Category, CategoryDetails, CategoryDraft, Product, ProductDraft,
    Supplier, SupplierDetails, SupplierDraft,
};
pub use self::enums::{
    DiscountScope, DiscountType, DomainEnum, EnumParseError, EnumSchema, OrderStatus,
    ProductOrderType, SortDirection,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::fetcher::{
    FETCHER_RESET_PATH, FetcherResult, FetcherState, FetcherSubmission, SubmitMethod,
    SuccessGate, SuccessNotice,
};
pub use self::ids::{BusinessId, CategoryId, DiscountId, OrderId, ProductId, SupplierId};
pub use self::page_context::{
    AnalyticsContext, CategoryContext, ContextKind, MissingProviderError, OrderContext,
    OrdersContext, Provider, Scope, SupplierContext, use_analytics, use_category, use_context,
    use_order, use_orders, use_supplier,
};
pub use self::sales::{
    AnalyticsSummary, DEFAULT_ORDER_PAGE_SIZE, Discount, DiscountDraft, DiscountFilter,
    MAX_ORDER_PAGE_SIZE, Order, OrderDetails, OrderDraft, OrderFilter, OrderLine, OrderLineDraft,
    OrderList, OrderPage, ProductSales, SalesValidationError, StatusCount,
};
pub use self::tenancy::{ById, ScopedFilter, TenantFilter, scoping_filter};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{LoginCredentials, LoginValidationError, UserId, UserValidationError};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use till::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::forbidden("nope"))
/// }
/// assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;

impl From<MissingProviderError> for Error {
    fn from(err: MissingProviderError) -> Self {
        tracing::error!(
            accessor = err.accessor(),
            provider = err.provider(),
            "page rendered outside its provider"
        );
        Error::internal(err.to_string())
    }
}
