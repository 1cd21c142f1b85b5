//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Every tenant-owned read takes a [`crate::domain::ScopedFilter`]; there is
//! no unscoped method on any port in this module.

mod macros;
pub(crate) use macros::define_port_error;

mod analytics_query;
mod category_repository;
mod discount_repository;
mod login_service;
mod order_repository;
mod supplier_repository;

#[cfg(test)]
pub use analytics_query::MockAnalyticsQuery;
pub use analytics_query::{
    AnalyticsQuery, AnalyticsQueryError, FixtureAnalyticsQuery, TOP_PRODUCTS_LIMIT,
};
#[cfg(test)]
pub use category_repository::MockCategoryRepository;
pub use category_repository::{
    CategoryRepository, CategoryRepositoryError, FixtureCategoryRepository,
};
#[cfg(test)]
pub use discount_repository::MockDiscountRepository;
pub use discount_repository::{
    DiscountRepository, DiscountRepositoryError, FixtureDiscountRepository,
};
#[cfg(test)]
pub use login_service::MockLoginService;
pub(crate) use login_service::authenticate_fixture;
pub use login_service::{
    FIXTURE_PASSWORD, FIXTURE_USER_ID, FIXTURE_USERNAME, FixtureLoginService, LoginService,
};
#[cfg(test)]
pub use order_repository::MockOrderRepository;
pub use order_repository::{FixtureOrderRepository, OrderRepository, OrderRepositoryError};
#[cfg(test)]
pub use supplier_repository::MockSupplierRepository;
pub use supplier_repository::{
    FixtureSupplierRepository, SupplierRepository, SupplierRepositoryError,
};
