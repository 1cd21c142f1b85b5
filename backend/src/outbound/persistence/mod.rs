//! PostgreSQL persistence adapters using Diesel.
//!
//! Repositories translate between Diesel rows and domain types and hold no
//! business logic. Row structs and table definitions stay private to this
//! module. Every query on a business-owned table is filtered through
//! [`tenant_scope`].
//!
//! ```ignore
//! use till::outbound::persistence::{DbPool, DieselOrderRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/till")).await?;
//! let orders = DieselOrderRepository::new(pool);
//! ```

mod diesel_analytics_query;
mod diesel_basic_error_mapping;
mod diesel_category_repository;
mod diesel_discount_repository;
mod diesel_login_service;
mod diesel_order_repository;
mod diesel_supplier_repository;
mod migrations;
mod models;
mod pool;
mod row_conversion;
mod schema;
pub(crate) mod tenant_scope;

pub use diesel_analytics_query::DieselAnalyticsQuery;
pub use diesel_category_repository::DieselCategoryRepository;
pub use diesel_discount_repository::DieselDiscountRepository;
pub use diesel_login_service::DieselLoginService;
pub use diesel_order_repository::DieselOrderRepository;
pub use diesel_supplier_repository::DieselSupplierRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
