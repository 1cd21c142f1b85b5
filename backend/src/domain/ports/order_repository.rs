//! Read-side port for order pages.
//!
//! Two loaders share this port: the single-order page and the orders list.
//! Both take a [`ScopedFilter`]; list ordering and size travel separately in
//! an [`OrderPage`] because they are not predicates.

use async_trait::async_trait;

use crate::domain::{ById, Error, Order, OrderDetails, OrderFilter, OrderId, OrderPage, ScopedFilter};

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading orders.
    pub enum OrderRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "order read connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } =>
            "order read query failed: {message}",
    }
}

/// Port for loading order page data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Load one order with its lines and applied discount.
    async fn order_details(
        &self,
        filter: &ScopedFilter<ById<OrderId>>,
    ) -> Result<Option<OrderDetails>, OrderRepositoryError>;

    /// List order headers matching `filter`, sorted by creation time.
    ///
    /// Ties on creation time are broken by reference so pages are stable.
    async fn list_orders(
        &self,
        filter: &ScopedFilter<OrderFilter>,
        page: OrderPage,
    ) -> Result<Vec<Order>, OrderRepositoryError>;
}

/// Fixture implementation for tests that do not exercise order reads.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureOrderRepository;

#[async_trait]
impl OrderRepository for FixtureOrderRepository {
    async fn order_details(
        &self,
        _filter: &ScopedFilter<ById<OrderId>>,
    ) -> Result<Option<OrderDetails>, OrderRepositoryError> {
        Ok(None)
    }

    async fn list_orders(
        &self,
        _filter: &ScopedFilter<OrderFilter>,
        _page: OrderPage,
    ) -> Result<Vec<Order>, OrderRepositoryError> {
        Ok(Vec::new())
    }
}

impl From<OrderRepositoryError> for Error {
    fn from(err: OrderRepositoryError) -> Self {
        match err {
            OrderRepositoryError::Connection { message } => Error::service_unavailable(message),
            OrderRepositoryError::Query { message } => Error::internal(message),
        }
    }
}
