//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    AnalyticsQuery, CategoryRepository, DiscountRepository, FixtureAnalyticsQuery,
    FixtureCategoryRepository, FixtureDiscountRepository, FixtureLoginService,
    FixtureOrderRepository, FixtureSupplierRepository, LoginService, OrderRepository,
    SupplierRepository,
};

/// Parameter object bundling every port implementation for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub login: Arc<dyn LoginService>,
    pub categories: Arc<dyn CategoryRepository>,
    pub suppliers: Arc<dyn SupplierRepository>,
    pub orders: Arc<dyn OrderRepository>,
    pub discounts: Arc<dyn DiscountRepository>,
    pub analytics: Arc<dyn AnalyticsQuery>,
}

impl Default for HttpStatePorts {
    /// Fixture ports: fixed login, empty reads.
    fn default() -> Self {
        Self {
            login: Arc::new(FixtureLoginService),
            categories: Arc::new(FixtureCategoryRepository),
            suppliers: Arc::new(FixtureSupplierRepository),
            orders: Arc::new(FixtureOrderRepository),
            discounts: Arc::new(FixtureDiscountRepository),
            analytics: Arc::new(FixtureAnalyticsQuery),
        }
    }
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub categories: Arc<dyn CategoryRepository>,
    pub suppliers: Arc<dyn SupplierRepository>,
    pub orders: Arc<dyn OrderRepository>,
    pub discounts: Arc<dyn DiscountRepository>,
    pub analytics: Arc<dyn AnalyticsQuery>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from a ports bundle.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use till::domain::ports::FixtureOrderRepository;
    /// use till::inbound::http::state::{HttpState, HttpStatePorts};
    ///
    /// let state = HttpState::new(HttpStatePorts {
    ///     orders: Arc::new(FixtureOrderRepository),
    ///     ..HttpStatePorts::default()
    /// });
    /// let _orders = state.orders.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            login,
            categories,
            suppliers,
            orders,
            discounts,
            analytics,
        } = ports;
        Self {
            login,
            categories,
            suppliers,
            orders,
            discounts,
            analytics,
        }
    }
}
