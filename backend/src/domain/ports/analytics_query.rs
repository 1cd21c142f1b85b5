//! Read-side port for the analytics screen.
//!
//! Aggregation happens behind the port; adapters may push it into SQL or
//! compute it from loaded orders with [`AnalyticsSummary::from_orders`].

use async_trait::async_trait;

use crate::domain::{AnalyticsSummary, Error, ScopedFilter};

use super::define_port_error;

/// Number of products reported in [`AnalyticsSummary::top_products`].
pub const TOP_PRODUCTS_LIMIT: usize = 5;

define_port_error! {
    /// Errors raised when computing analytics.
    pub enum AnalyticsQueryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "analytics connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } =>
            "analytics query failed: {message}",
    }
}

/// Port for the analytics summary across the caller's businesses.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalyticsQuery: Send + Sync {
    /// Summarise orders visible through `filter`.
    async fn summary(
        &self,
        filter: &ScopedFilter<()>,
    ) -> Result<AnalyticsSummary, AnalyticsQueryError>;
}

/// Fixture implementation reporting an empty business.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAnalyticsQuery;

#[async_trait]
impl AnalyticsQuery for FixtureAnalyticsQuery {
    async fn summary(
        &self,
        _filter: &ScopedFilter<()>,
    ) -> Result<AnalyticsSummary, AnalyticsQueryError> {
        Ok(AnalyticsSummary::new(Vec::new(), 0, 0, Vec::new()))
    }
}

impl From<AnalyticsQueryError> for Error {
    fn from(err: AnalyticsQueryError) -> Self {
        match err {
            AnalyticsQueryError::Connection { message } => Error::service_unavailable(message),
            AnalyticsQueryError::Query { message } => Error::internal(message),
        }
    }
}
