//! Read-side port for discount listings.

use async_trait::async_trait;

use crate::domain::{Discount, DiscountFilter, Error, ScopedFilter};

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading discounts.
    pub enum DiscountRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "discount read connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } =>
            "discount read query failed: {message}",
    }
}

/// Port for listing discounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DiscountRepository: Send + Sync {
    /// Discounts visible to the caller, ordered by name.
    async fn list_discounts(
        &self,
        filter: &ScopedFilter<DiscountFilter>,
    ) -> Result<Vec<Discount>, DiscountRepositoryError>;
}

/// Fixture implementation for tests that do not exercise discount reads.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureDiscountRepository;

#[async_trait]
impl DiscountRepository for FixtureDiscountRepository {
    async fn list_discounts(
        &self,
        _filter: &ScopedFilter<DiscountFilter>,
    ) -> Result<Vec<Discount>, DiscountRepositoryError> {
        Ok(Vec::new())
    }
}

impl From<DiscountRepositoryError> for Error {
    fn from(err: DiscountRepositoryError) -> Self {
        match err {
            DiscountRepositoryError::Connection { message } => Error::service_unavailable(message),
            DiscountRepositoryError::Query { message } => Error::internal(message),
        }
    }
}
