//! Read-side port for the supplier page.

use async_trait::async_trait;

use crate::domain::{ById, Error, ScopedFilter, SupplierDetails, SupplierId};

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading suppliers.
    pub enum SupplierRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "supplier read connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } =>
            "supplier read query failed: {message}",
    }
}

/// Port for loading supplier page data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SupplierRepository: Send + Sync {
    /// Load a supplier and the products it supplies.
    ///
    /// `Ok(None)` covers both unknown ids and suppliers of other businesses.
    async fn supplier_details(
        &self,
        filter: &ScopedFilter<ById<SupplierId>>,
    ) -> Result<Option<SupplierDetails>, SupplierRepositoryError>;
}

/// Fixture implementation for tests that do not exercise supplier reads.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSupplierRepository;

#[async_trait]
impl SupplierRepository for FixtureSupplierRepository {
    async fn supplier_details(
        &self,
        _filter: &ScopedFilter<ById<SupplierId>>,
    ) -> Result<Option<SupplierDetails>, SupplierRepositoryError> {
        Ok(None)
    }
}

impl From<SupplierRepositoryError> for Error {
    fn from(err: SupplierRepositoryError) -> Self {
        match err {
            SupplierRepositoryError::Connection { message } => Error::service_unavailable(message),
            SupplierRepositoryError::Query { message } => Error::internal(message),
        }
    }
}
