//! Read-side port for the category page.
//!
//! The only way in is a [`ScopedFilter`], so every category read carries the
//! caller's business membership predicate.

use async_trait::async_trait;

use crate::domain::{ById, CategoryDetails, CategoryId, Error, ScopedFilter};

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading categories.
    pub enum CategoryRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "category read connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } =>
            "category read query failed: {message}",
    }
}

/// Port for loading category page data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Load a category and its products, ordered by product name.
    ///
    /// Returns `Ok(None)` when the category does not exist or belongs to a
    /// business the caller is not a member of. The two cases are not
    /// distinguished.
    async fn category_details(
        &self,
        filter: &ScopedFilter<ById<CategoryId>>,
    ) -> Result<Option<CategoryDetails>, CategoryRepositoryError>;
}

/// Fixture implementation for tests that do not exercise category reads.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCategoryRepository;

#[async_trait]
impl CategoryRepository for FixtureCategoryRepository {
    async fn category_details(
        &self,
        _filter: &ScopedFilter<ById<CategoryId>>,
    ) -> Result<Option<CategoryDetails>, CategoryRepositoryError> {
        Ok(None)
    }
}

impl From<CategoryRepositoryError> for Error {
    fn from(err: CategoryRepositoryError) -> Self {
        match err {
            CategoryRepositoryError::Connection { message } => Error::service_unavailable(message),
            CategoryRepositoryError::Query { message } => Error::internal(message),
        }
    }
}
