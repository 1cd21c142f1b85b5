//! PostgreSQL-backed discount listing.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{DiscountRepository, DiscountRepositoryError};
use crate::domain::{Discount, DiscountFilter, DomainEnum, ScopedFilter};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::DiscountRow;
use super::pool::{DbPool, PoolError};
use super::row_conversion::{collect_rows, row_to_discount};
use super::schema::discounts;
use super::tenant_scope::member_businesses;

/// Diesel-backed implementation of [`DiscountRepository`].
#[derive(Clone)]
pub struct DieselDiscountRepository {
    pool: DbPool,
}

impl DieselDiscountRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> DiscountRepositoryError {
    map_basic_pool_error(error, |message| DiscountRepositoryError::connection(message))
}

fn map_diesel_error(error: diesel::result::Error) -> DiscountRepositoryError {
    map_basic_diesel_error(
        error,
        DiscountRepositoryError::query,
        DiscountRepositoryError::connection,
    )
}

#[async_trait]
impl DiscountRepository for DieselDiscountRepository {
    async fn list_discounts(
        &self,
        filter: &ScopedFilter<DiscountFilter>,
    ) -> Result<Vec<Discount>, DiscountRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = discounts::table
            .filter(discounts::business_id.eq_any(member_businesses(filter.tenant())))
            .into_boxed();
        if let Some(scope) = filter.filter().scope {
            query = query.filter(discounts::scope.eq(scope.as_str()));
        }

        let rows: Vec<DiscountRow> = query
            .order((discounts::name.asc(), discounts::id.asc()))
            .select(DiscountRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        collect_rows(rows, row_to_discount).map_err(DiscountRepositoryError::query)
    }
}
