//! PostgreSQL-backed category page loader.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CategoryRepository, CategoryRepositoryError};
use crate::domain::{ById, CategoryDetails, CategoryId, ScopedFilter};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{CategoryRow, ProductRow};
use super::pool::{DbPool, PoolError};
use super::row_conversion::{collect_rows, row_to_category, row_to_product};
use super::schema::{categories, products};
use super::tenant_scope::member_businesses;

/// Diesel-backed implementation of [`CategoryRepository`].
#[derive(Clone)]
pub struct DieselCategoryRepository {
    pool: DbPool,
}

impl DieselCategoryRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CategoryRepositoryError {
    map_basic_pool_error(error, |message| CategoryRepositoryError::connection(message))
}

fn map_diesel_error(error: diesel::result::Error) -> CategoryRepositoryError {
    map_basic_diesel_error(
        error,
        CategoryRepositoryError::query,
        CategoryRepositoryError::connection,
    )
}

#[async_trait]
impl CategoryRepository for DieselCategoryRepository {
    async fn category_details(
        &self,
        filter: &ScopedFilter<ById<CategoryId>>,
    ) -> Result<Option<CategoryDetails>, CategoryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = categories::table
            .filter(categories::id.eq(*filter.filter().id.as_uuid()))
            .filter(categories::business_id.eq_any(member_businesses(filter.tenant())))
            .select(CategoryRow::as_select())
            .first::<CategoryRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        let Some(row) = row else {
            return Ok(None);
        };

        let product_rows: Vec<ProductRow> = products::table
            .filter(products::category_id.eq(row.id))
            .filter(products::business_id.eq(row.business_id))
            .order((products::name.asc(), products::id.asc()))
            .select(ProductRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let category = row_to_category(row).map_err(CategoryRepositoryError::query)?;
        let products =
            collect_rows(product_rows, row_to_product).map_err(CategoryRepositoryError::query)?;
        Ok(Some(CategoryDetails { category, products }))
    }
}
