//! PostgreSQL-backed supplier page loader.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{SupplierRepository, SupplierRepositoryError};
use crate::domain::{ById, ScopedFilter, SupplierDetails, SupplierId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{ProductRow, SupplierRow};
use super::pool::{DbPool, PoolError};
use super::row_conversion::{collect_rows, row_to_product, row_to_supplier};
use super::schema::{products, suppliers};
use super::tenant_scope::member_businesses;

/// Diesel-backed implementation of [`SupplierRepository`].
#[derive(Clone)]
pub struct DieselSupplierRepository {
    pool: DbPool,
}

impl DieselSupplierRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> SupplierRepositoryError {
    map_basic_pool_error(error, |message| SupplierRepositoryError::connection(message))
}

fn map_diesel_error(error: diesel::result::Error) -> SupplierRepositoryError {
    map_basic_diesel_error(
        error,
        SupplierRepositoryError::query,
        SupplierRepositoryError::connection,
    )
}

#[async_trait]
impl SupplierRepository for DieselSupplierRepository {
    async fn supplier_details(
        &self,
        filter: &ScopedFilter<ById<SupplierId>>,
    ) -> Result<Option<SupplierDetails>, SupplierRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = suppliers::table
            .filter(suppliers::id.eq(*filter.filter().id.as_uuid()))
            .filter(suppliers::business_id.eq_any(member_businesses(filter.tenant())))
            .select(SupplierRow::as_select())
            .first::<SupplierRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        let Some(row) = row else {
            return Ok(None);
        };

        let product_rows: Vec<ProductRow> = products::table
            .filter(products::supplier_id.eq(row.id))
            .filter(products::business_id.eq(row.business_id))
            .order((products::name.asc(), products::id.asc()))
            .select(ProductRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let supplier = row_to_supplier(row).map_err(SupplierRepositoryError::query)?;
        let products =
            collect_rows(product_rows, row_to_product).map_err(SupplierRepositoryError::query)?;
        Ok(Some(SupplierDetails { supplier, products }))
    }
}
