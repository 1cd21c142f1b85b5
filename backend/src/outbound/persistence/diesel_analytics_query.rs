//! PostgreSQL-backed analytics summary.
//!
//! Loads every scoped order with its lines and aggregates in memory through
//! [`AnalyticsSummary::from_orders`], so the SQL and in-memory paths cannot
//! disagree on what counts as revenue.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{AnalyticsQuery, AnalyticsQueryError, TOP_PRODUCTS_LIMIT};
use crate::domain::{AnalyticsSummary, OrderDetails, ScopedFilter};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{OrderLineRow, OrderRow};
use super::pool::{DbPool, PoolError};
use super::row_conversion::{group_lines, row_to_order};
use super::schema::{order_lines, orders};
use super::tenant_scope::member_businesses;

/// Diesel-backed implementation of [`AnalyticsQuery`].
#[derive(Clone)]
pub struct DieselAnalyticsQuery {
    pool: DbPool,
}

impl DieselAnalyticsQuery {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> AnalyticsQueryError {
    map_basic_pool_error(error, |message| AnalyticsQueryError::connection(message))
}

fn map_diesel_error(error: diesel::result::Error) -> AnalyticsQueryError {
    map_basic_diesel_error(
        error,
        AnalyticsQueryError::query,
        AnalyticsQueryError::connection,
    )
}

#[async_trait]
impl AnalyticsQuery for DieselAnalyticsQuery {
    async fn summary(
        &self,
        filter: &ScopedFilter<()>,
    ) -> Result<AnalyticsSummary, AnalyticsQueryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let order_rows: Vec<OrderRow> = orders::table
            .filter(orders::business_id.eq_any(member_businesses(filter.tenant())))
            .select(OrderRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        let order_ids: Vec<Uuid> = order_rows.iter().map(|row| row.id).collect();

        let line_rows: Vec<OrderLineRow> = order_lines::table
            .filter(order_lines::order_id.eq_any(&order_ids))
            .order((order_lines::order_id.asc(), order_lines::position.asc()))
            .select(OrderLineRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        let mut lines = group_lines(line_rows).map_err(AnalyticsQueryError::query)?;

        let mut details = Vec::with_capacity(order_rows.len());
        for row in order_rows {
            let order_line_list = lines.remove(&row.id).unwrap_or_default();
            let order = row_to_order(row).map_err(AnalyticsQueryError::query)?;
            let order_details = OrderDetails::new(order, order_line_list, None)
                .map_err(|err| AnalyticsQueryError::query(err.to_string()))?;
            details.push(order_details);
        }
        debug!(orders = details.len(), "aggregating analytics");

        Ok(AnalyticsSummary::from_orders(&details, TOP_PRODUCTS_LIMIT))
    }
}
