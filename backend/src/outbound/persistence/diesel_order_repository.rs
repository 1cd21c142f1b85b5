//! PostgreSQL-backed order loaders.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use uuid::Uuid;

use crate::domain::ports::{OrderRepository, OrderRepositoryError};
use crate::domain::{
    ById, Discount, DomainEnum, Order, OrderDetails, OrderFilter, OrderId, OrderPage,
    ScopedFilter, SortDirection,
};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{DiscountRow, OrderLineRow, OrderRow};
use super::pool::{DbPool, PoolError};
use super::row_conversion::{collect_rows, row_to_discount, row_to_order, row_to_order_line};
use super::schema::{discounts, order_lines, orders};
use super::tenant_scope::member_businesses;

/// Diesel-backed implementation of [`OrderRepository`].
#[derive(Clone)]
pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> OrderRepositoryError {
    map_basic_pool_error(error, |message| OrderRepositoryError::connection(message))
}

fn map_diesel_error(error: diesel::result::Error) -> OrderRepositoryError {
    map_basic_diesel_error(
        error,
        OrderRepositoryError::query,
        OrderRepositoryError::connection,
    )
}

/// Discount applied to an already scoped order, if it still exists.
async fn load_discount(
    conn: &mut AsyncPgConnection,
    order: &OrderRow,
) -> Result<Option<Discount>, OrderRepositoryError> {
    let Some(discount_id) = order.discount_id else {
        return Ok(None);
    };
    let row = discounts::table
        .filter(discounts::id.eq(discount_id))
        .filter(discounts::business_id.eq(order.business_id))
        .select(DiscountRow::as_select())
        .first::<DiscountRow>(conn)
        .await
        .optional()
        .map_err(map_diesel_error)?;
    row.map(row_to_discount)
        .transpose()
        .map_err(OrderRepositoryError::query)
}

async fn load_lines(
    conn: &mut AsyncPgConnection,
    order_id: Uuid,
) -> Result<Vec<OrderLineRow>, OrderRepositoryError> {
    order_lines::table
        .filter(order_lines::order_id.eq(order_id))
        .order(order_lines::position.asc())
        .select(OrderLineRow::as_select())
        .load(conn)
        .await
        .map_err(map_diesel_error)
}

#[async_trait]
impl OrderRepository for DieselOrderRepository {
    async fn order_details(
        &self,
        filter: &ScopedFilter<ById<OrderId>>,
    ) -> Result<Option<OrderDetails>, OrderRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = orders::table
            .filter(orders::id.eq(*filter.filter().id.as_uuid()))
            .filter(orders::business_id.eq_any(member_businesses(filter.tenant())))
            .select(OrderRow::as_select())
            .first::<OrderRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        let Some(row) = row else {
            return Ok(None);
        };

        let line_rows = load_lines(&mut conn, row.id).await?;
        let discount = load_discount(&mut conn, &row).await?;

        let order = row_to_order(row).map_err(OrderRepositoryError::query)?;
        let lines =
            collect_rows(line_rows, row_to_order_line).map_err(OrderRepositoryError::query)?;
        OrderDetails::new(order, lines, discount)
            .map(Some)
            .map_err(|err| OrderRepositoryError::query(err.to_string()))
    }

    async fn list_orders(
        &self,
        filter: &ScopedFilter<OrderFilter>,
        page: OrderPage,
    ) -> Result<Vec<Order>, OrderRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = orders::table
            .filter(orders::business_id.eq_any(member_businesses(filter.tenant())))
            .into_boxed();
        if let Some(status) = filter.filter().status {
            query = query.filter(orders::status.eq(status.as_str()));
        }
        query = match page.sort() {
            SortDirection::Asc => query.order((orders::created_at.asc(), orders::reference.asc())),
            SortDirection::Desc => {
                query.order((orders::created_at.desc(), orders::reference.desc()))
            }
        };

        let rows: Vec<OrderRow> = query
            .limit(i64::from(page.limit()))
            .select(OrderRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        collect_rows(rows, row_to_order).map_err(OrderRepositoryError::query)
    }
}
