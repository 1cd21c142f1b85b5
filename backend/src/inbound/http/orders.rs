//! Order page handlers.
//!
//! ```text
//! GET /api/v1/orders?status=completed&sort=asc&limit=20
//! GET /api/v1/orders/{id}
//! ```

use actix_web::{get, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::{
    ById, Error, OrderContext, OrderFilter, OrderId, OrderList, OrderStatus, OrdersContext,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, parse_id, parse_optional_enum, parse_order_page,
};
use crate::inbound::http::views::{
    OrderPageView, OrdersPage, render_order_page, render_orders_page, render_page,
};

/// Raw query for the orders list; values are validated by the handler.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OrdersQuery {
    /// Only orders in this status.
    #[param(value_type = Option<crate::domain::OrderStatus>)]
    pub status: Option<String>,
    /// Creation-time ordering, `desc` by default.
    #[param(value_type = Option<crate::domain::SortDirection>)]
    pub sort: Option<String>,
    /// Page size, 1 to 200, 50 by default.
    #[param(value_type = Option<u32>)]
    pub limit: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/orders",
    params(OrdersQuery),
    responses(
        (status = 200, description = "Orders page", body = OrdersPage),
        (status = 400, description = "Invalid filter", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["orders"],
    operation_id = "listOrdersPage"
)]
#[get("/orders")]
pub async fn orders_page(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<OrdersQuery>,
) -> ApiResult<web::Json<OrdersPage>> {
    let tenant = session.require_tenant()?;
    let query = query.into_inner();
    let status = parse_optional_enum::<OrderStatus>(
        query.status.as_deref(),
        FieldName::new("status"),
    )?;
    let page = parse_order_page(query.sort.as_deref(), query.limit.as_deref())?;
    let orders = state
        .orders
        .list_orders(&tenant.scope(OrderFilter { status }), page)
        .await?;
    let list = OrderList {
        orders,
        status,
        sort: page.sort(),
    };
    Ok(web::Json(render_page::<OrdersContext, _>(
        list,
        render_orders_page,
    )?))
}

#[utoipa::path(
    get,
    path = "/api/v1/orders/{id}",
    params(("id" = uuid::Uuid, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order page", body = OrderPageView),
        (status = 400, description = "Invalid id", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Not found for this tenant", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["orders"],
    operation_id = "getOrderPage"
)]
#[get("/orders/{id}")]
pub async fn order_page(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<OrderPageView>> {
    let tenant = session.require_tenant()?;
    let id: OrderId = parse_id(&path.into_inner(), FieldName::new("id"))?;
    let details = state
        .orders
        .order_details(&tenant.scope(ById::new(id)))
        .await?
        .ok_or_else(|| Error::not_found(format!("order {id} not found")))?;
    Ok(web::Json(render_page::<OrderContext, _>(
        details,
        render_order_page,
    )?))
}

#[cfg(test)]
#[path = "orders_tests.rs"]
mod tests;
