//! Category and supplier page handlers.
//!
//! ```text
//! GET /api/v1/categories/{id}
//! GET /api/v1/suppliers/{id}
//! ```

use actix_web::{get, web};
use tracing::debug;

use crate::domain::{ById, CategoryContext, CategoryId, Error, SupplierContext, SupplierId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_id};
use crate::inbound::http::views::{
    CategoryPage, SupplierPage, render_category_page, render_page, render_supplier_page,
};

const ID_FIELD: FieldName = FieldName::new("id");

/// Category with its products, for the signed-in user's businesses.
#[utoipa::path(
    get,
    path = "/api/v1/categories/{id}",
    params(("id" = uuid::Uuid, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category page", body = CategoryPage),
        (status = 400, description = "Invalid id", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Not found for this tenant", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["catalogue"],
    operation_id = "getCategoryPage"
)]
#[get("/categories/{id}")]
pub async fn category_page(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<CategoryPage>> {
    let tenant = session.require_tenant()?;
    let id: CategoryId = parse_id(&path.into_inner(), ID_FIELD)?;
    let details = state
        .categories
        .category_details(&tenant.scope(ById::new(id)))
        .await?
        .ok_or_else(|| Error::not_found(format!("category {id} not found")))?;
    debug!(category_id = %id, products = details.products.len(), "category page loaded");
    Ok(web::Json(render_page::<CategoryContext, _>(
        details,
        render_category_page,
    )?))
}

/// Supplier with the products it provides.
#[utoipa::path(
    get,
    path = "/api/v1/suppliers/{id}",
    params(("id" = uuid::Uuid, Path, description = "Supplier id")),
    responses(
        (status = 200, description = "Supplier page", body = SupplierPage),
        (status = 400, description = "Invalid id", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Not found for this tenant", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["catalogue"],
    operation_id = "getSupplierPage"
)]
#[get("/suppliers/{id}")]
pub async fn supplier_page(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<SupplierPage>> {
    let tenant = session.require_tenant()?;
    let id: SupplierId = parse_id(&path.into_inner(), ID_FIELD)?;
    let details = state
        .suppliers
        .supplier_details(&tenant.scope(ById::new(id)))
        .await?
        .ok_or_else(|| Error::not_found(format!("supplier {id} not found")))?;
    Ok(web::Json(render_page::<SupplierContext, _>(
        details,
        render_supplier_page,
    )?))
}

#[cfg(test)]
#[path = "catalogue_tests.rs"]
mod tests;
