//! OpenAPI documentation for the REST API.
//!
//! Served by Swagger UI in debug builds and printed by the `openapi-dump`
//! binary. The error payload is documented through the wrappers in
//! [`crate::inbound::http::schemas`]; domain enumerations carry generated
//! schemas.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{DiscountScope, DiscountType, OrderStatus, ProductOrderType, SortDirection};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// Adds the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/login.",
            ))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Till backend API",
        description = "Tenant-scoped page data for the point-of-sale client."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::users::login,
        crate::inbound::http::catalogue::category_page,
        crate::inbound::http::catalogue::supplier_page,
        crate::inbound::http::orders::orders_page,
        crate::inbound::http::orders::order_page,
        crate::inbound::http::analytics::analytics_page,
        crate::inbound::http::discounts::list_discounts,
        crate::inbound::http::fetcher::reset_fetcher,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        OrderStatus,
        DiscountType,
        DiscountScope,
        SortDirection,
        ProductOrderType,
    )),
    tags(
        (name = "users", description = "Session login"),
        (name = "catalogue", description = "Category and supplier pages"),
        (name = "orders", description = "Order pages"),
        (name = "analytics", description = "Sales summary"),
        (name = "discounts", description = "Discount listing"),
        (name = "fetcher", description = "Client fetcher lifecycle"),
        (name = "health", description = "Orchestrator probes")
    )
)]
pub struct ApiDoc;
