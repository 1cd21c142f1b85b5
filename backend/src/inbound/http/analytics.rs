//! Analytics page handler.

use actix_web::{get, web};

use crate::domain::AnalyticsContext;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::{AnalyticsPage, render_analytics_page, render_page};

/// Sales summary across every business the user belongs to.
#[utoipa::path(
    get,
    path = "/api/v1/analytics",
    responses(
        (status = 200, description = "Analytics page", body = AnalyticsPage),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["analytics"],
    operation_id = "getAnalyticsPage"
)]
#[get("/analytics")]
pub async fn analytics_page(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<AnalyticsPage>> {
    let tenant = session.require_tenant()?;
    let summary = state.analytics.summary(&tenant.scope(())).await?;
    Ok(web::Json(render_page::<AnalyticsContext, _>(
        summary,
        render_analytics_page,
    )?))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::test;
    use rstest::rstest;
    use serde_json::{Value, json};

    use crate::domain::ports::MockAnalyticsQuery;
    use crate::inbound::http::state::{HttpState, HttpStatePorts};
    use crate::inbound::http::test_utils::{api_app, login_fixture_user, samples};

    #[rstest]
    #[actix_web::test]
    async fn analytics_page_summarises_the_tenant() {
        let mut analytics = MockAnalyticsQuery::new();
        analytics
            .expect_summary()
            .withf(|filter| {
                serde_json::to_value(filter).ok()
                    == Some(json!({ "business": { "users": { "some": { "id": "user-42" } } } }))
            })
            .times(1)
            .returning(|_| Ok(samples::analytics_summary()));
        let state = HttpState::from(HttpStatePorts {
            analytics: Arc::new(analytics),
            ..HttpStatePorts::default()
        });

        let app = test::init_service(api_app(state)).await;
        let cookie = login_fixture_user(&app).await;
        let body: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get()
                .uri("/api/v1/analytics")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(body["revenueCents"], 810);
        assert_eq!(body["averageOrderCents"], 810);
        assert_eq!(body["orderCounts"].as_array().map(Vec::len), Some(4));
        assert_eq!(body["topProducts"][0]["productName"], "Latte");
    }
}
