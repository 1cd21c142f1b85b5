//! Discount listing.
//!
//! ```text
//! GET /api/v1/discounts?scope=order
//! ```

use actix_web::{get, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::{DiscountFilter, DiscountScope};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_optional_enum};
use crate::inbound::http::views::DiscountView;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DiscountsQuery {
    /// Only discounts applying at this level.
    #[param(value_type = Option<crate::domain::DiscountScope>)]
    pub scope: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/discounts",
    params(DiscountsQuery),
    responses(
        (status = 200, description = "Discounts", body = [DiscountView]),
        (status = 400, description = "Invalid scope", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["discounts"],
    operation_id = "listDiscounts"
)]
#[get("/discounts")]
pub async fn list_discounts(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<DiscountsQuery>,
) -> ApiResult<web::Json<Vec<DiscountView>>> {
    let tenant = session.require_tenant()?;
    let scope =
        parse_optional_enum::<DiscountScope>(query.scope.as_deref(), FieldName::new("scope"))?;
    let discounts = state
        .discounts
        .list_discounts(&tenant.scope(DiscountFilter { scope }))
        .await?;
    Ok(web::Json(discounts.iter().map(DiscountView::from).collect()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::test;
    use rstest::rstest;
    use serde_json::Value;

    use crate::domain::DiscountScope;
    use crate::domain::ports::MockDiscountRepository;
    use crate::inbound::http::state::{HttpState, HttpStatePorts};
    use crate::inbound::http::test_utils::{api_app, login_fixture_user, samples};

    fn state_with(discounts: MockDiscountRepository) -> HttpState {
        HttpState::from(HttpStatePorts {
            discounts: Arc::new(discounts),
            ..HttpStatePorts::default()
        })
    }

    #[rstest]
    #[case("/api/v1/discounts", None)]
    #[case("/api/v1/discounts?scope=order", Some(DiscountScope::Order))]
    #[case("/api/v1/discounts?scope=category", Some(DiscountScope::Category))]
    #[actix_web::test]
    async fn scope_query_becomes_the_entity_filter(
        #[case] uri: &str,
        #[case] expected: Option<DiscountScope>,
    ) {
        let mut discounts = MockDiscountRepository::new();
        discounts
            .expect_list_discounts()
            .withf(move |filter| filter.filter().scope == expected)
            .times(1)
            .returning(|_| Ok(vec![samples::discount()]));

        let app = test::init_service(api_app(state_with(discounts))).await;
        let cookie = login_fixture_user(&app).await;
        let body: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri(uri).cookie(cookie).to_request(),
        )
        .await;
        assert_eq!(body[0]["name"], "Loyalty");
        assert_eq!(body[0]["value"], 1_000);
    }

    #[rstest]
    #[actix_web::test]
    async fn unknown_scope_lists_accepted_values() {
        let mut discounts = MockDiscountRepository::new();
        discounts.expect_list_discounts().never();

        let app = test::init_service(api_app(state_with(discounts))).await;
        let cookie = login_fixture_user(&app).await;
        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/v1/discounts?scope=store")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(
            body["details"]["accepted"],
            serde_json::json!(["order", "product", "category"])
        );
    }
}
