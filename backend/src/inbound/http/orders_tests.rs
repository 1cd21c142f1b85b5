//! Order page handler coverage.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test;
use rstest::rstest;
use serde_json::{Value, json};

use crate::domain::ports::MockOrderRepository;
use crate::domain::{OrderId, OrderStatus, SortDirection};
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::inbound::http::test_utils::{api_app, login_fixture_user, samples};

fn state_with_orders(orders: MockOrderRepository) -> HttpState {
    HttpState::from(HttpStatePorts {
        orders: Arc::new(orders),
        ..HttpStatePorts::default()
    })
}

#[rstest]
#[actix_web::test]
async fn list_applies_defaults_without_query() {
    let mut orders = MockOrderRepository::new();
    orders
        .expect_list_orders()
        .withf(|filter, page| {
            filter.filter().status.is_none()
                && page.sort() == SortDirection::Desc
                && page.limit() == 50
        })
        .times(1)
        .returning(|_, _| Ok(vec![samples::order(OrderStatus::Pending, 500, 0)]));

    let app = test::init_service(api_app(state_with_orders(orders))).await;
    let cookie = login_fixture_user(&app).await;
    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/orders")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(body["sort"], "desc");
    assert_eq!(body["status"], Value::Null);
    assert_eq!(body["orders"][0]["status"], "pending");
}

#[rstest]
#[actix_web::test]
async fn list_passes_status_into_the_scoped_filter() {
    let mut orders = MockOrderRepository::new();
    orders
        .expect_list_orders()
        .withf(|filter, page| {
            serde_json::to_value(filter).ok()
                == Some(json!({
                    "status": "completed",
                    "business": { "users": { "some": { "id": "user-42" } } }
                }))
                && page.sort() == SortDirection::Asc
                && page.limit() == 10
        })
        .times(1)
        .returning(|_, _| Ok(Vec::new()));

    let app = test::init_service(api_app(state_with_orders(orders))).await;
    let cookie = login_fixture_user(&app).await;
    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/orders?status=completed&sort=asc&limit=10")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(body["status"], "completed");
    assert_eq!(body["orders"], json!([]));
}

#[rstest]
#[case("status=shipped", "status", "invalid_enum")]
#[case("sort=sideways", "sort", "invalid_enum")]
#[case("limit=0", "limit", "invalid_limit")]
#[case("limit=500", "limit", "invalid_limit")]
#[actix_web::test]
async fn invalid_query_values_are_rejected(
    #[case] query: &str,
    #[case] field: &str,
    #[case] code: &str,
) {
    let mut orders = MockOrderRepository::new();
    orders.expect_list_orders().never();

    let app = test::init_service(api_app(state_with_orders(orders))).await;
    let cookie = login_fixture_user(&app).await;
    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/orders?{query}"))
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["field"], field);
    assert_eq!(body["details"]["code"], code);
}

#[rstest]
#[actix_web::test]
async fn order_page_renders_lines_and_discount() {
    let id = OrderId::random();
    let mut orders = MockOrderRepository::new();
    orders
        .expect_order_details()
        .withf(move |filter| filter.filter().id == id && filter.user_id() == "user-42")
        .times(1)
        .returning(|_| Ok(Some(samples::order_details())));

    let app = test::init_service(api_app(state_with_orders(orders))).await;
    let cookie = login_fixture_user(&app).await;
    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/orders/{id}"))
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(body["order"]["totalCents"], 810);
    assert_eq!(body["itemCount"], 2);
    assert_eq!(body["discount"]["discountType"], "percentage");
    assert_eq!(body["lines"][0]["productName"], "Latte");
}

#[rstest]
#[actix_web::test]
async fn unknown_order_is_not_found() {
    let mut orders = MockOrderRepository::new();
    orders.expect_order_details().returning(|_| Ok(None));

    let app = test::init_service(api_app(state_with_orders(orders))).await;
    let cookie = login_fixture_user(&app).await;
    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/orders/{}", OrderId::random()))
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
