//! Login handler coverage.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde_json::Value;

use super::*;
use crate::domain::UserId;
use crate::domain::ports::MockLoginService;
use crate::inbound::http::state::HttpStatePorts;
use crate::inbound::http::test_utils::test_session_middleware;

fn test_app(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(test_session_middleware())
        .service(web::scope("/api/v1").service(login))
}

fn login_request(username: &str, password: &str) -> actix_http::Request {
    actix_test::TestRequest::post()
        .uri("/api/v1/login")
        .set_json(&LoginRequest {
            username: username.into(),
            password: password.into(),
        })
        .to_request()
}

#[rstest]
#[case("   ", "password", "username must not be empty", "username", "empty_username")]
#[case("admin", "", "password must not be empty", "password", "empty_password")]
#[actix_web::test]
async fn blank_fields_are_rejected_with_details(
    #[case] username: &str,
    #[case] password: &str,
    #[case] message: &str,
    #[case] field: &str,
    #[case] code: &str,
) {
    let app = actix_test::init_service(test_app(HttpState::from(HttpStatePorts::default()))).await;
    let response = actix_test::call_service(&app, login_request(username, password)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let value: Value = actix_test::read_body_json(response).await;
    assert_eq!(value.get("message").and_then(Value::as_str), Some(message));
    assert_eq!(value.get("code").and_then(Value::as_str), Some("invalid_request"));
    let details = value.get("details").expect("details present");
    assert_eq!(details.get("field").and_then(Value::as_str), Some(field));
    assert_eq!(details.get("code").and_then(Value::as_str), Some(code));
}

#[rstest]
#[actix_web::test]
async fn fixture_credentials_set_a_session_cookie() {
    let app = actix_test::init_service(test_app(HttpState::from(HttpStatePorts::default()))).await;
    let response = actix_test::call_service(&app, login_request("admin", "password")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.response().cookies().any(|c| c.name() == "session"));
}

#[rstest]
#[actix_web::test]
async fn wrong_password_is_unauthorised() {
    let app = actix_test::init_service(test_app(HttpState::from(HttpStatePorts::default()))).await;
    let response = actix_test::call_service(&app, login_request("admin", "hunter2")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(!response.response().cookies().any(|c| c.name() == "session"));
}

#[rstest]
#[actix_web::test]
async fn credentials_are_passed_to_the_login_port() {
    let mut login_port = MockLoginService::new();
    login_port
        .expect_authenticate()
        .withf(|creds| creds.username() == "cashier" && creds.password() == "s3cret")
        .times(1)
        .returning(|_| Ok(UserId::new("user-7").expect("valid id")));
    let state = HttpState::from(HttpStatePorts {
        login: Arc::new(login_port),
        ..HttpStatePorts::default()
    });

    let app = actix_test::init_service(test_app(state)).await;
    let response = actix_test::call_service(&app, login_request("cashier", "s3cret")).await;
    assert_eq!(response.status(), StatusCode::OK);
}
