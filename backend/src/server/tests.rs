//! Bootstrap tests: readiness signalling and the assembled middleware stack.

use super::*;
use crate::domain::TRACE_ID_HEADER;
use crate::domain::ports::{FIXTURE_PASSWORD, FIXTURE_USERNAME};
use crate::inbound::http::state::HttpStatePorts;
use actix_web::cookie::Cookie;
use actix_web::http::StatusCode;
use actix_web::test;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

#[fixture]
fn health_state() -> web::Data<HealthState> {
    web::Data::new(HealthState::new())
}

#[fixture]
fn deps(health_state: web::Data<HealthState>) -> AppDependencies {
    AppDependencies {
        health_state,
        http_state: web::Data::new(HttpState::new(HttpStatePorts::default())),
        key: Key::generate(),
        cookie_secure: false,
        same_site: SameSite::Lax,
    }
}

#[rstest]
#[actix_rt::test]
async fn create_server_marks_ready(health_state: web::Data<HealthState>) {
    assert!(!health_state.is_ready(), "state should start unready");
    let config = ServerConfig::new(
        Key::generate(),
        false,
        SameSite::Lax,
        "127.0.0.1:0".parse().expect("loopback address"),
    );

    let _server = create_server(health_state.clone(), config).expect("server binds");

    assert!(health_state.is_ready(), "binding should mark readiness");
}

#[rstest]
#[actix_rt::test]
async fn fixture_login_reaches_scoped_pages(deps: AppDependencies) {
    let app = test::init_service(build_app(deps)).await;

    let login_res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(json!({ "username": FIXTURE_USERNAME, "password": FIXTURE_PASSWORD }))
            .to_request(),
    )
    .await;
    assert_eq!(login_res.status(), StatusCode::OK);
    let cookie = login_res
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(Cookie::into_owned)
        .expect("session cookie");
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.path(), Some("/"));

    let orders_res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/orders")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(orders_res.status(), StatusCode::OK);
    assert!(orders_res.headers().contains_key(TRACE_ID_HEADER));
    let body: Value = test::read_body_json(orders_res).await;
    assert_eq!(body["orders"], json!([]));
    assert_eq!(body["sort"], "desc");
}

#[rstest]
#[actix_rt::test]
async fn probes_and_fetcher_reset_need_no_session(deps: AppDependencies) {
    let app = test::init_service(build_app(deps)).await;

    let live_res = test::call_service(&app, test::TestRequest::get().uri("/health/live").to_request()).await;
    assert_eq!(live_res.status(), StatusCode::OK);

    let ready_res = test::call_service(&app, test::TestRequest::get().uri("/health/ready").to_request()).await;
    assert_eq!(ready_res.status(), StatusCode::SERVICE_UNAVAILABLE);

    let reset_res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(crate::domain::FETCHER_RESET_PATH)
            .to_request(),
    )
    .await;
    assert_eq!(reset_res.status(), StatusCode::NO_CONTENT);
}
