//! Fetcher reset endpoint.
//!
//! Clients submit an empty form here after showing a success notice so
//! their fetcher drops the finished result. Nothing is read or written.

use actix_web::{HttpResponse, post};

/// Acknowledge a fetcher reset.
#[utoipa::path(
    post,
    path = "/api/v1/resources/reset-fetcher",
    request_body(content_type = "application/x-www-form-urlencoded", description = "Empty form"),
    responses((status = 204, description = "Fetcher result cleared")),
    tags = ["fetcher"],
    operation_id = "resetFetcher",
    security([])
)]
#[post("/resources/reset-fetcher")]
pub async fn reset_fetcher() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};

    use crate::domain::{FETCHER_RESET_PATH, FetcherSubmission};

    #[actix_web::test]
    async fn reset_submission_is_accepted_with_no_content() {
        let app = test::init_service(
            App::new().service(web::scope("/api/v1").service(reset_fetcher)),
        )
        .await;
        let submission = FetcherSubmission::reset();
        let req = test::TestRequest::post()
            .uri(submission.action())
            .set_form(submission.form())
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);
        assert_eq!(submission.action(), FETCHER_RESET_PATH);
    }
}
