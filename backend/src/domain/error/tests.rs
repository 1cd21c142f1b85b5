//! Tests for the domain error payload.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn trace_id() -> TraceId {
    TRACE.parse().expect("fixture trace id is a UUID")
}

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::unauthorized("login"), ErrorCode::Unauthorized)]
#[case(Error::forbidden("nope"), ErrorCode::Forbidden)]
#[case(Error::not_found("gone"), ErrorCode::NotFound)]
#[case(Error::service_unavailable("db down"), ErrorCode::ServiceUnavailable)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_codes(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn blank_messages_are_rejected() {
    assert_eq!(
        Error::try_new(ErrorCode::NotFound, "  "),
        Err(ErrorValidationError::EmptyMessage)
    );
}

#[rstest]
fn blank_trace_ids_are_rejected() {
    let result = Error::internal("boom").try_with_trace_id(" ");
    assert_eq!(result, Err(ErrorValidationError::EmptyTraceId));
}

#[rstest]
#[tokio::test]
async fn captures_trace_id_in_scope(trace_id: TraceId) {
    let error = TraceId::scope(trace_id, async { Error::internal("boom") }).await;
    assert_eq!(error.trace_id(), Some(TRACE));
}

#[rstest]
fn no_trace_id_out_of_scope() {
    assert!(Error::internal("boom").trace_id().is_none());
}

#[rstest]
fn serializes_camel_case_and_skips_empty_fields() {
    let error = Error::invalid_request("bad").with_details(json!({ "field": "status" }));
    let value = serde_json::to_value(&error).expect("serializes");
    assert_eq!(
        value,
        json!({
            "code": "invalid_request",
            "message": "bad",
            "details": { "field": "status" }
        })
    );
}

#[rstest]
#[tokio::test]
async fn deserializing_ignores_ambient_trace(trace_id: TraceId) {
    let payload = json!({ "code": "not_found", "message": "missing" });
    let error: Error = TraceId::scope(trace_id, async move {
        serde_json::from_value(payload).expect("valid payload")
    })
    .await;
    assert!(error.trace_id().is_none());
}

#[rstest]
fn deserializing_rejects_blank_message() {
    let payload = json!({ "code": "not_found", "message": "" });
    assert!(serde_json::from_value::<Error>(payload).is_err());
}
