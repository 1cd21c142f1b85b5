//! OpenAPI schema definitions for domain types.
//!
//! The error payload is documented through wrappers so the domain error
//! keeps its own serde shape. Domain enumerations need no wrapper: their
//! schemas come out of `define_domain_enum!` with the member list.

use utoipa::ToSchema;

/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Authentication failed or is missing.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// Authenticated but not permitted to perform this action.
    #[schema(rename = "forbidden")]
    Forbidden,
    /// The requested resource does not exist for this tenant.
    #[schema(rename = "not_found")]
    NotFound,
    /// A backing store is unreachable; retry later.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// API error payload with machine-readable code and human-readable message.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    #[schema(example = "Something went wrong")]
    message: String,
    /// Correlation identifier echoed in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    details: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::Value;
    use utoipa::PartialSchema;

    fn documented_values<T: PartialSchema>() -> Vec<String> {
        let schema = serde_json::to_value(T::schema()).expect("schema serialises to JSON");
        schema
            .get("enum")
            .and_then(Value::as_array)
            .expect("enum schema lists values")
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_owned)
            .collect()
    }

    #[rstest]
    fn error_schema_names_follow_domain_paths() {
        // utoipa replaces :: with . in schema names
        assert_eq!(ErrorCodeSchema::name(), "crate.domain.ErrorCode");
        assert_eq!(ErrorSchema::name(), "crate.domain.Error");
    }

    #[rstest]
    fn error_code_schema_lists_every_code() {
        assert_eq!(
            documented_values::<ErrorCodeSchema>(),
            vec![
                "invalid_request",
                "unauthorized",
                "forbidden",
                "not_found",
                "service_unavailable",
                "internal_error",
            ]
        );
    }
}
