//! Shared validation helpers for inbound HTTP adapters.
//!
//! Query and path values arrive as raw strings; these helpers turn them into
//! domain values or a `400 invalid_request` whose details name the field.

use serde_json::json;
use uuid::Uuid;

use crate::domain::{
    DomainEnum, EnumParseError, Error, OrderPage, SalesValidationError, SortDirection,
};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidUuid,
    InvalidEnum,
    InvalidLimit,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidUuid => "invalid_uuid",
            ErrorCode::InvalidEnum => "invalid_enum",
            ErrorCode::InvalidLimit => "invalid_limit",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &'static str {
        self.0
    }
}

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must be a valid UUID")).with_details(json!({
        "field": field,
        "value": value,
        "code": ErrorCode::InvalidUuid.as_str(),
    }))
}

/// Parse a path or query UUID into a typed id.
pub(crate) fn parse_id<I: From<Uuid>>(value: &str, field: FieldName) -> Result<I, Error> {
    Uuid::parse_str(value)
        .map(I::from)
        .map_err(|_| invalid_uuid_error(field, value))
}

pub(crate) fn invalid_enum_error(field: FieldName, err: &EnumParseError) -> Error {
    Error::invalid_request(err.to_string()).with_details(json!({
        "field": field.as_str(),
        "value": err.input(),
        "code": ErrorCode::InvalidEnum.as_str(),
        "accepted": err.accepted(),
    }))
}

/// Validate an optional raw value against `T`'s schema.
pub(crate) fn parse_optional_enum<T: DomainEnum>(
    value: Option<&str>,
    field: FieldName,
) -> Result<Option<T>, Error> {
    value
        .map(|raw| {
            T::schema()
                .parse(raw)
                .map_err(|err| invalid_enum_error(field, &err))
        })
        .transpose()
}

pub(crate) fn invalid_limit_error(field: FieldName, value: &str, message: String) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "value": value,
        "code": ErrorCode::InvalidLimit.as_str(),
    }))
}

/// Build an orders page from raw `sort` and `limit` query values.
///
/// Missing values fall back to the page defaults.
pub(crate) fn parse_order_page(
    sort: Option<&str>,
    limit: Option<&str>,
) -> Result<OrderPage, Error> {
    const SORT: FieldName = FieldName::new("sort");
    const LIMIT: FieldName = FieldName::new("limit");

    let sort = parse_optional_enum::<SortDirection>(sort, SORT)?.unwrap_or_default();
    let parsed = limit
        .map(|raw| {
            raw.parse::<u32>().map_err(|_| {
                invalid_limit_error(LIMIT, raw, "limit must be a positive integer".to_owned())
            })
        })
        .transpose()?;
    OrderPage::new(sort, parsed).map_err(|err: SalesValidationError| {
        invalid_limit_error(LIMIT, limit.unwrap_or_default(), err.to_string())
    })
}
