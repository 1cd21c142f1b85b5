//! Validation helpers shared by inventory entities.

use super::CatalogueValidationError;

pub(super) fn non_empty(
    value: String,
    field: &'static str,
) -> Result<String, CatalogueValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CatalogueValidationError::EmptyField { field });
    }
    if trimmed.len() == value.len() {
        Ok(value)
    } else {
        Ok(trimmed.to_owned())
    }
}

/// Blank optional text collapses to `None`.
pub(super) fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
}

pub(super) fn non_negative(value: i64, field: &'static str) -> Result<i64, CatalogueValidationError> {
    if value < 0 {
        return Err(CatalogueValidationError::NegativeValue { field, value });
    }
    Ok(value)
}

/// Loose shape check: one `@` with text on both sides and a dot in the domain.
pub(super) fn optional_email(
    value: Option<String>,
    field: &'static str,
) -> Result<Option<String>, CatalogueValidationError> {
    let Some(email) = optional_text(value) else {
        return Ok(None);
    };
    let valid = email
        .split_once('@')
        .is_some_and(|(local, domain)| {
            !local.is_empty() && domain.contains('.') && !domain.contains('@')
        });
    if valid {
        Ok(Some(email))
    } else {
        Err(CatalogueValidationError::InvalidEmail { field })
    }
}
