//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every helper produces the standard `invalid_request` envelope with
//! `{field, code}` details so clients can programmatically pick out the
//! offending field.

use serde_json::json;

use crate::domain::{Error, UserId, UserValidationError};

/// Build the 400 error for a field that is absent or empty.
pub(crate) fn missing_field_error(field: &'static str) -> Error {
    Error::invalid_request(format!("missing required field: {field}")).with_details(json!({
        "field": field,
        "code": "missing_field",
    }))
}

/// Parse a path segment as a positive user identifier.
pub(crate) fn parse_user_id(raw: &str) -> Result<UserId, Error> {
    raw.parse::<i32>()
        .ok()
        .and_then(|value| UserId::new(value).ok())
        .ok_or_else(|| {
            Error::invalid_request("id must be a positive integer").with_details(json!({
                "field": "id",
                "value": raw,
                "code": "invalid_id",
            }))
        })
}

/// Translate a field validation failure into the 400 envelope.
pub(crate) fn map_validation_error(error: UserValidationError) -> Error {
    let (field, code) = match error {
        UserValidationError::NameTooShort { .. } | UserValidationError::NameInvalidCharacters => {
            ("full_name", "invalid_name")
        }
        UserValidationError::IdDocumentTooShort { .. }
        | UserValidationError::IdDocumentInvalidCharacters => ("id_document", "invalid_id_document"),
        UserValidationError::AddressTooShort { .. } => ("address", "invalid_address"),
        UserValidationError::EmptyCity => ("city", "invalid_city"),
        UserValidationError::PhoneTooShort { .. }
        | UserValidationError::PhoneInvalidCharacters => ("phone_number", "invalid_phone"),
        UserValidationError::InvalidEmail => ("email", "invalid_email"),
        UserValidationError::NonPositiveId => ("id", "invalid_id"),
    };
    Error::invalid_request(error.to_string()).with_details(json!({
        "field": field,
        "code": code,
    }))
}
