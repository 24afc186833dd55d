// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ApiErrorCode {
    ValidationFailed,
    InvalidCredentials,
    Unauthorized,
    NotFound,
    InvalidQueryParameter,
    Internal,
}

/// One per-field schema violation, surfaced in 400 response details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
    pub details: Value,
}

impl ApiError {
    #[must_use]
    pub fn new(code: ApiErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
        }
    }

    #[must_use]
    pub fn validation_failed(what: &str, field_errors: &[FieldError]) -> Self {
        Self::new(
            ApiErrorCode::ValidationFailed,
            format!("Invalid {what} data"),
            json!(field_errors),
        )
    }

    /// Deliberately generic: the login error never says which part was wrong.
    #[must_use]
    pub fn invalid_credentials() -> Self {
        Self::new(
            ApiErrorCode::InvalidCredentials,
            "Invalid credentials",
            Value::Null,
        )
    }

    #[must_use]
    pub fn unauthorized() -> Self {
        Self::new(ApiErrorCode::Unauthorized, "Unauthorized", Value::Null)
    }

    #[must_use]
    pub fn not_found(what: &str) -> Self {
        Self::new(ApiErrorCode::NotFound, format!("{what} not found"), Value::Null)
    }

    #[must_use]
    pub fn invalid_param(name: &str, reason: &str) -> Self {
        Self::new(
            ApiErrorCode::InvalidQueryParameter,
            format!("invalid parameter: {name}"),
            json!({"parameter": name, "reason": reason}),
        )
    }

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ApiErrorCode::Internal, message, Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_carries_field_details() {
        let err = ApiError::validation_failed(
            "student",
            &[FieldError::new("email", "email must be like name@example.com")],
        );
        assert_eq!(err.code, ApiErrorCode::ValidationFailed);
        assert_eq!(err.message, "Invalid student data");
        assert_eq!(err.details[0]["field"], "email");
    }

    #[test]
    fn credential_error_is_generic() {
        let err = ApiError::invalid_credentials();
        assert_eq!(err.message, "Invalid credentials");
        assert!(err.details.is_null());
    }
}
