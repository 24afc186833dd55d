// SPDX-License-Identifier: Apache-2.0

//! Public HTTP body shapes.
//!
//! The admin console and the public site consume these exact shapes, so they
//! are rendered here rather than ad hoc in handlers: errors are
//! `{"error": "..."}` with a `details` array only when validation produced
//! per-field messages, successes are `{"success": true, <entity>: {...}}`.

use crate::errors::{ApiError, ApiErrorCode};
use serde::Serialize;
use serde_json::{json, Value};

#[must_use]
pub fn error_body(error: &ApiError) -> Value {
    let mut body = json!({"error": error.message});
    if error.code == ApiErrorCode::ValidationFailed && !error.details.is_null() {
        body["details"] = error.details.clone();
    }
    body
}

#[must_use]
pub fn success_body() -> Value {
    json!({"success": true})
}

#[must_use]
pub fn created_body<T: Serialize>(entity: &str, dto: &T) -> Value {
    json!({"success": true, entity: dto})
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FieldError;

    #[test]
    fn validation_errors_expose_details() {
        let body = error_body(&ApiError::validation_failed(
            "student",
            &[FieldError::new("email", "email is required")],
        ));
        assert_eq!(body["error"], "Invalid student data");
        assert_eq!(body["details"][0]["field"], "email");
    }

    #[test]
    fn credential_errors_stay_bare() {
        let body = error_body(&ApiError::invalid_credentials());
        assert_eq!(body, json!({"error": "Invalid credentials"}));
    }

    #[test]
    fn created_body_nests_the_entity() {
        #[derive(Serialize)]
        struct Dummy {
            id: u64,
        }
        let body = created_body("student", &Dummy { id: 9 });
        assert_eq!(body["success"], true);
        assert_eq!(body["student"]["id"], 9);
    }
}
