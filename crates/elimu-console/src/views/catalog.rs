// SPDX-License-Identifier: Apache-2.0

//! Catalog editor wiring. The modal forms of the original become payload
//! builders validated with the server's own parsers before anything is sent;
//! id assignment belongs to the store, never to this side.

use elimu_api::{parse_course_payload, parse_service_payload, FieldError};
use serde_json::{json, Value};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseForm {
    pub title: String,
    pub kind: String,
    pub description: String,
    pub duration: String,
    pub certification: String,
    pub prerequisites: Option<String>,
    pub fee: String,
}

impl CourseForm {
    #[must_use]
    pub fn payload(&self) -> Value {
        let mut body = json!({
            "title": self.title,
            "type": self.kind,
            "description": self.description,
            "duration": self.duration,
            "certification": self.certification,
            "fee": self.fee,
        });
        if let Some(prerequisites) = &self.prerequisites {
            body["prerequisites"] = json!(prerequisites);
        }
        body
    }

    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        parse_course_payload(&self.payload()).map(|_| ())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceForm {
    pub title: String,
    pub description: String,
    pub audience: String,
    pub fee: String,
}

impl ServiceForm {
    #[must_use]
    pub fn payload(&self) -> Value {
        json!({
            "title": self.title,
            "description": self.description,
            "audience": self.audience,
            "fee": self.fee,
        })
    }

    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        parse_service_payload(&self.payload()).map(|_| ())
    }
}
