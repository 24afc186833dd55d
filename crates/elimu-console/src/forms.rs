// SPDX-License-Identifier: Apache-2.0

//! Public-site forms.
//!
//! Validation runs against the same validators the server uses, before any
//! request is built. An invalid form never reaches the network; on a server
//! rejection the entered values are kept so nothing the user typed is lost.

use crate::client::{ApiClientError, CampusApi};
use elimu_api::{parse_contact_payload, parse_student_payload, ContactDto, FieldError, StudentDto};
use serde_json::{json, Value};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SubmitError {
    /// Blocked client-side; no network call was made.
    Invalid(Vec<FieldError>),
    Api(ApiClientError),
}

impl Display for SubmitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(errors) => {
                f.write_str("form validation failed")?;
                for error in errors {
                    write!(f, "; {}: {}", error.field, error.message)?;
                }
                Ok(())
            }
            Self::Api(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SubmitError {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub course: String,
}

impl RegistrationForm {
    #[must_use]
    pub fn payload(&self) -> Value {
        json!({
            "name": self.name,
            "email": self.email,
            "phone": self.phone,
            "course": self.course,
        })
    }

    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        parse_student_payload(&self.payload()).map(|_| ())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    #[must_use]
    pub fn payload(&self) -> Value {
        json!({
            "name": self.name,
            "email": self.email,
            "phone": self.phone,
            "subject": self.subject,
            "message": self.message,
        })
    }

    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        parse_contact_payload(&self.payload()).map(|_| ())
    }
}

/// Validates, then submits. On success the form should be reset by the
/// caller; on failure the caller keeps the form as-is and shows the error.
pub fn submit_registration(
    form: &RegistrationForm,
    api: &dyn CampusApi,
) -> Result<StudentDto, SubmitError> {
    form.validate().map_err(SubmitError::Invalid)?;
    api.register_student(&form.payload()).map_err(SubmitError::Api)
}

pub fn submit_contact(form: &ContactForm, api: &dyn CampusApi) -> Result<ContactDto, SubmitError> {
    form.validate().map_err(SubmitError::Invalid)?;
    api.submit_contact(&form.payload()).map_err(SubmitError::Api)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_form_reports_all_field_errors() {
        let form = RegistrationForm::default();
        let errors = form.validate().expect_err("empty form");
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "email", "phone", "course"]);
    }

    #[test]
    fn contact_form_matches_server_email_rules() {
        let form = ContactForm {
            name: "Jane".to_string(),
            email: "not-an-email".to_string(),
            phone: "0712".to_string(),
            subject: "Other".to_string(),
            message: "Hello".to_string(),
        };
        let errors = form.validate().expect_err("bad email");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "email");
    }
}
