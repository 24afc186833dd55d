// SPDX-License-Identifier: Apache-2.0

//! Request-body validation.
//!
//! Bodies arrive as loose JSON; every create/update route re-validates the
//! same shape the console validates, field by field, so one submission can
//! report all of its schema violations at once. A missing or null field is
//! treated the same as an empty one.

use crate::errors::FieldError;
use elimu_model::{
    required, AdmissionStatus, CourseDraft, EmailAddress, NewContact, NewStudent, ServiceDraft,
    COURSE_LABEL_MAX_LEN, NAME_MAX_LEN, PHONE_MAX_LEN, SUBJECT_MAX_LEN, TEXT_MAX_LEN,
};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

fn str_field<'a>(body: &'a Value, name: &str) -> &'a str {
    body.get(name).and_then(Value::as_str).unwrap_or_default()
}

fn opt_str_field<'a>(body: &'a Value, name: &str) -> Option<&'a str> {
    body.get(name).and_then(Value::as_str)
}

pub fn parse_login_payload(body: &Value) -> Result<LoginCredentials, Vec<FieldError>> {
    let mut errors = Vec::new();
    let username = str_field(body, "username");
    let password = str_field(body, "password");
    if username.trim().is_empty() {
        errors.push(FieldError::new("username", "username is required"));
    }
    if password.is_empty() {
        errors.push(FieldError::new("password", "password is required"));
    }
    if errors.is_empty() {
        Ok(LoginCredentials {
            username: username.trim().to_string(),
            password: password.to_string(),
        })
    } else {
        Err(errors)
    }
}

pub fn parse_student_payload(body: &Value) -> Result<NewStudent, Vec<FieldError>> {
    let mut errors = Vec::new();
    check(&mut errors, required("name", str_field(body, "name"), NAME_MAX_LEN));
    check(&mut errors, EmailAddress::parse(str_field(body, "email")));
    check(&mut errors, required("phone", str_field(body, "phone"), PHONE_MAX_LEN));
    check(&mut errors, required("course", str_field(body, "course"), COURSE_LABEL_MAX_LEN));
    if !errors.is_empty() {
        return Err(errors);
    }
    NewStudent::parse(
        str_field(body, "name"),
        str_field(body, "email"),
        str_field(body, "phone"),
        str_field(body, "course"),
    )
    .map_err(|e| vec![FieldError::new(e.field(), e.to_string())])
}

pub fn parse_contact_payload(body: &Value) -> Result<NewContact, Vec<FieldError>> {
    let mut errors = Vec::new();
    check(&mut errors, required("name", str_field(body, "name"), NAME_MAX_LEN));
    check(&mut errors, EmailAddress::parse(str_field(body, "email")));
    check(&mut errors, required("phone", str_field(body, "phone"), PHONE_MAX_LEN));
    check(&mut errors, required("subject", str_field(body, "subject"), SUBJECT_MAX_LEN));
    check(&mut errors, required("message", str_field(body, "message"), TEXT_MAX_LEN));
    if !errors.is_empty() {
        return Err(errors);
    }
    NewContact::parse(
        str_field(body, "name"),
        str_field(body, "email"),
        str_field(body, "phone"),
        str_field(body, "subject"),
        str_field(body, "message"),
    )
    .map_err(|e| vec![FieldError::new(e.field(), e.to_string())])
}

pub fn parse_course_payload(body: &Value) -> Result<CourseDraft, Vec<FieldError>> {
    CourseDraft::parse(
        str_field(body, "title"),
        str_field(body, "type"),
        str_field(body, "description"),
        str_field(body, "duration"),
        str_field(body, "certification"),
        opt_str_field(body, "prerequisites"),
        str_field(body, "fee"),
    )
    .map_err(|e| vec![FieldError::new(e.field(), e.to_string())])
}

pub fn parse_service_payload(body: &Value) -> Result<ServiceDraft, Vec<FieldError>> {
    ServiceDraft::parse(
        str_field(body, "title"),
        str_field(body, "description"),
        str_field(body, "audience"),
        str_field(body, "fee"),
    )
    .map_err(|e| vec![FieldError::new(e.field(), e.to_string())])
}

pub fn parse_admission_payload(body: &Value) -> Result<AdmissionStatus, Vec<FieldError>> {
    AdmissionStatus::parse(str_field(body, "status"))
        .map_err(|e| vec![FieldError::new(e.field(), e.to_string())])
}

fn check<T>(errors: &mut Vec<FieldError>, result: Result<T, elimu_model::ParseError>) {
    if let Err(e) = result {
        errors.push(FieldError::new(e.field(), e.to_string()));
    }
}
