#![forbid(unsafe_code)]
//! Elimu Campus model SSOT.
//!
//! Every record that reaches the store is constructed through a validating
//! `parse`/`new`, so a stored record never carries an empty required field.

mod admin;
mod catalog;
mod contact;
mod field;
mod payment;
mod student;

pub use admin::AdminUser;
pub use catalog::{
    Course, CourseDraft, Service, ServiceDraft, FEE_MAX_LEN, TITLE_MAX_LEN,
};
pub use contact::{Contact, NewContact, SUBJECT_LABELS, SUBJECT_MAX_LEN};
pub use field::{
    required, EmailAddress, ParseError, EMAIL_MAX_LEN, NAME_MAX_LEN, PHONE_MAX_LEN, TEXT_MAX_LEN,
};
pub use payment::{Payment, PaymentStatus};
pub use student::{AdmissionStatus, NewStudent, Student, COURSE_LABEL_MAX_LEN};

pub const CRATE_NAME: &str = "elimu-model";
