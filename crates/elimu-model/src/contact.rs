// SPDX-License-Identifier: Apache-2.0

use crate::field::{required, EmailAddress, ParseError, NAME_MAX_LEN, PHONE_MAX_LEN, TEXT_MAX_LEN};
use serde::{Deserialize, Serialize};

pub const SUBJECT_MAX_LEN: usize = 120;

/// Subject labels the contact form offers. The schema accepts any bounded
/// free text; this list only drives the console's filter dropdown and badges.
pub const SUBJECT_LABELS: [&str; 6] = [
    "General Inquiry",
    "Course Information",
    "Payment Issue",
    "Technical Support",
    "Admission Question",
    "Other",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub email: EmailAddress,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl NewContact {
    pub fn parse(
        name: &str,
        email: &str,
        phone: &str,
        subject: &str,
        message: &str,
    ) -> Result<Self, ParseError> {
        Ok(Self {
            name: required("name", name, NAME_MAX_LEN)?,
            email: EmailAddress::parse(email)?,
            phone: required("phone", phone, PHONE_MAX_LEN)?,
            subject: required("subject", subject, SUBJECT_MAX_LEN)?,
            message: required("message", message, TEXT_MAX_LEN)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Contact {
    pub id: u64,
    pub name: String,
    pub email: EmailAddress,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub replied: bool,
    pub created_at_ms: u64,
}

impl Contact {
    #[must_use]
    pub fn from_submission(id: u64, submission: NewContact, created_at_ms: u64) -> Self {
        Self {
            id,
            name: submission.name,
            email: submission.email,
            phone: submission.phone,
            subject: submission.subject,
            message: submission.message,
            replied: false,
            created_at_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_rejects_missing_message() {
        let err = NewContact::parse("Jane", "jane@example.com", "0712", "Other", "")
            .expect_err("empty message");
        assert_eq!(err, ParseError::Empty("message"));
    }

    #[test]
    fn subject_is_free_text_within_bounds() {
        let contact = NewContact::parse(
            "Jane",
            "jane@example.com",
            "0712",
            "Something the dropdown never offered",
            "Hello",
        )
        .expect("free-text subject accepted");
        assert_eq!(contact.subject, "Something the dropdown never offered");
    }

    #[test]
    fn new_messages_start_unreplied() {
        let submission =
            NewContact::parse("Jane", "jane@example.com", "0712", "Other", "Hello").expect("valid");
        let contact = Contact::from_submission(3, submission, 42);
        assert!(!contact.replied);
    }
}
