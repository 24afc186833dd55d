// SPDX-License-Identifier: Apache-2.0

use crate::field::{required, EmailAddress, ParseError, NAME_MAX_LEN, PHONE_MAX_LEN};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const COURSE_LABEL_MAX_LEN: usize = 160;

/// Where a registration sits in the admissions pipeline.
///
/// Stored on the record and mutated through explicit transitions; newly
/// created registrations always start out pending review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum AdmissionStatus {
    Pending,
    Approved,
    Rejected,
}

impl AdmissionStatus {
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        match raw {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(ParseError::InvalidFormat(
                "status",
                "must be one of pending, approved, rejected",
            )),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl Display for AdmissionStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated registration submission, before the store assigns identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub email: EmailAddress,
    pub phone: String,
    pub course: String,
}

impl NewStudent {
    pub fn parse(name: &str, email: &str, phone: &str, course: &str) -> Result<Self, ParseError> {
        Ok(Self {
            name: required("name", name, NAME_MAX_LEN)?,
            email: EmailAddress::parse(email)?,
            phone: required("phone", phone, PHONE_MAX_LEN)?,
            // Free-text label; deliberately not foreign-keyed to the catalog.
            course: required("course", course, COURSE_LABEL_MAX_LEN)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Student {
    pub id: u64,
    pub name: String,
    pub email: EmailAddress,
    pub phone: String,
    pub course: String,
    pub admission: AdmissionStatus,
    pub created_at_ms: u64,
}

impl Student {
    #[must_use]
    pub fn from_submission(id: u64, submission: NewStudent, created_at_ms: u64) -> Self {
        Self {
            id,
            name: submission.name,
            email: submission.email,
            phone: submission.phone,
            course: submission.course,
            admission: AdmissionStatus::Pending,
            created_at_ms,
        }
    }
}
