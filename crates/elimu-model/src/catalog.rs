// SPDX-License-Identifier: Apache-2.0

//! Course and service catalog entities.
//!
//! Both catalogs are store-backed and edited through the same CRUD contract
//! as every other collection; drafts carry the validated form input and the
//! store assigns ids.

use crate::field::{required, ParseError, TEXT_MAX_LEN};
use serde::{Deserialize, Serialize};

pub const TITLE_MAX_LEN: usize = 160;
pub const FEE_MAX_LEN: usize = 120;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDraft {
    pub title: String,
    pub kind: String,
    pub description: String,
    pub duration: String,
    pub certification: String,
    pub prerequisites: Option<String>,
    pub fee: String,
}

impl CourseDraft {
    #[allow(clippy::too_many_arguments)]
    pub fn parse(
        title: &str,
        kind: &str,
        description: &str,
        duration: &str,
        certification: &str,
        prerequisites: Option<&str>,
        fee: &str,
    ) -> Result<Self, ParseError> {
        let prerequisites = match prerequisites.map(str::trim) {
            None | Some("") => None,
            Some(value) => Some(required("prerequisites", value, TITLE_MAX_LEN)?),
        };
        Ok(Self {
            title: required("title", title, TITLE_MAX_LEN)?,
            kind: required("type", kind, TITLE_MAX_LEN)?,
            description: required("description", description, TEXT_MAX_LEN)?,
            duration: required("duration", duration, TITLE_MAX_LEN)?,
            certification: required("certification", certification, TITLE_MAX_LEN)?,
            prerequisites,
            fee: required("fee", fee, FEE_MAX_LEN)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Course {
    pub id: u64,
    pub title: String,
    pub kind: String,
    pub description: String,
    pub duration: String,
    pub certification: String,
    pub prerequisites: Option<String>,
    pub fee: String,
}

impl Course {
    #[must_use]
    pub fn from_draft(id: u64, draft: CourseDraft) -> Self {
        Self {
            id,
            title: draft.title,
            kind: draft.kind,
            description: draft.description,
            duration: draft.duration,
            certification: draft.certification,
            prerequisites: draft.prerequisites,
            fee: draft.fee,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDraft {
    pub title: String,
    pub description: String,
    pub audience: String,
    pub fee: String,
}

impl ServiceDraft {
    pub fn parse(
        title: &str,
        description: &str,
        audience: &str,
        fee: &str,
    ) -> Result<Self, ParseError> {
        Ok(Self {
            title: required("title", title, TITLE_MAX_LEN)?,
            description: required("description", description, TEXT_MAX_LEN)?,
            audience: required("audience", audience, TITLE_MAX_LEN)?,
            fee: required("fee", fee, FEE_MAX_LEN)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Service {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub audience: String,
    pub fee: String,
}

impl Service {
    #[must_use]
    pub fn from_draft(id: u64, draft: ServiceDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            audience: draft.audience,
            fee: draft.fee,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_draft_normalizes_blank_prerequisites() {
        let draft = CourseDraft::parse(
            "Kenya Sign Language",
            "Certificate Course",
            "Professional sign language training.",
            "6 months",
            "Certificate",
            Some("   "),
            "KSH 20,000",
        )
        .expect("valid draft");
        assert_eq!(draft.prerequisites, None);
    }

    #[test]
    fn course_draft_rejects_blank_title() {
        let err = CourseDraft::parse("", "Short Course", "d", "3 months", "Certificate", None, "x")
            .expect_err("blank title");
        assert_eq!(err, ParseError::Empty("title"));
    }

    #[test]
    fn service_draft_requires_fee() {
        assert!(ServiceDraft::parse("Counselling", "One on one.", "Adults", "").is_err());
    }
}
