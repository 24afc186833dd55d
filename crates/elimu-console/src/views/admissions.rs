// SPDX-License-Identifier: Apache-2.0

//! Admissions review: status filter, per-status counts, and the two
//! transitions. Status is a stored field; a decision PATCHes the server and
//! the caller refetches the list afterwards.

use crate::client::{ApiClientError, CampusApi};
use elimu_api::StudentDto;
use std::collections::BTreeMap;

#[must_use]
pub fn filter_by_status<'a>(students: &'a [StudentDto], status: &str) -> Vec<&'a StudentDto> {
    students
        .iter()
        .filter(|s| status == "all" || s.admission_status == status)
        .collect()
}

#[must_use]
pub fn status_counts(students: &[StudentDto]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for student in students {
        *counts.entry(student.admission_status.clone()).or_insert(0) += 1;
    }
    counts
}

pub fn approve(
    api: &dyn CampusApi,
    token: &str,
    id: u64,
) -> Result<StudentDto, ApiClientError> {
    api.set_admission(token, id, "approved")
}

pub fn reject(api: &dyn CampusApi, token: &str, id: u64) -> Result<StudentDto, ApiClientError> {
    api.set_admission(token, id, "rejected")
}
