// SPDX-License-Identifier: Apache-2.0

use super::contains_ci;
use elimu_api::StudentDto;

/// Substring search over name, email, and course; an empty term matches all.
#[must_use]
pub fn search<'a>(students: &'a [StudentDto], term: &str) -> Vec<&'a StudentDto> {
    students
        .iter()
        .filter(|s| {
            term.is_empty()
                || contains_ci(&s.name, term)
                || contains_ci(&s.email, term)
                || contains_ci(&s.course, term)
        })
        .collect()
}
