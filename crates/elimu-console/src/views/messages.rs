// SPDX-License-Identifier: Apache-2.0

use super::contains_ci;
use elimu_api::ContactDto;
use std::collections::BTreeMap;

/// Substring search over sender name, email, and message body, combined with
/// an equality filter over the subject ("all" disables it).
#[must_use]
pub fn filter<'a>(contacts: &'a [ContactDto], term: &str, subject: &str) -> Vec<&'a ContactDto> {
    contacts
        .iter()
        .filter(|c| {
            let matches_term = term.is_empty()
                || contains_ci(&c.name, term)
                || contains_ci(&c.email, term)
                || contains_ci(&c.message, term);
            let matches_subject = subject == "all" || c.subject == subject;
            matches_term && matches_subject
        })
        .collect()
}

/// Distinct subjects in first-seen order, for the filter dropdown.
#[must_use]
pub fn unique_subjects(contacts: &[ContactDto]) -> Vec<String> {
    let mut seen = Vec::new();
    for contact in contacts {
        if !seen.contains(&contact.subject) {
            seen.push(contact.subject.clone());
        }
    }
    seen
}

#[must_use]
pub fn subject_counts(contacts: &[ContactDto]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for contact in contacts {
        *counts.entry(contact.subject.clone()).or_insert(0) += 1;
    }
    counts
}
