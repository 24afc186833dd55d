// SPDX-License-Identifier: Apache-2.0

use crate::client::{ApiClientError, CampusApi};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardTotals {
    pub students: usize,
    pub messages: usize,
    pub courses: usize,
    pub services: usize,
}

/// The dashboard's stat tiles: plain lengths of the fetched collections.
pub fn gather(api: &dyn CampusApi, token: &str) -> Result<DashboardTotals, ApiClientError> {
    Ok(DashboardTotals {
        students: api.list_students(token)?.len(),
        messages: api.list_contacts(token)?.len(),
        courses: api.list_courses()?.len(),
        services: api.list_services()?.len(),
    })
}
