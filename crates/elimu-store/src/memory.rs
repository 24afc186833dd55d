// SPDX-License-Identifier: Apache-2.0

use crate::seed::{default_courses, default_services, mock_payments};
use crate::{CampusStore, StoreError};
use async_trait::async_trait;
use elimu_model::{
    AdmissionStatus, Contact, Course, CourseDraft, NewContact, NewStudent, Payment, Service,
    ServiceDraft, Student,
};
use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::Mutex;

type ClockFn = Box<dyn Fn() -> u64 + Send + Sync>;

fn system_now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as u64)
}

/// Initial counter for a seeded collection. Counters only ever increment
/// afterwards, so deleting the highest id never causes reuse.
fn next_id_after<T>(map: &BTreeMap<u64, T>) -> u64 {
    map.keys().next_back().map_or(1, |max| max + 1)
}

struct Collections {
    students: BTreeMap<u64, Student>,
    contacts: BTreeMap<u64, Contact>,
    courses: BTreeMap<u64, Course>,
    services: BTreeMap<u64, Service>,
    payments: BTreeMap<u64, Payment>,
    next_student_id: u64,
    next_contact_id: u64,
    next_course_id: u64,
    next_service_id: u64,
}

/// The in-process backend: one mutex over all collections, so each mutation
/// runs to completion before the next begins and read-your-writes holds
/// within the process. Nothing survives a restart.
pub struct MemoryStore {
    inner: Mutex<Collections>,
    clock: ClockFn,
}

impl MemoryStore {
    /// A store seeded with the public catalogs and the mock payment ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::seeded(default_courses(), default_services(), mock_payments())
    }

    /// A store with no seed data at all. Exercises the empty-collection id
    /// guard that the catalog editors rely on.
    #[must_use]
    pub fn empty() -> Self {
        Self::seeded(Vec::new(), Vec::new(), Vec::new())
    }

    #[must_use]
    pub fn seeded(courses: Vec<Course>, services: Vec<Service>, payments: Vec<Payment>) -> Self {
        let courses: BTreeMap<u64, Course> = courses.into_iter().map(|c| (c.id, c)).collect();
        let services: BTreeMap<u64, Service> = services.into_iter().map(|s| (s.id, s)).collect();
        let payments: BTreeMap<u64, Payment> = payments.into_iter().map(|p| (p.id, p)).collect();
        let next_course_id = next_id_after(&courses);
        let next_service_id = next_id_after(&services);
        Self {
            inner: Mutex::new(Collections {
                students: BTreeMap::new(),
                contacts: BTreeMap::new(),
                courses,
                services,
                payments,
                next_student_id: 1,
                next_contact_id: 1,
                next_course_id,
                next_service_id,
            }),
            clock: Box::new(system_now_ms),
        }
    }

    /// Pins record timestamps for tests.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Fn() -> u64 + Send + Sync + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CampusStore for MemoryStore {
    async fn create_student(&self, submission: NewStudent) -> Result<Student, StoreError> {
        let created_at = (self.clock)();
        let mut inner = self.inner.lock().await;
        let id = inner.next_student_id;
        inner.next_student_id += 1;
        let student = Student::from_submission(id, submission, created_at);
        inner.students.insert(id, student.clone());
        Ok(student)
    }

    async fn students(&self) -> Result<Vec<Student>, StoreError> {
        Ok(self.inner.lock().await.students.values().cloned().collect())
    }

    async fn set_admission(
        &self,
        id: u64,
        status: AdmissionStatus,
    ) -> Result<Student, StoreError> {
        let mut inner = self.inner.lock().await;
        let student = inner
            .students
            .get_mut(&id)
            .ok_or(StoreError::NotFound("Student"))?;
        student.admission = status;
        Ok(student.clone())
    }

    async fn delete_student(&self, id: u64) -> Result<(), StoreError> {
        self.inner
            .lock()
            .await
            .students
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound("Student"))
    }

    async fn create_contact(&self, submission: NewContact) -> Result<Contact, StoreError> {
        let created_at = (self.clock)();
        let mut inner = self.inner.lock().await;
        let id = inner.next_contact_id;
        inner.next_contact_id += 1;
        let contact = Contact::from_submission(id, submission, created_at);
        inner.contacts.insert(id, contact.clone());
        Ok(contact)
    }

    async fn contacts(&self) -> Result<Vec<Contact>, StoreError> {
        Ok(self.inner.lock().await.contacts.values().cloned().collect())
    }

    async fn mark_replied(&self, id: u64) -> Result<Contact, StoreError> {
        let mut inner = self.inner.lock().await;
        let contact = inner
            .contacts
            .get_mut(&id)
            .ok_or(StoreError::NotFound("Message"))?;
        contact.replied = true;
        Ok(contact.clone())
    }

    async fn delete_contact(&self, id: u64) -> Result<(), StoreError> {
        self.inner
            .lock()
            .await
            .contacts
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound("Message"))
    }

    async fn courses(&self) -> Result<Vec<Course>, StoreError> {
        Ok(self.inner.lock().await.courses.values().cloned().collect())
    }

    async fn create_course(&self, draft: CourseDraft) -> Result<Course, StoreError> {
        let mut inner = self.inner.lock().await;
        let id = inner.next_course_id;
        inner.next_course_id += 1;
        let course = Course::from_draft(id, draft);
        inner.courses.insert(id, course.clone());
        Ok(course)
    }

    async fn update_course(&self, id: u64, draft: CourseDraft) -> Result<Course, StoreError> {
        let mut inner = self.inner.lock().await;
        if !inner.courses.contains_key(&id) {
            return Err(StoreError::NotFound("Course"));
        }
        let course = Course::from_draft(id, draft);
        inner.courses.insert(id, course.clone());
        Ok(course)
    }

    async fn delete_course(&self, id: u64) -> Result<(), StoreError> {
        self.inner
            .lock()
            .await
            .courses
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound("Course"))
    }

    async fn services(&self) -> Result<Vec<Service>, StoreError> {
        Ok(self.inner.lock().await.services.values().cloned().collect())
    }

    async fn create_service(&self, draft: ServiceDraft) -> Result<Service, StoreError> {
        let mut inner = self.inner.lock().await;
        let id = inner.next_service_id;
        inner.next_service_id += 1;
        let service = Service::from_draft(id, draft);
        inner.services.insert(id, service.clone());
        Ok(service)
    }

    async fn update_service(&self, id: u64, draft: ServiceDraft) -> Result<Service, StoreError> {
        let mut inner = self.inner.lock().await;
        if !inner.services.contains_key(&id) {
            return Err(StoreError::NotFound("Service"));
        }
        let service = Service::from_draft(id, draft);
        inner.services.insert(id, service.clone());
        Ok(service)
    }

    async fn delete_service(&self, id: u64) -> Result<(), StoreError> {
        self.inner
            .lock()
            .await
            .services
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound("Service"))
    }

    async fn payments(&self) -> Result<Vec<Payment>, StoreError> {
        Ok(self.inner.lock().await.payments.values().cloned().collect())
    }
}
