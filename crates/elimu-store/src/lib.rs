#![forbid(unsafe_code)]
//! Storage contract for Elimu Campus.
//!
//! Routes and views talk to [`CampusStore`] only; the shipped backend is the
//! volatile [`MemoryStore`]. A database-backed implementation can be swapped
//! in without touching handler or console code.

use async_trait::async_trait;
use elimu_model::{
    AdmissionStatus, Contact, Course, CourseDraft, NewContact, NewStudent, Payment, Service,
    ServiceDraft, Student,
};
use std::fmt::{Display, Formatter};

mod memory;
mod seed;

pub use memory::MemoryStore;
pub use seed::{default_courses, default_services, mock_payments};

pub const CRATE_NAME: &str = "elimu-store";

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreError {
    NotFound(&'static str),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(what) => write!(f, "{what} not found"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Create/read/update/delete per entity. Payments are read-only: the ledger
/// is a seeded mock with no write path.
#[async_trait]
pub trait CampusStore: Send + Sync + 'static {
    async fn create_student(&self, submission: NewStudent) -> Result<Student, StoreError>;
    async fn students(&self) -> Result<Vec<Student>, StoreError>;
    async fn set_admission(&self, id: u64, status: AdmissionStatus)
        -> Result<Student, StoreError>;
    async fn delete_student(&self, id: u64) -> Result<(), StoreError>;

    async fn create_contact(&self, submission: NewContact) -> Result<Contact, StoreError>;
    async fn contacts(&self) -> Result<Vec<Contact>, StoreError>;
    async fn mark_replied(&self, id: u64) -> Result<Contact, StoreError>;
    async fn delete_contact(&self, id: u64) -> Result<(), StoreError>;

    async fn courses(&self) -> Result<Vec<Course>, StoreError>;
    async fn create_course(&self, draft: CourseDraft) -> Result<Course, StoreError>;
    async fn update_course(&self, id: u64, draft: CourseDraft) -> Result<Course, StoreError>;
    async fn delete_course(&self, id: u64) -> Result<(), StoreError>;

    async fn services(&self) -> Result<Vec<Service>, StoreError>;
    async fn create_service(&self, draft: ServiceDraft) -> Result<Service, StoreError>;
    async fn update_service(&self, id: u64, draft: ServiceDraft) -> Result<Service, StoreError>;
    async fn delete_service(&self, id: u64) -> Result<(), StoreError>;

    async fn payments(&self) -> Result<Vec<Payment>, StoreError>;
}
