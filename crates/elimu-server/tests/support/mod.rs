use async_trait::async_trait;
use elimu_model::{
    AdmissionStatus, Contact, Course, CourseDraft, NewContact, NewStudent, Payment, Service,
    ServiceDraft, Student,
};
use elimu_server::{build_router, AppState, CampusStore, MemoryStore};
use elimu_store::StoreError;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

pub async fn spawn_server(state: AppState) -> std::net::SocketAddr {
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    addr
}

pub async fn send_raw(
    addr: std::net::SocketAddr,
    path: &str,
    headers: &[(&str, &str)],
) -> (u16, String, String) {
    send_raw_with_method(addr, "GET", path, headers, None).await
}

pub async fn send_raw_with_method(
    addr: std::net::SocketAddr,
    method: &str,
    path: &str,
    headers: &[(&str, &str)],
    body: Option<&str>,
) -> (u16, String, String) {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");
    let mut req = format!("{method} {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n");
    if let Some(payload) = body {
        req.push_str("Content-Type: application/json\r\n");
        req.push_str(&format!("Content-Length: {}\r\n", payload.len()));
    }
    for (k, v) in headers {
        req.push_str(&format!("{k}: {v}\r\n"));
    }
    req.push_str("\r\n");
    if let Some(payload) = body {
        req.push_str(payload);
    }
    stream
        .write_all(req.as_bytes())
        .await
        .expect("write request");
    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");
    let (head, body) = response
        .split_once("\r\n\r\n")
        .expect("http response must have separator");
    let status = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|s| s.parse::<u16>().ok())
        .expect("http status");
    (status, head.to_string(), body.to_string())
}

pub async fn login_token(addr: std::net::SocketAddr) -> String {
    let (status, _, body) = send_raw_with_method(
        addr,
        "POST",
        "/api/auth/login",
        &[],
        Some(r#"{"username":"admin","password":"admin123"}"#),
    )
    .await;
    assert_eq!(status, 200, "login failed: {body}");
    let json: Value = serde_json::from_str(&body).expect("login json");
    json["token"].as_str().expect("token present").to_string()
}

/// Store wrapper that counts every trait call. Backs the property that login
/// never consults the store.
pub struct CountingStore {
    inner: MemoryStore,
    pub calls: AtomicU64,
}

impl CountingStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: MemoryStore::new(),
            calls: AtomicU64::new(0),
        })
    }

    fn tick(&self) {
        self.calls.fetch_add(1, Ordering::Relaxed);
    }
}

#[async_trait]
impl CampusStore for CountingStore {
    async fn create_student(&self, submission: NewStudent) -> Result<Student, StoreError> {
        self.tick();
        self.inner.create_student(submission).await
    }

    async fn students(&self) -> Result<Vec<Student>, StoreError> {
        self.tick();
        self.inner.students().await
    }

    async fn set_admission(
        &self,
        id: u64,
        status: AdmissionStatus,
    ) -> Result<Student, StoreError> {
        self.tick();
        self.inner.set_admission(id, status).await
    }

    async fn delete_student(&self, id: u64) -> Result<(), StoreError> {
        self.tick();
        self.inner.delete_student(id).await
    }

    async fn create_contact(&self, submission: NewContact) -> Result<Contact, StoreError> {
        self.tick();
        self.inner.create_contact(submission).await
    }

    async fn contacts(&self) -> Result<Vec<Contact>, StoreError> {
        self.tick();
        self.inner.contacts().await
    }

    async fn mark_replied(&self, id: u64) -> Result<Contact, StoreError> {
        self.tick();
        self.inner.mark_replied(id).await
    }

    async fn delete_contact(&self, id: u64) -> Result<(), StoreError> {
        self.tick();
        self.inner.delete_contact(id).await
    }

    async fn courses(&self) -> Result<Vec<Course>, StoreError> {
        self.tick();
        self.inner.courses().await
    }

    async fn create_course(&self, draft: CourseDraft) -> Result<Course, StoreError> {
        self.tick();
        self.inner.create_course(draft).await
    }

    async fn update_course(&self, id: u64, draft: CourseDraft) -> Result<Course, StoreError> {
        self.tick();
        self.inner.update_course(id, draft).await
    }

    async fn delete_course(&self, id: u64) -> Result<(), StoreError> {
        self.tick();
        self.inner.delete_course(id).await
    }

    async fn services(&self) -> Result<Vec<Service>, StoreError> {
        self.tick();
        self.inner.services().await
    }

    async fn create_service(&self, draft: ServiceDraft) -> Result<Service, StoreError> {
        self.tick();
        self.inner.create_service(draft).await
    }

    async fn update_service(&self, id: u64, draft: ServiceDraft) -> Result<Service, StoreError> {
        self.tick();
        self.inner.update_service(id, draft).await
    }

    async fn delete_service(&self, id: u64) -> Result<(), StoreError> {
        self.tick();
        self.inner.delete_service(id).await
    }

    async fn payments(&self) -> Result<Vec<Payment>, StoreError> {
        self.tick();
        self.inner.payments().await
    }
}
