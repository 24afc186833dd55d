// SPDX-License-Identifier: Apache-2.0

use elimu_api::{
    ContactDto, CourseDto, FieldError, LoginResponseDto, PaymentDto, ServiceDto, StudentDto,
};
use serde_json::Value;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ApiClientError {
    Transport(String),
    /// The server's 400: schema violation with per-field details.
    Rejected {
        message: String,
        details: Vec<FieldError>,
    },
    Unauthorized,
    NotFound(String),
    Server(String),
}

impl Display for ApiClientError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(msg) => write!(f, "request failed: {msg}"),
            Self::Rejected { message, details } => {
                write!(f, "{message}")?;
                for detail in details {
                    write!(f, "; {}: {}", detail.field, detail.message)?;
                }
                Ok(())
            }
            Self::Unauthorized => f.write_str("Unauthorized"),
            Self::NotFound(message) | Self::Server(message) => f.write_str(message),
        }
    }
}

impl std::error::Error for ApiClientError {}

/// Every HTTP exchange the console performs. Admin calls take the session
/// token; the two public submission calls and the catalog reads do not.
pub trait CampusApi {
    fn login(&self, username: &str, password: &str) -> Result<LoginResponseDto, ApiClientError>;

    fn register_student(&self, payload: &Value) -> Result<StudentDto, ApiClientError>;
    fn submit_contact(&self, payload: &Value) -> Result<ContactDto, ApiClientError>;

    fn list_students(&self, token: &str) -> Result<Vec<StudentDto>, ApiClientError>;
    fn set_admission(
        &self,
        token: &str,
        id: u64,
        status: &str,
    ) -> Result<StudentDto, ApiClientError>;
    fn delete_student(&self, token: &str, id: u64) -> Result<(), ApiClientError>;

    fn list_contacts(&self, token: &str) -> Result<Vec<ContactDto>, ApiClientError>;
    fn reply_contact(&self, token: &str, id: u64) -> Result<ContactDto, ApiClientError>;
    fn delete_contact(&self, token: &str, id: u64) -> Result<(), ApiClientError>;

    fn list_courses(&self) -> Result<Vec<CourseDto>, ApiClientError>;
    fn create_course(&self, token: &str, payload: &Value) -> Result<CourseDto, ApiClientError>;
    fn update_course(
        &self,
        token: &str,
        id: u64,
        payload: &Value,
    ) -> Result<CourseDto, ApiClientError>;
    fn delete_course(&self, token: &str, id: u64) -> Result<(), ApiClientError>;

    fn list_services(&self) -> Result<Vec<ServiceDto>, ApiClientError>;
    fn create_service(&self, token: &str, payload: &Value) -> Result<ServiceDto, ApiClientError>;
    fn update_service(
        &self,
        token: &str,
        id: u64,
        payload: &Value,
    ) -> Result<ServiceDto, ApiClientError>;
    fn delete_service(&self, token: &str, id: u64) -> Result<(), ApiClientError>;

    fn list_payments(&self, token: &str) -> Result<Vec<PaymentDto>, ApiClientError>;
}

/// reqwest-backed implementation against a running elimu-server.
pub struct HttpApi {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl HttpApi {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::blocking::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn send(
        &self,
        request: reqwest::blocking::RequestBuilder,
    ) -> Result<Value, ApiClientError> {
        let response = request
            .send()
            .map_err(|e| ApiClientError::Transport(e.to_string()))?;
        let status = response.status();
        let body: Value = response.json().unwrap_or(Value::Null);
        if status.is_success() {
            return Ok(body);
        }
        let message = body
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("request failed")
            .to_string();
        match status.as_u16() {
            400 => {
                let details = body
                    .get("details")
                    .cloned()
                    .map(|d| serde_json::from_value(d).unwrap_or_default())
                    .unwrap_or_default();
                Err(ApiClientError::Rejected { message, details })
            }
            401 => Err(ApiClientError::Unauthorized),
            404 => Err(ApiClientError::NotFound(message)),
            _ => Err(ApiClientError::Server(message)),
        }
    }

    fn decode<T: serde::de::DeserializeOwned>(
        body: Value,
        key: Option<&str>,
    ) -> Result<T, ApiClientError> {
        let value = match key {
            Some(key) => body
                .get(key)
                .cloned()
                .ok_or_else(|| ApiClientError::Server(format!("response missing `{key}`")))?,
            None => body,
        };
        serde_json::from_value(value).map_err(|e| ApiClientError::Server(e.to_string()))
    }

    fn get(&self, path: &str, token: Option<&str>) -> Result<Value, ApiClientError> {
        let mut request = self.http.get(self.url(path));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        self.send(request)
    }

    fn post(
        &self,
        path: &str,
        token: Option<&str>,
        payload: Option<&Value>,
    ) -> Result<Value, ApiClientError> {
        let mut request = self.http.post(self.url(path));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(payload) = payload {
            request = request.json(payload);
        }
        self.send(request)
    }

    fn put(&self, path: &str, token: &str, payload: &Value) -> Result<Value, ApiClientError> {
        self.send(self.http.put(self.url(path)).bearer_auth(token).json(payload))
    }

    fn patch(&self, path: &str, token: &str, payload: &Value) -> Result<Value, ApiClientError> {
        self.send(
            self.http
                .patch(self.url(path))
                .bearer_auth(token)
                .json(payload),
        )
    }

    fn delete(&self, path: &str, token: &str) -> Result<Value, ApiClientError> {
        self.send(self.http.delete(self.url(path)).bearer_auth(token))
    }
}

impl CampusApi for HttpApi {
    fn login(&self, username: &str, password: &str) -> Result<LoginResponseDto, ApiClientError> {
        let body = self.post(
            "/api/auth/login",
            None,
            Some(&serde_json::json!({"username": username, "password": password})),
        )?;
        Self::decode(body, None)
    }

    fn register_student(&self, payload: &Value) -> Result<StudentDto, ApiClientError> {
        let body = self.post("/api/students", None, Some(payload))?;
        Self::decode(body, Some("student"))
    }

    fn submit_contact(&self, payload: &Value) -> Result<ContactDto, ApiClientError> {
        let body = self.post("/api/contacts", None, Some(payload))?;
        Self::decode(body, Some("contact"))
    }

    fn list_students(&self, token: &str) -> Result<Vec<StudentDto>, ApiClientError> {
        Self::decode(self.get("/api/students", Some(token))?, None)
    }

    fn set_admission(
        &self,
        token: &str,
        id: u64,
        status: &str,
    ) -> Result<StudentDto, ApiClientError> {
        let body = self.patch(
            &format!("/api/students/{id}/admission"),
            token,
            &serde_json::json!({"status": status}),
        )?;
        Self::decode(body, Some("student"))
    }

    fn delete_student(&self, token: &str, id: u64) -> Result<(), ApiClientError> {
        self.delete(&format!("/api/students/{id}"), token).map(|_| ())
    }

    fn list_contacts(&self, token: &str) -> Result<Vec<ContactDto>, ApiClientError> {
        Self::decode(self.get("/api/contacts", Some(token))?, None)
    }

    fn reply_contact(&self, token: &str, id: u64) -> Result<ContactDto, ApiClientError> {
        let body = self.post(&format!("/api/contacts/{id}/reply"), Some(token), None)?;
        Self::decode(body, Some("contact"))
    }

    fn delete_contact(&self, token: &str, id: u64) -> Result<(), ApiClientError> {
        self.delete(&format!("/api/contacts/{id}"), token).map(|_| ())
    }

    fn list_courses(&self) -> Result<Vec<CourseDto>, ApiClientError> {
        Self::decode(self.get("/api/courses", None)?, None)
    }

    fn create_course(&self, token: &str, payload: &Value) -> Result<CourseDto, ApiClientError> {
        let body = self.post("/api/courses", Some(token), Some(payload))?;
        Self::decode(body, Some("course"))
    }

    fn update_course(
        &self,
        token: &str,
        id: u64,
        payload: &Value,
    ) -> Result<CourseDto, ApiClientError> {
        let body = self.put(&format!("/api/courses/{id}"), token, payload)?;
        Self::decode(body, Some("course"))
    }

    fn delete_course(&self, token: &str, id: u64) -> Result<(), ApiClientError> {
        self.delete(&format!("/api/courses/{id}"), token).map(|_| ())
    }

    fn list_services(&self) -> Result<Vec<ServiceDto>, ApiClientError> {
        Self::decode(self.get("/api/services", None)?, None)
    }

    fn create_service(&self, token: &str, payload: &Value) -> Result<ServiceDto, ApiClientError> {
        let body = self.post("/api/services", Some(token), Some(payload))?;
        Self::decode(body, Some("service"))
    }

    fn update_service(
        &self,
        token: &str,
        id: u64,
        payload: &Value,
    ) -> Result<ServiceDto, ApiClientError> {
        let body = self.put(&format!("/api/services/{id}"), token, payload)?;
        Self::decode(body, Some("service"))
    }

    fn delete_service(&self, token: &str, id: u64) -> Result<(), ApiClientError> {
        self.delete(&format!("/api/services/{id}"), token).map(|_| ())
    }

    fn list_payments(&self, token: &str) -> Result<Vec<PaymentDto>, ApiClientError> {
        Self::decode(self.get("/api/payments", Some(token))?, None)
    }
}
