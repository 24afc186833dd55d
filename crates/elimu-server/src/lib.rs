#![forbid(unsafe_code)]

use axum::extract::DefaultBodyLimit;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::routing::{get, patch, post, put};
use axum::Router;
use std::sync::atomic::{AtomicBool, AtomicU64};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

mod auth;
mod config;
mod http;

pub use auth::{sign_token, verify_token};
pub use config::{validate_startup_config, ApiConfig};
pub use elimu_store::{CampusStore, MemoryStore};

pub const CRATE_NAME: &str = "elimu-server";

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CampusStore>,
    pub api: Arc<ApiConfig>,
    pub ready: Arc<AtomicBool>,
    pub(crate) request_id_seed: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn CampusStore>) -> Self {
        Self::with_config(store, ApiConfig::default())
    }

    #[must_use]
    pub fn with_config(store: Arc<dyn CampusStore>, api: ApiConfig) -> Self {
        Self {
            store,
            api: Arc::new(api),
            ready: Arc::new(AtomicBool::new(true)),
            request_id_seed: Arc::new(AtomicU64::new(1)),
        }
    }
}

fn cors_layer(api: &ApiConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);
    if api.cors_allowed_origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = api
            .cors_allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        cors.allow_origin(origins)
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(http::handlers::healthz_handler))
        .route("/readyz", get(http::handlers::readyz_handler))
        .route("/api/version", get(http::handlers::version_handler))
        .route("/api/auth/login", post(http::handlers::login_handler))
        .route(
            "/api/students",
            get(http::handlers::list_students_handler)
                .post(http::handlers::register_student_handler),
        )
        .route(
            "/api/students/:id",
            axum::routing::delete(http::handlers::delete_student_handler),
        )
        .route(
            "/api/students/:id/admission",
            patch(http::handlers::admission_handler),
        )
        .route(
            "/api/contacts",
            get(http::handlers::list_contacts_handler)
                .post(http::handlers::submit_contact_handler),
        )
        .route(
            "/api/contacts/:id",
            axum::routing::delete(http::handlers::delete_contact_handler),
        )
        .route(
            "/api/contacts/:id/reply",
            post(http::handlers::reply_contact_handler),
        )
        .route(
            "/api/courses",
            get(http::handlers::list_courses_handler).post(http::handlers::create_course_handler),
        )
        .route(
            "/api/courses/:id",
            put(http::handlers::update_course_handler)
                .delete(http::handlers::delete_course_handler),
        )
        .route(
            "/api/services",
            get(http::handlers::list_services_handler)
                .post(http::handlers::create_service_handler),
        )
        .route(
            "/api/services/:id",
            put(http::handlers::update_service_handler)
                .delete(http::handlers::delete_service_handler),
        )
        .route("/api/payments", get(http::handlers::list_payments_handler))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            http::request_tracing::request_tracing_middleware,
        ))
        .layer(cors_layer(&state.api))
        .layer(DefaultBodyLimit::max(state.api.max_body_bytes))
        .with_state(state)
}
