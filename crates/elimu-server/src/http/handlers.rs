use crate::{auth, AppState};
use axum::extract::{Path, State};
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use elimu_api::{
    admin_user_to_dto, contact_to_dto, course_to_dto, created_body, error_body, map_error,
    parse_admission_payload, parse_contact_payload, parse_course_payload, parse_login_payload,
    parse_service_payload, parse_student_payload, payment_to_dto, service_to_dto, student_to_dto,
    success_body, ApiError, LoginResponseDto,
};
use elimu_model::AdminUser;
use elimu_store::StoreError;
use serde_json::{json, Value};
use std::sync::atomic::Ordering;
use tracing::error;

pub(crate) fn api_error_response(err: &ApiError) -> Response {
    let status =
        StatusCode::from_u16(map_error(err)).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(error_body(err))).into_response()
}

fn store_error(err: &StoreError) -> ApiError {
    match err {
        StoreError::NotFound(what) => ApiError::not_found(what),
        _ => ApiError::internal("Internal server error"),
    }
}

/// Admin routes verify the bearer token on every request; the gate lives
/// here, not in the client. The 401 body stays deliberately vague.
fn authorize_admin(state: &AppState, headers: &HeaderMap) -> Result<(), ApiError> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(auth::bearer_token)
        .ok_or_else(ApiError::unauthorized)?;
    let username =
        auth::verify_token(&state.api.auth_secret, token).ok_or_else(ApiError::unauthorized)?;
    if username != state.api.admin_username {
        return Err(ApiError::unauthorized());
    }
    Ok(())
}

pub(crate) async fn healthz_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub(crate) async fn readyz_handler(State(state): State<AppState>) -> Response {
    if state.ready.load(Ordering::Relaxed) {
        (StatusCode::OK, "ready").into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "starting").into_response()
    }
}

pub(crate) async fn version_handler() -> Response {
    Json(json!({
        "name": crate::CRATE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "api": elimu_api::API_VERSION,
    }))
    .into_response()
}

/// Credentials are checked against configuration only; the store is never
/// consulted for login.
pub(crate) async fn login_handler(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Response {
    let Ok(credentials) = parse_login_payload(&body) else {
        return api_error_response(&ApiError::invalid_credentials());
    };
    if credentials.username != state.api.admin_username
        || credentials.password != state.api.admin_password
    {
        return api_error_response(&ApiError::invalid_credentials());
    }
    let token = auth::sign_token(&state.api.auth_secret, &credentials.username);
    let user = AdminUser {
        id: 1,
        username: credentials.username,
    };
    Json(LoginResponseDto {
        success: true,
        user: admin_user_to_dto(&user),
        token,
    })
    .into_response()
}

pub(crate) async fn register_student_handler(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Response {
    let submission = match parse_student_payload(&body) {
        Ok(submission) => submission,
        Err(field_errors) => {
            return api_error_response(&ApiError::validation_failed("student", &field_errors))
        }
    };
    match state.store.create_student(submission).await {
        Ok(student) => Json(created_body("student", &student_to_dto(&student))).into_response(),
        Err(e) => {
            error!("student registration failed: {e}");
            api_error_response(&ApiError::internal("Failed to create student registration"))
        }
    }
}

pub(crate) async fn list_students_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    if let Err(err) = authorize_admin(&state, &headers) {
        return api_error_response(&err);
    }
    match state.store.students().await {
        Ok(students) => {
            Json(students.iter().map(student_to_dto).collect::<Vec<_>>()).into_response()
        }
        Err(e) => {
            error!("student list failed: {e}");
            api_error_response(&ApiError::internal("Failed to fetch students"))
        }
    }
}

pub(crate) async fn admission_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Err(err) = authorize_admin(&state, &headers) {
        return api_error_response(&err);
    }
    let status = match parse_admission_payload(&body) {
        Ok(status) => status,
        Err(field_errors) => {
            return api_error_response(&ApiError::validation_failed("admission", &field_errors))
        }
    };
    match state.store.set_admission(id, status).await {
        Ok(student) => Json(created_body("student", &student_to_dto(&student))).into_response(),
        Err(e) => api_error_response(&store_error(&e)),
    }
}

pub(crate) async fn delete_student_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    headers: HeaderMap,
) -> Response {
    if let Err(err) = authorize_admin(&state, &headers) {
        return api_error_response(&err);
    }
    match state.store.delete_student(id).await {
        Ok(()) => Json(success_body()).into_response(),
        Err(e) => api_error_response(&store_error(&e)),
    }
}

pub(crate) async fn submit_contact_handler(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Response {
    let submission = match parse_contact_payload(&body) {
        Ok(submission) => submission,
        Err(field_errors) => {
            return api_error_response(&ApiError::validation_failed("contact", &field_errors))
        }
    };
    match state.store.create_contact(submission).await {
        Ok(contact) => Json(created_body("contact", &contact_to_dto(&contact))).into_response(),
        Err(e) => {
            error!("contact submission failed: {e}");
            api_error_response(&ApiError::internal("Failed to submit contact form"))
        }
    }
}

pub(crate) async fn list_contacts_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    if let Err(err) = authorize_admin(&state, &headers) {
        return api_error_response(&err);
    }
    match state.store.contacts().await {
        Ok(contacts) => {
            Json(contacts.iter().map(contact_to_dto).collect::<Vec<_>>()).into_response()
        }
        Err(e) => {
            error!("contact list failed: {e}");
            api_error_response(&ApiError::internal("Failed to fetch contacts"))
        }
    }
}

pub(crate) async fn reply_contact_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    headers: HeaderMap,
) -> Response {
    if let Err(err) = authorize_admin(&state, &headers) {
        return api_error_response(&err);
    }
    match state.store.mark_replied(id).await {
        Ok(contact) => Json(created_body("contact", &contact_to_dto(&contact))).into_response(),
        Err(e) => api_error_response(&store_error(&e)),
    }
}

pub(crate) async fn delete_contact_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    headers: HeaderMap,
) -> Response {
    if let Err(err) = authorize_admin(&state, &headers) {
        return api_error_response(&err);
    }
    match state.store.delete_contact(id).await {
        Ok(()) => Json(success_body()).into_response(),
        Err(e) => api_error_response(&store_error(&e)),
    }
}

pub(crate) async fn list_courses_handler(State(state): State<AppState>) -> Response {
    match state.store.courses().await {
        Ok(courses) => Json(courses.iter().map(course_to_dto).collect::<Vec<_>>()).into_response(),
        Err(e) => {
            error!("course list failed: {e}");
            api_error_response(&ApiError::internal("Failed to fetch courses"))
        }
    }
}

pub(crate) async fn create_course_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Err(err) = authorize_admin(&state, &headers) {
        return api_error_response(&err);
    }
    let draft = match parse_course_payload(&body) {
        Ok(draft) => draft,
        Err(field_errors) => {
            return api_error_response(&ApiError::validation_failed("course", &field_errors))
        }
    };
    match state.store.create_course(draft).await {
        Ok(course) => Json(created_body("course", &course_to_dto(&course))).into_response(),
        Err(e) => api_error_response(&store_error(&e)),
    }
}

pub(crate) async fn update_course_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Err(err) = authorize_admin(&state, &headers) {
        return api_error_response(&err);
    }
    let draft = match parse_course_payload(&body) {
        Ok(draft) => draft,
        Err(field_errors) => {
            return api_error_response(&ApiError::validation_failed("course", &field_errors))
        }
    };
    match state.store.update_course(id, draft).await {
        Ok(course) => Json(created_body("course", &course_to_dto(&course))).into_response(),
        Err(e) => api_error_response(&store_error(&e)),
    }
}

pub(crate) async fn delete_course_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    headers: HeaderMap,
) -> Response {
    if let Err(err) = authorize_admin(&state, &headers) {
        return api_error_response(&err);
    }
    match state.store.delete_course(id).await {
        Ok(()) => Json(success_body()).into_response(),
        Err(e) => api_error_response(&store_error(&e)),
    }
}

pub(crate) async fn list_services_handler(State(state): State<AppState>) -> Response {
    match state.store.services().await {
        Ok(services) => {
            Json(services.iter().map(service_to_dto).collect::<Vec<_>>()).into_response()
        }
        Err(e) => {
            error!("service list failed: {e}");
            api_error_response(&ApiError::internal("Failed to fetch services"))
        }
    }
}

pub(crate) async fn create_service_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Err(err) = authorize_admin(&state, &headers) {
        return api_error_response(&err);
    }
    let draft = match parse_service_payload(&body) {
        Ok(draft) => draft,
        Err(field_errors) => {
            return api_error_response(&ApiError::validation_failed("service", &field_errors))
        }
    };
    match state.store.create_service(draft).await {
        Ok(service) => Json(created_body("service", &service_to_dto(&service))).into_response(),
        Err(e) => api_error_response(&store_error(&e)),
    }
}

pub(crate) async fn update_service_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Err(err) = authorize_admin(&state, &headers) {
        return api_error_response(&err);
    }
    let draft = match parse_service_payload(&body) {
        Ok(draft) => draft,
        Err(field_errors) => {
            return api_error_response(&ApiError::validation_failed("service", &field_errors))
        }
    };
    match state.store.update_service(id, draft).await {
        Ok(service) => Json(created_body("service", &service_to_dto(&service))).into_response(),
        Err(e) => api_error_response(&store_error(&e)),
    }
}

pub(crate) async fn delete_service_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    headers: HeaderMap,
) -> Response {
    if let Err(err) = authorize_admin(&state, &headers) {
        return api_error_response(&err);
    }
    match state.store.delete_service(id).await {
        Ok(()) => Json(success_body()).into_response(),
        Err(e) => api_error_response(&store_error(&e)),
    }
}

pub(crate) async fn list_payments_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    if let Err(err) = authorize_admin(&state, &headers) {
        return api_error_response(&err);
    }
    match state.store.payments().await {
        Ok(payments) => {
            Json(payments.iter().map(payment_to_dto).collect::<Vec<_>>()).into_response()
        }
        Err(e) => {
            error!("payment list failed: {e}");
            api_error_response(&ApiError::internal("Failed to fetch payments"))
        }
    }
}
