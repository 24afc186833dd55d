mod support;

use elimu_server::{AppState, MemoryStore};
use serde_json::{json, Value};
use std::sync::Arc;
use support::{login_token, send_raw, send_raw_with_method, spawn_server};

fn fresh_state() -> AppState {
    AppState::new(Arc::new(MemoryStore::new()))
}

#[tokio::test]
async fn register_then_list_contains_exactly_the_created_record() {
    let addr = spawn_server(fresh_state()).await;
    let token = login_token(addr).await;

    let payload = json!({
        "name": "Jane Wanjiku",
        "email": "jane@example.com",
        "phone": "0712345678",
        "course": "Diploma in Counselling"
    });
    let (status, _, body) = send_raw_with_method(
        addr,
        "POST",
        "/api/students",
        &[],
        Some(&payload.to_string()),
    )
    .await;
    assert_eq!(status, 200);
    let created: Value = serde_json::from_str(&body).expect("create json");
    assert_eq!(created["success"], true);
    assert_eq!(created["student"]["name"], "Jane Wanjiku");
    assert_eq!(created["student"]["admissionStatus"], "pending");
    assert!(created["student"]["createdAt"].as_u64().expect("createdAt") > 0);

    let auth = format!("Bearer {token}");
    let (status, _, body) =
        send_raw(addr, "/api/students", &[("Authorization", &auth)]).await;
    assert_eq!(status, 200);
    let listed: Vec<Value> = serde_json::from_str(&body).expect("list json");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], created["student"]);
}

#[tokio::test]
async fn invalid_registration_is_rejected_and_store_unchanged() {
    let addr = spawn_server(fresh_state()).await;
    let token = login_token(addr).await;

    let (status, _, body) = send_raw_with_method(
        addr,
        "POST",
        "/api/students",
        &[],
        Some(r#"{"name":"Jane","phone":"0712","course":"ECDE"}"#),
    )
    .await;
    assert_eq!(status, 400);
    let error: Value = serde_json::from_str(&body).expect("error json");
    assert_eq!(error["error"], "Invalid student data");
    let details = error["details"].as_array().expect("details array");
    assert!(details.iter().any(|d| d["field"] == "email"));

    let auth = format!("Bearer {token}");
    let (_, _, body) = send_raw(addr, "/api/students", &[("Authorization", &auth)]).await;
    let listed: Vec<Value> = serde_json::from_str(&body).expect("list json");
    assert!(listed.is_empty());
}

#[tokio::test]
async fn sequential_registrations_get_strictly_increasing_ids() {
    let addr = spawn_server(fresh_state()).await;

    let mut ids = Vec::new();
    for name in ["First Student", "Second Student", "Third Student"] {
        let payload = json!({
            "name": name,
            "email": "student@example.com",
            "phone": "0712345678",
            "course": "ECDE"
        });
        let (status, _, body) = send_raw_with_method(
            addr,
            "POST",
            "/api/students",
            &[],
            Some(&payload.to_string()),
        )
        .await;
        assert_eq!(status, 200);
        let created: Value = serde_json::from_str(&body).expect("create json");
        ids.push(created["student"]["id"].as_u64().expect("id"));
    }
    assert!(ids.windows(2).all(|w| w[0] < w[1]), "ids not increasing: {ids:?}");
}

#[tokio::test]
async fn admission_patch_updates_the_stored_record() {
    let addr = spawn_server(fresh_state()).await;
    let token = login_token(addr).await;
    let auth = format!("Bearer {token}");

    let payload = json!({
        "name": "Peter Wilson",
        "email": "peter@example.com",
        "phone": "0711456789",
        "course": "ECDE"
    });
    let (_, _, body) = send_raw_with_method(
        addr,
        "POST",
        "/api/students",
        &[],
        Some(&payload.to_string()),
    )
    .await;
    let created: Value = serde_json::from_str(&body).expect("create json");
    let id = created["student"]["id"].as_u64().expect("id");

    let (status, _, body) = send_raw_with_method(
        addr,
        "PATCH",
        &format!("/api/students/{id}/admission"),
        &[("Authorization", &auth)],
        Some(r#"{"status":"approved"}"#),
    )
    .await;
    assert_eq!(status, 200);
    let updated: Value = serde_json::from_str(&body).expect("patch json");
    assert_eq!(updated["student"]["admissionStatus"], "approved");

    let (status, _, _) = send_raw_with_method(
        addr,
        "PATCH",
        "/api/students/9999/admission",
        &[("Authorization", &auth)],
        Some(r#"{"status":"approved"}"#),
    )
    .await;
    assert_eq!(status, 404);

    let (status, _, body) = send_raw_with_method(
        addr,
        "PATCH",
        &format!("/api/students/{id}/admission"),
        &[("Authorization", &auth)],
        Some(r#"{"status":"waitlisted"}"#),
    )
    .await;
    assert_eq!(status, 400);
    let error: Value = serde_json::from_str(&body).expect("error json");
    assert_eq!(error["error"], "Invalid admission data");
}

#[tokio::test]
async fn delete_student_is_terminal_and_404_after() {
    let addr = spawn_server(fresh_state()).await;
    let token = login_token(addr).await;
    let auth = format!("Bearer {token}");

    let payload = json!({
        "name": "Jane",
        "email": "jane@example.com",
        "phone": "0712",
        "course": "ECDE"
    });
    let (_, _, body) = send_raw_with_method(
        addr,
        "POST",
        "/api/students",
        &[],
        Some(&payload.to_string()),
    )
    .await;
    let created: Value = serde_json::from_str(&body).expect("create json");
    let id = created["student"]["id"].as_u64().expect("id");

    let (status, _, body) = send_raw_with_method(
        addr,
        "DELETE",
        &format!("/api/students/{id}"),
        &[("Authorization", &auth)],
        None,
    )
    .await;
    assert_eq!(status, 200);
    let deleted: Value = serde_json::from_str(&body).expect("delete json");
    assert_eq!(deleted["success"], true);

    let (status, _, body) = send_raw_with_method(
        addr,
        "DELETE",
        &format!("/api/students/{id}"),
        &[("Authorization", &auth)],
        None,
    )
    .await;
    assert_eq!(status, 404);
    let error: Value = serde_json::from_str(&body).expect("error json");
    assert_eq!(error["error"], "Student not found");
}

#[tokio::test]
async fn contact_flow_submit_reply_delete() {
    let addr = spawn_server(fresh_state()).await;
    let token = login_token(addr).await;
    let auth = format!("Bearer {token}");

    let payload = json!({
        "name": "Mary Atieno",
        "email": "mary@example.com",
        "phone": "0733987654",
        "subject": "Course Information",
        "message": "When does the next ECDE intake start?"
    });
    let (status, _, body) = send_raw_with_method(
        addr,
        "POST",
        "/api/contacts",
        &[],
        Some(&payload.to_string()),
    )
    .await;
    assert_eq!(status, 200);
    let created: Value = serde_json::from_str(&body).expect("create json");
    assert_eq!(created["contact"]["replied"], false);
    let id = created["contact"]["id"].as_u64().expect("id");

    let (status, _, body) = send_raw_with_method(
        addr,
        "POST",
        &format!("/api/contacts/{id}/reply"),
        &[("Authorization", &auth)],
        None,
    )
    .await;
    assert_eq!(status, 200);
    let replied: Value = serde_json::from_str(&body).expect("reply json");
    assert_eq!(replied["contact"]["replied"], true);

    let (status, _, _) = send_raw_with_method(
        addr,
        "DELETE",
        &format!("/api/contacts/{id}"),
        &[("Authorization", &auth)],
        None,
    )
    .await;
    assert_eq!(status, 200);

    let (status, _, body) = send_raw_with_method(
        addr,
        "POST",
        &format!("/api/contacts/{id}/reply"),
        &[("Authorization", &auth)],
        None,
    )
    .await;
    assert_eq!(status, 404);
    let error: Value = serde_json::from_str(&body).expect("error json");
    assert_eq!(error["error"], "Message not found");
}

#[tokio::test]
async fn invalid_contact_email_reports_the_field() {
    let addr = spawn_server(fresh_state()).await;
    let payload = json!({
        "name": "Mary",
        "email": "not-an-email",
        "phone": "0733",
        "subject": "Other",
        "message": "Hello"
    });
    let (status, _, body) = send_raw_with_method(
        addr,
        "POST",
        "/api/contacts",
        &[],
        Some(&payload.to_string()),
    )
    .await;
    assert_eq!(status, 400);
    let error: Value = serde_json::from_str(&body).expect("error json");
    assert_eq!(error["error"], "Invalid contact data");
    assert_eq!(error["details"][0]["field"], "email");
}

#[tokio::test]
async fn catalogs_are_public_to_read_and_gated_to_write() {
    let addr = spawn_server(fresh_state()).await;
    let token = login_token(addr).await;
    let auth = format!("Bearer {token}");

    let (status, _, body) = send_raw(addr, "/api/courses", &[]).await;
    assert_eq!(status, 200);
    let courses: Vec<Value> = serde_json::from_str(&body).expect("courses json");
    assert_eq!(courses.len(), 6);
    assert!(courses.iter().any(|c| c["title"] == "Kenya Sign Language"));

    let (status, _, body) = send_raw(addr, "/api/services", &[]).await;
    assert_eq!(status, 200);
    let services: Vec<Value> = serde_json::from_str(&body).expect("services json");
    assert_eq!(services.len(), 6);

    let draft = json!({
        "title": "First Aid Basics",
        "type": "Short Course",
        "description": "Workplace first aid fundamentals.",
        "duration": "1 month",
        "certification": "Certificate",
        "fee": "KSH 8,000"
    });
    let (status, _, _) = send_raw_with_method(
        addr,
        "POST",
        "/api/courses",
        &[],
        Some(&draft.to_string()),
    )
    .await;
    assert_eq!(status, 401, "catalog writes must require a token");

    let (status, _, body) = send_raw_with_method(
        addr,
        "POST",
        "/api/courses",
        &[("Authorization", &auth)],
        Some(&draft.to_string()),
    )
    .await;
    assert_eq!(status, 200);
    let created: Value = serde_json::from_str(&body).expect("course json");
    assert_eq!(created["course"]["id"], 7);
    assert_eq!(created["course"]["type"], "Short Course");

    let updated = json!({
        "title": "First Aid Basics",
        "type": "Short Course",
        "description": "Workplace first aid fundamentals, refreshed.",
        "duration": "1 month",
        "certification": "Certificate",
        "fee": "KSH 9,000"
    });
    let (status, _, body) = send_raw_with_method(
        addr,
        "PUT",
        "/api/courses/7",
        &[("Authorization", &auth)],
        Some(&updated.to_string()),
    )
    .await;
    assert_eq!(status, 200);
    let course: Value = serde_json::from_str(&body).expect("course json");
    assert_eq!(course["course"]["fee"], "KSH 9,000");

    let (status, _, _) = send_raw_with_method(
        addr,
        "DELETE",
        "/api/courses/7",
        &[("Authorization", &auth)],
        None,
    )
    .await;
    assert_eq!(status, 200);
    let (status, _, _) = send_raw_with_method(
        addr,
        "DELETE",
        "/api/courses/7",
        &[("Authorization", &auth)],
        None,
    )
    .await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn payments_ledger_serves_the_mock_rows() {
    let addr = spawn_server(fresh_state()).await;
    let token = login_token(addr).await;
    let auth = format!("Bearer {token}");

    let (status, _, body) = send_raw(addr, "/api/payments", &[("Authorization", &auth)]).await;
    assert_eq!(status, 200);
    let payments: Vec<Value> = serde_json::from_str(&body).expect("payments json");
    assert_eq!(payments.len(), 3);
    assert!(payments.iter().any(|p| p["mpesaCode"] == "QGH7YT8X9Z"));
    assert!(payments.iter().any(|p| p["status"] == "pending"));
}

#[tokio::test]
async fn operational_endpoints_and_request_id_header() {
    let addr = spawn_server(fresh_state()).await;

    let (status, _, body) = send_raw(addr, "/healthz", &[]).await;
    assert_eq!(status, 200);
    assert_eq!(body, "ok");

    let (status, _, body) = send_raw(addr, "/readyz", &[]).await;
    assert_eq!(status, 200);
    assert_eq!(body, "ready");

    let (status, headers, body) = send_raw(addr, "/api/version", &[]).await;
    assert_eq!(status, 200);
    assert!(headers.contains("x-request-id: "));
    let json: Value = serde_json::from_str(&body).expect("version json");
    assert_eq!(json["name"], "elimu-server");

    let (_, headers, _) = send_raw(addr, "/healthz", &[("x-request-id", "trace-42")]).await;
    assert!(headers.contains("x-request-id: trace-42"));
}
