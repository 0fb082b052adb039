//! End-to-end requests through the router against the in-memory backend.

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use wps_api::{build_router, AppState};
use wps_infrastructure::{MemoryStore, Table};
use wps_shared::config::{CorsSettings, DashboardSettings, RoleSetting};

fn app() -> (Router, MemoryStore) {
    let store = MemoryStore::with_default_weightings();
    let settings = DashboardSettings {
        default_role: RoleSetting::Admin,
        notification_capacity: 50,
        max_wizard_sessions: 2,
        wizard_session_ttl_secs: 1800,
    };
    let cors = CorsSettings {
        allowed_origins: vec!["*".to_string()],
    };
    let router = build_router(AppState::new(store.repositories(), &settings), &cors);
    (router, store)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    send_as(app, method, uri, body, None).await
}

async fn send_as(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    role: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(role) = role {
        builder = builder.header("x-wps-role", role);
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create_acme(app: &Router) {
    let (status, _) = send(
        app,
        Method::POST,
        "/api/v1/company",
        Some(json!({
            "name": "Acme",
            "industry": "Technology",
            "company_size": 50,
            "number_of_sites": 2
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_health() {
    let (app, _) = app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "healthy");
}

#[tokio::test]
async fn test_profile_is_null_until_initialized() {
    let (app, _) = app();
    let (status, body) = send(&app, Method::GET, "/api/v1/company", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].is_null());

    create_acme(&app).await;
    let (_, body) = send(&app, Method::GET, "/api/v1/company/view", None).await;
    assert!(!body["data"]["fields"].as_array().unwrap().is_empty());

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/company",
        Some(json!({"name": "Again", "industry": "Finance", "company_size": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "ALREADY_EXISTS");
}

#[tokio::test]
async fn test_acme_collaboration_end_to_end() {
    let (app, _) = app();
    create_acme(&app).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/attributes",
        Some(json!({"name": "Collaboration", "slot": "secondary"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["importance"], 0);
    assert_eq!(body["data"]["is_primary"], false);

    let (_, view) = send(&app, Method::GET, "/api/v1/attributes/view", None).await;
    assert_eq!(view["data"]["primary"]["count_label"], "0 of 3");
    assert_eq!(view["data"]["secondary"]["count_label"], "1 of 3");

    let (_, toasts) = send(&app, Method::GET, "/api/v1/notifications", None).await;
    let descriptions: Vec<&str> = toasts["data"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|t| t["description"].as_str())
        .collect();
    assert!(descriptions.contains(&"Workspace attribute added successfully"));
}

#[tokio::test]
async fn test_attribute_delete_requires_confirmation() {
    let (app, store) = app();
    let (_, body) = send(
        &app,
        Method::POST,
        "/api/v1/attributes",
        Some(json!({"name": "Daylight / Natural Lighting", "slot": "primary"})),
    )
    .await;
    let id = body["data"]["id"].as_i64().unwrap();
    let uri = format!("/api/v1/attributes/{id}");

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "CONFIRMATION_REQUIRED");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .starts_with("Warning: Removing this attribute"));

    let calls = store.call_count();
    let (status, body) = send(&app, Method::DELETE, &format!("{uri}?confirm=false"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["outcome"], "cancelled");
    assert_eq!(store.call_count(), calls);
    assert_eq!(store.row_count(Table::WorkspaceAttributes), 1);

    let (_, body) = send(&app, Method::DELETE, &format!("{uri}?confirm=true"), None).await;
    assert_eq!(body["data"]["outcome"], "deleted");
    assert_eq!(store.row_count(Table::WorkspaceAttributes), 0);
}

#[tokio::test]
async fn test_viewer_cannot_mutate() {
    let (app, store) = app();
    let (status, body) = send_as(
        &app,
        Method::POST,
        "/api/v1/lobs",
        Some(json!({"name": "Research", "type": "Research"})),
        Some("viewer"),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["success"], false);
    assert_eq!(store.row_count(Table::LinesOfBusiness), 0);

    let (status, _) = send_as(&app, Method::GET, "/api/v1/lobs", None, Some("guest")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_goal_slot_limit_is_conflict() {
    let (app, _) = app();
    for name in ["Cost Optimization", "Workforce Retention", "Brand Enhancement"] {
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/v1/goals",
            Some(json!({"name": name, "slot": "primary"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/goals",
        Some(json!({"name": "Market Expansion", "slot": "primary"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["message"], "Maximum of 3 primary goals allowed");
}

#[tokio::test]
async fn test_wizard_session_submits_q1_review() {
    let (app, store) = app();
    let (_, body) = send(&app, Method::POST, "/api/v1/scenarios/wizard", None).await;
    let id = body["data"]["id"].as_str().unwrap().to_string();
    let base = format!("/api/v1/scenarios/wizard/{id}");

    let (status, body) = send(&app, Method::POST, &format!("{base}/next"), None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["message"], "Please enter a scenario name");

    let edits = [
        json!({"action": "basic_info", "name": "Q1 Review", "objective": "cost_optimization", "status": "completed"}),
        json!({"action": "toggle_lob", "lob_id": 1}),
        json!({"action": "toggle_lob", "lob_id": 2}),
        json!({"action": "toggle_space", "space_id": 5}),
        json!({"action": "set_rating", "attribute_id": 1, "lob_id": 1, "rating": 80}),
        json!({"action": "set_financial", "space_id": 5, "monthly_cost": 1000.0, "lease_term_months": 12}),
    ];
    for edit in edits {
        let (status, _) = send(&app, Method::PATCH, &base, Some(edit)).await;
        assert_eq!(status, StatusCode::OK);
    }
    for _ in 0..4 {
        let (status, _) = send(&app, Method::POST, &format!("{base}/next"), None).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(&app, Method::POST, &format!("{base}/submit"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["submission"]["scenario"]["status"], "draft");
    assert_eq!(body["data"]["submission"]["lob_count"], 2);
    assert_eq!(store.row_count(Table::ScenarioLobs), 2);
    assert_eq!(store.row_count(Table::ScenarioSpaces), 1);
    assert_eq!(store.row_count(Table::ScenarioFinancials), 1);
    assert_eq!(store.row_count(Table::ScenarioAttributeRatings), 1);

    let (status, _) = send(&app, Method::GET, &base, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let scenario_id = body["data"]["submission"]["scenario"]["id"].as_i64().unwrap();
    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/api/v1/scenarios/{scenario_id}/detail"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["view"]["name"], "Q1 Review");
}

#[tokio::test]
async fn test_scenario_detail_load_failure() {
    let (app, store) = app();
    store.inject_failure(Table::Scenarios);
    let (status, body) = send(&app, Method::GET, "/api/v1/scenarios/1/detail", None).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(
        body["error"]["message"],
        "Failed to load scenario details. Please try again."
    );
}

#[tokio::test]
async fn test_abandoned_wizards_are_evicted_at_capacity() {
    let (app, _) = app();
    let mut ids = Vec::new();
    for _ in 0..3 {
        let (status, body) = send(&app, Method::POST, "/api/v1/scenarios/wizard", None).await;
        assert_eq!(status, StatusCode::OK);
        ids.push(body["data"]["id"].as_str().unwrap().to_string());
    }

    let uri = |id: &str| format!("/api/v1/scenarios/wizard/{id}");
    let (status, _) = send(&app, Method::GET, &uri(&ids[0]), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    for id in &ids[1..] {
        let (status, _) = send(&app, Method::GET, &uri(id), None).await;
        assert_eq!(status, StatusCode::OK);
    }
}

#[tokio::test]
async fn test_wizard_submit_rejects_selections_cleared_on_last_step() {
    let (app, store) = app();
    let (_, body) = send(&app, Method::POST, "/api/v1/scenarios/wizard", None).await;
    let base = format!("/api/v1/scenarios/wizard/{}", body["data"]["id"].as_str().unwrap());

    let steps = [
        json!({"action": "basic_info", "name": "Q2 Review"}),
        json!({"action": "toggle_lob", "lob_id": 1}),
        json!({"action": "toggle_space", "space_id": 5}),
    ];
    for edit in steps {
        send(&app, Method::PATCH, &base, Some(edit)).await;
        let (status, _) = send(&app, Method::POST, &format!("{base}/next"), None).await;
        assert_eq!(status, StatusCode::OK);
    }
    let (status, _) = send(&app, Method::POST, &format!("{base}/next"), None).await;
    assert_eq!(status, StatusCode::OK);

    send(&app, Method::PATCH, &base, Some(json!({"action": "toggle_lob", "lob_id": 1}))).await;
    let (status, body) = send(&app, Method::POST, &format!("{base}/submit"), None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["message"], "Please select at least one line of business");
    assert_eq!(store.row_count(Table::Scenarios), 0);
}
