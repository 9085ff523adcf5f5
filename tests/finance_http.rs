//! Router-level tests for the finance endpoints.
//!
//! Exercises the full stack over in-memory adapters: auth middleware, role
//! guard, JSON handling, and handler wiring.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use secrecy::SecretString;
use serde_json::{json, Value};
use tower::ServiceExt;

use banda_hub::adapters::auth::MockAuthenticator;
use banda_hub::adapters::http::{api_router, AppState};
use banda_hub::adapters::memory::{
    InMemoryContributionRepository, InMemoryCredentialRepository, InMemoryDepositRepository,
    InMemoryExpenseRepository, InMemoryInviteKeyRepository, InMemoryMemberRepository,
    InMemoryObjectStorage, RecordingMailer,
};
use banda_hub::domain::foundation::Role;
use banda_hub::domain::invite::MasterKeys;
use banda_hub::domain::member::{Member, MemberProfile};
use banda_hub::ports::MemberRepository;

const TREASURER_TOKEN: &str = "treasurer-token";
const ADMIN_TOKEN: &str = "admin-token";

fn profile(name: &str) -> MemberProfile {
    MemberProfile {
        name: name.to_string(),
        instrument: "Trombone".to_string(),
        email: format!("{}@banda.example.com", name.to_lowercase()),
        city: "Lisboa".to_string(),
        state: "LX".to_string(),
        phone: "+351 900 000 000".to_string(),
        tefa: None,
        terms_version: "2024-01".to_string(),
        terms_accepted: true,
    }
}

struct TestApp {
    router: Router,
    members: Arc<InMemoryMemberRepository>,
}

fn test_app() -> TestApp {
    let authenticator = MockAuthenticator::new()
        .with_admin(TREASURER_TOKEN, "treasurer-1", Role::Financeiro)
        .with_admin(ADMIN_TOKEN, "admin-1", Role::Admin);
    let members = Arc::new(InMemoryMemberRepository::new());

    let state = AppState {
        authenticator: Arc::new(authenticator),
        credentials: Arc::new(InMemoryCredentialRepository::new()),
        invites: Arc::new(InMemoryInviteKeyRepository::new()),
        members: members.clone(),
        contributions: Arc::new(InMemoryContributionRepository::new()),
        deposits: Arc::new(InMemoryDepositRepository::new()),
        expenses: Arc::new(InMemoryExpenseRepository::new()),
        mailer: Arc::new(RecordingMailer::new()),
        storage: Arc::new(InMemoryObjectStorage::new()),
        master_keys: MasterKeys::new(Vec::new()),
        credential_pepper: SecretString::new("test-pepper".to_string()),
        notify_email: "board@banda.example.com".to_string(),
    };

    TestApp {
        router: api_router(state),
        members,
    }
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

fn post_json(uri: &str, token: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn put_json(uri: &str, token: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn delete(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn finance_endpoints_require_a_token() {
    let app = test_app();
    let response = app
        .router
        .oneshot(get("/api/finance/contributions", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_role_cannot_touch_the_ledger() {
    let app = test_app();
    let id = uuid::Uuid::new_v4();

    // Every finance route, with a body the handler would accept.
    let requests = vec![
        get("/api/finance/contributions", Some(ADMIN_TOKEN)),
        post_json(
            "/api/finance/contributions",
            ADMIN_TOKEN,
            json!({"member_id": id, "year": 2025, "month": 3, "amount": "50.00"}),
        ),
        put_json(
            &format!("/api/finance/contributions/{}", id),
            ADMIN_TOKEN,
            json!({}),
        ),
        delete(&format!("/api/finance/contributions/{}", id), ADMIN_TOKEN),
        get("/api/finance/deposits", Some(ADMIN_TOKEN)),
        post_json(
            "/api/finance/deposits",
            ADMIN_TOKEN,
            json!({"member_id": id, "amount": "25.00", "deposit_date": "2025-03-10"}),
        ),
        put_json(
            &format!("/api/finance/deposits/{}", id),
            ADMIN_TOKEN,
            json!({}),
        ),
        delete(&format!("/api/finance/deposits/{}", id), ADMIN_TOKEN),
        get("/api/finance/expenses", Some(ADMIN_TOKEN)),
        post_json(
            "/api/finance/expenses",
            ADMIN_TOKEN,
            json!({"description": "Strings", "amount": "12.00", "expense_date": "2025-03-10"}),
        ),
        put_json(
            &format!("/api/finance/expenses/{}", id),
            ADMIN_TOKEN,
            json!({}),
        ),
        delete(&format!("/api/finance/expenses/{}", id), ADMIN_TOKEN),
        get("/api/finance/reports/payments", Some(ADMIN_TOKEN)),
        get(
            &format!("/api/finance/reports/member/{}", id),
            Some(ADMIN_TOKEN),
        ),
        get("/api/finance/receipts", Some(ADMIN_TOKEN)),
        Request::builder()
            .method("POST")
            .uri("/api/finance/receipts")
            .header(header::AUTHORIZATION, format!("Bearer {}", ADMIN_TOKEN))
            .header(
                header::CONTENT_TYPE,
                "multipart/form-data; boundary=receipt",
            )
            .body(Body::from("--receipt--\r\n"))
            .unwrap(),
        delete("/api/finance/receipts/recibo.pdf", ADMIN_TOKEN),
    ];

    for request in requests {
        let method = request.method().clone();
        let uri = request.uri().clone();
        let response = app.router.clone().oneshot(request).await.unwrap();
        assert_eq!(
            response.status(),
            StatusCode::FORBIDDEN,
            "{} {} let the admin role through",
            method,
            uri
        );
    }
}

#[tokio::test]
async fn contribution_create_list_delete_round_trip() {
    let app = test_app();
    let member_id = uuid::Uuid::new_v4();

    let response = app
        .router
        .clone()
        .oneshot(post_json(
            "/api/finance/contributions",
            TREASURER_TOKEN,
            json!({"member_id": member_id, "year": 2025, "month": 3, "amount": "50.00"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["member_id"], member_id.to_string());
    assert_eq!(created["status"], "pending");
    let id = created["id"].as_str().unwrap().to_string();

    let response = app
        .router
        .clone()
        .oneshot(get("/api/finance/contributions", Some(TREASURER_TOKEN)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let listed = body_json(response).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let response = app
        .router
        .clone()
        .oneshot(delete(
            &format!("/api/finance/contributions/{}", id),
            TREASURER_TOKEN,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .router
        .oneshot(get("/api/finance/contributions", Some(TREASURER_TOKEN)))
        .await
        .unwrap();
    let listed = body_json(response).await;
    assert!(listed.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn contribution_update_flips_status_and_records_editor() {
    let app = test_app();
    let member_id = uuid::Uuid::new_v4();

    let response = app
        .router
        .clone()
        .oneshot(post_json(
            "/api/finance/contributions",
            TREASURER_TOKEN,
            json!({"member_id": member_id, "year": 2025, "month": 1, "amount": "40.00"}),
        ))
        .await
        .unwrap();
    let id = body_json(response).await["id"].as_str().unwrap().to_string();

    let response = app
        .router
        .oneshot(put_json(
            &format!("/api/finance/contributions/{}", id),
            TREASURER_TOKEN,
            json!({"status": "paid"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["status"], "paid");
    assert_eq!(updated["updated_by"], "treasurer-1");
}

#[tokio::test]
async fn deposit_and_expense_updates_record_the_editor() {
    let app = test_app();
    let member_id = uuid::Uuid::new_v4();

    let response = app
        .router
        .clone()
        .oneshot(post_json(
            "/api/finance/deposits",
            TREASURER_TOKEN,
            json!({"member_id": member_id, "amount": "25.00", "deposit_date": "2025-03-10"}),
        ))
        .await
        .unwrap();
    let created = body_json(response).await;
    assert_eq!(created["updated_by"], Value::Null);
    let deposit_id = created["id"].as_str().unwrap().to_string();

    let response = app
        .router
        .clone()
        .oneshot(put_json(
            &format!("/api/finance/deposits/{}", deposit_id),
            TREASURER_TOKEN,
            json!({"amount": "30.00"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["amount"], "30.00");
    assert_eq!(updated["updated_by"], "treasurer-1");
    assert!(updated["updated_at"].is_string());

    let response = app
        .router
        .clone()
        .oneshot(post_json(
            "/api/finance/expenses",
            TREASURER_TOKEN,
            json!({"description": "Sheet music", "amount": "18.00", "expense_date": "2025-03-12"}),
        ))
        .await
        .unwrap();
    let expense_id = body_json(response).await["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .router
        .oneshot(put_json(
            &format!("/api/finance/expenses/{}", expense_id),
            TREASURER_TOKEN,
            json!({"category": "partituras"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["updated_by"], "treasurer-1");
    assert!(updated["updated_at"].is_string());
}

#[tokio::test]
async fn negative_amount_is_rejected() {
    let app = test_app();
    let member_id = uuid::Uuid::new_v4();

    let response = app
        .router
        .oneshot(post_json(
            "/api/finance/contributions",
            TREASURER_TOKEN,
            json!({"member_id": member_id, "year": 2025, "month": 3, "amount": "-5.00"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn deleting_a_missing_expense_is_404() {
    let app = test_app();
    let response = app
        .router
        .oneshot(delete(
            &format!("/api/finance/expenses/{}", uuid::Uuid::new_v4()),
            TREASURER_TOKEN,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn payment_report_covers_every_member() {
    let app = test_app();
    let ana = Member::register(profile("Ana")).unwrap();
    let bruno = Member::register(profile("Bruno")).unwrap();
    app.members.create(&ana).await.unwrap();
    app.members.create(&bruno).await.unwrap();

    let response = app
        .router
        .clone()
        .oneshot(post_json(
            "/api/finance/contributions",
            TREASURER_TOKEN,
            json!({"member_id": ana.id, "year": 2025, "month": 2, "amount": "50.00"}),
        ))
        .await
        .unwrap();
    let id = body_json(response).await["id"].as_str().unwrap().to_string();
    app.router
        .clone()
        .oneshot(put_json(
            &format!("/api/finance/contributions/{}", id),
            TREASURER_TOKEN,
            json!({"status": "paid"}),
        ))
        .await
        .unwrap();
    app.router
        .clone()
        .oneshot(post_json(
            "/api/finance/deposits",
            TREASURER_TOKEN,
            json!({
                "member_id": ana.id,
                "amount": "50.00",
                "deposit_date": "2025-02-15"
            }),
        ))
        .await
        .unwrap();

    let response = app
        .router
        .oneshot(get("/api/finance/reports/payments", Some(TREASURER_TOKEN)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let report = body_json(response).await;
    let rows = report.as_array().unwrap();
    assert_eq!(rows.len(), 2);

    let ana_row = rows
        .iter()
        .find(|r| r["member_id"] == ana.id.to_string())
        .unwrap();
    assert_eq!(ana_row["last_paid_period"], "2/2025");
    assert_eq!(ana_row["total_paid"], "50.00");

    let bruno_row = rows
        .iter()
        .find(|r| r["member_id"] == bruno.id.to_string())
        .unwrap();
    assert_eq!(bruno_row["last_paid_period"], Value::Null);
    assert_eq!(bruno_row["pending_contributions"], 0);
}

#[tokio::test]
async fn member_statement_only_lists_that_members_records() {
    let app = test_app();
    let ana = Member::register(profile("Ana")).unwrap();
    let bruno = Member::register(profile("Bruno")).unwrap();
    app.members.create(&ana).await.unwrap();
    app.members.create(&bruno).await.unwrap();

    for member in [&ana, &bruno] {
        app.router
            .clone()
            .oneshot(post_json(
                "/api/finance/deposits",
                TREASURER_TOKEN,
                json!({
                    "member_id": member.id,
                    "amount": "25.00",
                    "deposit_date": "2025-03-10"
                }),
            ))
            .await
            .unwrap();
    }

    let response = app
        .router
        .oneshot(get(
            &format!("/api/finance/reports/member/{}", ana.id),
            Some(TREASURER_TOKEN),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let statement = body_json(response).await;
    assert_eq!(statement["summary"]["member_id"], ana.id.to_string());
    assert_eq!(statement["deposits"].as_array().unwrap().len(), 1);
    assert_eq!(
        statement["deposits"][0]["member_id"],
        ana.id.to_string()
    );
}
