mod common;

use axum::http::StatusCode;
use common::{ok, plan_json, rejected, TestConsole};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

async fn mount_catalogue(console: &TestConsole) {
    Mock::given(method("GET"))
        .and(path("/api/subscription/plans"))
        .and(query_param("status", "1"))
        .respond_with(ok(json!([plan_json(2, "Starter", 1), plan_json(3, "Pro", 1)])))
        .mount(&console.api)
        .await;
}

#[tokio::test]
async fn catalogue_renders_even_when_quota_snapshot_fails() {
    let console = TestConsole::spawn().await;
    mount_catalogue(&console).await;
    Mock::given(method("GET"))
        .and(path("/api/subscription/quotas"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&console.api)
        .await;

    let response = console.get("/purchase").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Starter"));
    assert!(response.body.contains("gpt-4 — 100 uses"));
    assert!(!response.body.contains("Your current quotas"));
    assert!(!response.body.contains("toast-error"));
}

#[tokio::test]
async fn current_quotas_are_shown_when_present() {
    let console = TestConsole::spawn().await;
    mount_catalogue(&console).await;
    Mock::given(method("GET"))
        .and(path("/api/subscription/quotas"))
        .respond_with(ok(json!({
            "quotas": {"gpt-4": {"total": 100, "used": 25, "remaining": 75}},
            "subscription_count": 1,
        })))
        .mount(&console.api)
        .await;

    let response = console.get("/purchase").await;

    assert!(response.body.contains("Your current quotas"));
    assert!(response.body.contains("75/100"));
}

#[tokio::test]
async fn catalogue_failure_surfaces_as_a_toast() {
    let console = TestConsole::spawn().await;
    Mock::given(method("GET"))
        .and(path("/api/subscription/plans"))
        .respond_with(rejected("Catalogue unavailable"))
        .mount(&console.api)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/subscription/quotas"))
        .respond_with(ok(json!({"quotas": {}, "subscription_count": 0})))
        .mount(&console.api)
        .await;

    let response = console.get("/purchase").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("toast-error"));
    assert!(response.body.contains("Catalogue unavailable"));
}

#[tokio::test]
async fn confirm_modal_offers_payment_methods() {
    let console = TestConsole::spawn().await;
    Mock::given(method("GET"))
        .and(path("/api/subscription/plans/3"))
        .respond_with(ok(plan_json(3, "Pro", 1)))
        .mount(&console.api)
        .await;

    let response = console.get("/purchase/plans/3").await;

    assert_eq!(response.status, StatusCode::OK);
    for code in ["balance", "wechat", "alipay"] {
        assert!(response.body.contains(&format!("value=\"{}\"", code)));
    }
    assert!(response.body.contains("name=\"plan_id\" value=\"3\""));
}

#[tokio::test]
async fn purchase_requires_a_payment_method() {
    let console = TestConsole::spawn().await;
    Mock::given(method("POST"))
        .and(path("/api/subscription/purchase"))
        .respond_with(ok(json!({})))
        .expect(0)
        .mount(&console.api)
        .await;

    let response = console.submit("POST", "/purchase", "plan_id=3").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body.contains("Choose a payment method"));
}

#[tokio::test]
async fn purchase_reloads_only_the_quota_panel() {
    let console = TestConsole::spawn().await;
    Mock::given(method("POST"))
        .and(path("/api/subscription/purchase"))
        .and(body_json(json!({"plan_id": 3, "payment_method": "wechat"})))
        .respond_with(ok(json!({"subscription": {"id": 77}, "payment_id": "pay_123"})))
        .expect(1)
        .mount(&console.api)
        .await;

    let response = console
        .submit("POST", "/purchase", "plan_id=3&payment_method=wechat")
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header("hx-trigger"), Some("quotas-refresh"));
    assert!(response.body.contains("Purchase succeeded"));
}

#[tokio::test]
async fn rejected_purchase_shows_the_server_message() {
    let console = TestConsole::spawn().await;
    Mock::given(method("POST"))
        .and(path("/api/subscription/purchase"))
        .respond_with(rejected("Insufficient balance"))
        .mount(&console.api)
        .await;

    let response = console
        .submit("POST", "/purchase", "plan_id=3&payment_method=balance")
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("Insufficient balance"));
}
