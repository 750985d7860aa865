mod common;

use axum::http::StatusCode;
use chrono::Utc;
use common::{ok, TestConsole};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::Mock;

fn subscription_json(id: i64, status: i32, end_time: i64, used_quotas: &str) -> Value {
    json!({
        "id": id,
        "user_id": 11,
        "user": {"id": 11, "username": "alice"},
        "subscription_plan": {
            "id": 2,
            "name": "Pro",
            "model_quotas": "{\"gpt-4\": 100, \"gpt-4o\": 100}",
            "status": 1,
        },
        "purchase_price": 29.9,
        "payment_method": "alipay",
        "start_time": 1_704_067_200,
        "end_time": end_time,
        "status": status,
        "model_quotas": "{\"gpt-4\": 40, \"gpt-4o\": 100}",
        "used_quotas": used_quotas,
        "created_time": 1_704_067_200,
    })
}

#[tokio::test]
async fn pager_requests_the_clicked_page() {
    let console = TestConsole::spawn().await;
    let later = Utc::now().timestamp() + 30 * 86_400;
    Mock::given(method("GET"))
        .and(path("/api/subscription/admin/users"))
        .and(query_param("page", "2"))
        .and(query_param("page_size", "10"))
        .respond_with(ok(json!({
            "subscriptions": [subscription_json(14, 1, later, "{\"gpt-4\": 60}")],
            "total": 12,
            "page": 2,
            "page_size": 10,
        })))
        .expect(1)
        .mount(&console.api)
        .await;

    let response = console.get("/admin/subscriptions/table?page=2").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("alice"));
    assert!(response.body.contains("page 2 of 2"));
    assert!(response.body.contains("usage-normal"));
    assert!(response.body.contains("30%"));
    assert!(response.body.contains("gpt-4: 60/100 (remaining 40)"));
    assert!(response.body.contains("/admin/subscriptions/14?page=2"));
}

#[tokio::test]
async fn lapsed_active_subscription_shows_as_expired() {
    let console = TestConsole::spawn().await;
    let yesterday = Utc::now().timestamp() - 86_400;
    Mock::given(method("GET"))
        .and(path("/api/subscription/admin/users"))
        .respond_with(ok(json!({
            "subscriptions": [subscription_json(3, 1, yesterday, "{}")],
            "total": 1,
        })))
        .mount(&console.api)
        .await;

    let response = console.get("/admin/subscriptions/table").await;

    assert!(response.body.contains("tag-orange\">Expired"));
    assert!(response.body.contains("tag-red\">Expired"));
    assert!(!response.body.contains(">Active<"));
}

#[tokio::test]
async fn malformed_usage_renders_a_dash() {
    let console = TestConsole::spawn().await;
    let later = Utc::now().timestamp() + 86_400;
    Mock::given(method("GET"))
        .and(path("/api/subscription/admin/users"))
        .respond_with(ok(json!({
            "subscriptions": [subscription_json(3, 1, later, "{oops")],
            "total": 1,
        })))
        .mount(&console.api)
        .await;

    let response = console.get("/admin/subscriptions/table").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(!response.body.contains("<progress"));
}

#[tokio::test]
async fn detail_modal_lists_model_usage() {
    let console = TestConsole::spawn().await;
    let later = Utc::now().timestamp() + 86_400;
    Mock::given(method("GET"))
        .and(path("/api/subscription/admin/users"))
        .and(query_param("page", "1"))
        .respond_with(ok(json!({
            "subscriptions": [subscription_json(9, 1, later, "{\"gpt-4\": 60}")],
            "total": 1,
        })))
        .mount(&console.api)
        .await;

    let response = console.get("/admin/subscriptions/9?page=1").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Alipay"));
    assert!(response.body.contains("60/100 (remaining 40)"));
    assert!(response.body.contains("0/100 (remaining 100)"));
}

#[tokio::test]
async fn detail_follows_a_row_pushed_to_the_next_page() {
    let console = TestConsole::spawn().await;
    let later = Utc::now().timestamp() + 86_400;
    Mock::given(method("GET"))
        .and(path("/api/subscription/admin/users"))
        .and(query_param("page", "2"))
        .respond_with(ok(json!({
            "subscriptions": [subscription_json(20, 1, later, "{}")],
            "total": 21,
        })))
        .expect(1)
        .mount(&console.api)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/subscription/admin/users"))
        .and(query_param("page", "3"))
        .respond_with(ok(json!({
            "subscriptions": [subscription_json(9, 1, later, "{\"gpt-4\": 60}")],
            "total": 21,
        })))
        .expect(1)
        .mount(&console.api)
        .await;

    let response = console.get("/admin/subscriptions/9?page=2").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("60/100 (remaining 40)"));
}

#[tokio::test]
async fn detail_of_unknown_subscription_is_not_found() {
    let console = TestConsole::spawn().await;
    Mock::given(method("GET"))
        .and(path("/api/subscription/admin/users"))
        .respond_with(ok(json!({"subscriptions": null, "total": 0})))
        .mount(&console.api)
        .await;

    let response = console.get("/admin/subscriptions/404").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.header("hx-retarget"), Some("#toasts"));
}
