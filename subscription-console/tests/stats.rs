mod common;

use axum::http::StatusCode;
use common::{ok, rejected, TestConsole};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::Mock;

fn report_json() -> serde_json::Value {
    json!({
        "start_time": 0,
        "end_time": 0,
        "total_sales": 5,
        "total_revenue": 149.5,
        "total_active": 4,
        "total_expired": 1,
        "total_canceled": 0,
        "stats": {"2": {
            "plan_name": "Pro",
            "total_sales": 5,
            "total_revenue": 149.5,
            "active_count": 4,
            "expired_count": 1,
            "canceled_count": 0,
        }},
    })
}

#[tokio::test]
async fn panel_loads_stats_and_all_time_report() {
    let console = TestConsole::spawn().await;
    Mock::given(method("GET"))
        .and(path("/api/subscription/admin/system-stats"))
        .respond_with(ok(json!({
            "total_subscriptions": 8,
            "total_revenue": 239.2,
            "status_counts": [{"status": 1, "count": 5}, {"status": 2, "count": 3}],
            "plan_stats": {"2": {"plan_id": 2, "plan_name": "Pro", "total_sales": 8, "total_revenue": 239.2}},
        })))
        .expect(1)
        .mount(&console.api)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/subscription/admin/report"))
        .and(query_param("start_time", "0"))
        .and(query_param("end_time", "0"))
        .respond_with(ok(report_json()))
        .expect(1)
        .mount(&console.api)
        .await;

    let response = console.get("/admin/stats/panel").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("¥239.20"));
    assert!(response.body.contains("5 (62.5%)"));
    assert!(response.body.contains("3 (37.5%)"));
    assert!(response.body.contains("All time"));
    assert!(response.body.contains("¥149.50"));
}

#[tokio::test]
async fn failed_stats_still_render_the_report() {
    let console = TestConsole::spawn().await;
    Mock::given(method("GET"))
        .and(path("/api/subscription/admin/system-stats"))
        .respond_with(rejected("Stats are being rebuilt"))
        .mount(&console.api)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/subscription/admin/report"))
        .respond_with(ok(report_json()))
        .mount(&console.api)
        .await;

    let response = console.get("/admin/stats/panel").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Stats are being rebuilt"));
    assert!(response.body.contains("hx-swap-oob"));
    assert!(response.body.contains("All time"));
}

#[tokio::test]
async fn date_range_maps_to_unix_seconds() {
    let console = TestConsole::spawn().await;
    Mock::given(method("GET"))
        .and(path("/api/subscription/admin/report"))
        .and(query_param("start_time", "1704067200"))
        .and(query_param("end_time", "1706745599"))
        .respond_with(ok(report_json()))
        .expect(1)
        .mount(&console.api)
        .await;

    let response = console
        .get("/admin/stats/report?start=2024-01-01&end=2024-01-31")
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("2024-01-01 ~ 2024-01-31"));
}

#[tokio::test]
async fn inverted_range_is_rejected_before_any_call() {
    let console = TestConsole::spawn().await;
    Mock::given(method("GET"))
        .and(path("/api/subscription/admin/report"))
        .respond_with(ok(report_json()))
        .expect(0)
        .mount(&console.api)
        .await;

    let response = console
        .get("/admin/stats/report?start=2024-02-01&end=2024-01-01")
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body.contains("Start date must not be after end date"));
}

#[tokio::test]
async fn maintenance_actions_refresh_the_dashboard() {
    let console = TestConsole::spawn().await;
    Mock::given(method("POST"))
        .and(path("/api/subscription/admin/monitor"))
        .respond_with(ok(json!(null)))
        .expect(1)
        .mount(&console.api)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/subscription/admin/cleanup"))
        .respond_with(ok(json!(null)))
        .expect(1)
        .mount(&console.api)
        .await;

    let monitor = console.submit("POST", "/admin/stats/monitor", "").await;
    assert_eq!(monitor.status, StatusCode::OK);
    assert_eq!(monitor.header("hx-trigger"), Some("stats-refresh"));

    let cleanup = console.submit("POST", "/admin/stats/cleanup", "").await;
    assert_eq!(cleanup.status, StatusCode::OK);
    assert_eq!(
        cleanup.header("hx-trigger"),
        Some("stats-refresh, subscriptions-refresh")
    );
}
