#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Request, StatusCode},
    Router,
};
use secrecy::Secret;
use serde_json::{json, Value};
use subscription_console::config::{SubscriptionApiSettings, UiSettings};
use subscription_console::services::SubscriptionClient;
use subscription_console::startup::build_router;
use subscription_console::AppState;
use tower::util::ServiceExt;
use wiremock::{MockServer, ResponseTemplate};

pub const ADMIN_TOKEN: &str = "admin-token";

/// Console router wired to a mocked subscription API.
pub struct TestConsole {
    pub api: MockServer,
    pub router: Router,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

impl TestConsole {
    pub async fn spawn() -> Self {
        let api = MockServer::start().await;
        let settings = SubscriptionApiSettings {
            url: api.uri(),
            access_token: Some(Secret::new(ADMIN_TOKEN.to_string())),
        };
        let state = AppState::new(SubscriptionClient::new(settings), UiSettings::default());
        let router = build_router(state, "static");
        Self { api, router }
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn submit(&self, method: &str, uri: &str, form: &str) -> TestResponse {
        self.send(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .header("HX-Request", "true")
                .body(Body::from(form.to_string()))
                .unwrap(),
        )
        .await
    }
}

/// `{success: true, data}` envelope.
pub fn ok(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "success": true,
        "message": "",
        "data": data,
    }))
}

/// `{success: false, message}` envelope.
pub fn rejected(message: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "success": false,
        "message": message,
    }))
}

pub fn plan_json(id: i64, name: &str, status: i32) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": "",
        "price": 29.9,
        "duration": 30,
        "status": status,
        "model_quotas": "{\"gpt-4\": 100}",
        "created_time": 1_704_067_200,
    })
}
