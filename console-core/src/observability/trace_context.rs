//! Correlation headers for calls from the console to upstream APIs.
//!
//! Outbound requests carry the W3C `traceparent`/`tracestate` of the current
//! span (see https://www.w3.org/TR/trace-context/) and the `x-request-id` of
//! the inbound request being served, so one console click can be followed
//! through the upstream logs.

use opentelemetry::propagation::{Injector, TextMapPropagator};
use opentelemetry_sdk::propagation::TraceContextPropagator;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::future::Future;
use tracing::Span;
use tracing_opentelemetry::OpenTelemetrySpanExt;

/// Correlation id header, shared with the inbound middleware.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

tokio::task_local! {
    static REQUEST_ID: String;
}

/// Run `fut` with `request_id` visible to [`current_request_id`].
pub async fn scope_request_id<F>(request_id: String, fut: F) -> F::Output
where
    F: Future,
{
    REQUEST_ID.scope(request_id, fut).await
}

/// The request id of the inbound request being served on this task, if any.
pub fn current_request_id() -> Option<String> {
    REQUEST_ID.try_with(|id| id.clone()).ok()
}

struct HeaderInjector<'a>(&'a mut HeaderMap);

impl Injector for HeaderInjector<'_> {
    fn set(&mut self, key: &str, value: String) {
        if let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(key.as_bytes()),
            HeaderValue::from_str(&value),
        ) {
            self.0.insert(name, value);
        }
    }
}

/// Write `traceparent` (and `tracestate`) for the current span.
///
/// The propagator skips spans without a valid OpenTelemetry context, so
/// nothing is written outside an exported span.
pub fn inject_trace_context(headers: &mut HeaderMap) {
    let context = Span::current().context();
    TraceContextPropagator::new().inject_context(&context, &mut HeaderInjector(headers));
}

/// Trace context plus the request id: the explicit one, else the task-scoped one.
pub fn inject_trace_headers(headers: &mut HeaderMap, request_id: Option<&str>) {
    inject_trace_context(headers);

    let Some(id) = request_id.map(str::to_string).or_else(current_request_id) else {
        return;
    };
    if let Ok(value) = HeaderValue::from_str(&id) {
        headers.insert(REQUEST_ID_HEADER, value);
    }
}

/// A reqwest request that gets correlation headers injected when sent.
pub struct TracedRequest {
    request: reqwest::RequestBuilder,
}

impl TracedRequest {
    pub fn new(request: reqwest::RequestBuilder) -> Self {
        Self { request }
    }

    fn map(self, f: impl FnOnce(reqwest::RequestBuilder) -> reqwest::RequestBuilder) -> Self {
        Self {
            request: f(self.request),
        }
    }

    /// Append URL query parameters.
    pub fn query<T: serde::Serialize + ?Sized>(self, query: &T) -> Self {
        self.map(|r| r.query(query))
    }

    pub fn json<T: serde::Serialize + ?Sized>(self, body: &T) -> Self {
        self.map(|r| r.json(body))
    }

    pub fn bearer_auth<T: std::fmt::Display>(self, token: T) -> Self {
        self.map(|r| r.bearer_auth(token))
    }

    pub async fn send(self) -> Result<reqwest::Response, reqwest::Error> {
        let mut headers = HeaderMap::new();
        inject_trace_headers(&mut headers, None);
        self.request.headers(headers).send().await
    }
}

/// `reqwest::Client` constructors for [`TracedRequest`].
pub trait TracedClientExt {
    fn traced(&self, method: reqwest::Method, url: &str) -> TracedRequest;

    fn traced_get(&self, url: &str) -> TracedRequest {
        self.traced(reqwest::Method::GET, url)
    }

    fn traced_post(&self, url: &str) -> TracedRequest {
        self.traced(reqwest::Method::POST, url)
    }

    fn traced_put(&self, url: &str) -> TracedRequest {
        self.traced(reqwest::Method::PUT, url)
    }

    fn traced_delete(&self, url: &str) -> TracedRequest {
        self.traced(reqwest::Method::DELETE, url)
    }
}

impl TracedClientExt for reqwest::Client {
    fn traced(&self, method: reqwest::Method, url: &str) -> TracedRequest {
        TracedRequest::new(self.request(method, url))
    }
}
