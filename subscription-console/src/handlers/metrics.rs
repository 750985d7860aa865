use axum::response::IntoResponse;
use console_core::observability::metrics::render_metrics;

pub async fn metrics() -> impl IntoResponse {
    render_metrics()
}
