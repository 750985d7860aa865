use axum::{
    middleware::from_fn,
    routing::{get, post, put},
    Router,
};
use console_core::middleware::{
    metrics::metrics_middleware, security_headers::security_headers_middleware,
    tracing::request_id_middleware,
};
use console_core::observability::REQUEST_ID_HEADER;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    app::{empty, health_check, index},
    metrics::metrics,
    plans::{
        create_plan, delete_plan, disable_plan, edit_plan_form, enable_plan, new_plan_form,
        plan_table, plans_page, quota_row, update_plan,
    },
    purchase::{purchase, purchase_confirm, purchase_page, purchase_quotas},
    stats::{cleanup_expired, report, run_monitor, stats_page, stats_panel},
    subscriptions::{subscription_detail, subscription_table, subscriptions_page},
};
use crate::AppState;

pub fn build_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .route("/ui/empty", get(empty))
        // plans
        .route("/admin/plans", get(plans_page).post(create_plan))
        .route("/admin/plans/table", get(plan_table))
        .route("/admin/plans/new", get(new_plan_form))
        .route("/admin/plans/editor/row", get(quota_row))
        .route("/admin/plans/:id", put(update_plan).delete(delete_plan))
        .route("/admin/plans/:id/edit", get(edit_plan_form))
        .route("/admin/plans/:id/enable", post(enable_plan))
        .route("/admin/plans/:id/disable", post(disable_plan))
        // subscriptions
        .route("/admin/subscriptions", get(subscriptions_page))
        .route("/admin/subscriptions/table", get(subscription_table))
        .route("/admin/subscriptions/:id", get(subscription_detail))
        // purchase
        .route("/purchase", get(purchase_page).post(purchase))
        .route("/purchase/quotas", get(purchase_quotas))
        .route("/purchase/plans/:id", get(purchase_confirm))
        // stats
        .route("/admin/stats", get(stats_page))
        .route("/admin/stats/panel", get(stats_panel))
        .route("/admin/stats/report", get(report))
        .route("/admin/stats/monitor", post(run_monitor))
        .route("/admin/stats/cleanup", post(cleanup_expired))
        // route_layer so the matched path template labels the metrics
        .route_layer(from_fn(metrics_middleware))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(from_fn(security_headers_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        // outermost, so the TraceLayer span sees the id
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}
