//! Stats dashboard, windowed report and maintenance actions.

use crate::error::ConsoleError;
use crate::forms::ReportRangeQuery;
use crate::models::ReportWindow;
use crate::views::htmx::{events, notify};
use crate::views::stats::{OverviewView, ReportView};
use crate::AppState;
use askama::Template;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};

#[derive(Template)]
#[template(path = "pages/stats.html")]
pub struct StatsTemplate {
    pub current_page: &'static str,
}

#[derive(Template)]
#[template(path = "fragments/stats_panel.html")]
pub struct StatsPanelTemplate {
    pub overview: Option<OverviewView>,
    pub report: Option<ReportView>,
    /// Each failed load becomes an out-of-band error toast.
    pub errors: Vec<String>,
}

#[derive(Template)]
#[template(path = "fragments/report.html")]
pub struct ReportTemplate {
    pub report: ReportView,
}

pub async fn stats_page() -> impl IntoResponse {
    StatsTemplate {
        current_page: "stats",
    }
}

/// Overview plus the all-time report, loaded together.
pub async fn stats_panel(State(state): State<AppState>) -> StatsPanelTemplate {
    let window = ReportWindow::ALL_TIME;
    let (stats, report) = tokio::join!(state.api.system_stats(), state.api.report(window));
    let mut errors = Vec::new();

    let overview = match stats {
        Ok(stats) => Some(OverviewView::new(&stats, state.currency())),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load system stats");
            errors.push(e.to_string());
            None
        }
    };
    let report = match report {
        Ok(report) => Some(ReportView::new(&report, window, state.currency())),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load report");
            errors.push(e.to_string());
            None
        }
    };

    StatsPanelTemplate {
        overview,
        report,
        errors,
    }
}

pub async fn report(
    State(state): State<AppState>,
    Query(range): Query<ReportRangeQuery>,
) -> Result<ReportTemplate, ConsoleError> {
    let window = range.window()?;
    let report = state.api.report(window).await?;
    Ok(ReportTemplate {
        report: ReportView::new(&report, window, state.currency()),
    })
}

pub async fn run_monitor(State(state): State<AppState>) -> Result<Response, ConsoleError> {
    state.api.run_quota_monitor().await?;
    Ok(notify("Quota monitor finished", &[events::STATS_REFRESH]))
}

pub async fn cleanup_expired(State(state): State<AppState>) -> Result<Response, ConsoleError> {
    state.api.cleanup_expired().await?;
    Ok(notify(
        "Expired subscriptions cleaned up",
        &[events::STATS_REFRESH, events::SUBSCRIPTIONS_REFRESH],
    ))
}
