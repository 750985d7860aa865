//! Plan list, editor and plan actions.

use crate::error::ConsoleError;
use crate::forms::PlanForm;
use crate::models::plan::normalize_status_filter;
use crate::models::{PageRequest, Pager, PlanStatus};
use crate::views::htmx::{events, notify};
use crate::views::plans::{PlanEditorView, PlanRow, QuotaRowView, COMMON_MODELS};
use crate::AppState;
use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use serde::Deserialize;

#[derive(Template)]
#[template(path = "pages/plans.html")]
pub struct PlansTemplate {
    pub current_page: &'static str,
}

#[derive(Template)]
#[template(path = "fragments/plan_table.html")]
pub struct PlanTableTemplate {
    pub rows: Vec<PlanRow>,
    /// `None` for keyword searches, which are unpaged.
    pub pager: Option<Pager>,
    pub keyword: String,
}

#[derive(Template)]
#[template(path = "fragments/plan_editor.html")]
pub struct PlanEditorTemplate {
    pub plan: PlanEditorView,
    pub models: &'static [&'static str],
}

#[derive(Template)]
#[template(path = "fragments/quota_row.html")]
pub struct QuotaRowTemplate {
    pub row: QuotaRowView,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlanTableParams {
    pub page: Option<u32>,
    pub keyword: Option<String>,
    /// Kept as text: the filter select may post an empty value.
    pub status: Option<String>,
}

pub async fn plans_page() -> impl IntoResponse {
    PlansTemplate {
        current_page: "plans",
    }
}

/// Paged listing, or an unpaged search when a keyword is present.
pub async fn plan_table(
    State(state): State<AppState>,
    Query(params): Query<PlanTableParams>,
) -> Result<PlanTableTemplate, ConsoleError> {
    let status = normalize_status_filter(
        params
            .status
            .as_deref()
            .and_then(|s| s.trim().parse().ok()),
    );
    let keyword = params.keyword.unwrap_or_default().trim().to_string();

    if !keyword.is_empty() {
        let plans = state.api.search_plans(&keyword, status).await?;
        return Ok(PlanTableTemplate {
            rows: plans
                .iter()
                .map(|p| PlanRow::new(p, state.currency()))
                .collect(),
            pager: None,
            keyword,
        });
    }

    let request = PageRequest::for_page(params.page.unwrap_or(1), state.ui.items_per_page);
    let page = state.api.list_plans_page(request, status).await?;

    Ok(PlanTableTemplate {
        rows: page
            .plans
            .iter()
            .map(|p| PlanRow::new(p, state.currency()))
            .collect(),
        pager: Some(Pager::new(request, page.total)),
        keyword,
    })
}

pub async fn new_plan_form() -> PlanEditorTemplate {
    PlanEditorTemplate {
        plan: PlanEditorView::create(),
        models: COMMON_MODELS,
    }
}

pub async fn edit_plan_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<PlanEditorTemplate, ConsoleError> {
    let plan = state.api.get_plan(id).await?;
    Ok(PlanEditorTemplate {
        plan: PlanEditorView::edit(&plan),
        models: COMMON_MODELS,
    })
}

/// A blank model-quota row for the editor.
pub async fn quota_row() -> QuotaRowTemplate {
    QuotaRowTemplate {
        row: QuotaRowView::blank(),
    }
}

pub async fn create_plan(
    State(state): State<AppState>,
    Form(form): Form<PlanForm>,
) -> Result<Response, ConsoleError> {
    let payload = form.into_payload()?;
    state.api.create_plan(&payload).await?;
    Ok(notify("Created", &[events::PLANS_REFRESH]))
}

pub async fn update_plan(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<PlanForm>,
) -> Result<Response, ConsoleError> {
    let payload = form.into_payload()?;
    state.api.update_plan(id, &payload).await?;
    Ok(notify("Updated", &[events::PLANS_REFRESH]))
}

pub async fn enable_plan(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ConsoleError> {
    set_status(&state, id, PlanStatus::Enabled).await
}

pub async fn disable_plan(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ConsoleError> {
    set_status(&state, id, PlanStatus::Disabled).await
}

async fn set_status(state: &AppState, id: i64, status: PlanStatus) -> Result<Response, ConsoleError> {
    state.api.set_plan_status(id, status).await?;
    Ok(notify("Operation succeeded", &[events::PLANS_REFRESH]))
}

pub async fn delete_plan(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ConsoleError> {
    state.api.delete_plan(id).await?;
    Ok(notify("Deleted", &[events::PLANS_REFRESH]))
}
