use crate::error::ConsoleError;
use crate::models::{PageRequest, Pager};
use crate::views::subscriptions::{SubscriptionDetailView, SubscriptionRow};
use crate::AppState;
use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;

#[derive(Template)]
#[template(path = "pages/subscriptions.html")]
pub struct SubscriptionsTemplate {
    pub current_page: &'static str,
}

#[derive(Template)]
#[template(path = "fragments/subscription_table.html")]
pub struct SubscriptionTableTemplate {
    pub rows: Vec<SubscriptionRow>,
    pub pager: Pager,
}

#[derive(Template)]
#[template(path = "fragments/subscription_detail.html")]
pub struct SubscriptionDetailTemplate {
    pub detail: SubscriptionDetailView,
}

#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
}

pub async fn subscriptions_page() -> impl IntoResponse {
    SubscriptionsTemplate {
        current_page: "subscriptions",
    }
}

pub async fn subscription_table(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<SubscriptionTableTemplate, ConsoleError> {
    let request = PageRequest::for_page(params.page.unwrap_or(1), state.ui.items_per_page);
    let page = state.api.list_user_subscriptions(request).await?;
    let now = Utc::now().timestamp();

    Ok(SubscriptionTableTemplate {
        rows: page
            .subscriptions
            .iter()
            .map(|s| SubscriptionRow::new(s, state.currency(), now))
            .collect(),
        pager: Pager::new(request, page.total),
    })
}

/// Detail modal. The API has no single-subscription read, so the row is taken
/// from the page it was listed on. Purchases made since then push rows towards
/// later pages and cleanups pull them back, so the next page and then the
/// previous one are searched before giving up.
pub async fn subscription_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<PageParams>,
) -> Result<SubscriptionDetailTemplate, ConsoleError> {
    let listed_on = params.page.unwrap_or(1).max(1);
    let mut candidates = vec![listed_on, listed_on + 1];
    if listed_on > 1 {
        candidates.push(listed_on - 1);
    }

    for page_index in candidates {
        let request = PageRequest::for_page(page_index, state.ui.items_per_page);
        let page = state.api.list_user_subscriptions(request).await?;
        if let Some(subscription) = page.subscriptions.iter().find(|s| s.id == id) {
            return Ok(SubscriptionDetailTemplate {
                detail: SubscriptionDetailView::new(subscription, state.currency()),
            });
        }
    }

    Err(ConsoleError::NotFound(
        "Subscription not found, refresh the list".to_string(),
    ))
}
