//! Plan catalogue, quota panel and the purchase itself.

use crate::error::ConsoleError;
use crate::forms::PurchaseForm;
use crate::models::PaymentMethod;
use crate::views::htmx::{events, notify};
use crate::views::purchase::{quota_balances, PlanCard, QuotaBalance};
use crate::AppState;
use askama::Template;
use axum::{
    extract::{Path, State},
    response::Response,
};
use axum_extra::extract::Form;

#[derive(Template)]
#[template(path = "pages/purchase.html")]
pub struct PurchaseTemplate {
    pub current_page: &'static str,
    pub cards: Vec<PlanCard>,
    pub balances: Vec<QuotaBalance>,
    /// Shown as an error toast when the catalogue could not be loaded.
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "fragments/purchase_quotas.html")]
pub struct PurchaseQuotasTemplate {
    pub balances: Vec<QuotaBalance>,
}

#[derive(Template)]
#[template(path = "fragments/purchase_confirm.html")]
pub struct PurchaseConfirmTemplate {
    pub card: PlanCard,
    pub methods: &'static [PaymentMethod],
}

/// Catalogue and quota snapshot are fetched together. A missing snapshot is
/// normal for users without a subscription, so only catalogue errors surface.
pub async fn purchase_page(State(state): State<AppState>) -> PurchaseTemplate {
    let (plans, quotas) = tokio::join!(state.api.list_active_plans(), state.api.quota_snapshot());

    let balances = match quotas {
        Ok(snapshot) => quota_balances(&snapshot),
        Err(e) => {
            tracing::debug!(error = %e, "No quota snapshot for purchase page");
            Vec::new()
        }
    };

    let (cards, error) = match plans {
        Ok(plans) => (
            plans
                .iter()
                .map(|p| PlanCard::new(p, state.currency()))
                .collect(),
            None,
        ),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load purchasable plans");
            (Vec::new(), Some(e.to_string()))
        }
    };

    PurchaseTemplate {
        current_page: "purchase",
        cards,
        balances,
        error,
    }
}

pub async fn purchase_quotas(State(state): State<AppState>) -> PurchaseQuotasTemplate {
    let balances = match state.api.quota_snapshot().await {
        Ok(snapshot) => quota_balances(&snapshot),
        Err(e) => {
            tracing::debug!(error = %e, "No quota snapshot");
            Vec::new()
        }
    };
    PurchaseQuotasTemplate { balances }
}

pub async fn purchase_confirm(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<PurchaseConfirmTemplate, ConsoleError> {
    let plan = state.api.get_plan(id).await?;
    Ok(PurchaseConfirmTemplate {
        card: PlanCard::new(&plan, state.currency()),
        methods: &PaymentMethod::ALL,
    })
}

pub async fn purchase(
    State(state): State<AppState>,
    Form(form): Form<PurchaseForm>,
) -> Result<Response, ConsoleError> {
    let request = form.into_request()?;
    state.api.purchase(&request).await?;
    Ok(notify("Purchase succeeded", &[events::QUOTAS_REFRESH]))
}
