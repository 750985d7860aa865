//! Client for the subscription REST API.
//!
//! Every endpoint answers `{success, message, data}`. Calls propagate trace
//! context and the request id, and carry the configured admin token.

use crate::config::SubscriptionApiSettings;
use crate::models::{
    ApiEnvelope, PageRequest, PlanPage, PlanPayload, PlanStatus, PlanStatusUpdate,
    PurchaseReceipt, PurchaseRequest, QuotaSnapshot, Report, ReportWindow, SubscriptionPage,
    SubscriptionPlan, SystemStats,
};
use console_core::observability::{TracedClientExt, TracedRequest};
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use thiserror::Error;
use tracing::instrument;

const API_PREFIX: &str = "/api/subscription";

#[derive(Debug, Error)]
pub enum ApiError {
    /// The call did not produce a readable envelope.
    #[error("{0}")]
    Transport(String),

    /// The server answered `success: false`.
    #[error("{0}")]
    Rejected(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(format!("Subscription service unreachable: {}", err))
    }
}

#[derive(Serialize)]
struct PlanListQuery {
    page: u32,
    page_size: u32,
    status: i32,
}

#[derive(Serialize)]
struct PlanSearchQuery<'a> {
    keyword: &'a str,
    status: i32,
}

pub struct SubscriptionClient {
    client: Client,
    settings: SubscriptionApiSettings,
}

impl SubscriptionClient {
    pub fn new(settings: SubscriptionApiSettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.settings.url
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}{}{}",
            self.settings.url.trim_end_matches('/'),
            API_PREFIX,
            path
        )
    }

    fn authorize(&self, request: TracedRequest) -> TracedRequest {
        match &self.settings.access_token {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        }
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: TracedRequest,
        url: &str,
    ) -> Result<Option<T>, ApiError> {
        let response = self.authorize(request).send().await.map_err(|e| {
            tracing::error!(url = %url, error = %e, "Subscription API request failed");
            ApiError::from(e)
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            tracing::error!(url = %url, error = %e, "Failed to read subscription API response");
            ApiError::from(e)
        })?;

        let envelope: ApiEnvelope<T> = match serde_json::from_slice(&body) {
            Ok(envelope) => envelope,
            Err(e) if status.is_success() => {
                tracing::error!(url = %url, error = %e, "Unreadable subscription API response");
                return Err(ApiError::Transport(format!("Unreadable response: {}", e)));
            }
            Err(_) => {
                tracing::error!(url = %url, status = %status, "Subscription API returned an error status");
                return Err(ApiError::Transport(format!(
                    "Subscription service returned HTTP {}",
                    status.as_u16()
                )));
            }
        };

        envelope.into_result().map_err(|message| {
            tracing::warn!(url = %url, message = %message, "Subscription API rejected the request");
            ApiError::Rejected(message)
        })
    }

    async fn get<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: Option<&Q>,
    ) -> Result<Option<T>, ApiError> {
        let url = self.url(path);
        let mut request = self.client.traced_get(&url);
        if let Some(query) = query {
            request = request.query(query);
        }
        self.execute(request, &url).await
    }

    fn required<T>(data: Option<T>) -> Result<T, ApiError> {
        data.ok_or_else(|| ApiError::Transport("Response carried no data".to_string()))
    }

    // ---- plans ----

    /// One page of plans; `status` is -1 (all), 0 or 1.
    #[instrument(skip(self), fields(page = page.page, page_size = page.page_size))]
    pub async fn list_plans_page(&self, page: PageRequest, status: i32) -> Result<PlanPage, ApiError> {
        let query = PlanListQuery {
            page: page.page,
            page_size: page.page_size,
            status,
        };
        Ok(self.get("/plans/page", Some(&query)).await?.unwrap_or_default())
    }

    /// Unpaged keyword search.
    #[instrument(skip(self))]
    pub async fn search_plans(&self, keyword: &str, status: i32) -> Result<Vec<SubscriptionPlan>, ApiError> {
        let query = PlanSearchQuery { keyword, status };
        Ok(self.get("/plans/search", Some(&query)).await?.unwrap_or_default())
    }

    /// Plans a user can buy.
    #[instrument(skip(self))]
    pub async fn list_active_plans(&self) -> Result<Vec<SubscriptionPlan>, ApiError> {
        let query = [("status", PlanStatus::Enabled.code())];
        Ok(self.get("/plans", Some(&query)).await?.unwrap_or_default())
    }

    #[instrument(skip(self))]
    pub async fn get_plan(&self, id: i64) -> Result<SubscriptionPlan, ApiError> {
        Self::required(self.get::<_, ()>(&format!("/plans/{}", id), None).await?)
    }

    #[instrument(skip(self, payload), fields(name = %payload.name))]
    pub async fn create_plan(&self, payload: &PlanPayload) -> Result<(), ApiError> {
        let url = self.url("/admin/plans");
        let request = self.client.traced_post(&url).json(payload);
        self.execute::<IgnoredAny>(request, &url).await?;
        tracing::info!("Plan created");
        Ok(())
    }

    #[instrument(skip(self, payload), fields(name = %payload.name))]
    pub async fn update_plan(&self, id: i64, payload: &PlanPayload) -> Result<(), ApiError> {
        let url = self.url(&format!("/admin/plans/{}", id));
        let request = self.client.traced_put(&url).json(payload);
        self.execute::<IgnoredAny>(request, &url).await?;
        tracing::info!("Plan updated");
        Ok(())
    }

    /// Enable or disable a plan. Only the status travels in the body.
    #[instrument(skip(self))]
    pub async fn set_plan_status(&self, id: i64, status: PlanStatus) -> Result<(), ApiError> {
        let url = self.url(&format!("/admin/plans/{}", id));
        let body = PlanStatusUpdate {
            status: status.code(),
        };
        let request = self.client.traced_put(&url).json(&body);
        self.execute::<IgnoredAny>(request, &url).await?;
        tracing::info!(status = status.label(), "Plan status changed");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete_plan(&self, id: i64) -> Result<(), ApiError> {
        let url = self.url(&format!("/admin/plans/{}", id));
        let request = self.client.traced_delete(&url);
        self.execute::<IgnoredAny>(request, &url).await?;
        tracing::info!("Plan deleted");
        Ok(())
    }

    // ---- subscriptions ----

    #[instrument(skip(self), fields(page = page.page, page_size = page.page_size))]
    pub async fn list_user_subscriptions(&self, page: PageRequest) -> Result<SubscriptionPage, ApiError> {
        Ok(self.get("/admin/users", Some(&page)).await?.unwrap_or_default())
    }

    /// Remaining quota of the calling user across active subscriptions.
    #[instrument(skip(self))]
    pub async fn quota_snapshot(&self) -> Result<QuotaSnapshot, ApiError> {
        Ok(self.get::<_, ()>("/quotas", None).await?.unwrap_or_default())
    }

    #[instrument(skip(self, request), fields(plan_id = request.plan_id))]
    pub async fn purchase(&self, request: &PurchaseRequest) -> Result<PurchaseReceipt, ApiError> {
        let url = self.url("/purchase");
        let call = self.client.traced_post(&url).json(request);
        let receipt = self
            .execute::<PurchaseReceipt>(call, &url)
            .await?
            .unwrap_or_default();
        tracing::info!(payment_id = %receipt.payment_id, "Plan purchased");
        Ok(receipt)
    }

    // ---- statistics & maintenance ----

    #[instrument(skip(self))]
    pub async fn system_stats(&self) -> Result<SystemStats, ApiError> {
        Ok(self
            .get::<_, ()>("/admin/system-stats", None)
            .await?
            .unwrap_or_default())
    }

    /// Report over `window`; `ReportWindow::ALL_TIME` asks for everything.
    #[instrument(skip(self))]
    pub async fn report(&self, window: ReportWindow) -> Result<Report, ApiError> {
        Ok(self.get("/admin/report", Some(&window)).await?.unwrap_or_default())
    }

    #[instrument(skip(self))]
    pub async fn run_quota_monitor(&self) -> Result<(), ApiError> {
        let url = self.url("/admin/monitor");
        let request = self.client.traced_post(&url);
        self.execute::<IgnoredAny>(request, &url).await?;
        tracing::info!("Quota monitor triggered");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn cleanup_expired(&self) -> Result<(), ApiError> {
        let url = self.url("/admin/cleanup");
        let request = self.client.traced_post(&url);
        self.execute::<IgnoredAny>(request, &url).await?;
        tracing::info!("Expired subscriptions cleaned up");
        Ok(())
    }
}
