//! Subscription plan model.

use super::quota::{parse_quota_map, QuotaMap, QuotaParseError};
use serde::{Deserialize, Serialize};

/// Plan availability: 1 = enabled (purchasable), 0 = disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanStatus {
    Disabled,
    Enabled,
}

impl PlanStatus {
    pub fn from_code(code: i32) -> Self {
        if code == 1 {
            PlanStatus::Enabled
        } else {
            PlanStatus::Disabled
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            PlanStatus::Enabled => 1,
            PlanStatus::Disabled => 0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlanStatus::Enabled => "Enabled",
            PlanStatus::Disabled => "Disabled",
        }
    }
}

/// Status filter of the plan list: -1 = all, otherwise a [`PlanStatus`] code.
pub const ALL_STATUSES: i32 = -1;

/// Normalize a status filter from a query string; anything unknown means "all".
pub fn normalize_status_filter(status: Option<i32>) -> i32 {
    match status {
        Some(code @ (0 | 1)) => code,
        _ => ALL_STATUSES,
    }
}

/// A subscription plan as returned by the subscription API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscriptionPlan {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Validity in days.
    pub duration: i32,
    pub status: i32,
    /// JSON text, e.g. `{"gpt-4": 100}`.
    pub model_quotas: String,
    pub created_time: i64,
}

impl SubscriptionPlan {
    pub fn plan_status(&self) -> PlanStatus {
        PlanStatus::from_code(self.status)
    }

    pub fn is_enabled(&self) -> bool {
        self.plan_status() == PlanStatus::Enabled
    }

    pub fn quota_map(&self) -> Result<QuotaMap, QuotaParseError> {
        parse_quota_map(&self.model_quotas)
    }
}

/// Human label for a validity period in days.
pub fn duration_label(days: i32) -> String {
    match days {
        1 => "1 day".to_string(),
        7 => "1 week".to_string(),
        30 => "1 month".to_string(),
        90 => "3 months".to_string(),
        365 => "1 year".to_string(),
        n => format!("{} days", n),
    }
}

/// `GET /api/subscription/plans/page` payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlanPage {
    #[serde(deserialize_with = "super::null_as_default")]
    pub plans: Vec<SubscriptionPlan>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
}

/// Body of plan create/update calls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanPayload {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub duration: i32,
    pub status: i32,
    pub model_quotas: QuotaMap,
}

/// Body of an enable/disable call.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlanStatusUpdate {
    pub status: i32,
}
