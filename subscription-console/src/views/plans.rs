//! Plan table and editor view-models.

use super::format;
use crate::models::{PlanStatus, SubscriptionPlan};

/// Model names offered by the editor's datalist.
pub const COMMON_MODELS: &[&str] = &[
    "gpt-4",
    "gpt-4-turbo",
    "gpt-4o",
    "gpt-4o-mini",
    "gpt-3.5-turbo",
    "claude-3-opus",
    "claude-3-sonnet",
    "claude-3-haiku",
    "claude-3.5-sonnet",
];

/// Quota of a freshly added editor row.
pub const DEFAULT_ROW_QUOTA: i64 = 100;

pub struct PlanRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub enabled: bool,
    pub price: String,
    pub duration: String,
    pub quota_summary: String,
    pub quota_tooltip: String,
    pub status_label: &'static str,
    pub status_class: &'static str,
    pub created: String,
    /// Path segment of the toggle action: `enable` or `disable`.
    pub toggle_action: &'static str,
    pub toggle_label: &'static str,
}

impl PlanRow {
    pub fn new(plan: &SubscriptionPlan, currency: &str) -> Self {
        let (quota_summary, quota_tooltip) = quota_summary(plan);
        let status = plan.plan_status();
        let (toggle_action, toggle_label) = match status {
            PlanStatus::Enabled => ("disable", "Disable"),
            PlanStatus::Disabled => ("enable", "Enable"),
        };

        Self {
            id: plan.id,
            name: plan.name.clone(),
            description: plan.description.clone(),
            enabled: plan.is_enabled(),
            price: format::money(currency, plan.price),
            duration: format::days(plan.duration),
            quota_summary,
            quota_tooltip,
            status_label: status.label(),
            status_class: match status {
                PlanStatus::Enabled => "tag-green",
                PlanStatus::Disabled => "tag-gray",
            },
            created: format::datetime(plan.created_time),
            toggle_action,
            toggle_label,
        }
    }
}

/// "N models" plus a "model: quota" tooltip; "-" for empty or unreadable quotas.
pub fn quota_summary(plan: &SubscriptionPlan) -> (String, String) {
    match plan.quota_map() {
        Ok(quotas) if !quotas.is_empty() => {
            let count = quotas.len();
            let summary = if count == 1 {
                "1 model".to_string()
            } else {
                format!("{} models", count)
            };
            let tooltip = quotas
                .iter()
                .map(|(model, quota)| format!("{}: {}", model, quota))
                .collect::<Vec<_>>()
                .join(", ");
            (summary, tooltip)
        }
        _ => ("-".to_string(), String::new()),
    }
}

pub struct QuotaRowView {
    pub model: String,
    pub amount: i64,
}

impl QuotaRowView {
    pub fn blank() -> Self {
        Self {
            model: String::new(),
            amount: DEFAULT_ROW_QUOTA,
        }
    }
}

/// Prefilled editor values; `id` is `None` in create mode.
pub struct PlanEditorView {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub price: String,
    pub duration: String,
    pub enabled: bool,
    pub rows: Vec<QuotaRowView>,
}

impl PlanEditorView {
    pub fn create() -> Self {
        Self {
            id: None,
            name: String::new(),
            description: String::new(),
            price: String::new(),
            duration: String::new(),
            enabled: true,
            rows: Vec::new(),
        }
    }

    /// Rows come from the plan's quotas; unreadable quota text starts empty.
    pub fn edit(plan: &SubscriptionPlan) -> Self {
        let rows = plan
            .quota_map()
            .unwrap_or_default()
            .into_iter()
            .map(|(model, amount)| QuotaRowView { model, amount })
            .collect();

        Self {
            id: Some(plan.id),
            name: plan.name.clone(),
            description: plan.description.clone(),
            price: format!("{:.2}", plan.price),
            duration: plan.duration.to_string(),
            enabled: plan.is_enabled(),
            rows,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }
}
