//! User-subscription table and detail view-models.

use super::format;
use crate::models::quota::{aggregate_percent, ModelUsage, UsageLevel};
use crate::models::{PaymentMethod, UserSubscription};

/// A progress bar: `value` drives `<progress>`, `label` is shown next to it.
pub struct UsageBar {
    pub value: u32,
    pub label: String,
    pub class: &'static str,
}

impl UsageBar {
    pub fn new(percent: f64) -> Self {
        Self {
            value: percent.round() as u32,
            label: format!("{:.0}%", percent),
            class: UsageLevel::from_percent(percent).css_class(),
        }
    }
}

pub struct SubscriptionRow {
    pub id: i64,
    pub username: String,
    pub plan_name: String,
    pub price: String,
    pub start_date: String,
    pub end_date: String,
    pub expiry_label: String,
    pub expiry_class: &'static str,
    pub status_label: &'static str,
    pub status_class: &'static str,
    /// `None` renders "-": no plan quotas, or unreadable quota text.
    pub usage: Option<UsageBar>,
    /// Per-model breakdown shown on hover over the usage bar.
    pub usage_tooltip: String,
    pub created: String,
}

impl SubscriptionRow {
    pub fn new(sub: &UserSubscription, currency: &str, now: i64) -> Self {
        let expiry = sub.expiry(now);
        let status = sub.display_status(now);
        let (usage, usage_tooltip) = match sub.model_usages() {
            Ok(usages) if !usages.is_empty() => (
                Some(UsageBar::new(aggregate_percent(&usages))),
                usage_breakdown(&usages),
            ),
            _ => (None, String::new()),
        };

        Self {
            id: sub.id,
            username: sub.username().to_string(),
            plan_name: sub.plan_name().to_string(),
            price: format::money(currency, sub.purchase_price),
            start_date: format::date(sub.start_time),
            end_date: format::date(sub.end_time),
            expiry_label: expiry.label(),
            expiry_class: expiry.css_class(),
            status_label: status.label(),
            status_class: status.css_class(),
            usage,
            usage_tooltip,
            created: format::datetime(sub.created_time),
        }
    }
}

/// One "model: used/total (remaining R)" line per model.
fn usage_breakdown(usages: &[ModelUsage]) -> String {
    usages
        .iter()
        .map(|u| format!("{}: {}/{} (remaining {})", u.model, u.used, u.total, u.remaining))
        .collect::<Vec<_>>()
        .join("\n")
}

pub struct UsageLine {
    pub model: String,
    pub used: i64,
    pub total: i64,
    pub remaining: i64,
    pub bar: UsageBar,
}

pub struct SubscriptionDetailView {
    pub username: String,
    pub plan_name: String,
    pub price: String,
    pub payment_method: String,
    pub start: String,
    pub end: String,
    pub usages: Vec<UsageLine>,
    /// Set instead of `usages` when the quota text cannot be read.
    pub usage_error: Option<String>,
}

impl SubscriptionDetailView {
    pub fn new(sub: &UserSubscription, currency: &str) -> Self {
        let (usages, usage_error) = match sub.model_usages() {
            Ok(usages) => (
                usages
                    .into_iter()
                    .map(|u| UsageLine {
                        bar: UsageBar::new(u.percent()),
                        model: u.model,
                        used: u.used,
                        total: u.total,
                        remaining: u.remaining,
                    })
                    .collect(),
                None,
            ),
            Err(e) => (Vec::new(), Some(format!("Unable to read quota data ({})", e))),
        };

        Self {
            username: sub.username().to_string(),
            plan_name: sub.plan_name().to_string(),
            price: format::money(currency, sub.purchase_price),
            payment_method: PaymentMethod::label_for(&sub.payment_method),
            start: format::datetime(sub.start_time),
            end: format::datetime(sub.end_time),
            usages,
            usage_error,
        }
    }
}
