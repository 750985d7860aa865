//! Per-model quota maps and usage arithmetic.
//!
//! Plans and subscriptions carry their quotas as JSON text (`{"gpt-4": 100}`);
//! the console parses that text whenever it renders it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Model name → integer quota. Ordered so tables render deterministically.
pub type QuotaMap = BTreeMap<String, i64>;

#[derive(Debug, Error)]
#[error("malformed quota data: {0}")]
pub struct QuotaParseError(#[from] serde_json::Error);

/// Parse quota text as stored by the server. Empty text is an empty map.
pub fn parse_quota_map(text: &str) -> Result<QuotaMap, QuotaParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(QuotaMap::new());
    }
    Ok(serde_json::from_str(trimmed)?)
}

/// Share of `total` consumed by `used`, in percent, clamped to `[0, 100]`.
///
/// A zero (or negative) total yields 0 instead of dividing by zero.
pub fn usage_percent(used: i64, total: i64) -> f64 {
    if total <= 0 {
        return 0.0;
    }
    (used as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
}

/// Colour band of a usage bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageLevel {
    Normal,
    Warning,
    Critical,
}

impl UsageLevel {
    pub fn from_percent(percent: f64) -> Self {
        if percent > 80.0 {
            UsageLevel::Critical
        } else if percent > 60.0 {
            UsageLevel::Warning
        } else {
            UsageLevel::Normal
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            UsageLevel::Normal => "usage-normal",
            UsageLevel::Warning => "usage-warning",
            UsageLevel::Critical => "usage-critical",
        }
    }
}

/// Usage of one model within one subscription.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelUsage {
    pub model: String,
    pub used: i64,
    pub total: i64,
    pub remaining: i64,
}

impl ModelUsage {
    pub fn percent(&self) -> f64 {
        usage_percent(self.used, self.total)
    }
}

/// Per-model usage of a subscription: the plan's quotas define the models and
/// totals, `used` and `remaining` default to 0 for models missing from them.
pub fn model_usages(plan: &QuotaMap, used: &QuotaMap, remaining: &QuotaMap) -> Vec<ModelUsage> {
    plan.iter()
        .map(|(model, total)| ModelUsage {
            model: model.clone(),
            used: used.get(model).copied().unwrap_or(0),
            total: *total,
            remaining: remaining.get(model).copied().unwrap_or(0),
        })
        .collect()
}

/// Aggregate usage percentage across all models: Σused / Σtotal × 100.
pub fn aggregate_percent(usages: &[ModelUsage]) -> f64 {
    let used: i64 = usages.iter().map(|u| u.used).sum();
    let total: i64 = usages.iter().map(|u| u.total).sum();
    usage_percent(used, total)
}

/// One entry of the caller's quota snapshot, summed over active subscriptions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuotaInfo {
    pub total: i64,
    pub used: i64,
    pub remaining: i64,
}

/// `GET /api/subscription/quotas` payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuotaSnapshot {
    #[serde(deserialize_with = "super::null_as_default")]
    pub quotas: BTreeMap<String, QuotaInfo>,
    pub subscription_count: i64,
}
