//! User subscription model.

use super::plan::SubscriptionPlan;
use super::quota::{model_usages, parse_quota_map, ModelUsage, QuotaParseError};
use serde::Deserialize;

const SECONDS_PER_DAY: i64 = 86_400;

/// Days left before an expiry badge turns from green to orange.
pub const EXPIRY_WARNING_DAYS: i64 = 7;

/// Stored lifecycle flag of a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionStatus {
    Active,
    Expired,
    Canceled,
    Unknown(i32),
}

impl SubscriptionStatus {
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => SubscriptionStatus::Active,
            2 => SubscriptionStatus::Expired,
            3 => SubscriptionStatus::Canceled,
            other => SubscriptionStatus::Unknown(other),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "Active",
            SubscriptionStatus::Expired => "Expired",
            SubscriptionStatus::Canceled => "Canceled",
            SubscriptionStatus::Unknown(_) => "Unknown",
        }
    }
}

/// What the status column shows. `Lapsed` is an active subscription whose end
/// time has passed before the server got around to flipping the flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayStatus {
    Active,
    Lapsed,
    Expired,
    Canceled,
    Unknown,
}

impl DisplayStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DisplayStatus::Active => "Active",
            DisplayStatus::Lapsed | DisplayStatus::Expired => "Expired",
            DisplayStatus::Canceled => "Canceled",
            DisplayStatus::Unknown => "Unknown",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            DisplayStatus::Active => "tag-green",
            DisplayStatus::Lapsed => "tag-orange",
            DisplayStatus::Expired => "tag-red",
            DisplayStatus::Canceled | DisplayStatus::Unknown => "tag-gray",
        }
    }
}

/// Expiry badge of the validity column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiry {
    Expired,
    Soon { days: i64 },
    Later { days: i64 },
}

impl Expiry {
    pub fn label(&self) -> String {
        match self {
            Expiry::Expired => "Expired".to_string(),
            Expiry::Soon { days: 1 } | Expiry::Later { days: 1 } => {
                "Expires in 1 day".to_string()
            }
            Expiry::Soon { days } | Expiry::Later { days } => format!("Expires in {} days", days),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Expiry::Expired => "tag-red",
            Expiry::Soon { .. } => "tag-orange",
            Expiry::Later { .. } => "tag-green",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SubscriptionUser {
    pub id: i64,
    pub username: String,
}

/// A user's subscription as returned by the admin listing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserSubscription {
    pub id: i64,
    pub user_id: i64,
    pub user: Option<SubscriptionUser>,
    pub subscription_plan: Option<SubscriptionPlan>,
    pub purchase_price: f64,
    pub payment_method: String,
    pub start_time: i64,
    pub end_time: i64,
    pub status: i32,
    /// Remaining quota per model, JSON text.
    pub model_quotas: String,
    /// Consumed quota per model, JSON text.
    pub used_quotas: String,
    pub created_time: i64,
}

impl UserSubscription {
    pub fn stored_status(&self) -> SubscriptionStatus {
        SubscriptionStatus::from_code(self.status)
    }

    /// Expired by the clock: `end_time < now`, whatever the stored flag says.
    pub fn is_expired(&self, now: i64) -> bool {
        self.end_time < now
    }

    /// Whole days until expiry, rounded up; 0 once expired.
    pub fn remaining_days(&self, now: i64) -> i64 {
        let left = self.end_time - now;
        if left <= 0 {
            return 0;
        }
        (left + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY
    }

    pub fn expiry(&self, now: i64) -> Expiry {
        if self.is_expired(now) {
            return Expiry::Expired;
        }
        let days = self.remaining_days(now);
        if days <= EXPIRY_WARNING_DAYS {
            Expiry::Soon { days }
        } else {
            Expiry::Later { days }
        }
    }

    pub fn display_status(&self, now: i64) -> DisplayStatus {
        match self.stored_status() {
            SubscriptionStatus::Active if self.is_expired(now) => DisplayStatus::Lapsed,
            SubscriptionStatus::Active => DisplayStatus::Active,
            SubscriptionStatus::Expired => DisplayStatus::Expired,
            SubscriptionStatus::Canceled => DisplayStatus::Canceled,
            SubscriptionStatus::Unknown(_) => DisplayStatus::Unknown,
        }
    }

    pub fn username(&self) -> &str {
        self.user
            .as_ref()
            .map(|u| u.username.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or("-")
    }

    pub fn plan_name(&self) -> &str {
        self.subscription_plan
            .as_ref()
            .map(|p| p.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or("-")
    }

    /// Per-model usage against the plan's totals.
    ///
    /// Fails when any of the three quota texts is malformed. A subscription
    /// without an embedded plan has no models.
    pub fn model_usages(&self) -> Result<Vec<ModelUsage>, QuotaParseError> {
        let remaining = parse_quota_map(&self.model_quotas)?;
        let used = parse_quota_map(&self.used_quotas)?;
        let plan = match &self.subscription_plan {
            Some(plan) => plan.quota_map()?,
            None => Default::default(),
        };
        Ok(model_usages(&plan, &used, &remaining))
    }
}

/// `GET /api/subscription/admin/users` payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SubscriptionPage {
    #[serde(deserialize_with = "super::null_as_default")]
    pub subscriptions: Vec<UserSubscription>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
}
