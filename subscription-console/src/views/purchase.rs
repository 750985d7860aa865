use super::format;
use crate::models::plan::duration_label;
use crate::models::{QuotaSnapshot, SubscriptionPlan};

pub struct IncludedQuota {
    pub model: String,
    pub amount: i64,
}

/// A purchasable plan card.
pub struct PlanCard {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: String,
    pub duration: String,
    pub quotas: Vec<IncludedQuota>,
}

impl PlanCard {
    pub fn new(plan: &SubscriptionPlan, currency: &str) -> Self {
        let quotas = plan
            .quota_map()
            .unwrap_or_default()
            .into_iter()
            .map(|(model, amount)| IncludedQuota { model, amount })
            .collect();

        Self {
            id: plan.id,
            name: plan.name.clone(),
            description: plan.description.clone(),
            price: format::money(currency, plan.price),
            duration: duration_label(plan.duration),
            quotas,
        }
    }
}

pub struct QuotaBalance {
    pub model: String,
    pub remaining: i64,
    pub total: i64,
}

pub fn quota_balances(snapshot: &QuotaSnapshot) -> Vec<QuotaBalance> {
    snapshot
        .quotas
        .iter()
        .map(|(model, info)| QuotaBalance {
            model: model.clone(),
            remaining: info.remaining,
            total: info.total,
        })
        .collect()
}
