//! Stats dashboard view-models.

use super::format;
use crate::models::subscription::SubscriptionStatus;
use crate::models::{Report, ReportWindow, SystemStats};

pub struct StatusShare {
    pub label: &'static str,
    pub count: i64,
    pub share: String,
}

pub struct PlanSales {
    pub name: String,
    pub sales: i64,
    pub revenue: String,
}

pub struct OverviewView {
    pub total_subscriptions: i64,
    pub total_revenue: String,
    pub active: i64,
    pub expired: i64,
    pub distribution: Vec<StatusShare>,
    pub plan_sales: Vec<PlanSales>,
}

impl OverviewView {
    pub fn new(stats: &SystemStats, currency: &str) -> Self {
        let active = stats.count_for(1);
        let expired = stats.count_for(2);
        let distribution = stats
            .status_counts
            .iter()
            .map(|s| StatusShare {
                label: SubscriptionStatus::from_code(s.status).label(),
                count: s.count,
                share: format::percent(stats.share_of_total(s.count)),
            })
            .collect();
        let plan_sales = stats
            .plan_stats
            .values()
            .map(|p| PlanSales {
                name: p.plan_name.clone(),
                sales: p.total_sales,
                revenue: format::money(currency, p.total_revenue),
            })
            .collect();

        Self {
            total_subscriptions: stats.total_subscriptions,
            total_revenue: format::money(currency, stats.total_revenue),
            active,
            expired,
            distribution,
            plan_sales,
        }
    }
}

pub struct ReportRow {
    pub name: String,
    pub sales: i64,
    pub revenue: String,
    pub active: i64,
    pub expired: i64,
    pub canceled: i64,
}

pub struct ReportView {
    pub title: String,
    pub total_sales: i64,
    pub total_revenue: String,
    pub total_active: i64,
    pub total_expired: i64,
    pub rows: Vec<ReportRow>,
}

impl ReportView {
    pub fn new(report: &Report, window: ReportWindow, currency: &str) -> Self {
        Self {
            title: window_title(window),
            total_sales: report.total_sales,
            total_revenue: format::money(currency, report.total_revenue),
            total_active: report.total_active,
            total_expired: report.total_expired,
            rows: report
                .stats
                .values()
                .map(|s| ReportRow {
                    name: s.plan_name.clone(),
                    sales: s.total_sales,
                    revenue: format::money(currency, s.total_revenue),
                    active: s.active_count,
                    expired: s.expired_count,
                    canceled: s.canceled_count,
                })
                .collect(),
        }
    }
}

pub fn window_title(window: ReportWindow) -> String {
    if window.is_all_time() {
        "All time".to_string()
    } else {
        format!(
            "{} ~ {}",
            format::date(window.start_time),
            format::date(window.end_time)
        )
    }
}
