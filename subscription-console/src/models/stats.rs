//! Server-computed subscription statistics.

use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StatusCount {
    pub status: i32,
    pub count: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlanStats {
    pub plan_id: i64,
    pub plan_name: String,
    pub total_sales: i64,
    pub total_revenue: f64,
}

/// `GET /api/subscription/admin/system-stats` payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SystemStats {
    pub total_subscriptions: i64,
    pub total_revenue: f64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub status_counts: Vec<StatusCount>,
    /// Keyed by plan id.
    #[serde(deserialize_with = "super::null_as_default")]
    pub plan_stats: BTreeMap<String, PlanStats>,
}

impl SystemStats {
    /// Count for a status code, 0 when the server did not report it.
    pub fn count_for(&self, status: i32) -> i64 {
        self.status_counts
            .iter()
            .find(|s| s.status == status)
            .map(|s| s.count)
            .unwrap_or(0)
    }

    /// Share of all subscriptions, in percent; 0 when there are none.
    pub fn share_of_total(&self, count: i64) -> f64 {
        if self.total_subscriptions <= 0 {
            return 0.0;
        }
        count as f64 / self.total_subscriptions as f64 * 100.0
    }
}

/// Per-plan row of a report.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReportPlanStats {
    pub plan_name: String,
    pub total_sales: i64,
    pub total_revenue: f64,
    pub active_count: i64,
    pub expired_count: i64,
    pub canceled_count: i64,
}

/// `GET /api/subscription/admin/report` payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Report {
    pub start_time: i64,
    pub end_time: i64,
    pub total_sales: i64,
    pub total_revenue: f64,
    pub total_active: i64,
    pub total_expired: i64,
    pub total_canceled: i64,
    /// Keyed by plan id.
    #[serde(deserialize_with = "super::null_as_default")]
    pub stats: BTreeMap<String, ReportPlanStats>,
}

/// Report window in unix seconds; `(0, 0)` asks for all time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
pub struct ReportWindow {
    pub start_time: i64,
    pub end_time: i64,
}

impl ReportWindow {
    pub const ALL_TIME: ReportWindow = ReportWindow {
        start_time: 0,
        end_time: 0,
    };

    pub fn is_all_time(&self) -> bool {
        *self == Self::ALL_TIME
    }
}
