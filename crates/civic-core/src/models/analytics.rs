//! Analytics domain models.
//!
//! Snapshots are derived from an issue collection on demand and are
//! never stored. Chart renderers consume them as-is.

use serde::{Deserialize, Serialize};

use crate::models::issue::{Category, IssueStatus};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    pub category: Category,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatusCount {
    pub status: IssueStatus,
    pub count: u64,
}

/// Reported and resolved counts for one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCount {
    pub year: i32,
    /// 1-based calendar month.
    pub month: u32,
    /// Short month name ("Jan").
    pub label: String,
    pub reported: u64,
    pub resolved: u64,
}

/// One row of the per-category metrics table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryMetrics {
    pub category: Category,
    pub total: u64,
    pub resolved: u64,
    /// Mean days from report to resolution; `None` without resolved issues.
    pub avg_resolution_days: Option<f64>,
    /// Percentage of issues resolved, one decimal.
    pub success_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    pub total_issues: u64,
    pub resolved_issues: u64,
    /// Everything not resolved. Rejected issues are counted here too.
    pub pending_issues: u64,
    /// Percentage, one decimal; 0 for an empty collection.
    pub resolution_rate: f64,
    pub avg_resolution_days: Option<f64>,
    pub category_breakdown: Vec<CategoryCount>,
    pub status_distribution: Vec<StatusCount>,
    pub monthly_data: Vec<MonthlyCount>,
}

/// Headline counters shown above the admin issue list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total: u64,
    pub in_progress: u64,
    pub resolved: u64,
    pub high_priority: u64,
}

/// Counters shown above a citizen's own report list.
///
/// `pending` covers issues not yet picked up (`submitted` and
/// `acknowledged`); `rejected` issues only count toward `total`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CitizenStats {
    pub total: u64,
    pub pending: u64,
    pub in_progress: u64,
    pub resolved: u64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Improving,
    Declining,
}

/// Change in resolution rate against a previous period.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ResolutionTrend {
    /// Percentage points, one decimal.
    pub delta: f64,
    pub direction: TrendDirection,
}
