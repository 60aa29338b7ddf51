//! Analytics aggregation over an issue collection.
//!
//! Every function here is a pure function of the issues it is given, so
//! fixtures and live data go through the same code.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::models::analytics::{
    AnalyticsSnapshot, CategoryCount, CategoryMetrics, CitizenStats, DashboardStats,
    MonthlyCount, ResolutionTrend, StatusCount, TrendDirection,
};
use crate::models::issue::{Category, Issue, IssueStatus, Priority};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `resolved / total * 100`, one decimal, 0 when `total` is 0.
pub fn resolution_rate(resolved: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round1(resolved as f64 / total as f64 * 100.0)
}

/// Compare a resolution rate against the previous period's rate.
///
/// Equal rates count as declining.
pub fn trend(current_rate: f64, previous_rate: f64) -> ResolutionTrend {
    ResolutionTrend {
        delta: round1(current_rate - previous_rate),
        direction: if current_rate > previous_rate {
            TrendDirection::Improving
        } else {
            TrendDirection::Declining
        },
    }
}

/// A run of consecutive calendar months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportingWindow {
    start: MonthKey,
    months: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    fn of(at: DateTime<Utc>) -> Self {
        Self {
            year: at.year(),
            month: at.month(),
        }
    }

    fn index(self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month) - 1
    }

    fn from_index(index: i64) -> Self {
        Self {
            year: index.div_euclid(12) as i32,
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    fn label(self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.format("%b").to_string())
            .unwrap_or_default()
    }
}

impl ReportingWindow {
    /// The `months` calendar months ending with the month of `end`.
    pub fn ending_at(end: DateTime<Utc>, months: u32) -> Self {
        let last = MonthKey::of(end).index();
        Self {
            start: MonthKey::from_index(last - i64::from(months) + 1),
            months,
        }
    }

    /// The smallest window covering every report and resolution month.
    pub fn spanning(issues: &[Issue]) -> Option<Self> {
        let months = issues.iter().flat_map(|issue| {
            let reported = Some(MonthKey::of(issue.reported_at));
            let resolved =
                (issue.status == IssueStatus::Resolved).then(|| MonthKey::of(issue.updated_at));
            reported.into_iter().chain(resolved)
        });
        let (first, last) = months.fold(None, |acc: Option<(MonthKey, MonthKey)>, m| match acc {
            None => Some((m, m)),
            Some((lo, hi)) => Some((lo.min(m), hi.max(m))),
        })?;
        Some(Self {
            start: first,
            months: (last.index() - first.index() + 1) as u32,
        })
    }

    pub fn months(&self) -> u32 {
        self.months
    }

    fn slot(&self, at: DateTime<Utc>) -> Option<usize> {
        let offset = MonthKey::of(at).index() - self.start.index();
        (0..i64::from(self.months))
            .contains(&offset)
            .then_some(offset as usize)
    }
}

/// Reported and resolved counts per month, oldest first. Issues outside
/// the window are ignored.
pub fn monthly_series(issues: &[Issue], window: ReportingWindow) -> Vec<MonthlyCount> {
    let mut series: Vec<MonthlyCount> = (0..i64::from(window.months))
        .map(|offset| {
            let key = MonthKey::from_index(window.start.index() + offset);
            MonthlyCount {
                year: key.year,
                month: key.month,
                label: key.label(),
                reported: 0,
                resolved: 0,
            }
        })
        .collect();

    for issue in issues {
        if let Some(slot) = window.slot(issue.reported_at) {
            series[slot].reported += 1;
        }
        if issue.status == IssueStatus::Resolved {
            if let Some(slot) = window.slot(issue.updated_at) {
                series[slot].resolved += 1;
            }
        }
    }
    series
}

/// Issue count per category present in the collection, in category order.
pub fn category_breakdown(issues: &[Issue]) -> Vec<CategoryCount> {
    let mut counts: BTreeMap<Category, u64> = BTreeMap::new();
    for issue in issues {
        *counts.entry(issue.category.clone()).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(category, count)| CategoryCount { category, count })
        .collect()
}

/// Count per status for all five statuses.
pub fn status_distribution(issues: &[Issue]) -> Vec<StatusCount> {
    IssueStatus::ALL
        .into_iter()
        .map(|status| StatusCount {
            status,
            count: issues.iter().filter(|i| i.status == status).count() as u64,
        })
        .collect()
}

pub fn dashboard_stats(issues: &[Issue]) -> DashboardStats {
    issues.iter().fold(DashboardStats::default(), |mut stats, issue| {
        stats.total += 1;
        match issue.status {
            IssueStatus::InProgress => stats.in_progress += 1,
            IssueStatus::Resolved => stats.resolved += 1,
            _ => {}
        }
        if issue.priority == Priority::High {
            stats.high_priority += 1;
        }
        stats
    })
}

pub fn citizen_stats(issues: &[Issue]) -> CitizenStats {
    issues.iter().fold(CitizenStats::default(), |mut stats, issue| {
        stats.total += 1;
        match issue.status {
            IssueStatus::Submitted | IssueStatus::Acknowledged => stats.pending += 1,
            IssueStatus::InProgress => stats.in_progress += 1,
            IssueStatus::Resolved => stats.resolved += 1,
            IssueStatus::Rejected => {}
        }
        stats
    })
}

/// Mean days from report to resolution over resolved issues, one decimal.
pub fn avg_resolution_days<'a>(issues: impl IntoIterator<Item = &'a Issue>) -> Option<f64> {
    let (sum, n) = issues
        .into_iter()
        .filter(|i| i.status == IssueStatus::Resolved)
        .fold((0.0, 0u32), |(sum, n), i| {
            let secs = (i.updated_at - i.reported_at).num_seconds() as f64;
            (sum + secs / SECONDS_PER_DAY, n + 1)
        });
    (n > 0).then(|| round1(sum / f64::from(n)))
}

/// Per-category totals, resolutions, and resolution times.
pub fn category_metrics(issues: &[Issue]) -> Vec<CategoryMetrics> {
    category_breakdown(issues)
        .into_iter()
        .map(|CategoryCount { category, count }| {
            let in_category = |i: &&Issue| i.category == category;
            let resolved = issues
                .iter()
                .filter(in_category)
                .filter(|i| i.status == IssueStatus::Resolved)
                .count() as u64;
            let avg_days = avg_resolution_days(issues.iter().filter(in_category));
            CategoryMetrics {
                category,
                total: count,
                resolved,
                avg_resolution_days: avg_days,
                success_rate: resolution_rate(resolved, count),
            }
        })
        .collect()
}

/// Aggregate over the months the collection actually spans.
pub fn aggregate(issues: &[Issue]) -> AnalyticsSnapshot {
    let monthly_data = ReportingWindow::spanning(issues)
        .map(|window| monthly_series(issues, window))
        .unwrap_or_default();
    build_snapshot(issues, monthly_data)
}

/// Aggregate with the monthly series restricted to `window`.
pub fn aggregate_window(issues: &[Issue], window: ReportingWindow) -> AnalyticsSnapshot {
    build_snapshot(issues, monthly_series(issues, window))
}

fn build_snapshot(issues: &[Issue], monthly_data: Vec<MonthlyCount>) -> AnalyticsSnapshot {
    let total_issues = issues.len() as u64;
    let resolved_issues = issues
        .iter()
        .filter(|i| i.status == IssueStatus::Resolved)
        .count() as u64;

    AnalyticsSnapshot {
        total_issues,
        resolved_issues,
        pending_issues: total_issues - resolved_issues,
        resolution_rate: resolution_rate(resolved_issues, total_issues),
        avg_resolution_days: avg_resolution_days(issues),
        category_breakdown: category_breakdown(issues),
        status_distribution: status_distribution(issues),
        monthly_data,
    }
}
