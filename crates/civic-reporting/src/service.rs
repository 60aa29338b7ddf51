//! Issue workflows for citizens and administrators.

use civic_core::access;
use civic_core::analytics::{self, ReportingWindow};
use civic_core::error::{CivicError, CivicResult};
use civic_core::filter::{IssueFilter, SearchScope};
use civic_core::models::analytics::{
    AnalyticsSnapshot, CategoryMetrics, CitizenStats, DashboardStats, ResolutionTrend,
};
use civic_core::models::issue::{Issue, IssueId, IssueStatus, Priority, UpdateIssue};
use civic_core::models::session::{Session, SessionUser};
use civic_core::models::user::Role;
use civic_core::notify::Notifier;
use civic_core::repository::{IssueRepository, LocationProvider};
use civic_core::timeline::{self, TimelineStep};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::ReportingConfig;
use crate::draft::ReportDraft;
use crate::geolocation::{GeolocationTracker, LocationOutcome};

pub const ISSUE_REPORTED: &str = "Issue reported successfully!";
pub const REPORT_FAILED: &str = "Failed to submit issue. Please try again.";
pub const STATUS_UPDATED: &str = "Issue status updated successfully";
pub const STATUS_UPDATE_FAILED: &str = "Failed to update issue status";
pub const PRIORITY_UPDATED: &str = "Issue priority updated successfully";
pub const PRIORITY_UPDATE_FAILED: &str = "Failed to update issue priority";
pub const ISSUES_LOAD_FAILED: &str = "Failed to load issues";
pub const ANALYTICS_LOAD_FAILED: &str = "Failed to load analytics data";

/// Where the tracking view sends the user when the issue is unknown.
pub const TRACK_BACK_PATH: &str = "/citizen/dashboard";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum TrackingView {
    Found {
        issue: Issue,
        timeline: Vec<TimelineStep>,
    },
    #[serde(rename_all = "camelCase")]
    NotFound { back_to: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub stats: DashboardStats,
    pub issues: Vec<Issue>,
}

/// A citizen's own reports: stats over all of them plus the filtered list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MyReportsView {
    pub stats: CitizenStats,
    pub issues: Vec<Issue>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub snapshot: AnalyticsSnapshot,
    pub trend: ResolutionTrend,
    pub category_metrics: Vec<CategoryMetrics>,
}

/// Issue service.
///
/// Every operation takes the caller's [`Session`] and passes it through
/// the access gate before touching the repository.
pub struct IssueService<R: IssueRepository, N: Notifier> {
    issues: R,
    notifier: N,
    config: ReportingConfig,
}

impl<R: IssueRepository, N: Notifier> IssueService<R, N> {
    pub fn new(issues: R, notifier: N, config: ReportingConfig) -> Self {
        Self {
            issues,
            notifier,
            config,
        }
    }

    pub fn config(&self) -> &ReportingConfig {
        &self.config
    }

    async fn simulate_latency(&self) {
        if !self.config.simulated_latency.is_zero() {
            tokio::time::sleep(self.config.simulated_latency).await;
        }
    }

    // -----------------------------------------------------------------
    // Citizen
    // -----------------------------------------------------------------

    /// Submit `draft` as a new issue reported by the signed-in citizen.
    ///
    /// Validation failures are shown to the user and nothing is stored.
    pub async fn report(&self, session: &Session, draft: &ReportDraft) -> CivicResult<Issue> {
        let user = signed_in(session, &Role::Citizen)?;
        let input = draft.validate(&user.name).inspect_err(|e| {
            self.notifier.error(&e.to_string());
        })?;

        self.simulate_latency().await;
        match self.issues.create(input).await {
            Ok(issue) => {
                info!(issue_id = issue.id, category = %issue.category, user_id = user.id, "issue reported");
                self.notifier.success(ISSUE_REPORTED);
                Ok(issue)
            }
            Err(e) => {
                warn!(error = %e, user_id = user.id, "failed to store issue");
                self.notifier.error(REPORT_FAILED);
                Err(e)
            }
        }
    }

    /// Ask the device for its position and, when it answers in time,
    /// place it on `draft`.
    pub async fn locate_device<P: LocationProvider>(
        &self,
        tracker: &GeolocationTracker,
        provider: &P,
        draft: &mut ReportDraft,
    ) -> LocationOutcome {
        let outcome = tracker.acquire(provider).await;
        if let LocationOutcome::Located(location) = &outcome {
            draft.location = Some(location.clone());
        }
        outcome.report_to(&self.notifier);
        outcome
    }

    /// Issue detail with its status timeline.
    pub async fn track(&self, session: &Session, id: IssueId) -> CivicResult<TrackingView> {
        signed_in(session, &Role::Citizen)?;

        self.simulate_latency().await;
        match self.issues.get_by_id(id).await {
            Ok(issue) => {
                let timeline = timeline::derive(&issue);
                Ok(TrackingView::Found { issue, timeline })
            }
            Err(CivicError::NotFound { .. }) => Ok(TrackingView::NotFound {
                back_to: TRACK_BACK_PATH.to_owned(),
            }),
            Err(e) => Err(e),
        }
    }

    /// Issues reported by the signed-in citizen, narrowed by `filter`.
    ///
    /// Search text here also matches the category name.
    pub async fn my_reports(
        &self,
        session: &Session,
        filter: &IssueFilter,
    ) -> CivicResult<MyReportsView> {
        let user = signed_in(session, &Role::Citizen)?;

        self.simulate_latency().await;
        let mine = self.issues.list_by_reporter(&user.name).await?;
        Ok(MyReportsView {
            stats: analytics::citizen_stats(&mine),
            issues: filter
                .clone()
                .with_scope(SearchScope::IncludingCategory)
                .apply_owned(&mine),
        })
    }

    // -----------------------------------------------------------------
    // Admin
    // -----------------------------------------------------------------

    /// Stats over every issue plus the issues matching `filter`.
    ///
    /// Search text here also matches the category name.
    pub async fn dashboard(
        &self,
        session: &Session,
        filter: &IssueFilter,
    ) -> CivicResult<DashboardView> {
        signed_in(session, &Role::Admin)?;

        self.simulate_latency().await;
        let all = self.issues.list().await.inspect_err(|e| {
            warn!(error = %e, "failed to load issues");
            self.notifier.error(ISSUES_LOAD_FAILED);
        })?;

        Ok(DashboardView {
            stats: analytics::dashboard_stats(&all),
            issues: filter
                .clone()
                .with_scope(SearchScope::IncludingCategory)
                .apply_owned(&all),
        })
    }

    /// Set the status of issue `id`, optionally handing it to someone.
    ///
    /// Any status may follow any other. A blank assignee keeps the
    /// current one.
    pub async fn update_status(
        &self,
        session: &Session,
        id: IssueId,
        status: IssueStatus,
        assigned_to: Option<String>,
    ) -> CivicResult<Issue> {
        let admin = signed_in(session, &Role::Admin)?;
        let assigned_to = assigned_to.filter(|a| !a.trim().is_empty());

        self.simulate_latency().await;
        match self.apply_status(id, status, assigned_to).await {
            Ok(issue) => {
                info!(issue_id = id, status = %issue.status, admin_id = admin.id, "issue status updated");
                self.notifier.success(STATUS_UPDATED);
                Ok(issue)
            }
            Err(e) => {
                warn!(error = %e, issue_id = id, "failed to update issue status");
                self.notifier.error(STATUS_UPDATE_FAILED);
                Err(e)
            }
        }
    }

    async fn apply_status(
        &self,
        id: IssueId,
        status: IssueStatus,
        assigned_to: Option<String>,
    ) -> CivicResult<Issue> {
        let current = self.issues.get_by_id(id).await?;
        if current.status.is_terminal() && current.status != status {
            warn!(
                issue_id = id,
                from = %current.status,
                to = %status,
                "issue moved out of a terminal status"
            );
        }
        let update = UpdateIssue {
            status: Some(status),
            assigned_to,
            priority: None,
        };
        self.issues.update(id, update).await
    }

    pub async fn set_priority(
        &self,
        session: &Session,
        id: IssueId,
        priority: Priority,
    ) -> CivicResult<Issue> {
        let admin = signed_in(session, &Role::Admin)?;

        self.simulate_latency().await;
        let update = UpdateIssue {
            priority: Some(priority),
            ..Default::default()
        };
        match self.issues.update(id, update).await {
            Ok(issue) => {
                info!(issue_id = id, priority = %priority, admin_id = admin.id, "issue priority updated");
                self.notifier.success(PRIORITY_UPDATED);
                Ok(issue)
            }
            Err(e) => {
                warn!(error = %e, issue_id = id, "failed to update issue priority");
                self.notifier.error(PRIORITY_UPDATE_FAILED);
                Err(e)
            }
        }
    }

    /// Analytics over the live collection.
    ///
    /// With a window, the monthly series covers exactly its months;
    /// totals always cover every issue.
    pub async fn analytics(
        &self,
        session: &Session,
        window: Option<ReportingWindow>,
    ) -> CivicResult<AnalyticsReport> {
        signed_in(session, &Role::Admin)?;

        self.simulate_latency().await;
        let all = self.issues.list().await.inspect_err(|e| {
            warn!(error = %e, "failed to load analytics data");
            self.notifier.error(ANALYTICS_LOAD_FAILED);
        })?;

        let snapshot = match window {
            Some(window) => analytics::aggregate_window(&all, window),
            None => analytics::aggregate(&all),
        };
        let trend = analytics::trend(snapshot.resolution_rate, self.config.previous_resolution_rate);
        Ok(AnalyticsReport {
            category_metrics: analytics::category_metrics(&all),
            snapshot,
            trend,
        })
    }
}

fn signed_in<'s>(session: &'s Session, role: &Role) -> CivicResult<&'s SessionUser> {
    access::require_role(session, role)?;
    session.user().ok_or_else(|| CivicError::AuthenticationFailed {
        reason: "not signed in".into(),
    })
}
