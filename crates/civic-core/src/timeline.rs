//! Status timeline shown when tracking an issue.
//!
//! The timeline always depicts the four happy-path steps. Only the
//! latest `updated_at` is kept on an issue, so intermediate transition
//! times cannot be recovered: a step after `submitted` carries a
//! timestamp only while it is the current status.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::issue::{Issue, IssueStatus};

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimelineStep {
    pub status: IssueStatus,
    pub title: &'static str,
    pub description: &'static str,
    pub completed: bool,
    /// `None` renders as "Pending".
    pub at: Option<DateTime<Utc>>,
}

impl TimelineStep {
    pub fn display_time(&self) -> String {
        match self.at {
            Some(at) => at.format("%B %-d, %Y %H:%M").to_string(),
            None => "Pending".to_owned(),
        }
    }
}

fn step_text(status: IssueStatus) -> (&'static str, &'static str) {
    match status {
        IssueStatus::Submitted => (
            "Issue Submitted",
            "Your issue has been received and is in the queue for review",
        ),
        IssueStatus::Acknowledged => (
            "Issue Acknowledged",
            "The issue has been reviewed and acknowledged by the authorities",
        ),
        IssueStatus::InProgress => (
            "Work in Progress",
            "The issue is being actively worked on by the assigned team",
        ),
        IssueStatus::Resolved => ("Issue Resolved", "The issue has been successfully resolved"),
        IssueStatus::Rejected => ("Issue Rejected", "The issue was closed without action"),
    }
}

/// Derive the four-step timeline for `issue`.
pub fn derive(issue: &Issue) -> Vec<TimelineStep> {
    let current_rank = issue.status.progress_rank();

    IssueStatus::HAPPY_PATH
        .into_iter()
        .enumerate()
        .map(|(rank, step)| {
            let (title, description) = step_text(step);
            // Every issue has been submitted, rejected ones included.
            let completed =
                step == IssueStatus::Submitted || current_rank.is_some_and(|r| r >= rank);
            let at = if step == IssueStatus::Submitted {
                Some(issue.reported_at)
            } else if issue.status == step {
                Some(issue.updated_at)
            } else {
                None
            };
            TimelineStep {
                status: step,
                title,
                description,
                completed,
                at,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::models::issue::{Category, Location, Priority};

    fn issue_with(status: IssueStatus) -> Issue {
        Issue {
            id: 1,
            title: "Pothole".into(),
            description: "Large hole".into(),
            category: Category::RoadInfrastructure,
            status,
            priority: Priority::High,
            location: Location::new(28.6, 77.2, "Main Street"),
            reported_by: "John Doe".into(),
            reported_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 16, 14, 20, 0).unwrap(),
            assigned_to: None,
            photos: vec![],
        }
    }

    fn completed(steps: &[TimelineStep]) -> Vec<bool> {
        steps.iter().map(|s| s.completed).collect()
    }

    #[test]
    fn in_progress_completes_first_three_steps() {
        let issue = issue_with(IssueStatus::InProgress);
        let steps = derive(&issue);

        assert_eq!(steps.len(), 4);
        assert_eq!(completed(&steps), vec![true, true, true, false]);
        assert_eq!(steps[0].at, Some(issue.reported_at));
        // Acknowledgement time is not retained once the issue moves on.
        assert_eq!(steps[1].at, None);
        assert_eq!(steps[2].at, Some(issue.updated_at));
        assert_eq!(steps[3].at, None);
    }

    #[test]
    fn submitted_only_completes_first_step() {
        let steps = derive(&issue_with(IssueStatus::Submitted));
        assert_eq!(completed(&steps), vec![true, false, false, false]);
        assert!(steps[1..].iter().all(|s| s.at.is_none()));
    }

    #[test]
    fn resolved_completes_every_step() {
        let issue = issue_with(IssueStatus::Resolved);
        let steps = derive(&issue);
        assert_eq!(completed(&steps), vec![true; 4]);
        assert_eq!(steps[3].at, Some(issue.updated_at));
    }

    #[test]
    fn rejected_shows_only_submission() {
        let steps = derive(&issue_with(IssueStatus::Rejected));
        assert_eq!(completed(&steps), vec![true, false, false, false]);
        assert!(steps.iter().all(|s| s.status != IssueStatus::Rejected));
    }

    #[test]
    fn pending_steps_render_as_pending() {
        let steps = derive(&issue_with(IssueStatus::Acknowledged));
        assert_eq!(steps[2].display_time(), "Pending");
        assert_eq!(steps[0].display_time(), "January 15, 2024 10:30");
    }
}
