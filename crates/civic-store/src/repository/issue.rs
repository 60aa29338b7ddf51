//! In-memory implementation of [`IssueRepository`].

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use civic_core::error::CivicResult;
use civic_core::models::issue::{CreateIssue, Issue, IssueId, IssueStatus, UpdateIssue};
use civic_core::repository::IssueRepository;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::StoreError;

/// Issue collection held in process memory, in insertion order.
///
/// Clones share the same underlying collection.
#[derive(Clone, Default)]
pub struct InMemoryIssueRepository {
    issues: Arc<RwLock<Vec<Issue>>>,
}

impl InMemoryIssueRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing collection. Ids must be unique.
    pub fn seeded(issues: Vec<Issue>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(issues.len());
        if let Some(dup) = issues.iter().find(|i| !seen.insert(i.id)) {
            return Err(StoreError::DuplicateId(dup.id));
        }
        Ok(Self {
            issues: Arc::new(RwLock::new(issues)),
        })
    }

    fn not_found(id: IssueId) -> StoreError {
        StoreError::NotFound {
            entity: "issue".into(),
            id: id.to_string(),
        }
    }
}

impl IssueRepository for InMemoryIssueRepository {
    async fn create(&self, input: CreateIssue) -> CivicResult<Issue> {
        let mut issues = self.issues.write().await;
        let id = issues.iter().map(|i| i.id).max().map_or(1, |max| max + 1);
        let now = Utc::now();

        let issue = Issue {
            id,
            title: input.title,
            description: input.description,
            category: input.category,
            status: IssueStatus::Submitted,
            priority: input.priority,
            location: input.location,
            reported_by: input.reported_by,
            reported_at: now,
            updated_at: now,
            assigned_to: None,
            photos: input.photos,
        };
        issues.push(issue.clone());
        debug!(issue_id = id, "issue stored");
        Ok(issue)
    }

    async fn get_by_id(&self, id: IssueId) -> CivicResult<Issue> {
        let issues = self.issues.read().await;
        issues
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(id).into())
    }

    async fn update(&self, id: IssueId, input: UpdateIssue) -> CivicResult<Issue> {
        let mut issues = self.issues.write().await;
        let issue = issues
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| Self::not_found(id))?;

        // `updated_at` tracks status and assignment changes only.
        let touches_lifecycle = input.status.is_some() || input.assigned_to.is_some();
        if let Some(status) = input.status {
            issue.status = status;
        }
        if let Some(assignee) = input.assigned_to {
            issue.assigned_to = Some(assignee);
        }
        if let Some(priority) = input.priority {
            issue.priority = priority;
        }
        if touches_lifecycle {
            issue.updated_at = Utc::now().max(issue.reported_at);
        }

        Ok(issue.clone())
    }

    async fn list(&self) -> CivicResult<Vec<Issue>> {
        Ok(self.issues.read().await.clone())
    }

    async fn list_by_reporter(&self, reporter: &str) -> CivicResult<Vec<Issue>> {
        let issues = self.issues.read().await;
        Ok(issues
            .iter()
            .filter(|i| i.reported_by == reporter)
            .cloned()
            .collect())
    }
}
