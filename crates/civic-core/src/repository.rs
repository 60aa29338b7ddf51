//! Port trait definitions for data access and external collaborators.
//!
//! All operations are async so that the in-process fixtures used today
//! can be swapped for remote endpoints without touching callers.

use crate::error::CivicResult;
use crate::models::issue::{CreateIssue, Issue, IssueId, UpdateIssue};
use crate::models::session::SessionUser;
use crate::models::user::{RegisterUser, User};

// ---------------------------------------------------------------------------
// Issues
// ---------------------------------------------------------------------------

pub trait IssueRepository: Send + Sync {
    /// Store a new issue in `submitted` state with `reported_at ==
    /// updated_at` and no assignee.
    fn create(&self, input: CreateIssue) -> impl Future<Output = CivicResult<Issue>> + Send;
    fn get_by_id(&self, id: IssueId) -> impl Future<Output = CivicResult<Issue>> + Send;
    /// Apply an administrative change. `updated_at` moves only when the
    /// status or assignee is set.
    fn update(
        &self,
        id: IssueId,
        input: UpdateIssue,
    ) -> impl Future<Output = CivicResult<Issue>> + Send;
    /// All issues in insertion order.
    fn list(&self) -> impl Future<Output = CivicResult<Vec<Issue>>> + Send;
    /// Issues whose `reported_by` equals `reporter`, in insertion order.
    fn list_by_reporter(
        &self,
        reporter: &str,
    ) -> impl Future<Output = CivicResult<Vec<Issue>>> + Send;
}

// ---------------------------------------------------------------------------
// Session persistence
// ---------------------------------------------------------------------------

/// Durable client-side storage for the signed-in user under a fixed key.
pub trait SessionStore: Send + Sync {
    fn get(&self) -> impl Future<Output = CivicResult<Option<SessionUser>>> + Send;
    fn set(&self, user: &SessionUser) -> impl Future<Output = CivicResult<()>> + Send;
    fn clear(&self) -> impl Future<Output = CivicResult<()>> + Send;
}

// ---------------------------------------------------------------------------
// Remote API
// ---------------------------------------------------------------------------

/// `POST /api/auth/register`.
pub trait RegistrationApi: Send + Sync {
    /// Returns the created user, or `CivicError::Registration` carrying
    /// the server's message.
    fn register(&self, input: &RegisterUser) -> impl Future<Output = CivicResult<User>> + Send;
}

// ---------------------------------------------------------------------------
// Geolocation
// ---------------------------------------------------------------------------

/// Result of asking the platform for the device position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PositionFix {
    Located { lat: f64, lng: f64 },
    PermissionDenied,
    Unsupported,
}

pub trait LocationProvider: Send + Sync {
    fn current_position(&self) -> impl Future<Output = PositionFix> + Send;
}
