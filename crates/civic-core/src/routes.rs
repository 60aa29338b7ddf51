//! Route table for the client views.
//!
//! Each protected page passes through [`decide`](crate::access::decide)
//! exactly once; unknown paths redirect to the site root.

use crate::access::{self, AccessDecision, ROOT_PATH};
use crate::models::issue::IssueId;
use crate::models::session::Session;
use crate::models::user::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    Login,
    Register,
    AdminLogin,
    CitizenDashboard,
    ReportIssue,
    TrackList,
    TrackIssue(IssueId),
    AdminDashboard,
    Analytics,
}

impl Route {
    /// Match a request path. Returns `None` for paths with no view.
    pub fn resolve(path: &str) -> Option<Self> {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        let route = match path {
            "/" => Route::Landing,
            "/login" => Route::Login,
            "/register" => Route::Register,
            "/admin/login" => Route::AdminLogin,
            "/citizen/dashboard" => Route::CitizenDashboard,
            "/citizen/report" => Route::ReportIssue,
            "/citizen/track" => Route::TrackList,
            "/admin/dashboard" => Route::AdminDashboard,
            "/admin/analytics" => Route::Analytics,
            other => {
                let id = other.strip_prefix("/citizen/track/")?;
                Route::TrackIssue(id.parse().ok()?)
            }
        };
        Some(route)
    }

    /// Role a session must hold to view this route; `None` for public pages.
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Route::Landing | Route::Login | Route::Register | Route::AdminLogin => None,
            Route::CitizenDashboard
            | Route::ReportIssue
            | Route::TrackList
            | Route::TrackIssue(_) => Some(Role::Citizen),
            Route::AdminDashboard | Route::Analytics => Some(Role::Admin),
        }
    }

    pub fn is_public(&self) -> bool {
        self.required_role().is_none()
    }
}

/// Resolve `path` and decide whether `session` may view it.
pub fn guard(path: &str, session: &Session) -> AccessDecision {
    match Route::resolve(path) {
        None => AccessDecision::RedirectTo(ROOT_PATH.to_owned()),
        Some(route) if route.is_public() => AccessDecision::Allow,
        Some(route) => access::decide(session, route.required_role().as_ref()),
    }
}
