//! Access policy gate for client-side views.
//!
//! This decides which view to render; it protects no server resource
//! and must not be treated as an authorization boundary.

use serde::Serialize;

use crate::error::{CivicError, CivicResult};
use crate::models::session::Session;
use crate::models::user::Role;

pub const LOGIN_PATH: &str = "/login";
pub const ROOT_PATH: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AccessDecision {
    Allow,
    RedirectTo(String),
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allow)
    }
}

/// Decide whether `session` may view a page requiring `required_role`.
pub fn decide(session: &Session, required_role: Option<&Role>) -> AccessDecision {
    let Some(user) = session.user() else {
        return AccessDecision::RedirectTo(LOGIN_PATH.to_owned());
    };

    match required_role {
        Some(required) if &user.role != required => {
            let home = user.role.home_path().unwrap_or(ROOT_PATH);
            AccessDecision::RedirectTo(home.to_owned())
        }
        _ => AccessDecision::Allow,
    }
}

/// Gate for service operations: the session must hold `role`.
pub fn require_role(session: &Session, role: &Role) -> CivicResult<()> {
    match decide(session, Some(role)) {
        AccessDecision::Allow => Ok(()),
        AccessDecision::RedirectTo(_) if !session.is_authenticated() => {
            Err(CivicError::AuthenticationFailed {
                reason: "not signed in".into(),
            })
        }
        AccessDecision::RedirectTo(_) => Err(CivicError::AuthorizationDenied {
            reason: format!("requires the {role} role"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::session::SessionUser;

    fn session_as(role: Role) -> Session {
        Session::authenticated(SessionUser {
            id: 1,
            name: "John Doe".into(),
            email: "john@example.com".into(),
            role,
            token: "dummy-jwt-token-1".into(),
        })
    }

    #[test]
    fn anonymous_goes_to_login() {
        assert_eq!(
            decide(&Session::anonymous(), Some(&Role::Admin)),
            AccessDecision::RedirectTo("/login".into())
        );
        assert_eq!(
            decide(&Session::anonymous(), None),
            AccessDecision::RedirectTo("/login".into())
        );
    }

    #[test]
    fn citizen_on_admin_page_goes_home() {
        assert_eq!(
            decide(&session_as(Role::Citizen), Some(&Role::Admin)),
            AccessDecision::RedirectTo("/citizen/dashboard".into())
        );
    }

    #[test]
    fn admin_on_citizen_page_goes_home() {
        assert_eq!(
            decide(&session_as(Role::Admin), Some(&Role::Citizen)),
            AccessDecision::RedirectTo("/admin/dashboard".into())
        );
    }

    #[test]
    fn unknown_role_falls_back_to_root() {
        let session = session_as(Role::Unrecognized("auditor".into()));
        assert_eq!(
            decide(&session, Some(&Role::Citizen)),
            AccessDecision::RedirectTo("/".into())
        );
    }

    #[test]
    fn matching_or_absent_requirement_allows() {
        assert!(decide(&session_as(Role::Admin), Some(&Role::Admin)).is_allowed());
        assert!(decide(&session_as(Role::Citizen), None).is_allowed());
    }

    #[test]
    fn require_role_distinguishes_anonymous_from_wrong_role() {
        let err = require_role(&Session::anonymous(), &Role::Admin).unwrap_err();
        assert!(matches!(err, CivicError::AuthenticationFailed { .. }));

        let err = require_role(&session_as(Role::Citizen), &Role::Admin).unwrap_err();
        assert!(matches!(err, CivicError::AuthorizationDenied { .. }));

        assert!(require_role(&session_as(Role::Admin), &Role::Admin).is_ok());
    }
}
