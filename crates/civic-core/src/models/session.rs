//! Session domain model.
//!
//! A session is the client's record of who is signed in. It is an
//! explicit value owned by the caller and handed by reference to the
//! access gate and to services; there is no process-wide instance.

use serde::{Deserialize, Serialize};

use crate::models::user::{Role, User};

/// The persisted identity of a signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionUser {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Opaque bearer token. Not verified anywhere on the client.
    pub token: String,
}

impl SessionUser {
    pub fn from_user(user: User, token: String) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            token,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    user: Option<SessionUser>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn authenticated(user: SessionUser) -> Self {
        Self { user: Some(user) }
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn role(&self) -> Option<&Role> {
        self.user.as_ref().map(|u| &u.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(&Role::Admin)
    }

    pub fn is_citizen(&self) -> bool {
        self.role() == Some(&Role::Citizen)
    }

    /// Drop the signed-in user, returning it if there was one.
    pub fn end(&mut self) -> Option<SessionUser> {
        self.user.take()
    }
}
