//! Authentication service: session restore, login, registration, and
//! logout orchestration.

use civic_core::error::CivicResult;
use civic_core::models::session::{Session, SessionUser};
use civic_core::models::user::{RegisterUser, Role};
use civic_core::repository::{RegistrationApi, SessionStore};
use tracing::{info, warn};

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::token;

/// Input for the login flow.
#[derive(Debug)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Authentication service.
///
/// Generic over the session store and registration API so that the
/// auth layer has no dependency on the storage crate. The service holds
/// no session of its own: every operation hands back the [`Session`]
/// the caller owns.
pub struct AuthService<S: SessionStore, R: RegistrationApi> {
    store: S,
    registration: R,
    config: AuthConfig,
}

impl<S: SessionStore, R: RegistrationApi> AuthService<S, R> {
    pub fn new(store: S, registration: R, config: AuthConfig) -> Self {
        Self {
            store,
            registration,
            config,
        }
    }

    /// Rebuild the session persisted by a previous run.
    ///
    /// An unreadable record is discarded and yields an anonymous
    /// session.
    pub async fn restore(&self) -> Session {
        match self.store.get().await {
            Ok(Some(user)) => {
                info!(user_id = user.id, role = %user.role, "session restored");
                Session::authenticated(user)
            }
            Ok(None) => Session::anonymous(),
            Err(e) => {
                warn!(error = %e, "discarding unreadable session record");
                if let Err(e) = self.store.clear().await {
                    warn!(error = %e, "failed to clear session record");
                }
                Session::anonymous()
            }
        }
    }

    /// Sign in with a locally minted identity.
    ///
    /// Credentials are not checked against anything; the requested
    /// role picks the demo identity.
    pub async fn login(&self, input: LoginInput) -> CivicResult<Session> {
        if input.email.trim().is_empty() || input.password.is_empty() {
            return Err(AuthError::MissingFields.into());
        }

        let (id, name) = match input.role {
            Role::Admin => (2, "Admin User"),
            _ => (1, "John Doe"),
        };
        let user = SessionUser {
            id,
            name: name.into(),
            email: input.email,
            role: input.role,
            token: token::issue_session_token(&self.config),
        };

        self.store.set(&user).await?;
        info!(user_id = user.id, role = %user.role, "logged in");
        Ok(Session::authenticated(user))
    }

    /// Create an account through the registration API and sign in as it.
    pub async fn register(&self, input: RegisterUser) -> CivicResult<Session> {
        if input.name.trim().is_empty() || input.email.trim().is_empty() || input.password.is_empty()
        {
            return Err(AuthError::MissingFields.into());
        }

        let created = self.registration.register(&input).await?;
        let user = SessionUser::from_user(created, token::issue_session_token(&self.config));

        self.store.set(&user).await?;
        info!(user_id = user.id, role = %user.role, "registered");
        Ok(Session::authenticated(user))
    }

    /// End `session` and forget the persisted record.
    pub async fn logout(&self, session: &mut Session) -> CivicResult<()> {
        if let Some(user) = session.end() {
            info!(user_id = user.id, "logged out");
        }
        self.store.clear().await
    }
}
