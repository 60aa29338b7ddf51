//! Implementations of the `POST /api/auth/register` contract.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use chrono::Utc;
use civic_core::error::CivicResult;
use civic_core::models::user::{RegisterUser, User};
use civic_core::repository::RegistrationApi;
use tracing::{debug, warn};

use crate::config::AuthConfig;
use crate::error::{AuthError, REGISTRATION_FAILED};

const REGISTER_PATH: &str = "/api/auth/register";

/// Registration against a real HTTP backend.
#[derive(Debug, Clone)]
pub struct HttpRegistrationApi {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpRegistrationApi {
    pub fn new(config: &AuthConfig) -> Result<Self, AuthError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AuthError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: format!(
                "{}{REGISTER_PATH}",
                config.api_base_url.trim_end_matches('/')
            ),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send(&self, input: &RegisterUser) -> Result<User, AuthError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(input)
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<User>()
                .await
                .map_err(|e| AuthError::Transport(format!("invalid user payload: {e}")));
        }

        let body = response.text().await.unwrap_or_default();
        let message = if body.trim().is_empty() {
            REGISTRATION_FAILED.to_owned()
        } else {
            body
        };
        Err(AuthError::RegistrationRejected(message))
    }
}

impl RegistrationApi for HttpRegistrationApi {
    async fn register(&self, input: &RegisterUser) -> CivicResult<User> {
        debug!(endpoint = %self.endpoint, email = %input.email, "registering user");
        self.send(input).await.map_err(|e| {
            warn!(error = %e, email = %input.email, "registration failed");
            e.into()
        })
    }
}

/// Offline stand-in: waits a fixed delay, then always succeeds.
#[derive(Debug)]
pub struct SimulatedRegistrationApi {
    latency: Duration,
    next_id: AtomicU64,
}

impl SimulatedRegistrationApi {
    /// Ids are handed out starting after the demo users.
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            next_id: AtomicU64::new(3),
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.simulated_latency)
    }
}

impl RegistrationApi for SimulatedRegistrationApi {
    async fn register(&self, input: &RegisterUser) -> CivicResult<User> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(User {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            name: input.name.clone(),
            email: input.email.clone(),
            role: input.role.clone(),
            phone: input.phone.clone(),
            created_at: Some(Utc::now()),
        })
    }
}

#[cfg(test)]
mod tests {
    use civic_core::models::user::Role;

    use super::*;

    fn jane() -> RegisterUser {
        RegisterUser {
            name: "Jane Smith".into(),
            email: "jane@example.com".into(),
            password: "secret".into(),
            phone: None,
            role: Role::Citizen,
        }
    }

    #[test]
    fn endpoint_joins_base_url() {
        let config = AuthConfig {
            api_base_url: "http://api.example.test/".into(),
            ..Default::default()
        };
        let api = HttpRegistrationApi::new(&config).unwrap();
        assert_eq!(api.endpoint(), "http://api.example.test/api/auth/register");
    }

    #[tokio::test]
    async fn simulated_api_assigns_increasing_ids() {
        let api = SimulatedRegistrationApi::new(Duration::ZERO);
        let first = api.register(&jane()).await.unwrap();
        let second = api.register(&jane()).await.unwrap();
        assert_eq!(first.id, 3);
        assert_eq!(second.id, 4);
        assert_eq!(first.name, "Jane Smith");
        assert_eq!(first.role, Role::Citizen);
    }
}
