//! Authentication configuration.

use std::time::Duration;

/// Configuration for the authentication service.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Base URL of the remote API (default: `http://localhost:8080`).
    pub api_base_url: String,
    /// Prefix of locally issued stand-in tokens.
    pub token_prefix: String,
    /// Fixed delay awaited by the simulated registration API.
    pub simulated_latency: Duration,
    /// Timeout for requests to the remote API (default: 30 seconds).
    pub request_timeout: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".into(),
            token_prefix: "dummy-jwt-token-".into(),
            simulated_latency: Duration::ZERO,
            request_timeout: Duration::from_secs(30),
        }
    }
}
