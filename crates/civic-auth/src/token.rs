//! Stand-in session tokens.
//!
//! Tokens are opaque strings minted locally after login or
//! registration. Nothing verifies them.

use chrono::Utc;

use crate::config::AuthConfig;

/// Mint a token of the form `<prefix><unix millis>`.
pub fn issue_session_token(config: &AuthConfig) -> String {
    format!("{}{}", config.token_prefix, Utc::now().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_carries_prefix_and_timestamp() {
        let config = AuthConfig::default();
        let token = issue_session_token(&config);
        let millis = token.strip_prefix("dummy-jwt-token-").unwrap();
        assert!(millis.parse::<i64>().unwrap() > 0);
    }
}
