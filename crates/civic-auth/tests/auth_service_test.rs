//! Integration tests for the authentication service.

use std::time::Duration;

use civic_auth::config::AuthConfig;
use civic_auth::registration::{HttpRegistrationApi, SimulatedRegistrationApi};
use civic_auth::service::{AuthService, LoginInput};
use civic_core::access::{self, AccessDecision};
use civic_core::error::CivicError;
use civic_core::models::user::{RegisterUser, Role};
use civic_core::repository::SessionStore;
use civic_store::FileSessionStore;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config() -> AuthConfig {
    AuthConfig {
        api_base_url: "http://127.0.0.1:9".into(),
        token_prefix: "dummy-jwt-token-".into(),
        simulated_latency: Duration::ZERO,
        request_timeout: Duration::from_secs(5),
    }
}

/// Fresh session directory plus a service over it.
fn setup() -> (
    TempDir,
    AuthService<FileSessionStore, SimulatedRegistrationApi>,
) {
    let dir = tempfile::tempdir().unwrap();
    let store = FileSessionStore::new(dir.path(), "civic_user");
    let svc = AuthService::new(
        store,
        SimulatedRegistrationApi::new(Duration::ZERO),
        test_config(),
    );
    (dir, svc)
}

fn citizen_login() -> LoginInput {
    LoginInput {
        email: "john@example.com".into(),
        password: "password".into(),
        role: Role::Citizen,
    }
}

fn new_user() -> RegisterUser {
    RegisterUser {
        name: "Jane Smith".into(),
        email: "jane@example.com".into(),
        password: "correct-horse-battery".into(),
        phone: Some("+91-9876543212".into()),
        role: Role::Citizen,
    }
}

// -----------------------------------------------------------------------
// Login / restore / logout
// -----------------------------------------------------------------------

#[tokio::test]
async fn login_happy_path() {
    let (_dir, svc) = setup();

    let session = svc.login(citizen_login()).await.unwrap();

    let user = session.user().unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.name, "John Doe");
    assert_eq!(user.email, "john@example.com");
    assert!(user.token.starts_with("dummy-jwt-token-"));
    assert!(session.is_citizen());
}

#[tokio::test]
async fn admin_login_uses_admin_identity() {
    let (_dir, svc) = setup();

    let session = svc
        .login(LoginInput {
            email: "admin@city.gov".into(),
            password: "admin".into(),
            role: Role::Admin,
        })
        .await
        .unwrap();

    assert_eq!(session.user().unwrap().id, 2);
    assert_eq!(session.user().unwrap().name, "Admin User");
    assert!(access::decide(&session, Some(&Role::Admin)).is_allowed());
}

#[tokio::test]
async fn login_requires_credentials() {
    let (_dir, svc) = setup();

    let err = svc
        .login(LoginInput {
            email: "  ".into(),
            password: "pw".into(),
            role: Role::Citizen,
        })
        .await
        .unwrap_err();

    assert!(
        matches!(err, CivicError::Validation { .. }),
        "expected Validation, got: {err:?}"
    );
}

#[tokio::test]
async fn restore_after_login_returns_same_user() {
    let (dir, svc) = setup();
    let session = svc.login(citizen_login()).await.unwrap();

    // Simulate a restart: new service over the same directory.
    let restarted = AuthService::new(
        FileSessionStore::new(dir.path(), "civic_user"),
        SimulatedRegistrationApi::new(Duration::ZERO),
        test_config(),
    );
    let restored = restarted.restore().await;

    assert_eq!(restored, session);
}

#[tokio::test]
async fn restore_without_record_is_anonymous() {
    let (_dir, svc) = setup();
    let session = svc.restore().await;
    assert!(!session.is_authenticated());
    assert_eq!(
        access::decide(&session, Some(&Role::Admin)),
        AccessDecision::RedirectTo("/login".into())
    );
}

#[tokio::test]
async fn restore_discards_corrupt_record() {
    let (dir, svc) = setup();
    let store = FileSessionStore::new(dir.path(), "civic_user");
    tokio::fs::write(store.path(), b"not json").await.unwrap();

    let session = svc.restore().await;

    assert!(!session.is_authenticated());
    assert_eq!(store.get().await.unwrap(), None);
}

#[tokio::test]
async fn logout_clears_session_and_record() {
    let (dir, svc) = setup();
    let mut session = svc.login(citizen_login()).await.unwrap();

    svc.logout(&mut session).await.unwrap();

    assert!(!session.is_authenticated());
    let store = FileSessionStore::new(dir.path(), "civic_user");
    assert_eq!(store.get().await.unwrap(), None);
}

// -----------------------------------------------------------------------
// Registration
// -----------------------------------------------------------------------

#[tokio::test]
async fn register_with_simulated_api_signs_in() {
    let (dir, svc) = setup();

    let session = svc.register(new_user()).await.unwrap();

    let user = session.user().unwrap();
    assert_eq!(user.name, "Jane Smith");
    assert!(user.token.starts_with("dummy-jwt-token-"));
    let store = FileSessionStore::new(dir.path(), "civic_user");
    assert_eq!(store.get().await.unwrap().as_ref(), Some(user));
}

#[tokio::test]
async fn register_requires_fields() {
    let (_dir, svc) = setup();
    let mut input = new_user();
    input.name = String::new();

    let err = svc.register(input).await.unwrap_err();
    assert_eq!(err.to_string(), "Please fill in all required fields");
}

fn http_service(
    server: &MockServer,
    dir: &TempDir,
) -> AuthService<FileSessionStore, HttpRegistrationApi> {
    let config = AuthConfig {
        api_base_url: server.uri(),
        ..test_config()
    };
    let api = HttpRegistrationApi::new(&config).unwrap();
    AuthService::new(FileSessionStore::new(dir.path(), "civic_user"), api, config)
}

#[tokio::test]
async fn register_over_http_uses_returned_user() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 42,
            "name": "Jane Smith",
            "email": "jane@example.com",
            "role": "citizen"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();
    let svc = http_service(&server, &dir);

    let session = svc.register(new_user()).await.unwrap();

    assert_eq!(session.user().unwrap().id, 42);
    assert!(session.is_citizen());
}

#[tokio::test]
async fn register_over_http_surfaces_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(ResponseTemplate::new(409).set_body_string("Email already registered"))
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();
    let svc = http_service(&server, &dir);

    let err = svc.register(new_user()).await.unwrap_err();

    assert!(matches!(err, CivicError::Registration(_)));
    assert_eq!(err.to_string(), "Email already registered");
    // Nothing is persisted on failure.
    let store = FileSessionStore::new(dir.path(), "civic_user");
    assert_eq!(store.get().await.unwrap(), None);
}

#[tokio::test]
async fn register_over_http_without_body_uses_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();
    let svc = http_service(&server, &dir);

    let err = svc.register(new_user()).await.unwrap_err();
    assert_eq!(err.to_string(), "Registration failed");
}
