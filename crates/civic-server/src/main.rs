//! Civic Server: application entry point.
//!
//! Opens the local stores, restores the persisted session, and reports
//! what the signed-in user's home view would show.

use std::path::PathBuf;
use std::process::ExitCode;

use civic_auth::{AuthConfig, AuthService, HttpRegistrationApi, SimulatedRegistrationApi};
use civic_core::error::CivicResult;
use civic_core::filter::IssueFilter;
use civic_core::models::session::Session;
use civic_core::models::user::Role;
use civic_core::notify::TracingNotifier;
use civic_core::repository::RegistrationApi;
use civic_core::routes;
use civic_reporting::{IssueService, ReportingConfig};
use civic_store::{FileSessionStore, InMemoryIssueRepository, StoreConfig, StoreManager};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const SESSION_DIR_VAR: &str = "CIVIC_SESSION_DIR";
const API_BASE_URL_VAR: &str = "CIVIC_API_BASE_URL";

struct AppConfig {
    store: StoreConfig,
    auth: AuthConfig,
    reporting: ReportingConfig,
    /// Register against the remote API instead of the simulated one.
    remote_registration: bool,
}

impl AppConfig {
    fn from_env() -> Self {
        let mut store = StoreConfig::default();
        if let Some(dir) = std::env::var_os(SESSION_DIR_VAR) {
            store.session_dir = PathBuf::from(dir);
        }

        let mut auth = AuthConfig::default();
        let remote_registration = match std::env::var(API_BASE_URL_VAR) {
            Ok(url) if !url.trim().is_empty() => {
                auth.api_base_url = url;
                true
            }
            _ => false,
        };

        Self {
            store,
            auth,
            reporting: ReportingConfig::default(),
            remote_registration,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = "civic=info".parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt().with_env_filter(filter).json().init();

    info!("Starting civic server...");

    let config = AppConfig::from_env();
    let stores = match StoreManager::open(&config.store) {
        Ok(stores) => stores,
        Err(e) => {
            error!(error = %e, "failed to open stores");
            return ExitCode::FAILURE;
        }
    };
    let issues = IssueService::new(
        stores.issues().clone(),
        TracingNotifier,
        config.reporting,
    );

    let result = if config.remote_registration {
        match HttpRegistrationApi::new(&config.auth) {
            Ok(api) => run(&stores, api, config.auth, &issues).await,
            Err(e) => {
                error!(error = %e, "failed to build registration client");
                return ExitCode::FAILURE;
            }
        }
    } else {
        let api = SimulatedRegistrationApi::from_config(&config.auth);
        run(&stores, api, config.auth, &issues).await
    };

    match result {
        Ok(()) => {
            info!("Civic server stopped.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "civic server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run<R: RegistrationApi>(
    stores: &StoreManager,
    registration: R,
    auth_config: AuthConfig,
    issues: &IssueService<InMemoryIssueRepository, TracingNotifier>,
) -> CivicResult<()> {
    let auth: AuthService<FileSessionStore, R> =
        AuthService::new(stores.sessions().clone(), registration, auth_config);
    let session = auth.restore().await;

    let home = home_path(&session);
    let decision = routes::guard(home, &session);
    info!(path = home, ?decision, "initial route");
    if !decision.is_allowed() {
        return Ok(());
    }

    match session.role() {
        Some(Role::Admin) => {
            let dashboard = issues.dashboard(&session, &IssueFilter::default()).await?;
            info!(
                total = dashboard.stats.total,
                in_progress = dashboard.stats.in_progress,
                resolved = dashboard.stats.resolved,
                high_priority = dashboard.stats.high_priority,
                "admin dashboard"
            );
            let report = issues.analytics(&session, None).await?;
            info!(
                resolution_rate = report.snapshot.resolution_rate,
                trend_delta = report.trend.delta,
                avg_resolution_days = ?report.snapshot.avg_resolution_days,
                "analytics"
            );
        }
        Some(Role::Citizen) => {
            let mine = issues.my_reports(&session, &IssueFilter::default()).await?;
            info!(
                reports = mine.issues.len(),
                pending = mine.stats.pending,
                in_progress = mine.stats.in_progress,
                resolved = mine.stats.resolved,
                "citizen dashboard"
            );
        }
        Some(Role::Unrecognized(role)) => warn!(%role, "session has an unrecognized role"),
        None => info!("no saved session, sign-in required"),
    }
    Ok(())
}

fn home_path(session: &Session) -> &'static str {
    session
        .role()
        .and_then(Role::home_path)
        .unwrap_or(civic_core::access::LOGIN_PATH)
}
