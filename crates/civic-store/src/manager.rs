//! Store wiring.

use std::path::PathBuf;

use tracing::info;

use crate::error::StoreError;
use crate::fixtures;
use crate::repository::{FileSessionStore, InMemoryIssueRepository};

/// Configuration for the local stores.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding the persisted session record.
    pub session_dir: PathBuf,
    /// Key the session record is stored under (file stem).
    pub session_key: String,
    /// Seed the issue repository with the demo issues.
    pub seed_fixtures: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            session_dir: PathBuf::from(".civic"),
            session_key: "civic_user".into(),
            seed_fixtures: true,
        }
    }
}

/// Owns the issue repository and session store for one client.
#[derive(Clone)]
pub struct StoreManager {
    issues: InMemoryIssueRepository,
    sessions: FileSessionStore,
}

impl StoreManager {
    /// Build the stores described by `config`.
    pub fn open(config: &StoreConfig) -> Result<Self, StoreError> {
        info!(
            session_dir = %config.session_dir.display(),
            session_key = %config.session_key,
            seed_fixtures = config.seed_fixtures,
            "Opening civic stores"
        );

        let issues = if config.seed_fixtures {
            InMemoryIssueRepository::seeded(fixtures::dummy_issues())?
        } else {
            InMemoryIssueRepository::new()
        };
        let sessions = FileSessionStore::new(&config.session_dir, &config.session_key);

        Ok(Self { issues, sessions })
    }

    pub fn issues(&self) -> &InMemoryIssueRepository {
        &self.issues
    }

    pub fn sessions(&self) -> &FileSessionStore {
        &self.sessions
    }
}
