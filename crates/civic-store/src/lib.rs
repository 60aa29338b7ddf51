//! Civic Store: in-process storage behind the `civic-core` ports.
//!
//! This crate provides:
//! - An in-memory issue repository ([`InMemoryIssueRepository`])
//! - A JSON-file session store ([`FileSessionStore`])
//! - Seed data mirroring the demo build ([`fixtures`])
//! - Store wiring and configuration ([`StoreManager`], [`StoreConfig`])

pub mod fixtures;
mod manager;
mod error;
pub mod repository;

pub use error::StoreError;
pub use manager::{StoreConfig, StoreManager};
pub use repository::{FileSessionStore, InMemoryIssueRepository};
