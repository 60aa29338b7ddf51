//! Civic Core: domain models, port traits, and the pure view-model
//! logic shared by every civic crate.
//!
//! - [`timeline`] derives the displayed lifecycle of an issue
//! - [`filter`] narrows an issue collection by search text and facets
//! - [`analytics`] aggregates counts, rates, and breakdowns
//! - [`access`] decides whether a session may view a route

pub mod access;
pub mod analytics;
pub mod error;
pub mod filter;
pub mod models;
pub mod notify;
pub mod repository;
pub mod routes;
pub mod timeline;

pub use access::{AccessDecision, decide};
pub use error::{CivicError, CivicResult};
pub use filter::{IssueFilter, SearchScope, Selection};
