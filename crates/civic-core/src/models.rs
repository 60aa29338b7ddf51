//! Domain models for civic issue reporting.
//!
//! These are the core types shared across all crates.

pub mod analytics;
pub mod issue;
pub mod session;
pub mod user;
