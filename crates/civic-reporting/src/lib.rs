//! Citizen and administrator issue workflows.
//!
//! These services sit between the views and the ports defined in
//! `civic-core`: they gate every operation through the session, call the
//! repository, and report the outcome through a [`Notifier`].
//!
//! [`Notifier`]: civic_core::notify::Notifier

pub mod config;
pub mod draft;
pub mod geolocation;
pub mod service;

pub use config::ReportingConfig;
pub use draft::ReportDraft;
pub use geolocation::{GeolocationTracker, LocationOutcome};
pub use service::{AnalyticsReport, DashboardView, IssueService, MyReportsView, TrackingView};
