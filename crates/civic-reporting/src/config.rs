//! Reporting configuration.

use std::time::Duration;

/// Resolution rate of the period before the fixture data, in percent.
pub const DEFAULT_PREVIOUS_RATE: f64 = 68.5;

/// Configuration for the issue workflows.
#[derive(Debug, Clone)]
pub struct ReportingConfig {
    /// Fixed delay awaited before each repository call.
    pub simulated_latency: Duration,
    /// Resolution rate the analytics trend is compared against.
    pub previous_resolution_rate: f64,
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            simulated_latency: Duration::ZERO,
            previous_resolution_rate: DEFAULT_PREVIOUS_RATE,
        }
    }
}
