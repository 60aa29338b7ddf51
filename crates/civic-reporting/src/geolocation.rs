//! Device position acquisition.

use std::sync::atomic::{AtomicU64, Ordering};

use civic_core::error::{CivicError, CivicResult};
use civic_core::models::issue::Location;
use civic_core::notify::Notifier;
use civic_core::repository::{LocationProvider, PositionFix};
use tracing::debug;

use crate::draft::DEVICE_ADDRESS;

pub const LOCATION_DETECTED: &str = "Location detected successfully!";
pub const LOCATION_FAILED: &str = "Failed to get current location";
pub const LOCATION_UNSUPPORTED: &str = "Geolocation is not supported by this browser";

#[derive(Debug, Clone, PartialEq)]
pub enum LocationOutcome {
    Located(Location),
    PermissionDenied,
    Unsupported,
    /// A later acquisition started before this one completed; its
    /// result wins and this one is dropped.
    Superseded,
}

impl LocationOutcome {
    /// Message shown to the user, if any.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            LocationOutcome::Located(_) => Some(LOCATION_DETECTED),
            LocationOutcome::PermissionDenied => Some(LOCATION_FAILED),
            LocationOutcome::Unsupported => Some(LOCATION_UNSUPPORTED),
            LocationOutcome::Superseded => None,
        }
    }

    /// The acquired location, or why there is none.
    pub fn into_location(self) -> CivicResult<Location> {
        match self {
            LocationOutcome::Located(location) => Ok(location),
            LocationOutcome::PermissionDenied => {
                Err(CivicError::Geolocation(LOCATION_FAILED.into()))
            }
            LocationOutcome::Unsupported => {
                Err(CivicError::Geolocation(LOCATION_UNSUPPORTED.into()))
            }
            LocationOutcome::Superseded => {
                Err(CivicError::Geolocation("superseded by a newer request".into()))
            }
        }
    }

    pub fn report_to(&self, notifier: &impl Notifier) {
        match (self, self.notice()) {
            (LocationOutcome::Located(_), Some(message)) => notifier.success(message),
            (_, Some(message)) => notifier.error(message),
            (_, None) => {}
        }
    }
}

/// Tracks in-flight position requests so only the latest one applies.
#[derive(Debug, Default)]
pub struct GeolocationTracker {
    generation: AtomicU64,
}

impl GeolocationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire<P: LocationProvider>(&self, provider: &P) -> LocationOutcome {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let fix = provider.current_position().await;

        if self.generation.load(Ordering::SeqCst) != ticket {
            debug!(ticket, "position request superseded");
            return LocationOutcome::Superseded;
        }

        match fix {
            PositionFix::Located { lat, lng } => {
                LocationOutcome::Located(Location::new(lat, lng, DEVICE_ADDRESS))
            }
            PositionFix::PermissionDenied => LocationOutcome::PermissionDenied,
            PositionFix::Unsupported => LocationOutcome::Unsupported,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(PositionFix);

    impl LocationProvider for Fixed {
        async fn current_position(&self) -> PositionFix {
            self.0
        }
    }

    #[tokio::test]
    async fn located_fix_uses_device_address() {
        let tracker = GeolocationTracker::new();
        let outcome = tracker
            .acquire(&Fixed(PositionFix::Located { lat: 28.6, lng: 77.2 }))
            .await;
        let location = outcome.into_location().unwrap();
        assert_eq!(location, Location::new(28.6, 77.2, "Current Location"));
    }

    #[tokio::test]
    async fn sequential_requests_are_not_superseded() {
        let tracker = GeolocationTracker::new();
        let fix = Fixed(PositionFix::Located { lat: 1.0, lng: 2.0 });
        assert!(matches!(tracker.acquire(&fix).await, LocationOutcome::Located(_)));
        assert!(matches!(tracker.acquire(&fix).await, LocationOutcome::Located(_)));
    }

    #[test]
    fn failures_map_to_geolocation_errors() {
        let err = LocationOutcome::Unsupported.into_location().unwrap_err();
        assert!(matches!(err, CivicError::Geolocation(_)));
        assert!(err.to_string().contains("not supported"));
        assert_eq!(LocationOutcome::Superseded.notice(), None);
    }
}
