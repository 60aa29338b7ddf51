//! The in-progress issue a citizen is filling in.

use civic_core::error::{CivicError, CivicResult};
use civic_core::models::issue::{Category, CreateIssue, Location, Priority};
use serde::{Deserialize, Serialize};

pub const MISSING_FIELDS: &str = "Please fill in all required fields";
pub const MISSING_LOCATION: &str = "Please select a location on the map or use current location";

/// Address recorded for a point picked on the map.
pub const MAP_ADDRESS: &str = "Selected Location";
/// Address recorded for a point reported by the device.
pub const DEVICE_ADDRESS: &str = "Current Location";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDraft {
    pub title: String,
    pub description: String,
    pub category: Option<Category>,
    pub priority: Priority,
    pub photos: Vec<String>,
    pub location: Option<Location>,
}

impl ReportDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_photos<I, S>(&mut self, photos: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.photos.extend(photos.into_iter().map(Into::into));
    }

    /// Drop the photo at `index`; out-of-range indices are ignored.
    pub fn remove_photo(&mut self, index: usize) -> Option<String> {
        (index < self.photos.len()).then(|| self.photos.remove(index))
    }

    pub fn set_location_from_map(&mut self, lat: f64, lng: f64) {
        self.location = Some(Location::new(lat, lng, MAP_ADDRESS));
    }

    pub fn set_device_location(&mut self, lat: f64, lng: f64) {
        self.location = Some(Location::new(lat, lng, DEVICE_ADDRESS));
    }

    pub fn has_location(&self) -> bool {
        self.location.is_some()
    }

    /// Check the draft and turn it into a create request.
    ///
    /// Required fields are checked before the location.
    pub fn validate(&self, reported_by: &str) -> CivicResult<CreateIssue> {
        let title = self.title.trim();
        let description = self.description.trim();
        let category = self
            .category
            .clone()
            .filter(|_| !title.is_empty() && !description.is_empty())
            .ok_or_else(|| CivicError::validation(MISSING_FIELDS))?;
        let Some(location) = self.location.clone() else {
            return Err(CivicError::validation(MISSING_LOCATION));
        };

        Ok(CreateIssue {
            title: title.to_owned(),
            description: description.to_owned(),
            category,
            priority: self.priority,
            location,
            reported_by: reported_by.to_owned(),
            photos: self.photos.clone(),
        })
    }
}
