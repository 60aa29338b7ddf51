//! Issue domain model.
//!
//! An issue is a civic problem reported by a citizen. It carries a
//! category, a lifecycle status, and the location it was
//! reported at.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type IssueId = u64;

/// Issue category.
///
/// Reports are filed under one of the offered categories. Issues loaded
/// from elsewhere may carry any other name; those are kept as
/// `Unrecognized` so they still aggregate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(from = "String", into = "String")]
pub enum Category {
    RoadInfrastructure,
    WaterSupply,
    Electricity,
    WasteManagement,
    PublicSafety,
    Healthcare,
    Education,
    Transportation,
    Environmental,
    Other,
    Unrecognized(String),
}

impl Category {
    /// Categories offered when reporting an issue.
    pub const ALL: [Category; 10] = [
        Category::RoadInfrastructure,
        Category::WaterSupply,
        Category::Electricity,
        Category::WasteManagement,
        Category::PublicSafety,
        Category::Healthcare,
        Category::Education,
        Category::Transportation,
        Category::Environmental,
        Category::Other,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Category::RoadInfrastructure => "Road & Infrastructure",
            Category::WaterSupply => "Water Supply",
            Category::Electricity => "Electricity",
            Category::WasteManagement => "Waste Management",
            Category::PublicSafety => "Public Safety",
            Category::Healthcare => "Healthcare",
            Category::Education => "Education",
            Category::Transportation => "Transportation",
            Category::Environmental => "Environmental",
            Category::Other => "Other",
            Category::Unrecognized(other) => other,
        }
    }

    /// Look up an offered category by its display name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Category::parse(&value).unwrap_or(Category::Unrecognized(value))
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_owned()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of an issue.
///
/// The happy path is `Submitted -> Acknowledged -> InProgress -> Resolved`.
/// `Rejected` is an alternative terminal state outside that path.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum IssueStatus {
    Submitted,
    Acknowledged,
    InProgress,
    Resolved,
    Rejected,
}

impl IssueStatus {
    pub const ALL: [IssueStatus; 5] = [
        IssueStatus::Submitted,
        IssueStatus::Acknowledged,
        IssueStatus::InProgress,
        IssueStatus::Resolved,
        IssueStatus::Rejected,
    ];

    /// The four steps of the happy path, in order.
    pub const HAPPY_PATH: [IssueStatus; 4] = [
        IssueStatus::Submitted,
        IssueStatus::Acknowledged,
        IssueStatus::InProgress,
        IssueStatus::Resolved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IssueStatus::Submitted => "submitted",
            IssueStatus::Acknowledged => "acknowledged",
            IssueStatus::InProgress => "in_progress",
            IssueStatus::Resolved => "resolved",
            IssueStatus::Rejected => "rejected",
        }
    }

    /// Human-readable badge text ("In progress").
    pub fn label(&self) -> &'static str {
        match self {
            IssueStatus::Submitted => "Submitted",
            IssueStatus::Acknowledged => "Acknowledged",
            IssueStatus::InProgress => "In progress",
            IssueStatus::Resolved => "Resolved",
            IssueStatus::Rejected => "Rejected",
        }
    }

    /// Position on the happy path; `None` for `Rejected`.
    pub fn progress_rank(&self) -> Option<usize> {
        Self::HAPPY_PATH.iter().position(|s| s == self)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, IssueStatus::Resolved | IssueStatus::Rejected)
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == name)
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        [Priority::Low, Priority::Medium, Priority::High]
            .into_iter()
            .find(|p| p.as_str() == name)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved point on the map.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub address: String,
}

impl Location {
    pub fn new(lat: f64, lng: f64, address: impl Into<String>) -> Self {
        Self {
            lat,
            lng,
            address: address.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: IssueId,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub status: IssueStatus,
    pub priority: Priority,
    pub location: Location,
    pub reported_by: String,
    pub reported_at: DateTime<Utc>,
    /// Time of the latest status or assignment change.
    pub updated_at: DateTime<Utc>,
    pub assigned_to: Option<String>,
    /// Image references, in upload order.
    pub photos: Vec<String>,
}

/// Fields required to create a new issue. Produced by draft validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIssue {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
    pub location: Location,
    pub reported_by: String,
    pub photos: Vec<String>,
}

/// Administrative changes to an existing issue.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIssue {
    pub status: Option<IssueStatus>,
    /// `None` keeps the current assignee.
    pub assigned_to: Option<String>,
    pub priority: Option<Priority>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_snake_case_on_the_wire() {
        let json = serde_json::to_string(&IssueStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
        let back: IssueStatus = serde_json::from_str("\"rejected\"").unwrap();
        assert_eq!(back, IssueStatus::Rejected);
    }

    #[test]
    fn category_uses_display_names_on_the_wire() {
        let json = serde_json::to_string(&Category::RoadInfrastructure).unwrap();
        assert_eq!(json, "\"Road & Infrastructure\"");
        assert_eq!(Category::parse("Water Supply"), Some(Category::WaterSupply));
        assert_eq!(Category::parse("Potholes"), None);
    }

    #[test]
    fn unknown_category_is_kept_verbatim() {
        let category: Category = serde_json::from_str("\"Parks & Recreation\"").unwrap();
        assert_eq!(category, Category::Unrecognized("Parks & Recreation".into()));
        assert_eq!(
            serde_json::to_string(&category).unwrap(),
            "\"Parks & Recreation\""
        );
        assert_eq!(category.to_string(), "Parks & Recreation");
    }

    #[test]
    fn rejected_is_off_the_happy_path() {
        assert_eq!(IssueStatus::Submitted.progress_rank(), Some(0));
        assert_eq!(IssueStatus::Resolved.progress_rank(), Some(3));
        assert_eq!(IssueStatus::Rejected.progress_rank(), None);
        assert!(IssueStatus::Rejected.is_terminal());
        assert!(!IssueStatus::InProgress.is_terminal());
    }

    #[test]
    fn priority_defaults_to_medium() {
        assert_eq!(Priority::default(), Priority::Medium);
        assert_eq!(Priority::parse("high"), Some(Priority::High));
    }

    #[test]
    fn issue_serializes_with_camel_case_fields() {
        let issue = Issue {
            id: 7,
            title: "t".into(),
            description: "d".into(),
            category: Category::Other,
            status: IssueStatus::Submitted,
            priority: Priority::Low,
            location: Location::new(1.0, 2.0, "here"),
            reported_by: "someone".into(),
            reported_at: Utc::now(),
            updated_at: Utc::now(),
            assigned_to: None,
            photos: vec![],
        };
        let value = serde_json::to_value(&issue).unwrap();
        assert!(value.get("reportedBy").is_some());
        assert!(value.get("assignedTo").unwrap().is_null());
    }
}
