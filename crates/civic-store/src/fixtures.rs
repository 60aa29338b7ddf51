//! Seed data for demos and tests.
//!
//! These mirror the static data the client shipped with before a real
//! backend existed.

use chrono::{DateTime, TimeZone, Utc};
use civic_core::models::analytics::{
    AnalyticsSnapshot, CategoryCount, MonthlyCount, StatusCount,
};
use civic_core::models::issue::{Category, Issue, IssueStatus, Location, Priority};
use civic_core::models::user::{Role, User};

/// Resolution rate of the period before the demo snapshot, in percent.
pub const PREVIOUS_PERIOD_RATE: f64 = 68.5;

fn ts(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or(DateTime::UNIX_EPOCH)
}

#[allow(clippy::too_many_arguments)]
fn issue(
    id: u64,
    title: &str,
    description: &str,
    category: Category,
    status: IssueStatus,
    location: Location,
    reported_by: &str,
    reported_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    assigned_to: Option<&str>,
    priority: Priority,
    photo: &str,
) -> Issue {
    Issue {
        id,
        title: title.into(),
        description: description.into(),
        category,
        status,
        priority,
        location,
        reported_by: reported_by.into(),
        reported_at,
        updated_at,
        assigned_to: assigned_to.map(Into::into),
        photos: vec![photo.into()],
    }
}

/// The five demo issues around central New Delhi.
pub fn dummy_issues() -> Vec<Issue> {
    vec![
        issue(
            1,
            "Pothole on Main Street",
            "Large pothole causing traffic issues near the city center",
            Category::RoadInfrastructure,
            IssueStatus::InProgress,
            Location::new(28.6139, 77.2090, "Main Street, New Delhi"),
            "John Doe",
            ts(2024, 1, 15, 10, 30),
            ts(2024, 1, 16, 14, 20),
            Some("Road Maintenance Team"),
            Priority::High,
            "https://images.pexels.com/photos/163016/highway-the-band-road-street-163016.jpeg",
        ),
        issue(
            2,
            "Street Light Not Working",
            "Street light has been out for 3 days on Oak Avenue",
            Category::Electricity,
            IssueStatus::Acknowledged,
            Location::new(28.6129, 77.2295, "Oak Avenue, New Delhi"),
            "Jane Smith",
            ts(2024, 1, 14, 18, 45),
            ts(2024, 1, 15, 9, 10),
            Some("Electrical Department"),
            Priority::Medium,
            "https://images.pexels.com/photos/301920/pexels-photo-301920.jpeg",
        ),
        issue(
            3,
            "Water Leak in Park",
            "Major water pipe leak in Central Park causing flooding",
            Category::WaterSupply,
            IssueStatus::Resolved,
            Location::new(28.6219, 77.2085, "Central Park, New Delhi"),
            "Mike Johnson",
            ts(2024, 1, 12, 8, 20),
            ts(2024, 1, 14, 16, 30),
            Some("Water Department"),
            Priority::High,
            "https://images.pexels.com/photos/416978/pexels-photo-416978.jpeg",
        ),
        issue(
            4,
            "Garbage Collection Missed",
            "Garbage has not been collected for 5 days in Residential Area",
            Category::WasteManagement,
            IssueStatus::Submitted,
            Location::new(28.6339, 77.2190, "Residential Area, New Delhi"),
            "Sarah Wilson",
            ts(2024, 1, 16, 7, 15),
            ts(2024, 1, 16, 7, 15),
            None,
            Priority::Medium,
            "https://images.pexels.com/photos/128421/pexels-photo-128421.jpeg",
        ),
        issue(
            5,
            "Traffic Signal Malfunction",
            "Traffic light stuck on red at busy intersection",
            Category::Transportation,
            IssueStatus::InProgress,
            Location::new(28.6289, 77.2065, "Mall Road Intersection, New Delhi"),
            "David Brown",
            ts(2024, 1, 15, 16, 0),
            ts(2024, 1, 16, 12, 45),
            Some("Traffic Control Unit"),
            Priority::High,
            "https://images.pexels.com/photos/280193/pexels-photo-280193.jpeg",
        ),
    ]
}

pub fn dummy_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "John Doe".into(),
            email: "john@example.com".into(),
            role: Role::Citizen,
            phone: Some("+91-9876543210".into()),
            created_at: Some(ts(2024, 1, 1, 0, 0)),
        },
        User {
            id: 2,
            name: "Admin User".into(),
            email: "admin@city.gov".into(),
            role: Role::Admin,
            phone: Some("+91-9876543211".into()),
            created_at: Some(ts(2024, 1, 1, 0, 0)),
        },
    ]
}

/// Pre-baked city-wide snapshot shown before live aggregation existed.
///
/// Its totals do not derive from [`dummy_issues`].
pub fn dummy_analytics() -> AnalyticsSnapshot {
    let categories = [
        (Category::RoadInfrastructure, 45),
        (Category::WaterSupply, 35),
        (Category::Electricity, 30),
        (Category::WasteManagement, 25),
        (Category::Transportation, 20),
        (Category::Other, 95),
    ];
    let statuses = [
        (IssueStatus::Submitted, 30),
        (IssueStatus::Acknowledged, 25),
        (IssueStatus::InProgress, 15),
        (IssueStatus::Resolved, 180),
        (IssueStatus::Rejected, 5),
    ];
    let months = [
        (1, "Jan", 45, 38),
        (2, "Feb", 52, 41),
        (3, "Mar", 38, 35),
        (4, "Apr", 41, 39),
        (5, "May", 35, 42),
        (6, "Jun", 39, 35),
    ];

    AnalyticsSnapshot {
        total_issues: 250,
        resolved_issues: 180,
        pending_issues: 70,
        resolution_rate: 72.0,
        avg_resolution_days: Some(4.2),
        category_breakdown: categories
            .into_iter()
            .map(|(category, count)| CategoryCount { category, count })
            .collect(),
        status_distribution: statuses
            .into_iter()
            .map(|(status, count)| StatusCount { status, count })
            .collect(),
        monthly_data: months
            .into_iter()
            .map(|(month, label, reported, resolved)| MonthlyCount {
                year: 2024,
                month,
                label: label.into(),
                reported,
                resolved,
            })
            .collect(),
    }
}
