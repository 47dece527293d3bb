//! Dashboard snapshot types.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_students: usize,
    pub total_rooms: usize,
    pub total_courses: usize,
    pub floor_stats: Vec<FloorStats>,
    pub recent_activity: Vec<ActivityEntry>,
    pub course_wise_distribution: Vec<CourseDistribution>,
}

/// Occupancy figures for one floor
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FloorStats {
    #[schema(example = "Floor 1")]
    pub floor: String,
    /// Rooms on the floor
    pub rooms: usize,
    /// Rooms with at least one student
    pub occupied: usize,
    /// Rooms with at least one free bed
    pub available: usize,
    /// Percentage of occupied rooms, rounded
    pub occupancy_rate: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    #[serde(rename = "type")]
    #[schema(example = "student_registered")]
    pub kind: String,
    pub title: String,
    pub timestamp: DateTime<Utc>,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CourseDistribution {
    /// Course name
    pub name: String,
    pub students: usize,
}
