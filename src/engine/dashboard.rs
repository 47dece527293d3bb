//! Dashboard aggregation.
//!
//! Computed from scratch on every call by scanning the tables.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::config::{
    HOSTEL_FLOORS, RECENT_ACTIVITY_LIMIT, RECENT_ACTIVITY_WINDOW_DAYS, SECONDS_PER_DAY,
};
use crate::domain::{ActivityEntry, CourseDistribution, DashboardStats, FloorStats, RecordId};
use crate::infra::{ReadRepository, Tables};

/// Build the dashboard snapshot as of `now`.
pub fn snapshot(tables: &Tables, now: DateTime<Utc>) -> DashboardStats {
    DashboardStats {
        total_students: tables.students.count(),
        total_rooms: tables.rooms.count(),
        total_courses: tables.courses.count(),
        floor_stats: HOSTEL_FLOORS
            .iter()
            .map(|&floor| floor_stats(tables, floor))
            .collect(),
        recent_activity: recent_activity(tables, now),
        course_wise_distribution: course_distribution(tables),
    }
}

/// Occupied rooms as a rounded percentage of all rooms; 0 for no rooms.
pub fn occupancy_rate(occupied: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    // Rounds half up.
    ((occupied * 200 + total) / (total * 2)) as u32
}

/// Whole days elapsed from `timestamp` to `now`, floored.
pub fn whole_days_between(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - timestamp).num_seconds().div_euclid(SECONDS_PER_DAY)
}

fn is_recent(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    whole_days_between(timestamp, now) <= RECENT_ACTIVITY_WINDOW_DAYS
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn floor_stats(tables: &Tables, floor: i32) -> FloorStats {
    let rooms = tables.rooms.find_where(|r| r.floor == floor);
    let occupied = rooms.iter().filter(|r| r.occupied > 0).count();
    let available = rooms.iter().filter(|r| r.has_vacancy()).count();

    FloorStats {
        floor: format!("Floor {}", floor),
        rooms: rooms.len(),
        occupied,
        available,
        occupancy_rate: occupancy_rate(occupied, rooms.len()),
    }
}

fn student_label(tables: &Tables, student_id: RecordId) -> (String, String) {
    match tables.students.find_by_id(student_id) {
        Some(s) => (s.name.clone(), s.registration_number.clone()),
        None => ("Student".to_string(), String::new()),
    }
}

fn recent_activity(tables: &Tables, now: DateTime<Utc>) -> Vec<ActivityEntry> {
    let registrations = tables.students.values().filter_map(|s| {
        let joined = start_of_day(s.joining_date?);
        is_recent(joined, now).then(|| ActivityEntry {
            kind: "student_registered".to_string(),
            title: "New student registered".to_string(),
            timestamp: joined,
            details: format!("{} ({})", s.name, s.registration_number),
        })
    });

    let leaves = tables
        .leave_requests
        .values()
        .filter(|r| is_recent(r.created_at, now))
        .map(|r| {
            let (name, registration) = student_label(tables, r.student_id);
            ActivityEntry {
                kind: format!("leave_request_{}", r.status.as_str()),
                title: format!("Leave request {}", r.status.as_str()),
                timestamp: r.created_at,
                details: format!("{} ({})", name, registration),
            }
        });

    let complaints = tables.complaints.values().filter_map(|c| {
        let issued = start_of_day(c.issue_date);
        is_recent(issued, now).then(|| {
            let (name, _) = student_label(tables, c.student_id);
            ActivityEntry {
                kind: "new_complaint".to_string(),
                title: "New complaint submitted".to_string(),
                timestamp: issued,
                details: format!("{} by {}", c.topic, name),
            }
        })
    });

    let mut feed: Vec<ActivityEntry> = registrations.chain(leaves).chain(complaints).collect();
    feed.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    feed.truncate(RECENT_ACTIVITY_LIMIT);
    feed
}

fn course_distribution(tables: &Tables) -> Vec<CourseDistribution> {
    tables
        .courses
        .values()
        .map(|c| CourseDistribution {
            name: c.name.clone(),
            students: tables.students.values().filter(|s| s.course_id == c.id).count(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        CreateCourse, CreateLeaveRequest, CreateRoom, CreateStudent, Course, LeaveRequest, Room,
        Student,
    };
    use crate::infra::WriteRepository;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, 20, 15, 0, 0).unwrap()
    }

    fn add_room(t: &mut Tables, number: &str, floor: i32, occupied: u32) {
        t.rooms.insert_with(|id| {
            let mut room = Room::new(
                id,
                CreateRoom {
                    room_number: number.to_string(),
                    floor,
                    room_type: "2-seater".to_string(),
                    capacity: 2,
                    status: None,
                    description: None,
                    wifi: None,
                    ac: None,
                    attached_toilet: None,
                    balcony: None,
                },
            );
            for _ in 0..occupied {
                room.admit();
            }
            room
        });
    }

    fn add_student(t: &mut Tables, name: &str, course_id: RecordId, joined: Option<NaiveDate>) {
        t.students.insert_with(|id| {
            Student::new(
                id,
                CreateStudent {
                    name: name.to_string(),
                    registration_number: format!("REG{}", id),
                    course_id,
                    room_id: 1,
                    email: None,
                    contact_number: None,
                    year: None,
                    joining_date: joined,
                    address: None,
                    guardian_name: None,
                    guardian_contact: None,
                    status: None,
                },
            )
        });
    }

    fn days_ago(n: i64) -> NaiveDate {
        (now() - Duration::days(n)).date_naive()
    }

    #[test]
    fn occupancy_rate_rounds_and_handles_empty_floor() {
        assert_eq!(occupancy_rate(0, 0), 0);
        assert_eq!(occupancy_rate(3, 4), 75);
        assert_eq!(occupancy_rate(1, 3), 33);
        assert_eq!(occupancy_rate(2, 3), 67);
        assert_eq!(occupancy_rate(1, 8), 13);
    }

    #[test]
    fn floor_stats_cover_fixed_floors() {
        let mut t = Tables::default();
        add_room(&mut t, "101", 1, 1);
        add_room(&mut t, "102", 1, 2);
        add_room(&mut t, "103", 1, 1);
        add_room(&mut t, "104", 1, 0);
        add_room(&mut t, "501", 5, 1);

        let stats = snapshot(&t, now());
        assert_eq!(stats.floor_stats.len(), 4);

        let first = &stats.floor_stats[0];
        assert_eq!(first.floor, "Floor 1");
        assert_eq!(first.rooms, 4);
        assert_eq!(first.occupied, 3);
        assert_eq!(first.available, 3);
        assert_eq!(first.occupancy_rate, 75);

        let second = &stats.floor_stats[1];
        assert_eq!((second.rooms, second.occupancy_rate), (0, 0));
        assert_eq!(stats.total_rooms, 5);
    }

    #[test]
    fn activity_window_is_seven_whole_days() {
        let mut t = Tables::default();
        add_student(&mut t, "Seven", 1, Some(days_ago(7)));
        add_student(&mut t, "Eight", 1, Some(days_ago(8)));
        add_student(&mut t, "Never", 1, None);

        let feed = snapshot(&t, now()).recent_activity;
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].kind, "student_registered");
        assert_eq!(feed[0].details, "Seven (REG1)");
    }

    #[test]
    fn activity_feed_is_newest_first_and_capped() {
        let mut t = Tables::default();
        for n in 0..6 {
            add_student(&mut t, &format!("S{}", n), 1, Some(days_ago(n)));
        }
        t.leave_requests.insert_with(|id| {
            let mut request = LeaveRequest::new(
                id,
                CreateLeaveRequest {
                    student_id: 1,
                    permission_type: "Medical".to_string(),
                    reason: "Checkup".to_string(),
                    leave_date: now(),
                    return_date: now(),
                    place_of_visit: None,
                    contact_number: None,
                    status: None,
                },
            );
            request.created_at = now() - Duration::hours(1);
            request
        });

        let feed = snapshot(&t, now()).recent_activity;
        assert_eq!(feed.len(), 5);
        assert_eq!(feed[0].kind, "leave_request_pending");
        assert_eq!(feed[0].details, "S0 (REG1)");
        assert!(feed.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
    }

    #[test]
    fn course_distribution_counts_students() {
        let mut t = Tables::default();
        for (name, code) in [("CSE", "C1"), ("Civil", "C2")] {
            t.courses.insert_with(|id| {
                Course::new(
                    id,
                    CreateCourse {
                        name: name.to_string(),
                        code: code.to_string(),
                        duration: 4,
                        description: None,
                        status: None,
                    },
                )
            });
        }
        add_student(&mut t, "A", 1, None);
        add_student(&mut t, "B", 1, None);

        let stats = snapshot(&t, now());
        assert_eq!(stats.total_courses, 2);
        assert_eq!(stats.total_students, 2);
        assert_eq!(
            stats.course_wise_distribution,
            vec![
                CourseDistribution { name: "CSE".to_string(), students: 2 },
                CourseDistribution { name: "Civil".to_string(), students: 0 },
            ]
        );
    }
}
