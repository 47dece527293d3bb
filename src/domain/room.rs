//! Room domain entity and occupancy state.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::{merge, merge_opt, Patch, RecordId};

/// Room availability, derived from occupancy unless pinned to maintenance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    Available,
    #[serde(rename = "partially occupied")]
    PartiallyOccupied,
    Full,
    Maintenance,
}

impl RoomStatus {
    /// Status implied by an occupancy count
    pub fn derive(occupied: u32, capacity: u32) -> Self {
        if occupied == 0 {
            RoomStatus::Available
        } else if occupied < capacity {
            RoomStatus::PartiallyOccupied
        } else {
            RoomStatus::Full
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomStatus::Available => "available",
            RoomStatus::PartiallyOccupied => "partially occupied",
            RoomStatus::Full => "full",
            RoomStatus::Maintenance => "maintenance",
        }
    }
}

impl std::fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hostel room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    #[schema(example = 1)]
    pub id: RecordId,
    /// Unique room number
    #[schema(example = "101")]
    pub room_number: String,
    #[schema(example = 1)]
    pub floor: i32,
    #[serde(rename = "type")]
    #[schema(example = "3-seater")]
    pub room_type: String,
    #[schema(example = 3)]
    pub capacity: u32,
    /// Students currently assigned, maintained by the occupancy engine
    #[schema(example = 0)]
    pub occupied: u32,
    pub status: RoomStatus,
    pub description: Option<String>,
    pub wifi: bool,
    pub ac: bool,
    pub attached_toilet: bool,
    pub balcony: bool,
}

impl Room {
    pub fn new(id: RecordId, data: CreateRoom) -> Self {
        let mut room = Self {
            id,
            room_number: data.room_number,
            floor: data.floor,
            room_type: data.room_type,
            capacity: data.capacity,
            occupied: 0,
            status: data.status.unwrap_or(RoomStatus::Available),
            description: data.description,
            wifi: data.wifi.unwrap_or(false),
            ac: data.ac.unwrap_or(false),
            attached_toilet: data.attached_toilet.unwrap_or(false),
            balcony: data.balcony.unwrap_or(false),
        };
        room.refresh_status();
        room
    }

    pub fn is_under_maintenance(&self) -> bool {
        self.status == RoomStatus::Maintenance
    }

    /// Whether another student fits
    pub fn has_vacancy(&self) -> bool {
        self.occupied < self.capacity
    }

    /// Recompute status from occupancy; maintenance stays pinned.
    pub fn refresh_status(&mut self) {
        if !self.is_under_maintenance() {
            self.status = RoomStatus::derive(self.occupied, self.capacity);
        }
    }

    /// Count one more student in. Never exceeds capacity.
    pub fn admit(&mut self) {
        self.occupied = (self.occupied + 1).min(self.capacity);
        self.refresh_status();
    }

    /// Count one student out, floored at zero.
    pub fn release(&mut self) {
        self.occupied = self.occupied.saturating_sub(1);
        self.refresh_status();
    }
}

/// Room creation payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoom {
    #[validate(length(min = 1, message = "Room number is required"))]
    #[schema(example = "101")]
    pub room_number: String,
    #[schema(example = 1)]
    pub floor: i32,
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "Room type is required"))]
    #[schema(example = "3-seater")]
    pub room_type: String,
    #[validate(range(min = 1, message = "Capacity must be greater than zero"))]
    #[schema(example = 3)]
    pub capacity: u32,
    /// Only `maintenance` is kept; other values are derived from occupancy
    pub status: Option<RoomStatus>,
    pub description: Option<String>,
    pub wifi: Option<bool>,
    pub ac: Option<bool>,
    pub attached_toilet: Option<bool>,
    pub balcony: Option<bool>,
}

/// Room update payload; absent fields are preserved
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoom {
    #[validate(length(min = 1, message = "Room number cannot be empty"))]
    pub room_number: Option<String>,
    pub floor: Option<i32>,
    #[serde(rename = "type")]
    pub room_type: Option<String>,
    #[validate(range(min = 1, message = "Capacity must be greater than zero"))]
    pub capacity: Option<u32>,
    pub status: Option<RoomStatus>,
    pub description: Option<String>,
    pub wifi: Option<bool>,
    pub ac: Option<bool>,
    pub attached_toilet: Option<bool>,
    pub balcony: Option<bool>,
}

impl Patch<Room> for UpdateRoom {
    fn apply_to(self, room: &mut Room) {
        merge(&mut room.room_number, self.room_number);
        merge(&mut room.floor, self.floor);
        merge(&mut room.room_type, self.room_type);
        merge(&mut room.capacity, self.capacity);
        merge(&mut room.status, self.status);
        merge_opt(&mut room.description, self.description);
        merge(&mut room.wifi, self.wifi);
        merge(&mut room.ac, self.ac);
        merge(&mut room.attached_toilet, self.attached_toilet);
        merge(&mut room.balcony, self.balcony);
        room.refresh_status();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(capacity: u32) -> Room {
        Room::new(
            1,
            CreateRoom {
                room_number: "101".to_string(),
                floor: 1,
                room_type: "3-seater".to_string(),
                capacity,
                status: None,
                description: None,
                wifi: None,
                ac: None,
                attached_toilet: None,
                balcony: None,
            },
        )
    }

    #[test]
    fn derive_follows_piecewise_rule() {
        assert_eq!(RoomStatus::derive(0, 3), RoomStatus::Available);
        assert_eq!(RoomStatus::derive(1, 3), RoomStatus::PartiallyOccupied);
        assert_eq!(RoomStatus::derive(2, 3), RoomStatus::PartiallyOccupied);
        assert_eq!(RoomStatus::derive(3, 3), RoomStatus::Full);
    }

    #[test]
    fn admit_and_release_stay_within_bounds() {
        let mut r = room(2);
        r.release();
        assert_eq!(r.occupied, 0);
        assert_eq!(r.status, RoomStatus::Available);

        r.admit();
        r.admit();
        r.admit();
        assert_eq!(r.occupied, 2);
        assert_eq!(r.status, RoomStatus::Full);
    }

    #[test]
    fn maintenance_is_pinned_across_occupancy_changes() {
        let mut r = room(3);
        UpdateRoom {
            status: Some(RoomStatus::Maintenance),
            ..Default::default()
        }
        .apply_to(&mut r);

        r.admit();
        assert_eq!(r.occupied, 1);
        assert_eq!(r.status, RoomStatus::Maintenance);
    }

    #[test]
    fn requested_status_other_than_maintenance_is_rederived() {
        let mut r = room(3);
        r.admit();
        UpdateRoom {
            status: Some(RoomStatus::Full),
            ..Default::default()
        }
        .apply_to(&mut r);

        assert_eq!(r.status, RoomStatus::PartiallyOccupied);
    }

    #[test]
    fn status_serializes_with_spaces() {
        let json = serde_json::to_string(&RoomStatus::PartiallyOccupied).unwrap();
        assert_eq!(json, "\"partially occupied\"");
    }
}
