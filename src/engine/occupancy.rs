//! Room occupancy engine.
//!
//! Student lifecycle events are the only thing that moves `Room::occupied`.
//! Each hook checks before it writes, so a rejected admission changes
//! nothing. A student pointing at a room that does not exist is accepted
//! and simply not counted anywhere.

use crate::domain::{RecordId, Room};
use crate::errors::{AppError, AppResult};
use crate::infra::{ReadRepository, Table, WriteRepository};

/// Fail if the room exists and has no free bed.
pub fn ensure_vacancy(rooms: &Table<Room>, room_id: RecordId) -> AppResult<()> {
    match rooms.find_by_id(room_id) {
        Some(room) if !room.has_vacancy() => Err(AppError::conflict(format!(
            "Room {} is full",
            room.room_number
        ))),
        _ => Ok(()),
    }
}

/// A student was admitted to `room_id`.
pub fn on_student_created(rooms: &mut Table<Room>, room_id: RecordId) -> AppResult<()> {
    ensure_vacancy(rooms, room_id)?;
    admit(rooms, room_id);
    Ok(())
}

/// A student moved from `old_room_id` to `new_room_id`.
///
/// No-op when the room did not change.
pub fn on_student_room_changed(
    rooms: &mut Table<Room>,
    old_room_id: RecordId,
    new_room_id: RecordId,
) -> AppResult<()> {
    if old_room_id == new_room_id {
        return Ok(());
    }

    ensure_vacancy(rooms, new_room_id)?;
    release(rooms, old_room_id);
    admit(rooms, new_room_id);
    Ok(())
}

/// A student assigned to `room_id` was removed.
pub fn on_student_deleted(rooms: &mut Table<Room>, room_id: RecordId) {
    release(rooms, room_id);
}

fn admit(rooms: &mut Table<Room>, room_id: RecordId) {
    match rooms.find_by_id_mut(room_id) {
        Some(room) => {
            room.admit();
            tracing::debug!(room_id, occupied = room.occupied, status = %room.status, "Room occupancy increased");
        }
        None => tracing::warn!(room_id, "Student assigned to unknown room, occupancy not tracked"),
    }
}

fn release(rooms: &mut Table<Room>, room_id: RecordId) {
    match rooms.find_by_id_mut(room_id) {
        Some(room) => {
            room.release();
            tracing::debug!(room_id, occupied = room.occupied, status = %room.status, "Room occupancy decreased");
        }
        None => tracing::warn!(room_id, "Student left unknown room, occupancy not tracked"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CreateRoom, RoomStatus};

    fn rooms_with(capacities: &[u32]) -> Table<Room> {
        let mut rooms = Table::new("Room");
        for (i, &capacity) in capacities.iter().enumerate() {
            rooms.insert_with(|id| {
                Room::new(
                    id,
                    CreateRoom {
                        room_number: format!("{}", 101 + i),
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
            });
        }
        rooms
    }

    fn state(rooms: &Table<Room>, id: RecordId) -> (u32, RoomStatus) {
        let room = rooms.find_by_id(id).unwrap();
        (room.occupied, room.status)
    }

    #[test]
    fn admissions_fill_a_room_then_conflict() {
        let mut rooms = rooms_with(&[3]);

        on_student_created(&mut rooms, 1).unwrap();
        assert_eq!(state(&rooms, 1), (1, RoomStatus::PartiallyOccupied));

        on_student_created(&mut rooms, 1).unwrap();
        on_student_created(&mut rooms, 1).unwrap();
        assert_eq!(state(&rooms, 1), (3, RoomStatus::Full));

        let err = on_student_created(&mut rooms, 1).unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(state(&rooms, 1), (3, RoomStatus::Full));

        on_student_deleted(&mut rooms, 1);
        assert_eq!(state(&rooms, 1), (2, RoomStatus::PartiallyOccupied));
    }

    #[test]
    fn move_from_full_room_to_partial_room() {
        let mut rooms = rooms_with(&[3, 3]);
        for _ in 0..3 {
            on_student_created(&mut rooms, 1).unwrap();
        }
        on_student_created(&mut rooms, 2).unwrap();

        on_student_room_changed(&mut rooms, 1, 2).unwrap();

        assert_eq!(state(&rooms, 1), (2, RoomStatus::PartiallyOccupied));
        assert_eq!(state(&rooms, 2), (2, RoomStatus::PartiallyOccupied));
    }

    #[test]
    fn move_into_full_room_changes_nothing() {
        let mut rooms = rooms_with(&[1, 1]);
        on_student_created(&mut rooms, 1).unwrap();
        on_student_created(&mut rooms, 2).unwrap();

        assert!(on_student_room_changed(&mut rooms, 1, 2).is_err());
        assert_eq!(state(&rooms, 1), (1, RoomStatus::Full));
        assert_eq!(state(&rooms, 2), (1, RoomStatus::Full));
    }

    #[test]
    fn same_room_move_is_noop() {
        let mut rooms = rooms_with(&[2]);
        on_student_created(&mut rooms, 1).unwrap();
        on_student_room_changed(&mut rooms, 1, 1).unwrap();
        assert_eq!(state(&rooms, 1), (1, RoomStatus::PartiallyOccupied));
    }

    #[test]
    fn unknown_rooms_are_skipped() {
        let mut rooms = rooms_with(&[2]);
        on_student_created(&mut rooms, 42).unwrap();
        on_student_room_changed(&mut rooms, 42, 1).unwrap();
        assert_eq!(state(&rooms, 1), (1, RoomStatus::PartiallyOccupied));

        on_student_room_changed(&mut rooms, 1, 42).unwrap();
        assert_eq!(state(&rooms, 1), (0, RoomStatus::Available));

        on_student_deleted(&mut rooms, 42);
    }

    #[test]
    fn release_floors_at_zero() {
        let mut rooms = rooms_with(&[2]);
        on_student_deleted(&mut rooms, 1);
        assert_eq!(state(&rooms, 1), (0, RoomStatus::Available));
    }

    #[test]
    fn occupancy_stays_bounded_over_a_mixed_sequence() {
        let mut rooms = rooms_with(&[2, 3]);
        let steps: [(RecordId, RecordId); 8] =
            [(0, 1), (0, 1), (0, 1), (1, 2), (0, 2), (2, 1), (1, 0), (2, 0)];

        for (from, to) in steps {
            let _ = match (from, to) {
                (0, to) => on_student_created(&mut rooms, to),
                (from, 0) => {
                    on_student_deleted(&mut rooms, from);
                    Ok(())
                }
                (from, to) => on_student_room_changed(&mut rooms, from, to),
            };

            for room in rooms.values() {
                assert!(room.occupied <= room.capacity);
                assert_eq!(room.status, RoomStatus::derive(room.occupied, room.capacity));
            }
        }
    }
}
