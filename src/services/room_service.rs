//! Room service - Room inventory.
//!
//! `occupied` is owned by the occupancy engine; clients can change
//! everything else, within the current occupancy.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{CreateRoom, RecordId, Room, RoomStatus, UpdateRoom};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{ReadRepository, Tables, UnitOfWork, WriteRepository};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Optional filters for room listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoomFilter {
    pub floor: Option<i32>,
    pub status: Option<RoomStatus>,
}

impl RoomFilter {
    fn matches(&self, room: &Room) -> bool {
        self.floor.map_or(true, |f| room.floor == f)
            && self.status.map_or(true, |s| room.status == s)
    }
}

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RoomService: Send + Sync {
    async fn list_rooms(&self, filter: RoomFilter) -> AppResult<Vec<Room>>;

    async fn get_room(&self, id: RecordId) -> AppResult<Room>;

    async fn create_room(&self, data: CreateRoom) -> AppResult<Room>;

    /// Fails with Conflict if the new capacity is below current occupancy
    async fn update_room(&self, id: RecordId, data: UpdateRoom) -> AppResult<Room>;
}

fn ensure_number_free(tables: &Tables, number: &str, except: Option<RecordId>) -> AppResult<()> {
    let taken = tables
        .rooms
        .find_first(|r| r.room_number == number && Some(r.id) != except)
        .is_some();
    if taken {
        return Err(AppError::conflict(format!("Room {} already exists", number)));
    }
    Ok(())
}

pub struct RoomManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> RoomManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> RoomService for RoomManager<U> {
    async fn list_rooms(&self, filter: RoomFilter) -> AppResult<Vec<Room>> {
        Ok(self.uow.read(|t| t.rooms.find_where(|r| filter.matches(r))))
    }

    async fn get_room(&self, id: RecordId) -> AppResult<Room> {
        self.uow.read(|t| t.rooms.get(id))
    }

    async fn create_room(&self, data: CreateRoom) -> AppResult<Room> {
        let room = self.uow.transaction(|t| {
            ensure_number_free(t, &data.room_number, None)?;
            Ok(t.rooms.insert_with(|id| Room::new(id, data)))
        })?;

        tracing::info!(room_id = room.id, number = %room.room_number, capacity = room.capacity, "Room created");
        Ok(room)
    }

    async fn update_room(&self, id: RecordId, data: UpdateRoom) -> AppResult<Room> {
        let room = self.uow.transaction(|t| {
            let current = t.rooms.find_by_id(id).ok_or_not_found(t.rooms.entity())?;
            if let Some(capacity) = data.capacity {
                if capacity < current.occupied {
                    return Err(AppError::conflict(format!(
                        "Room {} has {} students, capacity cannot drop to {}",
                        current.room_number, current.occupied, capacity
                    )));
                }
            }
            if let Some(number) = &data.room_number {
                ensure_number_free(t, number, Some(id))?;
            }
            t.rooms.update(id, data)
        })?;

        tracing::debug!(room_id = id, status = %room.status, "Room updated");
        Ok(room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MemoryStore;

    fn room(number: &str, floor: i32, capacity: u32) -> CreateRoom {
        CreateRoom {
            room_number: number.to_string(),
            floor,
            room_type: format!("{}-seater", capacity),
            capacity,
            status: None,
            description: None,
            wifi: Some(true),
            ac: None,
            attached_toilet: None,
            balcony: None,
        }
    }

    #[tokio::test]
    async fn new_rooms_start_empty_and_available() {
        let rooms = RoomManager::new(Arc::new(MemoryStore::new()));
        let r = rooms.create_room(room("101", 1, 3)).await.unwrap();
        assert_eq!((r.occupied, r.status), (0, RoomStatus::Available));
        assert!(r.wifi);
        assert!(!r.ac);
    }

    #[tokio::test]
    async fn list_filters_by_floor_and_status() {
        let rooms = RoomManager::new(Arc::new(MemoryStore::new()));
        rooms.create_room(room("101", 1, 3)).await.unwrap();
        rooms.create_room(room("201", 2, 3)).await.unwrap();
        rooms
            .update_room(
                2,
                UpdateRoom {
                    status: Some(RoomStatus::Maintenance),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let floor_two = rooms
            .list_rooms(RoomFilter {
                floor: Some(2),
                status: None,
            })
            .await
            .unwrap();
        assert_eq!(floor_two.len(), 1);

        let available = rooms
            .list_rooms(RoomFilter {
                floor: None,
                status: Some(RoomStatus::Available),
            })
            .await
            .unwrap();
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].room_number, "101");
    }

    #[tokio::test]
    async fn capacity_cannot_drop_below_occupancy() {
        let store = Arc::new(MemoryStore::new());
        let rooms = RoomManager::new(store.clone());
        let r = rooms.create_room(room("101", 1, 3)).await.unwrap();
        store
            .transaction(|t| {
                let row = t.rooms.find_by_id_mut(r.id).unwrap();
                row.admit();
                row.admit();
                Ok(())
            })
            .unwrap();

        let shrink = UpdateRoom {
            capacity: Some(1),
            ..Default::default()
        };
        assert!(matches!(
            rooms.update_room(r.id, shrink).await,
            Err(AppError::Conflict(_))
        ));

        let exact = UpdateRoom {
            capacity: Some(2),
            ..Default::default()
        };
        let updated = rooms.update_room(r.id, exact).await.unwrap();
        assert_eq!(updated.status, RoomStatus::Full);
    }

    #[tokio::test]
    async fn room_numbers_are_unique() {
        let rooms = RoomManager::new(Arc::new(MemoryStore::new()));
        rooms.create_room(room("101", 1, 3)).await.unwrap();
        assert!(matches!(
            rooms.create_room(room("101", 2, 2)).await,
            Err(AppError::Conflict(_))
        ));
        assert_eq!(rooms.get_room(9).await.unwrap_err(), AppError::NotFound("Room"));
    }
}
