//! Room handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::extractors::{QueryParams, ValidatedJson};
use crate::api::AppState;
use crate::domain::{CreateRoom, RecordId, Room, RoomStatus, UpdateRoom};
use crate::errors::AppResult;
use crate::services::RoomFilter;
use crate::types::Created;

/// Room listing filters
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RoomQuery {
    /// Only rooms on this floor
    pub floor: Option<i32>,
    /// Only rooms in this state, e.g. `partially occupied`
    #[param(value_type = Option<String>)]
    pub status: Option<RoomStatus>,
}

pub fn room_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_rooms).post(create_room))
        .route("/:id", get(get_room).put(update_room))
}

/// List rooms
#[utoipa::path(
    get,
    path = "/api/rooms",
    tag = "Rooms",
    params(RoomQuery),
    responses(
        (status = 200, description = "Matching rooms", body = Vec<Room>),
        (status = 400, description = "Invalid filter")
    )
)]
pub async fn list_rooms(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<RoomQuery>,
) -> AppResult<Json<Vec<Room>>> {
    let filter = RoomFilter {
        floor: query.floor,
        status: query.status,
    };
    Ok(Json(state.room_service.list_rooms(filter).await?))
}

/// Create a room
#[utoipa::path(
    post,
    path = "/api/rooms",
    tag = "Rooms",
    request_body = CreateRoom,
    responses(
        (status = 201, description = "Room created", body = Room),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Room number already exists")
    )
)]
pub async fn create_room(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateRoom>,
) -> AppResult<Created<Room>> {
    Ok(Created(state.room_service.create_room(payload).await?))
}

/// Get a room by id
#[utoipa::path(
    get,
    path = "/api/rooms/{id}",
    tag = "Rooms",
    params(("id" = i64, Path, description = "Room id")),
    responses(
        (status = 200, description = "Room found", body = Room),
        (status = 404, description = "Room not found")
    )
)]
pub async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> AppResult<Json<Room>> {
    Ok(Json(state.room_service.get_room(id).await?))
}

/// Update a room; occupancy is not client-editable
#[utoipa::path(
    put,
    path = "/api/rooms/{id}",
    tag = "Rooms",
    params(("id" = i64, Path, description = "Room id")),
    request_body = UpdateRoom,
    responses(
        (status = 200, description = "Room updated", body = Room),
        (status = 404, description = "Room not found"),
        (status = 409, description = "Capacity below occupancy or duplicate room number")
    )
)]
pub async fn update_room(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
    ValidatedJson(payload): ValidatedJson<UpdateRoom>,
) -> AppResult<Json<Room>> {
    Ok(Json(state.room_service.update_room(id, payload).await?))
}
