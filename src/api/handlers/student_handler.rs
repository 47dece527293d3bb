//! Student handlers.

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
use crate::domain::{CreateStudent, RecordId, Student, UpdateStudent};
use crate::errors::AppResult;
use crate::services::StudentFilter;
use crate::types::{Created, MessageResponse};

/// Student listing filters
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct StudentQuery {
    pub course_id: Option<RecordId>,
    pub room_id: Option<RecordId>,
}

pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_students).post(create_student))
        .route(
            "/:id",
            get(get_student).put(update_student).delete(delete_student),
        )
}

/// List students
#[utoipa::path(
    get,
    path = "/api/students",
    tag = "Students",
    params(StudentQuery),
    responses((status = 200, description = "Matching students", body = Vec<Student>))
)]
pub async fn list_students(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<StudentQuery>,
) -> AppResult<Json<Vec<Student>>> {
    let filter = StudentFilter {
        course_id: query.course_id,
        room_id: query.room_id,
    };
    Ok(Json(state.student_service.list_students(filter).await?))
}

/// Admit a student into a room
#[utoipa::path(
    post,
    path = "/api/students",
    tag = "Students",
    request_body = CreateStudent,
    responses(
        (status = 201, description = "Student admitted", body = Student),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Room full or registration number taken")
    )
)]
pub async fn create_student(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateStudent>,
) -> AppResult<Created<Student>> {
    Ok(Created(state.student_service.create_student(payload).await?))
}

/// Get a student by id
#[utoipa::path(
    get,
    path = "/api/students/{id}",
    tag = "Students",
    params(("id" = i64, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student found", body = Student),
        (status = 404, description = "Student not found")
    )
)]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> AppResult<Json<Student>> {
    Ok(Json(state.student_service.get_student(id).await?))
}

/// Update a student, moving rooms when `roomId` changes
#[utoipa::path(
    put,
    path = "/api/students/{id}",
    tag = "Students",
    params(("id" = i64, Path, description = "Student id")),
    request_body = UpdateStudent,
    responses(
        (status = 200, description = "Student updated", body = Student),
        (status = 404, description = "Student not found"),
        (status = 409, description = "Target room full or registration number taken")
    )
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
    ValidatedJson(payload): ValidatedJson<UpdateStudent>,
) -> AppResult<Json<Student>> {
    Ok(Json(state.student_service.update_student(id, payload).await?))
}

/// Remove a student and free their bed
#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    tag = "Students",
    params(("id" = i64, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student deleted", body = MessageResponse),
        (status = 404, description = "Student not found")
    )
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> AppResult<Json<MessageResponse>> {
    state.student_service.delete_student(id).await?;
    Ok(Json(MessageResponse::new("Student deleted successfully")))
}
