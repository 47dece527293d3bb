//! Course handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{Course, CreateCourse, RecordId, UpdateCourse};
use crate::errors::AppResult;
use crate::types::{Created, MessageResponse};

pub fn course_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_courses).post(create_course))
        .route(
            "/:id",
            get(get_course).put(update_course).delete(delete_course),
        )
}

/// List all courses
#[utoipa::path(
    get,
    path = "/api/courses",
    tag = "Courses",
    responses((status = 200, description = "All courses", body = Vec<Course>))
)]
pub async fn list_courses(State(state): State<AppState>) -> AppResult<Json<Vec<Course>>> {
    Ok(Json(state.course_service.list_courses().await?))
}

/// Create a course
#[utoipa::path(
    post,
    path = "/api/courses",
    tag = "Courses",
    request_body = CreateCourse,
    responses(
        (status = 201, description = "Course created", body = Course),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Course code already exists")
    )
)]
pub async fn create_course(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateCourse>,
) -> AppResult<Created<Course>> {
    Ok(Created(state.course_service.create_course(payload).await?))
}

/// Get a course by id
#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    tag = "Courses",
    params(("id" = i64, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course found", body = Course),
        (status = 404, description = "Course not found")
    )
)]
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> AppResult<Json<Course>> {
    Ok(Json(state.course_service.get_course(id).await?))
}

/// Update a course; absent fields are kept
#[utoipa::path(
    put,
    path = "/api/courses/{id}",
    tag = "Courses",
    params(("id" = i64, Path, description = "Course id")),
    request_body = UpdateCourse,
    responses(
        (status = 200, description = "Course updated", body = Course),
        (status = 404, description = "Course not found"),
        (status = 409, description = "Course code already exists")
    )
)]
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
    ValidatedJson(payload): ValidatedJson<UpdateCourse>,
) -> AppResult<Json<Course>> {
    Ok(Json(state.course_service.update_course(id, payload).await?))
}

/// Delete a course without enrolled students
#[utoipa::path(
    delete,
    path = "/api/courses/{id}",
    tag = "Courses",
    params(("id" = i64, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course deleted", body = MessageResponse),
        (status = 404, description = "Course not found"),
        (status = 409, description = "Students are still enrolled")
    )
)]
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> AppResult<Json<MessageResponse>> {
    state.course_service.delete_course(id).await?;
    Ok(Json(MessageResponse::new("Course deleted successfully")))
}
