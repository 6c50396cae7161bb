//! HTTP endpoint handlers. These are thin wrappers that forward to the store.
//! Each handler is instrumented and logs parameters and basic result info.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::{info, instrument, warn};

use crate::error::ApiError;
use crate::protocol::{CourseOut, CoursesOut, CreatedOut, HealthOut, ModulesIn};
use crate::store::AppState;
use crate::Course;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse {
    Json(HealthOut { ok: true })
}

#[instrument(level = "info", skip(state, body), fields(course_id = %body.course_id))]
pub async fn http_create_course(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Course>,
) -> Result<impl IntoResponse, ApiError> {
    let stored = state.create(body).await.map_err(|e| {
        warn!(target: "course_store", error = %e, "HTTP create_course failed");
        e
    })?;
    info!(target: "course_store", course_id = %stored.course_id, modules = stored.modules.len(), "HTTP course created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedOut {
            success: true,
            course_id: stored.course_id,
            message: "Course saved successfully".into(),
        }),
    ))
}

#[instrument(level = "info", skip(state))]
pub async fn http_list_courses(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let courses = state.list().await;
    info!(target: "course_store", count = courses.len(), "HTTP courses listed");
    Json(CoursesOut {
        success: true,
        courses,
    })
}

#[instrument(level = "info", skip(state), fields(%course_id))]
pub async fn http_get_course(
    State(state): State<Arc<AppState>>,
    Path(course_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let course = state.get(&course_id).await?;
    info!(target: "course_store", %course_id, "HTTP course served");
    Ok(Json(CourseOut {
        success: true,
        course,
    }))
}

#[instrument(level = "info", skip(state, body), fields(%course_id))]
pub async fn http_replace_course(
    State(state): State<Arc<AppState>>,
    Path(course_id): Path<String>,
    Json(body): Json<Course>,
) -> Result<impl IntoResponse, ApiError> {
    let course = state.replace_all(&course_id, body).await.map_err(|e| {
        warn!(target: "course_store", %course_id, error = %e, "HTTP replace_course failed");
        e
    })?;
    info!(target: "course_store", %course_id, "HTTP course replaced");
    Ok(Json(CourseOut {
        success: true,
        course,
    }))
}

#[instrument(level = "info", skip(state, body), fields(%course_id, modules = body.modules.len()))]
pub async fn http_replace_modules(
    State(state): State<Arc<AppState>>,
    Path(course_id): Path<String>,
    Json(body): Json<ModulesIn>,
) -> Result<impl IntoResponse, ApiError> {
    let course = state.replace_modules(&course_id, body.modules).await?;
    info!(target: "course_store", %course_id, modules = course.modules.len(), "HTTP modules replaced");
    Ok(Json(CourseOut {
        success: true,
        course,
    }))
}
