//! Handlers for the `/activities` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use registry_core::error::CoreError;
use registry_core::types::DbId;
use registry_db::models::activity::{Activity, ActivityWithSignups, CreateActivity};
use registry_db::repositories::{ActivityRepo, SignupRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

/// GET /activities
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Activity>>> {
    let mut tx = state.pool.begin().await?;
    let activities = ActivityRepo::list(&mut *tx).await?;
    tx.commit().await?;
    Ok(Json(activities))
}

/// POST /activities
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateActivity>,
) -> AppResult<(StatusCode, Json<Activity>)> {
    let mut tx = state.pool.begin().await?;
    let activity = ActivityRepo::create(&mut *tx, &input).await?;
    tx.commit().await?;

    tracing::info!(activity_id = activity.id, "Activity created");
    Ok((StatusCode::CREATED, Json(activity)))
}

/// GET /activities/{id}
///
/// Includes the activity's signups (ids only, no embedded campers).
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<ActivityWithSignups>> {
    let mut tx = state.pool.begin().await?;
    let activity = ActivityRepo::find_by_id(&mut *tx, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Activity",
            id,
        }))?;
    let signups = SignupRepo::list_by_activity(&mut *tx, id).await?;
    tx.commit().await?;

    Ok(Json(ActivityWithSignups { activity, signups }))
}

/// DELETE /activities/{id}
///
/// Removes the activity's signups in the same transaction.
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    let mut tx = state.pool.begin().await?;
    let deleted = ActivityRepo::delete(&mut *tx, id).await?;
    if deleted {
        tx.commit().await?;
        tracing::info!(activity_id = id, "Activity deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Activity",
            id,
        }))
    }
}
