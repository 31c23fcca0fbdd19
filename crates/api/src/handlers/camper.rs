//! Handlers for the `/campers` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use registry_core::error::CoreError;
use registry_core::types::DbId;
use registry_db::models::camper::{Camper, CamperWithActivities, CreateCamper, UpdateCamper};
use registry_db::repositories::{ActivityRepo, CamperRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

/// GET /campers
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Camper>>> {
    let mut tx = state.pool.begin().await?;
    let campers = CamperRepo::list(&mut *tx).await?;
    tx.commit().await?;
    Ok(Json(campers))
}

/// POST /campers
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateCamper>,
) -> AppResult<(StatusCode, Json<Camper>)> {
    let new_camper = input.validate()?;

    let mut tx = state.pool.begin().await?;
    let camper = CamperRepo::create(&mut *tx, &new_camper).await?;
    tx.commit().await?;

    tracing::info!(camper_id = camper.id, "Camper created");
    Ok((StatusCode::CREATED, Json(camper)))
}

/// GET /campers/{id}
///
/// Includes the activity of each of the camper's signups.
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<CamperWithActivities>> {
    let mut tx = state.pool.begin().await?;
    let camper = CamperRepo::find_by_id(&mut *tx, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Camper",
            id,
        }))?;
    let activities = ActivityRepo::list_by_camper(&mut *tx, id).await?;
    tx.commit().await?;

    Ok(Json(CamperWithActivities { camper, activities }))
}

/// PATCH /campers/{id}
///
/// Applies the provided fields to the stored camper and re-validates the
/// whole record before writing. On a validation failure nothing is written.
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateCamper>,
) -> AppResult<Json<Camper>> {
    let mut tx = state.pool.begin().await?;
    let current = CamperRepo::find_by_id_for_update(&mut *tx, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Camper",
            id,
        }))?;

    let changes = current.apply(input)?;
    let camper = CamperRepo::update(&mut *tx, id, &changes)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Camper",
            id,
        }))?;
    tx.commit().await?;

    tracing::info!(camper_id = id, "Camper updated");
    Ok(Json(camper))
}

/// DELETE /campers/{id}
///
/// Removes the camper's signups in the same transaction.
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    let mut tx = state.pool.begin().await?;
    let deleted = CamperRepo::delete(&mut *tx, id).await?;
    if deleted {
        tx.commit().await?;
        tracing::info!(camper_id = id, "Camper deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Camper",
            id,
        }))
    }
}
