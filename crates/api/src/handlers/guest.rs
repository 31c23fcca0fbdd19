//! Handlers for the `/guests` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use registry_core::error::CoreError;
use registry_core::types::DbId;
use registry_db::models::guest::{CreateGuest, Guest, GuestWithAppearances};
use registry_db::repositories::{AppearanceRepo, GuestRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

/// GET /guests
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Guest>>> {
    let mut tx = state.pool.begin().await?;
    let guests = GuestRepo::list(&mut *tx).await?;
    tx.commit().await?;
    Ok(Json(guests))
}

/// POST /guests
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateGuest>,
) -> AppResult<(StatusCode, Json<Guest>)> {
    let mut tx = state.pool.begin().await?;
    let guest = GuestRepo::create(&mut *tx, &input).await?;
    tx.commit().await?;

    tracing::info!(guest_id = guest.id, "Guest created");
    Ok((StatusCode::CREATED, Json(guest)))
}

/// GET /guests/{id}
///
/// Includes the guest's appearances, each with its episode.
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<GuestWithAppearances>> {
    let mut tx = state.pool.begin().await?;
    let guest = GuestRepo::find_by_id(&mut *tx, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Guest",
            id,
        }))?;
    let appearances = AppearanceRepo::list_by_guest_with_episode(&mut *tx, id).await?;
    tx.commit().await?;

    Ok(Json(GuestWithAppearances { guest, appearances }))
}

/// DELETE /guests/{id}
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    let mut tx = state.pool.begin().await?;
    let deleted = GuestRepo::delete(&mut *tx, id).await?;
    if deleted {
        tx.commit().await?;
        tracing::info!(guest_id = id, "Guest deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Guest",
            id,
        }))
    }
}
