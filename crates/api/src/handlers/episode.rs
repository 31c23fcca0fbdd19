//! Handlers for the `/episodes` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use registry_core::error::CoreError;
use registry_core::types::DbId;
use registry_db::models::episode::{CreateEpisode, Episode, EpisodeWithAppearances};
use registry_db::repositories::{AppearanceRepo, EpisodeRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

/// GET /episodes
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Episode>>> {
    let mut tx = state.pool.begin().await?;
    let episodes = EpisodeRepo::list(&mut *tx).await?;
    tx.commit().await?;
    Ok(Json(episodes))
}

/// POST /episodes
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateEpisode>,
) -> AppResult<(StatusCode, Json<Episode>)> {
    let mut tx = state.pool.begin().await?;
    let episode = EpisodeRepo::create(&mut *tx, &input).await?;
    tx.commit().await?;

    tracing::info!(episode_id = episode.id, "Episode created");
    Ok((StatusCode::CREATED, Json(episode)))
}

/// GET /episodes/{id}
///
/// Includes the episode's appearances, each with its guest.
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<EpisodeWithAppearances>> {
    let mut tx = state.pool.begin().await?;
    let episode = EpisodeRepo::find_by_id(&mut *tx, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Episode",
            id,
        }))?;
    let appearances = AppearanceRepo::list_by_episode_with_guest(&mut *tx, id).await?;
    tx.commit().await?;

    Ok(Json(EpisodeWithAppearances {
        episode,
        appearances,
    }))
}

/// DELETE /episodes/{id}
///
/// Removes the episode's appearances in the same transaction.
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    let mut tx = state.pool.begin().await?;
    let deleted = EpisodeRepo::delete(&mut *tx, id).await?;
    if deleted {
        tx.commit().await?;
        tracing::info!(episode_id = id, "Episode deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Episode",
            id,
        }))
    }
}
