//! Handlers for the `/appearances` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use registry_core::error::CoreError;
use registry_core::types::DbId;
use registry_db::models::appearance::{
    Appearance, AppearanceDetail, CreateAppearance, UpdateAppearance,
};
use registry_db::repositories::{AppearanceRepo, EpisodeRepo, GuestRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

/// POST /appearances
///
/// Validates the rating, inserts the appearance and returns it with its
/// episode and guest. An unknown episode or guest yields the generic
/// `Invalid episode_id or guest_id` error.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateAppearance>,
) -> AppResult<(StatusCode, Json<AppearanceDetail>)> {
    let new_appearance = input.validate()?;

    let mut tx = state.pool.begin().await?;
    let appearance = AppearanceRepo::create(&mut *tx, &new_appearance)
        .await
        .map_err(|e| AppError::from_join_insert(e, "episode_id", "guest_id"))?;

    let episode = EpisodeRepo::find_by_id(&mut *tx, appearance.episode_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Internal(format!(
                "Episode {} vanished after appearance insert",
                appearance.episode_id
            )))
        })?;
    let guest = GuestRepo::find_by_id(&mut *tx, appearance.guest_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Internal(format!(
                "Guest {} vanished after appearance insert",
                appearance.guest_id
            )))
        })?;
    tx.commit().await?;

    tracing::info!(
        appearance_id = appearance.id,
        episode_id = appearance.episode_id,
        guest_id = appearance.guest_id,
        "Appearance created"
    );
    Ok((
        StatusCode::CREATED,
        Json(AppearanceDetail {
            appearance,
            episode,
            guest,
        }),
    ))
}

/// PATCH /appearances/{id}
///
/// Re-validates the rating whenever it is provided.
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateAppearance>,
) -> AppResult<Json<Appearance>> {
    let mut tx = state.pool.begin().await?;
    let current = AppearanceRepo::find_by_id_for_update(&mut *tx, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Appearance",
            id,
        }))?;

    let rating = current.apply(input)?;
    let appearance = AppearanceRepo::update_rating(&mut *tx, id, rating)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Appearance",
            id,
        }))?;
    tx.commit().await?;

    tracing::info!(appearance_id = id, rating = rating.get(), "Appearance updated");
    Ok(Json(appearance))
}
