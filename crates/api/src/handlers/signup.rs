//! Handlers for the `/signups` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use registry_core::error::CoreError;
use registry_db::models::signup::{CreateSignup, SignupDetail};
use registry_db::repositories::{ActivityRepo, CamperRepo, SignupRepo};

use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::state::AppState;

/// POST /signups
///
/// Validates the hour, inserts the signup and returns it with both parents.
/// An unknown camper or activity yields the generic
/// `Invalid camper_id or activity_id` error.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateSignup>,
) -> AppResult<(StatusCode, Json<SignupDetail>)> {
    let new_signup = input.validate()?;

    let mut tx = state.pool.begin().await?;
    let signup = SignupRepo::create(&mut *tx, &new_signup)
        .await
        .map_err(|e| AppError::from_join_insert(e, "camper_id", "activity_id"))?;

    let camper = CamperRepo::find_by_id(&mut *tx, signup.camper_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Internal(format!(
                "Camper {} vanished after signup insert",
                signup.camper_id
            )))
        })?;
    let activity = ActivityRepo::find_by_id(&mut *tx, signup.activity_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Internal(format!(
                "Activity {} vanished after signup insert",
                signup.activity_id
            )))
        })?;
    tx.commit().await?;

    tracing::info!(
        signup_id = signup.id,
        camper_id = signup.camper_id,
        activity_id = signup.activity_id,
        "Signup created"
    );
    Ok((
        StatusCode::CREATED,
        Json(SignupDetail {
            signup,
            camper,
            activity,
        }),
    ))
}
