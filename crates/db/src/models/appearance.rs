//! Appearance join entity model and DTOs.

use registry_core::error::CoreError;
use registry_core::show::{NewAppearance, Rating};
use registry_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::episode::Episode;
use crate::models::guest::Guest;

/// An appearance row from the `appearances` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Appearance {
    pub id: DbId,
    pub rating: i32,
    pub episode_id: DbId,
    pub guest_id: DbId,
}

impl Appearance {
    /// Resolve the rating this appearance would have after `changes`.
    ///
    /// A provided rating is validated, an explicit `null` is rejected and an
    /// omitted one keeps the stored value.
    pub fn apply(&self, changes: UpdateAppearance) -> Result<Rating, CoreError> {
        match changes.rating {
            Some(rating) => Rating::required(rating),
            None => Rating::new(i64::from(self.rating)),
        }
    }
}

/// DTO for creating a new appearance. `rating` is read wide and narrowed by the rating rule.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAppearance {
    pub rating: i64,
    pub episode_id: DbId,
    pub guest_id: DbId,
}

impl CreateAppearance {
    pub fn validate(self) -> Result<NewAppearance, CoreError> {
        NewAppearance::new(self.rating, self.episode_id, self.guest_id)
    }
}

/// DTO for patching an appearance. `Some(None)` is an explicit `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAppearance {
    #[serde(default, deserialize_with = "super::explicit_null")]
    pub rating: Option<Option<i64>>,
}

/// An appearance seen from its episode: embeds the guest only.
#[derive(Debug, Clone, Serialize)]
pub struct AppearanceWithGuest {
    #[serde(flatten)]
    pub appearance: Appearance,
    pub guest: Guest,
}

/// An appearance seen from its guest: embeds the episode only.
#[derive(Debug, Clone, Serialize)]
pub struct AppearanceWithEpisode {
    #[serde(flatten)]
    pub appearance: Appearance,
    pub episode: Episode,
}

/// An appearance with both of its parents, returned from `POST /appearances`.
#[derive(Debug, Clone, Serialize)]
pub struct AppearanceDetail {
    #[serde(flatten)]
    pub appearance: Appearance,
    pub episode: Episode,
    pub guest: Guest,
}
