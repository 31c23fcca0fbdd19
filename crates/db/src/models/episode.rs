//! Episode entity model and DTOs.

use registry_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::appearance::AppearanceWithGuest;

/// An episode row from the `episodes` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Episode {
    pub id: DbId,
    pub date: String,
    pub number: i32,
}

/// DTO for creating a new episode.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEpisode {
    pub date: String,
    pub number: i32,
}

/// An episode with its appearances, each embedding the guest.
#[derive(Debug, Clone, Serialize)]
pub struct EpisodeWithAppearances {
    #[serde(flatten)]
    pub episode: Episode,
    pub appearances: Vec<AppearanceWithGuest>,
}
