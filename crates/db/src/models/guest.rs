//! Guest entity model and DTOs.

use registry_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::appearance::AppearanceWithEpisode;

/// A guest row from the `guests` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Guest {
    pub id: DbId,
    pub name: String,
    pub occupation: String,
}

/// DTO for creating a new guest.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGuest {
    pub name: String,
    pub occupation: String,
}

/// A guest with its appearances, each embedding the episode.
#[derive(Debug, Clone, Serialize)]
pub struct GuestWithAppearances {
    #[serde(flatten)]
    pub guest: Guest,
    pub appearances: Vec<AppearanceWithEpisode>,
}
