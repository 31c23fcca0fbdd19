//! Camper entity model and DTOs.

use registry_core::camp::NewCamper;
use registry_core::error::CoreError;
use registry_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::activity::Activity;

/// A camper row from the `campers` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Camper {
    pub id: DbId,
    pub name: String,
    pub age: i32,
}

impl Camper {
    /// Apply `changes` to a copy of this camper and validate the whole result.
    pub fn apply(&self, changes: UpdateCamper) -> Result<NewCamper, CoreError> {
        NewCamper::merged(&self.name, self.age, changes.name, changes.age)
    }
}

/// DTO for creating a new camper.
///
/// A missing or null `name` is the empty name, so it is reported by the name
/// rule rather than as a malformed body. `age` is read wide and narrowed by
/// the age rule.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCamper {
    #[serde(default)]
    pub name: Option<String>,
    pub age: i64,
}

impl CreateCamper {
    pub fn validate(self) -> Result<NewCamper, CoreError> {
        NewCamper::new(self.name.unwrap_or_default(), self.age)
    }
}

/// DTO for patching a camper.
///
/// `None` leaves a field unchanged; `Some(None)` is an explicit `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCamper {
    #[serde(default, deserialize_with = "super::explicit_null")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::explicit_null")]
    pub age: Option<Option<i64>>,
}

/// A camper with the activity of each of its signups.
#[derive(Debug, Clone, Serialize)]
pub struct CamperWithActivities {
    #[serde(flatten)]
    pub camper: Camper,
    pub activities: Vec<Activity>,
}
