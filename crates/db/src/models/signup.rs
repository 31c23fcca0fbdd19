//! Signup join entity model and DTOs.

use registry_core::camp::NewSignup;
use registry_core::error::CoreError;
use registry_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::activity::Activity;
use crate::models::camper::Camper;

/// A signup row from the `signups` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Signup {
    pub id: DbId,
    pub time: i32,
    pub camper_id: DbId,
    pub activity_id: DbId,
}

/// DTO for creating a new signup. `time` is read wide and narrowed by the hour rule.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSignup {
    pub time: i64,
    pub camper_id: DbId,
    pub activity_id: DbId,
}

impl CreateSignup {
    pub fn validate(self) -> Result<NewSignup, CoreError> {
        NewSignup::new(self.time, self.camper_id, self.activity_id)
    }
}

/// A signup with both of its parents, returned from `POST /signups`.
#[derive(Debug, Clone, Serialize)]
pub struct SignupDetail {
    #[serde(flatten)]
    pub signup: Signup,
    pub camper: Camper,
    pub activity: Activity,
}
