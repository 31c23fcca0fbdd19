//! Activity entity model and DTOs.

use registry_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::signup::Signup;

/// An activity row from the `activities` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Activity {
    pub id: DbId,
    pub name: String,
    pub difficulty: i32,
}

/// DTO for creating a new activity. Both fields are required.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateActivity {
    pub name: String,
    pub difficulty: i32,
}

/// An activity with its signups. Signups carry ids only.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityWithSignups {
    #[serde(flatten)]
    pub activity: Activity,
    pub signups: Vec<Signup>,
}
