//! Repository for the `activities` table.

use registry_core::types::DbId;
use sqlx::PgConnection;

use crate::models::activity::{Activity, CreateActivity};
use crate::repositories::SignupRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, difficulty";

/// Provides CRUD operations for activities.
pub struct ActivityRepo;

impl ActivityRepo {
    /// Insert a new activity, returning the created row.
    pub async fn create(
        conn: &mut PgConnection,
        input: &CreateActivity,
    ) -> Result<Activity, sqlx::Error> {
        let query = format!(
            "INSERT INTO activities (name, difficulty)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(&input.name)
            .bind(input.difficulty)
            .fetch_one(conn)
            .await
    }

    /// Find an activity by its ID.
    pub async fn find_by_id(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Activity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM activities WHERE id = $1");
        sqlx::query_as::<_, Activity>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// List all activities ordered by ID.
    pub async fn list(conn: &mut PgConnection) -> Result<Vec<Activity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM activities ORDER BY id");
        sqlx::query_as::<_, Activity>(&query).fetch_all(conn).await
    }

    /// The activity of every signup of a camper, in signup order.
    ///
    /// An activity appears once per signup, so a camper signed up twice for
    /// the same activity sees it twice.
    pub async fn list_by_camper(
        conn: &mut PgConnection,
        camper_id: DbId,
    ) -> Result<Vec<Activity>, sqlx::Error> {
        sqlx::query_as::<_, Activity>(
            "SELECT a.id, a.name, a.difficulty
             FROM signups s
             JOIN activities a ON a.id = s.activity_id
             WHERE s.camper_id = $1
             ORDER BY s.id",
        )
        .bind(camper_id)
        .fetch_all(conn)
        .await
    }

    /// Delete an activity and its signups. Returns `true` if the activity existed.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let signups = SignupRepo::delete_by_activity(&mut *conn, id).await?;
        let result = sqlx::query("DELETE FROM activities WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        tracing::debug!(activity_id = id, signups, "Deleted activity signups");
        Ok(result.rows_affected() > 0)
    }

    /// Delete all activities. Dependent signups must already be gone.
    pub async fn delete_all(conn: &mut PgConnection) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM activities").execute(conn).await?;
        Ok(result.rows_affected())
    }
}
