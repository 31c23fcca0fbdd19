//! Repository for the `episodes` table.

use registry_core::types::DbId;
use sqlx::PgConnection;

use crate::models::episode::{CreateEpisode, Episode};
use crate::repositories::AppearanceRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, date, number";

/// Provides CRUD operations for episodes.
pub struct EpisodeRepo;

impl EpisodeRepo {
    /// Insert a new episode, returning the created row.
    pub async fn create(conn: &mut PgConnection, input: &CreateEpisode) -> Result<Episode, sqlx::Error> {
        let query = format!(
            "INSERT INTO episodes (date, number)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Episode>(&query)
            .bind(&input.date)
            .bind(input.number)
            .fetch_one(conn)
            .await
    }

    /// Find an episode by its ID.
    pub async fn find_by_id(conn: &mut PgConnection, id: DbId) -> Result<Option<Episode>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM episodes WHERE id = $1");
        sqlx::query_as::<_, Episode>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// List all episodes ordered by ID.
    pub async fn list(conn: &mut PgConnection) -> Result<Vec<Episode>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM episodes ORDER BY id");
        sqlx::query_as::<_, Episode>(&query).fetch_all(conn).await
    }

    /// Delete an episode and its appearances. Returns `true` if the episode existed.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let appearances = AppearanceRepo::delete_by_episode(&mut *conn, id).await?;
        let result = sqlx::query("DELETE FROM episodes WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        tracing::debug!(episode_id = id, appearances, "Deleted episode appearances");
        Ok(result.rows_affected() > 0)
    }

    /// Delete all episodes. Dependent appearances must already be gone.
    pub async fn delete_all(conn: &mut PgConnection) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM episodes").execute(conn).await?;
        Ok(result.rows_affected())
    }
}
