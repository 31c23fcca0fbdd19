//! Repository for the `guests` table.

use registry_core::types::DbId;
use sqlx::PgConnection;

use crate::models::guest::{CreateGuest, Guest};
use crate::repositories::AppearanceRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, occupation";

/// Provides CRUD operations for guests.
pub struct GuestRepo;

impl GuestRepo {
    /// Insert a new guest, returning the created row.
    pub async fn create(conn: &mut PgConnection, input: &CreateGuest) -> Result<Guest, sqlx::Error> {
        let query = format!(
            "INSERT INTO guests (name, occupation)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Guest>(&query)
            .bind(&input.name)
            .bind(&input.occupation)
            .fetch_one(conn)
            .await
    }

    /// Find a guest by its ID.
    pub async fn find_by_id(conn: &mut PgConnection, id: DbId) -> Result<Option<Guest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM guests WHERE id = $1");
        sqlx::query_as::<_, Guest>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// List all guests ordered by ID.
    pub async fn list(conn: &mut PgConnection) -> Result<Vec<Guest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM guests ORDER BY id");
        sqlx::query_as::<_, Guest>(&query).fetch_all(conn).await
    }

    /// Delete a guest and its appearances. Returns `true` if the guest existed.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let appearances = AppearanceRepo::delete_by_guest(&mut *conn, id).await?;
        let result = sqlx::query("DELETE FROM guests WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        tracing::debug!(guest_id = id, appearances, "Deleted guest appearances");
        Ok(result.rows_affected() > 0)
    }

    /// Delete all guests. Dependent appearances must already be gone.
    pub async fn delete_all(conn: &mut PgConnection) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM guests").execute(conn).await?;
        Ok(result.rows_affected())
    }
}
