//! Repository for the `campers` table.

use registry_core::camp::NewCamper;
use registry_core::types::DbId;
use sqlx::PgConnection;

use crate::models::camper::Camper;
use crate::repositories::SignupRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, age";

/// Provides CRUD operations for campers.
pub struct CamperRepo;

impl CamperRepo {
    /// Insert a validated camper, returning the created row.
    pub async fn create(conn: &mut PgConnection, input: &NewCamper) -> Result<Camper, sqlx::Error> {
        let query = format!(
            "INSERT INTO campers (name, age)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Camper>(&query)
            .bind(input.name())
            .bind(input.age())
            .fetch_one(conn)
            .await
    }

    /// Find a camper by its ID.
    pub async fn find_by_id(conn: &mut PgConnection, id: DbId) -> Result<Option<Camper>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM campers WHERE id = $1");
        sqlx::query_as::<_, Camper>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Find a camper and lock its row until the enclosing transaction ends.
    ///
    /// Used by the patch path so the read, validation and write see one
    /// consistent record.
    pub async fn find_by_id_for_update(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Camper>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM campers WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Camper>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// List all campers ordered by ID.
    pub async fn list(conn: &mut PgConnection) -> Result<Vec<Camper>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM campers ORDER BY id");
        sqlx::query_as::<_, Camper>(&query).fetch_all(conn).await
    }

    /// Overwrite a camper with a fully validated record.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        input: &NewCamper,
    ) -> Result<Option<Camper>, sqlx::Error> {
        let query = format!(
            "UPDATE campers SET name = $2, age = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Camper>(&query)
            .bind(id)
            .bind(input.name())
            .bind(input.age())
            .fetch_optional(conn)
            .await
    }

    /// Delete a camper and its signups. Returns `true` if the camper existed.
    ///
    /// Signups are removed first; run inside a transaction so both statements
    /// commit together.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let signups = SignupRepo::delete_by_camper(&mut *conn, id).await?;
        let result = sqlx::query("DELETE FROM campers WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        tracing::debug!(camper_id = id, signups, "Deleted camper signups");
        Ok(result.rows_affected() > 0)
    }

    /// Delete all campers. Dependent signups must already be gone.
    pub async fn delete_all(conn: &mut PgConnection) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM campers").execute(conn).await?;
        Ok(result.rows_affected())
    }
}
