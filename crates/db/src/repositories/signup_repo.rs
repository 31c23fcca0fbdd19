//! Repository for the `signups` join table.

use registry_core::camp::NewSignup;
use registry_core::types::DbId;
use sqlx::PgConnection;

use crate::models::signup::Signup;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, time, camper_id, activity_id";

/// Provides operations on signups.
pub struct SignupRepo;

impl SignupRepo {
    /// Insert a validated signup.
    ///
    /// Fails with a foreign key violation if either parent does not exist.
    pub async fn create(conn: &mut PgConnection, input: &NewSignup) -> Result<Signup, sqlx::Error> {
        let query = format!(
            "INSERT INTO signups (time, camper_id, activity_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Signup>(&query)
            .bind(input.time())
            .bind(input.camper_id())
            .bind(input.activity_id())
            .fetch_one(conn)
            .await
    }

    /// List the signups of an activity ordered by ID.
    pub async fn list_by_activity(
        conn: &mut PgConnection,
        activity_id: DbId,
    ) -> Result<Vec<Signup>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM signups WHERE activity_id = $1 ORDER BY id");
        sqlx::query_as::<_, Signup>(&query)
            .bind(activity_id)
            .fetch_all(conn)
            .await
    }

    /// Delete every signup of a camper. Returns the number of rows removed.
    pub async fn delete_by_camper(conn: &mut PgConnection, camper_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM signups WHERE camper_id = $1")
            .bind(camper_id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete every signup of an activity. Returns the number of rows removed.
    pub async fn delete_by_activity(
        conn: &mut PgConnection,
        activity_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM signups WHERE activity_id = $1")
            .bind(activity_id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete all signups.
    pub async fn delete_all(conn: &mut PgConnection) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM signups").execute(conn).await?;
        Ok(result.rows_affected())
    }
}
