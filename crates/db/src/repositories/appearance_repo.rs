//! Repository for the `appearances` join table.

use registry_core::show::{NewAppearance, Rating};
use registry_core::types::DbId;
use sqlx::{FromRow, PgConnection};

use crate::models::appearance::{Appearance, AppearanceWithEpisode, AppearanceWithGuest};
use crate::models::episode::Episode;
use crate::models::guest::Guest;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, rating, episode_id, guest_id";

/// Flat row of an appearance joined with its guest.
#[derive(FromRow)]
struct AppearanceGuestRow {
    id: DbId,
    rating: i32,
    episode_id: DbId,
    guest_id: DbId,
    guest_name: String,
    guest_occupation: String,
}

impl From<AppearanceGuestRow> for AppearanceWithGuest {
    fn from(row: AppearanceGuestRow) -> Self {
        Self {
            appearance: Appearance {
                id: row.id,
                rating: row.rating,
                episode_id: row.episode_id,
                guest_id: row.guest_id,
            },
            guest: Guest {
                id: row.guest_id,
                name: row.guest_name,
                occupation: row.guest_occupation,
            },
        }
    }
}

/// Flat row of an appearance joined with its episode.
#[derive(FromRow)]
struct AppearanceEpisodeRow {
    id: DbId,
    rating: i32,
    episode_id: DbId,
    guest_id: DbId,
    episode_date: String,
    episode_number: i32,
}

impl From<AppearanceEpisodeRow> for AppearanceWithEpisode {
    fn from(row: AppearanceEpisodeRow) -> Self {
        Self {
            appearance: Appearance {
                id: row.id,
                rating: row.rating,
                episode_id: row.episode_id,
                guest_id: row.guest_id,
            },
            episode: Episode {
                id: row.episode_id,
                date: row.episode_date,
                number: row.episode_number,
            },
        }
    }
}

/// Provides operations on appearances.
pub struct AppearanceRepo;

impl AppearanceRepo {
    /// Insert a validated appearance.
    ///
    /// Fails with a foreign key violation if either parent does not exist.
    pub async fn create(
        conn: &mut PgConnection,
        input: &NewAppearance,
    ) -> Result<Appearance, sqlx::Error> {
        let query = format!(
            "INSERT INTO appearances (rating, episode_id, guest_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Appearance>(&query)
            .bind(input.rating().get())
            .bind(input.episode_id())
            .bind(input.guest_id())
            .fetch_one(conn)
            .await
    }

    /// Find an appearance and lock its row until the enclosing transaction ends.
    pub async fn find_by_id_for_update(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Appearance>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM appearances WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Appearance>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Set the rating of an appearance.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_rating(
        conn: &mut PgConnection,
        id: DbId,
        rating: Rating,
    ) -> Result<Option<Appearance>, sqlx::Error> {
        let query = format!(
            "UPDATE appearances SET rating = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Appearance>(&query)
            .bind(id)
            .bind(rating.get())
            .fetch_optional(conn)
            .await
    }

    /// Appearances of an episode with their guests, ordered by appearance ID.
    pub async fn list_by_episode_with_guest(
        conn: &mut PgConnection,
        episode_id: DbId,
    ) -> Result<Vec<AppearanceWithGuest>, sqlx::Error> {
        let rows = sqlx::query_as::<_, AppearanceGuestRow>(
            "SELECT ap.id, ap.rating, ap.episode_id, ap.guest_id,
                    g.name AS guest_name, g.occupation AS guest_occupation
             FROM appearances ap
             JOIN guests g ON g.id = ap.guest_id
             WHERE ap.episode_id = $1
             ORDER BY ap.id",
        )
        .bind(episode_id)
        .fetch_all(conn)
        .await?;
        Ok(rows.into_iter().map(AppearanceWithGuest::from).collect())
    }

    /// Appearances of a guest with their episodes, ordered by appearance ID.
    pub async fn list_by_guest_with_episode(
        conn: &mut PgConnection,
        guest_id: DbId,
    ) -> Result<Vec<AppearanceWithEpisode>, sqlx::Error> {
        let rows = sqlx::query_as::<_, AppearanceEpisodeRow>(
            "SELECT ap.id, ap.rating, ap.episode_id, ap.guest_id,
                    e.date AS episode_date, e.number AS episode_number
             FROM appearances ap
             JOIN episodes e ON e.id = ap.episode_id
             WHERE ap.guest_id = $1
             ORDER BY ap.id",
        )
        .bind(guest_id)
        .fetch_all(conn)
        .await?;
        Ok(rows.into_iter().map(AppearanceWithEpisode::from).collect())
    }

    /// Delete every appearance in an episode. Returns the number of rows removed.
    pub async fn delete_by_episode(
        conn: &mut PgConnection,
        episode_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM appearances WHERE episode_id = $1")
            .bind(episode_id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete every appearance of a guest. Returns the number of rows removed.
    pub async fn delete_by_guest(conn: &mut PgConnection, guest_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM appearances WHERE guest_id = $1")
            .bind(guest_id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete all appearances.
    pub async fn delete_all(conn: &mut PgConnection) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM appearances").execute(conn).await?;
        Ok(result.rows_affected())
    }
}
