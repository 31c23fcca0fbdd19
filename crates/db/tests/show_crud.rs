//! Integration tests for the show repositories.

use registry_core::show::{NewAppearance, Rating};
use registry_db::models::appearance::UpdateAppearance;
use registry_db::models::episode::CreateEpisode;
use registry_db::models::guest::CreateGuest;
use registry_db::repositories::{AppearanceRepo, EpisodeRepo, GuestRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_episode(date: &str, number: i32) -> CreateEpisode {
    CreateEpisode {
        date: date.to_string(),
        number,
    }
}

fn new_guest(name: &str, occupation: &str) -> CreateGuest {
    CreateGuest {
        name: name.to_string(),
        occupation: occupation.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_appearances_by_episode_embed_guest(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let episode = EpisodeRepo::create(&mut conn, &new_episode("1/11/99", 1))
        .await
        .unwrap();
    let guest = GuestRepo::create(&mut conn, &new_guest("Michael J. Fox", "actor"))
        .await
        .unwrap();
    let appearance = AppearanceRepo::create(
        &mut conn,
        &NewAppearance::new(4, episode.id, guest.id).unwrap(),
    )
    .await
    .unwrap();

    let listed = AppearanceRepo::list_by_episode_with_guest(&mut conn, episode.id)
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].appearance, appearance);
    assert_eq!(listed[0].guest, guest);

    let listed = AppearanceRepo::list_by_guest_with_episode(&mut conn, guest.id)
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].episode, episode);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_fk_violation_appearance_bad_parents(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let err = AppearanceRepo::create(&mut conn, &NewAppearance::new(5, 999, 999).unwrap())
        .await
        .unwrap_err();
    assert!(registry_db::is_foreign_key_violation(&err));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_rating(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let episode = EpisodeRepo::create(&mut conn, &new_episode("1/12/99", 2))
        .await
        .unwrap();
    let guest = GuestRepo::create(&mut conn, &new_guest("Tracey Ullman", "television actress"))
        .await
        .unwrap();
    let appearance = AppearanceRepo::create(
        &mut conn,
        &NewAppearance::new(2, episode.id, guest.id).unwrap(),
    )
    .await
    .unwrap();

    let rating = appearance
        .apply(UpdateAppearance { rating: Some(Some(5)) })
        .unwrap();
    let updated = AppearanceRepo::update_rating(&mut conn, appearance.id, rating)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.rating, 5);

    assert!(appearance.apply(UpdateAppearance { rating: Some(Some(0)) }).is_err());
    assert_eq!(
        appearance.apply(UpdateAppearance::default()).unwrap(),
        Rating::new(2).unwrap()
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_guest_removes_appearances(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let episode = EpisodeRepo::create(&mut tx, &new_episode("1/11/99", 1))
        .await
        .unwrap();
    let guest = GuestRepo::create(&mut tx, &new_guest("Michael J. Fox", "actor"))
        .await
        .unwrap();
    let appearance =
        AppearanceRepo::create(&mut tx, &NewAppearance::new(3, episode.id, guest.id).unwrap())
            .await
            .unwrap();

    assert!(GuestRepo::delete(&mut tx, guest.id).await.unwrap());
    tx.commit().await.unwrap();

    let mut conn = pool.acquire().await.unwrap();
    assert!(AppearanceRepo::find_by_id_for_update(&mut conn, appearance.id)
        .await
        .unwrap()
        .is_none());
    assert!(AppearanceRepo::list_by_episode_with_guest(&mut conn, episode.id)
        .await
        .unwrap()
        .is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_episode_removes_appearances(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let episode = EpisodeRepo::create(&mut conn, &new_episode("1/11/99", 1))
        .await
        .unwrap();
    let guest = GuestRepo::create(&mut conn, &new_guest("Michael J. Fox", "actor"))
        .await
        .unwrap();
    AppearanceRepo::create(&mut conn, &NewAppearance::new(3, episode.id, guest.id).unwrap())
        .await
        .unwrap();

    assert!(EpisodeRepo::delete(&mut conn, episode.id).await.unwrap());
    assert!(AppearanceRepo::list_by_guest_with_episode(&mut conn, guest.id)
        .await
        .unwrap()
        .is_empty());
    assert!(GuestRepo::find_by_id(&mut conn, guest.id).await.unwrap().is_some());
}
