//! Reset the database and fill it with sample campers, activities, episodes,
//! guests and the rows joining them.
//!
//! Runs in one transaction: either every table is reseeded or none is.

use anyhow::Context;
use rand::seq::IndexedRandom;
use rand::Rng;
use registry_core::camp::{
    NewCamper, NewSignup, MAX_CAMPER_AGE, MAX_SIGNUP_HOUR, MIN_CAMPER_AGE, MIN_SIGNUP_HOUR,
};
use registry_core::show::{NewAppearance, MAX_RATING, MIN_RATING};
use registry_db::models::activity::CreateActivity;
use registry_db::models::episode::CreateEpisode;
use registry_db::models::guest::CreateGuest;
use registry_db::repositories::{
    ActivityRepo, AppearanceRepo, CamperRepo, EpisodeRepo, GuestRepo, SignupRepo,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const CAMPER_NAMES: &[&str] = &[
    "Caitlin", "Lizzie", "Nick", "Alex", "Sam", "Jordan", "Riley", "Morgan", "Taylor", "Casey",
];

const ACTIVITIES: &[(&str, i32)] = &[
    ("Archery", 2),
    ("Swimming", 3),
    ("Hiking", 1),
    ("Canoeing", 4),
    ("Rock Climbing", 5),
];

const GUEST_NAMES: &[&str] = &[
    "Michael J. Fox",
    "Tracey Ullman",
    "Sandra Bernhard",
    "Gillian Anderson",
    "Jeff Goldblum",
];

const OCCUPATIONS: &[&str] = &["actor", "comedian", "musician", "writer", "director"];

const EPISODE_COUNT: i32 = 10;
const GUEST_COUNT: usize = 20;
const APPEARANCE_COUNT: usize = 50;
const SIGNUP_COUNT: usize = 25;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = registry_db::create_pool(&database_url, 1)
        .await
        .context("Failed to connect to database")?;
    registry_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let mut rng = rand::rng();
    let mut tx = pool.begin().await?;

    // Join tables first so no parent delete has dependents left.
    SignupRepo::delete_all(&mut *tx).await?;
    AppearanceRepo::delete_all(&mut *tx).await?;
    CamperRepo::delete_all(&mut *tx).await?;
    ActivityRepo::delete_all(&mut *tx).await?;
    EpisodeRepo::delete_all(&mut *tx).await?;
    GuestRepo::delete_all(&mut *tx).await?;
    tracing::info!("Cleared existing data");

    // --- Camp ---
    let mut campers = Vec::with_capacity(CAMPER_NAMES.len());
    for name in CAMPER_NAMES {
        let age = i64::from(rng.random_range(MIN_CAMPER_AGE..=MAX_CAMPER_AGE));
        campers.push(CamperRepo::create(&mut *tx, &NewCamper::new(*name, age)?).await?);
    }

    let mut activities = Vec::with_capacity(ACTIVITIES.len());
    for (name, difficulty) in ACTIVITIES {
        let input = CreateActivity {
            name: (*name).to_string(),
            difficulty: *difficulty,
        };
        activities.push(ActivityRepo::create(&mut *tx, &input).await?);
    }

    for _ in 0..SIGNUP_COUNT {
        let camper = campers.choose(&mut rng).context("no campers seeded")?;
        let activity = activities.choose(&mut rng).context("no activities seeded")?;
        let time = i64::from(rng.random_range(MIN_SIGNUP_HOUR..=MAX_SIGNUP_HOUR));
        let signup = NewSignup::new(time, camper.id, activity.id)?;
        SignupRepo::create(&mut *tx, &signup).await?;
    }
    tracing::info!(
        campers = campers.len(),
        activities = activities.len(),
        signups = SIGNUP_COUNT,
        "Seeded camp data"
    );

    // --- Show ---
    let mut episodes = Vec::with_capacity(EPISODE_COUNT as usize);
    for number in 1..=EPISODE_COUNT {
        let input = CreateEpisode {
            date: format!("1/{number}/99"),
            number,
        };
        episodes.push(EpisodeRepo::create(&mut *tx, &input).await?);
    }

    let mut guests = Vec::with_capacity(GUEST_COUNT);
    for i in 0..GUEST_COUNT {
        let name = GUEST_NAMES[i % GUEST_NAMES.len()];
        let input = CreateGuest {
            name: if i < GUEST_NAMES.len() {
                name.to_string()
            } else {
                format!("{name} {}", i / GUEST_NAMES.len() + 1)
            },
            occupation: OCCUPATIONS
                .choose(&mut rng)
                .context("no occupations")?
                .to_string(),
        };
        guests.push(GuestRepo::create(&mut *tx, &input).await?);
    }

    for _ in 0..APPEARANCE_COUNT {
        let episode = episodes.choose(&mut rng).context("no episodes seeded")?;
        let guest = guests.choose(&mut rng).context("no guests seeded")?;
        let appearance = NewAppearance::new(
            i64::from(rng.random_range(MIN_RATING..=MAX_RATING)),
            episode.id,
            guest.id,
        )?;
        AppearanceRepo::create(&mut *tx, &appearance).await?;
    }
    tracing::info!(
        episodes = episodes.len(),
        guests = guests.len(),
        appearances = APPEARANCE_COUNT,
        "Seeded show data"
    );

    tx.commit().await?;
    tracing::info!("Seeding complete");
    Ok(())
}
