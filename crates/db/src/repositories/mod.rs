//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&mut PgConnection` as the first argument. Callers pass the
//! connection of the transaction that scopes the current request.

pub mod activity_repo;
pub mod appearance_repo;
pub mod camper_repo;
pub mod episode_repo;
pub mod guest_repo;
pub mod signup_repo;

pub use activity_repo::ActivityRepo;
pub use appearance_repo::AppearanceRepo;
pub use camper_repo::CamperRepo;
pub use episode_repo::EpisodeRepo;
pub use guest_repo::GuestRepo;
pub use signup_repo::SignupRepo;
