//! Show domain rules: episodes, guests and the appearances joining them.

use crate::error::CoreError;
use crate::types::DbId;

/// Lowest allowed appearance rating (inclusive).
pub const MIN_RATING: i32 = 1;

/// Highest allowed appearance rating (inclusive).
pub const MAX_RATING: i32 = 5;

/// An appearance rating in `[MIN_RATING, MAX_RATING]`.
///
/// Every assignment of a rating goes through [`Rating::new`] or
/// [`Rating::required`], both when an appearance is created and when it is
/// patched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(i32);

impl Rating {
    pub fn new(value: i64) -> Result<Self, CoreError> {
        i32::try_from(value)
            .ok()
            .filter(|value| (MIN_RATING..=MAX_RATING).contains(value))
            .map(Self)
            .ok_or_else(out_of_range)
    }

    /// Like [`Rating::new`], treating an explicit null as out of range.
    pub fn required(value: Option<i64>) -> Result<Self, CoreError> {
        value.map_or_else(|| Err(out_of_range()), Self::new)
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

fn out_of_range() -> CoreError {
    CoreError::Validation(format!(
        "Rating must be between {MIN_RATING} and {MAX_RATING}"
    ))
}

/// An appearance whose rating has been validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewAppearance {
    rating: Rating,
    episode_id: DbId,
    guest_id: DbId,
}

impl NewAppearance {
    pub fn new(rating: i64, episode_id: DbId, guest_id: DbId) -> Result<Self, CoreError> {
        Ok(Self {
            rating: Rating::new(rating)?,
            episode_id,
            guest_id,
        })
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn episode_id(&self) -> DbId {
        self.episode_id
    }

    pub fn guest_id(&self) -> DbId {
        self.guest_id
    }
}
