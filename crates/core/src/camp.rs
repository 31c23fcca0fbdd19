//! Camp domain rules: campers, activities and the signups joining them.
//!
//! [`NewCamper`] and [`NewSignup`] can only be obtained through their
//! constructors, which enforce the name, age and time invariants. Updates go
//! through the same constructor with the merged field values, so a partial
//! update is always checked against the whole resulting record.
//!
//! Numeric inputs are taken as `i64` and range-checked before they are
//! narrowed, so a value too wide for the column still reports the domain rule.

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Youngest age (inclusive) a camper may be registered with.
pub const MIN_CAMPER_AGE: i32 = 8;

/// Oldest age (inclusive) a camper may be registered with.
pub const MAX_CAMPER_AGE: i32 = 18;

/// First hour of the day (inclusive) a signup may be scheduled at.
pub const MIN_SIGNUP_HOUR: i32 = 0;

/// Last hour of the day (inclusive) a signup may be scheduled at.
pub const MAX_SIGNUP_HOUR: i32 = 23;

// ---------------------------------------------------------------------------
// Field validation
// ---------------------------------------------------------------------------

/// Reject an empty camper name.
pub fn validate_camper_name(name: &str) -> Result<(), CoreError> {
    if name.is_empty() {
        return Err(CoreError::Validation("Name cannot be empty".to_string()));
    }
    Ok(())
}

/// Accept an age in `[MIN_CAMPER_AGE, MAX_CAMPER_AGE]` and return it narrowed.
pub fn validate_camper_age(age: i64) -> Result<i32, CoreError> {
    i32::try_from(age)
        .ok()
        .filter(|age| (MIN_CAMPER_AGE..=MAX_CAMPER_AGE).contains(age))
        .ok_or_else(age_out_of_range)
}

/// Accept a signup hour in `[MIN_SIGNUP_HOUR, MAX_SIGNUP_HOUR]` and return it narrowed.
pub fn validate_signup_time(time: i64) -> Result<i32, CoreError> {
    i32::try_from(time)
        .ok()
        .filter(|time| (MIN_SIGNUP_HOUR..=MAX_SIGNUP_HOUR).contains(time))
        .ok_or_else(|| {
            CoreError::Validation(format!(
                "Time must be between {MIN_SIGNUP_HOUR} and {MAX_SIGNUP_HOUR}"
            ))
        })
}

fn age_out_of_range() -> CoreError {
    CoreError::Validation(format!(
        "Age must be between {MIN_CAMPER_AGE} and {MAX_CAMPER_AGE}"
    ))
}

// ---------------------------------------------------------------------------
// Validated values
// ---------------------------------------------------------------------------

/// Camper fields that have passed validation and may be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCamper {
    name: String,
    age: i32,
}

impl NewCamper {
    /// Validate the name, then the age.
    pub fn new(name: impl Into<String>, age: i64) -> Result<Self, CoreError> {
        let name = name.into();
        validate_camper_name(&name)?;
        let age = validate_camper_age(age)?;
        Ok(Self { name, age })
    }

    /// Merge changes onto the current values and validate the result.
    ///
    /// The outer `Option` says whether a field was given at all; `Some(None)`
    /// is an explicit null. A null name is the empty name and a null age is
    /// out of range.
    pub fn merged(
        current_name: &str,
        current_age: i32,
        name: Option<Option<String>>,
        age: Option<Option<i64>>,
    ) -> Result<Self, CoreError> {
        let name = match name {
            Some(name) => name.unwrap_or_default(),
            None => current_name.to_string(),
        };
        validate_camper_name(&name)?;

        let age = match age {
            Some(age) => age.ok_or_else(age_out_of_range)?,
            None => i64::from(current_age),
        };
        Self::new(name, age)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }
}

/// A signup whose hour has been validated.
///
/// The foreign keys are not checked here; the store rejects unknown parents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewSignup {
    time: i32,
    camper_id: DbId,
    activity_id: DbId,
}

impl NewSignup {
    pub fn new(time: i64, camper_id: DbId, activity_id: DbId) -> Result<Self, CoreError> {
        let time = validate_signup_time(time)?;
        Ok(Self {
            time,
            camper_id,
            activity_id,
        })
    }

    pub fn time(&self) -> i32 {
        self.time
    }

    pub fn camper_id(&self) -> DbId {
        self.camper_id
    }

    pub fn activity_id(&self) -> DbId {
        self.activity_id
    }
}
