//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row. It
//!   carries scalar columns and foreign key ids only, never related rows.
//! - A `Deserialize` create DTO, turned into a validated value before insert
//! - For mutable entities, a `Deserialize` update DTO whose fields tell an
//!   absent key apart from an explicit `null` (see `explicit_null`)
//! - Expanded views (`*With*`, `*Detail`) that a handler assembles when it
//!   needs related rows. Each view embeds related rows in one direction only,
//!   so no view can contain itself.

pub mod activity;
pub mod appearance;
pub mod camper;
pub mod episode;
pub mod guest;
pub mod signup;

use serde::{Deserialize, Deserializer};

/// Deserialize a present field into `Some(value)`, keeping `null` as `Some(None)`.
///
/// Paired with `#[serde(default)]`, an absent key stays `None`.
pub(crate) fn explicit_null<'de, T, D>(
    deserializer: D,
) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
