//! Domain types and validation rules shared by the database and API crates.
//!
//! Every entity that carries a field invariant is built through a
//! constructor in this crate that returns `Result<_, CoreError>`, so an
//! invalid value never reaches the repository layer.

pub mod camp;
pub mod error;
pub mod show;
pub mod types;
