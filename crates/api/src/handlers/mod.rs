//! Request handlers, one module per resource.
//!
//! Every handler opens exactly one transaction from the pool, passes it to
//! the repositories and commits it only when the whole request succeeded.
//! An early `?` return drops the transaction, which rolls it back.

pub mod activity;
pub mod appearance;
pub mod camper;
pub mod episode;
pub mod guest;
pub mod health;
pub mod signup;
