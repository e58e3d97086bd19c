//! Database row structs.
//!
//! Each submodule contains a `FromRow` struct matching the table layout and
//! a conversion into the matching `lunchpick_core` record.

pub mod restaurant;
pub mod vote;
