//! Request handlers.
//!
//! Handlers parse the request, delegate to the store or the engines in
//! `lunchpick_core`, and map errors via [`AppError`](crate::error::AppError).

pub mod restaurant;
pub mod stats;
pub mod surprise;
pub mod vote;
