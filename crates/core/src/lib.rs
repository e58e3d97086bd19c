//! Lunch decision domain logic.
//!
//! Everything in this crate is computed from restaurant and vote snapshots
//! handed in by the caller. The only I/O seam is the [`store::LunchStore`]
//! capability trait, implemented by the `db` crate.

pub mod calendar;
pub mod catalog;
pub mod error;
pub mod filter;
pub mod ranking;
pub mod restaurant;
pub mod stats;
pub mod store;
pub mod summary;
pub mod surprise;
pub mod types;
pub mod vote;
pub mod voting;
