//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod restaurant_repo;
pub mod vote_repo;

pub use restaurant_repo::RestaurantRepo;
pub use vote_repo::VoteRepo;
