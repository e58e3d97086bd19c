//! Filter engine for restaurant listings.

use serde::{Deserialize, Serialize};

use crate::restaurant::{PriceLevel, Speed};
use crate::stats::RestaurantWithStats;

/// User-selected listing constraints, combined with logical AND.
///
/// An absent field places no constraint on its dimension. Empty lists, an
/// empty cuisine string and a zero distance bound are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filters {
    pub price_levels: Option<Vec<PriceLevel>>,
    pub max_distance: Option<i32>,
    pub cuisine: Option<String>,
    pub speeds: Option<Vec<Speed>>,
}

impl Filters {
    /// True when no field constrains anything.
    pub fn is_empty(&self) -> bool {
        self.price_levels.as_ref().is_none_or(|p| p.is_empty())
            && self.max_distance.is_none_or(|d| d == 0)
            && self.cuisine.as_ref().is_none_or(|c| c.is_empty())
            && self.speeds.as_ref().is_none_or(|s| s.is_empty())
    }

    /// Whether a single restaurant passes every present constraint.
    pub fn matches(&self, candidate: &RestaurantWithStats) -> bool {
        let r = &candidate.restaurant;

        if let Some(levels) = self.price_levels.as_ref().filter(|l| !l.is_empty()) {
            if !levels.contains(&r.price_level) {
                return false;
            }
        }

        if let Some(max) = self.max_distance.filter(|&d| d != 0) {
            if r.distance_minutes > max {
                return false;
            }
        }

        if let Some(needle) = self.cuisine.as_deref().filter(|c| !c.is_empty()) {
            if !r
                .cuisine_type
                .to_lowercase()
                .contains(&needle.to_lowercase())
            {
                return false;
            }
        }

        if let Some(speeds) = self.speeds.as_ref().filter(|s| !s.is_empty()) {
            if !speeds.contains(&r.speed) {
                return false;
            }
        }

        true
    }
}

/// Return the restaurants that satisfy `filters`, preserving input order.
///
/// `None` is the identity.
pub fn apply_filters(
    restaurants: &[RestaurantWithStats],
    filters: Option<&Filters>,
) -> Vec<RestaurantWithStats> {
    match filters {
        None => restaurants.to_vec(),
        Some(f) => restaurants.iter().filter(|r| f.matches(r)).cloned().collect(),
    }
}
