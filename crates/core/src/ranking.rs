//! Ranking engine: criterion sorts and mood heuristics.
//!
//! A mood, when given, replaces the criterion sort entirely. All sorts are
//! stable, so ties keep their input order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::filter::{apply_filters, Filters};
use crate::restaurant::{PriceLevel, Speed};
use crate::stats::RestaurantWithStats;

// ---------------------------------------------------------------------------
// Mood weights
// ---------------------------------------------------------------------------

/// Speed points for a `fast` restaurant under the `fast` mood.
pub const FAST_SPEED_POINTS: i32 = 10;

/// Speed points for a `normal` restaurant under the `fast` mood.
pub const NORMAL_SPEED_POINTS: i32 = 5;

/// Walking minutes after which a restaurant earns no proximity points.
pub const PROXIMITY_HORIZON_MINUTES: i32 = 20;

/// Price points for a `low` restaurant under the `cheap` mood.
pub const LOW_PRICE_POINTS: f64 = 10.0;

/// Price points for a `medium` restaurant under the `cheap` mood.
pub const MEDIUM_PRICE_POINTS: f64 = 5.0;

/// Multiplier applied to the average score under the `cheap` mood.
pub const CHEAP_RATING_WEIGHT: f64 = 2.0;

// ---------------------------------------------------------------------------
// Criteria
// ---------------------------------------------------------------------------

/// Explicit listing order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortCriteria {
    /// Best average score first, more votes breaking ties.
    #[default]
    Rating,
    /// Closest first.
    Distance,
    /// Cheapest first.
    Price,
    /// Most recently visited first, never-visited last.
    Recent,
}

impl fmt::Display for SortCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortCriteria::Rating => "rating",
            SortCriteria::Distance => "distance",
            SortCriteria::Price => "price",
            SortCriteria::Recent => "recent",
        })
    }
}

impl FromStr for SortCriteria {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "rating" => Ok(SortCriteria::Rating),
            "distance" => Ok(SortCriteria::Distance),
            "price" => Ok(SortCriteria::Price),
            "recent" => Ok(SortCriteria::Recent),
            other => Err(CoreError::Validation(format!(
                "Invalid sort '{other}'. Must be one of: rating, distance, price, recent"
            ))),
        }
    }
}

/// Named heuristic ranking strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Fast,
    Cheap,
    Quality,
    New,
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mood::Fast => "fast",
            Mood::Cheap => "cheap",
            Mood::Quality => "quality",
            Mood::New => "new",
        })
    }
}

impl FromStr for Mood {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "fast" => Ok(Mood::Fast),
            "cheap" => Ok(Mood::Cheap),
            "quality" => Ok(Mood::Quality),
            "new" => Ok(Mood::New),
            other => Err(CoreError::Validation(format!(
                "Invalid mood '{other}'. Must be one of: fast, cheap, quality, new"
            ))),
        }
    }
}

/// Everything a listing request can ask for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankingQuery {
    #[serde(default)]
    pub sort: SortCriteria,
    pub mood: Option<Mood>,
    pub filters: Option<Filters>,
}

// ---------------------------------------------------------------------------
// Scores
// ---------------------------------------------------------------------------

/// Score used by the `fast` mood: speed points plus proximity points.
pub fn fast_score(r: &RestaurantWithStats) -> i32 {
    let speed_points = match r.restaurant.speed {
        Speed::Fast => FAST_SPEED_POINTS,
        Speed::Normal => NORMAL_SPEED_POINTS,
        Speed::Slow => 0,
    };
    let proximity_points = (PROXIMITY_HORIZON_MINUTES - r.restaurant.distance_minutes).max(0);
    speed_points + proximity_points
}

/// Score used by the `cheap` mood: price points plus weighted rating.
pub fn cheap_score(r: &RestaurantWithStats) -> f64 {
    let price_points = match r.restaurant.price_level {
        PriceLevel::Low => LOW_PRICE_POINTS,
        PriceLevel::Medium => MEDIUM_PRICE_POINTS,
        PriceLevel::High => 0.0,
    };
    let value_points = if r.vote_count > 0 {
        r.avg_score * CHEAP_RATING_WEIGHT
    } else {
        0.0
    };
    price_points + value_points
}

fn by_recent_visit(a: &RestaurantWithStats, b: &RestaurantWithStats) -> Ordering {
    match (a.last_visit, b.last_visit) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Order restaurants by an explicit criterion.
pub fn sort_restaurants(
    restaurants: &[RestaurantWithStats],
    criteria: SortCriteria,
) -> Vec<RestaurantWithStats> {
    let mut sorted = restaurants.to_vec();
    match criteria {
        SortCriteria::Rating => sorted.sort_by(|a, b| {
            b.avg_score
                .total_cmp(&a.avg_score)
                .then_with(|| b.vote_count.cmp(&a.vote_count))
        }),
        SortCriteria::Distance => sorted.sort_by_key(|r| r.restaurant.distance_minutes),
        SortCriteria::Price => sorted.sort_by_key(|r| r.restaurant.price_level.rank()),
        SortCriteria::Recent => sorted.sort_by(by_recent_visit),
    }
    sorted
}

/// Order (and for `quality`, restrict) restaurants by a mood heuristic.
pub fn apply_mood(restaurants: &[RestaurantWithStats], mood: Mood) -> Vec<RestaurantWithStats> {
    let mut sorted = restaurants.to_vec();
    match mood {
        Mood::Fast => sorted.sort_by_key(|r| std::cmp::Reverse(fast_score(r))),
        Mood::Cheap => sorted.sort_by(|a, b| cheap_score(b).total_cmp(&cheap_score(a))),
        Mood::Quality => {
            sorted.retain(|r| r.vote_count > 0);
            sorted.sort_by(|a, b| b.avg_score.total_cmp(&a.avg_score));
        }
        Mood::New => sorted.sort_by_key(|r| r.vote_count),
    }
    sorted
}

/// Filter, then order by mood if one is set, otherwise by the sort criterion.
pub fn rank(restaurants: &[RestaurantWithStats], query: &RankingQuery) -> Vec<RestaurantWithStats> {
    let filtered = apply_filters(restaurants, query.filters.as_ref());
    match query.mood {
        Some(mood) => apply_mood(&filtered, mood),
        None => sort_restaurants(&filtered, query.sort),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
