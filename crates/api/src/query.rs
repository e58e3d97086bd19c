//! Query parameter types for API handlers.
//!
//! Values arrive as raw strings and are parsed here so malformed input
//! produces the standard `BAD_REQUEST` JSON error instead of a bare
//! extractor rejection.

use std::str::FromStr;

use lunchpick_core::error::CoreError;
use lunchpick_core::filter::Filters;
use lunchpick_core::ranking::{Mood, RankingQuery, SortCriteria};
use lunchpick_core::restaurant::{PriceLevel, Speed};
use serde::Deserialize;

use crate::error::AppError;

/// Default look-back for `/votes/recent`.
pub const DEFAULT_RECENT_DAYS: i64 = 30;

/// Longest look-back accepted by `/votes/recent`.
pub const MAX_RECENT_DAYS: i64 = 365;

fn bad_request(err: CoreError) -> AppError {
    match err {
        CoreError::Validation(msg) => AppError::BadRequest(msg),
        other => AppError::BadRequest(other.to_string()),
    }
}

/// Treat absent and blank values alike.
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Parse a comma-separated list, skipping empty items.
fn parse_csv<T>(raw: &str) -> Result<Vec<T>, AppError>
where
    T: FromStr<Err = CoreError>,
{
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| item.parse().map_err(bad_request))
        .collect()
}

/// Listing parameters for `GET /restaurants`.
///
/// `price_level` and `speed` are comma-separated; `mood` overrides `sort`.
#[derive(Debug, Default, Deserialize)]
pub struct RankingParams {
    pub sort: Option<String>,
    pub mood: Option<String>,
    pub price_level: Option<String>,
    pub max_distance: Option<String>,
    pub cuisine: Option<String>,
    pub speed: Option<String>,
}

impl RankingParams {
    /// Convert into a [`RankingQuery`], rejecting unknown values.
    pub fn into_query(self) -> Result<RankingQuery, AppError> {
        let sort = non_blank(self.sort.as_deref())
            .map(SortCriteria::from_str)
            .transpose()
            .map_err(bad_request)?
            .unwrap_or_default();

        let mood = non_blank(self.mood.as_deref())
            .map(Mood::from_str)
            .transpose()
            .map_err(bad_request)?;

        let price_levels = non_blank(self.price_level.as_deref())
            .map(parse_csv::<PriceLevel>)
            .transpose()?;

        let speeds = non_blank(self.speed.as_deref())
            .map(parse_csv::<Speed>)
            .transpose()?;

        let max_distance = non_blank(self.max_distance.as_deref())
            .map(|raw| {
                raw.parse::<i32>()
                    .ok()
                    .filter(|d| *d >= 0)
                    .ok_or_else(|| {
                        AppError::BadRequest(format!(
                            "Invalid max_distance '{raw}'. Must be a non-negative integer"
                        ))
                    })
            })
            .transpose()?;

        let cuisine = non_blank(self.cuisine.as_deref()).map(str::to_string);

        let filters = Filters {
            price_levels,
            max_distance,
            cuisine,
            speeds,
        };

        Ok(RankingQuery {
            sort,
            mood,
            filters: (!filters.is_empty()).then_some(filters),
        })
    }
}

/// Parameters for `GET /votes/recent`.
#[derive(Debug, Default, Deserialize)]
pub struct RecentVotesParams {
    pub days: Option<String>,
}

impl RecentVotesParams {
    /// Look-back in days: [`DEFAULT_RECENT_DAYS`] when absent, clamped to
    /// `1..=MAX_RECENT_DAYS`.
    pub fn days(&self) -> Result<i64, AppError> {
        match non_blank(self.days.as_deref()) {
            None => Ok(DEFAULT_RECENT_DAYS),
            Some(raw) => raw
                .parse::<i64>()
                .map(|d| d.clamp(1, MAX_RECENT_DAYS))
                .map_err(|_| {
                    AppError::BadRequest(format!("Invalid days '{raw}'. Must be an integer"))
                }),
        }
    }
}
