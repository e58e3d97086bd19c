//! Surprise picker.
//!
//! Two stages: a deterministic shortlist of eligible, least-tried
//! restaurants, then a uniform draw from that shortlist. Yesterday's pick is
//! never on the shortlist.

use chrono::{DateTime, TimeZone};
use rand::Rng;

use crate::calendar::{start_of_day, start_of_yesterday};
use crate::stats::RestaurantWithStats;

/// Minimum average score for a voted restaurant to stay eligible.
pub const MIN_ELIGIBLE_SCORE: f64 = 3.0;

/// Maximum number of candidates the final draw chooses from.
pub const SHORTLIST_SIZE: usize = 5;

/// Untested restaurants are always eligible; voted ones need a decent average.
pub fn is_eligible(r: &RestaurantWithStats) -> bool {
    r.avg_score >= MIN_ELIGIBLE_SCORE || r.vote_count == 0
}

/// The restaurant last visited during the local calendar day before `now`.
///
/// If several qualify, the one with the latest visit wins.
pub fn yesterday_restaurant<'a, Tz: TimeZone>(
    restaurants: &'a [RestaurantWithStats],
    now: &DateTime<Tz>,
) -> Option<&'a RestaurantWithStats> {
    let from = start_of_yesterday(now);
    let until = start_of_day(now);

    restaurants
        .iter()
        .filter_map(|r| r.last_visit.map(|visit| (r, visit)))
        .filter(|(_, visit)| *visit >= from && *visit < until)
        .fold(None, |best: Option<(&RestaurantWithStats, _)>, (r, visit)| match best {
            Some((_, seen)) if seen >= visit => best,
            _ => Some((r, visit)),
        })
        .map(|(r, _)| r)
}

/// Eligible candidates minus yesterday's restaurant, fewest votes first,
/// truncated to [`SHORTLIST_SIZE`].
pub fn shortlist<'a, Tz: TimeZone>(
    restaurants: &'a [RestaurantWithStats],
    now: &DateTime<Tz>,
) -> Vec<&'a RestaurantWithStats> {
    let excluded = yesterday_restaurant(restaurants, now).map(|r| r.restaurant.id);

    let mut candidates: Vec<&RestaurantWithStats> = restaurants
        .iter()
        .filter(|r| is_eligible(r))
        .filter(|r| Some(r.restaurant.id) != excluded)
        .collect();

    candidates.sort_by_key(|r| r.vote_count);
    candidates.truncate(SHORTLIST_SIZE);
    candidates
}

/// Pick one restaurant uniformly at random from the shortlist.
///
/// Returns `None` when nothing is eligible.
pub fn pick_surprise<'a, Tz: TimeZone, R: Rng>(
    restaurants: &'a [RestaurantWithStats],
    now: &DateTime<Tz>,
    rng: &mut R,
) -> Option<&'a RestaurantWithStats> {
    let shortlist = shortlist(restaurants, now);
    if shortlist.is_empty() {
        return None;
    }
    let index = rng.random_range(0..shortlist.len());
    Some(shortlist[index])
}
