//! Team-wide dashboard superlatives.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone};
use serde::Serialize;

use crate::calendar::one_month_before;
use crate::restaurant::PriceLevel;
use crate::stats::RestaurantWithStats;
use crate::types::{EntityId, Timestamp};
use crate::vote::Vote;

/// Days of vote history fetched for the dashboard.
pub const RECENT_WINDOW_DAYS: i64 = 30;

/// Weight of this month's average score in the restaurant-of-the-month score.
pub const MONTH_AVG_WEIGHT: f64 = 2.0;

/// Weight of this month's vote count in the restaurant-of-the-month score.
pub const MONTH_VOTE_WEIGHT: f64 = 0.5;

/// Minimum votes before a restaurant can be called best value.
pub const BEST_VALUE_MIN_VOTES: i64 = 3;

/// Bonus added to the average score of `low` restaurants for best value.
pub const LOW_PRICE_VALUE_BONUS: f64 = 0.5;

/// Dashboard payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub restaurant_of_the_month: Option<RestaurantWithStats>,
    pub most_visited: Option<RestaurantWithStats>,
    pub best_value_for_money: Option<RestaurantWithStats>,
    pub total_restaurants: usize,
    pub total_votes: i64,
    pub avg_rating: f64,
}

/// First element with the strictly highest score; earlier entries win ties.
fn max_by_score<'a, I>(items: I) -> Option<&'a RestaurantWithStats>
where
    I: IntoIterator<Item = (&'a RestaurantWithStats, f64)>,
{
    let mut best: Option<(&RestaurantWithStats, f64)> = None;
    for (r, score) in items {
        match best {
            Some((_, top)) if top >= score => {}
            _ => best = Some((r, score)),
        }
    }
    best.map(|(r, _)| r)
}

/// Best restaurant over the votes cast since `since`.
///
/// Score is `avg × 2 + count × 0.5` over the window; restaurants without
/// votes in the window score zero but still compete, so any non-empty list
/// yields a winner.
pub fn restaurant_of_the_month<'a>(
    restaurants: &'a [RestaurantWithStats],
    recent_votes: &[Vote],
    since: Timestamp,
) -> Option<&'a RestaurantWithStats> {
    let mut tallies: HashMap<EntityId, (i64, i64)> = HashMap::new();
    for vote in recent_votes.iter().filter(|v| v.created_at >= since) {
        let Some(score) = vote.score_overall else {
            continue;
        };
        let entry = tallies.entry(vote.restaurant_id).or_insert((0, 0));
        entry.0 += i64::from(score);
        entry.1 += 1;
    }

    max_by_score(restaurants.iter().map(|r| {
        let score = match tallies.get(&r.restaurant.id) {
            Some(&(total, count)) if count > 0 => {
                let avg = total as f64 / count as f64;
                avg * MONTH_AVG_WEIGHT + count as f64 * MONTH_VOTE_WEIGHT
            }
            _ => 0.0,
        };
        (r, score)
    }))
}

/// Restaurant with the most votes, or `None` if nobody has voted.
pub fn most_visited(restaurants: &[RestaurantWithStats]) -> Option<&RestaurantWithStats> {
    max_by_score(restaurants.iter().map(|r| (r, r.vote_count as f64)))
        .filter(|r| r.vote_count > 0)
}

/// Best cheap or mid-priced restaurant with enough votes to trust.
pub fn best_value_for_money(restaurants: &[RestaurantWithStats]) -> Option<&RestaurantWithStats> {
    max_by_score(
        restaurants
            .iter()
            .filter(|r| {
                matches!(r.restaurant.price_level, PriceLevel::Low | PriceLevel::Medium)
                    && r.vote_count >= BEST_VALUE_MIN_VOTES
            })
            .map(|r| {
                let bonus = if r.restaurant.price_level == PriceLevel::Low {
                    LOW_PRICE_VALUE_BONUS
                } else {
                    0.0
                };
                (r, r.avg_score + bonus)
            }),
    )
}

/// Mean of the average scores of restaurants that have votes; `0.0` if none.
pub fn average_rating(restaurants: &[RestaurantWithStats]) -> f64 {
    let rated: Vec<f64> = restaurants
        .iter()
        .filter(|r| r.vote_count > 0)
        .map(|r| r.avg_score)
        .collect();
    if rated.is_empty() {
        0.0
    } else {
        rated.iter().sum::<f64>() / rated.len() as f64
    }
}

/// Build the dashboard from the aggregated restaurants and recent votes.
///
/// `recent_votes` may cover a wider window than a month; only votes from the
/// last calendar month before `now` count toward restaurant of the month.
pub fn summarize<Tz: TimeZone>(
    restaurants: &[RestaurantWithStats],
    recent_votes: &[Vote],
    now: &DateTime<Tz>,
) -> Summary {
    let since = one_month_before(now);

    Summary {
        restaurant_of_the_month: restaurant_of_the_month(restaurants, recent_votes, since).cloned(),
        most_visited: most_visited(restaurants).cloned(),
        best_value_for_money: best_value_for_money(restaurants).cloned(),
        total_restaurants: restaurants.len(),
        total_votes: restaurants.iter().map(|r| r.vote_count).sum(),
        avg_rating: average_rating(restaurants),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::fixtures::{vote, with_stats};
    use chrono::{Duration, Utc};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn priced(name: &str, level: PriceLevel, avg: f64, votes: i64) -> RestaurantWithStats {
        let mut r = with_stats(name, avg, votes, None);
        r.restaurant.price_level = level;
        r
    }

    #[test]
    fn empty_inputs_yield_zero_and_none() {
        let summary = summarize(&[], &[], &now());
        assert!(summary.restaurant_of_the_month.is_none());
        assert!(summary.most_visited.is_none());
        assert!(summary.best_value_for_money.is_none());
        assert_eq!(summary.total_restaurants, 0);
        assert_eq!(summary.total_votes, 0);
        assert_eq!(summary.avg_rating, 0.0);
    }

    #[test]
    fn restaurant_of_the_month_formula() {
        let a = with_stats("A", 0.0, 0, None);
        let b = with_stats("B", 0.0, 0, None);
        let recent = now() - Duration::days(3);
        // A: one 5 -> 10.5. B: three 3s -> 7.5.
        let votes = vec![
            vote(&a.restaurant, 5, recent),
            vote(&b.restaurant, 3, recent),
            vote(&b.restaurant, 3, recent),
            vote(&b.restaurant, 3, recent),
        ];
        let list = vec![b, a];
        let winner = restaurant_of_the_month(&list, &votes, one_month_before(&now())).unwrap();
        assert_eq!(winner.restaurant.name, "A");
    }

    #[test]
    fn votes_older_than_a_month_are_ignored() {
        let a = with_stats("A", 0.0, 0, None);
        let b = with_stats("B", 0.0, 0, None);
        let votes = vec![
            vote(&a.restaurant, 5, now() - Duration::days(40)),
            vote(&b.restaurant, 2, now() - Duration::days(1)),
        ];
        let list = vec![a, b];
        let summary = summarize(&list, &votes, &now());
        assert_eq!(summary.restaurant_of_the_month.unwrap().restaurant.name, "B");
    }

    #[test]
    fn restaurant_of_the_month_exists_without_recent_votes() {
        let list = vec![with_stats("A", 4.0, 3, None), with_stats("B", 5.0, 1, None)];
        let winner = restaurant_of_the_month(&list, &[], one_month_before(&now())).unwrap();
        assert_eq!(winner.restaurant.name, "A");
    }

    #[test]
    fn most_visited_requires_votes() {
        let none_voted = vec![with_stats("A", 0.0, 0, None)];
        assert!(most_visited(&none_voted).is_none());

        let list = vec![
            with_stats("A", 4.0, 2, None),
            with_stats("B", 3.0, 7, None),
            with_stats("C", 5.0, 7, None),
        ];
        assert_eq!(most_visited(&list).unwrap().restaurant.name, "B");
    }

    #[test]
    fn best_value_requires_three_votes() {
        let list = vec![
            priced("two-votes", PriceLevel::Low, 5.0, 2),
            priced("solid", PriceLevel::Medium, 4.0, 3),
        ];
        assert_eq!(best_value_for_money(&list).unwrap().restaurant.name, "solid");
    }

    #[test]
    fn best_value_excludes_high_price_and_rewards_low() {
        let list = vec![
            priced("pricey", PriceLevel::High, 5.0, 10),
            priced("mid", PriceLevel::Medium, 4.3, 5),
            priced("cheap", PriceLevel::Low, 4.0, 5),
        ];
        // mid 4.3 vs cheap 4.0 + 0.5
        assert_eq!(best_value_for_money(&list).unwrap().restaurant.name, "cheap");
    }

    #[test]
    fn best_value_none_when_nothing_qualifies() {
        let list = vec![priced("pricey", PriceLevel::High, 5.0, 10)];
        assert!(best_value_for_money(&list).is_none());
    }

    #[test]
    fn totals_and_average_rating() {
        let list = vec![
            with_stats("A", 4.0, 2, None),
            with_stats("B", 2.0, 3, None),
            with_stats("C", 0.0, 0, None),
        ];
        let summary = summarize(&list, &[], &now());
        assert_eq!(summary.total_restaurants, 3);
        assert_eq!(summary.total_votes, 5);
        assert_eq!(summary.avg_rating, 3.0);
    }
}
