//! Per-restaurant derived statistics.
//!
//! Stats are rebuilt from the full vote set on every read and never stored.

use serde::Serialize;

use crate::restaurant::Restaurant;
use crate::types::Timestamp;
use crate::vote::Vote;

/// A restaurant together with the aggregates derived from its votes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestaurantWithStats {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    /// Mean overall score, `0.0` when there are no votes.
    pub avg_score: f64,
    pub vote_count: i64,
    /// Creation time of the most recent vote.
    pub last_visit: Option<Timestamp>,
}

/// Aggregate one restaurant's votes.
///
/// Votes without an overall score are left out of the mean, the count and
/// the last visit alike.
pub fn aggregate(restaurant: Restaurant, votes: &[Vote]) -> RestaurantWithStats {
    let mut total: i64 = 0;
    let mut count: i64 = 0;
    let mut last_visit: Option<Timestamp> = None;

    for vote in votes {
        let Some(score) = vote.score_overall else {
            continue;
        };
        total += i64::from(score);
        count += 1;
        last_visit = Some(match last_visit {
            Some(seen) if seen >= vote.created_at => seen,
            _ => vote.created_at,
        });
    }

    let avg_score = if count > 0 {
        total as f64 / count as f64
    } else {
        0.0
    };

    RestaurantWithStats {
        restaurant,
        avg_score,
        vote_count: count,
        last_visit,
    }
}

/// Aggregate a full `(restaurant, votes)` snapshot.
pub fn aggregate_all(snapshot: Vec<(Restaurant, Vec<Vote>)>) -> Vec<RestaurantWithStats> {
    snapshot
        .into_iter()
        .map(|(restaurant, votes)| aggregate(restaurant, &votes))
        .collect()
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use chrono::Duration;

    #[test]
    fn no_votes_yields_zeroes() {
        let stats = aggregate(restaurant("A"), &[]);
        assert_eq!(stats.avg_score, 0.0);
        assert_eq!(stats.vote_count, 0);
        assert!(stats.last_visit.is_none());
    }

    #[test]
    fn mean_count_and_latest_visit() {
        let r = restaurant("A");
        let votes = vec![
            vote(&r, 5, epoch()),
            vote(&r, 2, epoch() + Duration::days(2)),
            vote(&r, 4, epoch() + Duration::days(1)),
        ];
        let stats = aggregate(r, &votes);
        assert!((stats.avg_score - 11.0 / 3.0).abs() < 1e-9);
        assert_eq!(stats.vote_count, 3);
        assert_eq!(stats.last_visit, Some(epoch() + Duration::days(2)));
    }

    #[test]
    fn votes_without_overall_score_are_skipped() {
        let r = restaurant("A");
        let mut missing = vote(&r, 1, epoch() + Duration::days(5));
        missing.score_overall = None;
        let votes = vec![vote(&r, 4, epoch()), missing];

        let stats = aggregate(r, &votes);
        assert_eq!(stats.avg_score, 4.0);
        assert_eq!(stats.vote_count, 1);
        assert_eq!(stats.last_visit, Some(epoch()));
    }

    #[test]
    fn aggregate_all_keeps_snapshot_order() {
        let a = restaurant("A");
        let b = restaurant("B");
        let votes_a = vec![vote(&a, 3, epoch())];
        let result = aggregate_all(vec![(a, votes_a), (b, vec![])]);
        assert_eq!(names(&result), vec!["A", "B"]);
        assert_eq!(result[0].vote_count, 1);
        assert_eq!(result[1].vote_count, 0);
    }
}
