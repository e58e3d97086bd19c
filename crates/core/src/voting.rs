//! The vote-creation rule: one vote per user, restaurant and local day.

use chrono::{DateTime, TimeZone, Utc};

use crate::calendar::start_of_day;
use crate::error::CoreError;
use crate::store::LunchStore;
use crate::vote::{validate_scores, validate_vote_text, NewVote, Vote};

/// Validate and record a vote.
///
/// Checks run in order and nothing is written unless all pass:
/// scores, text fields, restaurant existence, then the same-day duplicate
/// check, which the store performs atomically with the insert. "Same day" is
/// the local calendar day of `now`.
pub async fn create_vote<Tz: TimeZone>(
    store: &dyn LunchStore,
    input: &NewVote,
    now: &DateTime<Tz>,
) -> Result<Vote, CoreError> {
    validate_scores(input)?;
    validate_vote_text(input)?;

    let day_start = start_of_day(now);
    let created_at = now.with_timezone(&Utc);

    if store.get_restaurant(input.restaurant_id).await?.is_none() {
        return Err(CoreError::NotFound {
            entity: "Restaurant",
            id: input.restaurant_id,
        });
    }

    let user_name = input.user_name.trim();
    let normalized = NewVote {
        user_name: user_name.to_string(),
        ..input.clone()
    };
    store
        .insert_vote_once(&normalized, created_at, day_start)
        .await?
        .ok_or_else(|| {
            CoreError::DuplicateVote(format!(
                "{user_name} has already voted for this restaurant today"
            ))
        })
}
