//! Vote records and score validation.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{EntityId, Timestamp};

/* --------------------------------------------------------------------------
Constants
-------------------------------------------------------------------------- */

/// Lowest accepted score for any vote dimension.
pub const MIN_SCORE: i16 = 1;

/// Highest accepted score for any vote dimension.
pub const MAX_SCORE: i16 = 5;

/// Maximum length of a user name attached to a vote.
pub const MAX_USER_NAME_LENGTH: usize = 100;

/// Maximum length of a vote comment.
pub const MAX_COMMENT_LENGTH: usize = 2_000;

/* --------------------------------------------------------------------------
Records
-------------------------------------------------------------------------- */

/// One user's verdict on one restaurant for one day.
///
/// `score_overall` is optional because imported history can lack it; such
/// votes are skipped by the stats aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vote {
    pub id: EntityId,
    pub restaurant_id: EntityId,
    pub user_name: String,
    pub score_overall: Option<i16>,
    pub score_food: i16,
    pub score_quantity: i16,
    pub score_price: i16,
    pub score_ambience: i16,
    pub comment: Option<String>,
    pub created_at: Timestamp,
}

/// Input for recording a vote.
#[derive(Debug, Clone, Deserialize)]
pub struct NewVote {
    pub restaurant_id: EntityId,
    pub user_name: String,
    pub score_overall: i16,
    pub score_food: i16,
    pub score_quantity: i16,
    pub score_price: i16,
    pub score_ambience: i16,
    pub comment: Option<String>,
}

/* --------------------------------------------------------------------------
Validation functions
-------------------------------------------------------------------------- */

fn score_in_range(score: i16) -> bool {
    (MIN_SCORE..=MAX_SCORE).contains(&score)
}

/// Check all five scores of a vote against `[MIN_SCORE, MAX_SCORE]`.
pub fn validate_scores(input: &NewVote) -> Result<(), CoreError> {
    let scores = [
        input.score_overall,
        input.score_food,
        input.score_quantity,
        input.score_price,
        input.score_ambience,
    ];
    if scores.iter().all(|&s| score_in_range(s)) {
        Ok(())
    } else {
        Err(CoreError::InvalidScore(format!(
            "Scores must be between {MIN_SCORE} and {MAX_SCORE}"
        )))
    }
}

/// Validate the free-text fields of a vote.
pub fn validate_vote_text(input: &NewVote) -> Result<(), CoreError> {
    let name = input.user_name.trim();
    if name.is_empty() {
        return Err(CoreError::Validation("user_name must not be blank".to_string()));
    }
    if name.chars().count() > MAX_USER_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "user_name exceeds maximum length of {MAX_USER_NAME_LENGTH} characters"
        )));
    }
    if let Some(comment) = &input.comment {
        if comment.chars().count() > MAX_COMMENT_LENGTH {
            return Err(CoreError::Validation(format!(
                "Comment exceeds maximum length of {MAX_COMMENT_LENGTH} characters"
            )));
        }
    }
    Ok(())
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
