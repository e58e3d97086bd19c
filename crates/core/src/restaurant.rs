//! Restaurant reference records and their enums.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidateUrl};

use crate::error::CoreError;
use crate::types::{EntityId, Timestamp};

/* --------------------------------------------------------------------------
Enums
-------------------------------------------------------------------------- */

/// Price tier, ordered `Low < Medium < High`.
///
/// Serialized by name; the euro-sign spelling is accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceLevel {
    #[serde(alias = "€")]
    Low,
    #[serde(alias = "€€")]
    Medium,
    #[serde(alias = "€€€")]
    High,
}

impl PriceLevel {
    /// Ordinal rank used by the `price` sort: low=1, medium=2, high=3.
    pub fn rank(self) -> u8 {
        match self {
            PriceLevel::Low => 1,
            PriceLevel::Medium => 2,
            PriceLevel::High => 3,
        }
    }

    /// Display symbol shown in the UI.
    pub fn symbol(self) -> &'static str {
        match self {
            PriceLevel::Low => "€",
            PriceLevel::Medium => "€€",
            PriceLevel::High => "€€€",
        }
    }

    /// Storage / wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            PriceLevel::Low => "low",
            PriceLevel::Medium => "medium",
            PriceLevel::High => "high",
        }
    }
}

impl fmt::Display for PriceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriceLevel {
    type Err = CoreError;

    /// Accepts either the wire name or the euro symbol.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "low" | "€" => Ok(PriceLevel::Low),
            "medium" | "€€" => Ok(PriceLevel::Medium),
            "high" | "€€€" => Ok(PriceLevel::High),
            other => Err(CoreError::Validation(format!(
                "Invalid price level '{other}'. Must be one of: low, medium, high"
            ))),
        }
    }
}

/// How quickly the team gets served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speed {
    Fast,
    Normal,
    Slow,
}

impl Speed {
    pub fn as_str(self) -> &'static str {
        match self {
            Speed::Fast => "fast",
            Speed::Normal => "normal",
            Speed::Slow => "slow",
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Speed {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "fast" => Ok(Speed::Fast),
            "normal" => Ok(Speed::Normal),
            "slow" => Ok(Speed::Slow),
            other => Err(CoreError::Validation(format!(
                "Invalid speed '{other}'. Must be one of: fast, normal, slow"
            ))),
        }
    }
}

/* --------------------------------------------------------------------------
Optional text fields
-------------------------------------------------------------------------- */

/// Trimmed value, or `None` when missing, null or blank.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

/// Patch form of [`blank_as_none`]: a present key always yields `Some`, so
/// `null` or `""` become `Some(None)` and clear the stored value.
fn clearable<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    blank_as_none(deserializer).map(Some)
}

/* --------------------------------------------------------------------------
Records
-------------------------------------------------------------------------- */

/// A restaurant the team can go to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: EntityId,
    pub name: String,
    pub address: String,
    pub price_level: PriceLevel,
    pub distance_minutes: i32,
    pub cuisine_type: String,
    pub speed: Speed,
    pub maps_url: Option<String>,
    pub internal_notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input for creating a restaurant.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewRestaurant {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 500))]
    pub address: String,
    pub price_level: PriceLevel,
    #[validate(range(min = 1))]
    pub distance_minutes: i32,
    #[validate(length(min = 1, max = 100))]
    pub cuisine_type: String,
    pub speed: Speed,
    #[validate(url)]
    #[serde(default, deserialize_with = "blank_as_none")]
    pub maps_url: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub internal_notes: Option<String>,
}

/// Partial update for a restaurant. Absent fields are left unchanged.
///
/// `maps_url` and `internal_notes` are cleared by sending `null` or a blank
/// string.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RestaurantPatch {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 500))]
    pub address: Option<String>,
    pub price_level: Option<PriceLevel>,
    #[validate(range(min = 1))]
    pub distance_minutes: Option<i32>,
    #[validate(length(min = 1, max = 100))]
    pub cuisine_type: Option<String>,
    pub speed: Option<Speed>,
    #[serde(default, deserialize_with = "clearable")]
    pub maps_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "clearable")]
    pub internal_notes: Option<Option<String>>,
}

impl RestaurantPatch {
    /// Apply this patch to `restaurant` in place, stamping `updated_at`.
    pub fn apply_to(&self, restaurant: &mut Restaurant, updated_at: Timestamp) {
        if let Some(name) = &self.name {
            restaurant.name = name.clone();
        }
        if let Some(address) = &self.address {
            restaurant.address = address.clone();
        }
        if let Some(price_level) = self.price_level {
            restaurant.price_level = price_level;
        }
        if let Some(distance) = self.distance_minutes {
            restaurant.distance_minutes = distance;
        }
        if let Some(cuisine) = &self.cuisine_type {
            restaurant.cuisine_type = cuisine.clone();
        }
        if let Some(speed) = self.speed {
            restaurant.speed = speed;
        }
        if let Some(url) = &self.maps_url {
            restaurant.maps_url = url.clone();
        }
        if let Some(notes) = &self.internal_notes {
            restaurant.internal_notes = notes.clone();
        }
        restaurant.updated_at = updated_at;
    }
}

/* --------------------------------------------------------------------------
Validation functions
-------------------------------------------------------------------------- */

fn validation_error(err: validator::ValidationErrors) -> CoreError {
    CoreError::Validation(err.to_string())
}

fn ensure_not_blank(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be blank")));
    }
    Ok(())
}

/// Validate a restaurant creation payload.
pub fn validate_new_restaurant(input: &NewRestaurant) -> Result<(), CoreError> {
    input.validate().map_err(validation_error)?;
    ensure_not_blank("name", &input.name)?;
    ensure_not_blank("address", &input.address)?;
    ensure_not_blank("cuisine_type", &input.cuisine_type)?;
    Ok(())
}

/// Validate a restaurant patch. Only present fields are checked.
pub fn validate_restaurant_patch(input: &RestaurantPatch) -> Result<(), CoreError> {
    input.validate().map_err(validation_error)?;
    if let Some(name) = &input.name {
        ensure_not_blank("name", name)?;
    }
    if let Some(address) = &input.address {
        ensure_not_blank("address", address)?;
    }
    if let Some(cuisine) = &input.cuisine_type {
        ensure_not_blank("cuisine_type", cuisine)?;
    }
    if let Some(Some(url)) = &input.maps_url {
        if !url.validate_url() {
            return Err(CoreError::Validation(format!("maps_url: invalid url '{url}'")));
        }
    }
    Ok(())
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
