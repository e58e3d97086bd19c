/// Restaurants and votes are keyed by UUID. Callers should treat them as opaque.
pub type EntityId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
