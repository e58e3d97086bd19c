//! Calendar-day boundaries used by the vote rules and the surprise picker.
//!
//! "Today" and "yesterday" are local calendar days, so every helper is
//! generic over the caller's time zone and returns UTC instants.

use chrono::{DateTime, Duration, Months, NaiveDate, NaiveTime, Offset, TimeZone, Utc};

use crate::types::Timestamp;

/// Midnight at the start of `date` in `tz`, as a UTC instant.
///
/// When midnight falls inside a DST gap the offset in effect at that wall
/// clock time is applied instead.
fn midnight_on<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> Timestamp {
    let naive = date.and_time(NaiveTime::MIN);
    match tz.from_local_datetime(&naive).earliest() {
        Some(dt) => dt.with_timezone(&Utc),
        None => {
            let offset = tz.offset_from_utc_datetime(&naive).fix();
            Utc.from_utc_datetime(&naive) - Duration::seconds(i64::from(offset.local_minus_utc()))
        }
    }
}

/// Start of the local calendar day containing `now`.
pub fn start_of_day<Tz: TimeZone>(now: &DateTime<Tz>) -> Timestamp {
    midnight_on(&now.timezone(), now.date_naive())
}

/// Start of the local calendar day before the one containing `now`.
pub fn start_of_yesterday<Tz: TimeZone>(now: &DateTime<Tz>) -> Timestamp {
    let today = now.date_naive();
    let yesterday = today.pred_opt().unwrap_or(today);
    midnight_on(&now.timezone(), yesterday)
}

/// The same local wall-clock time one calendar month earlier, as a UTC
/// instant.
///
/// Day-of-month overflow clamps to the last day of the earlier month
/// (31 March -> 28/29 February). If that local time does not exist in the
/// zone, falls back to thirty days earlier.
pub fn one_month_before<Tz: TimeZone>(now: &DateTime<Tz>) -> Timestamp {
    match now.clone().checked_sub_months(Months::new(1)) {
        Some(earlier) => earlier.with_timezone(&Utc),
        None => now.with_timezone(&Utc) - Duration::days(30),
    }
}

/// `now` minus a whole number of days.
pub fn days_before(now: Timestamp, days: i64) -> Timestamp {
    now - Duration::days(days)
}
