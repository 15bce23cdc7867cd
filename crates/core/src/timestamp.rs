//! Timestamp rules for persisted rows.
//!
//! SQLite has no native datetime type, so timestamps are stored as text.
//! Every value is written in one fixed-width format with microsecond
//! precision, which makes `ORDER BY updated_at` on the raw column
//! chronological.

use chrono::{Duration, SubsecRound, Utc};

use crate::types::Timestamp;

/// Storage format: `2026-01-31T08:15:42.123456Z`.
pub const DB_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

/// Current time, truncated to the precision that survives a round trip
/// through the database.
pub fn now() -> Timestamp {
    Utc::now().trunc_subsecs(6)
}

/// The timestamp to record for a mutation of a row last touched at
/// `previous`.
///
/// Normally this is just [`now`]. If the clock has not advanced past
/// `previous` (two mutations within the same microsecond, or a clock step
/// backwards) the result is `previous + 1µs`, so `updated_at` strictly
/// increases on every mutation.
pub fn bump(previous: Timestamp) -> Timestamp {
    let current = now();
    if current > previous {
        current
    } else {
        previous.trunc_subsecs(6) + Duration::microseconds(1)
    }
}

/// Render a timestamp in [`DB_FORMAT`] for binding into a query.
pub fn to_db_text(ts: &Timestamp) -> String {
    ts.format(DB_FORMAT).to_string()
}
