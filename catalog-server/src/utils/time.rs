//! Timestamp helpers
//!
//! All creation timestamps are Unix milliseconds; the store and the query
//! builder only ever see `i64`.

use shared::Timestamp;

/// Current time as Unix milliseconds
pub fn now_millis() -> Timestamp {
    chrono::Utc::now().timestamp_millis()
}
