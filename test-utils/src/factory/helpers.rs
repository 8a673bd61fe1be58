//! Shared helper utilities for factory methods.

use chrono::{DateTime, TimeZone, Utc};

/// Counter for generating unique user ids in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Fixed reference instant that test timelines are built from.
///
/// # Returns
/// - `DateTime<Utc>` - 2025-01-01 12:00:00 UTC
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0)
        .single()
        .expect("reference instant is unambiguous")
}
