//! Arbitrary data generation for serialization types.

use chrono::{DateTime, TimeZone, Utc};
use proptest::{arbitrary::any, prelude::*};

/// Returns a strategy that produces an arbitrary time from a [`u32`] number
/// of seconds past the epoch.
///
/// The nanoseconds value is always zero.
///
/// The eCash wire format stores block header and lock times as 4-byte
/// seconds values.
pub fn datetime_u32() -> impl Strategy<Value = DateTime<Utc>> {
    any::<u32>().prop_map(|secs| {
        Utc.timestamp_opt(secs.into(), 0)
            .single()
            .expect("in-range number of seconds and valid nanosecond")
    })
}
