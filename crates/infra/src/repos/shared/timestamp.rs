use anyhow::anyhow;
use chrono::{DateTime, TimeZone, Utc};

/// Domain timestamps are UTC millis while the database stores `timestamptz`
pub fn to_datetime(ts: i64) -> anyhow::Result<DateTime<Utc>> {
    Utc.timestamp_millis_opt(ts)
        .single()
        .ok_or_else(|| anyhow!("Timestamp {} is out of range", ts))
}

pub fn from_datetime(dt: &DateTime<Utc>) -> i64 {
    dt.timestamp_millis()
}
