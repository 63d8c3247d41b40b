use chrono::{DateTime, TimeZone, Utc};

/// Timestamps are stored as millis since the unix epoch
pub fn from_millis(millis: i64) -> anyhow::Result<DateTime<Utc>> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .ok_or_else(|| anyhow::Error::msg(format!("Stored timestamp {} is out of range", millis)))
}
