use chrono::prelude::*;
use chrono_tz::Tz;

const DUE_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M", "%m/%d/%Y %I:%M%p"];

/// Reads a wall clock date time as typed by a user of an organization
/// in `tz`. Ambiguous times (clocks turned back) resolve to the earliest
/// instant; times skipped by a DST change are rejected.
pub fn parse_local_datetime(datestr: &str, tz: &Tz) -> anyhow::Result<DateTime<Utc>> {
    let datestr = datestr.trim();
    let naive = DUE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(datestr, format).ok())
        .ok_or_else(|| anyhow::Error::msg(format!("Invalid date time: {}", datestr)))?;

    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| {
            anyhow::Error::msg(format!("{} does not exist in the time zone {}", datestr, tz))
        })
}

pub fn format_local_datetime(dt: &DateTime<Utc>, tz: &Tz) -> String {
    dt.with_timezone(tz).format("%m/%d/%Y %-I:%M%P").to_string()
}
