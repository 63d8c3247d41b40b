use chrono::{prelude::*, Duration};
use serde::{de::Visitor, Deserialize, Serialize};
use std::{collections::HashMap, fmt::Display, str::FromStr};
use thiserror::Error;
use tracing::warn;

/// Unit suffix of an offset token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetUnit {
    Minutes,
    Hours,
    Days,
    Weeks,
}

impl OffsetUnit {
    fn from_suffix(c: char) -> Option<Self> {
        match c {
            'm' => Some(Self::Minutes),
            'h' => Some(Self::Hours),
            'd' => Some(Self::Days),
            'w' => Some(Self::Weeks),
            _ => None,
        }
    }

    fn suffix(&self) -> char {
        match self {
            Self::Minutes => 'm',
            Self::Hours => 'h',
            Self::Days => 'd',
            Self::Weeks => 'w',
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidOffsetError {
    #[error("Offset: `{0}` does not end with one of the units m, h, d or w")]
    Unit(String),
    #[error("Offset: `{0}` does not start with a valid non-negative integer")]
    Magnitude(String),
}

/// A relative distance before a due instant, e.g. `3d` or `30m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderOffset {
    pub magnitude: u32,
    pub unit: OffsetUnit,
}

impl ReminderOffset {
    pub fn new(magnitude: u32, unit: OffsetUnit) -> Self {
        Self { magnitude, unit }
    }

    pub fn duration(&self) -> Duration {
        let magnitude = i64::from(self.magnitude);
        match self.unit {
            OffsetUnit::Minutes => Duration::minutes(magnitude),
            OffsetUnit::Hours => Duration::hours(magnitude),
            OffsetUnit::Days => Duration::hours(24 * magnitude),
            OffsetUnit::Weeks => Duration::hours(168 * magnitude),
        }
    }

    /// The instant this offset points at, in the same zone as `due`.
    /// `None` if the result is not representable.
    pub fn remind_at<Tz: TimeZone>(&self, due: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        due.clone().checked_sub_signed(self.duration())
    }
}

impl FromStr for ReminderOffset {
    type Err = InvalidOffsetError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.chars();
        let unit = chars
            .next_back()
            .and_then(OffsetUnit::from_suffix)
            .ok_or_else(|| InvalidOffsetError::Unit(token.to_string()))?;

        let digits = chars.as_str();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(InvalidOffsetError::Magnitude(token.to_string()));
        }
        let magnitude = digits
            .parse::<u32>()
            .map_err(|_| InvalidOffsetError::Magnitude(token.to_string()))?;

        Ok(Self { magnitude, unit })
    }
}

impl Display for ReminderOffset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.magnitude, self.unit.suffix())
    }
}

/// One entry of a `Schedule`. Tokens are accepted as is when added and
/// the ones that do not parse are kept so that they survive storage,
/// but they never produce a trigger time.
/// The token is always kept verbatim, `03d` stays `03d`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleOffset {
    Valid {
        token: String,
        offset: ReminderOffset,
    },
    Malformed(String),
}

impl ScheduleOffset {
    pub fn token(&self) -> &str {
        match self {
            Self::Valid { token, .. } => token,
            Self::Malformed(token) => token,
        }
    }
}

impl From<&str> for ScheduleOffset {
    fn from(token: &str) -> Self {
        match token.parse::<ReminderOffset>() {
            Ok(offset) => Self::Valid {
                token: token.to_string(),
                offset,
            },
            Err(_) => Self::Malformed(token.to_string()),
        }
    }
}

impl Serialize for ScheduleOffset {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.token())
    }
}

impl<'de> Deserialize<'de> for ScheduleOffset {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct OffsetVisitor;

        impl<'de> Visitor<'de> for OffsetVisitor {
            type Value = ScheduleOffset;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("An offset token like `3d`")
            }

            fn visit_str<E>(self, value: &str) -> Result<ScheduleOffset, E>
            where
                E: serde::de::Error,
            {
                Ok(ScheduleOffset::from(value))
            }
        }

        deserializer.deserialize_str(OffsetVisitor)
    }
}

/// A named list of reminder offsets that belongs to an `Event`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub name: String,
    offsets: Vec<ScheduleOffset>,
}

impl Schedule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            offsets: Vec::new(),
        }
    }

    pub fn from_tokens<I, S>(name: impl Into<String>, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut schedule = Self::new(name);
        for token in tokens {
            schedule.add_offset(token.as_ref());
        }
        schedule
    }

    /// Appends the token. Validation happens when trigger times are computed.
    pub fn add_offset(&mut self, token: &str) {
        self.offsets.push(ScheduleOffset::from(token));
    }

    /// Removes every entry whose token is exactly `token`
    pub fn remove_offset(&mut self, token: &str) {
        self.offsets.retain(|offset| offset.token() != token);
    }

    pub fn offsets(&self) -> &[ScheduleOffset] {
        &self.offsets
    }

    /// The durable string form of the offsets
    pub fn tokens(&self) -> Vec<String> {
        self.offsets
            .iter()
            .map(|offset| offset.token().to_string())
            .collect()
    }

    /// Absolute trigger instants keyed by offset token, in the zone of `due`.
    /// Malformed tokens are skipped.
    pub fn trigger_times<Tz: TimeZone>(&self, due: &DateTime<Tz>) -> HashMap<String, DateTime<Tz>> {
        let mut times = HashMap::with_capacity(self.offsets.len());
        for entry in &self.offsets {
            match entry {
                ScheduleOffset::Valid { token, offset } => match offset.remind_at(due) {
                    Some(remind_at) => {
                        times.insert(token.clone(), remind_at);
                    }
                    None => warn!(
                        "Offset {} of schedule {:?} is out of range, skipping it",
                        token, self.name
                    ),
                },
                ScheduleOffset::Malformed(token) => {
                    warn!(
                        "Cannot parse offset {:?} of schedule {:?}, skipping it",
                        token, self.name
                    );
                }
            }
        }
        times
    }
}
