use crate::shared::entity::{Entity, ID};
use chrono::{prelude::*, Duration};
use chrono_tz::Tz;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
#[error("Time zone: `{0}` is not a valid IANA time zone name")]
pub struct InvalidTimeZoneError(pub String);

/// An `Organization` owns `Event`s and `Member`s. Every due date and reminder
/// of its events is interpreted in the organization's time zone.
#[derive(Debug, Clone)]
pub struct Organization {
    pub id: ID,
    /// Unique, used to associate events and members with the organization
    pub name: String,
    pub description: String,
    pub active: bool,
    pub created: DateTime<Utc>,
    pub saved: DateTime<Utc>,
    pub expires: DateTime<Utc>,
    /// IANA name, kept as submitted and resolved on use
    pub time_zone: String,
    /// E-mail addresses of the users administrating this organization
    pub administrators: Vec<String>,
}

impl Organization {
    pub fn new(name: impl Into<String>, time_zone: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: Default::default(),
            name: name.into(),
            description: String::new(),
            active: true,
            created: now,
            saved: now,
            expires: now + Duration::weeks(1),
            time_zone: time_zone.into(),
            administrators: Vec::new(),
        }
    }

    pub fn timezone(&self) -> Result<Tz, InvalidTimeZoneError> {
        parse_timezone(&self.time_zone)
    }

    pub fn is_administrated_by(&self, email: &str) -> bool {
        self.administrators.iter().any(|admin| admin == email)
    }
}

pub fn parse_timezone(name: &str) -> Result<Tz, InvalidTimeZoneError> {
    name.parse::<Tz>()
        .map_err(|_| InvalidTimeZoneError(name.to_string()))
}

impl Entity for Organization {
    fn id(&self) -> &ID {
        &self.id
    }
}
