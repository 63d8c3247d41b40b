use crate::{
    schedule::Schedule,
    shared::entity::{Entity, ID},
};
use chrono::prelude::*;

/// An `Event` is something with a due date that the members of one or more
/// `Organization`s should be reminded about.
#[derive(Debug, Clone)]
pub struct Event {
    pub id: ID,
    /// Names of the organizations this event belongs to. The first one is
    /// the primary organization, its time zone is used to read the due date
    /// submitted by users.
    pub orgs: Vec<String>,
    pub created: DateTime<Utc>,
    pub saved: DateTime<Utc>,
    pub due: DateTime<Utc>,
    pub title: String,
    /// HTML body of the e-mail reminder
    pub email_message: String,
    pub text_message: String,
    /// E-mail of the user who created the event
    pub submitter: String,
    pub email_enabled: bool,
    pub text_enabled: bool,
    pub schedule: Schedule,
}

impl Event {
    pub fn new(due: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self {
            id: Default::default(),
            orgs: Vec::new(),
            created: now,
            saved: now,
            due,
            title: String::new(),
            email_message: String::new(),
            text_message: String::new(),
            submitter: String::new(),
            email_enabled: false,
            text_enabled: false,
            schedule: Schedule::new("reminders"),
        }
    }

    pub fn primary_org(&self) -> Option<&str> {
        self.orgs.first().map(|org| org.as_str())
    }

    pub fn belongs_to(&self, org_name: &str) -> bool {
        self.orgs.iter().any(|org| org == org_name)
    }

    /// Not yet due on the day `now` falls on, measured in UTC days
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.due >= start_of_day(now)
    }
}

pub fn start_of_day(now: DateTime<Utc>) -> DateTime<Utc> {
    Utc.from_utc_datetime(&now.date_naive().and_time(NaiveTime::MIN))
}

impl Entity for Event {
    fn id(&self) -> &ID {
        &self.id
    }
}
