use orgreminders_domain::{Event, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDTO {
    pub name: String,
    /// Offset tokens like `1d` or `2h`, as stored
    pub offsets: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EventDTO {
    pub id: ID,
    pub orgs: Vec<String>,
    pub created: i64,
    pub saved: i64,
    /// Millis since the unix epoch
    pub due: i64,
    pub title: String,
    pub email_message: String,
    pub text_message: String,
    pub submitter: String,
    pub email_enabled: bool,
    pub text_enabled: bool,
    pub schedule: ScheduleDTO,
}

impl EventDTO {
    pub fn new(event: Event) -> Self {
        Self {
            schedule: ScheduleDTO {
                offsets: event.schedule.tokens(),
                name: event.schedule.name,
            },
            id: event.id,
            orgs: event.orgs,
            created: event.created.timestamp_millis(),
            saved: event.saved.timestamp_millis(),
            due: event.due.timestamp_millis(),
            title: event.title,
            email_message: event.email_message,
            text_message: event.text_message,
            submitter: event.submitter,
            email_enabled: event.email_enabled,
            text_enabled: event.text_enabled,
        }
    }
}
