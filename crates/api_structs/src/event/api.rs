use crate::dtos::EventDTO;
use orgreminders_domain::{Event, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub event: EventDTO,
}

impl EventResponse {
    pub fn new(event: Event) -> Self {
        Self {
            event: EventDTO::new(event),
        }
    }
}

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsResponse {
    pub events: Vec<EventDTO>,
}

impl EventsResponse {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events: events.into_iter().map(EventDTO::new).collect(),
        }
    }
}

pub mod create_event {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        /// Organization names, the first one is the primary organization
        pub orgs: Vec<String>,
        pub title: String,
        /// Local time of the primary organization, `2024-03-10 09:00`
        /// or `03/10/2024 09:00AM`
        pub due: String,
        #[serde(default)]
        pub email_message: Option<String>,
        #[serde(default)]
        pub text_message: Option<String>,
        #[serde(default)]
        pub submitter: Option<String>,
        #[serde(default)]
        pub email_enabled: Option<bool>,
        #[serde(default)]
        pub text_enabled: Option<bool>,
        #[serde(default)]
        pub reminders: Option<Vec<String>>,
        #[serde(default)]
        pub notify_on_create: Option<bool>,
    }

    pub type APIResponse = EventResponse;
}

pub mod get_event {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub event_id: ID,
    }

    pub type APIResponse = EventResponse;
}

pub mod get_events {
    use super::*;

    #[derive(Serialize, Deserialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        #[serde(default)]
        pub active: Option<bool>,
    }

    pub type APIResponse = EventsResponse;
}

pub mod update_event {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub event_id: ID,
    }

    #[derive(Serialize, Deserialize, Default)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub orgs: Option<Vec<String>>,
        #[serde(default)]
        pub title: Option<String>,
        #[serde(default)]
        pub due: Option<String>,
        #[serde(default)]
        pub email_message: Option<String>,
        #[serde(default)]
        pub text_message: Option<String>,
        #[serde(default)]
        pub email_enabled: Option<bool>,
        #[serde(default)]
        pub text_enabled: Option<bool>,
        #[serde(default)]
        pub add_offsets: Option<Vec<String>>,
        #[serde(default)]
        pub remove_offsets: Option<Vec<String>>,
    }

    pub type APIResponse = EventResponse;
}

pub mod notify_event {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub event_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        /// Whether at least one reminder was dispatched
        pub notified: bool,
    }
}

pub mod send_event_reminders {
    use super::*;

    /// The events that got reminders sent out
    pub type APIResponse = EventsResponse;
}
