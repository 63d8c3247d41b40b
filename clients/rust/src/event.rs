use crate::{APIResponse, BaseClient, ID};
use orgreminders_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

/// Header carrying the secret that guards the reminder sweep endpoint
const CRON_SECRET_HEADER: &str = "orgreminders-cron-secret";

#[derive(Clone)]
pub struct EventClient {
    base: Arc<BaseClient>,
}

pub struct CreateEventInput {
    pub orgs: Vec<String>,
    pub title: String,
    /// Local time of the first organization in `orgs`, `2024-03-10 09:00`
    pub due: String,
    pub email_message: Option<String>,
    pub text_message: Option<String>,
    pub submitter: Option<String>,
    pub email_enabled: bool,
    pub text_enabled: bool,
    pub reminders: Vec<String>,
    pub notify_on_create: bool,
}

#[derive(Default)]
pub struct UpdateEventInput {
    pub event_id: ID,
    pub orgs: Option<Vec<String>>,
    pub title: Option<String>,
    pub due: Option<String>,
    pub email_message: Option<String>,
    pub text_message: Option<String>,
    pub email_enabled: Option<bool>,
    pub text_enabled: Option<bool>,
    pub add_offsets: Vec<String>,
    pub remove_offsets: Vec<String>,
}

impl EventClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get(&self, event_id: ID) -> APIResponse<get_event::APIResponse> {
        self.base
            .get(format!("events/{}", event_id), StatusCode::OK)
            .await
    }

    pub async fn list(&self, active_only: bool) -> APIResponse<get_events::APIResponse> {
        self.base
            .get(format!("events?active={}", active_only), StatusCode::OK)
            .await
    }

    pub async fn create(&self, input: CreateEventInput) -> APIResponse<create_event::APIResponse> {
        let body = create_event::RequestBody {
            orgs: input.orgs,
            title: input.title,
            due: input.due,
            email_message: input.email_message,
            text_message: input.text_message,
            submitter: input.submitter,
            email_enabled: Some(input.email_enabled),
            text_enabled: Some(input.text_enabled),
            reminders: Some(input.reminders),
            notify_on_create: Some(input.notify_on_create),
        };

        self.base
            .post(body, "events".into(), StatusCode::CREATED)
            .await
    }

    pub async fn update(&self, input: UpdateEventInput) -> APIResponse<update_event::APIResponse> {
        let event_id = input.event_id.clone();
        let body = update_event::RequestBody {
            orgs: input.orgs,
            title: input.title,
            due: input.due,
            email_message: input.email_message,
            text_message: input.text_message,
            email_enabled: input.email_enabled,
            text_enabled: input.text_enabled,
            add_offsets: Some(input.add_offsets),
            remove_offsets: Some(input.remove_offsets),
        };
        self.base
            .put(body, format!("events/{}", event_id), StatusCode::OK)
            .await
    }

    /// Sends the reminders of the event now, unless it is overdue
    pub async fn notify(&self, event_id: ID) -> APIResponse<notify_event::APIResponse> {
        self.base
            .post((), format!("events/{}/notify", event_id), StatusCode::OK)
            .await
    }

    /// Runs the reminder sweep over all active events
    pub async fn send_reminders(
        &self,
        cron_secret: &str,
    ) -> APIResponse<send_event_reminders::APIResponse> {
        self.base
            .post_with_headers(
                (),
                "cron/reminders".into(),
                &[(CRON_SECRET_HEADER, cron_secret)],
                StatusCode::OK,
            )
            .await
    }
}
