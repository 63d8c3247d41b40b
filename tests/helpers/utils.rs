use chrono::{DateTime, Duration, Utc};
use orgreminders_sdk::{CreateEventInput, CreateOrganizationInput, OrgRemindersSDK, Organization};

/// Format accepted for the due time of an event
pub fn format_local(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

pub async fn create_org(sdk: &OrgRemindersSDK, name: &str) -> Organization {
    sdk.organization
        .create(CreateOrganizationInput {
            name: name.into(),
            time_zone: "UTC".into(),
            description: None,
            administrators: vec!["admin@example.com".into()],
        })
        .await
        .expect("To create organization")
        .organization
}

pub fn event_input(orgs: Vec<String>, due_in: Duration) -> CreateEventInput {
    CreateEventInput {
        orgs,
        title: "Pack meeting".into(),
        due: format_local(&(Utc::now() + due_in)),
        email_message: Some("Bring a flashlight".into()),
        text_message: None,
        submitter: None,
        email_enabled: true,
        text_enabled: false,
        reminders: vec!["1d".into(), "2h".into()],
        notify_on_create: false,
    }
}
