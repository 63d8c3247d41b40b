use super::{create_event::CreateEventUseCase, update_event::UpdateEventUseCase};
use crate::shared::usecase::Subscriber;
use orgreminders_domain::{Event, OutboundMessage, Tz};
use orgreminders_infra::OrgRemindersContext;
use tracing::{error, info, warn};

/// Zone of the first organization of the event, UTC if it can not be resolved
async fn primary_timezone(event: &Event, ctx: &OrgRemindersContext) -> Tz {
    let org = match event.orgs.first() {
        Some(name) => ctx.repos.organizations.find_by_name(name).await,
        None => None,
    };
    match org.map(|org| org.timezone()) {
        Some(Ok(tz)) => tz,
        _ => {
            warn!("No time zone for event {}, showing its due time in UTC", event.id);
            Tz::UTC
        }
    }
}

async fn notify_submitter(event: &Event, subject_prefix: &str, ctx: &OrgRemindersContext) {
    if event.submitter.is_empty() {
        return;
    }
    let tz = primary_timezone(event, ctx).await;
    let message = match OutboundMessage::submitter_notice(
        event,
        subject_prefix,
        &tz,
        &ctx.config.mail_domain,
    ) {
        Ok(message) => message,
        Err(e) => {
            error!("Unable to render the notice for event {}: {:?}", event.id, e);
            return;
        }
    };
    // Sideeffect, the event is saved either way
    match ctx.dispatcher.send(&message).await {
        Ok(_) => info!("Notified {} about event {}", event.submitter, event.id),
        Err(e) => error!(
            "Unable to notify {} about event {}: {:?}",
            event.submitter, event.id, e
        ),
    }
}

pub struct NotifySubmitterOnEventCreated;

#[async_trait::async_trait(?Send)]
impl Subscriber<CreateEventUseCase> for NotifySubmitterOnEventCreated {
    async fn notify(&self, e: &Event, ctx: &OrgRemindersContext) {
        notify_submitter(e, "Event Saved: ", ctx).await;
    }
}

pub struct NotifySubmitterOnEventUpdated;

#[async_trait::async_trait(?Send)]
impl Subscriber<UpdateEventUseCase> for NotifySubmitterOnEventUpdated {
    async fn notify(&self, e: &Event, ctx: &OrgRemindersContext) {
        notify_submitter(e, "Event Updated: ", ctx).await;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::{
        test_helpers::{setup_context, RecordingDispatcher},
        usecase::execute,
    };
    use chrono::prelude::*;
    use orgreminders_domain::Organization;
    use std::sync::Arc;

    #[actix_web::main]
    #[test]
    async fn submitter_is_told_about_created_and_updated_events() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let dispatcher = Arc::new(RecordingDispatcher::default());
        let ctx = setup_context(now, dispatcher.clone());
        let choir = Organization::new("Choir", "America/Chicago", now);
        ctx.repos.organizations.insert(&choir).await.unwrap();

        let create = CreateEventUseCase {
            orgs: vec!["Choir".into()],
            title: "Concert".into(),
            due: "2024-03-10 09:00".into(),
            email_message: String::new(),
            text_message: String::new(),
            submitter: "director@example.com".into(),
            email_enabled: true,
            text_enabled: false,
            reminders: vec![],
        };
        let event = execute(create, &ctx).await.unwrap();
        let update = UpdateEventUseCase {
            event_id: event.id.clone(),
            add_offsets: vec!["1d".into()],
            ..Default::default()
        };
        execute(update, &ctx).await.unwrap();

        let sent = dispatcher.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].subject, "Event Saved: Concert");
        assert_eq!(sent[1].subject, "Event Updated: Concert");
        assert!(sent
            .iter()
            .all(|m| m.to == vec!["director@example.com".to_string()]));
        // Due time is shown the way the organization entered it
        assert!(sent.iter().all(|m| m
            .html_body
            .as_deref()
            .unwrap_or_default()
            .contains("03/10/2024 9:00am")));
    }
}
