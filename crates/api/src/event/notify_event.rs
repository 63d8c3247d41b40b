use crate::{
    error::OrgRemindersError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use orgreminders_api_structs::notify_event::*;
use orgreminders_domain::{
    reminder::{is_overdue, is_reminder_due},
    Channel, Event, Organization, OutboundMessage, ID,
};
use orgreminders_infra::OrgRemindersContext;
use tracing::{error, info, warn};

pub async fn notify_event_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<OrgRemindersContext>,
) -> Result<HttpResponse, OrgRemindersError> {
    let event = ctx
        .repos
        .events
        .find(&path_params.event_id)
        .await
        .ok_or_else(|| UseCaseError::EventNotFound(path_params.event_id.clone()))?;

    let usecase = NotifyEventUseCase {
        event,
        force_immediate: true,
    };

    execute(usecase, &ctx)
        .await
        .map(|notified| HttpResponse::Ok().json(APIResponse { notified }))
        .map_err(OrgRemindersError::from)
}

/// Decides whether the reminders of `event` are due right now and sends them
/// to the members of every organization of the event.
///
/// Responds with `true` if at least one message was handed over to the
/// dispatcher successfully.
#[derive(Debug)]
pub struct NotifyEventUseCase {
    /// May be a partial copy, the stored event is read again before dispatch
    pub event: Event,
    /// Skip the schedule and notify now. Overdue events are never notified.
    pub force_immediate: bool,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    EventNotFound(ID),
}

impl From<UseCaseError> for OrgRemindersError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::EventNotFound(event_id) => Self::NotFound(format!(
                "The event with id: {}, was not found.",
                event_id
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for NotifyEventUseCase {
    type Response = bool;

    type Error = UseCaseError;

    const NAME: &'static str = "NotifyEvent";

    async fn execute(&mut self, ctx: &OrgRemindersContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.now();
        let mut full_event: Option<Event> = None;
        let mut dispatched = false;

        for org_name in &self.event.orgs {
            let org = match ctx.repos.organizations.find_by_name(org_name).await {
                Some(org) => org,
                None => {
                    warn!(
                        "Organization {} of event {} was not found, skipping it",
                        org_name, self.event.id
                    );
                    continue;
                }
            };
            let tz = match org.timezone() {
                Ok(tz) => tz,
                Err(e) => {
                    error!("Skipping organization {}: {}", org.name, e);
                    continue;
                }
            };

            let now = now.with_timezone(&tz);
            if is_overdue(&self.event.due.with_timezone(&tz), &now) {
                continue;
            }

            // The caller may hold a partial copy, the stored event decides
            let event = match full_event {
                Some(ref event) => event,
                None => {
                    let event = ctx
                        .repos
                        .events
                        .find(&self.event.id)
                        .await
                        .ok_or_else(|| UseCaseError::EventNotFound(self.event.id.clone()))?;
                    full_event.insert(event)
                }
            };

            let due = event.due.with_timezone(&tz);
            if !self.force_immediate && !is_reminder_due(&event.schedule, &due, &now) {
                continue;
            }
            for channel in Channel::enabled_for(event) {
                if dispatch(ctx, &org, event, channel).await {
                    dispatched = true;
                }
            }
        }

        Ok(dispatched)
    }
}

/// Sends the reminder for one organization on one channel.
/// Having nobody to send it to counts as success.
async fn dispatch(
    ctx: &OrgRemindersContext,
    org: &Organization,
    event: &Event,
    channel: Channel,
) -> bool {
    let members = match ctx.repos.members.find_by_org(&org.name).await {
        Ok(members) => members,
        Err(e) => {
            error!("Unable to look up the members of {}: {:?}", org.name, e);
            return false;
        }
    };

    let message =
        match OutboundMessage::reminder(org, event, channel, &members, &ctx.config.mail_domain) {
            Some(message) => message,
            None => {
                info!(
                    "No member of {} wants {} reminders, nothing sent for event {}",
                    org.name, channel, event.id
                );
                return true;
            }
        };

    match ctx.dispatcher.send(&message).await {
        Ok(_) => {
            info!(
                "Sent {} reminder for event {} to {} member(s) of {}",
                channel,
                event.id,
                message.bcc.len(),
                org.name
            );
            true
        }
        Err(e) => {
            error!(
                "Unable to send {} reminder for event {} to {}: {:?}",
                channel, event.id, org.name, e
            );
            false
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_helpers::{setup_context, RecordingDispatcher};
    use chrono::{prelude::*, Duration};
    use orgreminders_domain::Member;
    use std::sync::Arc;

    fn due() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 15, 0, 0).unwrap()
    }

    struct TestContext {
        ctx: OrgRemindersContext,
        dispatcher: Arc<RecordingDispatcher>,
        event: Event,
    }

    async fn setup_with(now: DateTime<Utc>, dispatcher: RecordingDispatcher) -> TestContext {
        let dispatcher = Arc::new(dispatcher);
        let ctx = setup_context(now, dispatcher.clone());

        let choir = Organization::new("Choir", "America/Chicago", now);
        ctx.repos.organizations.insert(&choir).await.unwrap();
        let mut amy = Member {
            name: "Amy".into(),
            email: "amy@example.com".into(),
            email_on: true,
            text_on: true,
            orgs: vec!["Choir".into()],
            ..Default::default()
        };
        amy.set_cell("555-123-4567", "verizon");
        ctx.repos.members.insert(&amy).await.unwrap();

        let mut event = Event::new(due(), now);
        event.orgs = vec!["Choir".into()];
        event.title = "Rehearsal".into();
        event.text_message = "Rehearsal at 10".into();
        event.email_message = "<p>Rehearsal at 10</p>".into();
        event.email_enabled = true;
        event.text_enabled = true;
        event.schedule.add_offset("1d");
        event.schedule.add_offset("2h");
        ctx.repos.events.insert(&event).await.unwrap();

        TestContext {
            ctx,
            dispatcher,
            event,
        }
    }

    async fn setup(now: DateTime<Utc>) -> TestContext {
        setup_with(now, RecordingDispatcher::default()).await
    }

    async fn notify(
        ctx: &OrgRemindersContext,
        event: &Event,
        force_immediate: bool,
    ) -> Result<bool, UseCaseError> {
        let mut usecase = NotifyEventUseCase {
            event: event.clone(),
            force_immediate,
        };
        usecase.execute(ctx).await
    }

    #[actix_web::main]
    #[test]
    async fn notifies_when_an_offset_matches_now() {
        let TestContext {
            ctx,
            dispatcher,
            event,
        } = setup(due() - Duration::hours(2) + Duration::seconds(30)).await;

        assert_eq!(notify(&ctx, &event, false).await, Ok(true));

        let sent = dispatcher.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].bcc, vec!["amy@example.com".to_string()]);
        assert!(sent[0].html_body.is_some());
        assert_eq!(sent[1].bcc, vec!["5551234567@vtext.com".to_string()]);
        assert!(sent[1].html_body.is_none());
        assert_eq!(sent[1].sender, "Choir Reminders <Choir@example.com>");
    }

    #[actix_web::main]
    #[test]
    async fn does_not_notify_between_offsets() {
        let TestContext {
            ctx,
            dispatcher,
            event,
        } = setup(due() - Duration::hours(2) - Duration::minutes(1)).await;

        assert_eq!(notify(&ctx, &event, false).await, Ok(false));
        assert!(dispatcher.sent().is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn gives_the_same_answer_twice_within_a_minute() {
        let now = due() - Duration::days(1) + Duration::seconds(10);
        let TestContext {
            ctx,
            dispatcher,
            event,
        } = setup(now).await;

        assert_eq!(notify(&ctx, &event, false).await, Ok(true));
        assert_eq!(notify(&ctx, &event, false).await, Ok(true));
        assert_eq!(dispatcher.sent().len(), 4);
    }

    #[actix_web::main]
    #[test]
    async fn forced_notification_ignores_the_schedule() {
        let TestContext {
            ctx,
            dispatcher,
            mut event,
        } = setup(due() - Duration::hours(5)).await;
        event.schedule = Default::default();
        event.text_enabled = false;
        ctx.repos.events.save(&event).await.unwrap();

        assert_eq!(notify(&ctx, &event, true).await, Ok(true));
        assert_eq!(dispatcher.sent().len(), 1);
    }

    #[actix_web::main]
    #[test]
    async fn due_now_is_not_overdue() {
        let TestContext {
            ctx,
            dispatcher,
            event,
        } = setup(due()).await;

        assert_eq!(notify(&ctx, &event, false).await, Ok(false));
        assert_eq!(notify(&ctx, &event, true).await, Ok(true));
        assert_eq!(dispatcher.sent().len(), 2);
    }

    #[actix_web::main]
    #[test]
    async fn overdue_events_are_never_notified() {
        let TestContext {
            ctx,
            dispatcher,
            event,
        } = setup(due() + Duration::seconds(1)).await;

        assert_eq!(notify(&ctx, &event, false).await, Ok(false));
        assert_eq!(notify(&ctx, &event, true).await, Ok(false));
        assert!(dispatcher.sent().is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn skips_organizations_that_do_not_exist() {
        let TestContext {
            ctx,
            dispatcher,
            mut event,
        } = setup(due() - Duration::hours(2)).await;
        event.orgs = vec!["Unknown".into(), "Choir".into()];
        ctx.repos.events.save(&event).await.unwrap();

        assert_eq!(notify(&ctx, &event, false).await, Ok(true));
        let sent = dispatcher.sent();
        assert_eq!(sent.len(), 2);
        assert!(sent.iter().all(|m| m.sender.starts_with("Choir Reminders")));
    }

    #[actix_web::main]
    #[test]
    async fn skips_organizations_with_invalid_time_zone() {
        let now = due() - Duration::hours(2);
        let TestContext {
            ctx,
            dispatcher,
            mut event,
        } = setup(now).await;
        let broken = Organization::new("Broken", "Mars/Olympus_Mons", now);
        ctx.repos.organizations.insert(&broken).await.unwrap();
        event.orgs = vec!["Broken".into()];
        ctx.repos.events.save(&event).await.unwrap();

        assert_eq!(notify(&ctx, &event, true).await, Ok(false));
        assert!(dispatcher.sent().is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn failing_refetch_aborts_the_evaluation() {
        let now = due() - Duration::hours(2);
        let TestContext {
            ctx,
            dispatcher,
            event: _,
        } = setup(now).await;
        let mut unsaved = Event::new(due(), now);
        unsaved.orgs = vec!["Choir".into()];
        unsaved.email_enabled = true;

        assert_eq!(
            notify(&ctx, &unsaved, true).await,
            Err(UseCaseError::EventNotFound(unsaved.id.clone()))
        );
        assert!(dispatcher.sent().is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn dispatches_the_stored_event() {
        let TestContext {
            ctx,
            dispatcher,
            event,
        } = setup(due() - Duration::hours(2)).await;
        let mut partial = event.clone();
        partial.title = String::new();
        partial.text_enabled = false;

        assert_eq!(notify(&ctx, &partial, false).await, Ok(true));
        let sent = dispatcher.sent();
        assert_eq!(sent.len(), 2);
        assert!(sent.iter().all(|m| m.subject == "Rehearsal"));
    }

    #[actix_web::main]
    #[test]
    async fn matches_offsets_of_the_stored_schedule() {
        let TestContext {
            ctx,
            dispatcher,
            event,
        } = setup(due() - Duration::hours(2)).await;
        // Listings only carry orgs, due, channels and title
        let mut partial = event.clone();
        partial.schedule = Default::default();

        assert_eq!(notify(&ctx, &partial, false).await, Ok(true));
        assert_eq!(dispatcher.sent().len(), 2);
    }

    #[actix_web::main]
    #[test]
    async fn failed_dispatch_is_not_reported_as_notified() {
        let TestContext {
            ctx,
            dispatcher,
            event,
        } = setup_with(due() - Duration::hours(2), RecordingDispatcher::failing()).await;

        assert_eq!(notify(&ctx, &event, false).await, Ok(false));
        assert_eq!(dispatcher.sent().len(), 2);
    }

    #[actix_web::main]
    #[test]
    async fn no_recipients_counts_as_success() {
        let now = due() - Duration::hours(2);
        let TestContext {
            ctx,
            dispatcher,
            mut event,
        } = setup(now).await;
        let band = Organization::new("Band", "UTC", now);
        ctx.repos.organizations.insert(&band).await.unwrap();
        event.orgs = vec!["Band".into()];
        ctx.repos.events.save(&event).await.unwrap();

        assert_eq!(notify(&ctx, &event, false).await, Ok(true));
        assert!(dispatcher.sent().is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn evaluates_each_organization_in_its_own_zone() {
        // 09:00 in Oslo on 2024-03-10 is 08:00 UTC
        let due = Utc.with_ymd_and_hms(2024, 3, 10, 8, 0, 0).unwrap();
        let now = due - Duration::hours(2);
        let dispatcher = Arc::new(RecordingDispatcher::default());
        let ctx = setup_context(now, dispatcher.clone());
        for (name, tz) in [("Oslo", "Europe/Oslo"), ("Tokyo", "Asia/Tokyo")] {
            let org = Organization::new(name, tz, now);
            ctx.repos.organizations.insert(&org).await.unwrap();
            let member = Member {
                name: format!("{} member", name),
                email: format!("{}@example.com", name.to_lowercase()),
                email_on: true,
                orgs: vec![name.into()],
                ..Default::default()
            };
            ctx.repos.members.insert(&member).await.unwrap();
        }
        let mut event = Event::new(due, now);
        event.orgs = vec!["Oslo".into(), "Tokyo".into()];
        event.email_enabled = true;
        event.schedule.add_offset("2h");
        ctx.repos.events.insert(&event).await.unwrap();

        assert_eq!(notify(&ctx, &event, false).await, Ok(true));
        let recipients = dispatcher
            .sent()
            .into_iter()
            .flat_map(|m| m.bcc)
            .collect::<Vec<_>>();
        assert_eq!(
            recipients,
            vec!["oslo@example.com".to_string(), "tokyo@example.com".to_string()]
        );
    }
}
