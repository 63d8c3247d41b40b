use super::notify_event::NotifyEventUseCase;
use crate::{
    error::OrgRemindersError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use orgreminders_api_structs::send_event_reminders::*;
use orgreminders_domain::{start_of_day, Event};
use orgreminders_infra::OrgRemindersContext;
use tracing::{error, info};

pub const CRON_SECRET_HEADER: &str = "orgreminders-cron-secret";

/// Lets an external scheduler trigger the reminder sweep
pub async fn send_event_reminders_controller(
    http_req: HttpRequest,
    ctx: web::Data<OrgRemindersContext>,
) -> Result<HttpResponse, OrgRemindersError> {
    let secret = http_req
        .headers()
        .get(CRON_SECRET_HEADER)
        .and_then(|secret| secret.to_str().ok());
    if secret != Some(ctx.config.cron_secret_code.as_str()) {
        return Err(OrgRemindersError::Unauthorized(format!(
            "Missing or invalid `{}` header",
            CRON_SECRET_HEADER
        )));
    }

    execute(SendEventRemindersUseCase {}, &ctx)
        .await
        .map(|events| HttpResponse::Ok().json(APIResponse::new(events)))
        .map_err(OrgRemindersError::from)
}

/// Evaluates every event that is due today or later.
/// Responds with the events that got reminders sent out.
#[derive(Debug)]
pub struct SendEventRemindersUseCase {}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for OrgRemindersError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendEventRemindersUseCase {
    type Response = Vec<Event>;

    type Error = UseCaseError;

    const NAME: &'static str = "SendEventReminders";

    async fn execute(&mut self, ctx: &OrgRemindersContext) -> Result<Self::Response, Self::Error> {
        let events = ctx
            .repos
            .events
            .find_active(start_of_day(ctx.sys.now()))
            .await
            .map_err(|e| {
                error!("Unable to look up active events: {:?}", e);
                UseCaseError::StorageError
            })?;

        let mut notified = Vec::new();
        for event in events {
            let usecase = NotifyEventUseCase {
                event: event.clone(),
                force_immediate: false,
            };
            // A failing event is already logged and must not stop the others
            if let Ok(true) = execute(usecase, ctx).await {
                notified.push(event);
            }
        }
        info!("Reminders sent for {} event(s)", notified.len());

        Ok(notified)
    }
}
