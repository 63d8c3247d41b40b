use super::{notify_event::NotifyEventUseCase, subscribers::NotifySubmitterOnEventCreated};
use crate::{
    error::OrgRemindersError,
    shared::usecase::{execute, Subscriber, UseCase},
};
use actix_web::{web, HttpResponse};
use orgreminders_api_structs::create_event::*;
use orgreminders_domain::{parse_local_datetime, Event};
use orgreminders_infra::OrgRemindersContext;
use tracing::warn;

pub async fn create_event_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<OrgRemindersContext>,
) -> Result<HttpResponse, OrgRemindersError> {
    let body = body.0;
    let notify_on_create = body.notify_on_create.unwrap_or(false);
    let usecase = CreateEventUseCase {
        orgs: body.orgs,
        title: body.title,
        due: body.due,
        email_message: body.email_message.unwrap_or_default(),
        text_message: body.text_message.unwrap_or_default(),
        submitter: body.submitter.unwrap_or_default(),
        email_enabled: body.email_enabled.unwrap_or(false),
        text_enabled: body.text_enabled.unwrap_or(false),
        reminders: body.reminders.unwrap_or_default(),
    };

    let event = execute(usecase, &ctx)
        .await
        .map_err(OrgRemindersError::from)?;

    if notify_on_create {
        let usecase = NotifyEventUseCase {
            event: event.clone(),
            force_immediate: true,
        };
        if let Ok(false) = execute(usecase, &ctx).await {
            warn!("Event {} was created but no reminder went out", event.id);
        }
    }

    Ok(HttpResponse::Created().json(APIResponse::new(event)))
}

#[derive(Debug)]
pub struct CreateEventUseCase {
    pub orgs: Vec<String>,
    pub title: String,
    /// Local time of the first organization in `orgs`
    pub due: String,
    pub email_message: String,
    pub text_message: String,
    pub submitter: String,
    pub email_enabled: bool,
    pub text_enabled: bool,
    pub reminders: Vec<String>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NoOrganization,
    OrganizationNotFound(String),
    InvalidTimeZone(String),
    InvalidDue(String),
    StorageError,
}

impl From<UseCaseError> for OrgRemindersError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NoOrganization => {
                Self::BadClientData("An event must belong to at least one organization".into())
            }
            UseCaseError::OrganizationNotFound(name) => Self::NotFound(format!(
                "The organization with name: {}, was not found.",
                name
            )),
            UseCaseError::InvalidTimeZone(e) => Self::BadClientData(e),
            UseCaseError::InvalidDue(due) => Self::BadClientData(format!(
                "Invalid due date: {}. Expected e.g. `2024-03-10 09:00` or `03/10/2024 09:00AM`",
                due
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateEventUseCase {
    type Response = Event;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateEvent";

    async fn execute(&mut self, ctx: &OrgRemindersContext) -> Result<Self::Response, Self::Error> {
        let primary_org = match self.orgs.first() {
            Some(name) => name,
            None => return Err(UseCaseError::NoOrganization),
        };
        let mut tz = None;
        for name in &self.orgs {
            let org = ctx
                .repos
                .organizations
                .find_by_name(name)
                .await
                .ok_or_else(|| UseCaseError::OrganizationNotFound(name.clone()))?;
            if name == primary_org {
                tz = Some(
                    org.timezone()
                        .map_err(|e| UseCaseError::InvalidTimeZone(e.to_string()))?,
                );
            }
        }
        let tz = tz.ok_or_else(|| UseCaseError::OrganizationNotFound(primary_org.clone()))?;
        let due = parse_local_datetime(&self.due, &tz)
            .map_err(|_| UseCaseError::InvalidDue(self.due.clone()))?;

        let mut e = Event::new(due, ctx.sys.now());
        e.orgs = self.orgs.clone();
        e.title = self.title.clone();
        e.email_message = self.email_message.clone();
        e.text_message = self.text_message.clone();
        e.submitter = self.submitter.clone();
        e.email_enabled = self.email_enabled;
        e.text_enabled = self.text_enabled;
        for token in &self.reminders {
            e.schedule.add_offset(token);
        }

        ctx.repos
            .events
            .insert(&e)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(e)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(NotifySubmitterOnEventCreated)]
    }
}
