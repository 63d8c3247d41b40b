use super::subscribers::NotifySubmitterOnEventUpdated;
use crate::{
    error::OrgRemindersError,
    shared::usecase::{execute, Subscriber, UseCase},
};
use actix_web::{web, HttpResponse};
use orgreminders_api_structs::update_event::*;
use orgreminders_domain::{parse_local_datetime, Event, ID};
use orgreminders_infra::OrgRemindersContext;

pub async fn update_event_controller(
    body: web::Json<RequestBody>,
    path_params: web::Path<PathParams>,
    ctx: web::Data<OrgRemindersContext>,
) -> Result<HttpResponse, OrgRemindersError> {
    let body = body.0;
    let usecase = UpdateEventUseCase {
        event_id: path_params.event_id.clone(),
        orgs: body.orgs,
        title: body.title,
        due: body.due,
        email_message: body.email_message,
        text_message: body.text_message,
        email_enabled: body.email_enabled,
        text_enabled: body.text_enabled,
        add_offsets: body.add_offsets.unwrap_or_default(),
        remove_offsets: body.remove_offsets.unwrap_or_default(),
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Ok().json(APIResponse::new(event)))
        .map_err(OrgRemindersError::from)
}

/// Offsets in `remove_offsets` are removed before the ones in
/// `add_offsets` are appended, so a token in both ends up once at the end.
#[derive(Debug, Default)]
pub struct UpdateEventUseCase {
    pub event_id: ID,
    pub orgs: Option<Vec<String>>,
    pub title: Option<String>,
    /// Local time of the primary organization
    pub due: Option<String>,
    pub email_message: Option<String>,
    pub text_message: Option<String>,
    pub email_enabled: Option<bool>,
    pub text_enabled: Option<bool>,
    pub add_offsets: Vec<String>,
    pub remove_offsets: Vec<String>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    NoOrganization,
    OrganizationNotFound(String),
    InvalidTimeZone(String),
    InvalidDue(String),
    StorageError,
}

impl From<UseCaseError> for OrgRemindersError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(event_id) => Self::NotFound(format!(
                "The event with id: {}, was not found.",
                event_id
            )),
            UseCaseError::NoOrganization => {
                Self::BadClientData("An event must belong to at least one organization".into())
            }
            UseCaseError::OrganizationNotFound(name) => Self::NotFound(format!(
                "The organization with name: {}, was not found.",
                name
            )),
            UseCaseError::InvalidTimeZone(e) => Self::BadClientData(e),
            UseCaseError::InvalidDue(due) => {
                Self::BadClientData(format!("Invalid due date: {}", due))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateEventUseCase {
    type Response = Event;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateEvent";

    async fn execute(&mut self, ctx: &OrgRemindersContext) -> Result<Self::Response, Self::Error> {
        let mut e = ctx
            .repos
            .events
            .find(&self.event_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.event_id.clone()))?;

        if let Some(orgs) = &self.orgs {
            if orgs.is_empty() {
                return Err(UseCaseError::NoOrganization);
            }
            for name in orgs {
                if ctx.repos.organizations.find_by_name(name).await.is_none() {
                    return Err(UseCaseError::OrganizationNotFound(name.clone()));
                }
            }
            e.orgs = orgs.clone();
        }

        if let Some(due) = &self.due {
            let primary_org = e.primary_org().ok_or(UseCaseError::NoOrganization)?;
            let org = ctx
                .repos
                .organizations
                .find_by_name(primary_org)
                .await
                .ok_or_else(|| UseCaseError::OrganizationNotFound(primary_org.to_string()))?;
            let tz = org
                .timezone()
                .map_err(|e| UseCaseError::InvalidTimeZone(e.to_string()))?;
            e.due = parse_local_datetime(due, &tz)
                .map_err(|_| UseCaseError::InvalidDue(due.clone()))?;
        }

        if let Some(title) = &self.title {
            e.title = title.clone();
        }
        if let Some(email_message) = &self.email_message {
            e.email_message = email_message.clone();
        }
        if let Some(text_message) = &self.text_message {
            e.text_message = text_message.clone();
        }
        if let Some(email_enabled) = self.email_enabled {
            e.email_enabled = email_enabled;
        }
        if let Some(text_enabled) = self.text_enabled {
            e.text_enabled = text_enabled;
        }
        for token in &self.remove_offsets {
            e.schedule.remove_offset(token);
        }
        for token in &self.add_offsets {
            e.schedule.add_offset(token);
        }
        e.saved = ctx.sys.now();

        ctx.repos
            .events
            .save(&e)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(e)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(NotifySubmitterOnEventUpdated)]
    }
}
