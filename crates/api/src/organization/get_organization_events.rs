use crate::{
    error::OrgRemindersError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use orgreminders_api_structs::get_organization_events::*;
use orgreminders_domain::{start_of_day, Event, ID};
use orgreminders_infra::OrgRemindersContext;

pub async fn get_organization_events_controller(
    path_params: web::Path<PathParams>,
    query_params: web::Query<QueryParams>,
    ctx: web::Data<OrgRemindersContext>,
) -> Result<HttpResponse, OrgRemindersError> {
    let usecase = GetOrganizationEventsUseCase {
        organization_id: path_params.organization_id.clone(),
        active_only: query_params.active.unwrap_or(false),
    };

    execute(usecase, &ctx)
        .await
        .map(|events| HttpResponse::Ok().json(APIResponse::new(events)))
        .map_err(OrgRemindersError::from)
}

#[derive(Debug)]
pub struct GetOrganizationEventsUseCase {
    pub organization_id: ID,
    pub active_only: bool,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for OrgRemindersError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(org_id) => Self::NotFound(format!(
                "The organization with id: {}, was not found.",
                org_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetOrganizationEventsUseCase {
    type Response = Vec<Event>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetOrganizationEvents";

    async fn execute(&mut self, ctx: &OrgRemindersContext) -> Result<Self::Response, Self::Error> {
        let org = ctx
            .repos
            .organizations
            .find(&self.organization_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.organization_id.clone()))?;

        let since = if self.active_only {
            Some(start_of_day(ctx.sys.now()))
        } else {
            None
        };
        ctx.repos
            .events
            .find_by_org(&org.name, since)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
