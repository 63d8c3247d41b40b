use crate::{
    error::OrgRemindersError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use orgreminders_api_structs::get_events::*;
use orgreminders_domain::{start_of_day, Event};
use orgreminders_infra::OrgRemindersContext;

pub async fn get_events_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<OrgRemindersContext>,
) -> Result<HttpResponse, OrgRemindersError> {
    let usecase = GetEventsUseCase {
        active_only: query_params.active.unwrap_or(false),
    };

    execute(usecase, &ctx)
        .await
        .map(|events| HttpResponse::Ok().json(APIResponse::new(events)))
        .map_err(OrgRemindersError::from)
}

#[derive(Debug)]
pub struct GetEventsUseCase {
    /// Only events due today or later
    pub active_only: bool,
}

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
impl UseCase for GetEventsUseCase {
    type Response = Vec<Event>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetEvents";

    async fn execute(&mut self, ctx: &OrgRemindersContext) -> Result<Self::Response, Self::Error> {
        let res = if self.active_only {
            ctx.repos
                .events
                .find_active(start_of_day(ctx.sys.now()))
                .await
        } else {
            ctx.repos.events.find_all().await
        };
        res.map_err(|_| UseCaseError::StorageError)
    }
}
