use crate::{
    error::OrgRemindersError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use orgreminders_api_structs::get_organizations::*;
use orgreminders_domain::Organization;
use orgreminders_infra::OrgRemindersContext;

pub async fn get_organizations_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<OrgRemindersContext>,
) -> Result<HttpResponse, OrgRemindersError> {
    let usecase = GetOrganizationsUseCase {
        administrator: query_params.0.administrator,
    };

    execute(usecase, &ctx)
        .await
        .map(|orgs| HttpResponse::Ok().json(APIResponse::new(orgs)))
        .map_err(OrgRemindersError::from)
}

/// Organizations administrated by a user
#[derive(Debug)]
pub struct GetOrganizationsUseCase {
    pub administrator: String,
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
impl UseCase for GetOrganizationsUseCase {
    type Response = Vec<Organization>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetOrganizations";

    async fn execute(&mut self, ctx: &OrgRemindersContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .organizations
            .find_by_administrator(&self.administrator)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
