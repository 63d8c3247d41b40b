use crate::{
    error::OrgRemindersError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use orgreminders_api_structs::get_organization::*;
use orgreminders_domain::{Organization, ID};
use orgreminders_infra::OrgRemindersContext;

pub async fn get_organization_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<OrgRemindersContext>,
) -> Result<HttpResponse, OrgRemindersError> {
    let usecase = GetOrganizationUseCase {
        organization_id: path_params.organization_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|org| HttpResponse::Ok().json(APIResponse::new(org)))
        .map_err(OrgRemindersError::from)
}

#[derive(Debug)]
pub struct GetOrganizationUseCase {
    pub organization_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for OrgRemindersError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(org_id) => Self::NotFound(format!(
                "The organization with id: {}, was not found.",
                org_id
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetOrganizationUseCase {
    type Response = Organization;

    type Error = UseCaseError;

    const NAME: &'static str = "GetOrganization";

    async fn execute(&mut self, ctx: &OrgRemindersContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .organizations
            .find(&self.organization_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.organization_id.clone()))
    }
}
