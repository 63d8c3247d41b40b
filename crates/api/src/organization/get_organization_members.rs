use crate::{
    error::OrgRemindersError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use orgreminders_api_structs::get_organization_members::*;
use orgreminders_domain::{Member, ID};
use orgreminders_infra::OrgRemindersContext;

pub async fn get_organization_members_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<OrgRemindersContext>,
) -> Result<HttpResponse, OrgRemindersError> {
    let usecase = GetOrganizationMembersUseCase {
        organization_id: path_params.organization_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|members| HttpResponse::Ok().json(APIResponse::new(members)))
        .map_err(OrgRemindersError::from)
}

#[derive(Debug)]
pub struct GetOrganizationMembersUseCase {
    pub organization_id: ID,
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
impl UseCase for GetOrganizationMembersUseCase {
    type Response = Vec<Member>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetOrganizationMembers";

    async fn execute(&mut self, ctx: &OrgRemindersContext) -> Result<Self::Response, Self::Error> {
        let org = ctx
            .repos
            .organizations
            .find(&self.organization_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.organization_id.clone()))?;

        ctx.repos
            .members
            .find_by_org(&org.name)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
