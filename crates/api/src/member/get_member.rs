use crate::{
    error::OrgRemindersError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use orgreminders_api_structs::get_member::*;
use orgreminders_domain::{Member, ID};
use orgreminders_infra::OrgRemindersContext;

pub async fn get_member_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<OrgRemindersContext>,
) -> Result<HttpResponse, OrgRemindersError> {
    let usecase = GetMemberUseCase {
        member_id: path_params.member_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|member| HttpResponse::Ok().json(APIResponse::new(member)))
        .map_err(OrgRemindersError::from)
}

#[derive(Debug)]
pub struct GetMemberUseCase {
    pub member_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for OrgRemindersError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(member_id) => Self::NotFound(format!(
                "The member with id: {}, was not found.",
                member_id
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetMemberUseCase {
    type Response = Member;

    type Error = UseCaseError;

    const NAME: &'static str = "GetMember";

    async fn execute(&mut self, ctx: &OrgRemindersContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .members
            .find(&self.member_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.member_id.clone()))
    }
}
