use crate::{
    error::OrgRemindersError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use orgreminders_api_structs::create_member::*;
use orgreminders_domain::Member;
use orgreminders_infra::OrgRemindersContext;

pub async fn create_member_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<OrgRemindersContext>,
) -> Result<HttpResponse, OrgRemindersError> {
    let body = body.0;
    let usecase = CreateMemberUseCase {
        name: body.name,
        email: body.email.unwrap_or_default(),
        cell: body.cell.unwrap_or_default(),
        carrier: body.carrier.unwrap_or_default(),
        email_on: body.email_on.unwrap_or(false),
        text_on: body.text_on.unwrap_or(false),
        orgs: body.orgs.unwrap_or_default(),
        web_user: body.web_user.unwrap_or(false),
    };

    execute(usecase, &ctx)
        .await
        .map(|member| HttpResponse::Created().json(APIResponse::new(member)))
        .map_err(OrgRemindersError::from)
}

#[derive(Debug)]
pub struct CreateMemberUseCase {
    pub name: String,
    pub email: String,
    pub cell: String,
    pub carrier: String,
    pub email_on: bool,
    pub text_on: bool,
    pub orgs: Vec<String>,
    pub web_user: bool,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    EmailTaken(String),
    OrganizationNotFound(String),
    StorageError,
}

impl From<UseCaseError> for OrgRemindersError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::EmailTaken(email) => Self::Conflict(format!(
                "A member with the email: {}, already exists.",
                email
            )),
            UseCaseError::OrganizationNotFound(name) => Self::NotFound(format!(
                "The organization with name: {}, was not found.",
                name
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateMemberUseCase {
    type Response = Member;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateMember";

    async fn execute(&mut self, ctx: &OrgRemindersContext) -> Result<Self::Response, Self::Error> {
        if !self.email.is_empty() && ctx.repos.members.find_by_email(&self.email).await.is_some() {
            return Err(UseCaseError::EmailTaken(self.email.clone()));
        }
        for name in &self.orgs {
            if ctx.repos.organizations.find_by_name(name).await.is_none() {
                return Err(UseCaseError::OrganizationNotFound(name.clone()));
            }
        }

        let mut member = Member {
            name: self.name.clone(),
            email: self.email.clone(),
            email_on: self.email_on,
            text_on: self.text_on,
            orgs: self.orgs.clone(),
            web_user: self.web_user,
            ..Default::default()
        };
        member.set_cell(self.cell.clone(), self.carrier.clone());

        ctx.repos
            .members
            .insert(&member)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(member)
    }
}
