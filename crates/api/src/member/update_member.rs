use crate::{
    error::OrgRemindersError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use orgreminders_api_structs::update_member::*;
use orgreminders_domain::{Member, ID};
use orgreminders_infra::OrgRemindersContext;

pub async fn update_member_controller(
    body: web::Json<RequestBody>,
    path_params: web::Path<PathParams>,
    ctx: web::Data<OrgRemindersContext>,
) -> Result<HttpResponse, OrgRemindersError> {
    let body = body.0;
    let usecase = UpdateMemberUseCase {
        member_id: path_params.member_id.clone(),
        name: body.name,
        email: body.email,
        cell: body.cell,
        carrier: body.carrier,
        email_on: body.email_on,
        text_on: body.text_on,
        orgs: body.orgs,
        web_user: body.web_user,
    };

    execute(usecase, &ctx)
        .await
        .map(|member| HttpResponse::Ok().json(APIResponse::new(member)))
        .map_err(OrgRemindersError::from)
}

#[derive(Debug, Default)]
pub struct UpdateMemberUseCase {
    pub member_id: ID,
    pub name: Option<String>,
    pub email: Option<String>,
    pub cell: Option<String>,
    pub carrier: Option<String>,
    pub email_on: Option<bool>,
    pub text_on: Option<bool>,
    pub orgs: Option<Vec<String>>,
    pub web_user: Option<bool>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    EmailTaken(String),
    OrganizationNotFound(String),
    StorageError,
}

impl From<UseCaseError> for OrgRemindersError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(member_id) => Self::NotFound(format!(
                "The member with id: {}, was not found.",
                member_id
            )),
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
impl UseCase for UpdateMemberUseCase {
    type Response = Member;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateMember";

    async fn execute(&mut self, ctx: &OrgRemindersContext) -> Result<Self::Response, Self::Error> {
        let mut member = ctx
            .repos
            .members
            .find(&self.member_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.member_id.clone()))?;

        if let Some(email) = &self.email {
            if !email.is_empty()
                && *email != member.email
                && ctx.repos.members.find_by_email(email).await.is_some()
            {
                return Err(UseCaseError::EmailTaken(email.clone()));
            }
            member.email = email.clone();
        }
        if let Some(orgs) = &self.orgs {
            for name in orgs {
                if ctx.repos.organizations.find_by_name(name).await.is_none() {
                    return Err(UseCaseError::OrganizationNotFound(name.clone()));
                }
            }
            member.orgs = orgs.clone();
        }
        if self.cell.is_some() || self.carrier.is_some() {
            let cell = self.cell.clone().unwrap_or_else(|| member.cell.clone());
            let carrier = self.carrier.clone().unwrap_or_else(|| member.carrier.clone());
            member.set_cell(cell, carrier);
        }
        if let Some(name) = &self.name {
            member.name = name.clone();
        }
        if let Some(email_on) = self.email_on {
            member.email_on = email_on;
        }
        if let Some(text_on) = self.text_on {
            member.text_on = text_on;
        }
        if let Some(web_user) = self.web_user {
            member.web_user = web_user;
        }

        ctx.repos
            .members
            .save(&member)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(member)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_helpers::{setup_context, RecordingDispatcher};
    use chrono::Utc;
    use std::sync::Arc;

    #[actix_web::main]
    #[test]
    async fn changing_the_carrier_updates_the_text_address() {
        let ctx = setup_context(Utc::now(), Arc::new(RecordingDispatcher::default()));
        let mut member = Member {
            name: "Amy".into(),
            ..Default::default()
        };
        member.set_cell("5551234567", "att");
        ctx.repos.members.insert(&member).await.unwrap();

        let mut usecase = UpdateMemberUseCase {
            member_id: member.id.clone(),
            carrier: Some("sprint".into()),
            text_on: Some(true),
            ..Default::default()
        };
        let updated = usecase.execute(&ctx).await.unwrap();

        assert_eq!(updated.text_address, "5551234567@messaging.sprintpcs.com");
        assert!(updated.text_on);
        let stored = ctx.repos.members.find(&member.id).await.unwrap();
        assert_eq!(stored.text_address, updated.text_address);
    }

    #[actix_web::main]
    #[test]
    async fn rejects_email_of_another_member() {
        let ctx = setup_context(Utc::now(), Arc::new(RecordingDispatcher::default()));
        let amy = Member {
            name: "Amy".into(),
            email: "amy@example.com".into(),
            ..Default::default()
        };
        let bob = Member {
            name: "Bob".into(),
            email: "bob@example.com".into(),
            ..Default::default()
        };
        ctx.repos.members.insert(&amy).await.unwrap();
        ctx.repos.members.insert(&bob).await.unwrap();

        let mut usecase = UpdateMemberUseCase {
            member_id: bob.id.clone(),
            email: Some("amy@example.com".into()),
            ..Default::default()
        };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::EmailTaken("amy@example.com".into())
        );

        let mut usecase = UpdateMemberUseCase {
            member_id: bob.id.clone(),
            email: Some("bob@example.com".into()),
            ..Default::default()
        };
        assert!(usecase.execute(&ctx).await.is_ok());
    }
}
