use crate::{
    error::OrgRemindersError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use chrono::{TimeZone, Utc};
use orgreminders_api_structs::update_organization::*;
use orgreminders_domain::{parse_timezone, Organization, ID};
use orgreminders_infra::OrgRemindersContext;

pub async fn update_organization_controller(
    body: web::Json<RequestBody>,
    path_params: web::Path<PathParams>,
    ctx: web::Data<OrgRemindersContext>,
) -> Result<HttpResponse, OrgRemindersError> {
    let body = body.0;
    let usecase = UpdateOrganizationUseCase {
        organization_id: path_params.organization_id.clone(),
        description: body.description,
        active: body.active,
        time_zone: body.time_zone,
        administrators: body.administrators,
        expires: body.expires,
    };

    execute(usecase, &ctx)
        .await
        .map(|org| HttpResponse::Ok().json(APIResponse::new(org)))
        .map_err(OrgRemindersError::from)
}

/// The name identifies the organization on events and members and can not
/// be changed.
#[derive(Debug, Default)]
pub struct UpdateOrganizationUseCase {
    pub organization_id: ID,
    pub description: Option<String>,
    pub active: Option<bool>,
    pub time_zone: Option<String>,
    pub administrators: Option<Vec<String>>,
    /// Millis since the unix epoch
    pub expires: Option<i64>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    InvalidTimeZone(String),
    InvalidExpiry(i64),
    StorageError,
}

impl From<UseCaseError> for OrgRemindersError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(org_id) => Self::NotFound(format!(
                "The organization with id: {}, was not found.",
                org_id
            )),
            UseCaseError::InvalidTimeZone(e) => Self::BadClientData(e),
            UseCaseError::InvalidExpiry(expires) => {
                Self::BadClientData(format!("Invalid expiry timestamp: {}", expires))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateOrganizationUseCase {
    type Response = Organization;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateOrganization";

    async fn execute(&mut self, ctx: &OrgRemindersContext) -> Result<Self::Response, Self::Error> {
        let mut org = ctx
            .repos
            .organizations
            .find(&self.organization_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.organization_id.clone()))?;

        if let Some(time_zone) = &self.time_zone {
            parse_timezone(time_zone).map_err(|e| UseCaseError::InvalidTimeZone(e.to_string()))?;
            org.time_zone = time_zone.clone();
        }
        if let Some(expires) = self.expires {
            org.expires = Utc
                .timestamp_millis_opt(expires)
                .single()
                .ok_or(UseCaseError::InvalidExpiry(expires))?;
        }
        if let Some(description) = &self.description {
            org.description = description.clone();
        }
        if let Some(active) = self.active {
            org.active = active;
        }
        if let Some(administrators) = &self.administrators {
            org.administrators = administrators.clone();
        }
        org.saved = ctx.sys.now();

        ctx.repos
            .organizations
            .save(&org)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(org)
    }
}
