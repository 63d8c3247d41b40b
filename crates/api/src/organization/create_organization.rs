use crate::{
    error::OrgRemindersError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use orgreminders_api_structs::create_organization::*;
use orgreminders_domain::{parse_timezone, Organization};
use orgreminders_infra::OrgRemindersContext;

pub async fn create_organization_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<OrgRemindersContext>,
) -> Result<HttpResponse, OrgRemindersError> {
    let body = body.0;
    let usecase = CreateOrganizationUseCase {
        name: body.name,
        time_zone: body.time_zone,
        description: body.description.unwrap_or_default(),
        administrators: body.administrators.unwrap_or_default(),
    };

    execute(usecase, &ctx)
        .await
        .map(|org| HttpResponse::Created().json(APIResponse::new(org)))
        .map_err(OrgRemindersError::from)
}

#[derive(Debug)]
pub struct CreateOrganizationUseCase {
    pub name: String,
    pub time_zone: String,
    pub description: String,
    pub administrators: Vec<String>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    EmptyName,
    NameTaken(String),
    InvalidTimeZone(String),
    StorageError,
}

impl From<UseCaseError> for OrgRemindersError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::EmptyName => {
                Self::BadClientData("The organization name can not be empty".into())
            }
            UseCaseError::NameTaken(name) => Self::Conflict(format!(
                "An organization with the name: {}, already exists.",
                name
            )),
            UseCaseError::InvalidTimeZone(e) => Self::BadClientData(e),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateOrganizationUseCase {
    type Response = Organization;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateOrganization";

    async fn execute(&mut self, ctx: &OrgRemindersContext) -> Result<Self::Response, Self::Error> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(UseCaseError::EmptyName);
        }
        parse_timezone(&self.time_zone).map_err(|e| UseCaseError::InvalidTimeZone(e.to_string()))?;
        if ctx.repos.organizations.find_by_name(name).await.is_some() {
            return Err(UseCaseError::NameTaken(name.to_string()));
        }

        let mut org = Organization::new(name, self.time_zone.clone(), ctx.sys.now());
        org.description = self.description.clone();
        org.administrators = self.administrators.clone();

        ctx.repos
            .organizations
            .insert(&org)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(org)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_helpers::{setup_context, RecordingDispatcher};
    use chrono::{prelude::*, Duration};
    use std::sync::Arc;

    fn usecase(name: &str, time_zone: &str) -> CreateOrganizationUseCase {
        CreateOrganizationUseCase {
            name: name.into(),
            time_zone: time_zone.into(),
            description: "Sings on sundays".into(),
            administrators: vec!["director@example.com".into()],
        }
    }

    #[actix_web::main]
    #[test]
    async fn creates_organization_expiring_in_a_week() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let ctx = setup_context(now, Arc::new(RecordingDispatcher::default()));

        let org = usecase(" Choir ", "America/Chicago")
            .execute(&ctx)
            .await
            .unwrap();

        assert_eq!(org.name, "Choir");
        assert!(org.active);
        assert_eq!(org.expires, now + Duration::weeks(1));
        assert!(ctx.repos.organizations.find_by_name("Choir").await.is_some());
    }

    #[actix_web::main]
    #[test]
    async fn rejects_duplicate_names_and_bad_input() {
        let ctx = setup_context(Utc::now(), Arc::new(RecordingDispatcher::default()));
        usecase("Choir", "UTC").execute(&ctx).await.unwrap();

        assert_eq!(
            usecase("Choir", "Europe/Oslo").execute(&ctx).await.unwrap_err(),
            UseCaseError::NameTaken("Choir".into())
        );
        assert_eq!(
            usecase("  ", "UTC").execute(&ctx).await.unwrap_err(),
            UseCaseError::EmptyName
        );
        assert!(matches!(
            usecase("Band", "Central").execute(&ctx).await,
            Err(UseCaseError::InvalidTimeZone(_))
        ));
    }
}
