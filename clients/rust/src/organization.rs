use crate::{APIResponse, BaseClient, ID};
use orgreminders_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct OrganizationClient {
    base: Arc<BaseClient>,
}

pub struct CreateOrganizationInput {
    pub name: String,
    pub time_zone: String,
    pub description: Option<String>,
    pub administrators: Vec<String>,
}

#[derive(Default)]
pub struct UpdateOrganizationInput {
    pub organization_id: ID,
    pub description: Option<String>,
    pub active: Option<bool>,
    pub time_zone: Option<String>,
    pub administrators: Option<Vec<String>>,
    pub expires: Option<i64>,
}

impl OrganizationClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(
        &self,
        input: CreateOrganizationInput,
    ) -> APIResponse<create_organization::APIResponse> {
        let body = create_organization::RequestBody {
            name: input.name,
            time_zone: input.time_zone,
            description: input.description,
            administrators: Some(input.administrators),
        };
        self.base
            .post(body, "organizations".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get(&self, organization_id: ID) -> APIResponse<get_organization::APIResponse> {
        self.base
            .get(format!("organizations/{}", organization_id), StatusCode::OK)
            .await
    }

    pub async fn get_by_administrator(
        &self,
        email: &str,
    ) -> APIResponse<get_organizations::APIResponse> {
        self.base
            .get(
                format!("organizations?administrator={}", email),
                StatusCode::OK,
            )
            .await
    }

    pub async fn update(
        &self,
        input: UpdateOrganizationInput,
    ) -> APIResponse<update_organization::APIResponse> {
        let organization_id = input.organization_id.clone();
        let body = update_organization::RequestBody {
            description: input.description,
            active: input.active,
            time_zone: input.time_zone,
            administrators: input.administrators,
            expires: input.expires,
        };
        self.base
            .put(
                body,
                format!("organizations/{}", organization_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn get_events(
        &self,
        organization_id: ID,
        active_only: bool,
    ) -> APIResponse<get_organization_events::APIResponse> {
        self.base
            .get(
                format!(
                    "organizations/{}/events?active={}",
                    organization_id, active_only
                ),
                StatusCode::OK,
            )
            .await
    }

    pub async fn get_members(
        &self,
        organization_id: ID,
    ) -> APIResponse<get_organization_members::APIResponse> {
        self.base
            .get(
                format!("organizations/{}/members", organization_id),
                StatusCode::OK,
            )
            .await
    }
}
