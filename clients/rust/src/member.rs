use crate::{APIResponse, BaseClient, ID};
use orgreminders_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct MemberClient {
    base: Arc<BaseClient>,
}

#[derive(Default)]
pub struct CreateMemberInput {
    pub name: String,
    pub email: Option<String>,
    pub cell: Option<String>,
    pub carrier: Option<String>,
    pub email_on: bool,
    pub text_on: bool,
    pub orgs: Vec<String>,
    pub web_user: bool,
}

#[derive(Default)]
pub struct UpdateMemberInput {
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

impl MemberClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(&self, input: CreateMemberInput) -> APIResponse<create_member::APIResponse> {
        let body = create_member::RequestBody {
            name: input.name,
            email: input.email,
            cell: input.cell,
            carrier: input.carrier,
            email_on: Some(input.email_on),
            text_on: Some(input.text_on),
            orgs: Some(input.orgs),
            web_user: Some(input.web_user),
        };
        self.base
            .post(body, "members".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get(&self, member_id: ID) -> APIResponse<get_member::APIResponse> {
        self.base
            .get(format!("members/{}", member_id), StatusCode::OK)
            .await
    }

    pub async fn update(&self, input: UpdateMemberInput) -> APIResponse<update_member::APIResponse> {
        let member_id = input.member_id.clone();
        let body = update_member::RequestBody {
            name: input.name,
            email: input.email,
            cell: input.cell,
            carrier: input.carrier,
            email_on: input.email_on,
            text_on: input.text_on,
            orgs: input.orgs,
            web_user: input.web_user,
        };
        self.base
            .put(body, format!("members/{}", member_id), StatusCode::OK)
            .await
    }
}
