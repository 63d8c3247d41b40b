use crate::dtos::MemberDTO;
use orgreminders_domain::{Member, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponse {
    pub member: MemberDTO,
}

impl MemberResponse {
    pub fn new(member: Member) -> Self {
        Self {
            member: MemberDTO::new(member),
        }
    }
}

pub mod create_member {
    use super::*;

    #[derive(Serialize, Deserialize, Default)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        #[serde(default)]
        pub email: Option<String>,
        #[serde(default)]
        pub cell: Option<String>,
        /// One of `att`, `sprint`, `verizon` or `tmobile`
        #[serde(default)]
        pub carrier: Option<String>,
        #[serde(default)]
        pub email_on: Option<bool>,
        #[serde(default)]
        pub text_on: Option<bool>,
        #[serde(default)]
        pub orgs: Option<Vec<String>>,
        #[serde(default)]
        pub web_user: Option<bool>,
    }

    pub type APIResponse = MemberResponse;
}

pub mod get_member {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub member_id: ID,
    }

    pub type APIResponse = MemberResponse;
}

pub mod update_member {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub member_id: ID,
    }

    #[derive(Serialize, Deserialize, Default)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub name: Option<String>,
        #[serde(default)]
        pub email: Option<String>,
        #[serde(default)]
        pub cell: Option<String>,
        #[serde(default)]
        pub carrier: Option<String>,
        #[serde(default)]
        pub email_on: Option<bool>,
        #[serde(default)]
        pub text_on: Option<bool>,
        #[serde(default)]
        pub orgs: Option<Vec<String>>,
        #[serde(default)]
        pub web_user: Option<bool>,
    }

    pub type APIResponse = MemberResponse;
}
