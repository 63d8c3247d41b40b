use crate::dtos::{EventDTO, MemberDTO, OrganizationDTO};
use orgreminders_domain::{Event, Member, Organization, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationResponse {
    pub organization: OrganizationDTO,
}

impl OrganizationResponse {
    pub fn new(org: Organization) -> Self {
        Self {
            organization: OrganizationDTO::new(org),
        }
    }
}

pub mod create_organization {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        /// IANA time zone name, e.g. `America/Chicago`
        pub time_zone: String,
        #[serde(default)]
        pub description: Option<String>,
        #[serde(default)]
        pub administrators: Option<Vec<String>>,
    }

    pub type APIResponse = OrganizationResponse;
}

pub mod get_organization {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub organization_id: ID,
    }

    pub type APIResponse = OrganizationResponse;
}

pub mod get_organizations {
    use super::*;

    #[derive(Serialize, Deserialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        /// E-mail of an administrator
        pub administrator: String,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub organizations: Vec<OrganizationDTO>,
    }

    impl APIResponse {
        pub fn new(orgs: Vec<Organization>) -> Self {
            Self {
                organizations: orgs.into_iter().map(OrganizationDTO::new).collect(),
            }
        }
    }
}

pub mod update_organization {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub organization_id: ID,
    }

    #[derive(Serialize, Deserialize, Default)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub description: Option<String>,
        #[serde(default)]
        pub active: Option<bool>,
        #[serde(default)]
        pub time_zone: Option<String>,
        #[serde(default)]
        pub administrators: Option<Vec<String>>,
        /// Millis since the unix epoch
        #[serde(default)]
        pub expires: Option<i64>,
    }

    pub type APIResponse = OrganizationResponse;
}

pub mod get_organization_events {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub organization_id: ID,
    }

    #[derive(Serialize, Deserialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        #[serde(default)]
        pub active: Option<bool>,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub events: Vec<EventDTO>,
    }

    impl APIResponse {
        pub fn new(events: Vec<Event>) -> Self {
            Self {
                events: events.into_iter().map(EventDTO::new).collect(),
            }
        }
    }
}

pub mod get_organization_members {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub organization_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub members: Vec<MemberDTO>,
    }

    impl APIResponse {
        pub fn new(members: Vec<Member>) -> Self {
            Self {
                members: members.into_iter().map(MemberDTO::new).collect(),
            }
        }
    }
}
