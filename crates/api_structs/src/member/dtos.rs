use orgreminders_domain::{Member, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MemberDTO {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub cell: String,
    pub carrier: String,
    pub text_address: String,
    pub email_on: bool,
    pub text_on: bool,
    pub orgs: Vec<String>,
    pub web_user: bool,
}

impl MemberDTO {
    pub fn new(member: Member) -> Self {
        Self {
            id: member.id,
            name: member.name,
            email: member.email,
            cell: member.cell,
            carrier: member.carrier,
            text_address: member.text_address,
            email_on: member.email_on,
            text_on: member.text_on,
            orgs: member.orgs,
            web_user: member.web_user,
        }
    }
}
