use orgreminders_domain::{Organization, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationDTO {
    pub id: ID,
    pub name: String,
    pub description: String,
    pub active: bool,
    pub created: i64,
    pub saved: i64,
    pub expires: i64,
    pub time_zone: String,
    pub administrators: Vec<String>,
}

impl OrganizationDTO {
    pub fn new(org: Organization) -> Self {
        Self {
            id: org.id,
            name: org.name,
            description: org.description,
            active: org.active,
            created: org.created.timestamp_millis(),
            saved: org.saved.timestamp_millis(),
            expires: org.expires.timestamp_millis(),
            time_zone: org.time_zone,
            administrators: org.administrators,
        }
    }
}
