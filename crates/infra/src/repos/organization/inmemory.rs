use super::IOrganizationRepo;
use crate::repos::shared::inmemory_repo::*;
use orgreminders_domain::{Organization, ID};

pub struct InMemoryOrganizationRepo {
    organizations: std::sync::Mutex<Vec<Organization>>,
}

impl InMemoryOrganizationRepo {
    pub fn new() -> Self {
        Self {
            organizations: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IOrganizationRepo for InMemoryOrganizationRepo {
    async fn insert(&self, org: &Organization) -> anyhow::Result<()> {
        if !find_by(&self.organizations, |o| o.name == org.name).is_empty() {
            return Err(anyhow::Error::msg(format!(
                "Organization {} already exists",
                org.name
            )));
        }
        insert(org, &self.organizations);
        Ok(())
    }

    async fn save(&self, org: &Organization) -> anyhow::Result<()> {
        save(org, &self.organizations);
        Ok(())
    }

    async fn find(&self, org_id: &ID) -> Option<Organization> {
        find(org_id, &self.organizations)
    }

    async fn find_by_name(&self, name: &str) -> Option<Organization> {
        find_by(&self.organizations, |o| o.name == name).pop()
    }

    async fn find_by_administrator(&self, email: &str) -> anyhow::Result<Vec<Organization>> {
        let mut res = find_by(&self.organizations, |o| o.is_administrated_by(email));
        res.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(res)
    }
}
