use super::IMemberRepo;
use crate::repos::shared::inmemory_repo::*;
use orgreminders_domain::{Member, ID};

pub struct InMemoryMemberRepo {
    members: std::sync::Mutex<Vec<Member>>,
}

impl InMemoryMemberRepo {
    pub fn new() -> Self {
        Self {
            members: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IMemberRepo for InMemoryMemberRepo {
    async fn insert(&self, member: &Member) -> anyhow::Result<()> {
        insert(member, &self.members);
        Ok(())
    }

    async fn save(&self, member: &Member) -> anyhow::Result<()> {
        save(member, &self.members);
        Ok(())
    }

    async fn find(&self, member_id: &ID) -> Option<Member> {
        find(member_id, &self.members)
    }

    async fn find_by_email(&self, email: &str) -> Option<Member> {
        find_by(&self.members, |m| m.email == email).pop()
    }

    async fn find_by_org(&self, org_name: &str) -> anyhow::Result<Vec<Member>> {
        let mut res = find_by(&self.members, |m| m.belongs_to(org_name));
        res.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(res)
    }
}
