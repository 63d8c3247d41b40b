mod inmemory;
mod postgres;

pub use inmemory::InMemoryMemberRepo;
use orgreminders_domain::{Member, ID};
pub use postgres::PostgresMemberRepo;

#[async_trait::async_trait]
pub trait IMemberRepo: Send + Sync {
    async fn insert(&self, member: &Member) -> anyhow::Result<()>;
    async fn save(&self, member: &Member) -> anyhow::Result<()>;
    async fn find(&self, member_id: &ID) -> Option<Member>;
    async fn find_by_email(&self, email: &str) -> Option<Member>;
    /// Members of the organization ordered by name
    async fn find_by_org(&self, org_name: &str) -> anyhow::Result<Vec<Member>>;
}

#[cfg(test)]
mod tests {
    use crate::OrgRemindersContext;
    use orgreminders_domain::Member;

    fn member(name: &str, orgs: &[&str]) -> Member {
        Member {
            name: name.into(),
            email: format!("{}@example.com", name.to_lowercase()),
            orgs: orgs.iter().map(|o| o.to_string()).collect(),
            email_on: true,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn find_by_org_orders_by_name() {
        let ctx = OrgRemindersContext::create_inmemory();
        let zed = member("Zed", &["Choir"]);
        let amy = member("Amy", &["Choir", "Band"]);
        let bob = member("Bob", &["Band"]);
        for m in [&zed, &amy, &bob] {
            ctx.repos.members.insert(m).await.unwrap();
        }

        let choir = ctx.repos.members.find_by_org("Choir").await.unwrap();
        let names = choir.iter().map(|m| m.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Amy", "Zed"]);
        assert!(ctx.repos.members.find_by_org("Scouts").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_and_find_by_email() {
        let ctx = OrgRemindersContext::create_inmemory();
        let mut amy = member("Amy", &["Choir"]);
        ctx.repos.members.insert(&amy).await.unwrap();

        amy.set_cell("(555) 123-4567", "verizon");
        amy.text_on = true;
        ctx.repos.members.save(&amy).await.unwrap();

        let found = ctx
            .repos
            .members
            .find_by_email("amy@example.com")
            .await
            .unwrap();
        assert_eq!(found.id, amy.id);
        assert_eq!(found.text_address, "5551234567@vtext.com");
        assert!(ctx.repos.members.find(&amy.id).await.unwrap().text_on);
    }
}
