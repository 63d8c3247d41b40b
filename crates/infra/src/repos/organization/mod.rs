mod inmemory;
mod postgres;

pub use inmemory::InMemoryOrganizationRepo;
use orgreminders_domain::{Organization, ID};
pub use postgres::PostgresOrganizationRepo;

#[async_trait::async_trait]
pub trait IOrganizationRepo: Send + Sync {
    async fn insert(&self, org: &Organization) -> anyhow::Result<()>;
    async fn save(&self, org: &Organization) -> anyhow::Result<()>;
    async fn find(&self, org_id: &ID) -> Option<Organization>;
    async fn find_by_name(&self, name: &str) -> Option<Organization>;
    async fn find_by_administrator(&self, email: &str) -> anyhow::Result<Vec<Organization>>;
}
