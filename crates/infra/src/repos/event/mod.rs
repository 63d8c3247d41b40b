mod inmemory;
mod postgres;

use chrono::{DateTime, Utc};
pub use inmemory::InMemoryEventRepo;
use orgreminders_domain::{Event, ID};
pub use postgres::PostgresEventRepo;

#[async_trait::async_trait]
pub trait IEventRepo: Send + Sync {
    async fn insert(&self, e: &Event) -> anyhow::Result<()>;
    async fn save(&self, e: &Event) -> anyhow::Result<()>;
    async fn find(&self, event_id: &ID) -> Option<Event>;
    async fn find_all(&self) -> anyhow::Result<Vec<Event>>;
    /// Events due at or after `since`, earliest first
    async fn find_active(&self, since: DateTime<Utc>) -> anyhow::Result<Vec<Event>>;
    async fn find_by_org(
        &self,
        org_name: &str,
        since: Option<DateTime<Utc>>,
    ) -> anyhow::Result<Vec<Event>>;
}
