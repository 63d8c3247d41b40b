mod event;
mod member;
mod organization;
mod shared;

pub use event::IEventRepo;
use event::{InMemoryEventRepo, PostgresEventRepo};
pub use member::IMemberRepo;
use member::{InMemoryMemberRepo, PostgresMemberRepo};
pub use organization::IOrganizationRepo;
use organization::{InMemoryOrganizationRepo, PostgresOrganizationRepo};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct Repos {
    pub events: Arc<dyn IEventRepo>,
    pub organizations: Arc<dyn IOrganizationRepo>,
    pub members: Arc<dyn IMemberRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");

        info!("DB EXECUTING MIGRATION ...");
        sqlx::migrate!().run(&pool).await?;
        info!("DB EXECUTING MIGRATION ... [done]");

        Ok(Self {
            events: Arc::new(PostgresEventRepo::new(pool.clone())),
            organizations: Arc::new(PostgresOrganizationRepo::new(pool.clone())),
            members: Arc::new(PostgresMemberRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            events: Arc::new(InMemoryEventRepo::new()),
            organizations: Arc::new(InMemoryOrganizationRepo::new()),
            members: Arc::new(InMemoryMemberRepo::new()),
        }
    }
}
