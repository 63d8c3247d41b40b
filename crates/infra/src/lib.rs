mod config;
mod repos;
mod services;
mod system;

pub use config::{Config, SmtpConfig};
pub use repos::{IEventRepo, IMemberRepo, IOrganizationRepo, Repos};
pub use services::*;
use std::sync::Arc;
pub use system::ISys;
use system::RealSys;
use tracing::info;

#[derive(Clone)]
pub struct OrgRemindersContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub dispatcher: Arc<dyn IMessageDispatcher>,
}

struct ContextParams {
    pub postgres_connection_string: Option<String>,
}

impl OrgRemindersContext {
    fn create_dispatcher(config: &Config) -> anyhow::Result<Arc<dyn IMessageDispatcher>> {
        match &config.smtp {
            Some(smtp) => Ok(Arc::new(SmtpDispatcher::new(smtp)?)),
            None => Ok(Arc::new(TracingDispatcher {})),
        }
    }

    async fn create(params: ContextParams) -> anyhow::Result<Self> {
        let repos = match params.postgres_connection_string {
            Some(connection_string) => Repos::create_postgres(&connection_string).await?,
            None => {
                info!("Did not find DATABASE_URL environment variable. Going to use inmemory storage.");
                Repos::create_inmemory()
            }
        };
        let config = Config::new();
        let dispatcher = Self::create_dispatcher(&config)?;
        Ok(Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
            dispatcher,
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
            dispatcher: Arc::new(TracingDispatcher {}),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> anyhow::Result<OrgRemindersContext> {
    OrgRemindersContext::create(ContextParams {
        postgres_connection_string: std::env::var("DATABASE_URL").ok(),
    })
    .await
}
