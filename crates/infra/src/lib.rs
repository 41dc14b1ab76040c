mod config;
mod repos;
mod services;
mod system;

pub use config::Config;
pub use repos::{
    AuditLogQuery, IAuditLogRepo, ICourseRepo, IEventRepo, IGroupRepo, IUserRepo, Repos,
};
pub use services::*;
use std::sync::Arc;
pub use system::{ISys, StaticTimeSys};
use system::RealSys;

#[derive(Clone)]
pub struct RemindersContext {
    pub repos: Repos,
    pub services: Services,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

struct ContextParams {
    pub postgres_connection_string: String,
    pub webhook: WebhookSettings,
}

impl RemindersContext {
    async fn create(params: ContextParams) -> Self {
        let repos = Repos::create_postgres(&params.postgres_connection_string)
            .await
            .expect("Postgres credentials must be set and valid");
        Self {
            repos,
            services: Services {
                message_sender: Arc::new(WebhookMessageSender::new(params.webhook)),
            },
            config: Config::new(),
            sys: Arc::new(RealSys {}),
        }
    }

    fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            services: Services {
                message_sender: Arc::new(InMemoryMessageSender::new()),
            },
            config: Config::default(),
            sys: Arc::new(RealSys {}),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> RemindersContext {
    RemindersContext::create(ContextParams {
        postgres_connection_string: get_required_env_var("DATABASE_URL"),
        webhook: WebhookSettings {
            url: get_required_env_var("REMINDERS_WEBHOOK_URL"),
            key: std::env::var("REMINDERS_WEBHOOK_KEY").unwrap_or_default(),
        },
    })
    .await
}

/// Context backed by inmemory repositories and message sender, used for testing
pub fn setup_context_inmemory() -> RemindersContext {
    RemindersContext::create_inmemory()
}

fn get_required_env_var(name: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| panic!("{} env var to be present.", name))
}
