mod audit_log;
mod course;
mod event;
mod group;
mod shared;
mod user;

pub use audit_log::{AuditLogQuery, IAuditLogRepo};
use audit_log::{InMemoryAuditLogRepo, PostgresAuditLogRepo};
pub use course::ICourseRepo;
use course::{InMemoryCourseRepo, PostgresCourseRepo};
pub use event::IEventRepo;
use event::{InMemoryEventRepo, PostgresEventRepo};
pub use group::IGroupRepo;
use group::{InMemoryGroupRepo, PostgresGroupRepo};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;
pub use user::IUserRepo;
use user::{InMemoryUserRepo, PostgresUserRepo};

/// Access to the data owned by the host platform
#[derive(Clone)]
pub struct Repos {
    pub events: Arc<dyn IEventRepo>,
    pub audit_log: Arc<dyn IAuditLogRepo>,
    pub users: Arc<dyn IUserRepo>,
    pub courses: Arc<dyn ICourseRepo>,
    pub groups: Arc<dyn IGroupRepo>,
}

impl Repos {
    /// Connects to the host database. Expects these tables to exist:
    /// `events`, `audit_log`, `users`, `courses`, `groups` and `group_members`.
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");

        Ok(Self {
            events: Arc::new(PostgresEventRepo::new(pool.clone())),
            audit_log: Arc::new(PostgresAuditLogRepo::new(pool.clone())),
            users: Arc::new(PostgresUserRepo::new(pool.clone())),
            courses: Arc::new(PostgresCourseRepo::new(pool.clone())),
            groups: Arc::new(PostgresGroupRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            events: Arc::new(InMemoryEventRepo::new()),
            audit_log: Arc::new(InMemoryAuditLogRepo::new()),
            users: Arc::new(InMemoryUserRepo::new()),
            courses: Arc::new(InMemoryCourseRepo::new()),
            groups: Arc::new(InMemoryGroupRepo::new()),
        }
    }
}
