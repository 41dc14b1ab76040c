mod inmemory;
mod postgres;

pub use inmemory::InMemoryAuditLogRepo;
use lms_reminders_domain::AuditLogEntry;
pub use postgres::PostgresAuditLogRepo;

/// Filter for looking up entries in the audit log
#[derive(Debug, Clone)]
pub struct AuditLogQuery {
    pub category: String,
    pub action: String,
    /// Only entries written at or after this timestamp in millis
    pub since: i64,
}

#[async_trait::async_trait]
pub trait IAuditLogRepo: Send + Sync {
    async fn insert(&self, entry: &AuditLogEntry) -> anyhow::Result<()>;
    async fn find(&self, query: &AuditLogQuery) -> anyhow::Result<Vec<AuditLogEntry>>;
}
