use super::{AuditLogQuery, IAuditLogRepo};
use crate::repos::shared::inmemory_repo::*;
use lms_reminders_domain::AuditLogEntry;

pub struct InMemoryAuditLogRepo {
    entries: std::sync::Mutex<Vec<AuditLogEntry>>,
}

impl InMemoryAuditLogRepo {
    pub fn new() -> Self {
        Self {
            entries: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IAuditLogRepo for InMemoryAuditLogRepo {
    async fn insert(&self, entry: &AuditLogEntry) -> anyhow::Result<()> {
        insert(entry, &self.entries);
        Ok(())
    }

    async fn find(&self, query: &AuditLogQuery) -> anyhow::Result<Vec<AuditLogEntry>> {
        Ok(find_by(&self.entries, |e| {
            e.category == query.category && e.action == query.action && e.time >= query.since
        }))
    }
}
