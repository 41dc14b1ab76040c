use super::{AuditLogQuery, IAuditLogRepo};
use lms_reminders_domain::AuditLogEntry;
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresAuditLogRepo {
    pool: PgPool,
}

impl PostgresAuditLogRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AuditLogEntryRaw {
    log_uid: Uuid,
    category: String,
    action: String,
    reference: String,
    info: String,
    time: i64,
}

impl Into<AuditLogEntry> for AuditLogEntryRaw {
    fn into(self) -> AuditLogEntry {
        AuditLogEntry {
            id: self.log_uid.into(),
            category: self.category,
            action: self.action,
            reference: self.reference,
            info: self.info,
            time: self.time,
        }
    }
}

#[async_trait::async_trait]
impl IAuditLogRepo for PostgresAuditLogRepo {
    async fn insert(&self, entry: &AuditLogEntry) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO audit_log
            (log_uid, category, action, reference, info, time)
            VALUES($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(entry.id.inner_ref())
        .bind(&entry.category)
        .bind(&entry.action)
        .bind(&entry.reference)
        .bind(&entry.info)
        .bind(entry.time)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, query: &AuditLogQuery) -> anyhow::Result<Vec<AuditLogEntry>> {
        let entries = sqlx::query_as::<_, AuditLogEntryRaw>(
            r#"
            SELECT * FROM audit_log AS l
            WHERE l.category = $1 AND
            l.action = $2 AND
            l.time >= $3
            "#,
        )
        .bind(&query.category)
        .bind(&query.action)
        .bind(query.since)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries.into_iter().map(|e| e.into()).collect())
    }
}
