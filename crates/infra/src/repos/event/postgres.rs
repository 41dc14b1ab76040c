use super::IEventRepo;
use lms_reminders_domain::{CalendarEvent, EventKind, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresEventRepo {
    pool: PgPool,
}

impl PostgresEventRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EventRaw {
    event_uid: Uuid,
    name: String,
    description: String,
    event_type: String,
    course_uid: Option<Uuid>,
    user_uid: Option<Uuid>,
    group_uid: Option<Uuid>,
    start_ts: i64,
    duration: i64,
}

impl Into<CalendarEvent> for EventRaw {
    fn into(self) -> CalendarEvent {
        let kind = EventKind::parse(
            &self.event_type,
            self.course_uid.map(ID::from),
            self.user_uid.map(ID::from),
            self.group_uid.map(ID::from),
        );
        CalendarEvent {
            id: self.event_uid.into(),
            name: self.name,
            description: self.description,
            start_ts: self.start_ts,
            duration: self.duration,
            kind,
        }
    }
}

#[async_trait::async_trait]
impl IEventRepo for PostgresEventRepo {
    async fn insert(&self, event: &CalendarEvent) -> anyhow::Result<()> {
        let (course_uid, user_uid, group_uid) = match &event.kind {
            EventKind::Course { course_id } => (Some(course_id.inner_ref()), None, None),
            EventKind::User { user_id } => (None, Some(user_id.inner_ref()), None),
            EventKind::Group { group_id } => (None, None, Some(group_id.inner_ref())),
            EventKind::Site | EventKind::Unknown { .. } => (None, None, None),
        };
        sqlx::query(
            r#"
            INSERT INTO events
            (event_uid, name, description, event_type, course_uid, user_uid, group_uid, start_ts, duration)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(event.id.inner_ref())
        .bind(&event.name)
        .bind(&event.description)
        .bind(event.kind.event_type())
        .bind(course_uid)
        .bind(user_uid)
        .bind(group_uid)
        .bind(event.start_ts)
        .bind(event.duration)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_upcoming(
        &self,
        now: i64,
        lookahead: i64,
        limit: usize,
    ) -> anyhow::Result<Vec<CalendarEvent>> {
        let events = sqlx::query_as::<_, EventRaw>(
            r#"
            SELECT * FROM events AS e
            WHERE e.start_ts + e.duration >= $1 AND
            e.start_ts <= $2
            ORDER BY e.start_ts
            LIMIT $3
            "#,
        )
        .bind(now)
        .bind(now + lookahead)
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(events.into_iter().map(|e| e.into()).collect())
    }
}
