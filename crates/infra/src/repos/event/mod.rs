mod inmemory;
mod postgres;

pub use inmemory::InMemoryEventRepo;
use lms_reminders_domain::CalendarEvent;
pub use postgres::PostgresEventRepo;

#[async_trait::async_trait]
pub trait IEventRepo: Send + Sync {
    async fn insert(&self, event: &CalendarEvent) -> anyhow::Result<()>;
    /// Finds the `CalendarEvent`s that have not ended at `now` and start within
    /// `lookahead` millis from `now`, ordered by start time. At most `limit`
    /// events are returned.
    ///
    /// Events that already started but have not ended count toward `limit`,
    /// so many long running events can push upcoming ones out of the result.
    async fn find_upcoming(
        &self,
        now: i64,
        lookahead: i64,
        limit: usize,
    ) -> anyhow::Result<Vec<CalendarEvent>>;
}
