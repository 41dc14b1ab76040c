use super::IEventRepo;
use crate::repos::shared::inmemory_repo::*;
use lms_reminders_domain::CalendarEvent;

pub struct InMemoryEventRepo {
    events: std::sync::Mutex<Vec<CalendarEvent>>,
}

impl InMemoryEventRepo {
    pub fn new() -> Self {
        Self {
            events: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IEventRepo for InMemoryEventRepo {
    async fn insert(&self, event: &CalendarEvent) -> anyhow::Result<()> {
        insert(event, &self.events);
        Ok(())
    }

    async fn find_upcoming(
        &self,
        now: i64,
        lookahead: i64,
        limit: usize,
    ) -> anyhow::Result<Vec<CalendarEvent>> {
        let mut events = find_by(&self.events, |e| {
            e.start_ts + e.duration >= now && e.start_ts <= now + lookahead
        });
        events.sort_by_key(|e| e.start_ts);
        events.truncate(limit);
        Ok(events)
    }
}
