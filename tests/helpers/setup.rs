use chrono::{TimeZone, Utc};
use lms_reminders_infra::{
    setup_context_inmemory, InMemoryMessageSender, RemindersContext, StaticTimeSys,
};
use std::sync::Arc;

pub struct TestApp {
    pub ctx: RemindersContext,
    pub sender: Arc<InMemoryMessageSender>,
    pub now: i64,
}

// Context frozen at Monday 22 February 2021, 09:30 UTC
pub fn spawn_app() -> TestApp {
    let now = Utc.ymd(2021, 2, 22).and_hms(9, 30, 0).timestamp_millis();
    let mut ctx = setup_context_inmemory();
    ctx.sys = Arc::new(StaticTimeSys(now));
    let sender = Arc::new(InMemoryMessageSender::new());
    ctx.services.message_sender = sender.clone();

    TestApp { ctx, sender, now }
}
