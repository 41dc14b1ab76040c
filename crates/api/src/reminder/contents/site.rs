use super::ReminderContent;
use chrono_tz::Tz;
use lms_reminders_domain::{
    CalendarEvent, Principal, Recipients, ReminderCategory, ReminderMessage, ReminderWindow,
};

/// Site events are broadcasted, the message transport decides who receives them
pub fn build(
    event: &CalendarEvent,
    window: ReminderWindow,
    from: &Principal,
    timezone: Tz,
) -> ReminderMessage {
    ReminderContent {
        event,
        window,
        label: "Site".into(),
        context: None,
        timezone,
    }
    .into_message(ReminderCategory::Site, from, Recipients::Broadcast)
}
