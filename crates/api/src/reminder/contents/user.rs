use super::ReminderContent;
use lms_reminders_domain::{
    CalendarEvent, Principal, Recipients, ReminderCategory, ReminderMessage, ReminderWindow, User,
};

/// Personal events are sent to their owner only, with times in the owner's timezone
pub fn build(
    event: &CalendarEvent,
    window: ReminderWindow,
    user: &User,
    from: &Principal,
) -> ReminderMessage {
    ReminderContent {
        event,
        window,
        label: "Personal".into(),
        context: None,
        timezone: user.timezone,
    }
    .into_message(ReminderCategory::User, from, Recipients::User(user.id.clone()))
}
