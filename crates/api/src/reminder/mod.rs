mod contents;
pub mod send_event_reminders;
