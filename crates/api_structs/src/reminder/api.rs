use crate::dtos::ReminderMessageDTO;

pub mod send_reminder_message {
    use super::*;

    /// Header carrying the shared key so that the receiver can verify the sender
    pub const WEBHOOK_KEY_HEADER: &str = "lms-reminders-webhook-key";

    pub type RequestBody = ReminderMessageDTO;
}
