mod audit_log;
mod course;
mod event;
mod group;
mod message;
mod reminder;
mod shared;
mod user;

pub use audit_log::{
    AuditLogEntry, SentReminderKey, REMINDERS_LOG_CATEGORY, SENT_REMINDER_LOG_ACTION,
};
pub use course::Course;
pub use event::{CalendarEvent, EventKind};
pub use group::{Group, GroupRoleMembers};
pub use message::{MessageFormat, Principal, Recipients, ReminderMessage};
pub use reminder::{ParseReminderDaysError, ReminderCategory, ReminderDays, ReminderWindow};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use user::User;
