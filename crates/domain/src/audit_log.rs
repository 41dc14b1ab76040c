use crate::{
    reminder::ReminderWindow,
    shared::entity::{Entity, ID},
};

/// Log category (module) used for every entry written by the reminders job
pub const REMINDERS_LOG_CATEGORY: &str = "local_reminders";
/// Log action recorded once a reminder has been sent
pub const SENT_REMINDER_LOG_ACTION: &str = "sent reminder";

const EVENT_REFERENCE_PREFIX: &str = "event.php?id=";

/// An entry in the host platform audit log
#[derive(Debug, Clone, PartialEq)]
pub struct AuditLogEntry {
    pub id: ID,
    pub category: String,
    pub action: String,
    /// What the entry is about, e.g. `event.php?id=<event id>`
    pub reference: String,
    pub info: String,
    /// Timestamp in millis of when the entry was written
    pub time: i64,
}

impl Entity for AuditLogEntry {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// Identifies a reminder that has already been sent: one per event
/// and `ReminderWindow`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SentReminderKey {
    pub event_id: ID,
    pub window: ReminderWindow,
}

impl SentReminderKey {
    pub fn new(event_id: ID, window: ReminderWindow) -> Self {
        Self { event_id, window }
    }

    /// Reads the key back from a sent reminder log entry. Entries written by
    /// something else than the reminders job give `None`.
    pub fn from_entry(entry: &AuditLogEntry) -> Option<Self> {
        let event_id = entry
            .reference
            .strip_prefix(EVENT_REFERENCE_PREFIX)?
            .parse::<ID>()
            .ok()?;
        let days = entry.info.trim().parse::<u32>().ok()?;
        let window = ReminderWindow::from_days(days)?;
        Some(Self { event_id, window })
    }

    pub fn to_entry(&self, time: i64) -> AuditLogEntry {
        AuditLogEntry {
            id: Default::default(),
            category: REMINDERS_LOG_CATEGORY.into(),
            action: SENT_REMINDER_LOG_ACTION.into(),
            reference: format!("{}{}", EVENT_REFERENCE_PREFIX, self.event_id),
            info: self.window.days().to_string(),
            time,
        }
    }
}
