use crate::{
    reminder::ReminderCategory,
    shared::entity::{Entity, ID},
};

/// A `CalendarEvent` as it is stored by the host platform. This crate
/// only ever reads events, they are never created or mutated by the
/// reminders job.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub id: ID,
    pub name: String,
    pub description: String,
    /// Start of the event in millis
    pub start_ts: i64,
    /// Duration of the event in millis
    pub duration: i64,
    pub kind: EventKind,
}

/// Who a `CalendarEvent` belongs to. Each variant only carries the
/// id that is valid for that type of event.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    /// Site wide event visible to every user
    Site,
    User { user_id: ID },
    /// Course events, including activity due dates
    Course { course_id: ID },
    Group { group_id: ID },
    /// An event type the reminders job does not know how to handle
    Unknown { event_type: String },
}

impl EventKind {
    /// Creates the `EventKind` from the way the host stores events: an event type
    /// string plus optional owner ids. A known type that is missing its owner id
    /// is treated as unknown.
    pub fn parse(
        event_type: &str,
        course_id: Option<ID>,
        user_id: Option<ID>,
        group_id: Option<ID>,
    ) -> Self {
        match (event_type, course_id, user_id, group_id) {
            ("site", _, _, _) => Self::Site,
            ("user", _, Some(user_id), _) => Self::User { user_id },
            ("course", Some(course_id), _, _) | ("due", Some(course_id), _, _) => {
                Self::Course { course_id }
            }
            ("group", _, _, Some(group_id)) => Self::Group { group_id },
            (event_type, _, _, _) => Self::Unknown {
                event_type: event_type.to_string(),
            },
        }
    }

    pub fn event_type(&self) -> &str {
        match self {
            Self::Site => "site",
            Self::User { .. } => "user",
            Self::Course { .. } => "course",
            Self::Group { .. } => "group",
            Self::Unknown { event_type } => event_type,
        }
    }

    pub fn category(&self) -> Option<ReminderCategory> {
        match self {
            Self::Site => Some(ReminderCategory::Site),
            Self::User { .. } => Some(ReminderCategory::User),
            Self::Course { .. } => Some(ReminderCategory::Course),
            Self::Group { .. } => Some(ReminderCategory::Group),
            Self::Unknown { .. } => None,
        }
    }
}

impl CalendarEvent {
    pub fn new(name: impl Into<String>, start_ts: i64, kind: EventKind) -> Self {
        Self {
            id: Default::default(),
            name: name.into(),
            description: String::new(),
            start_ts,
            duration: 0,
            kind,
        }
    }
}

impl Entity for CalendarEvent {
    fn id(&self) -> &ID {
        &self.id
    }
}
