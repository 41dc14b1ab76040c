use crate::{shared::entity::ID, user::User};
use std::fmt::Display;

/// The identity a `ReminderMessage` is sent from
#[derive(Debug, Clone, PartialEq)]
pub struct Principal {
    /// `None` for the no-reply principal which is not backed by a `User`
    pub user_id: Option<ID>,
    pub name: String,
    pub email: String,
}

impl Principal {
    pub fn noreply() -> Self {
        Self {
            user_id: None,
            name: "No-reply".into(),
            email: "noreply@localhost".into(),
        }
    }
}

impl From<&User> for Principal {
    fn from(user: &User) -> Self {
        Self {
            user_id: Some(user.id.clone()),
            name: user.full_name.clone(),
            email: user.email.clone(),
        }
    }
}

/// Who should receive a `ReminderMessage`.
#[derive(Debug, Clone, PartialEq)]
pub enum Recipients {
    /// Every user of the site, resolved by the message transport
    Broadcast,
    User(ID),
    /// Every participant of the course, resolved by the message transport
    Course(ID),
    /// An explicit list of users. It may contain the same user more than once.
    Members(Vec<ID>),
}

impl Display for Recipients {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Broadcast => write!(f, "all site users"),
            Self::User(id) => write!(f, "user {}", id),
            Self::Course(id) => write!(f, "participants of course {}", id),
            Self::Members(members) => write!(f, "{} group members", members.len()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MessageFormat {
    Plain,
    Html,
}

/// A notification about an upcoming `CalendarEvent`, ready to be handed
/// to the message transport.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderMessage {
    /// The component sending the message
    pub component: String,
    /// Message provider name, e.g. `reminders_course`
    pub name: String,
    pub user_from: Principal,
    pub recipients: Recipients,
    pub subject: String,
    pub full_message: String,
    pub full_message_format: MessageFormat,
    pub full_message_html: String,
    /// Marks the message as a notification rather than a personal message
    pub notification: bool,
}
