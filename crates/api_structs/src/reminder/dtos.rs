use lms_reminders_domain::{MessageFormat, Principal, Recipients, ReminderMessage, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PrincipalDTO {
    pub user_id: Option<ID>,
    pub name: String,
    pub email: String,
}

impl PrincipalDTO {
    pub fn new(principal: Principal) -> Self {
        Self {
            user_id: principal.user_id,
            name: principal.name,
            email: principal.email,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RecipientsDTO {
    Broadcast,
    User { user_id: ID },
    Course { course_id: ID },
    Members { user_ids: Vec<ID> },
}

impl RecipientsDTO {
    pub fn new(recipients: Recipients) -> Self {
        match recipients {
            Recipients::Broadcast => Self::Broadcast,
            Recipients::User(user_id) => Self::User { user_id },
            Recipients::Course(course_id) => Self::Course { course_id },
            Recipients::Members(user_ids) => Self::Members { user_ids },
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum MessageFormatDTO {
    Plain,
    Html,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReminderMessageDTO {
    pub component: String,
    pub name: String,
    pub user_from: PrincipalDTO,
    pub recipients: RecipientsDTO,
    pub subject: String,
    pub full_message: String,
    pub full_message_format: MessageFormatDTO,
    pub full_message_html: String,
    pub notification: bool,
}

impl ReminderMessageDTO {
    pub fn new(message: ReminderMessage) -> Self {
        Self {
            component: message.component,
            name: message.name,
            user_from: PrincipalDTO::new(message.user_from),
            recipients: RecipientsDTO::new(message.recipients),
            subject: message.subject,
            full_message: message.full_message,
            full_message_format: match message.full_message_format {
                MessageFormat::Plain => MessageFormatDTO::Plain,
                MessageFormat::Html => MessageFormatDTO::Html,
            },
            full_message_html: message.full_message_html,
            notification: message.notification,
        }
    }
}
