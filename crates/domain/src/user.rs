use crate::shared::entity::{Entity, ID};
use chrono_tz::Tz;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: ID,
    pub username: String,
    pub full_name: String,
    pub email: String,
    /// Timezone used when presenting times to this `User`
    pub timezone: Tz,
    /// Site administrators are used as the sender of reminders
    pub is_admin: bool,
}

impl User {
    pub fn new(username: impl Into<String>) -> Self {
        let username = username.into();
        Self {
            id: Default::default(),
            full_name: username.clone(),
            email: format!("{}@localhost", username),
            username,
            timezone: Tz::UTC,
            is_admin: false,
        }
    }
}

impl Entity for User {
    fn id(&self) -> &ID {
        &self.id
    }
}
