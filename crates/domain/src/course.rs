use crate::shared::entity::{Entity, ID};

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: ID,
    pub short_name: String,
    pub full_name: String,
}

impl Course {
    pub fn new(short_name: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            id: Default::default(),
            short_name: short_name.into(),
            full_name: full_name.into(),
        }
    }
}

impl Entity for Course {
    fn id(&self) -> &ID {
        &self.id
    }
}
