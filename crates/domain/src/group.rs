use crate::shared::entity::{Entity, ID};

/// A `Group` of users within a `Course`
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub id: ID,
    pub course_id: ID,
    pub name: String,
}

impl Group {
    pub fn new(course_id: ID, name: impl Into<String>) -> Self {
        Self {
            id: Default::default(),
            course_id,
            name: name.into(),
        }
    }
}

impl Entity for Group {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// The members of a `Group` that have a given role in the group's course.
/// A user with several roles shows up once per role.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupRoleMembers {
    pub role: String,
    pub members: Vec<ID>,
}
