use super::IGroupRepo;
use crate::repos::shared::inmemory_repo::*;
use lms_reminders_domain::{Group, GroupRoleMembers, ID};
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
struct GroupMember {
    group_id: ID,
    user_id: ID,
    role: String,
}

pub struct InMemoryGroupRepo {
    groups: std::sync::Mutex<Vec<Group>>,
    members: std::sync::Mutex<Vec<GroupMember>>,
}

impl InMemoryGroupRepo {
    pub fn new() -> Self {
        Self {
            groups: std::sync::Mutex::new(vec![]),
            members: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IGroupRepo for InMemoryGroupRepo {
    async fn insert(&self, group: &Group) -> anyhow::Result<()> {
        insert(group, &self.groups);
        Ok(())
    }

    async fn find(&self, group_id: &ID) -> Option<Group> {
        find(group_id, &self.groups)
    }

    async fn add_member(&self, group_id: &ID, user_id: &ID, role: &str) -> anyhow::Result<()> {
        let member = GroupMember {
            group_id: group_id.clone(),
            user_id: user_id.clone(),
            role: role.to_string(),
        };
        insert(&member, &self.members);
        Ok(())
    }

    async fn find_members_by_role(
        &self,
        group_id: &ID,
        course_id: &ID,
    ) -> anyhow::Result<Vec<GroupRoleMembers>> {
        match find(group_id, &self.groups) {
            Some(group) if group.course_id == *course_id => (),
            _ => return Ok(vec![]),
        };

        let mut roles: BTreeMap<String, Vec<ID>> = BTreeMap::new();
        for member in find_by(&self.members, |m| m.group_id == *group_id) {
            roles.entry(member.role).or_default().push(member.user_id);
        }
        Ok(roles
            .into_iter()
            .map(|(role, members)| GroupRoleMembers { role, members })
            .collect())
    }
}
