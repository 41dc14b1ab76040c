mod inmemory;
mod postgres;

pub use inmemory::InMemoryGroupRepo;
use lms_reminders_domain::{Group, GroupRoleMembers, ID};
pub use postgres::PostgresGroupRepo;

#[async_trait::async_trait]
pub trait IGroupRepo: Send + Sync {
    async fn insert(&self, group: &Group) -> anyhow::Result<()>;
    async fn find(&self, group_id: &ID) -> Option<Group>;
    /// Adds a user to the `Group` with the role the user has in the group's course.
    /// A user can be added once for each role.
    async fn add_member(&self, group_id: &ID, user_id: &ID, role: &str) -> anyhow::Result<()>;
    /// Lists the members of a `Group` bucketed by their role in the given course.
    /// Roles are ordered by name. A group that does not belong to the course has no members.
    async fn find_members_by_role(
        &self,
        group_id: &ID,
        course_id: &ID,
    ) -> anyhow::Result<Vec<GroupRoleMembers>>;
}
