use super::IGroupRepo;
use lms_reminders_domain::{Group, GroupRoleMembers, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresGroupRepo {
    pool: PgPool,
}

impl PostgresGroupRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct GroupRaw {
    group_uid: Uuid,
    course_uid: Uuid,
    name: String,
}

#[derive(Debug, FromRow)]
struct GroupMemberRaw {
    user_uid: Uuid,
    role: String,
}

impl Into<Group> for GroupRaw {
    fn into(self) -> Group {
        Group {
            id: self.group_uid.into(),
            course_id: self.course_uid.into(),
            name: self.name,
        }
    }
}

#[async_trait::async_trait]
impl IGroupRepo for PostgresGroupRepo {
    async fn insert(&self, group: &Group) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO groups(group_uid, course_uid, name)
            VALUES($1, $2, $3)
            "#,
        )
        .bind(group.id.inner_ref())
        .bind(group.course_id.inner_ref())
        .bind(&group.name)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, group_id: &ID) -> Option<Group> {
        let res = sqlx::query_as::<_, GroupRaw>(
            r#"
            SELECT * FROM groups AS g
            WHERE g.group_uid = $1
            "#,
        )
        .bind(group_id.inner_ref())
        .fetch_optional(&self.pool)
        .await;

        match res {
            Ok(group) => group.map(|g| g.into()),
            Err(e) => {
                error!("Unable to find group {}. Err: {:?}", group_id, e);
                None
            }
        }
    }

    async fn add_member(&self, group_id: &ID, user_id: &ID, role: &str) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO group_members(group_uid, user_uid, role)
            VALUES($1, $2, $3)
            "#,
        )
        .bind(group_id.inner_ref())
        .bind(user_id.inner_ref())
        .bind(role)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_members_by_role(
        &self,
        group_id: &ID,
        course_id: &ID,
    ) -> anyhow::Result<Vec<GroupRoleMembers>> {
        let members = sqlx::query_as::<_, GroupMemberRaw>(
            r#"
            SELECT gm.user_uid, gm.role FROM group_members AS gm
            INNER JOIN groups AS g
                ON g.group_uid = gm.group_uid
            WHERE gm.group_uid = $1 AND
            g.course_uid = $2
            ORDER BY gm.role
            "#,
        )
        .bind(group_id.inner_ref())
        .bind(course_id.inner_ref())
        .fetch_all(&self.pool)
        .await?;

        let mut roles: Vec<GroupRoleMembers> = vec![];
        // Rows are ordered by role so each role forms a consecutive run
        for member in members {
            let same_role = roles
                .last()
                .map(|bucket| bucket.role == member.role)
                .unwrap_or(false);
            if same_role {
                if let Some(bucket) = roles.last_mut() {
                    bucket.members.push(member.user_uid.into());
                }
            } else {
                roles.push(GroupRoleMembers {
                    role: member.role,
                    members: vec![member.user_uid.into()],
                });
            }
        }
        Ok(roles)
    }
}
