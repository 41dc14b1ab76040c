use super::IUserRepo;
use chrono_tz::Tz;
use lms_reminders_domain::{User, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::{error, warn};

pub struct PostgresUserRepo {
    pool: PgPool,
}

impl PostgresUserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRaw {
    user_uid: Uuid,
    username: String,
    full_name: String,
    email: String,
    timezone: String,
    is_admin: bool,
}

impl Into<User> for UserRaw {
    fn into(self) -> User {
        let timezone = self.timezone.parse::<Tz>().unwrap_or_else(|_| {
            warn!(
                "User {} has an invalid timezone: {}, using UTC instead",
                self.user_uid, self.timezone
            );
            Tz::UTC
        });
        User {
            id: self.user_uid.into(),
            username: self.username,
            full_name: self.full_name,
            email: self.email,
            timezone,
            is_admin: self.is_admin,
        }
    }
}

#[async_trait::async_trait]
impl IUserRepo for PostgresUserRepo {
    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users(user_uid, username, full_name, email, timezone, is_admin)
            VALUES($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(user.id.inner_ref())
        .bind(&user.username)
        .bind(&user.full_name)
        .bind(&user.email)
        .bind(user.timezone.name())
        .bind(user.is_admin)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, user_id: &ID) -> Option<User> {
        let res = sqlx::query_as::<_, UserRaw>(
            r#"
            SELECT * FROM users AS u
            WHERE u.user_uid = $1
            "#,
        )
        .bind(user_id.inner_ref())
        .fetch_optional(&self.pool)
        .await;

        match res {
            Ok(user) => user.map(|u| u.into()),
            Err(e) => {
                error!("Unable to find user {}. Err: {:?}", user_id, e);
                None
            }
        }
    }

    async fn find_admin(&self) -> Option<User> {
        let res = sqlx::query_as::<_, UserRaw>(
            r#"
            SELECT * FROM users AS u
            WHERE u.is_admin
            ORDER BY u.username
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await;

        match res {
            Ok(user) => user.map(|u| u.into()),
            Err(e) => {
                error!("Unable to find the site administrator. Err: {:?}", e);
                None
            }
        }
    }
}
