use super::ICourseRepo;
use lms_reminders_domain::{Course, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresCourseRepo {
    pool: PgPool,
}

impl PostgresCourseRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CourseRaw {
    course_uid: Uuid,
    short_name: String,
    full_name: String,
}

impl Into<Course> for CourseRaw {
    fn into(self) -> Course {
        Course {
            id: self.course_uid.into(),
            short_name: self.short_name,
            full_name: self.full_name,
        }
    }
}

#[async_trait::async_trait]
impl ICourseRepo for PostgresCourseRepo {
    async fn insert(&self, course: &Course) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO courses(course_uid, short_name, full_name)
            VALUES($1, $2, $3)
            "#,
        )
        .bind(course.id.inner_ref())
        .bind(&course.short_name)
        .bind(&course.full_name)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, course_id: &ID) -> Option<Course> {
        let res = sqlx::query_as::<_, CourseRaw>(
            r#"
            SELECT * FROM courses AS c
            WHERE c.course_uid = $1
            "#,
        )
        .bind(course_id.inner_ref())
        .fetch_optional(&self.pool)
        .await;

        match res {
            Ok(course) => course.map(|c| c.into()),
            Err(e) => {
                error!("Unable to find course {}. Err: {:?}", course_id, e);
                None
            }
        }
    }
}
