mod inmemory;
mod postgres;

pub use inmemory::InMemoryCourseRepo;
use lms_reminders_domain::{Course, ID};
pub use postgres::PostgresCourseRepo;

#[async_trait::async_trait]
pub trait ICourseRepo: Send + Sync {
    async fn insert(&self, course: &Course) -> anyhow::Result<()>;
    async fn find(&self, course_id: &ID) -> Option<Course>;
}
