use super::IUserRepo;
use crate::repos::shared::inmemory_repo::*;
use lms_reminders_domain::{User, ID};

pub struct InMemoryUserRepo {
    users: std::sync::Mutex<Vec<User>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self {
            users: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IUserRepo for InMemoryUserRepo {
    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        insert(user, &self.users);
        Ok(())
    }

    async fn find(&self, user_id: &ID) -> Option<User> {
        find(user_id, &self.users)
    }

    async fn find_admin(&self) -> Option<User> {
        let mut admins = find_by(&self.users, |u| u.is_admin);
        if admins.is_empty() {
            return None;
        }
        Some(admins.remove(0))
    }
}
