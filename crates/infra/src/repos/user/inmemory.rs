use super::IUserRepo;
use crate::repos::shared::inmemory_repo::*;
use event_notifier_domain::{User, ID};

pub struct InMemoryUserRepo {
    users: std::sync::Mutex<Vec<User>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self {
            users: std::sync::Mutex::new(vec![]),
        }
    }

    pub fn insert(&self, user: &User) {
        insert(user, &self.users);
    }
}

#[async_trait::async_trait]
impl IUserRepo for InMemoryUserRepo {
    async fn find(&self, user_id: &ID) -> Option<User> {
        find(user_id, &self.users)
    }
}
