use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::errors::Result;
use crate::users::users_model::{NewUser, User, UserUpdate};
use crate::users::users_traits::{UserRepositoryTrait, UserServiceTrait};

/// Service for managing users
pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn get_users(&self) -> Result<Vec<User>> {
        self.repository.list()
    }

    async fn get_user(&self, user_id: &str) -> Result<Option<User>> {
        self.repository.get_by_id(user_id)
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User> {
        new_user.validate()?;
        let user = self.repository.create(new_user).await?;
        info!("Created user {}", user.id);
        Ok(user)
    }

    async fn update_user(&self, user_id: &str, user_update: UserUpdate) -> Result<Option<User>> {
        user_update.validate(user_id)?;
        match self
            .repository
            .update(user_id.to_string(), user_update)
            .await
        {
            Err(e) if e.is_not_found() => Ok(None),
            result => result.map(Some),
        }
    }

    /// Deleting a user also removes the goals that reference it.
    async fn delete_user(&self, user_id: &str) -> Result<bool> {
        let deleted = self.repository.delete(user_id.to_string()).await?;
        if deleted > 0 {
            info!("Deleted user {}", user_id);
        }
        Ok(deleted > 0)
    }
}
