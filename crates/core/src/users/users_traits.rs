use crate::errors::Result;
use crate::users::users_model::{NewUser, User, UserUpdate};
use async_trait::async_trait;

/// Trait for user repository operations
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    fn list(&self) -> Result<Vec<User>>;
    fn get_by_id(&self, user_id: &str) -> Result<Option<User>>;
    async fn create(&self, new_user: NewUser) -> Result<User>;
    async fn update(&self, user_id: String, user_update: UserUpdate) -> Result<User>;
    async fn delete(&self, user_id: String) -> Result<usize>;
}

/// Trait for user service operations
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn get_users(&self) -> Result<Vec<User>>;
    async fn get_user(&self, user_id: &str) -> Result<Option<User>>;
    async fn create_user(&self, new_user: NewUser) -> Result<User>;
    async fn update_user(&self, user_id: &str, user_update: UserUpdate) -> Result<Option<User>>;
    async fn delete_user(&self, user_id: &str) -> Result<bool>;
}
