use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalUpdate, NewGoal};
use async_trait::async_trait;

/// Trait for goal repository operations
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    fn load_goals(&self) -> Result<Vec<Goal>>;
    fn get_by_id(&self, goal_id: &str) -> Result<Option<Goal>>;
    fn load_goals_for_user(&self, user_id: &str) -> Result<Vec<Goal>>;
    async fn insert_new_goal(&self, new_goal: NewGoal) -> Result<Goal>;
    async fn update_goal(&self, goal_id: String, goal_update: GoalUpdate) -> Result<Goal>;
    async fn delete_goal(&self, goal_id_to_delete: String) -> Result<usize>;
}

/// Trait for goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    async fn get_goals(&self) -> Result<Vec<Goal>>;
    async fn get_goal(&self, goal_id: &str) -> Result<Option<Goal>>;
    async fn get_goals_for_user(&self, user_id: &str) -> Result<Vec<Goal>>;
    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal>;
    async fn update_goal(&self, goal_id: &str, goal_update: GoalUpdate) -> Result<Option<Goal>>;
    async fn delete_goal(&self, goal_id: &str) -> Result<bool>;
}
