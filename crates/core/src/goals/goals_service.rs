use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;

use crate::errors::{Result, ValidationError};
use crate::goals::goals_model::{Goal, GoalUpdate, NewGoal};
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::users::UserRepositoryTrait;

/// Service for managing goals. Checks goal ownership against the user repository.
pub struct GoalService {
    goal_repo: Arc<dyn GoalRepositoryTrait>,
    user_repo: Arc<dyn UserRepositoryTrait>,
}

impl GoalService {
    pub fn new(
        goal_repo: Arc<dyn GoalRepositoryTrait>,
        user_repo: Arc<dyn UserRepositoryTrait>,
    ) -> Self {
        GoalService {
            goal_repo,
            user_repo,
        }
    }

    fn ensure_user_exists(&self, user_id: &str) -> Result<()> {
        match self.user_repo.get_by_id(user_id)? {
            Some(_) => Ok(()),
            None => Err(ValidationError::UnknownUser(user_id.to_string()).into()),
        }
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    async fn get_goals(&self) -> Result<Vec<Goal>> {
        self.goal_repo.load_goals()
    }

    async fn get_goal(&self, goal_id: &str) -> Result<Option<Goal>> {
        self.goal_repo.get_by_id(goal_id)
    }

    async fn get_goals_for_user(&self, user_id: &str) -> Result<Vec<Goal>> {
        let goals = self.goal_repo.load_goals_for_user(user_id)?;
        debug!("Loaded {} goals for user {}", goals.len(), user_id);
        Ok(goals)
    }

    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        new_goal.validate()?;
        self.ensure_user_exists(&new_goal.user_id)?;
        let goal = self.goal_repo.insert_new_goal(new_goal).await?;
        info!("Created goal {} for user {}", goal.id, goal.user_id);
        Ok(goal)
    }

    async fn update_goal(&self, goal_id: &str, goal_update: GoalUpdate) -> Result<Option<Goal>> {
        goal_update.validate(goal_id)?;
        let Some(existing) = self.goal_repo.get_by_id(goal_id)? else {
            return Ok(None);
        };
        if existing.user_id != goal_update.user_id {
            self.ensure_user_exists(&goal_update.user_id)?;
        }

        match self
            .goal_repo
            .update_goal(goal_id.to_string(), goal_update)
            .await
        {
            // Deleted between the lookup and the write.
            Err(e) if e.is_not_found() => Ok(None),
            result => result.map(Some),
        }
    }

    async fn delete_goal(&self, goal_id: &str) -> Result<bool> {
        let deleted = self.goal_repo.delete_goal(goal_id.to_string()).await?;
        Ok(deleted > 0)
    }
}
