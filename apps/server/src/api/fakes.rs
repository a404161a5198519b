//! In-memory service doubles and seed data for handler tests.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use commbank_core::{
    goals::{Goal, GoalServiceTrait, GoalUpdate, NewGoal},
    users::{NewUser, User, UserServiceTrait, UserUpdate},
    Result,
};

fn seeded_at(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, day)
        .and_then(|d| d.and_hms_opt(8, 0, 0))
        .unwrap()
}

#[derive(Default)]
pub struct FakeCollections;

impl FakeCollections {
    pub fn new() -> Self {
        FakeCollections
    }

    pub fn get_users(&self) -> Vec<User> {
        vec![
            User {
                id: "507f1f77bcf86cd799439011".to_string(),
                name: "Tag".to_string(),
                email: "tag@example.com".to_string(),
                created_at: seeded_at(1),
                updated_at: seeded_at(1),
            },
            User {
                id: "507f1f77bcf86cd799439021".to_string(),
                name: "Alex".to_string(),
                email: "alex@example.com".to_string(),
                created_at: seeded_at(2),
                updated_at: seeded_at(2),
            },
        ]
    }

    pub fn get_goals(&self) -> Vec<Goal> {
        vec![
            Self::goal("507f1f77bcf86cd799439012", "507f1f77bcf86cd799439011", "Emergency fund"),
            Self::goal("507f1f77bcf86cd799439013", "507f1f77bcf86cd799439011", "New laptop"),
            Self::goal("507f1f77bcf86cd799439014", "507f1f77bcf86cd799439021", "House deposit"),
        ]
    }

    pub fn goal(id: &str, user_id: &str, name: &str) -> Goal {
        Goal {
            id: id.to_string(),
            user_id: user_id.to_string(),
            name: name.to_string(),
            target_amount: 5000.0,
            balance: 1250.0,
            target_date: NaiveDate::from_ymd_opt(2025, 12, 31),
            icon: Some("💰".to_string()),
            created_at: seeded_at(3),
            updated_at: seeded_at(3),
        }
    }
}

pub struct FakeGoalsService {
    goals: RwLock<Vec<Goal>>,
}

impl FakeGoalsService {
    pub fn new(goals: Vec<Goal>) -> Self {
        Self {
            goals: RwLock::new(goals),
        }
    }
}

#[async_trait]
impl GoalServiceTrait for FakeGoalsService {
    async fn get_goals(&self) -> Result<Vec<Goal>> {
        Ok(self.goals.read().unwrap().clone())
    }

    async fn get_goal(&self, goal_id: &str) -> Result<Option<Goal>> {
        Ok(self
            .goals
            .read()
            .unwrap()
            .iter()
            .find(|g| g.id == goal_id)
            .cloned())
    }

    async fn get_goals_for_user(&self, user_id: &str) -> Result<Vec<Goal>> {
        Ok(self
            .goals
            .read()
            .unwrap()
            .iter()
            .filter(|g| g.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        let mut goals = self.goals.write().unwrap();
        let goal = Goal {
            id: format!("fake-goal-{}", goals.len() + 1),
            user_id: new_goal.user_id,
            name: new_goal.name,
            target_amount: new_goal.target_amount,
            balance: new_goal.balance,
            target_date: new_goal.target_date,
            icon: new_goal.icon,
            created_at: seeded_at(4),
            updated_at: seeded_at(4),
        };
        goals.push(goal.clone());
        Ok(goal)
    }

    async fn update_goal(&self, goal_id: &str, goal_update: GoalUpdate) -> Result<Option<Goal>> {
        let mut goals = self.goals.write().unwrap();
        let Some(goal) = goals.iter_mut().find(|g| g.id == goal_id) else {
            return Ok(None);
        };
        goal.user_id = goal_update.user_id;
        goal.name = goal_update.name;
        goal.target_amount = goal_update.target_amount;
        goal.balance = goal_update.balance;
        goal.target_date = goal_update.target_date;
        goal.icon = goal_update.icon;
        Ok(Some(goal.clone()))
    }

    async fn delete_goal(&self, goal_id: &str) -> Result<bool> {
        let mut goals = self.goals.write().unwrap();
        let before = goals.len();
        goals.retain(|g| g.id != goal_id);
        Ok(goals.len() < before)
    }
}

pub struct FakeUsersService {
    users: RwLock<Vec<User>>,
}

impl FakeUsersService {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }
}

#[async_trait]
impl UserServiceTrait for FakeUsersService {
    async fn get_users(&self) -> Result<Vec<User>> {
        Ok(self.users.read().unwrap().clone())
    }

    async fn get_user(&self, user_id: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .read()
            .unwrap()
            .iter()
            .find(|u| u.id == user_id)
            .cloned())
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User> {
        let mut users = self.users.write().unwrap();
        let user = User {
            id: format!("fake-user-{}", users.len() + 1),
            name: new_user.name,
            email: new_user.email,
            created_at: seeded_at(5),
            updated_at: seeded_at(5),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn update_user(&self, user_id: &str, user_update: UserUpdate) -> Result<Option<User>> {
        let mut users = self.users.write().unwrap();
        let Some(user) = users.iter_mut().find(|u| u.id == user_id) else {
            return Ok(None);
        };
        user.name = user_update.name;
        user.email = user_update.email;
        Ok(Some(user.clone()))
    }

    async fn delete_user(&self, user_id: &str) -> Result<bool> {
        let mut users = self.users.write().unwrap();
        let before = users.len();
        users.retain(|u| u.id != user_id);
        Ok(users.len() < before)
    }
}
