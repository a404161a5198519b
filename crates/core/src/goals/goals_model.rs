//! Goals domain models.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Domain model representing a savings goal owned by a user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub target_amount: f64,
    pub balance: f64,
    pub target_date: Option<NaiveDate>,
    pub icon: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new goal
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    /// Ignored on insert; ids are assigned by the repository.
    pub id: Option<String>,
    pub user_id: String,
    pub name: String,
    pub target_amount: f64,
    #[serde(default)]
    pub balance: f64,
    pub target_date: Option<NaiveDate>,
    pub icon: Option<String>,
}

impl NewGoal {
    pub fn validate(&self) -> Result<()> {
        if self.user_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "userId".to_string(),
            )));
        }
        validate_fields(&self.name, self.target_amount, self.balance)
    }
}

/// Input model for updating an existing goal
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    /// Optional echo of the path id. A mismatch is rejected.
    pub id: Option<String>,
    pub user_id: String,
    pub name: String,
    pub target_amount: f64,
    pub balance: f64,
    pub target_date: Option<NaiveDate>,
    pub icon: Option<String>,
}

impl GoalUpdate {
    pub fn validate(&self, goal_id: &str) -> Result<()> {
        if let Some(body_id) = &self.id {
            if body_id != goal_id {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "Goal id '{}' does not match '{}'",
                    body_id, goal_id
                ))));
            }
        }
        if self.user_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "userId".to_string(),
            )));
        }
        validate_fields(&self.name, self.target_amount, self.balance)
    }
}

fn validate_fields(name: &str, target_amount: f64, balance: f64) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Goal name cannot be empty".to_string(),
        )));
    }
    if !target_amount.is_finite() || target_amount < 0.0 {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Target amount must be a non-negative number".to_string(),
        )));
    }
    if !balance.is_finite() || balance < 0.0 {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Balance must be a non-negative number".to_string(),
        )));
    }
    Ok(())
}
