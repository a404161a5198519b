//! User domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Domain model representing an account holder
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new user
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
}

impl NewUser {
    pub fn validate(&self) -> Result<()> {
        validate_fields(&self.name, &self.email)
    }
}

/// Input model for updating an existing user
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
}

impl UserUpdate {
    pub fn validate(&self, user_id: &str) -> Result<()> {
        if let Some(body_id) = &self.id {
            if body_id != user_id {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "User id '{}' does not match '{}'",
                    body_id, user_id
                ))));
            }
        }
        validate_fields(&self.name, &self.email)
    }
}

fn validate_fields(name: &str, email: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "User name cannot be empty".to_string(),
        )));
    }
    let email = email.trim();
    if email.is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            "email".to_string(),
        )));
    }
    if !email.contains('@') {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "'{}' is not a valid email address",
            email
        ))));
    }
    Ok(())
}
