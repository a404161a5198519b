use super::*;
use crate::errors::{DatabaseError, Error, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::{Arc, RwLock};

#[derive(Default)]
struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

#[async_trait]
impl UserRepositoryTrait for InMemoryUserRepository {
    fn list(&self) -> Result<Vec<User>> {
        Ok(self.users.read().unwrap().clone())
    }

    fn get_by_id(&self, user_id: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .read()
            .unwrap()
            .iter()
            .find(|u| u.id == user_id)
            .cloned())
    }

    async fn create(&self, new_user: NewUser) -> Result<User> {
        let mut users = self.users.write().unwrap();
        if users.iter().any(|u| u.email == new_user.email) {
            return Err(DatabaseError::UniqueViolation(new_user.email).into());
        }
        let now = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let user = User {
            id: format!("user-{}", users.len() + 1),
            name: new_user.name,
            email: new_user.email,
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, user_id: String, user_update: UserUpdate) -> Result<User> {
        let mut users = self.users.write().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or_else(|| Error::Database(DatabaseError::NotFound(user_id.clone())))?;
        user.name = user_update.name;
        user.email = user_update.email;
        Ok(user.clone())
    }

    async fn delete(&self, user_id: String) -> Result<usize> {
        let mut users = self.users.write().unwrap();
        let before = users.len();
        users.retain(|u| u.id != user_id);
        Ok(before - users.len())
    }
}

fn service() -> UserService {
    UserService::new(Arc::new(InMemoryUserRepository::default()))
}

fn new_user(email: &str) -> NewUser {
    NewUser {
        id: None,
        name: "Tag Team".to_string(),
        email: email.to_string(),
    }
}

#[tokio::test]
async fn create_and_get_user() {
    let service = service();
    let created = service.create_user(new_user("tag@example.com")).await.unwrap();

    let fetched = service.get_user(&created.id).await.unwrap();
    assert_eq!(fetched, Some(created));
    assert!(service.get_user("missing").await.unwrap().is_none());
}

#[tokio::test]
async fn create_user_rejects_invalid_email() {
    let err = service()
        .create_user(new_user("not-an-email"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[tokio::test]
async fn duplicate_email_surfaces_unique_violation() {
    let service = service();
    service.create_user(new_user("tag@example.com")).await.unwrap();
    let err = service
        .create_user(new_user("tag@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Database(DatabaseError::UniqueViolation(_))
    ));
}

#[tokio::test]
async fn update_missing_user_returns_none() {
    let update = UserUpdate {
        id: None,
        name: "Nobody".to_string(),
        email: "nobody@example.com".to_string(),
    };
    assert!(service().update_user("missing", update).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_user_reports_removal() {
    let service = service();
    let created = service.create_user(new_user("tag@example.com")).await.unwrap();

    assert!(service.delete_user(&created.id).await.unwrap());
    assert!(!service.delete_user(&created.id).await.unwrap());
    assert!(service.get_users().await.unwrap().is_empty());
}
