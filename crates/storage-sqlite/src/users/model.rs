//! Database models for users.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use commbank_core::users::{NewUser, User, UserUpdate};

/// Database model for users
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserDB {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct UserChangesetDB {
    pub name: String,
    pub email: String,
    pub updated_at: NaiveDateTime,
}

impl From<UserDB> for User {
    fn from(db: UserDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            email: db.email,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<NewUser> for UserDB {
    fn from(domain: NewUser) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: domain.id.unwrap_or_default(),
            name: domain.name.trim().to_string(),
            email: normalize_email(&domain.email),
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<UserUpdate> for UserChangesetDB {
    fn from(domain: UserUpdate) -> Self {
        Self {
            name: domain.name.trim().to_string(),
            email: normalize_email(&domain.email),
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}

/// Emails are stored trimmed and lowercased so the unique index is case-insensitive.
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
