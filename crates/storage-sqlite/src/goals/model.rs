//! Database models for goals.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use commbank_core::goals::{Goal, GoalUpdate, NewGoal};

/// Database model for goals
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct GoalDB {
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

/// Columns written by an update; `id` and `created_at` never change.
///
/// `treat_none_as_null` lets an update clear `target_date` or `icon`.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
#[diesel(treat_none_as_null = true)]
pub struct GoalChangesetDB {
    pub user_id: String,
    pub name: String,
    pub target_amount: f64,
    pub balance: f64,
    pub target_date: Option<NaiveDate>,
    pub icon: Option<String>,
    pub updated_at: NaiveDateTime,
}

// Conversion to domain models
impl From<GoalDB> for Goal {
    fn from(db: GoalDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            name: db.name,
            target_amount: db.target_amount,
            balance: db.balance,
            target_date: db.target_date,
            icon: db.icon,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<NewGoal> for GoalDB {
    fn from(domain: NewGoal) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: domain.id.unwrap_or_default(),
            user_id: domain.user_id,
            name: domain.name.trim().to_string(),
            target_amount: domain.target_amount,
            balance: domain.balance,
            target_date: domain.target_date,
            icon: domain.icon,
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<GoalUpdate> for GoalChangesetDB {
    fn from(domain: GoalUpdate) -> Self {
        Self {
            user_id: domain.user_id,
            name: domain.name.trim().to_string(),
            target_amount: domain.target_amount,
            balance: domain.balance,
            target_date: domain.target_date,
            icon: domain.icon,
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}
