use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use log::debug;
use std::sync::Arc;

use commbank_core::users::{NewUser, User, UserRepositoryTrait, UserUpdate};
use commbank_core::Result;

use super::model::{UserChangesetDB, UserDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::users;
use crate::schema::users::dsl::*;

/// Repository for managing user data in the database
pub struct UserRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl UserRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    fn list(&self) -> Result<Vec<User>> {
        let mut conn = get_connection(&self.pool)?;
        let results = users
            .select(UserDB::as_select())
            .order((created_at.asc(), id.asc()))
            .load::<UserDB>(&mut conn)
            .into_core()?;
        Ok(results.into_iter().map(User::from).collect())
    }

    fn get_by_id(&self, user_id: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;
        let user = users
            .select(UserDB::as_select())
            .find(user_id)
            .first::<UserDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(user.map(User::from))
    }

    async fn create(&self, new_user: NewUser) -> Result<User> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<User> {
                let mut user_db: UserDB = new_user.into();
                user_db.id = uuid::Uuid::new_v4().to_string();

                diesel::insert_into(users::table)
                    .values(&user_db)
                    .execute(conn)
                    .into_core()?;

                Ok(user_db.into())
            })
            .await
    }

    async fn update(&self, user_id: String, user_update: UserUpdate) -> Result<User> {
        let changes: UserChangesetDB = user_update.into();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<User> {
                let updated = diesel::update(users.find(&user_id))
                    .set(&changes)
                    .returning(UserDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(updated.into())
            })
            .await
    }

    /// Deletes a user; the foreign key cascades to the user's goals.
    async fn delete(&self, user_id: String) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let deleted = diesel::delete(users.find(&user_id))
                    .execute(conn)
                    .into_core()?;
                debug!("Deleted {} user row(s) for {}", deleted, user_id);
                Ok(deleted)
            })
            .await
    }
}
