use commbank_core::goals::{Goal, GoalRepositoryTrait, GoalUpdate, NewGoal};
use commbank_core::Result;

use super::model::{GoalChangesetDB, GoalDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::goals;
use crate::schema::goals::dsl::*;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;
use uuid::Uuid;

pub struct GoalRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl GoalRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        GoalRepository { pool, writer }
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    fn load_goals(&self) -> Result<Vec<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        let goals_db = goals
            .select(GoalDB::as_select())
            .order((created_at.asc(), id.asc()))
            .load::<GoalDB>(&mut conn)
            .into_core()?;
        Ok(goals_db.into_iter().map(Goal::from).collect())
    }

    fn get_by_id(&self, goal_id: &str) -> Result<Option<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        let goal_db = goals
            .select(GoalDB::as_select())
            .find(goal_id)
            .first::<GoalDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(goal_db.map(Goal::from))
    }

    fn load_goals_for_user(&self, owner_id: &str) -> Result<Vec<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        let goals_db = goals
            .select(GoalDB::as_select())
            .filter(user_id.eq(owner_id))
            .order((created_at.asc(), id.asc()))
            .load::<GoalDB>(&mut conn)
            .into_core()?;
        Ok(goals_db.into_iter().map(Goal::from).collect())
    }

    async fn insert_new_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Goal> {
                let mut new_goal_db: GoalDB = new_goal.into();
                new_goal_db.id = Uuid::new_v4().to_string();

                let result_db = diesel::insert_into(goals::table)
                    .values(&new_goal_db)
                    .returning(GoalDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Goal::from(result_db))
            })
            .await
    }

    async fn update_goal(&self, goal_id: String, goal_update: GoalUpdate) -> Result<Goal> {
        let changes: GoalChangesetDB = goal_update.into();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Goal> {
                let result_db = diesel::update(goals.find(&goal_id))
                    .set(&changes)
                    .returning(GoalDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Goal::from(result_db))
            })
            .await
    }

    async fn delete_goal(&self, goal_id_to_delete: String) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(goals.find(goal_id_to_delete))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}
