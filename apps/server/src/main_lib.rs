use std::sync::Arc;

use crate::config::Config;
use commbank_core::{
    goals::{GoalService, GoalServiceTrait},
    users::{UserService, UserServiceTrait},
};
use commbank_storage_sqlite::{
    db::{self, write_actor},
    goals::GoalRepository,
    users::UserRepository,
    DbPool,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Shared handles for request handlers. Services are trait objects so tests
/// can swap in fakes.
pub struct AppState {
    pub goal_service: Arc<dyn GoalServiceTrait + Send + Sync>,
    pub user_service: Arc<dyn UserServiceTrait + Send + Sync>,
    /// Present when backed by SQLite; the readiness probe pings it.
    pub db_pool: Option<Arc<DbPool>>,
}

impl AppState {
    pub fn new(
        goal_service: Arc<dyn GoalServiceTrait + Send + Sync>,
        user_service: Arc<dyn UserServiceTrait + Send + Sync>,
    ) -> Self {
        Self {
            goal_service,
            user_service,
            db_pool: None,
        }
    }

    pub fn with_db_pool(mut self, pool: Arc<DbPool>) -> Self {
        self.db_pool = Some(pool);
        self
    }
}

pub fn init_tracing() {
    let log_format = std::env::var("CB_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let user_repository = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let goal_repository = Arc::new(GoalRepository::new(pool.clone(), writer));

    let user_service = Arc::new(UserService::new(user_repository.clone()));
    let goal_service = Arc::new(GoalService::new(goal_repository, user_repository));

    Ok(Arc::new(
        AppState::new(goal_service, user_service).with_db_pool(pool),
    ))
}
