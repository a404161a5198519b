use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{extract::State, routing::get, Router};
use commbank_storage_sqlite::db;

pub async fn healthz() -> &'static str {
    "ok"
}

/// Ready once the database answers; always ready when no pool is attached.
pub async fn readyz(State(state): State<Arc<AppState>>) -> ApiResult<&'static str> {
    if let Some(pool) = state.db_pool.clone() {
        tokio::task::spawn_blocking(move || db::ping(&pool))
            .await
            .map_err(|e| ApiError::Internal(format!("Readiness check failed to run: {}", e)))??;
    }
    Ok("ok")
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
}
