use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use commbank_core::users::{NewUser, User, UserUpdate};

pub async fn get_users(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<User>>> {
    let users = state.user_service.get_users().await?;
    Ok(Json(users))
}

pub async fn get_user(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<User>> {
    state
        .user_service
        .get_user(&id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

pub async fn create_user(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewUser>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let Json(user) = payload?;
    let u = state.user_service.create_user(user).await?;
    tracing::info!(user_id = %u.id, "user created");
    Ok((StatusCode::CREATED, Json(u)))
}

pub async fn update_user(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    payload: Result<Json<UserUpdate>, JsonRejection>,
) -> ApiResult<Json<User>> {
    let Json(user) = payload?;
    let u = state
        .user_service
        .update_user(&id, user)
        .await?
        .ok_or(ApiError::NotFound)?;
    tracing::info!(user_id = %u.id, "user updated");
    Ok(Json(u))
}

pub async fn delete_user(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    if !state.user_service.delete_user(&id).await? {
        return Err(ApiError::NotFound);
    }
    tracing::info!(user_id = %id, "user deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(get_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}
