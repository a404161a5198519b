//! Goal endpoints. Each handler delegates to the injected goal service and
//! shapes the result; absence becomes a 404.

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
use commbank_core::goals::{Goal, GoalUpdate, NewGoal};

pub async fn get_goals(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Goal>>> {
    let goals = state.goal_service.get_goals().await?;
    Ok(Json(goals))
}

pub async fn get_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Goal>> {
    state
        .goal_service
        .get_goal(&id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// Goals owned by `user_id`. An unknown user simply has no goals.
pub async fn get_goals_for_user(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Goal>>> {
    let goals = state.goal_service.get_goals_for_user(&user_id).await?;
    Ok(Json(goals))
}

pub async fn create_goal(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewGoal>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Goal>)> {
    let Json(goal) = payload?;
    let g = state.goal_service.create_goal(goal).await?;
    tracing::info!(goal_id = %g.id, user_id = %g.user_id, "goal created");
    Ok((StatusCode::CREATED, Json(g)))
}

pub async fn update_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GoalUpdate>, JsonRejection>,
) -> ApiResult<Json<Goal>> {
    let Json(goal) = payload?;
    let g = state
        .goal_service
        .update_goal(&id, goal)
        .await?
        .ok_or(ApiError::NotFound)?;
    tracing::info!(goal_id = %g.id, "goal updated");
    Ok(Json(g))
}

pub async fn delete_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    if !state.goal_service.delete_goal(&id).await? {
        return Err(ApiError::NotFound);
    }
    tracing::info!(goal_id = %id, "goal deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/goals", get(get_goals).post(create_goal))
        .route(
            "/goals/{id}",
            get(get_goal).put(update_goal).delete(delete_goal),
        )
        .route("/goals/user/{user_id}", get(get_goals_for_user))
}
