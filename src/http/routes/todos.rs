//! Todo endpoints
//!
//! Each handler performs one repository call against the shared pool and
//! maps repo errors through ApiError. Validation happens before any
//! storage access.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, patch};
use axum::{Json, Router};

use crate::db::repos::TodoRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{Page, PageParams, Todo, TodoCreate, TodoUpdate};

/// GET /todos - list todos ordered by ascending id
async fn list_todos(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> Result<Json<Vec<Todo>>, ApiError> {
    let page = Page::try_from(params)?;
    let todos = TodoRepo::new(&state.pool).list(page).await?;
    Ok(Json(todos))
}

/// POST /todos - create a todo
async fn create_todo(
    State(state): State<Arc<AppState>>,
    Json(input): Json<TodoCreate>,
) -> Result<Json<Todo>, ApiError> {
    let todo = TodoRepo::new(&state.pool).create(input).await?;
    Ok(Json(todo))
}

/// PATCH /todos/{id} - partially update a todo
async fn update_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(update): Json<TodoUpdate>,
) -> Result<Json<Todo>, ApiError> {
    let todo = TodoRepo::new(&state.pool).update(id, update).await?;
    Ok(Json(todo))
}

/// DELETE /todos/{id} - delete a todo
async fn delete_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    TodoRepo::new(&state.pool).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Todo routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", patch(update_todo).delete(delete_todo))
}
