use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::db::TodoStore;
use crate::error::ApiError;
use crate::models::{ItemType, ItemTypeQuery, Todo, TodoRequest};

pub async fn list_todos(State(store): State<TodoStore>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = store.list_todos().await?;
    Ok(Json(todos))
}

pub async fn create_todo(
    State(store): State<TodoStore>,
    payload: Result<Json<TodoRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let Json(input) = payload?;
    let todo = store.create_todo(&input).await?;
    tracing::info!(id = todo.id, "Created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn update_todo(
    State(store): State<TodoStore>,
    Path(item_id): Path<i64>,
    payload: Result<Json<TodoRequest>, JsonRejection>,
) -> Result<Json<Todo>, ApiError> {
    let Json(input) = payload?;
    let todo = store.update_todo(item_id, &input).await?;
    tracing::info!(id = item_id, "Updated todo");
    Ok(Json(todo))
}

// Demo endpoints, unrelated to the todo table.

pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Hello World" }))
}

pub async fn read_item(Path(item_id): Path<u32>) -> Result<Json<Value>, ApiError> {
    if item_id > 10 {
        return Err(ApiError::NotFound);
    }
    Ok(Json(json!({ "item_id": item_id })))
}

pub async fn read_item_type(
    Path(item_type): Path<ItemType>,
    Query(params): Query<ItemTypeQuery>,
) -> Json<Value> {
    Json(json!({ "item_type": item_type, "q": params.q }))
}
