use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::db::TodoStore;
use crate::handlers;

/// Build the application router with all routes and middleware.
pub fn build_router(store: TodoStore) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/items/{item_id}", get(handlers::read_item))
        .route("/items/type/{item_type}", get(handlers::read_item_type))
        .route("/todo/", get(handlers::list_todos))
        .route("/todo/new_todo", post(handlers::create_todo))
        .route("/todo/{item_id}/update", put(handlers::update_todo))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(store)
}
