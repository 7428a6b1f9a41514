use tracing_subscriber::EnvFilter;

use todo_backend::{build_router, TodoStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:todo_db.db".to_string());
    let store = TodoStore::connect(&database_url).await?;

    let port = std::env::var("PORT").unwrap_or_else(|_| "8000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Starting server");

    axum::serve(listener, build_router(store)).await?;

    Ok(())
}
