//! API server entry point
//!
//! Binds the todo REST API to a TCP listener. The database path and port
//! come from the environment (`TODO_DB_PATH`, `TODO_PORT`).

use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db_path = std::env::var("TODO_DB_PATH").unwrap_or_else(|_| "todos.db".to_string());
    let port: u16 = std::env::var("TODO_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    tracing::info!(db_path, "using database");

    // Every route goes through the store, so a failed open is fatal.
    let state = AppState::new(&db_path)
        .await
        .expect("Failed to initialize application state");

    let app = api_server::app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("REST API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
