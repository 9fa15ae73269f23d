use std::sync::Arc;

use axum::{Router, middleware};

use crate::{
    config::{AppConfig, EnvConfig},
    db::connection,
    middleware::{catch_panic_layer, html_error_middleware},
    routes::router,
    state::AppState,
};

/// State backed by a fresh in-memory sqlite database with the schema
/// already synced.
pub async fn sqlite_state() -> Arc<AppState> {
    let cfg = AppConfig::from_pairs([
        ("database.url", "sqlite::memory:"),
        ("database.max_connections", "1"),
        ("database.min_idle", "1"),
    ])
    .expect("test config should be valid");
    let db = connection::connect(&cfg.database)
        .await
        .expect("connect to in-memory sqlite");
    AppState::new(cfg, db)
}

/// The application router with the same layers `main` installs.
pub fn app(state: Arc<AppState>) -> Router {
    router(state)
        .layer(middleware::from_fn(html_error_middleware))
        .layer(catch_panic_layer())
}
