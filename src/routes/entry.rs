use std::sync::Arc;

use axum::{Router, http::StatusCode, response::Response};
use tower_http::services::ServeDir;

use crate::{response::error_page, state::AppState};

use super::views;

pub const STATIC_PREFIX: &str = "/static";

pub fn router(state: Arc<AppState>) -> Router {
    let public_dir = state.config.general.public_dir.clone();
    Router::new()
        .merge(views::router(state))
        .nest_service(STATIC_PREFIX, ServeDir::new(public_dir))
        .fallback(not_found)
}

async fn not_found() -> Response {
    error_page(
        StatusCode::NOT_FOUND,
        "The page you are looking for does not exist.",
    )
}
