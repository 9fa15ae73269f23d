use std::sync::Arc;

use askama::Template;
use axum::{Router, extract::State, http::StatusCode, response::Response, routing::get};

use crate::{
    response::{Notice, render_with_status},
    services::{ServiceContext, listings::RecentListings},
    state::AppState,
};

use super::RECENT_LIMIT;

#[derive(Template)]
#[template(path = "pages/home.html")]
struct HomeTemplate {
    recent: RecentListings,
    notice: Option<Notice>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new().route("/", get(index)).with_state(state)
}

async fn index(State(state): State<Arc<AppState>>) -> Response {
    home_page(&state, StatusCode::OK, None).await
}

/// The home page, optionally carrying the outcome of a submission.
/// A failed recent-listings lookup still renders the page.
pub(crate) async fn home_page(
    state: &AppState,
    status: StatusCode,
    notice: Option<Notice>,
) -> Response {
    let service = ServiceContext::from_state(state).home();
    let recent = match service.recent_listings(RECENT_LIMIT).await {
        Ok(recent) => recent,
        Err(err) => {
            tracing::warn!(error = %err, "failed to load recent listings");
            RecentListings::default()
        }
    };
    render_with_status(status, &HomeTemplate { recent, notice })
}
