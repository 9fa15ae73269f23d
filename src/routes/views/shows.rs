use std::sync::Arc;

use askama::Template;
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_extra::extract::Form;
use chrono::Utc;

use crate::{
    error::SubmitError,
    forms::{FormErrors, ShowForm},
    response::{HtmlResult, Notice, render, render_with_status},
    services::{ServiceContext, listings::ShowListing},
    state::AppState,
};

use super::{Choice, home::home_page};

#[derive(Template)]
#[template(path = "pages/shows.html")]
struct ShowsTemplate {
    shows: Vec<ShowListing>,
}

#[derive(Template)]
#[template(path = "forms/show.html")]
struct ShowFormTemplate {
    form: ShowForm,
    errors: Vec<String>,
    artists: Vec<Choice>,
    venues: Vec<Choice>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/shows", get(list_shows))
        .route("/shows/create", get(new_show).post(create_show))
        .with_state(state)
}

async fn list_shows(State(state): State<Arc<AppState>>) -> HtmlResult {
    let service = ServiceContext::from_state(&state).show();
    let shows = service.list_shows().await?;
    render(&ShowsTemplate { shows })
}

async fn new_show(State(state): State<Arc<AppState>>) -> Response {
    let form = ShowForm::starting_at(Utc::now());
    show_form_page(&state, StatusCode::OK, form, &FormErrors::new()).await
}

async fn create_show(State(state): State<Arc<AppState>>, Form(form): Form<ShowForm>) -> Response {
    let draft = match form.validate() {
        Ok(draft) => draft,
        Err(errors) => {
            return show_form_page(&state, StatusCode::UNPROCESSABLE_ENTITY, form, &errors).await;
        }
    };

    let service = ServiceContext::from_state(&state).show();
    match service.create_show(draft).await {
        Ok(_) => {
            let notice = Notice::success("Show was successfully listed!");
            home_page(&state, StatusCode::OK, Some(notice)).await
        }
        Err(SubmitError::Invalid(errors)) => {
            show_form_page(&state, StatusCode::UNPROCESSABLE_ENTITY, form, &errors).await
        }
        Err(SubmitError::Failed(_)) => {
            let notice = Notice::error("An error occurred. Show could not be listed.");
            home_page(&state, StatusCode::INTERNAL_SERVER_ERROR, Some(notice)).await
        }
    }
}

/// The show form with artist and venue pickers filled from the database.
async fn show_form_page(
    state: &AppState,
    status: StatusCode,
    form: ShowForm,
    errors: &FormErrors,
) -> Response {
    let services = ServiceContext::from_state(state);
    let pickers = async {
        let artists = services.artist().list_artists().await?;
        let venues = services.venue().venue_links().await?;
        Ok::<_, crate::error::AppError>((artists, venues))
    };
    let (artists, venues) = match pickers.await {
        Ok(pickers) => pickers,
        Err(err) => return err.into_response(),
    };

    let page = ShowFormTemplate {
        artists: Choice::links(artists, |id| form.artist_is(id)),
        venues: Choice::links(venues, |id| form.venue_is(id)),
        errors: errors.messages(),
        form,
    };
    render_with_status(status, &page)
}
