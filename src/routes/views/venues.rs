use std::sync::Arc;

use askama::Template;
use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use axum_extra::extract::Form;
use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::AppError,
    forms::{FormErrors, GENRES, STATES, SearchForm, VenueForm},
    response::{HtmlResult, Notice, render, render_with_status},
    services::{
        ServiceContext,
        listings::{AreaListing, SearchResults, VenueDetail},
    },
    state::AppState,
};

use super::{Choice, home::home_page, parse_id};

#[derive(Template)]
#[template(path = "pages/venues.html")]
struct VenuesTemplate {
    areas: Vec<AreaListing>,
}

#[derive(Template)]
#[template(path = "pages/search.html")]
struct SearchTemplate {
    base_path: &'static str,
    kind: &'static str,
    search_term: String,
    results: SearchResults,
}

#[derive(Template)]
#[template(path = "pages/show_venue.html")]
struct VenueTemplate {
    venue: VenueDetail,
}

#[derive(Template)]
#[template(path = "forms/venue.html")]
struct VenueFormTemplate {
    heading: String,
    action: String,
    form: VenueForm,
    errors: Vec<String>,
    notice: Option<Notice>,
    states: Vec<Choice>,
    genres: Vec<Choice>,
}

impl VenueFormTemplate {
    fn new(heading: String, action: String, form: VenueForm) -> Self {
        let states = Choice::fixed(STATES, |state| form.state_is(state));
        let genres = Choice::fixed(GENRES, |genre| form.has_genre(genre));
        Self {
            heading,
            action,
            form,
            errors: Vec::new(),
            notice: None,
            states,
            genres,
        }
    }

    fn for_create(form: VenueForm) -> Self {
        Self::new(
            "List a new venue".to_string(),
            "/venues/create".to_string(),
            form,
        )
    }

    fn for_edit(id: &Uuid, form: VenueForm) -> Self {
        let heading = format!("Edit venue {}", form.name);
        Self::new(heading, format!("/venues/{id}/edit"), form)
    }

    fn with_errors(mut self, errors: &FormErrors) -> Self {
        self.errors = errors.messages();
        self
    }

    fn with_notice(mut self, notice: Notice) -> Self {
        self.notice = Some(notice);
        self
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/venues", get(list_venues))
        .route("/venues/search", post(search_venues))
        .route("/venues/create", get(new_venue).post(create_venue))
        .route("/venues/{venue_id}", get(show_venue).delete(delete_venue))
        .route("/venues/{venue_id}/edit", get(edit_venue).post(update_venue))
        .with_state(state)
}

async fn list_venues(State(state): State<Arc<AppState>>) -> HtmlResult {
    let service = ServiceContext::from_state(&state).venue();
    let areas = service.list_areas(Utc::now()).await?;
    render(&VenuesTemplate { areas })
}

async fn search_venues(
    State(state): State<Arc<AppState>>,
    Form(search): Form<SearchForm>,
) -> HtmlResult {
    let service = ServiceContext::from_state(&state).venue();
    let results = service.search_venues(&search.search_term, Utc::now()).await?;
    render(&SearchTemplate {
        base_path: "/venues",
        kind: "venues",
        search_term: search.search_term,
        results,
    })
}

async fn show_venue(
    State(state): State<Arc<AppState>>,
    Path(venue_id): Path<String>,
) -> HtmlResult {
    let venue_id = parse_id(&venue_id, "Venue")?;
    let service = ServiceContext::from_state(&state).venue();
    let venue = service.venue_detail(&venue_id, Utc::now()).await?;
    render(&VenueTemplate { venue })
}

async fn new_venue() -> HtmlResult {
    render(&VenueFormTemplate::for_create(VenueForm::default()))
}

async fn create_venue(State(state): State<Arc<AppState>>, Form(form): Form<VenueForm>) -> Response {
    let draft = match form.validate() {
        Ok(draft) => draft,
        Err(errors) => {
            let page = VenueFormTemplate::for_create(form).with_errors(&errors);
            return render_with_status(StatusCode::UNPROCESSABLE_ENTITY, &page);
        }
    };

    let service = ServiceContext::from_state(&state).venue();
    match service.create_venue(draft).await {
        Ok(venue) => {
            let notice = Notice::success(format!("Venue {} was successfully listed!", venue.name));
            home_page(&state, StatusCode::OK, Some(notice)).await
        }
        Err(_) => {
            let notice = Notice::error(format!(
                "An error occurred. Venue {} could not be listed.",
                form.name.trim()
            ));
            home_page(&state, StatusCode::INTERNAL_SERVER_ERROR, Some(notice)).await
        }
    }
}

async fn edit_venue(
    State(state): State<Arc<AppState>>,
    Path(venue_id): Path<String>,
) -> HtmlResult {
    let venue_id = parse_id(&venue_id, "Venue")?;
    let service = ServiceContext::from_state(&state).venue();
    let venue = service.require_venue(&venue_id).await?;
    render(&VenueFormTemplate::for_edit(&venue_id, VenueForm::from(venue)))
}

async fn update_venue(
    State(state): State<Arc<AppState>>,
    Path(venue_id): Path<String>,
    Form(form): Form<VenueForm>,
) -> Response {
    let venue_id = match parse_id(&venue_id, "Venue") {
        Ok(venue_id) => venue_id,
        Err(err) => return err.into_response(),
    };
    let draft = match form.validate() {
        Ok(draft) => draft,
        Err(errors) => {
            let page = VenueFormTemplate::for_edit(&venue_id, form).with_errors(&errors);
            return render_with_status(StatusCode::UNPROCESSABLE_ENTITY, &page);
        }
    };

    let service = ServiceContext::from_state(&state).venue();
    match service.update_venue(&venue_id, draft).await {
        Ok(_) => Redirect::to(&format!("/venues/{venue_id}")).into_response(),
        Err(err @ AppError::NotFound(_)) => err.into_response(),
        Err(_) => {
            let notice = Notice::error("An error occurred. The venue could not be updated.");
            let page = VenueFormTemplate::for_edit(&venue_id, form).with_notice(notice);
            render_with_status(StatusCode::INTERNAL_SERVER_ERROR, &page)
        }
    }
}

/// Always answers with the home page; the notice says how it went.
async fn delete_venue(
    State(state): State<Arc<AppState>>,
    Path(venue_id): Path<String>,
) -> Response {
    let outcome = match parse_id(&venue_id, "Venue") {
        Ok(venue_id) => {
            ServiceContext::from_state(&state)
                .venue()
                .delete_venue(&venue_id)
                .await
        }
        Err(err) => Err(err),
    };
    let notice = match outcome {
        Ok(_) => Notice::success("Venue was successfully deleted."),
        Err(err) => {
            tracing::warn!(venue_id = %venue_id, error = %err, "venue delete failed");
            Notice::error("An error occurred. The venue could not be deleted.")
        }
    };
    home_page(&state, StatusCode::OK, Some(notice)).await
}
