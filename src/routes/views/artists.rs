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
    forms::{ArtistForm, FormErrors, GENRES, STATES, SearchForm},
    response::{HtmlResult, Notice, render, render_with_status},
    services::{
        ServiceContext,
        listings::{ArtistDetail, EntryLink, SearchResults},
    },
    state::AppState,
};

use super::{Choice, home::home_page, parse_id};

#[derive(Template)]
#[template(path = "pages/artists.html")]
struct ArtistsTemplate {
    artists: Vec<EntryLink>,
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
#[template(path = "pages/show_artist.html")]
struct ArtistTemplate {
    artist: ArtistDetail,
}

#[derive(Template)]
#[template(path = "forms/artist.html")]
struct ArtistFormTemplate {
    heading: String,
    action: String,
    form: ArtistForm,
    errors: Vec<String>,
    notice: Option<Notice>,
    states: Vec<Choice>,
    genres: Vec<Choice>,
}

impl ArtistFormTemplate {
    fn new(heading: String, action: String, form: ArtistForm) -> Self {
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

    fn for_create(form: ArtistForm) -> Self {
        Self::new(
            "List a new artist".to_string(),
            "/artists/create".to_string(),
            form,
        )
    }

    fn for_edit(id: &Uuid, form: ArtistForm) -> Self {
        let heading = format!("Edit artist {}", form.name);
        Self::new(heading, format!("/artists/{id}/edit"), form)
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
        .route("/artists", get(list_artists))
        .route("/artists/search", post(search_artists))
        .route("/artists/create", get(new_artist).post(create_artist))
        .route("/artists/{artist_id}", get(show_artist))
        .route("/artists/{artist_id}/edit", get(edit_artist).post(update_artist))
        .with_state(state)
}

async fn list_artists(State(state): State<Arc<AppState>>) -> HtmlResult {
    let service = ServiceContext::from_state(&state).artist();
    let artists = service.list_artists().await?;
    render(&ArtistsTemplate { artists })
}

async fn search_artists(
    State(state): State<Arc<AppState>>,
    Form(search): Form<SearchForm>,
) -> HtmlResult {
    let service = ServiceContext::from_state(&state).artist();
    let results = service.search_artists(&search.search_term, Utc::now()).await?;
    render(&SearchTemplate {
        base_path: "/artists",
        kind: "artists",
        search_term: search.search_term,
        results,
    })
}

async fn show_artist(
    State(state): State<Arc<AppState>>,
    Path(artist_id): Path<String>,
) -> HtmlResult {
    let artist_id = parse_id(&artist_id, "Artist")?;
    let service = ServiceContext::from_state(&state).artist();
    let artist = service.artist_detail(&artist_id, Utc::now()).await?;
    render(&ArtistTemplate { artist })
}

async fn new_artist() -> HtmlResult {
    render(&ArtistFormTemplate::for_create(ArtistForm::default()))
}

async fn create_artist(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ArtistForm>,
) -> Response {
    let draft = match form.validate() {
        Ok(draft) => draft,
        Err(errors) => {
            let page = ArtistFormTemplate::for_create(form).with_errors(&errors);
            return render_with_status(StatusCode::UNPROCESSABLE_ENTITY, &page);
        }
    };

    let service = ServiceContext::from_state(&state).artist();
    match service.create_artist(draft).await {
        Ok(artist) => {
            let notice =
                Notice::success(format!("Artist {} was successfully listed!", artist.name));
            home_page(&state, StatusCode::OK, Some(notice)).await
        }
        Err(_) => {
            let notice = Notice::error(format!(
                "An error occurred. Artist {} could not be listed.",
                form.name.trim()
            ));
            home_page(&state, StatusCode::INTERNAL_SERVER_ERROR, Some(notice)).await
        }
    }
}

async fn edit_artist(
    State(state): State<Arc<AppState>>,
    Path(artist_id): Path<String>,
) -> HtmlResult {
    let artist_id = parse_id(&artist_id, "Artist")?;
    let service = ServiceContext::from_state(&state).artist();
    let artist = service.require_artist(&artist_id).await?;
    render(&ArtistFormTemplate::for_edit(&artist_id, ArtistForm::from(artist)))
}

async fn update_artist(
    State(state): State<Arc<AppState>>,
    Path(artist_id): Path<String>,
    Form(form): Form<ArtistForm>,
) -> Response {
    let artist_id = match parse_id(&artist_id, "Artist") {
        Ok(artist_id) => artist_id,
        Err(err) => return err.into_response(),
    };
    let draft = match form.validate() {
        Ok(draft) => draft,
        Err(errors) => {
            let page = ArtistFormTemplate::for_edit(&artist_id, form).with_errors(&errors);
            return render_with_status(StatusCode::UNPROCESSABLE_ENTITY, &page);
        }
    };

    let service = ServiceContext::from_state(&state).artist();
    match service.update_artist(&artist_id, draft).await {
        Ok(_) => Redirect::to(&format!("/artists/{artist_id}")).into_response(),
        Err(err @ AppError::NotFound(_)) => err.into_response(),
        Err(_) => {
            let notice = Notice::error("An error occurred. The artist could not be updated.");
            let page = ArtistFormTemplate::for_edit(&artist_id, form).with_notice(notice);
            render_with_status(StatusCode::INTERNAL_SERVER_ERROR, &page)
        }
    }
}
