mod common;

use std::collections::HashSet;

use axum::http::{StatusCode, header};
use chrono::Utc;
use uuid::Uuid;

use fyyur::{db::dao::DaoContext, services::ServiceContext, test_helpers::sqlite_state};

use common::{at, body_text, delete, get, post_form, seed_artist, seed_show, seed_venue};

const MUSICAL_HOP: &[(&str, &str)] = &[
    ("name", "The Musical Hop"),
    ("city", "San Francisco"),
    ("state", "CA"),
    ("address", "1015 Folsom Street"),
    ("phone", "123-123-1234"),
    ("genres", "Jazz"),
    ("genres", "Reggae"),
    ("genres", "Swing"),
    ("website_link", "https://www.themusicalhop.com"),
    ("seeking_talent", "y"),
    ("seeking_description", "We are on the lookout for a local artist."),
];

#[tokio::test]
async fn create_venue_then_read_it_back() {
    let state = sqlite_state().await;

    let response = post_form(&state, "/venues/create", MUSICAL_HOP).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Venue The Musical Hop was successfully listed!"));

    let venues = DaoContext::new(&state.db)
        .venue()
        .list_venues()
        .await
        .expect("list venues");
    assert_eq!(venues.len(), 1);
    let venue = &venues[0];
    assert_eq!(venue.genres.0, ["Jazz", "Reggae", "Swing"]);
    assert!(venue.seeking_talent);
    assert_eq!(venue.image_link, None);

    let (status, body) = get(&state, &format!("/venues/{}", venue.id)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("The Musical Hop"));
    assert!(body.contains("1015 Folsom Street"));
    assert!(body.contains("Currently seeking talent"));
}

#[tokio::test]
async fn invalid_venue_form_is_shown_again() {
    let state = sqlite_state().await;

    let response = post_form(
        &state,
        "/venues/create",
        &[("city", "San Francisco"), ("state", "XX"), ("address", "1 Main St")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_text(response).await;
    assert!(body.contains("Name: This field is required."));
    assert!(body.contains("State: Not a valid choice."));
    assert!(body.contains("value=\"San Francisco\""));

    let venues = DaoContext::new(&state.db)
        .venue()
        .list_venues()
        .await
        .expect("list venues");
    assert!(venues.is_empty());
}

#[tokio::test]
async fn search_matches_names_case_insensitively() {
    let state = sqlite_state().await;
    seed_venue(&state, "The Musical Hop", "San Francisco", "CA").await;
    seed_venue(&state, "Park Square Live Music", "San Francisco", "CA").await;
    seed_venue(&state, "Hip Hop Hall", "New York", "NY").await;

    for term in ["Hop", "hop", "HOP"] {
        let response = post_form(&state, "/venues/search", &[("search_term", term)]).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("The Musical Hop"));
        assert!(body.contains("Hip Hop Hall"));
        assert!(!body.contains("Park Square Live Music"));
    }

    let results = ServiceContext::new(&state.db)
        .venue()
        .search_venues("hop", Utc::now())
        .await
        .expect("search venues");
    assert_eq!(results.count, 2);
    let names: Vec<_> = results.data.iter().map(|hit| hit.name.as_str()).collect();
    assert_eq!(names, ["Hip Hop Hall", "The Musical Hop"]);
}

#[tokio::test]
async fn search_folds_non_ascii_names() {
    let state = sqlite_state().await;
    let otto = seed_venue(&state, "CAFÉ OTTO", "Berlin", "NY").await;
    let hall = seed_venue(&state, "Ölhalle", "Hamburg", "NY").await;
    let services = ServiceContext::new(&state.db);

    for (term, expected) in [
        ("CAFÉ", otto),
        ("Café", otto),
        ("café otto", otto),
        ("Ölhalle", hall),
        ("ÖLHALLE", hall),
        ("ölh", hall),
    ] {
        let results = services
            .venue()
            .search_venues(term, Utc::now())
            .await
            .expect("search venues");
        assert_eq!(results.count, 1, "term {term:?}");
        assert_eq!(results.data[0].id, expected, "term {term:?}");
    }

    let response = post_form(&state, "/venues/search", &[("search_term", "Café")]).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("CAFÉ OTTO"));
}

#[tokio::test]
async fn search_treats_wildcards_literally() {
    let state = sqlite_state().await;
    seed_venue(&state, "The Musical Hop", "San Francisco", "CA").await;

    let results = ServiceContext::new(&state.db)
        .venue()
        .search_venues("%", Utc::now())
        .await
        .expect("search venues");
    assert_eq!(results.count, 0);
}

#[tokio::test]
async fn venues_are_grouped_by_city_and_state() {
    let state = sqlite_state().await;
    let hop = seed_venue(&state, "The Musical Hop", "San Francisco", "CA").await;
    seed_venue(&state, "Park Square Live Music", "San Francisco", "CA").await;
    seed_venue(&state, "The Dueling Pianos Bar", "New York", "NY").await;
    let artist = seed_artist(&state, "Guns N Petals").await;
    seed_show(&state, artist, hop, at(2035, 4, 1, 20)).await;
    seed_show(&state, artist, hop, at(2019, 5, 21, 21)).await;

    let areas = ServiceContext::new(&state.db)
        .venue()
        .list_areas(Utc::now())
        .await
        .expect("list areas");

    assert_eq!(areas.len(), 2);
    let pairs: HashSet<_> = areas
        .iter()
        .map(|area| (area.city.as_str(), area.state.as_str()))
        .collect();
    assert_eq!(pairs.len(), 2);

    let mut seen = HashSet::new();
    for area in &areas {
        for venue in &area.venues {
            assert!(seen.insert(venue.id), "venue listed in two areas");
        }
    }
    assert_eq!(seen.len(), 3);

    let hop_hit = areas
        .iter()
        .flat_map(|area| area.venues.iter())
        .find(|venue| venue.id == hop)
        .expect("hop is listed");
    assert_eq!(hop_hit.num_upcoming_shows, 1);

    let (status, body) = get(&state, "/venues").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("San Francisco, CA").count(), 1);
    assert_eq!(body.matches("New York, NY").count(), 1);
}

#[tokio::test]
async fn deleting_a_venue_removes_it_and_its_shows() {
    let state = sqlite_state().await;
    let venue = seed_venue(&state, "The Musical Hop", "San Francisco", "CA").await;
    let artist = seed_artist(&state, "Guns N Petals").await;
    seed_show(&state, artist, venue, at(2035, 4, 1, 20)).await;

    let (status, body) = delete(&state, &format!("/venues/{venue}")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Venue was successfully deleted."));

    let (status, _) = get(&state, &format!("/venues/{venue}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let shows = DaoContext::new(&state.db)
        .show()
        .list_shows()
        .await
        .expect("list shows");
    assert!(shows.is_empty());
}

#[tokio::test]
async fn deleting_an_unknown_venue_still_answers_with_home() {
    let state = sqlite_state().await;

    let (status, body) = delete(&state, &format!("/venues/{}", Uuid::new_v4())).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("The venue could not be deleted."));
}

#[tokio::test]
async fn editing_a_venue_redirects_to_its_page() {
    let state = sqlite_state().await;
    let venue = seed_venue(&state, "The Musical Hop", "San Francisco", "CA").await;

    let (status, body) = get(&state, &format!("/venues/{venue}/edit")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("value=\"The Musical Hop\""));

    let mut fields = MUSICAL_HOP.to_vec();
    fields[0] = ("name", "The Musical Hop Annex");
    let response = post_form(&state, &format!("/venues/{venue}/edit"), &fields).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok()),
        Some(format!("/venues/{venue}").as_str())
    );

    let (_, body) = get(&state, &format!("/venues/{venue}")).await;
    assert!(body.contains("The Musical Hop Annex"));
}

#[tokio::test]
async fn editing_an_unknown_venue_is_not_found() {
    let state = sqlite_state().await;

    let (status, _) = get(&state, &format!("/venues/{}/edit", Uuid::new_v4())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let response = post_form(&state, &format!("/venues/{}/edit", Uuid::new_v4()), MUSICAL_HOP).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_and_malformed_ids_render_the_404_page() {
    let state = sqlite_state().await;

    let (status, body) = get(&state, &format!("/venues/{}", Uuid::new_v4())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("<h1>404</h1>"));

    let (status, body) = get(&state, "/venues/not-a-uuid").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("<h1>404</h1>"));

    let (status, body) = get(&state, "/no/such/page").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("<h1>404</h1>"));
}

#[tokio::test]
async fn home_lists_recent_venues() {
    let state = sqlite_state().await;
    seed_venue(&state, "The Musical Hop", "San Francisco", "CA").await;

    let (status, body) = get(&state, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Recently listed venues"));
    assert!(body.contains("The Musical Hop"));
}
