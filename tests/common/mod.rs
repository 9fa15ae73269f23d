#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{self, Body},
    http::{Method, Request, StatusCode, header},
    response::Response,
};
use chrono::{DateTime, TimeZone, Utc};
use tower::ServiceExt;
use uuid::Uuid;

use fyyur::{
    db::dao::DaoContext,
    db::drafts::{ArtistDraft, ShowDraft, VenueDraft},
    state::AppState,
    test_helpers::app,
};

pub async fn send(state: &Arc<AppState>, request: Request<Body>) -> Response {
    app(state.clone())
        .oneshot(request)
        .await
        .expect("router should answer")
}

pub async fn body_text(response: Response) -> String {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    String::from_utf8(bytes.to_vec()).expect("body should be utf-8")
}

pub async fn get(state: &Arc<AppState>, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    let response = send(state, request).await;
    let status = response.status();
    (status, body_text(response).await)
}

pub async fn post_form(state: &Arc<AppState>, uri: &str, fields: &[(&str, &str)]) -> Response {
    let body = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields)
        .finish();
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .expect("request should build");
    send(state, request).await
}

pub async fn delete(state: &Arc<AppState>, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    let response = send(state, request).await;
    let status = response.status();
    (status, body_text(response).await)
}

pub fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .expect("timestamp should be valid")
}

pub fn venue_draft(name: &str, city: &str, state: &str) -> VenueDraft {
    VenueDraft {
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        address: "1015 Folsom Street".to_string(),
        genres: vec!["Jazz".to_string()],
        ..Default::default()
    }
}

pub fn artist_draft(name: &str) -> ArtistDraft {
    ArtistDraft {
        name: name.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        genres: vec!["Rock n Roll".to_string()],
        ..Default::default()
    }
}

pub async fn seed_venue(state: &Arc<AppState>, name: &str, city: &str, st: &str) -> Uuid {
    DaoContext::new(&state.db)
        .venue()
        .create_venue(venue_draft(name, city, st))
        .await
        .expect("venue should be stored")
        .id
}

pub async fn seed_artist(state: &Arc<AppState>, name: &str) -> Uuid {
    DaoContext::new(&state.db)
        .artist()
        .create_artist(artist_draft(name))
        .await
        .expect("artist should be stored")
        .id
}

pub async fn seed_show(
    state: &Arc<AppState>,
    artist_id: Uuid,
    venue_id: Uuid,
    start_time: DateTime<Utc>,
) -> Uuid {
    DaoContext::new(&state.db)
        .show()
        .create_show(ShowDraft {
            artist_id,
            venue_id,
            start_time,
        })
        .await
        .expect("show should be stored")
        .id
}
