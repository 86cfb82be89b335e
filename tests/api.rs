//! Router tests against the in-memory store.

#![allow(clippy::panic, clippy::indexing_slicing)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use fyyur::api;
use fyyur::app_state::AppState;
use fyyur::persistence::MemoryStore;

fn app() -> Router {
    api::build_router().with_state(AppState::new(Arc::new(MemoryStore::new())))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let Ok(response) = app.clone().oneshot(request).await else {
        panic!("router failed");
    };
    let status = response.status();
    let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
        panic!("body read failed");
    };
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    let Ok(request) = Request::builder().uri(uri).body(Body::empty()) else {
        panic!("bad request");
    };
    request
}

fn delete(uri: &str) -> Request<Body> {
    let Ok(request) = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
    else {
        panic!("bad request");
    };
    request
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    let Ok(request) = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
    else {
        panic!("bad request");
    };
    request
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    let Ok(request) = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
    else {
        panic!("bad request");
    };
    request
}

fn musical_hop() -> Value {
    json!({
        "name": "The Musical Hop",
        "city": "San Francisco",
        "state": "CA",
        "address": "1015 Folsom Street",
        "phone": "123-123-1234",
        "genres": ["Jazz", "Reggae", "Classical", "Folk"],
        "website_link": "https://www.themusicalhop.com",
        "seeking_talent": true,
        "seeking_description": "We are on the lookout for a local artist to play every two weeks."
    })
}

fn guns_n_petals() -> Value {
    json!({
        "name": "Guns N Petals",
        "city": "San Francisco",
        "state": "CA",
        "genres": ["Rock n Roll"],
        "seeking_venue": true
    })
}

async fn create(app: &Router, uri: &str, body: &Value) -> i64 {
    let (status, created) = send(app, post_json(uri, body)).await;
    assert_eq!(status, StatusCode::CREATED, "{created}");
    let Some(id) = created["id"].as_i64() else {
        panic!("no id in {created}");
    };
    id
}

#[tokio::test]
async fn health_reports_healthy() {
    let app = app();
    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn unknown_route_is_json_404() {
    let app = app();
    let (status, body) = send(&app, get("/nowhere")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], 2000);
}

#[tokio::test]
async fn missing_venue_is_404() {
    let app = app();
    let (status, body) = send(&app, get("/venues/42")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], 2001);

    let (status, _) = send(&app, delete("/venues/42")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn created_venue_appears_in_detail_and_listing() {
    let app = app();
    let (status, created) = send(&app, post_json("/venues/create", &musical_hop())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        created["message"],
        "Venue The Musical Hop was successfully listed!"
    );
    let Some(id) = created["id"].as_i64() else {
        panic!("no id in {created}");
    };

    let (status, detail) = send(&app, get(&format!("/venues/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["name"], "The Musical Hop");
    assert_eq!(detail["genres"][0], "Jazz");
    assert_eq!(detail["past_shows_count"], 0);
    assert_eq!(detail["upcoming_shows_count"], 0);

    let (status, areas) = send(&app, get("/venues")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(areas[0]["city"], "San Francisco");
    assert_eq!(areas[0]["venues"][0]["id"], id);
}

#[tokio::test]
async fn invalid_venue_form_is_400() {
    let app = app();
    let mut form = musical_hop();
    form["state"] = json!("ZZ");
    let (status, body) = send(&app, post_json("/venues/create", &form)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], 1001);
}

#[tokio::test]
async fn search_uses_urlencoded_form() {
    let app = app();
    create(&app, "/venues/create", &musical_hop()).await;

    let (status, body) = send(&app, post_form("/venues/search", "search_term=HOP")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["search_term"], "HOP");
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["name"], "The Musical Hop");

    let (_, body) = send(&app, post_form("/venues/search", "search_term=zzz")).await;
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn edit_form_round_trips_the_record() {
    let app = app();
    let id = create(&app, "/artists/create", &guns_n_petals()).await;

    let (status, page) = send(&app, get(&format!("/artists/{id}/edit"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["form"]["name"], "Guns N Petals");

    let mut form = page["form"].clone();
    form["name"] = json!("Guns N Roses");
    let (status, body) = send(&app, post_json(&format!("/artists/{id}/edit"), &form)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Artist Guns N Roses was successfully edited!");

    let (_, detail) = send(&app, get(&format!("/artists/{id}"))).await;
    assert_eq!(detail["name"], "Guns N Roses");
    assert_eq!(detail["genres"][0], "Rock n Roll");
}

#[tokio::test]
async fn show_with_unknown_venue_is_rejected() {
    let app = app();
    let artist_id = create(&app, "/artists/create", &guns_n_petals()).await;
    let show = json!({
        "venue_id": 99,
        "artist_id": artist_id,
        "start_time": "2035-04-01T20:00:00Z"
    });
    let (status, body) = send(&app, post_json("/shows/create", &show)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], 1001);
}

#[tokio::test]
async fn deleting_a_venue_keeps_its_shows() {
    let app = app();
    let venue_id = create(&app, "/venues/create", &musical_hop()).await;
    let artist_id = create(&app, "/artists/create", &guns_n_petals()).await;
    let show = json!({
        "venue_id": venue_id,
        "artist_id": artist_id,
        "start_time": "2035-04-01 20:00:00"
    });
    let (status, body) = send(&app, post_json("/shows/create", &show)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Show was successfully listed!");

    let (_, detail) = send(&app, get(&format!("/venues/{venue_id}"))).await;
    assert_eq!(detail["upcoming_shows_count"], 1);
    assert_eq!(detail["upcoming_shows"][0]["artist_name"], "Guns N Petals");

    let (status, body) = send(&app, delete(&format!("/venues/{venue_id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        "Venue The Musical Hop was successfully deleted!"
    );

    let (status, shows) = send(&app, get("/shows")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(shows[0]["venue_id"], venue_id);
    assert_eq!(shows[0]["venue_name"], Value::Null);
    assert_eq!(shows[0]["artist_name"], "Guns N Petals");

    let (_, artist) = send(&app, get(&format!("/artists/{artist_id}"))).await;
    assert_eq!(artist["upcoming_shows_count"], 1);
}

#[tokio::test]
async fn missing_field_uses_error_envelope() {
    let app = app();
    let mut form = musical_hop();
    if let Some(fields) = form.as_object_mut() {
        fields.remove("name");
    }
    let (status, body) = send(&app, post_json("/venues/create", &form)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], 1001);
}

#[tokio::test]
async fn unparseable_id_uses_error_envelope() {
    let app = app();
    let (status, body) = send(&app, get("/venues/abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], 1001);

    let (status, body) = send(&app, get("/artists/abc/edit")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], 1001);
}

#[tokio::test]
async fn urlencoded_form_takes_repeated_genres() {
    let app = app();
    let form = "name=The+Musical+Hop&city=San+Francisco&state=CA\
                &address=1015+Folsom+Street&genres=Jazz&genres=Reggae\
                &seeking_talent=y&website_link=https%3A%2F%2Fwww.themusicalhop.com";
    let (status, created) = send(&app, post_form("/venues/create", form)).await;
    assert_eq!(status, StatusCode::CREATED, "{created}");
    let Some(venue_id) = created["id"].as_i64() else {
        panic!("no id in {created}");
    };

    let (_, detail) = send(&app, get(&format!("/venues/{venue_id}"))).await;
    assert_eq!(detail["genres"], json!(["Jazz", "Reggae"]));
    assert_eq!(detail["seeking_talent"], true);
    assert_eq!(detail["website"], "https://www.themusicalhop.com");

    let form = "name=Guns+N+Petals&city=San+Francisco&state=CA&genres=Rock+n+Roll";
    let (status, created) = send(&app, post_form("/artists/create", form)).await;
    assert_eq!(status, StatusCode::CREATED, "{created}");
    let Some(artist_id) = created["id"].as_i64() else {
        panic!("no id in {created}");
    };

    let (_, detail) = send(&app, get(&format!("/artists/{artist_id}"))).await;
    assert_eq!(detail["genres"], json!(["Rock n Roll"]));
    assert_eq!(detail["seeking_venue"], false);

    let form = format!(
        "venue_id={venue_id}&artist_id={artist_id}&start_time=2035-04-01+20%3A00%3A00"
    );
    let (status, body) = send(&app, post_form("/shows/create", &form)).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
}

#[tokio::test]
async fn urlencoded_form_with_unknown_genre_is_400() {
    let app = app();
    let form = "name=Hop&city=San+Francisco&state=CA&address=Folsom&genres=Polka";
    let (status, body) = send(&app, post_form("/venues/create", form)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], 1001);
}
