//! Artist handlers: list, search, detail, create, edit.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{
    ArtistDetailResponse, ArtistForm, FormPage, SearchForm, SearchResponse, WriteResponse,
};
use crate::api::extract::{RecordKey, Submission};
use crate::app_state::AppState;
use crate::domain::{ArtistId, ArtistListing, ArtistSummary};
use crate::error::{BookingError, ErrorResponse};

/// `GET /artists`: Every artist's id and name.
///
/// # Errors
///
/// Returns [`BookingError`] if the store cannot be read.
#[utoipa::path(
    get,
    path = "/artists",
    tag = "Artists",
    summary = "List artists",
    responses(
        (status = 200, description = "Artists ordered by name", body = Vec<ArtistListing>),
    )
)]
pub async fn list_artists(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, BookingError> {
    let artists = state.booking_service.list_artists().await?;
    Ok(Json(artists))
}

/// `POST /artists/search`: Search artists by name.
///
/// # Errors
///
/// Returns [`BookingError`] if the store cannot be read.
#[utoipa::path(
    post,
    path = "/artists/search",
    tag = "Artists",
    summary = "Search artists",
    description = "Case-insensitive substring match on artist names. An empty term matches every artist.",
    request_body(content = SearchForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Matching artists", body = SearchResponse<ArtistSummary>),
    )
)]
pub async fn search_artists(
    State(state): State<AppState>,
    Submission(form): Submission<SearchForm>,
) -> Result<impl IntoResponse, BookingError> {
    let results = state
        .booking_service
        .search_artists(&form.search_term)
        .await?;
    Ok(Json(SearchResponse {
        search_term: form.search_term,
        count: results.count,
        data: results.data,
    }))
}

/// `GET /artists/{id}`: Artist detail with past and upcoming shows.
///
/// # Errors
///
/// Returns [`BookingError::NotFound`] if the artist does not exist.
#[utoipa::path(
    get,
    path = "/artists/{id}",
    tag = "Artists",
    summary = "Get artist details",
    params(
        ("id" = i64, Path, description = "Artist id"),
    ),
    responses(
        (status = 200, description = "Artist details", body = ArtistDetailResponse),
        (status = 404, description = "Artist not found", body = ErrorResponse),
    )
)]
pub async fn get_artist(
    State(state): State<AppState>,
    RecordKey(id): RecordKey<ArtistId>,
) -> Result<impl IntoResponse, BookingError> {
    let detail = state.booking_service.get_artist_detail(id).await?;
    Ok(Json(ArtistDetailResponse::from(detail)))
}

/// `GET /artists/create`: Blank artist form.
#[utoipa::path(
    get,
    path = "/artists/create",
    tag = "Artists",
    summary = "Blank artist form",
    responses(
        (status = 200, description = "Empty form with choice lists", body = FormPage<ArtistForm>),
    )
)]
pub async fn create_artist_form() -> impl IntoResponse {
    Json(FormPage::blank(ArtistForm::default()))
}

/// `POST /artists/create`: List a new artist.
///
/// # Errors
///
/// Returns [`BookingError::Validation`] for an invalid form, or a write
/// failure if the insert fails.
#[utoipa::path(
    post,
    path = "/artists/create",
    tag = "Artists",
    summary = "Create an artist",
    request_body(content = ArtistForm, description = "JSON, or urlencoded with one `genres` key per genre"),
    responses(
        (status = 201, description = "Artist listed", body = WriteResponse),
        (status = 400, description = "Invalid form", body = ErrorResponse),
    )
)]
pub async fn create_artist(
    State(state): State<AppState>,
    Submission(form): Submission<ArtistForm>,
) -> Result<impl IntoResponse, BookingError> {
    let draft = form.into_draft()?;
    let id = state.booking_service.create_artist(&draft).await?;
    let message = format!("Artist {} was successfully listed!", draft.name);
    Ok((StatusCode::CREATED, Json(WriteResponse::new(id, message))))
}

/// `GET /artists/{id}/edit`: Artist form prefilled with the stored record.
///
/// # Errors
///
/// Returns [`BookingError::NotFound`] if the artist does not exist.
#[utoipa::path(
    get,
    path = "/artists/{id}/edit",
    tag = "Artists",
    summary = "Prefilled artist form",
    params(
        ("id" = i64, Path, description = "Artist id"),
    ),
    responses(
        (status = 200, description = "Prefilled form", body = FormPage<ArtistForm>),
        (status = 404, description = "Artist not found", body = ErrorResponse),
    )
)]
pub async fn edit_artist_form(
    State(state): State<AppState>,
    RecordKey(id): RecordKey<ArtistId>,
) -> Result<impl IntoResponse, BookingError> {
    let artist = state.booking_service.artist(id).await?;
    Ok(Json(FormPage::prefilled(id, ArtistForm::from(artist))))
}

/// `POST /artists/{id}/edit`: Overwrite an artist.
///
/// # Errors
///
/// Returns [`BookingError::NotFound`] if the artist does not exist, or
/// [`BookingError::Validation`] for an invalid form.
#[utoipa::path(
    post,
    path = "/artists/{id}/edit",
    tag = "Artists",
    summary = "Edit an artist",
    description = "Replaces every field of the artist with the submitted values.",
    params(
        ("id" = i64, Path, description = "Artist id"),
    ),
    request_body(content = ArtistForm, description = "JSON, or urlencoded with one `genres` key per genre"),
    responses(
        (status = 200, description = "Artist edited", body = WriteResponse),
        (status = 400, description = "Invalid form", body = ErrorResponse),
        (status = 404, description = "Artist not found", body = ErrorResponse),
    )
)]
pub async fn edit_artist(
    State(state): State<AppState>,
    RecordKey(id): RecordKey<ArtistId>,
    Submission(form): Submission<ArtistForm>,
) -> Result<impl IntoResponse, BookingError> {
    let draft = form.into_draft()?;
    state.booking_service.update_artist(id, &draft).await?;
    let message = format!("Artist {} was successfully edited!", draft.name);
    Ok(Json(WriteResponse::new(id, message)))
}

/// Artist routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/artists", get(list_artists))
        .route("/artists/search", post(search_artists))
        .route("/artists/create", get(create_artist_form).post(create_artist))
        .route("/artists/{id}", get(get_artist))
        .route("/artists/{id}/edit", get(edit_artist_form).post(edit_artist))
}
