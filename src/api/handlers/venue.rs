//! Venue handlers: grouped list, search, detail, create, edit, delete.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{
    FormPage, SearchForm, SearchResponse, VenueDetailResponse, VenueForm, WriteResponse,
};
use crate::api::extract::{RecordKey, Submission};
use crate::app_state::AppState;
use crate::domain::{CityGroup, VenueId, VenueSummary};
use crate::error::{BookingError, ErrorResponse};

/// `GET /venues`: Venues grouped by city.
///
/// # Errors
///
/// Returns [`BookingError`] if the store cannot be read.
#[utoipa::path(
    get,
    path = "/venues",
    tag = "Venues",
    summary = "List venues by city",
    description = "Returns every venue grouped by (city, state) with its number of upcoming shows.",
    responses(
        (status = 200, description = "City groups", body = Vec<CityGroup>),
    )
)]
pub async fn list_venues(State(state): State<AppState>) -> Result<impl IntoResponse, BookingError> {
    let areas = state.booking_service.list_venues_grouped_by_city().await?;
    Ok(Json(areas))
}

/// `POST /venues/search`: Search venues by name.
///
/// # Errors
///
/// Returns [`BookingError`] if the store cannot be read.
#[utoipa::path(
    post,
    path = "/venues/search",
    tag = "Venues",
    summary = "Search venues",
    description = "Case-insensitive substring match on venue names. An empty term matches every venue.",
    request_body(content = SearchForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Matching venues", body = SearchResponse<VenueSummary>),
    )
)]
pub async fn search_venues(
    State(state): State<AppState>,
    Submission(form): Submission<SearchForm>,
) -> Result<impl IntoResponse, BookingError> {
    let results = state
        .booking_service
        .search_venues(&form.search_term)
        .await?;
    Ok(Json(SearchResponse {
        search_term: form.search_term,
        count: results.count,
        data: results.data,
    }))
}

/// `GET /venues/{id}`: Venue detail with past and upcoming shows.
///
/// # Errors
///
/// Returns [`BookingError::NotFound`] if the venue does not exist.
#[utoipa::path(
    get,
    path = "/venues/{id}",
    tag = "Venues",
    summary = "Get venue details",
    params(
        ("id" = i64, Path, description = "Venue id"),
    ),
    responses(
        (status = 200, description = "Venue details", body = VenueDetailResponse),
        (status = 404, description = "Venue not found", body = ErrorResponse),
    )
)]
pub async fn get_venue(
    State(state): State<AppState>,
    RecordKey(id): RecordKey<VenueId>,
) -> Result<impl IntoResponse, BookingError> {
    let detail = state.booking_service.get_venue_detail(id).await?;
    Ok(Json(VenueDetailResponse::from(detail)))
}

/// `GET /venues/create`: Blank venue form.
#[utoipa::path(
    get,
    path = "/venues/create",
    tag = "Venues",
    summary = "Blank venue form",
    responses(
        (status = 200, description = "Empty form with choice lists", body = FormPage<VenueForm>),
    )
)]
pub async fn create_venue_form() -> impl IntoResponse {
    Json(FormPage::blank(VenueForm::default()))
}

/// `POST /venues/create`: List a new venue.
///
/// # Errors
///
/// Returns [`BookingError::Validation`] for an invalid form, or a write
/// failure if the insert fails.
#[utoipa::path(
    post,
    path = "/venues/create",
    tag = "Venues",
    summary = "Create a venue",
    request_body(content = VenueForm, description = "JSON, or urlencoded with one `genres` key per genre"),
    responses(
        (status = 201, description = "Venue listed", body = WriteResponse),
        (status = 400, description = "Invalid form", body = ErrorResponse),
    )
)]
pub async fn create_venue(
    State(state): State<AppState>,
    Submission(form): Submission<VenueForm>,
) -> Result<impl IntoResponse, BookingError> {
    let draft = form.into_draft()?;
    let id = state.booking_service.create_venue(&draft).await?;
    let message = format!("Venue {} was successfully listed!", draft.name);
    Ok((StatusCode::CREATED, Json(WriteResponse::new(id, message))))
}

/// `GET /venues/{id}/edit`: Venue form prefilled with the stored record.
///
/// # Errors
///
/// Returns [`BookingError::NotFound`] if the venue does not exist.
#[utoipa::path(
    get,
    path = "/venues/{id}/edit",
    tag = "Venues",
    summary = "Prefilled venue form",
    params(
        ("id" = i64, Path, description = "Venue id"),
    ),
    responses(
        (status = 200, description = "Prefilled form", body = FormPage<VenueForm>),
        (status = 404, description = "Venue not found", body = ErrorResponse),
    )
)]
pub async fn edit_venue_form(
    State(state): State<AppState>,
    RecordKey(id): RecordKey<VenueId>,
) -> Result<impl IntoResponse, BookingError> {
    let venue = state.booking_service.venue(id).await?;
    Ok(Json(FormPage::prefilled(id, VenueForm::from(venue))))
}

/// `POST /venues/{id}/edit`: Overwrite a venue.
///
/// # Errors
///
/// Returns [`BookingError::NotFound`] if the venue does not exist, or
/// [`BookingError::Validation`] for an invalid form.
#[utoipa::path(
    post,
    path = "/venues/{id}/edit",
    tag = "Venues",
    summary = "Edit a venue",
    description = "Replaces every field of the venue with the submitted values.",
    params(
        ("id" = i64, Path, description = "Venue id"),
    ),
    request_body(content = VenueForm, description = "JSON, or urlencoded with one `genres` key per genre"),
    responses(
        (status = 200, description = "Venue edited", body = WriteResponse),
        (status = 400, description = "Invalid form", body = ErrorResponse),
        (status = 404, description = "Venue not found", body = ErrorResponse),
    )
)]
pub async fn edit_venue(
    State(state): State<AppState>,
    RecordKey(id): RecordKey<VenueId>,
    Submission(form): Submission<VenueForm>,
) -> Result<impl IntoResponse, BookingError> {
    let draft = form.into_draft()?;
    state.booking_service.update_venue(id, &draft).await?;
    let message = format!("Venue {} was successfully edited!", draft.name);
    Ok(Json(WriteResponse::new(id, message)))
}

/// `DELETE /venues/{id}`: Remove a venue. Its shows are kept.
///
/// # Errors
///
/// Returns [`BookingError::NotFound`] if the venue does not exist.
#[utoipa::path(
    delete,
    path = "/venues/{id}",
    tag = "Venues",
    summary = "Delete a venue",
    description = "Deletes the venue row. Shows booked at the venue are not removed.",
    params(
        ("id" = i64, Path, description = "Venue id"),
    ),
    responses(
        (status = 200, description = "Venue deleted", body = WriteResponse),
        (status = 404, description = "Venue not found", body = ErrorResponse),
    )
)]
pub async fn delete_venue(
    State(state): State<AppState>,
    RecordKey(id): RecordKey<VenueId>,
) -> Result<impl IntoResponse, BookingError> {
    let name = state.booking_service.delete_venue(id).await?;
    let message = format!("Venue {name} was successfully deleted!");
    Ok(Json(WriteResponse::new(id, message)))
}

/// Venue routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/venues", get(list_venues))
        .route("/venues/search", post(search_venues))
        .route("/venues/create", get(create_venue_form).post(create_venue))
        .route("/venues/{id}", get(get_venue).delete(delete_venue))
        .route("/venues/{id}/edit", get(edit_venue_form).post(edit_venue))
}
