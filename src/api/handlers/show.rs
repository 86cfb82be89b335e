//! Show handlers: list and create.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;

use crate::api::dto::{ShowDto, ShowForm, WriteResponse};
use crate::api::extract::Submission;
use crate::app_state::AppState;
use crate::error::{BookingError, ErrorResponse};

/// `GET /shows`: Every show with its venue and artist.
///
/// # Errors
///
/// Returns [`BookingError`] if the store cannot be read.
#[utoipa::path(
    get,
    path = "/shows",
    tag = "Shows",
    summary = "List shows",
    description = "Every show ordered by start time. `venue_name` is null for shows whose venue was deleted.",
    responses(
        (status = 200, description = "Shows", body = Vec<ShowDto>),
    )
)]
pub async fn list_shows(State(state): State<AppState>) -> Result<impl IntoResponse, BookingError> {
    let shows = state.booking_service.list_shows().await?;
    Ok(Json(
        shows.into_iter().map(ShowDto::from).collect::<Vec<_>>(),
    ))
}

/// `GET /shows/create`: Blank show form.
#[utoipa::path(
    get,
    path = "/shows/create",
    tag = "Shows",
    summary = "Blank show form",
    responses(
        (status = 200, description = "Empty form", body = ShowForm),
    )
)]
pub async fn create_show_form() -> impl IntoResponse {
    Json(ShowForm::default())
}

/// `POST /shows/create`: Book an artist at a venue.
///
/// # Errors
///
/// Returns [`BookingError::Validation`] if the form is invalid or the venue
/// or artist does not exist.
#[utoipa::path(
    post,
    path = "/shows/create",
    tag = "Shows",
    summary = "Create a show",
    description = "Books an artist at a venue. Both must exist. Overlapping bookings are accepted.",
    request_body(content = ShowForm, description = "JSON or urlencoded"),
    responses(
        (status = 201, description = "Show listed", body = WriteResponse),
        (status = 400, description = "Invalid form or unknown venue/artist", body = ErrorResponse),
    )
)]
pub async fn create_show(
    State(state): State<AppState>,
    Submission(form): Submission<ShowForm>,
) -> Result<impl IntoResponse, BookingError> {
    let draft = form.into_draft(Utc::now())?;
    let id = state.booking_service.create_show(&draft).await?;
    Ok((
        StatusCode::CREATED,
        Json(WriteResponse::new(
            id,
            "Show was successfully listed!".to_string(),
        )),
    ))
}

/// Show routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shows", get(list_shows))
        .route("/shows/create", get(create_show_form).post(create_show))
}
