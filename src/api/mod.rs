//! REST API layer: route handlers, DTOs, router composition, and the
//! OpenAPI document.
//!
//! Resource routes are mounted at the root (`/venues`, `/artists`,
//! `/shows`) next to `/health`. Unknown paths get a JSON 404.

pub mod dto;
pub mod extract;
pub mod handlers;

use axum::Router;
use utoipa::OpenApi;

use crate::app_state::AppState;
use dto::{
    ArtistDetailResponse, ArtistForm, ArtistShowDto, FormChoices, SearchForm, ShowDto, ShowForm,
    VenueDetailResponse, VenueForm, VenueShowDto, WriteResponse,
};
use handlers::{artist, show, system, venue};

/// OpenAPI description of every REST endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "Fyyur Booking API",
        description = "Directory of venues and artists, and the shows that book one at the other."
    ),
    paths(
        system::health_handler,
        venue::list_venues,
        venue::search_venues,
        venue::get_venue,
        venue::create_venue_form,
        venue::create_venue,
        venue::edit_venue_form,
        venue::edit_venue,
        venue::delete_venue,
        artist::list_artists,
        artist::search_artists,
        artist::get_artist,
        artist::create_artist_form,
        artist::create_artist,
        artist::edit_artist_form,
        artist::edit_artist,
        show::list_shows,
        show::create_show_form,
        show::create_show,
    ),
    components(schemas(
        crate::error::ErrorResponse,
        crate::error::ErrorBody,
        SearchForm,
        WriteResponse,
        FormChoices,
        VenueForm,
        VenueDetailResponse,
        VenueShowDto,
        ArtistForm,
        ArtistDetailResponse,
        ArtistShowDto,
        ShowForm,
        ShowDto,
    )),
    tags(
        (name = "System", description = "Service health"),
        (name = "Venues", description = "Venue listing, search, and maintenance"),
        (name = "Artists", description = "Artist listing, search, and maintenance"),
        (name = "Shows", description = "Show listing and booking"),
    )
)]
pub struct ApiDoc;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    let router = Router::new()
        .merge(handlers::routes())
        .merge(system::routes())
        .fallback(system::not_found_handler);

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    router
}
