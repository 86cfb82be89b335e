//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::persistence::BookingStore;
use crate::service::BookingService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Booking service for all queries and commands.
    pub booking_service: Arc<BookingService>,
}

impl AppState {
    /// Builds the state around a store handle.
    #[must_use]
    pub fn new(store: Arc<dyn BookingStore>) -> Self {
        Self {
            booking_service: Arc::new(BookingService::new(store)),
        }
    }
}
