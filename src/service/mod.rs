//! Service layer: query and command orchestration.
//!
//! [`BookingService`] runs every read and write against the injected
//! [`super::persistence::BookingStore`].

pub mod booking_service;

pub use booking_service::BookingService;
