//! # fyyur
//!
//! Booking directory for live music: venues, artists, and the shows that
//! book an artist at a venue.
//!
//! The service exposes a JSON REST API for listing, searching, creating,
//! editing, and deleting records. Every query and command goes through
//! [`service::BookingService`], which talks to a [`persistence::BookingStore`]
//! backed by PostgreSQL or by in-process tables.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers + DTOs (api/)
//!     │
//!     ├── BookingService (service/)
//!     │
//!     ├── Records, ids, validation (domain/)
//!     │
//!     └── BookingStore (persistence/)
//!           ├── PostgresStore
//!           └── MemoryStore
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
