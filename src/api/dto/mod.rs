//! Data Transfer Objects for REST request/response serialization.
//!
//! Forms validate themselves into domain drafts; responses flatten domain
//! read models and render start times as strings.

pub mod artist_dto;
pub mod common_dto;
pub mod show_dto;
pub mod venue_dto;

pub use artist_dto::*;
pub use common_dto::*;
pub use show_dto::*;
pub use venue_dto::*;
