//! Client library for the TVDB v4 metadata API.
//!
//! Layers, bottom-up:
//!
//! - [`transport`]: one HTTP request, response classification.
//! - [`session`]: bearer token storage and `login`.
//! - [`normalize`]: raw wire records to canonical records.
//! - [`client`]: the catalog endpoints, declared on [`api::LocalTvdbApi`].

/// Catalog API trait.
pub mod api;
/// Catalog client implementation.
pub mod client;
/// Request error types.
pub mod error;
/// Raw-to-canonical record transforms.
pub mod normalize;
/// Query parameter types.
pub mod params;
/// Raw and canonical record types.
pub mod schema;
/// Token-holding session.
pub mod session;
/// Single-request HTTP transport.
pub mod transport;

pub use api::{ApiResult, LocalTvdbApi, TvdbApi};
pub use client::{DEFAULT_SEASON_TYPE, TvdbClient, TvdbClientBuilder};
pub use error::{ApiError, PARSE_ERROR_MARKER, StatusError};
pub use params::{QueryParams, SearchParams, UpdatesParams};
pub use session::{Session, SessionBuilder};
