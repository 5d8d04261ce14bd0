//! # DeskHub Gateway
//!
//! The HTTP boundary of DeskHub: thin axum handlers that validate required
//! fields, call one port each, and translate domain errors into transport
//! failures. All non-trivial logic lives in `deskhub-core`.

pub mod context;
pub mod error;
pub mod routes;

pub use context::AppContext;
pub use error::ApiError;
