//! Google Calendar integration module
//!
//! Provides token refresh and event CRUD against the Calendar v3 API.
//! The gateway is headless: there is no interactive consent flow, only a
//! configured refresh token exchanged for short-lived access tokens.

pub mod auth;
pub mod client;

pub use auth::{AccessTokenProvider, OAuthTokenManager};
pub use client::GoogleCalendarClient;
