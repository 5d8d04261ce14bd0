//! Route handlers
//!
//! One module per aggregated service, plus liveness. Paths mirror the
//! gateway's public API surface.

use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::Router;

use crate::context::AppContext;

pub mod calendar;
pub mod content;
pub mod health;
pub mod workspace;

/// Build the gateway router over the given application context.
pub fn router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/read_events", get(calendar::read_events))
        .route("/create_event", post(calendar::create_event))
        .route("/delete_event", delete(calendar::delete_event))
        .route("/list_notion_databases", get(workspace::list_databases))
        .route("/list_notion_pages", get(workspace::list_pages))
        .route("/get_text_from_notion_page", get(content::get_page_text))
        .route("/get_notion_database_pages", get(workspace::database_pages))
        .route("/get_notion_database_schema", get(workspace::database_schema))
        .route("/update_notion_database_entry", post(workspace::update_entry))
        .with_state(ctx)
}
