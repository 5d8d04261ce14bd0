//! Document-workspace pass-through endpoints

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use deskhub_domain::{DatabaseSummary, DeskHubError, PageSummary};
use serde::Deserialize;
use serde_json::Value;

use crate::context::AppContext;
use crate::error::ApiError;

/// List all databases visible to the integration.
pub async fn list_databases(
    State(ctx): State<Arc<AppContext>>,
) -> Result<Json<Vec<DatabaseSummary>>, ApiError> {
    let databases = ctx.workspace.search_databases().await?;
    Ok(Json(databases))
}

/// List all pages visible to the integration.
pub async fn list_pages(
    State(ctx): State<Arc<AppContext>>,
) -> Result<Json<Vec<PageSummary>>, ApiError> {
    let pages = ctx.workspace.search_pages().await?;
    Ok(Json(pages))
}

/// Query parameters for the database endpoints.
#[derive(Debug, Deserialize)]
pub struct DatabaseQuery {
    database_id: Option<String>,
}

fn require_database_id(query: DatabaseQuery) -> Result<String, ApiError> {
    query
        .database_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| DeskHubError::InvalidInput("Database ID is required".into()).into())
}

/// Return the raw page records of a database.
pub async fn database_pages(
    State(ctx): State<Arc<AppContext>>,
    Query(query): Query<DatabaseQuery>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let database_id = require_database_id(query)?;
    let pages = ctx.workspace.query_database(&database_id).await?;
    Ok(Json(pages))
}

/// Return a database's schema description.
pub async fn database_schema(
    State(ctx): State<Arc<AppContext>>,
    Query(query): Query<DatabaseQuery>,
) -> Result<Json<Value>, ApiError> {
    let database_id = require_database_id(query)?;
    let schema = ctx.workspace.database_schema(&database_id).await?;
    Ok(Json(schema))
}

/// JSON body accepted by `/update_notion_database_entry`.
#[derive(Debug, Deserialize)]
pub struct UpdateEntryRequest {
    page_id: Option<String>,
    updated_properties: Option<Value>,
}

/// Update a database entry (page) with new property values.
pub async fn update_entry(
    State(ctx): State<Arc<AppContext>>,
    Json(request): Json<UpdateEntryRequest>,
) -> Result<Json<Value>, ApiError> {
    let (Some(page_id), Some(properties)) = (request.page_id, request.updated_properties) else {
        return Err(DeskHubError::InvalidInput(
            "Page ID and updated properties are required".into(),
        )
        .into());
    };

    let updated = ctx.workspace.update_page(&page_id, properties).await?;
    Ok(Json(updated))
}
