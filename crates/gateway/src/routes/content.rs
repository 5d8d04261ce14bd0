//! Page text extraction endpoint

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use deskhub_domain::{DeskHubError, PageText};
use serde::Deserialize;

use crate::context::AppContext;
use crate::error::ApiError;

/// Query parameters accepted by `/get_text_from_notion_page`.
#[derive(Debug, Deserialize)]
pub struct PageTextQuery {
    page_id: Option<String>,
}

/// Flatten a page's block tree into ordered text fragments.
pub async fn get_page_text(
    State(ctx): State<Arc<AppContext>>,
    Query(query): Query<PageTextQuery>,
) -> Result<Json<PageText>, ApiError> {
    let Some(page_id) = query.page_id.filter(|id| !id.is_empty()) else {
        return Err(DeskHubError::InvalidInput("Page ID is required".into()).into());
    };

    let content = ctx.content.get_text(&page_id).await?;
    Ok(Json(PageText { page_id, content }))
}
