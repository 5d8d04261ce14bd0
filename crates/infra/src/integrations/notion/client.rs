//! Notion REST client implementing the document-workspace ports

use std::time::Duration;

use async_trait::async_trait;
use deskhub_core::content::BlockSource;
use deskhub_core::workspace_ports::WorkspacePort;
use deskhub_domain::constants::DEFAULT_HTTP_TIMEOUT_SECS;
use deskhub_domain::{Block, DatabaseSummary, DeskHubError, PageSummary, Result};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::debug;

use super::types::{
    database_summary, page_summary, BlockListResponse, QueryResponse, SearchResponse,
};
use crate::http::HttpClient;

/// Production API base.
pub const NOTION_API_BASE: &str = "https://api.notion.com/v1";

/// API version pin sent with every request.
const NOTION_VERSION: &str = "2022-06-28";

/// Children listings are paginated; this is the page size we request.
const CHILDREN_PAGE_SIZE: u32 = 100;

/// Notion REST client.
///
/// Runs with a single attempt per request: block fetches feed the extraction
/// engine, whose contract makes any fetch failure terminal for the request
/// that issued it.
pub struct NotionClient {
    base_url: String,
    token: String,
    http_client: HttpClient,
}

impl NotionClient {
    /// Create a client against the production API.
    ///
    /// # Errors
    /// Fails when the underlying HTTP client cannot be initialized.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_base_url(NOTION_API_BASE, token)
    }

    /// Create a client against an explicit API base (tests, proxies).
    ///
    /// # Errors
    /// Fails when the underlying HTTP client cannot be initialized.
    pub fn with_base_url(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert("Notion-Version", HeaderValue::from_static(NOTION_VERSION));

        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS))
            .max_attempts(1)
            .default_headers(headers)
            .build()?;

        Ok(Self { base_url: base_url.into(), token: token.into(), http_client })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http_client
            .request(method, format!("{}{}", self.base_url, path))
            .bearer_auth(&self.token)
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = self.http_client.send(builder).await?;
        let response = error_for_status(response).await?;
        response.json::<T>().await.map_err(|err| {
            DeskHubError::Network(format!("invalid response from document service: {err}"))
        })
    }

    /// Fetch all direct children of a block, following cursor pagination.
    async fn list_children(&self, block_id: &str) -> Result<Vec<Block>> {
        let mut blocks = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut builder = self
                .request(Method::GET, &format!("/blocks/{block_id}/children"))
                .query(&[("page_size", CHILDREN_PAGE_SIZE.to_string())]);
            if let Some(start_cursor) = &cursor {
                builder = builder.query(&[("start_cursor", start_cursor.as_str())]);
            }

            let page: BlockListResponse = self.send_json(builder).await?;
            blocks.extend(page.results.into_iter().map(super::types::NotionBlock::into_block));

            cursor = page.next_cursor.filter(|_| page.has_more);
            if cursor.is_none() {
                break;
            }
        }

        debug!(block_id, children = blocks.len(), "listed block children");
        Ok(blocks)
    }

    async fn search(&self, object: &str) -> Result<Vec<Value>> {
        let body = json!({"filter": {"property": "object", "value": object}});
        let builder = self.request(Method::POST, "/search").json(&body);
        let response: SearchResponse = self.send_json(builder).await?;
        Ok(response.results)
    }
}

#[async_trait]
impl BlockSource for NotionClient {
    async fn fetch_children(&self, block_id: &str) -> Result<Vec<Block>> {
        self.list_children(block_id).await
    }
}

#[async_trait]
impl WorkspacePort for NotionClient {
    async fn search_databases(&self) -> Result<Vec<DatabaseSummary>> {
        let results = self.search("database").await?;
        Ok(results.iter().map(database_summary).collect())
    }

    async fn search_pages(&self) -> Result<Vec<PageSummary>> {
        let results = self.search("page").await?;
        Ok(results.iter().map(page_summary).collect())
    }

    async fn query_database(&self, database_id: &str) -> Result<Vec<Value>> {
        let builder =
            self.request(Method::POST, &format!("/databases/{database_id}/query")).json(&json!({}));
        let response: QueryResponse = self.send_json(builder).await?;
        Ok(response.results)
    }

    async fn database_schema(&self, database_id: &str) -> Result<Value> {
        let builder = self.request(Method::GET, &format!("/databases/{database_id}"));
        self.send_json(builder).await
    }

    async fn update_page(&self, page_id: &str, properties: Value) -> Result<Value> {
        let body = json!({"properties": properties});
        let builder = self.request(Method::PATCH, &format!("/pages/{page_id}")).json(&body);
        self.send_json(builder).await
    }
}

/// Map non-success responses onto the domain error taxonomy, carrying the
/// response body in the message.
async fn error_for_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
    let message = format!("document service error ({status}): {body}");

    Err(match status.as_u16() {
        401 | 403 => DeskHubError::Auth(message),
        404 => DeskHubError::NotFound(message),
        400..=428 | 430..=499 => DeskHubError::InvalidInput(message),
        _ => DeskHubError::Network(message),
    })
}
