//! Application context wiring

use std::sync::Arc;

use deskhub_core::content::{BlockSource, PageContentService};
use deskhub_core::scheduler_ports::SchedulerPort;
use deskhub_core::workspace_ports::WorkspacePort;
use deskhub_domain::{Config, Result};
use deskhub_infra::integrations::google::OAuthTokenManager;
use deskhub_infra::{GoogleCalendarClient, NotionClient};

/// Shared application state handed to every route handler.
pub struct AppContext {
    /// Scheduling service operations.
    pub scheduler: Arc<dyn SchedulerPort>,
    /// Document-workspace pass-through operations.
    pub workspace: Arc<dyn WorkspacePort>,
    /// The content extraction engine.
    pub content: PageContentService,
}

impl AppContext {
    /// Wire production integrations from configuration.
    ///
    /// # Errors
    /// Fails when credentials are missing or an HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self> {
        let token_manager = Arc::new(OAuthTokenManager::new(&config.google)?);
        let scheduler = Arc::new(GoogleCalendarClient::new(token_manager)?);
        let notion = Arc::new(NotionClient::new(config.notion.token.clone())?);

        Ok(Self::with_ports(scheduler, Arc::clone(&notion) as Arc<dyn WorkspacePort>, notion))
    }

    /// Wire explicit port implementations (tests, alternative backends).
    pub fn with_ports(
        scheduler: Arc<dyn SchedulerPort>,
        workspace: Arc<dyn WorkspacePort>,
        source: Arc<dyn BlockSource>,
    ) -> Self {
        Self { scheduler, workspace, content: PageContentService::new(source) }
    }
}
