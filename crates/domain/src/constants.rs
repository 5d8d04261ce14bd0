//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Gateway server defaults
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// Scheduling service defaults
pub const DEFAULT_CALENDAR_ID: &str = "primary";

// Fallback titles when the document workspace reports none
pub const UNNAMED_DATABASE_TITLE: &str = "Unnamed Database";
pub const UNNAMED_PAGE_TITLE: &str = "Unnamed Page";

// HTTP client configuration
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
