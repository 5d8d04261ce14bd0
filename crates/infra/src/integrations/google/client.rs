//! Google Calendar v3 client implementing the scheduler port

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use deskhub_core::scheduler_ports::SchedulerPort;
use deskhub_domain::constants::DEFAULT_HTTP_TIMEOUT_SECS;
use deskhub_domain::{CalendarEvent, DeskHubError, EventInput, Result};
use reqwest::{Method, Response};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::auth::AccessTokenProvider;
use crate::http::HttpClient;

/// Production API base.
pub const GOOGLE_CALENDAR_API_BASE: &str = "https://www.googleapis.com/calendar/v3";

/// Google Calendar client.
pub struct GoogleCalendarClient {
    base_url: String,
    http_client: HttpClient,
    token_provider: Arc<dyn AccessTokenProvider>,
}

impl GoogleCalendarClient {
    /// Create a client against the production API.
    ///
    /// # Errors
    /// Fails when the underlying HTTP client cannot be initialized.
    pub fn new(token_provider: Arc<dyn AccessTokenProvider>) -> Result<Self> {
        Self::with_base_url(GOOGLE_CALENDAR_API_BASE, token_provider)
    }

    /// Create a client against an explicit API base (tests, proxies).
    ///
    /// # Errors
    /// Fails when the underlying HTTP client cannot be initialized.
    pub fn with_base_url(
        base_url: impl Into<String>,
        token_provider: Arc<dyn AccessTokenProvider>,
    ) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS))
            .max_attempts(3)
            .build()?;

        Ok(Self { base_url: base_url.into(), http_client, token_provider })
    }

    fn events_url(&self, calendar_id: &str) -> String {
        format!("{}/calendars/{}/events", self.base_url, calendar_id)
    }
}

#[async_trait]
impl SchedulerPort for GoogleCalendarClient {
    async fn list_events(
        &self,
        calendar_id: &str,
        time_min: Option<&str>,
        time_max: Option<&str>,
    ) -> Result<Vec<CalendarEvent>> {
        let access_token = self.token_provider.access_token().await?;

        let mut query: Vec<(&str, String)> = vec![
            ("singleEvents", "true".to_string()),
            ("orderBy", "startTime".to_string()),
        ];
        if let Some(bound) = time_min {
            query.push(("timeMin", bound.to_string()));
        }
        if let Some(bound) = time_max {
            query.push(("timeMax", bound.to_string()));
        }

        let builder = self
            .http_client
            .request(Method::GET, self.events_url(calendar_id))
            .bearer_auth(&access_token)
            .query(&query);

        let response = error_for_status(self.http_client.send(builder).await?).await?;
        let listing: GoogleEventsResponse = response.json().await.map_err(|err| {
            DeskHubError::Network(format!("invalid response from scheduling service: {err}"))
        })?;

        debug!(calendar_id, events = listing.items.len(), "listed calendar events");
        Ok(listing.items.into_iter().map(GoogleCalendarEventDto::into_event).collect())
    }

    async fn create_event(&self, input: &EventInput) -> Result<CalendarEvent> {
        let access_token = self.token_provider.access_token().await?;

        let body = EventRequestBody {
            summary: &input.summary,
            description: input.description.as_deref(),
            start: EventDateTime { date_time: Some(input.start_time.clone()), date: None },
            end: EventDateTime { date_time: Some(input.end_time.clone()), date: None },
            attendees: input
                .attendees
                .iter()
                .map(|email| GoogleAttendee { email: email.clone() })
                .collect(),
        };

        let builder = self
            .http_client
            .request(Method::POST, self.events_url(&input.calendar_id))
            .bearer_auth(&access_token)
            .json(&body);

        let response = error_for_status(self.http_client.send(builder).await?).await?;
        let created: GoogleCalendarEventDto = response.json().await.map_err(|err| {
            DeskHubError::Network(format!("invalid response from scheduling service: {err}"))
        })?;

        debug!(event_id = %created.id, "created calendar event");
        Ok(created.into_event())
    }

    async fn delete_event(&self, calendar_id: &str, event_id: &str) -> Result<()> {
        let access_token = self.token_provider.access_token().await?;

        let url = format!("{}/{}", self.events_url(calendar_id), event_id);
        let builder = self.http_client.request(Method::DELETE, url).bearer_auth(&access_token);

        error_for_status(self.http_client.send(builder).await?).await?;
        debug!(calendar_id, event_id, "deleted calendar event");
        Ok(())
    }
}

/// Map non-success responses onto the domain error taxonomy.
async fn error_for_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
    let message = format!("scheduling service error ({status}): {body}");

    Err(match status.as_u16() {
        401 | 403 => DeskHubError::Auth(message),
        404 => DeskHubError::NotFound(message),
        429 => DeskHubError::Network(message),
        400..=499 => DeskHubError::InvalidInput(message),
        _ => DeskHubError::Network(message),
    })
}

#[derive(Debug, Deserialize)]
struct GoogleEventsResponse {
    #[serde(default)]
    items: Vec<GoogleCalendarEventDto>,
}

#[derive(Debug, Deserialize)]
struct GoogleCalendarEventDto {
    id: String,
    summary: Option<String>,
    description: Option<String>,
    #[serde(default)]
    start: EventDateTime,
    #[serde(default)]
    end: EventDateTime,
    #[serde(rename = "htmlLink")]
    html_link: Option<String>,
    status: Option<String>,
    attendees: Option<Vec<GoogleAttendee>>,
}

impl GoogleCalendarEventDto {
    fn into_event(self) -> CalendarEvent {
        let is_all_day = self.start.date.is_some();
        let start = self.start.date_time.or(self.start.date).unwrap_or_default();
        let end = self.end.date_time.or(self.end.date).unwrap_or_default();

        CalendarEvent {
            id: self.id,
            summary: self.summary.filter(|s| !s.trim().is_empty()),
            description: self.description,
            start,
            end,
            is_all_day,
            html_link: self.html_link,
            status: self.status,
            attendees: self
                .attendees
                .unwrap_or_default()
                .into_iter()
                .map(|attendee| attendee.email)
                .collect(),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct EventDateTime {
    #[serde(rename = "dateTime", skip_serializing_if = "Option::is_none")]
    date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GoogleAttendee {
    email: String,
}

#[derive(Debug, Serialize)]
struct EventRequestBody<'a> {
    summary: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    start: EventDateTime,
    end: EventDateTime,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attendees: Vec<GoogleAttendee>,
}
