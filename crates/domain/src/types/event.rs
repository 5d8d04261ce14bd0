//! Scheduling service event types

use serde::{Deserialize, Serialize};

/// Request payload for creating a calendar event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventInput {
    /// Target calendar; `primary` when the caller omits it.
    pub calendar_id: String,
    /// Event title. Required.
    pub summary: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Event start, RFC3339.
    pub start_time: String,
    /// Event end, RFC3339.
    pub end_time: String,
    /// Attendee email addresses.
    pub attendees: Vec<String>,
}

/// A calendar event as reported by the scheduling service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Provider-assigned event id.
    pub id: String,
    /// Event title; absent for untitled events.
    pub summary: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Event start (RFC3339 timestamp, or a bare date for all-day events).
    pub start: String,
    /// Event end (same format as `start`).
    pub end: String,
    /// True when the provider reported a date rather than a timestamp.
    pub is_all_day: bool,
    /// Link to the event in the provider UI.
    pub html_link: Option<String>,
    /// Provider status string (`confirmed`, `cancelled`, ...).
    pub status: Option<String>,
    /// Attendee email addresses.
    pub attendees: Vec<String>,
}
