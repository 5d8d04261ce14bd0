//! Calendar pass-through endpoints

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use chrono::{SecondsFormat, Utc};
use deskhub_domain::constants::DEFAULT_CALENDAR_ID;
use deskhub_domain::{CalendarEvent, DeskHubError, EventInput};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::context::AppContext;
use crate::error::ApiError;

/// Query parameters accepted by `/read_events`.
#[derive(Debug, Deserialize)]
pub struct ReadEventsQuery {
    calendar_id: Option<String>,
    time_min: Option<String>,
    time_max: Option<String>,
}

/// List upcoming events on a calendar.
///
/// `calendar_id` defaults to the primary calendar, `time_min` to now.
pub async fn read_events(
    State(ctx): State<Arc<AppContext>>,
    Query(query): Query<ReadEventsQuery>,
) -> Result<Json<Vec<CalendarEvent>>, ApiError> {
    let calendar_id = query.calendar_id.unwrap_or_else(|| DEFAULT_CALENDAR_ID.to_string());
    let time_min = query
        .time_min
        .unwrap_or_else(|| Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));

    let events = ctx
        .scheduler
        .list_events(&calendar_id, Some(&time_min), query.time_max.as_deref())
        .await?;
    Ok(Json(events))
}

/// JSON body accepted by `/create_event`.
#[derive(Debug, Deserialize)]
pub struct CreateEventRequest {
    calendar_id: Option<String>,
    summary: Option<String>,
    description: Option<String>,
    start_time: Option<String>,
    end_time: Option<String>,
    #[serde(default)]
    attendees: Vec<String>,
}

/// Create a new event.
pub async fn create_event(
    State(ctx): State<Arc<AppContext>>,
    Json(request): Json<CreateEventRequest>,
) -> Result<Json<CalendarEvent>, ApiError> {
    let (Some(summary), Some(start_time), Some(end_time)) =
        (request.summary, request.start_time, request.end_time)
    else {
        return Err(DeskHubError::InvalidInput("Missing required event fields.".into()).into());
    };

    let input = EventInput {
        calendar_id: request.calendar_id.unwrap_or_else(|| DEFAULT_CALENDAR_ID.to_string()),
        summary,
        description: request.description,
        start_time,
        end_time,
        attendees: request.attendees,
    };

    let created = ctx.scheduler.create_event(&input).await?;
    Ok(Json(created))
}

/// Query parameters accepted by `/delete_event`.
#[derive(Debug, Deserialize)]
pub struct DeleteEventQuery {
    calendar_id: Option<String>,
    event_id: Option<String>,
}

/// Delete an event from a calendar.
pub async fn delete_event(
    State(ctx): State<Arc<AppContext>>,
    Query(query): Query<DeleteEventQuery>,
) -> Result<Json<Value>, ApiError> {
    let Some(event_id) = query.event_id.filter(|id| !id.is_empty()) else {
        return Err(DeskHubError::InvalidInput("Event ID is required.".into()).into());
    };
    let calendar_id = query.calendar_id.unwrap_or_else(|| DEFAULT_CALENDAR_ID.to_string());

    ctx.scheduler.delete_event(&calendar_id, &event_id).await?;
    Ok(Json(json!({"status": "success", "message": "Event deleted successfully"})))
}
