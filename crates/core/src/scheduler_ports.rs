//! Scheduling service port interfaces
//!
//! These traits define the boundary between the gateway's pass-through
//! calendar endpoints and the infrastructure implementation.

use async_trait::async_trait;
use deskhub_domain::{CalendarEvent, EventInput, Result};

/// Trait for scheduling-service operations (event CRUD).
#[async_trait]
pub trait SchedulerPort: Send + Sync {
    /// List events on a calendar, ordered by start time.
    ///
    /// `time_min`/`time_max` are RFC3339 bounds; `None` leaves the bound open.
    async fn list_events(
        &self,
        calendar_id: &str,
        time_min: Option<&str>,
        time_max: Option<&str>,
    ) -> Result<Vec<CalendarEvent>>;

    /// Create an event and return the provider's record of it.
    async fn create_event(&self, input: &EventInput) -> Result<CalendarEvent>;

    /// Delete an event from a calendar.
    async fn delete_event(&self, calendar_id: &str, event_id: &str) -> Result<()>;
}
