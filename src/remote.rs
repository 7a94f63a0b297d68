//! The two Google Calendar operations the clear command needs.

use anyhow::{Context, Result};
use async_trait::async_trait;
use google_calendar::Client;
use google_calendar::types::{OrderBy, SendUpdates};

use crate::event::RemoteEvent;
use crate::session::Session;

#[async_trait]
pub trait CalendarRemote {
    /// Returns the first page of events only.
    async fn list_events(&self, calendar_id: &str) -> Result<Vec<RemoteEvent>>;

    /// Deleting an event that no longer exists is an error.
    async fn delete_event(&self, calendar_id: &str, event_id: &str) -> Result<()>;
}

pub struct GoogleRemote {
    client: Client,
}

impl GoogleRemote {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn from_session(session: &Session) -> Self {
        Self::new(session.client())
    }
}

#[async_trait]
impl CalendarRemote for GoogleRemote {
    async fn list_events(&self, calendar_id: &str) -> Result<Vec<RemoteEvent>> {
        let response = self
            .client
            .events()
            .list(
                calendar_id,
                "",                 // i_cal_uid
                0,                  // max_attendees
                0,                  // max_results (server default)
                OrderBy::default(), // order_by
                "",                 // page_token
                &[],                // private_extended_property
                "",                 // q (search query)
                &[],                // shared_extended_property
                false,              // show_deleted
                false,              // show_hidden_invitations
                false,              // single_events
                "",                 // time_max
                "",                 // time_min
                "",                 // time_zone
                "",                 // updated_min
            )
            .await
            .with_context(|| format!("Failed to list events for calendar {}", calendar_id))?;

        Ok(response.body.into_iter().map(RemoteEvent::from).collect())
    }

    async fn delete_event(&self, calendar_id: &str, event_id: &str) -> Result<()> {
        self.client
            .events()
            .delete(calendar_id, event_id, false, SendUpdates::None)
            .await
            .with_context(|| format!("Failed to delete event: {}", event_id))?;

        Ok(())
    }
}
