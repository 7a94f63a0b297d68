/// A listed calendar event. Only what deletion needs is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteEvent {
    pub id: String,
    pub summary: Option<String>,
}

#[cfg(test)]
impl RemoteEvent {
    pub fn new(id: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            summary: Some(summary.into()),
        }
    }

    pub fn untitled(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            summary: None,
        }
    }
}

impl From<google_calendar::types::Event> for RemoteEvent {
    // Google leaves `summary` empty rather than absent for untitled events
    fn from(event: google_calendar::types::Event) -> Self {
        let summary = if event.summary.is_empty() {
            None
        } else {
            Some(event.summary)
        };

        Self {
            id: event.id,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_google_event() {
        let google = google_calendar::types::Event {
            id: "e1".to_string(),
            summary: "Standup".to_string(),
            ..Default::default()
        };

        assert_eq!(RemoteEvent::from(google), RemoteEvent::new("e1", "Standup"));
    }

    #[test]
    fn empty_summary_is_untitled() {
        let google = google_calendar::types::Event {
            id: "e2".to_string(),
            ..Default::default()
        };

        assert_eq!(RemoteEvent::from(google), RemoteEvent::untitled("e2"));
    }
}
