use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;

use crate::config::ClearConfig;
use crate::remote::{CalendarRemote, GoogleRemote};
use crate::session::Session;

pub struct ClearArgs {
    pub config: PathBuf,
    pub token: PathBuf,
}

pub async fn run(args: ClearArgs) -> Result<()> {
    let session = Session::load(&args.token)?;

    if session.is_expired() {
        tracing::warn!(
            path = %session.path().display(),
            "Google OAuth session looks expired; it will not be refreshed"
        );
    }

    let config = ClearConfig::load(&args.config)?;

    let remote = GoogleRemote::from_session(&session);
    let stdout = std::io::stdout();

    clear_calendar(&remote, &config.target_calendar_id, &mut stdout.lock()).await?;

    Ok(())
}

/// Deletes every event on the first page of `calendar_id`, one at a time, in listing order.
///
/// Each event's progress line is written before its delete is issued. The first failure
/// aborts the run; events deleted before it stay deleted.
pub async fn clear_calendar<R, W>(remote: &R, calendar_id: &str, out: &mut W) -> Result<usize>
where
    R: CalendarRemote + ?Sized,
    W: Write,
{
    let events = remote.list_events(calendar_id).await?;
    tracing::info!(calendar = calendar_id, count = events.len(), "listed events");

    for event in &events {
        let title = event
            .summary
            .as_deref()
            .with_context(|| format!("Event {} has no summary", event.id))?;

        writeln!(out, "Deleting event: {}", title)?;
        out.flush()?;

        remote.delete_event(calendar_id, &event.id).await?;
        tracing::debug!(event_id = %event.id, "deleted event");
    }

    writeln!(out, "Calendar cleared.")?;
    out.flush()?;

    Ok(events.len())
}
