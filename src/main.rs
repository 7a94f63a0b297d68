use anyhow::Result;
use calendar_clear::commands::clear::{self, ClearArgs};
use calendar_clear::config::DEFAULT_CONFIG_PATH;
use calendar_clear::session::DEFAULT_SESSION_PATH;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "calendar-clear")]
#[command(about = "Delete every event from the calendar named in config.json (irreversible!)")]
struct Cli {
    /// JSON file containing `target_calendar_id`
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Stored Google OAuth session
    #[arg(long, default_value = DEFAULT_SESSION_PATH)]
    token: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout is reserved for progress lines
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    clear::run(ClearArgs {
        config: cli.config,
        token: cli.token,
    })
    .await
}
