//! Loads a previously stored Google OAuth session (access token) used to call the gcal API.
//!
//! The session file is written by whatever tool performed the OAuth consent flow.
//! This crate only reads it; tokens are never refreshed or saved back.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use google_calendar::Client;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

pub const DEFAULT_SESSION_PATH: &str = "token.toml";

#[derive(Debug)]
pub struct Session {
    path: PathBuf,
    data: SessionData,
}

#[derive(Deserialize, Clone)]
pub struct SessionData {
    access_token: String,
    #[serde(default)]
    refresh_token: String,
    #[serde(default)]
    expires_at: Option<DateTime<Utc>>,
}

// Tokens must never end up in logs
impl fmt::Debug for SessionData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionData")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

impl Session {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!("Google OAuth session not found at {}", path.display());
        }

        let contents = std::fs::read_to_string(path).with_context(|| {
            format!("Failed to read Google OAuth session from {}", path.display())
        })?;

        let data: SessionData = toml::from_str(&contents).with_context(|| {
            format!("Failed to parse Google OAuth session from {}", path.display())
        })?;

        if data.access_token.trim().is_empty() {
            anyhow::bail!("Google OAuth session at {} has an empty access_token", path.display());
        }

        tracing::debug!(path = %path.display(), "loaded session");

        Ok(Session {
            path: path.to_path_buf(),
            data,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_expired(&self) -> bool {
        self.data
            .expires_at
            .is_some_and(|expires_at| Utc::now() >= expires_at)
    }

    /// No local client_id/secret is needed since the token is never refreshed here.
    pub fn client(&self) -> Client {
        Client::new(
            String::new(),
            String::new(),
            String::new(),
            self.data.access_token.clone(),
            self.data.refresh_token.clone(),
        )
    }
}
