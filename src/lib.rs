//! calendar-clear - delete every event from a single Google Calendar
//!
//! Reads a stored OAuth session (`token.toml`) and a config file naming the
//! target calendar (`config.json`), lists the calendar's events and deletes
//! them one by one.

pub mod commands;
pub mod config;
pub mod event;
pub mod remote;
pub mod session;
