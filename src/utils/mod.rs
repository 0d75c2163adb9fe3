//! Utility modules for web, DOM, and formatting operations.
//!
//! Provides:
//! - [`fetch_json`] - JSON fetching over the browser Fetch API
//! - [`dom`] - window, localStorage, scroll and alert helpers
//! - [`format`] - toast and checkout message formatting

pub mod dom;
mod fetch;
pub mod format;

pub use fetch::fetch_json;
