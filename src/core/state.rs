//! # Application State
//!
//! Core business state for Taskdeck. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── runner: Arc<dyn TaskRunner>   // the agent service client
//! ├── output: Vec<Value>            // last received output list
//! ├── status_message: String        // status bar text
//! ├── endpoint: String              // agent base URL (for display)
//! ├── is_loading: bool              // a run request is in flight
//! └── alert: Option<String>         // blocking notification, if raised
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::runner::TaskRunner;
use std::sync::Arc;

pub struct App {
    pub runner: Arc<dyn TaskRunner>,
    /// Output entries from the last successful run. Replaced wholesale on
    /// each success, left untouched on any failure.
    pub output: Vec<serde_json::Value>,
    pub status_message: String,
    pub endpoint: String,
    pub is_loading: bool,
    /// A raised alert captures all input until dismissed.
    pub alert: Option<String>,
}

impl App {
    pub fn new(runner: Arc<dyn TaskRunner>, endpoint: String) -> Self {
        Self {
            runner,
            output: Vec::new(),
            status_message: String::from("Welcome to Taskdeck!"),
            endpoint,
            is_loading: false,
            alert: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Welcome to Taskdeck!");
        assert!(!app.is_loading);
        assert!(app.output.is_empty());
        assert!(app.alert.is_none());
        assert_eq!(app.endpoint, "http://127.0.0.1:8000");
    }
}
