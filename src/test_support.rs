//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;
use std::sync::Arc;

use crate::core::state::App;
use crate::runner::{RunnerError, TaskRunner};

/// A runner for tests that don't need real HTTP calls. Returns whatever
/// it was constructed with, regardless of the task name.
pub struct StubRunner {
    pub output: Vec<serde_json::Value>,
}

impl StubRunner {
    pub fn empty() -> Self {
        Self { output: Vec::new() }
    }
}

#[async_trait]
impl TaskRunner for StubRunner {
    fn name(&self) -> &str {
        "stub"
    }

    async fn run_task(&self, _task_name: &str) -> Result<Vec<serde_json::Value>, RunnerError> {
        Ok(self.output.clone())
    }
}

/// Creates a test App with a StubRunner and the default endpoint.
pub fn test_app() -> App {
    App::new(
        Arc::new(StubRunner::empty()),
        "http://127.0.0.1:8000".to_string(),
    )
}
