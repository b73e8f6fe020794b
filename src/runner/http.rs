//! HTTP implementation of [`TaskRunner`] over reqwest.
//!
//! Talks to the agent service's `/run-task/` endpoint. The service always
//! answers 200 with a status envelope; a non-2xx status therefore means
//! something in front of the agent broke, and is reported as an API error
//! rather than a task failure.

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::runner::client::{RunnerError, TaskRunner};
use crate::runner::types::{RunTaskRequest, RunTaskResponse};

/// Agent service client over HTTP.
pub struct HttpTaskRunner {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTaskRunner {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl TaskRunner for HttpTaskRunner {
    fn name(&self) -> &str {
        "http"
    }

    async fn run_task(&self, task_name: &str) -> Result<Vec<serde_json::Value>, RunnerError> {
        let request = RunTaskRequest {
            task_name: task_name.to_string(),
        };

        info!("Run-task request: task_name={:?}", task_name);

        let response = self
            .client
            .post(format!("{}/run-task/", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| RunnerError::Network(e.to_string()))?;

        debug!("Run-task response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Agent service error: {} - {}", status, err_body);
            return Err(RunnerError::Api {
                status,
                message: err_body,
            });
        }

        let envelope: RunTaskResponse = response
            .json()
            .await
            .map_err(|e| RunnerError::Parse(e.to_string()))?;

        if !envelope.is_success() {
            let message = envelope
                .message
                .unwrap_or_else(|| "no message provided".to_string());
            warn!("Task failed: status={:?}, message={}", envelope.status, message);
            return Err(RunnerError::Task(message));
        }

        // A success without an output array renders as zero entries.
        let output = envelope.output.unwrap_or_default();
        info!("Task succeeded: {} output entries", output.len());
        Ok(output)
    }
}
