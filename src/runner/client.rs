use std::fmt;

use async_trait::async_trait;

/// Errors that can occur while talking to the agent service.
/// `Task` is the application-level failure (the agent ran and said no);
/// everything else is a transport-level failure of the request itself.
#[derive(Debug)]
pub enum RunnerError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The service answered with a non-2xx HTTP status.
    Api { status: u16, message: String },
    /// The service answered, but the task itself failed. Carries the
    /// server-supplied message verbatim.
    Task(String),
    /// Failed to parse the service's response body.
    Parse(String),
}

impl RunnerError {
    /// True for failures signaled by the response payload rather than the
    /// request mechanism. The two kinds surface through different alerts.
    pub fn is_task_failure(&self) -> bool {
        matches!(self, RunnerError::Task(_))
    }
}

impl fmt::Display for RunnerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunnerError::Network(msg) => write!(f, "network error: {msg}"),
            RunnerError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            RunnerError::Task(msg) => write!(f, "{msg}"),
            RunnerError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for RunnerError {}

/// The seam between the UI and the agent service.
///
/// One method: submit a task name, get back the agent's output entries.
/// The entries are opaque JSON values, rendered verbatim by the UI.
#[async_trait]
pub trait TaskRunner: Send + Sync {
    /// Returns the name of the runner implementation.
    fn name(&self) -> &str;

    /// Runs the named task on the agent service and returns its output.
    async fn run_task(&self, task_name: &str) -> Result<Vec<serde_json::Value>, RunnerError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_failure_classification() {
        assert!(RunnerError::Task("unknown task".to_string()).is_task_failure());
        assert!(!RunnerError::Network("refused".to_string()).is_task_failure());
        assert!(
            !RunnerError::Api {
                status: 500,
                message: "boom".to_string()
            }
            .is_task_failure()
        );
        assert!(!RunnerError::Parse("bad json".to_string()).is_task_failure());
    }

    #[test]
    fn test_task_error_displays_message_verbatim() {
        let err = RunnerError::Task("unknown task".to_string());
        assert_eq!(err.to_string(), "unknown task");
    }

    #[test]
    fn test_api_error_display() {
        let err = RunnerError::Api {
            status: 500,
            message: "Internal Server Error".to_string(),
        };
        assert_eq!(err.to_string(), "API error (HTTP 500): Internal Server Error");
    }
}
