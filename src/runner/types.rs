//! Wire types for the agent service's run-task endpoint.
//!
//! The protocol is a single POST carrying the task name, answered by an
//! envelope with a status discriminator:
//!
//! ```text
//! → POST /run-task/        {"task_name": "backup_db"}
//! ← 200                    {"status": "success", "output": [...]}
//! ← 200                    {"status": "error", "message": "unknown task"}
//! ```

use serde::{Deserialize, Serialize};

/// Request body for `POST /run-task/`. The task name is the sole parameter
/// and is sent unvalidated, empty string included.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RunTaskRequest {
    pub task_name: String,
}

/// Response envelope. `output` is present on success, `message` on failure;
/// both are optional here so a sparse payload deserializes rather than
/// erroring, with the gaps handled by the caller.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RunTaskResponse {
    pub status: String,
    #[serde(default)]
    pub output: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub message: Option<String>,
}

impl RunTaskResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}
