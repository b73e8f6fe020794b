//! # Actions
//!
//! Everything that can happen in Taskdeck becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! Agent responds? That's `Action::RunCompleted(entries)`.
//!
//! The `update()` function takes the current state and an action,
//! then mutates the state and returns an `Effect` describing any I/O
//! the shell must perform. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: apply an action, assert on the state.

use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// User submitted a task name (any string, including empty).
    Submit(String),
    /// The agent ran the task and returned its output entries.
    RunCompleted(Vec<serde_json::Value>),
    /// The agent responded with a non-success status and this message.
    RunFailed(String),
    /// The request itself failed (connection refused, DNS, bad body).
    TransportFailed(String),
    /// User dismissed the blocking alert.
    DismissAlert,
    Quit,
}

/// I/O the shell must perform after a state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Spawn a run-task request for this task name.
    SpawnRun(String),
    Quit,
}

/// The reducer. Mutates `app` according to `action` and tells the caller
/// what to do next.
///
/// Submissions are deliberately not gated on `is_loading`: the original
/// front-end allowed overlapping submissions, and that behavior is kept.
pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Submit(task_name) => {
            app.is_loading = true;
            app.status_message = if task_name.is_empty() {
                String::from("Running task…")
            } else {
                format!("Running \"{}\"…", task_name)
            };
            Effect::SpawnRun(task_name)
        }
        Action::RunCompleted(entries) => {
            app.is_loading = false;
            app.status_message = format!(
                "Received {} output {}",
                entries.len(),
                if entries.len() == 1 { "entry" } else { "entries" }
            );
            app.output = entries;
            Effect::None
        }
        Action::RunFailed(message) => {
            app.is_loading = false;
            app.status_message = String::from("Task failed");
            app.alert = Some(format!("Error: {}", message));
            Effect::None
        }
        Action::TransportFailed(error) => {
            app.is_loading = false;
            app.status_message = String::from("Request failed");
            app.alert = Some(format!("Error running task: {}", error));
            Effect::None
        }
        Action::DismissAlert => {
            app.alert = None;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
