pub mod client;
pub mod http;
pub mod types;

pub use client::{RunnerError, TaskRunner};
pub use http::HttpTaskRunner;
pub use types::{RunTaskRequest, RunTaskResponse};
