use serde_json::json;
use taskdeck::runner::{HttpTaskRunner, RunnerError, TaskRunner};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Success Path
// ============================================================================

#[tokio::test]
async fn test_run_task_sends_exactly_one_request_with_task_name() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/run-task/"))
        .and(body_json(json!({"task_name": "backup_db"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "success", "output": [{"ok": true}]})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let runner = HttpTaskRunner::new(mock_server.uri());
    let output = runner.run_task("backup_db").await.unwrap();

    assert_eq!(output, vec![json!({"ok": true})]);
}

#[tokio::test]
async fn test_empty_task_name_is_submitted_as_is() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/run-task/"))
        .and(body_json(json!({"task_name": ""})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"status": "success", "output": []})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let runner = HttpTaskRunner::new(mock_server.uri());
    let output = runner.run_task("").await.unwrap();
    assert!(output.is_empty());
}

#[tokio::test]
async fn test_output_order_is_preserved() {
    let mock_server = MockServer::start().await;

    let entries = json!([{"step": 1}, {"step": 2}, {"step": 3}, "done"]);
    Mock::given(method("POST"))
        .and(path("/run-task/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "success", "output": entries})),
        )
        .mount(&mock_server)
        .await;

    let runner = HttpTaskRunner::new(mock_server.uri());
    let output = runner.run_task("multi_step").await.unwrap();

    assert_eq!(
        output,
        vec![json!({"step": 1}), json!({"step": 2}), json!({"step": 3}), json!("done")]
    );
}

#[tokio::test]
async fn test_success_without_output_field_is_empty_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/run-task/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
        .mount(&mock_server)
        .await;

    let runner = HttpTaskRunner::new(mock_server.uri());
    let output = runner.run_task("quiet_task").await.unwrap();
    assert!(output.is_empty());
}

// ============================================================================
// Application-Level Failure
// ============================================================================

#[tokio::test]
async fn test_error_status_surfaces_server_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/run-task/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "error", "message": "unknown task"})),
        )
        .mount(&mock_server)
        .await;

    let runner = HttpTaskRunner::new(mock_server.uri());
    let err = runner.run_task("bad_task").await.unwrap_err();

    assert!(err.is_task_failure());
    assert_eq!(err.to_string(), "unknown task");
}

#[tokio::test]
async fn test_unknown_status_without_message_gets_fallback_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/run-task/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "failed"})))
        .mount(&mock_server)
        .await;

    let runner = HttpTaskRunner::new(mock_server.uri());
    let err = runner.run_task("odd_task").await.unwrap_err();

    assert!(err.is_task_failure());
    assert_eq!(err.to_string(), "no message provided");
}

// ============================================================================
// Transport-Level Failure
// ============================================================================

#[tokio::test]
async fn test_http_error_status_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/run-task/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let runner = HttpTaskRunner::new(mock_server.uri());
    let err = runner.run_task("backup_db").await.unwrap_err();

    assert!(!err.is_task_failure());
    assert!(matches!(err, RunnerError::Api { status: 500, .. }));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_network_error() {
    // Start a server only to grab a port nobody is listening on afterwards.
    // An unpooled server is required here: pooled servers from
    // `MockServer::start()` keep their listener open after drop.
    let mock_server = MockServer::builder().start().await;
    let uri = mock_server.uri();
    drop(mock_server);

    let runner = HttpTaskRunner::new(uri);
    let err = runner.run_task("backup_db").await.unwrap_err();

    assert!(!err.is_task_failure());
    assert!(matches!(err, RunnerError::Network(_)));
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/run-task/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&mock_server)
        .await;

    let runner = HttpTaskRunner::new(mock_server.uri());
    let err = runner.run_task("backup_db").await.unwrap_err();

    assert!(!err.is_task_failure());
    assert!(matches!(err, RunnerError::Parse(_)));
}
