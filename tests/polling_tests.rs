//! Polling behavior tests for `wait_for` and its compositions.
//!
//! Intervals are scaled down so the elapsed-time semantics are observable
//! without slowing the suite: the loop polls at a fixed interval, returns on
//! `completed`, fails fast on `failed`, and times out client-side once the
//! wall-clock window is spent.

use httpmock::prelude::*;
use pdfy_sdk::prelude::*;
use serde_json::json;
use std::time::{Duration, Instant};
use tokio::task::JoinSet;

const API_KEY: &str = "test-api-key";

fn client_for(server: &MockServer) -> PdfyClient {
    PdfyClient::new(
        ClientConfigBuilder::new(API_KEY)
            .base_url(server.base_url())
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap(),
    )
    .unwrap()
}

fn status_body(job_id: &str, status: &str) -> serde_json::Value {
    json!({"data": {"job_id": job_id, "status": status}})
}

/// wait_for returns the completed snapshot once the job transitions, here on
/// the second poll.
#[tokio::test]
async fn test_wait_for_returns_on_completion() {
    let server = MockServer::start_async().await;
    let mut processing = server
        .mock_async(|when, then| {
            when.method(GET).path("/pdfs/job_p/status");
            then.status(200).json_body(status_body("job_p", "processing"));
        })
        .await;

    let client = client_for(&server);
    let waiter = tokio::spawn(async move {
        client
            .pdfs()
            .wait_for("job_p", Duration::from_secs(10), Duration::from_millis(200))
            .await
    });

    // Let the first poll observe "processing", then flip the job to
    // "completed" before the second poll lands.
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(processing.hits_async().await, 1);
    processing.delete_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/pdfs/job_p/status");
            then.status(200).json_body(status_body("job_p", "completed"));
        })
        .await;

    let job = waiter.await.unwrap().unwrap();
    assert!(job.is_completed());
    assert_eq!(job.job_id, "job_p");
}

/// A job stuck in a non-terminal status times out client-side, within one
/// poll interval past the window, and the error is WaitTimeout rather than
/// anything server-reported.
#[tokio::test]
async fn test_wait_for_times_out() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/pdfs/job_stuck/status");
            then.status(200)
                .json_body(status_body("job_stuck", "processing"));
        })
        .await;

    let client = client_for(&server);
    let max_wait = Duration::from_millis(500);
    let poll_interval = Duration::from_millis(200);

    let start = Instant::now();
    let error = client
        .pdfs()
        .wait_for("job_stuck", max_wait, poll_interval)
        .await
        .unwrap_err();
    let elapsed = start.elapsed();

    match error {
        PdfyError::WaitTimeout { job_id, waited } => {
            assert_eq!(job_id, "job_stuck");
            assert!(waited >= max_wait);
        }
        other => panic!("expected WaitTimeout, got {other:?}"),
    }
    // Never more than one extra interval past the window (plus slack for CI).
    assert!(elapsed < max_wait + poll_interval + Duration::from_millis(300));
    // Fixed interval, no backoff: polls at ~0ms, 200ms, 400ms, 600ms.
    assert!(mock.hits_async().await >= 3);
}

/// A terminal failed status aborts the wait immediately with the job's
/// recorded error message, not a timeout.
#[tokio::test]
async fn test_wait_for_surfaces_job_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/pdfs/job_f/status");
            then.status(200).json_body(json!({
                "data": {
                    "job_id": "job_f",
                    "status": "failed",
                    "error_message": "Chrome crashed while rendering",
                    "error_code": "CHROME_ERROR",
                    "failed_at": "2025-01-01T10:00:09Z"
                }
            }));
        })
        .await;

    let client = client_for(&server);
    let start = Instant::now();
    let error = client
        .pdfs()
        .wait_for("job_f", Duration::from_secs(30), Duration::from_secs(2))
        .await
        .unwrap_err();

    match error {
        PdfyError::JobFailed { job_id, message } => {
            assert_eq!(job_id, "job_f");
            assert_eq!(message, "Chrome crashed while rendering");
        }
        other => panic!("expected JobFailed, got {other:?}"),
    }
    // Failure is detected on the first poll; no waiting out the window.
    assert!(start.elapsed() < Duration::from_secs(2));
}

/// Unrecognized status strings are tolerated and treated as still in
/// progress, so the loop keeps polling instead of erroring.
#[tokio::test]
async fn test_wait_for_tolerates_unknown_status() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/pdfs/job_u/status");
            then.status(200)
                .json_body(status_body("job_u", "warming_up"));
        })
        .await;

    let client = client_for(&server);
    let error = client
        .pdfs()
        .wait_for(
            "job_u",
            Duration::from_millis(300),
            Duration::from_millis(100),
        )
        .await
        .unwrap_err();

    assert!(matches!(error, PdfyError::WaitTimeout { .. }));
    assert!(mock.hits_async().await >= 2, "should keep polling");
}

/// A transport or API error from a status poll propagates unretried.
#[tokio::test]
async fn test_wait_for_propagates_status_errors() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/pdfs/job_gone/status");
            then.status(404).json_body(json!({
                "message": "PDF job not found",
                "error_code": "JOB_NOT_FOUND"
            }));
        })
        .await;

    let client = client_for(&server);
    let error = client
        .pdfs()
        .wait_for("job_gone", Duration::from_secs(10), Duration::from_millis(100))
        .await
        .unwrap_err();

    match error {
        PdfyError::Api(api) => assert!(api.is_job_not_found()),
        other => panic!("expected Api error, got {other:?}"),
    }
    assert_eq!(mock.hits_async().await, 1, "no retry on poll errors");
}

/// create_and_wait composes submission and polling.
#[tokio::test]
async fn test_create_and_wait() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/pdfs");
            then.status(201).json_body(status_body("job_cw", "pending"));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/pdfs/job_cw/status");
            then.status(200).json_body(status_body("job_cw", "completed"));
        })
        .await;

    let client = client_for(&server);
    let job = client
        .pdfs()
        .create_and_wait("<h1>CW</h1>", None, None, Duration::from_secs(10))
        .await
        .unwrap();

    assert!(job.is_completed());
}

/// Multiple concurrent waits on the same job id are safe: the loop is
/// stateless re-reads, each task with its own timer.
#[tokio::test]
async fn test_concurrent_waits_on_same_job() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/pdfs/job_shared/status");
            then.status(200)
                .json_body(status_body("job_shared", "completed"));
        })
        .await;

    let client = client_for(&server);
    let mut tasks = JoinSet::new();
    for _ in 0..8 {
        let client = client.clone();
        tasks.spawn(async move {
            client
                .pdfs()
                .wait_for(
                    "job_shared",
                    Duration::from_secs(10),
                    Duration::from_millis(100),
                )
                .await
        });
    }

    while let Some(result) = tasks.join_next().await {
        let job = result.expect("task should not panic").expect("wait should succeed");
        assert!(job.is_completed());
    }
}

/// Dropping the wait future cancels the poll loop: no further status
/// requests are issued after the select! races it out.
#[tokio::test]
async fn test_wait_for_is_cancellable() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/pdfs/job_c/status");
            then.status(200).json_body(status_body("job_c", "processing"));
        })
        .await;

    let client = client_for(&server);
    let pdfs = client.pdfs();

    tokio::select! {
        _ = pdfs.wait_for("job_c", Duration::from_secs(60), Duration::from_millis(100)) => {
            panic!("wait should not finish first");
        }
        _ = tokio::time::sleep(Duration::from_millis(250)) => {}
    }

    let hits_at_cancel = mock.hits_async().await;
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(
        mock.hits_async().await,
        hits_at_cancel,
        "no polls after cancellation"
    );
}
