//! Wire-level integration tests against a mocked Pdfy API.
//!
//! These tests exercise the full request/response path: authentication
//! headers, content-type switching, envelope parsing, binary downloads and
//! error classification.

use httpmock::prelude::*;
use pdfy_sdk::prelude::*;
use serde_json::json;
use std::time::Duration;

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

/// create() POSTs the JSON payload with bearer auth and parses the job from
/// the data envelope.
#[tokio::test]
async fn test_create_submits_json_and_parses_job() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/pdfs")
                .header("authorization", format!("Bearer {API_KEY}"))
                .header("content-type", "application/json")
                .json_body(json!({"html": "<h1>Hi</h1>"}));
            then.status(201).json_body(json!({
                "data": {
                    "job_id": "job_abc",
                    "status": "pending",
                    "created_at": "2025-01-01T10:00:00Z"
                }
            }));
        })
        .await;

    let client = client_for(&server);
    let job = client.pdfs().create("<h1>Hi</h1>", None, None).await.unwrap();

    mock.assert_async().await;
    assert_eq!(job.job_id, "job_abc");
    assert_eq!(job.status, JobStatus::Pending);
    assert!(job.is_in_progress());
}

/// Filename and options are included in the payload, options in wire form
/// with unset fields absent.
#[tokio::test]
async fn test_create_includes_filename_and_options() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/pdfs").json_body(json!({
                "html": "<p>doc</p>",
                "filename": "doc.pdf",
                "options": {
                    "format": "A4",
                    "orientation": "portrait",
                    "margin_top": 1.0,
                    "margin_right": 1.0,
                    "margin_bottom": 1.0,
                    "margin_left": 1.0,
                    "margin_unit": "cm",
                    "print_background": true
                }
            }));
            then.status(201).json_body(json!({
                "data": {"job_id": "job_1", "status": "queued"}
            }));
        })
        .await;

    let client = client_for(&server);
    let job = client
        .pdfs()
        .create("<p>doc</p>", Some("doc.pdf"), Some(PdfOptions::a4_portrait()))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(job.status, JobStatus::Queued);
}

/// The raw-HTML path sends the body verbatim as text/html with X-PDF-*
/// metadata headers.
#[tokio::test]
async fn test_create_from_html_sends_raw_body_and_headers() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/pdfs")
                .header("authorization", format!("Bearer {API_KEY}"))
                .header("content-type", "text/html")
                .header("x-pdf-filename", "letter.pdf")
                .header("x-pdf-format", "A4")
                .header("x-pdf-orientation", "landscape")
                .header("x-pdf-margin-top", "1")
                .header("x-pdf-margin-unit", "cm")
                .body("<h1>Letter</h1>");
            then.status(201).json_body(json!({
                "data": {"job_id": "job_html", "status": "pending"}
            }));
        })
        .await;

    let client = client_for(&server);
    let options = PdfOptions::a4_landscape();
    let job = client
        .pdfs()
        .create_from_html("<h1>Letter</h1>", Some("letter.pdf"), Some(&options))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(job.job_id, "job_html");
}

/// A structured error response becomes a classified ApiError with code,
/// status and raw payload.
#[tokio::test]
async fn test_quota_error_is_classified() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/pdfs");
            then.status(402).json_body(json!({
                "message": "Daily quota exhausted",
                "error_code": "QUOTA_EXCEEDED",
                "quota": {"used": 100, "limit": 100}
            }));
        })
        .await;

    let client = client_for(&server);
    let error = client
        .pdfs()
        .create("<p>over quota</p>", None, None)
        .await
        .unwrap_err();

    match error {
        PdfyError::Api(api) => {
            assert!(api.is_quota_exceeded());
            assert!(api.is_client_error());
            assert!(!api.is_server_error());
            assert_eq!(api.http_status(), 402);
            assert_eq!(api.message(), "Daily quota exhausted");
            assert_eq!(
                api.user_message(),
                "Daily PDF limit reached and no credits available."
            );
            assert_eq!(api.raw()["quota"]["limit"], 100);
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

/// Error bodies with missing fields fall back to the generic message and
/// UNKNOWN_ERROR.
#[tokio::test]
async fn test_error_body_defaults() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/pdfs/job_x/status");
            then.status(500).json_body(json!({"oops": true}));
        })
        .await;

    let client = client_for(&server);
    let error = client.pdfs().status("job_x").await.unwrap_err();

    match error {
        PdfyError::Api(api) => {
            assert_eq!(api.message(), "API request failed");
            assert_eq!(api.code().as_str(), "UNKNOWN_ERROR");
            assert!(api.is_server_error());
            assert!(api.is_internal_error());
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

/// status() fetches a snapshot from the status endpoint.
#[tokio::test]
async fn test_status_returns_snapshot() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/pdfs/job_abc/status")
                .header("authorization", format!("Bearer {API_KEY}"));
            then.status(200).json_body(json!({
                "data": {
                    "job_id": "job_abc",
                    "status": "completed",
                    "filename": "report.pdf",
                    "file_size": 2048,
                    "download_url": format!("{}/pdfs/job_abc/download", server.base_url()),
                    "completed_at": "2025-01-01T10:00:09Z"
                }
            }));
        })
        .await;

    let client = client_for(&server);
    let job = client.pdfs().status("job_abc").await.unwrap();

    mock.assert_async().await;
    assert!(job.is_completed());
    assert_eq!(job.file_name.as_deref(), Some("report.pdf"));
    assert_eq!(job.file_size, Some(2048));
    assert_eq!(job.status_label(), "Completed");
}

/// download() returns the raw body unparsed on success.
#[tokio::test]
async fn test_download_returns_raw_bytes() {
    let server = MockServer::start_async().await;
    let pdf_bytes = b"%PDF-1.7 fake pdf content";
    server
        .mock_async(|when, then| {
            when.method(GET).path("/pdfs/job_abc/download");
            then.status(200)
                .header("content-type", "application/pdf")
                .body(pdf_bytes);
        })
        .await;

    let client = client_for(&server);
    let bytes = client.pdfs().download("job_abc").await.unwrap();

    assert_eq!(&bytes[..], pdf_bytes);
}

/// Downloading before completion surfaces the classified not-ready error,
/// never bytes. The SDK does not retry.
#[tokio::test]
async fn test_download_not_ready_is_classified() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/pdfs/job_early/download");
            then.status(409).json_body(json!({
                "message": "PDF is still being generated",
                "error_code": "PDF_NOT_READY"
            }));
        })
        .await;

    let client = client_for(&server);
    let error = client.pdfs().download("job_early").await.unwrap_err();

    match error {
        PdfyError::Api(api) => {
            assert!(api.is_pdf_not_ready());
            assert_eq!(
                api.user_message(),
                "The PDF is still being generated. Please try again in a moment."
            );
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    // One request only: no implicit retry on not-ready.
    assert_eq!(mock.hits_async().await, 1);
}

/// create_and_download composes the whole flow: submit, poll, download.
#[tokio::test]
async fn test_create_and_download_full_flow() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/pdfs");
            then.status(201).json_body(json!({
                "data": {"job_id": "job_flow", "status": "pending"}
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/pdfs/job_flow/status");
            then.status(200).json_body(json!({
                "data": {"job_id": "job_flow", "status": "completed"}
            }));
        })
        .await;
    let download = server
        .mock_async(|when, then| {
            when.method(GET).path("/pdfs/job_flow/download");
            then.status(200).body(b"%PDF-1.7 flow");
        })
        .await;

    let client = client_for(&server);
    let bytes = client
        .pdfs()
        .create_and_download("<h1>Flow</h1>", None, None, Duration::from_secs(10))
        .await
        .unwrap();

    download.assert_async().await;
    assert_eq!(&bytes[..], b"%PDF-1.7 flow");
}

/// An unreachable server surfaces a transport error, not a classified one.
#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Port 9 (discard) is never a Pdfy API.
    let client = PdfyClient::new(
        ClientConfigBuilder::new(API_KEY)
            .base_url("http://127.0.0.1:9")
            .timeout(Duration::from_secs(1))
            .build()
            .unwrap(),
    )
    .unwrap();

    let error = client.pdfs().status("job_x").await.unwrap_err();
    assert!(matches!(error, PdfyError::Transport(_)));
}
