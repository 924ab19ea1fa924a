//! PDF job operations: submission, status polling, and download.
//!
//! [`PdfResource`] is obtained from [`PdfyClient::pdfs`](crate::PdfyClient::pdfs)
//! and borrows the client, so operations share one immutable configuration
//! and connection pool. All operations are single requests except
//! [`wait_for`](PdfResource::wait_for), which is a fixed-interval polling
//! loop built on `tokio::time::sleep` — a suspension point, never a blocked
//! thread, so any number of waits can run concurrently.
//!
//! The server drives the lifecycle; the client only observes snapshots.
//! Concurrent callers waiting on the same job id are safe (stateless
//! re-reads), each with its own timer.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use pdfy_sdk::{PdfOptions, PdfyClient};
//!
//! # async fn run() -> pdfy_sdk::Result<()> {
//! let client = PdfyClient::from_api_key("pdfy_live_abc123")?;
//!
//! let pdf = client
//!     .pdfs()
//!     .create_and_download(
//!         "<h1>Hello</h1>",
//!         Some("hello.pdf"),
//!         Some(PdfOptions::a4_portrait()),
//!         Duration::from_secs(60),
//!     )
//!     .await?;
//! std::fs::write("hello.pdf", &pdf).unwrap();
//! # Ok(())
//! # }
//! ```
//!
//! # Cancellation
//!
//! [`wait_for`](PdfResource::wait_for) holds no state outside its own stack
//! frame, so dropping the future cancels the wait cleanly. Race it against a
//! shutdown signal with `tokio::select!` to abandon a wait before the
//! deadline.
//!
//! # Retries
//!
//! The SDK never retries on its own. The error classification on
//! [`ApiError`](crate::ApiError) exists so callers can implement a policy —
//! retrying chrome/internal/timeout errors with backoff is reasonable,
//! retrying validation or quota errors is not.

use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

use crate::client::PdfyClient;
use crate::error::{PdfyError, Result};
use crate::job::PdfJob;
use crate::options::PdfOptions;

/// Default polling window for [`PdfResource::wait_for`].
pub const DEFAULT_MAX_WAIT: Duration = Duration::from_secs(60);

/// Default interval between status polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Metadata header carrying the filename on the raw-HTML submission path.
pub const HEADER_FILENAME: &str = "X-PDF-Filename";
/// Metadata header carrying the paper format.
pub const HEADER_FORMAT: &str = "X-PDF-Format";
/// Metadata header carrying the orientation.
pub const HEADER_ORIENTATION: &str = "X-PDF-Orientation";
/// Metadata headers carrying the four margins and their unit.
pub const HEADER_MARGIN_TOP: &str = "X-PDF-Margin-Top";
/// Right margin header.
pub const HEADER_MARGIN_RIGHT: &str = "X-PDF-Margin-Right";
/// Bottom margin header.
pub const HEADER_MARGIN_BOTTOM: &str = "X-PDF-Margin-Bottom";
/// Left margin header.
pub const HEADER_MARGIN_LEFT: &str = "X-PDF-Margin-Left";
/// Margin unit header.
pub const HEADER_MARGIN_UNIT: &str = "X-PDF-Margin-Unit";

/// Operations on the `/pdfs` resource.
///
/// Borrowed from a [`PdfyClient`]; construct one per call site via
/// [`PdfyClient::pdfs`](crate::PdfyClient::pdfs).
pub struct PdfResource<'a> {
    client: &'a PdfyClient,
}

impl<'a> PdfResource<'a> {
    pub(crate) fn new(client: &'a PdfyClient) -> Self {
        Self { client }
    }

    /// Submit HTML for PDF generation (JSON path).
    ///
    /// Returns the initial job snapshot immediately; generation continues
    /// server-side. Poll with [`status`](Self::status) or
    /// [`wait_for`](Self::wait_for).
    ///
    /// # Errors
    ///
    /// [`PdfyError::Api`] for classified server errors (quota, rate limit,
    /// validation, ...), [`PdfyError::Transport`] for network failures.
    pub async fn create(
        &self,
        html: &str,
        filename: Option<&str>,
        options: Option<PdfOptions>,
    ) -> Result<PdfJob> {
        let payload = build_payload(html, filename, options.as_ref());
        let job: PdfJob = self.client.post_json("pdfs", &payload).await?;
        log::debug!("created job {} (status {})", job.job_id, job.status);
        Ok(job)
    }

    /// Submit HTML for PDF generation via the raw-HTML path.
    ///
    /// The HTML travels verbatim as a `text/html` body; filename and options
    /// are transmitted as `X-PDF-*` metadata headers. Only the options with a
    /// header equivalent (format, orientation, margins) are carried — an
    /// alternate submission path, not a second protocol.
    pub async fn create_from_html(
        &self,
        html: &str,
        filename: Option<&str>,
        options: Option<&PdfOptions>,
    ) -> Result<PdfJob> {
        let headers = metadata_headers(filename, options);
        let job: PdfJob = self
            .client
            .post_html("pdfs", html.to_string(), &headers)
            .await?;
        log::debug!("created job {} via html path", job.job_id);
        Ok(job)
    }

    /// Fetch the current snapshot of a job.
    ///
    /// A single request; does not imply progression.
    pub async fn status(&self, job_id: &str) -> Result<PdfJob> {
        self.client.get_json(&format!("pdfs/{job_id}/status")).await
    }

    /// Download the generated PDF bytes.
    ///
    /// Valid once the job is `completed`. Calling earlier is permitted; the
    /// server answers with a `PDF_NOT_READY` classified error rather than
    /// corrupt bytes, and the SDK does not retry on the caller's behalf.
    pub async fn download(&self, job_id: &str) -> Result<Bytes> {
        let bytes = self
            .client
            .get_bytes(&format!("pdfs/{job_id}/download"))
            .await?;
        log::debug!("downloaded {} bytes for job {}", bytes.len(), job_id);
        Ok(bytes)
    }

    /// Poll a job at a fixed interval until it reaches a terminal status.
    ///
    /// Returns the snapshot as soon as the status is `completed`. Statuses
    /// the SDK does not recognize are treated as still in progress.
    ///
    /// # Errors
    ///
    /// - [`PdfyError::JobFailed`] immediately (no further polls) when the
    ///   status is `failed`, carrying the job's recorded error message.
    /// - [`PdfyError::WaitTimeout`] once elapsed wall-clock time reaches
    ///   `max_wait` without a terminal status. This is a client-side
    ///   condition, distinct from the server's `TIMEOUT_ERROR` code. The
    ///   loop never overshoots by more than one poll interval.
    /// - Any error from the underlying status requests, unretried.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use std::time::Duration;
    /// # async fn run(client: pdfy_sdk::PdfyClient) -> pdfy_sdk::Result<()> {
    /// let job = client
    ///     .pdfs()
    ///     .wait_for("job_123", Duration::from_secs(120), Duration::from_secs(2))
    ///     .await?;
    /// assert!(job.is_completed());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn wait_for(
        &self,
        job_id: &str,
        max_wait: Duration,
        poll_interval: Duration,
    ) -> Result<PdfJob> {
        let start = Instant::now();

        loop {
            let job = self.status(job_id).await?;

            if job.is_completed() {
                log::debug!("job {} completed after {:?}", job_id, start.elapsed());
                return Ok(job);
            }

            if job.is_failed() {
                let message = job
                    .error_message
                    .unwrap_or_else(|| "no error message recorded".to_string());
                return Err(PdfyError::JobFailed {
                    job_id: job_id.to_string(),
                    message,
                });
            }

            log::debug!(
                "job {} still {} after {:?}",
                job_id,
                job.status,
                start.elapsed()
            );

            if start.elapsed() >= max_wait {
                return Err(PdfyError::WaitTimeout {
                    job_id: job_id.to_string(),
                    waited: start.elapsed(),
                });
            }

            tokio::time::sleep(poll_interval).await;
        }
    }

    /// Submit HTML and wait for the job to complete.
    ///
    /// Composes [`create`](Self::create) and [`wait_for`](Self::wait_for)
    /// with the default poll interval.
    pub async fn create_and_wait(
        &self,
        html: &str,
        filename: Option<&str>,
        options: Option<PdfOptions>,
        max_wait: Duration,
    ) -> Result<PdfJob> {
        let job = self.create(html, filename, options).await?;
        self.wait_for(&job.job_id, max_wait, DEFAULT_POLL_INTERVAL)
            .await
    }

    /// Submit HTML, wait for completion, and download the PDF bytes.
    pub async fn create_and_download(
        &self,
        html: &str,
        filename: Option<&str>,
        options: Option<PdfOptions>,
        max_wait: Duration,
    ) -> Result<Bytes> {
        let job = self
            .create_and_wait(html, filename, options, max_wait)
            .await?;
        self.download(&job.job_id).await
    }
}

/// Build the JSON submission payload, omitting absent members.
fn build_payload(
    html: &str,
    filename: Option<&str>,
    options: Option<&PdfOptions>,
) -> serde_json::Value {
    let mut payload = serde_json::Map::new();
    payload.insert("html".to_string(), html.into());
    if let Some(filename) = filename {
        payload.insert("filename".to_string(), filename.into());
    }
    if let Some(options) = options {
        payload.insert(
            "options".to_string(),
            serde_json::Value::Object(options.to_wire()),
        );
    }
    serde_json::Value::Object(payload)
}

/// Translate filename and options into the `X-PDF-*` metadata headers used
/// by the raw-HTML submission path. Unset fields produce no header.
fn metadata_headers(filename: Option<&str>, options: Option<&PdfOptions>) -> Vec<(String, String)> {
    let mut headers = Vec::new();

    if let Some(filename) = filename {
        headers.push((HEADER_FILENAME.to_string(), filename.to_string()));
    }

    if let Some(options) = options {
        let mut push = |name: &str, value: Option<String>| {
            if let Some(value) = value {
                headers.push((name.to_string(), value));
            }
        };
        push(HEADER_FORMAT, options.format.clone());
        push(HEADER_ORIENTATION, options.orientation.clone());
        push(HEADER_MARGIN_TOP, options.margin_top.map(|m| m.to_string()));
        push(
            HEADER_MARGIN_RIGHT,
            options.margin_right.map(|m| m.to_string()),
        );
        push(
            HEADER_MARGIN_BOTTOM,
            options.margin_bottom.map(|m| m.to_string()),
        );
        push(
            HEADER_MARGIN_LEFT,
            options.margin_left.map(|m| m.to_string()),
        );
        push(HEADER_MARGIN_UNIT, options.margin_unit.clone());
    }

    headers
}

// ============================================================================
// Unit Tests
// ============================================================================
