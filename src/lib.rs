//! # pdfy-sdk
//!
//! Async Rust client for the Pdfy HTML-to-PDF API.
//!
//! This crate wraps the Pdfy REST API: it builds authenticated requests,
//! serializes PDF options, deserializes job records, polls for completion,
//! and maps API error responses to typed errors with user-facing messages.
//! PDF rendering itself happens server-side; the SDK submits jobs and
//! observes their lifecycle.
//!
//! ## Features
//!
//! - **Job submission**: JSON path, or raw HTML with metadata headers
//! - **Polling**: non-blocking `wait_for` loop with a wall-clock deadline
//! - **Error classification**: machine codes, HTTP status, and canonical
//!   user-facing messages, independently inspectable
//! - **Typed options**: immutable [`PdfOptions`] with presets; unset fields
//!   never reach the wire
//! - **Environment configuration**: optional `app.env` + `PDFY_*` variables
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              Your Application               │
//! └─────────────────┬───────────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────────┐
//! │                PdfyClient                   │
//! │   bearer auth · content-type switching ·    │
//! │   envelope parsing · error classification   │
//! └─────────────────┬───────────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────────┐
//! │         PdfResource (/pdfs)                 │
//! │   create · status · wait_for · download     │
//! └─────────────────┬───────────────────────────┘
//!                   │ HTTPS (reqwest)
//!                   ▼
//! ┌─────────────────────────────────────────────┐
//! │           Pdfy API (pdfy.app)               │
//! │      Chrome-based HTML→PDF rendering        │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use pdfy_sdk::{PdfOptions, PdfyClient};
//!
//! #[tokio::main]
//! async fn main() -> pdfy_sdk::Result<()> {
//!     let client = PdfyClient::from_api_key("pdfy_live_abc123")?;
//!
//!     // Submit, poll until completed, download.
//!     let pdf = client
//!         .pdfs()
//!         .create_and_download(
//!             "<html><body><h1>Invoice #42</h1></body></html>",
//!             Some("invoice-42.pdf"),
//!             Some(PdfOptions::a4_portrait()),
//!             Duration::from_secs(60),
//!         )
//!         .await?;
//!
//!     std::fs::write("invoice-42.pdf", &pdf).unwrap();
//!     Ok(())
//! }
//! ```
//!
//! Or drive the lifecycle yourself:
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use pdfy_sdk::PdfyClient;
//!
//! # async fn run() -> pdfy_sdk::Result<()> {
//! let client = PdfyClient::from_api_key("pdfy_live_abc123")?;
//! let pdfs = client.pdfs();
//!
//! let job = pdfs.create("<h1>Hello</h1>", None, None).await?;
//! println!("job {} is {}", job.job_id, job.status_label());
//!
//! let job = pdfs
//!     .wait_for(&job.job_id, Duration::from_secs(60), Duration::from_secs(2))
//!     .await?;
//! let bytes = pdfs.download(&job.job_id).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! With the `env-config` feature (enabled by default), the client
//! configuration can be loaded from the environment, with an optional
//! `app.env` file in the working directory:
//!
//! ```text
//! PDFY_API_KEY=pdfy_live_abc123
//! PDFY_BASE_URL=https://pdfy.app/api/v1
//! PDFY_TIMEOUT_SECONDS=30
//! ```
//!
//! | Variable | Type | Default | Description |
//! |----------|------|---------|-------------|
//! | `PDFY_API_KEY` | String | — (required) | API key from your Pdfy dashboard |
//! | `PDFY_BASE_URL` | String | `https://pdfy.app/api/v1` | API base URL |
//! | `PDFY_TIMEOUT_SECONDS` | u64 | 30 | Per-request timeout |
//!
//! ```rust,ignore
//! let client = PdfyClient::new(pdfy_sdk::config::env::from_env()?)?;
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, PdfyError>`](Result). Server
//! errors carry a classified [`ApiError`] whose predicates and
//! [`user_message`](ApiError::user_message) never require matching message
//! text:
//!
//! ```rust,ignore
//! match pdfs.create(html, None, None).await {
//!     Ok(job) => println!("submitted {}", job.job_id),
//!     Err(PdfyError::Api(e)) if e.is_quota_exceeded() => {
//!         // Don't retry: the daily limit is spent.
//!         eprintln!("{}", e.user_message());
//!     }
//!     Err(PdfyError::Api(e)) if e.is_chrome_error() || e.is_internal_error() => {
//!         // Transient server trouble: a retry with backoff is reasonable.
//!     }
//!     Err(e) => eprintln!("error: {}", e),
//! }
//! ```
//!
//! The SDK performs no retries of its own; the classification exists so
//! callers can decide.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `env-config` | Environment-based configuration via `dotenvy` (default) |

#![doc(html_root_url = "https://docs.rs/pdfy-sdk/0.1.0")]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// ============================================================================
// Modules
// ============================================================================

pub mod client;
pub mod config;
pub mod error;
pub mod job;
pub mod options;
pub mod prelude;
pub mod resource;

// ============================================================================
// Re-exports (Public API)
// ============================================================================

pub use client::PdfyClient;
pub use config::{ClientConfig, ClientConfigBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{ApiError, ErrorCode, GENERIC_ERROR_MESSAGE, PdfyError, Result};
pub use job::{JobStatus, PdfJob};
pub use options::PdfOptions;
pub use resource::{DEFAULT_MAX_WAIT, DEFAULT_POLL_INTERVAL, PdfResource};

// Feature-gated re-exports
#[cfg(feature = "env-config")]
pub use config::env::from_env;
