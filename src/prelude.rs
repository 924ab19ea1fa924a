//! Convenient imports for common usage patterns.
//!
//! This module re-exports the most commonly used types from `pdfy-sdk`,
//! allowing you to quickly get started with a single import.
//!
//! # Usage
//!
//! ```rust
//! use pdfy_sdk::prelude::*;
//! ```
//!
//! This imports:
//!
//! - [`PdfyClient`] - The authenticated API client
//! - [`ClientConfig`] / [`ClientConfigBuilder`] - Client configuration
//! - [`PdfResource`] - Job submission, polling and download operations
//! - [`PdfOptions`] - Render options with presets
//! - [`PdfJob`] / [`JobStatus`] - Job snapshots and lifecycle
//! - [`PdfyError`] / [`ApiError`] / [`ErrorCode`] - Error taxonomy
//! - [`Result`] - Result type alias
//!
//! # Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use pdfy_sdk::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = PdfyClient::from_api_key("pdfy_live_abc123")?;
//!     let job = client
//!         .pdfs()
//!         .create_and_wait("<h1>Hi</h1>", None, None, Duration::from_secs(60))
//!         .await?;
//!     println!("{} is {}", job.job_id, job.status_label());
//!     Ok(())
//! }
//! ```

// Core types
pub use crate::client::PdfyClient;
pub use crate::config::{ClientConfig, ClientConfigBuilder};
pub use crate::error::{ApiError, ErrorCode, PdfyError, Result};
pub use crate::job::{JobStatus, PdfJob};
pub use crate::options::PdfOptions;
pub use crate::resource::{DEFAULT_MAX_WAIT, DEFAULT_POLL_INTERVAL, PdfResource};

// Feature-gated exports
#[cfg(feature = "env-config")]
pub use crate::config::env::from_env;
