//! Job snapshots and the server-driven status lifecycle.
//!
//! A [`PdfJob`] is an immutable snapshot of server-reported state, built
//! fresh from every API response and never mutated. Each poll supersedes the
//! previous snapshot; the job identifier is the only identity.
//!
//! The lifecycle is observed, not driven, by the client:
//!
//! ```text
//! pending → queued → processing → { completed | failed }
//! ```
//!
//! Status strings the SDK does not recognize are preserved in
//! [`JobStatus::Other`] and treated as non-terminal, so new server-side
//! states never break deserialization or the polling loop.

use serde::{Deserialize, Serialize};

/// Server-reported status of a PDF job.
///
/// `completed` and `failed` are terminal; everything else, including
/// unrecognized future values, counts as still in progress.
///
/// # Example
///
/// ```rust
/// use pdfy_sdk::JobStatus;
///
/// let status: JobStatus = "processing".into();
/// assert!(status.is_in_progress());
/// assert!(!status.is_terminal());
///
/// let unknown: JobStatus = "paused".into();
/// assert!(unknown.is_in_progress());
/// assert_eq!(unknown.label(), "Paused");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobStatus {
    /// Accepted, not yet queued.
    Pending,
    /// Waiting for a render worker.
    Queued,
    /// A worker is rendering the PDF.
    Processing,
    /// Terminal: the PDF is ready for download.
    Completed,
    /// Terminal: generation failed; see the job's error fields.
    Failed,
    /// Any status string the SDK does not recognize, kept verbatim.
    Other(String),
}

impl JobStatus {
    /// Parse a wire status string.
    pub fn parse(status: &str) -> Self {
        match status {
            "pending" => Self::Pending,
            "queued" => Self::Queued,
            "processing" => Self::Processing,
            "completed" => Self::Completed,
            "failed" => Self::Failed,
            other => Self::Other(other.to_string()),
        }
    }

    /// The wire representation of this status.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Queued => "queued",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Other(status) => status,
        }
    }

    /// True only for `completed`.
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// True only for `failed`.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }

    /// True for any non-terminal status, unknown values included.
    pub fn is_in_progress(&self) -> bool {
        !self.is_terminal()
    }

    /// True for `completed` or `failed`; no further transitions expected.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }

    /// A display label: "pending" becomes "Pending" and so on. Unknown
    /// statuses get their first letter capitalized.
    pub fn label(&self) -> String {
        match self {
            Self::Pending => "Pending".to_string(),
            Self::Queued => "Queued".to_string(),
            Self::Processing => "Processing".to_string(),
            Self::Completed => "Completed".to_string(),
            Self::Failed => "Failed".to_string(),
            Self::Other(status) => {
                let mut chars = status.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            }
        }
    }
}

impl From<String> for JobStatus {
    fn from(status: String) -> Self {
        Self::parse(&status)
    }
}

impl From<&str> for JobStatus {
    fn from(status: &str) -> Self {
        Self::parse(status)
    }
}

impl From<JobStatus> for String {
    fn from(status: JobStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable snapshot of a PDF job as reported by the API.
///
/// Deserialized from the `data` member of the response envelope. Optional
/// fields are populated only when the server sent them; timestamps are kept
/// as the server's opaque strings.
///
/// # Example
///
/// ```rust
/// use pdfy_sdk::PdfJob;
///
/// let job: PdfJob = serde_json::from_value(serde_json::json!({
///     "job_id": "job_123",
///     "status": "completed",
///     "filename": "invoice.pdf",
///     "file_size": 52_431,
///     "download_url": "https://pdfy.app/api/v1/pdfs/job_123/download"
/// }))
/// .unwrap();
///
/// assert!(job.status.is_completed());
/// assert_eq!(job.file_name.as_deref(), Some("invoice.pdf"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PdfJob {
    /// Server-assigned opaque job identifier.
    pub job_id: String,

    /// Current lifecycle status.
    pub status: JobStatus,

    /// Optional informational message from the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// File name of the generated PDF, once known.
    #[serde(default, rename = "filename", skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    /// Size of the generated PDF in bytes, once known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,

    /// Download URL, populated on completion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,

    /// Failure message, populated when the job failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    /// Failure code, populated when the job failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,

    /// Submission timestamp, as sent by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Completion timestamp, as sent by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,

    /// Failure timestamp, as sent by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_at: Option<String>,
}

impl PdfJob {
    /// True when the job reached `completed`.
    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }

    /// True when the job reached `failed`.
    pub fn is_failed(&self) -> bool {
        self.status.is_failed()
    }

    /// True while the job has not reached a terminal status.
    pub fn is_in_progress(&self) -> bool {
        self.status.is_in_progress()
    }

    /// Display label for the current status.
    pub fn status_label(&self) -> String {
        self.status.label()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
