//! Error types for the Pdfy SDK.
//!
//! This module provides [`PdfyError`], a unified error type for all SDK
//! operations, the [`ApiError`] payload carried by server-reported failures,
//! the machine-readable [`ErrorCode`] taxonomy, and a convenient [`Result`]
//! type alias.
//!
//! Classification is always driven by the `error_code` field of the API's
//! structured error body, never by matching message text. This lets callers
//! build their own retry policies on top: chrome/internal/timeout errors are
//! sensible retry candidates, validation and quota errors are not. The SDK
//! itself never retries.
//!
//! # Example
//!
//! ```rust
//! use pdfy_sdk::{ApiError, ErrorCode, PdfyError};
//!
//! fn handle(error: PdfyError) {
//!     match error {
//!         PdfyError::Api(api) if api.is_rate_limited() => {
//!             eprintln!("slow down: {}", api.user_message());
//!         }
//!         PdfyError::Api(api) if api.is_validation_error() => {
//!             eprintln!("fix the input: {}", api.user_message());
//!         }
//!         PdfyError::WaitTimeout { job_id, .. } => {
//!             eprintln!("job {} still running, check back later", job_id);
//!         }
//!         e => eprintln!("error: {}", e),
//!     }
//! }
//! ```

use std::time::Duration;

// ============================================================================
// Error codes
// ============================================================================

/// Machine-readable error code reported by the Pdfy API.
///
/// Codes are parsed from the `error_code` field of the structured error body.
/// Unrecognized codes are preserved verbatim in [`ErrorCode::Unknown`] so that
/// new server-side codes degrade gracefully instead of failing to parse.
///
/// # Example
///
/// ```rust
/// use pdfy_sdk::ErrorCode;
///
/// assert_eq!(ErrorCode::parse("QUOTA_EXCEEDED"), ErrorCode::QuotaExceeded);
/// assert_eq!(
///     ErrorCode::parse("SOME_FUTURE_CODE"),
///     ErrorCode::Unknown("SOME_FUTURE_CODE".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    /// Daily quota exhausted and no credits available (`QUOTA_EXCEEDED`).
    QuotaExceeded,
    /// Too many requests in a short window (`RATE_LIMIT_EXCEEDED`).
    RateLimitExceeded,
    /// Submitted HTML is malformed (`INVALID_HTML`).
    InvalidHtml,
    /// Submitted HTML exceeds the size limit (`HTML_TOO_LARGE`).
    HtmlTooLarge,
    /// Submitted HTML contains disallowed constructs (`SECURITY_VIOLATION`).
    SecurityViolation,
    /// The rendering backend failed or is unavailable (`CHROME_ERROR`).
    ChromeError,
    /// Server-side generation timed out (`TIMEOUT_ERROR`).
    TimeoutError,
    /// Rendering exceeded the memory limit (`MEMORY_LIMIT_EXCEEDED`).
    MemoryLimitExceeded,
    /// The generated artifact could not be persisted (`STORAGE_ERROR`).
    StorageError,
    /// No PDF exists for the given job id (`PDF_NOT_FOUND`).
    PdfNotFound,
    /// The PDF is not finished rendering yet (`PDF_NOT_READY`).
    PdfNotReady,
    /// No job exists for the given id (`JOB_NOT_FOUND`).
    JobNotFound,
    /// Unclassified server-side failure (`INTERNAL_ERROR`).
    InternalError,
    /// Any code the SDK does not recognize, kept verbatim.
    ///
    /// An empty or missing `error_code` field maps to
    /// `Unknown("UNKNOWN_ERROR")`.
    Unknown(String),
}

impl ErrorCode {
    /// Parse a wire code string into an [`ErrorCode`].
    ///
    /// Empty input maps to `Unknown("UNKNOWN_ERROR")`, matching the API's
    /// fallback for error bodies with no code.
    pub fn parse(code: &str) -> Self {
        match code {
            "QUOTA_EXCEEDED" => Self::QuotaExceeded,
            "RATE_LIMIT_EXCEEDED" => Self::RateLimitExceeded,
            "INVALID_HTML" => Self::InvalidHtml,
            "HTML_TOO_LARGE" => Self::HtmlTooLarge,
            "SECURITY_VIOLATION" => Self::SecurityViolation,
            "CHROME_ERROR" => Self::ChromeError,
            "TIMEOUT_ERROR" => Self::TimeoutError,
            "MEMORY_LIMIT_EXCEEDED" => Self::MemoryLimitExceeded,
            "STORAGE_ERROR" => Self::StorageError,
            "PDF_NOT_FOUND" => Self::PdfNotFound,
            "PDF_NOT_READY" => Self::PdfNotReady,
            "JOB_NOT_FOUND" => Self::JobNotFound,
            "INTERNAL_ERROR" => Self::InternalError,
            "" => Self::Unknown("UNKNOWN_ERROR".to_string()),
            other => Self::Unknown(other.to_string()),
        }
    }

    /// The wire representation of this code.
    pub fn as_str(&self) -> &str {
        match self {
            Self::QuotaExceeded => "QUOTA_EXCEEDED",
            Self::RateLimitExceeded => "RATE_LIMIT_EXCEEDED",
            Self::InvalidHtml => "INVALID_HTML",
            Self::HtmlTooLarge => "HTML_TOO_LARGE",
            Self::SecurityViolation => "SECURITY_VIOLATION",
            Self::ChromeError => "CHROME_ERROR",
            Self::TimeoutError => "TIMEOUT_ERROR",
            Self::MemoryLimitExceeded => "MEMORY_LIMIT_EXCEEDED",
            Self::StorageError => "STORAGE_ERROR",
            Self::PdfNotFound => "PDF_NOT_FOUND",
            Self::PdfNotReady => "PDF_NOT_READY",
            Self::JobNotFound => "JOB_NOT_FOUND",
            Self::InternalError => "INTERNAL_ERROR",
            Self::Unknown(code) => code,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Classified API errors
// ============================================================================

/// Generic fallback sentence for errors with no recognized code and no
/// server-supplied message.
pub const GENERIC_ERROR_MESSAGE: &str =
    "An error occurred while generating your PDF. Please try again later.";

/// A classified error returned by the Pdfy API.
///
/// Carries the server's human-readable message, the HTTP status code of the
/// response (0 when the error did not come from an HTTP response), the parsed
/// [`ErrorCode`], and the full raw error body for diagnostics. Status and code
/// are independently inspectable.
///
/// # Example
///
/// ```rust
/// use pdfy_sdk::{ApiError, ErrorCode};
///
/// let error = ApiError::new(
///     "Daily quota reached".to_string(),
///     402,
///     ErrorCode::QuotaExceeded,
///     serde_json::json!({"message": "Daily quota reached"}),
/// );
///
/// assert!(error.is_quota_exceeded());
/// assert!(error.is_client_error());
/// assert!(!error.is_server_error());
/// ```
#[derive(Debug, Clone)]
pub struct ApiError {
    message: String,
    http_status: u16,
    code: ErrorCode,
    raw: serde_json::Value,
}

impl ApiError {
    /// Create a classified error from its parts.
    pub fn new(message: String, http_status: u16, code: ErrorCode, raw: serde_json::Value) -> Self {
        Self {
            message,
            http_status,
            code,
            raw,
        }
    }

    /// The server-supplied error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The HTTP status of the failing response (0 if not from a response).
    pub fn http_status(&self) -> u16 {
        self.http_status
    }

    /// The parsed machine error code.
    pub fn code(&self) -> &ErrorCode {
        &self.code
    }

    /// The full raw error body as returned by the API.
    pub fn raw(&self) -> &serde_json::Value {
        &self.raw
    }

    /// True for `QUOTA_EXCEEDED`.
    pub fn is_quota_exceeded(&self) -> bool {
        self.code == ErrorCode::QuotaExceeded
    }

    /// True for `RATE_LIMIT_EXCEEDED`.
    pub fn is_rate_limited(&self) -> bool {
        self.code == ErrorCode::RateLimitExceeded
    }

    /// True for any of the input-validation codes: `INVALID_HTML`,
    /// `HTML_TOO_LARGE`, `SECURITY_VIOLATION`.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::InvalidHtml | ErrorCode::HtmlTooLarge | ErrorCode::SecurityViolation
        )
    }

    /// True for `CHROME_ERROR` (rendering backend failure).
    pub fn is_chrome_error(&self) -> bool {
        self.code == ErrorCode::ChromeError
    }

    /// True for a server-reported `TIMEOUT_ERROR`.
    ///
    /// Distinct from [`PdfyError::WaitTimeout`], which is the client giving up
    /// on its own polling deadline.
    pub fn is_timeout_error(&self) -> bool {
        self.code == ErrorCode::TimeoutError
    }

    /// True for `MEMORY_LIMIT_EXCEEDED`.
    pub fn is_memory_limit_error(&self) -> bool {
        self.code == ErrorCode::MemoryLimitExceeded
    }

    /// True for `STORAGE_ERROR`.
    pub fn is_storage_error(&self) -> bool {
        self.code == ErrorCode::StorageError
    }

    /// True for `PDF_NOT_FOUND`.
    pub fn is_pdf_not_found(&self) -> bool {
        self.code == ErrorCode::PdfNotFound
    }

    /// True for `PDF_NOT_READY`.
    pub fn is_pdf_not_ready(&self) -> bool {
        self.code == ErrorCode::PdfNotReady
    }

    /// True for `JOB_NOT_FOUND`.
    pub fn is_job_not_found(&self) -> bool {
        self.code == ErrorCode::JobNotFound
    }

    /// True when the HTTP status is in the 4xx range.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.http_status)
    }

    /// True when the HTTP status is 500 or above.
    pub fn is_server_error(&self) -> bool {
        self.http_status >= 500
    }

    /// True for `INTERNAL_ERROR`, or for any 5xx response regardless of code.
    pub fn is_internal_error(&self) -> bool {
        self.code == ErrorCode::InternalError || self.is_server_error()
    }

    /// A canonical, user-facing sentence for this error.
    ///
    /// The mapping is a pure function of the error code. For unrecognized
    /// codes the server's raw message is returned, and if that is empty,
    /// [`GENERIC_ERROR_MESSAGE`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use pdfy_sdk::{ApiError, ErrorCode};
    ///
    /// let error = ApiError::new(
    ///     String::new(),
    ///     429,
    ///     ErrorCode::RateLimitExceeded,
    ///     serde_json::Value::Null,
    /// );
    /// assert_eq!(
    ///     error.user_message(),
    ///     "Too many requests. Please wait before trying again."
    /// );
    /// ```
    pub fn user_message(&self) -> String {
        match &self.code {
            ErrorCode::QuotaExceeded => {
                "Daily PDF limit reached and no credits available.".to_string()
            }
            ErrorCode::RateLimitExceeded => {
                "Too many requests. Please wait before trying again.".to_string()
            }
            ErrorCode::InvalidHtml => {
                "The provided HTML content is invalid or malformed.".to_string()
            }
            ErrorCode::HtmlTooLarge => "The HTML content is too large to process.".to_string(),
            ErrorCode::SecurityViolation => {
                "The HTML content contains security violations.".to_string()
            }
            ErrorCode::ChromeError => {
                "PDF generation service is temporarily unavailable. Please try again later."
                    .to_string()
            }
            ErrorCode::TimeoutError => {
                "PDF generation timed out. Please try with simpler content.".to_string()
            }
            ErrorCode::MemoryLimitExceeded => {
                "The content is too complex to process. Please simplify and try again.".to_string()
            }
            ErrorCode::StorageError => {
                "Unable to save the generated PDF. Please try again later.".to_string()
            }
            ErrorCode::PdfNotFound => "The requested PDF could not be found.".to_string(),
            ErrorCode::PdfNotReady => {
                "The PDF is still being generated. Please try again in a moment.".to_string()
            }
            ErrorCode::JobNotFound => "PDF job not found.".to_string(),
            ErrorCode::InternalError => {
                "An unexpected error occurred while processing your request. Please try again later."
                    .to_string()
            }
            ErrorCode::Unknown(_) => {
                if self.message.is_empty() {
                    GENERIC_ERROR_MESSAGE.to_string()
                } else {
                    self.message.clone()
                }
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "API error {} ({}): {}",
            self.http_status, self.code, self.message
        )
    }
}

// ============================================================================
// Unified SDK error
// ============================================================================

/// Errors that can occur during Pdfy SDK operations.
///
/// This enum covers the full taxonomy: transport-level failures from the HTTP
/// client, application-level errors the server reported in a structured body,
/// the client-side polling timeout, and terminal job failures observed while
/// waiting.
#[derive(Debug, thiserror::Error)]
pub enum PdfyError {
    /// The server answered with a structured error body.
    ///
    /// Inspect the inner [`ApiError`] for the code, status, raw payload and
    /// the canonical user message.
    #[error("{0}")]
    Api(ApiError),

    /// Network, TLS or protocol failure before a structured response arrived.
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx response body did not match the expected envelope.
    #[error("Failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The job reached terminal `failed` status while waiting.
    ///
    /// Carries the error message the server recorded on the job, when present.
    #[error("PDF generation failed for job {job_id}: {message}")]
    JobFailed {
        /// The job that failed.
        job_id: String,
        /// The server-recorded failure message.
        message: String,
    },

    /// No terminal status was observed within the polling window.
    ///
    /// This is a client-side condition, distinct from the server's
    /// `TIMEOUT_ERROR` code.
    #[error("Timed out waiting for job {job_id} after {waited:?}")]
    WaitTimeout {
        /// The job still in progress when the deadline passed.
        job_id: String,
        /// Total wall-clock time spent polling.
        waited: Duration,
    },

    /// Invalid client configuration (empty API key, malformed base URL,
    /// unparseable environment values).
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<ApiError> for PdfyError {
    fn from(error: ApiError) -> Self {
        PdfyError::Api(error)
    }
}

/// Convenience conversion from [`String`] to [`PdfyError::Configuration`].
impl From<String> for PdfyError {
    fn from(msg: String) -> Self {
        PdfyError::Configuration(msg)
    }
}

/// Convenience conversion from `&str` to [`PdfyError::Configuration`].
impl From<&str> for PdfyError {
    fn from(msg: &str) -> Self {
        PdfyError::Configuration(msg.to_string())
    }
}

/// Result type alias using [`PdfyError`].
pub type Result<T> = std::result::Result<T, PdfyError>;

// ============================================================================
// Unit Tests
// ============================================================================
