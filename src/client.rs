//! The authenticated HTTP client for the Pdfy API.
//!
//! [`PdfyClient`] owns the immutable [`ClientConfig`] and a `reqwest` client
//! configured with the request timeout. It attaches the bearer token and
//! accept header to every outbound call, switches content type between the
//! JSON and raw-HTML submission paths, and converts non-2xx responses into
//! classified [`ApiError`](crate::ApiError)s.
//!
//! Successful responses arrive wrapped in a `{ "data": ... }` envelope;
//! the client unwraps the inner payload. Download responses are the one
//! exception: a 2xx body is returned as raw bytes, unparsed.
//!
//! # Example
//!
//! ```rust,no_run
//! use pdfy_sdk::{ClientConfig, PdfyClient, PdfOptions};
//!
//! # async fn run() -> pdfy_sdk::Result<()> {
//! let client = PdfyClient::new(ClientConfig::new("pdfy_live_abc123")?)?;
//!
//! let job = client
//!     .pdfs()
//!     .create("<h1>Invoice</h1>", Some("invoice.pdf"), Some(PdfOptions::a4_portrait()))
//!     .await?;
//! println!("submitted job {}", job.job_id);
//! # Ok(())
//! # }
//! ```

use bytes::Bytes;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{ApiError, ErrorCode, Result};
use crate::resource::PdfResource;

/// Fallback message when an error body carries no `message` field.
const DEFAULT_ERROR_MESSAGE: &str = "API request failed";

/// Success envelope wrapping every structured API response.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Authenticated client for the Pdfy API.
///
/// Construction is the only place configuration enters the SDK; there is no
/// global instance. Pass the client (it is `Clone`, cheaply) to whatever
/// needs it.
#[derive(Debug, Clone)]
pub struct PdfyClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl PdfyClient {
    /// Create a client from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PdfyError::Transport`](crate::PdfyError::Transport) if the
    /// underlying HTTP client cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http, config })
    }

    /// Convenience constructor: default base URL and timeout.
    ///
    /// # Errors
    ///
    /// Returns [`PdfyError::Configuration`](crate::PdfyError::Configuration)
    /// if the key is empty.
    pub fn from_api_key(api_key: impl Into<String>) -> Result<Self> {
        Self::new(ClientConfig::new(api_key)?)
    }

    /// The PDF resource, for job submission, polling and download.
    pub fn pdfs(&self) -> PdfResource<'_> {
        PdfResource::new(self)
    }

    /// The configured base URL (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// The configured API key.
    pub fn api_key(&self) -> &str {
        &self.config.api_key
    }

    /// The full client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url, path)
    }

    /// GET a structured resource and unwrap the `data` envelope.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        log::debug!("GET {}", path);
        let response = self
            .http
            .get(self.endpoint(path))
            .bearer_auth(&self.config.api_key)
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        Self::unwrap_data(response).await
    }

    /// POST a JSON body and unwrap the `data` envelope.
    pub(crate) async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T> {
        log::debug!("POST {} (json)", path);
        let response = self
            .http
            .post(self.endpoint(path))
            .bearer_auth(&self.config.api_key)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await?;
        Self::unwrap_data(response).await
    }

    /// POST raw HTML with metadata headers and unwrap the `data` envelope.
    ///
    /// This is the alternate submission path: the body is the HTML verbatim
    /// with `Content-Type: text/html`, and filename/options travel as
    /// discrete `X-PDF-*` headers.
    pub(crate) async fn post_html<T: DeserializeOwned>(
        &self,
        path: &str,
        html: String,
        headers: &[(String, String)],
    ) -> Result<T> {
        log::debug!("POST {} (html, {} metadata headers)", path, headers.len());
        let mut request = self
            .http
            .post(self.endpoint(path))
            .bearer_auth(&self.config.api_key)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "text/html");
        for (name, value) in headers {
            request = request.header(name, value);
        }
        let response = request.body(html).send().await?;
        Self::unwrap_data(response).await
    }

    /// GET a binary artifact.
    ///
    /// A 2xx body is returned unparsed. Failures are routed through the
    /// structured-error path before any bytes are surfaced.
    pub(crate) async fn get_bytes(&self, path: &str) -> Result<Bytes> {
        log::debug!("GET {} (binary)", path);
        let response = self
            .http
            .get(self.endpoint(path))
            .bearer_auth(&self.config.api_key)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_error_body(status.as_u16(), &body).into());
        }
        Ok(response.bytes().await?)
    }

    /// Parse a structured response: unwrap `data` on success, classify the
    /// error body otherwise.
    async fn unwrap_data<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            log::debug!("API error response: {} ({} bytes)", status, body.len());
            return Err(classify_error_body(status.as_u16(), &body).into());
        }

        let envelope: Envelope<T> = serde_json::from_str(&body)?;
        Ok(envelope.data)
    }
}

/// Build a classified [`ApiError`] from an error response body.
///
/// Missing fields fall back to a generic message and `UNKNOWN_ERROR`; the
/// raw body is preserved for diagnostics even when it is not valid JSON.
fn classify_error_body(status: u16, body: &str) -> ApiError {
    let raw: serde_json::Value = serde_json::from_str(body).unwrap_or(serde_json::Value::Null);

    let message = raw
        .get("message")
        .and_then(|m| m.as_str())
        .unwrap_or(DEFAULT_ERROR_MESSAGE)
        .to_string();
    let code = ErrorCode::parse(
        raw.get("error_code")
            .and_then(|c| c.as_str())
            .unwrap_or(""),
    );

    ApiError::new(message, status, code, raw)
}

// ============================================================================
// Unit Tests
// ============================================================================
