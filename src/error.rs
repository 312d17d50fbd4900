//! Error types for the oncopost library.
//!
//! A single [`OncopostError`] enum covers the full failure taxonomy of the
//! pipeline. The orchestrator in [`crate::run`] decides fatality: missing
//! configuration, a bad topic table, and generation failures abort the run,
//! while fetch and publish failures are carried inside
//! [`crate::run::RunOutcome`] so the caller can report them without a
//! non-zero exit.

use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the oncopost pipeline.
#[derive(Debug, Error)]
pub enum OncopostError {
    // ── Configuration errors ──────────────────────────────────────────────
    /// One or more required environment variables are absent or empty.
    #[error(
        "missing required environment variables: {}\n\
         Set GEMINI_API_KEY, FB_PAGE_ACCESS_TOKEN, and FB_PAGE_ID before running.",
        vars.join(", ")
    )]
    MissingConfig { vars: Vec<String> },

    /// Builder validation failed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Topic table errors ────────────────────────────────────────────────
    /// The topic CSV was not found at the given path.
    #[error("topic table not found: '{path}'\nPass --csv or place nccn_links.csv in the working directory.")]
    TopicsFileNotFound { path: PathBuf },

    /// The topic CSV exists but a row could not be parsed.
    #[error("failed to parse topic table '{path}': {reason}")]
    CsvParse { path: PathBuf, reason: String },

    /// The topic CSV parsed cleanly but contains zero rows.
    #[error("topic table contains no rows")]
    NoTopics,

    // ── Fetch errors ──────────────────────────────────────────────────────
    /// The PDF download failed at the transport level.
    #[error("failed to download '{url}': {reason}\nCheck your internet connection and the URL in the topic table.")]
    DownloadFailed { url: String, reason: String },

    /// The PDF download exceeded the configured timeout.
    #[error("download timed out after {secs}s for '{url}'")]
    DownloadTimeout { url: String, secs: u64 },

    /// The document server answered with a non-success status.
    #[error("download of '{url}' returned HTTP {status}")]
    FetchStatus { url: String, status: u16 },

    /// The downloaded bytes could not be parsed as a PDF.
    #[error("failed to parse PDF from '{url}': {reason}")]
    PdfParse { url: String, reason: String },

    // ── Generation errors ─────────────────────────────────────────────────
    /// The Gemini API call failed (transport error, non-success status, or
    /// an unparseable response body).
    #[error("generation failed: {reason}")]
    GenerationFailed { reason: String },

    /// The model answered, but with no usable text.
    #[error("generation returned an empty completion")]
    EmptyCompletion,

    // ── Publish errors ────────────────────────────────────────────────────
    /// The Graph API rejected the post; `body` is the raw error payload.
    #[error("Facebook API rejected the post (HTTP {status}): {body}")]
    PublishRejected { status: u16, body: String },

    /// The publish request failed before a response was received.
    #[error("publish failed: {reason}")]
    PublishFailed { reason: String },

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("internal error: {0}")]
    Internal(String),
}
