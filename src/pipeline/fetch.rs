//! Document fetching: HTTP GET the guideline PDF and extract its text.
//!
//! The download carries a browser `User-Agent` because the guideline host
//! rejects requests that identify as a bot. Text extraction is capped at the
//! first [`crate::config::RunConfig::max_pages`] pages — the front matter
//! holds the title and key summaries, and the cap bounds the text forwarded
//! to the generation stage.
//!
//! Parsing runs in `spawn_blocking`: PDF decoding is CPU-bound and must not
//! stall the async executor.

use crate::config::RunConfig;
use crate::error::OncopostError;
use lopdf::Document;
use reqwest::header::USER_AGENT;
use std::time::Duration;
use tracing::{debug, info};

/// User-agent sent with the PDF download.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0";

/// Text extracted from the front of a guideline document.
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    /// Per-page text, joined with `\n`, in page order.
    pub text: String,
    /// Pages actually extracted (`min(max_pages, page_count)`).
    pub pages_used: usize,
    /// Total pages in the document.
    pub page_count: usize,
}

/// Download the PDF at `url` and extract text from its first pages.
///
/// # Errors
/// * [`OncopostError::DownloadTimeout`] / [`OncopostError::DownloadFailed`]
///   — transport-level failure
/// * [`OncopostError::FetchStatus`] — any non-success HTTP status
/// * [`OncopostError::PdfParse`] — the body is not a parseable PDF
pub async fn fetch_document(
    client: &reqwest::Client,
    url: &str,
    config: &RunConfig,
) -> Result<ExtractedDocument, OncopostError> {
    info!("Downloading PDF from: {}", url);

    let response = client
        .get(url)
        .header(USER_AGENT, BROWSER_USER_AGENT)
        .timeout(Duration::from_secs(config.download_timeout_secs))
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                OncopostError::DownloadTimeout {
                    url: url.to_string(),
                    secs: config.download_timeout_secs,
                }
            } else {
                OncopostError::DownloadFailed {
                    url: url.to_string(),
                    reason: e.to_string(),
                }
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(OncopostError::FetchStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| OncopostError::DownloadFailed {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

    debug!("Downloaded {} bytes, extracting text", bytes.len());

    let max_pages = config.max_pages;
    let url_owned = url.to_string();
    let extracted = tokio::task::spawn_blocking(move || extract_text(&bytes, max_pages))
        .await
        .map_err(|e| OncopostError::Internal(format!("extraction task failed: {e}")))?
        .map_err(|reason| OncopostError::PdfParse {
            url: url_owned,
            reason,
        })?;

    info!(
        "Extracted {} pages of {} ({} chars)",
        extracted.pages_used,
        extracted.page_count,
        extracted.text.len()
    );

    Ok(extracted)
}

/// Parse `bytes` as a PDF and extract the text of the first `max_pages`
/// pages, joined with `\n` in page order.
///
/// Any page whose content stream cannot be decoded fails the whole fetch:
/// there is no partial-page recovery, so the generation stage never sees a
/// document with silently missing pages.
pub(crate) fn extract_text(bytes: &[u8], max_pages: usize) -> Result<ExtractedDocument, String> {
    let doc = Document::load_mem(bytes).map_err(|e| e.to_string())?;

    let page_count = doc.get_pages().len();
    let pages_used = max_pages.min(page_count);

    let mut parts = Vec::with_capacity(pages_used);
    for page in 1..=pages_used as u32 {
        let text = doc
            .extract_text(&[page])
            .map_err(|e| format!("page {page}: {e}"))?;
        parts.push(text);
    }

    Ok(ExtractedDocument {
        text: parts.join("\n"),
        pages_used,
        page_count,
    })
}
