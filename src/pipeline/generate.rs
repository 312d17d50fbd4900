//! Drafting: send the assembled prompt to Gemini and return the post text.
//!
//! This module is intentionally thin — all prompt engineering lives in
//! [`crate::prompts`] so the template can change without touching the wire
//! handling here. One request, no retry, no validation of the model output:
//! whether the draft actually honours the language constraints is out of
//! scope.

use crate::config::RunConfig;
use crate::error::OncopostError;
use crate::prompts;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

// ── Wire types for `models/{model}:generateContent` ──────────────────────

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

/// Ask Gemini for a post draft about `topic`, grounded in `source_text`.
///
/// Returns the model's response with surrounding whitespace removed.
///
/// # Errors
/// * [`OncopostError::GenerationFailed`] — transport error, non-success
///   status, or an unparseable response body
/// * [`OncopostError::EmptyCompletion`] — the model answered with no text
pub async fn draft_post(
    client: &reqwest::Client,
    topic: &str,
    source_text: &str,
    config: &RunConfig,
) -> Result<String, OncopostError> {
    let prompt = prompts::build_post_prompt(topic, source_text, config.prompt_char_budget);
    debug!("Assembled prompt: {} chars", prompt.len());

    let url = format!(
        "{}/v1beta/models/{}:generateContent",
        config.gemini_base_url.trim_end_matches('/'),
        config.model
    );

    let request = GenerateContentRequest {
        contents: vec![RequestContent {
            parts: vec![RequestPart { text: &prompt }],
        }],
    };

    info!("Requesting draft from model {}", config.model);

    let response = client
        .post(&url)
        .header("x-goog-api-key", &config.gemini_api_key)
        .json(&request)
        .timeout(Duration::from_secs(config.api_timeout_secs))
        .send()
        .await
        .map_err(|e| OncopostError::GenerationFailed {
            reason: e.to_string(),
        })?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| OncopostError::GenerationFailed {
            reason: e.to_string(),
        })?;

    if !status.is_success() {
        return Err(OncopostError::GenerationFailed {
            reason: format!("HTTP {status}: {body}"),
        });
    }

    let parsed: GenerateContentResponse =
        serde_json::from_str(&body).map_err(|e| OncopostError::GenerationFailed {
            reason: format!("unparseable response body: {e}"),
        })?;

    let text: String = parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| {
            c.parts
                .into_iter()
                .map(|p| p.text)
                .collect::<Vec<_>>()
                .concat()
        })
        .unwrap_or_default();

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(OncopostError::EmptyCompletion);
    }

    Ok(trimmed.to_string())
}
