//! Publishing: submit the drafted post to the Facebook Page feed.
//!
//! One form-encoded POST to the Graph API `/{page_id}/feed` endpoint. No
//! idempotency key and no delivery confirmation beyond the single response:
//! a 200 with a created-object id is success, anything else surfaces the
//! raw error body so the operator can see what the Graph API objected to.

use crate::config::RunConfig;
use crate::error::OncopostError;
use serde::Deserialize;
use std::time::Duration;
use tracing::info;

#[derive(Deserialize)]
struct FeedResponse {
    id: Option<String>,
}

/// Publish `message` to the configured Page feed and return the post id.
///
/// # Errors
/// * [`OncopostError::PublishFailed`] — network failure before a response
/// * [`OncopostError::PublishRejected`] — any non-success status; carries
///   the raw response body
pub async fn publish_post(
    client: &reqwest::Client,
    message: &str,
    config: &RunConfig,
) -> Result<String, OncopostError> {
    let url = format!(
        "{}/{}/feed",
        config.graph_base_url.trim_end_matches('/'),
        config.fb_page_id
    );

    info!("Publishing to Page ID: {}", config.fb_page_id);

    let params = [
        ("message", message),
        ("access_token", config.fb_page_access_token.as_str()),
    ];

    let response = client
        .post(&url)
        .form(&params)
        .timeout(Duration::from_secs(config.api_timeout_secs))
        .send()
        .await
        .map_err(|e| OncopostError::PublishFailed {
            reason: e.to_string(),
        })?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| OncopostError::PublishFailed {
            reason: e.to_string(),
        })?;

    if !status.is_success() {
        return Err(OncopostError::PublishRejected {
            status: status.as_u16(),
            body,
        });
    }

    let parsed: FeedResponse =
        serde_json::from_str(&body).map_err(|e| OncopostError::PublishFailed {
            reason: format!("unparseable response body: {e}"),
        })?;

    parsed.id.ok_or_else(|| OncopostError::PublishFailed {
        reason: "response carried no post id".to_string(),
    })
}
