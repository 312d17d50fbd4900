//! Orchestration: Select → Fetch → Generate → Publish.
//!
//! The whole program is this one linear chain. Each stage's failure
//! short-circuits the rest, but not every failure is fatal to the process:
//!
//! * topic-table and generation failures return `Err` (exit 1 in the CLI);
//! * fetch and publish failures are folded into [`RunOutcome`] so the run
//!   reports them and still exits 0.
//!
//! The asymmetry is deliberate — it reproduces the behaviour this tool has
//! always had, where a missing PDF or a Graph API rejection is logged and
//! the process falls through to completion. Callers who want stricter
//! semantics can match on the outcome themselves.

use crate::config::RunConfig;
use crate::error::OncopostError;
use crate::pipeline::{fetch, generate, publish};
use crate::report::{NoopRunObserver, RunObserver};
use crate::topics;
use tracing::{info, warn};

static NOOP_OBSERVER: NoopRunObserver = NoopRunObserver;

/// How a run ended, short of a fatal error.
#[derive(Debug)]
pub enum RunOutcome {
    /// The full chain succeeded.
    Published {
        /// The selected topic.
        topic: String,
        /// Created-object identifier returned by the Graph API.
        post_id: String,
    },
    /// The PDF could not be fetched or parsed; nothing was drafted.
    FetchSkipped {
        topic: String,
        error: OncopostError,
    },
    /// A draft was produced but the Graph API call failed.
    PublishSkipped {
        topic: String,
        /// The draft that would have been posted.
        draft: String,
        error: OncopostError,
    },
}

/// Execute one posting run.
///
/// # Errors
/// Returns `Err` only for failures the CLI treats as exit code 1:
/// a missing/empty/malformed topic table, a generation failure, or an
/// internal error. Fetch and publish failures come back as `Ok` with the
/// corresponding [`RunOutcome`] variant.
pub async fn run(config: &RunConfig) -> Result<RunOutcome, OncopostError> {
    let observer: &dyn RunObserver = config
        .observer
        .as_deref()
        .unwrap_or(&NOOP_OBSERVER);

    // ── Step 1: Select a topic ───────────────────────────────────────────
    let table = topics::load_topics(&config.csv_path)?;
    let selected = topics::pick_random(&table)?.clone();
    info!("Selected topic: {}", selected.topic);
    observer.on_topic_selected(&selected.topic);

    let client = reqwest::Client::builder()
        .build()
        .map_err(|e| OncopostError::Internal(format!("failed to build HTTP client: {e}")))?;

    // ── Step 2: Fetch the guideline PDF ──────────────────────────────────
    observer.on_download_start(&selected.url);
    let document = match fetch::fetch_document(&client, &selected.url, config).await {
        Ok(doc) => doc,
        Err(e) => {
            warn!("Fetch failed: {}", e);
            observer.on_stage_failed("fetch", &e.to_string());
            return Ok(RunOutcome::FetchSkipped {
                topic: selected.topic,
                error: e,
            });
        }
    };
    observer.on_text_extracted(document.pages_used, document.text.chars().count());

    // ── Step 3: Draft the post ───────────────────────────────────────────
    observer.on_draft_start();
    let draft = generate::draft_post(&client, &selected.topic, &document.text, config).await?;
    observer.on_draft_ready(&draft);

    // ── Step 4: Publish ──────────────────────────────────────────────────
    observer.on_publish_start(&config.fb_page_id);
    match publish::publish_post(&client, &draft, config).await {
        Ok(post_id) => {
            info!("Post published: {}", post_id);
            observer.on_published(&post_id);
            Ok(RunOutcome::Published {
                topic: selected.topic,
                post_id,
            })
        }
        Err(e) => {
            warn!("Publish failed: {}", e);
            observer.on_stage_failed("publish", &e.to_string());
            Ok(RunOutcome::PublishSkipped {
                topic: selected.topic,
                draft,
                error: e,
            })
        }
    }
}
