//! Progress-observer trait for pipeline run events.
//!
//! Inject an [`Arc<dyn RunObserver>`] via
//! [`crate::config::RunConfigBuilder::observer`] to receive events as the
//! pipeline moves through its four stages. The CLI uses this to print
//! human-readable status lines; library callers can forward events anywhere
//! without the library knowing how the host application communicates.
//!
//! All methods have default no-op implementations so callers only override
//! what they care about.

use std::sync::Arc;

/// Called by the pipeline as each stage starts and finishes.
///
/// The pipeline is strictly sequential, so events arrive in order from a
/// single task; `Send + Sync` is still required because the observer is
/// shared through the config.
pub trait RunObserver: Send + Sync {
    /// A topic was drawn from the table.
    fn on_topic_selected(&self, topic: &str) {
        let _ = topic;
    }

    /// The PDF download is about to start.
    fn on_download_start(&self, url: &str) {
        let _ = url;
    }

    /// The PDF downloaded and its text was extracted.
    ///
    /// # Arguments
    /// * `pages` — pages actually extracted (`min(max_pages, page_count)`)
    /// * `chars` — total characters of extracted text
    fn on_text_extracted(&self, pages: usize, chars: usize) {
        let _ = (pages, chars);
    }

    /// The Gemini request is about to be sent.
    fn on_draft_start(&self) {}

    /// The model returned a draft; fired before publishing so the caller
    /// can echo the post text.
    fn on_draft_ready(&self, draft: &str) {
        let _ = draft;
    }

    /// The Graph API request is about to be sent.
    fn on_publish_start(&self, page_id: &str) {
        let _ = page_id;
    }

    /// The post was accepted; `post_id` is the created-object identifier.
    fn on_published(&self, post_id: &str) {
        let _ = post_id;
    }

    /// A non-fatal stage failed (`"fetch"` or `"publish"`); the run stops
    /// but the process still exits 0.
    fn on_stage_failed(&self, stage: &str, error: &str) {
        let _ = (stage, error);
    }
}

/// A no-op implementation for callers that don't need progress events.
pub struct NoopRunObserver;

impl RunObserver for NoopRunObserver {}

/// Convenience alias matching the type stored in [`crate::config::RunConfig`].
pub type ObserverHandle = Arc<dyn RunObserver>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingObserver {
        events: Mutex<Vec<String>>,
    }

    impl RunObserver for RecordingObserver {
        fn on_topic_selected(&self, topic: &str) {
            self.events.lock().unwrap().push(format!("topic:{topic}"));
        }

        fn on_draft_ready(&self, draft: &str) {
            self.events.lock().unwrap().push(format!("draft:{draft}"));
        }

        fn on_published(&self, post_id: &str) {
            self.events.lock().unwrap().push(format!("published:{post_id}"));
        }
    }

    #[test]
    fn noop_observer_does_not_panic() {
        let obs = NoopRunObserver;
        obs.on_topic_selected("Breast Cancer");
        obs.on_download_start("http://x/doc.pdf");
        obs.on_text_extracted(10, 12_000);
        obs.on_draft_start();
        obs.on_draft_ready("draft");
        obs.on_publish_start("123");
        obs.on_published("123_456");
        obs.on_stage_failed("fetch", "HTTP 404");
    }

    #[test]
    fn recording_observer_preserves_event_order() {
        let obs = RecordingObserver::default();
        obs.on_topic_selected("Melanoma");
        obs.on_draft_ready("text");
        obs.on_published("99");

        let events = obs.events.lock().unwrap();
        assert_eq!(
            *events,
            vec!["topic:Melanoma", "draft:text", "published:99"]
        );
    }

    #[test]
    fn arc_dyn_observer_works() {
        let obs: ObserverHandle = Arc::new(NoopRunObserver);
        obs.on_draft_start();
        obs.on_published("1");
    }
}
