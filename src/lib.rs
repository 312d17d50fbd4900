//! # oncopost
//!
//! Draft and publish oncology patient-education posts from guideline PDFs.
//!
//! ## What it does
//!
//! One run of this crate performs a single linear pass:
//!
//! ```text
//! topics.csv
//!  │
//!  ├─ 1. Select   pick one (topic, url) row uniformly at random
//!  ├─ 2. Fetch    HTTP GET the guideline PDF, extract text from the
//!  │              first 10 pages (title + key summaries)
//!  ├─ 3. Generate ask Gemini for a formal Modern Standard Arabic post
//!  │              following a fixed 5-part structure
//!  └─ 4. Publish  POST the draft to a Facebook Page feed (Graph API)
//! ```
//!
//! There is no concurrency, no retry loop, and no state beyond the process:
//! each stage is one blocking external call, and any stage failure
//! short-circuits the rest of the chain. Fetch and publish failures are
//! reported but leave the process exit code at 0; configuration, topic-table,
//! and generation failures are fatal (exit 1). See [`run::RunOutcome`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use oncopost::{run, RunConfig, RunOutcome};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Credentials read from GEMINI_API_KEY, FB_PAGE_ACCESS_TOKEN, FB_PAGE_ID
//!     let config = RunConfig::from_env()?;
//!     match run(&config).await? {
//!         RunOutcome::Published { topic, post_id } => {
//!             println!("published '{topic}' as {post_id}");
//!         }
//!         other => eprintln!("{other:?}"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `oncopost` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! oncopost = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod pipeline;
pub mod prompts;
pub mod report;
pub mod run;
pub mod topics;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{RunConfig, RunConfigBuilder};
pub use error::OncopostError;
pub use report::{NoopRunObserver, ObserverHandle, RunObserver};
pub use run::{run, RunOutcome};
pub use topics::{load_topics, pick_random, Topic};
