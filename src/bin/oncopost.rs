//! CLI binary for oncopost.
//!
//! A thin shim over the library crate that maps CLI flags to `RunConfig`
//! and prints status lines as the pipeline advances.

use anyhow::{Context, Result};
use clap::Parser;
use oncopost::config::{
    DEFAULT_API_TIMEOUT_SECS, DEFAULT_CSV_PATH, DEFAULT_DOWNLOAD_TIMEOUT_SECS, DEFAULT_MAX_PAGES,
    DEFAULT_MODEL,
};
use oncopost::{run, ObserverHandle, RunConfig, RunObserver, RunOutcome};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

// ── Console observer ──────────────────────────────────────────────────────

/// Prints one status line per pipeline event, matching the tool's
/// long-standing console format (status emoji + short message). The draft
/// is echoed in full between `--- DRAFT ---` markers before publishing.
struct ConsoleObserver;

impl RunObserver for ConsoleObserver {
    fn on_topic_selected(&self, topic: &str) {
        println!("📋 Selected Topic: {topic}");
    }

    fn on_download_start(&self, url: &str) {
        println!("📥 Downloading PDF from: {url}");
    }

    fn on_text_extracted(&self, pages: usize, chars: usize) {
        println!("✅ Download successful. Extracted {pages} pages ({chars} chars).");
    }

    fn on_draft_start(&self) {
        println!("✍️  Drafting the Arabic post...");
    }

    fn on_draft_ready(&self, draft: &str) {
        println!("\n--- DRAFT ---");
        println!("{draft}");
        println!("-------------\n");
        // The draft must be visible before the publish call goes out.
        io::stdout().flush().ok();
    }

    fn on_publish_start(&self, page_id: &str) {
        println!("🚀 Publishing to Page ID: {page_id}...");
    }

    fn on_published(&self, post_id: &str) {
        println!("✅ Success! Post Published. ID: {post_id}");
    }

    fn on_stage_failed(&self, stage: &str, error: &str) {
        match stage {
            "fetch" => println!("❌ Failed to get PDF content: {error}"),
            "publish" => println!("❌ Facebook API Error: {error}"),
            _ => println!("❌ {stage} failed: {error}"),
        }
    }
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Standard run (topic table in the working directory)
  oncopost

  # Explicit topic table and model
  oncopost --csv topics/nccn_links.csv --model gemini-2.5-flash

  # Extract more pages, allow a slower mirror
  oncopost --max-pages 15 --download-timeout 60

ENVIRONMENT VARIABLES:
  GEMINI_API_KEY           Gemini API key (required)
  FB_PAGE_ACCESS_TOKEN     Facebook Page access token (required)
  FB_PAGE_ID               Facebook Page identifier (required)
  ONCOPOST_CSV             Default for --csv
  ONCOPOST_MODEL           Default for --model
  RUST_LOG                 Overrides -v/-q log filtering

EXIT CODES:
  0  post published — or fetch/publish failed (reported on the console)
  1  missing configuration, unusable topic table, or generation failure
"#;

/// Draft and publish an oncology patient-education post from a random
/// guideline PDF.
#[derive(Parser, Debug)]
#[command(
    name = "oncopost",
    version,
    about = "Draft and publish oncology patient-education posts from guideline PDFs",
    long_about = "Picks a random topic from a CSV of (topic, guideline-PDF-URL) pairs, extracts \
text from the document's first pages, asks Gemini for a formal Modern Standard Arabic post, and \
publishes it to a Facebook Page feed.",
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Path to the topic table (CSV with `topic` and `url` columns).
    #[arg(long, env = "ONCOPOST_CSV", default_value = DEFAULT_CSV_PATH)]
    csv: PathBuf,

    /// Gemini model ID.
    #[arg(long, env = "ONCOPOST_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// PDF pages to extract text from.
    #[arg(long, env = "ONCOPOST_MAX_PAGES", default_value_t = DEFAULT_MAX_PAGES)]
    max_pages: usize,

    /// PDF download timeout in seconds.
    #[arg(long, env = "ONCOPOST_DOWNLOAD_TIMEOUT", default_value_t = DEFAULT_DOWNLOAD_TIMEOUT_SECS)]
    download_timeout: u64,

    /// Gemini/Graph API call timeout in seconds.
    #[arg(long, env = "ONCOPOST_API_TIMEOUT", default_value_t = DEFAULT_API_TIMEOUT_SECS)]
    api_timeout: u64,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long)]
    verbose: bool,

    /// Suppress status lines; only errors are printed.
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // Status lines carry the user-facing story; library logs stay on stderr
    // and default to errors only.
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    match run(&config).await {
        Ok(RunOutcome::Published { .. }) => ExitCode::SUCCESS,
        // Fetch/publish failures were already reported by the observer and
        // do not fail the process.
        Ok(RunOutcome::FetchSkipped { .. }) | Ok(RunOutcome::PublishSkipped { .. }) => {
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("❌ {e}");
            ExitCode::FAILURE
        }
    }
}

/// Map CLI args onto a `RunConfig` built from the environment.
///
/// Overrides go through the builder so `build()` validation applies to
/// flag and env values just as it does to library callers.
fn build_config(cli: &Cli) -> Result<RunConfig> {
    let mut builder = RunConfig::from_env()
        .context("configuration check failed")?
        .into_builder()
        .csv_path(cli.csv.clone())
        .model(cli.model.clone())
        .max_pages(cli.max_pages)
        .download_timeout_secs(cli.download_timeout)
        .api_timeout_secs(cli.api_timeout);

    if !cli.quiet {
        builder = builder.observer(Arc::new(ConsoleObserver) as ObserverHandle);
    }

    builder.build().context("invalid flag value")
}
