//! Configuration for a posting run.
//!
//! All behaviour is controlled through [`RunConfig`], constructed once at
//! process start and passed by reference into every stage — there is no
//! module-level global state. Credentials come from the environment via
//! [`RunConfig::from_env`]; everything else has defaults and can be
//! overridden through the builder.
//!
//! The two base-URL knobs exist so tests can point the pipeline at a local
//! mock server; production code never needs to touch them.

use crate::error::OncopostError;
use crate::report::ObserverHandle;
use std::fmt;
use std::path::PathBuf;

/// Default Gemini model used for drafting.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default topic-table location, relative to the working directory.
pub const DEFAULT_CSV_PATH: &str = "nccn_links.csv";

/// Pages extracted from the front of the guideline PDF. The first ten pages
/// carry the title and key summaries; the rest is skipped to bound the text
/// forwarded to the generation stage.
pub const DEFAULT_MAX_PAGES: usize = 10;

/// Character budget for the source text embedded in the prompt.
pub const DEFAULT_PROMPT_CHAR_BUDGET: usize = 15_000;

/// PDF download timeout in seconds.
pub const DEFAULT_DOWNLOAD_TIMEOUT_SECS: u64 = 30;

/// Gemini/Graph API call timeout in seconds.
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 60;

/// Configuration for one pipeline run.
///
/// Built via [`RunConfig::builder()`] or [`RunConfig::from_env()`].
#[derive(Clone)]
pub struct RunConfig {
    /// Gemini API key (`GEMINI_API_KEY`).
    pub gemini_api_key: String,

    /// Facebook Page access token (`FB_PAGE_ACCESS_TOKEN`).
    pub fb_page_access_token: String,

    /// Facebook Page identifier (`FB_PAGE_ID`).
    pub fb_page_id: String,

    /// Path to the CSV topic table (`topic`, `url` columns).
    pub csv_path: PathBuf,

    /// Gemini model identifier.
    pub model: String,

    /// Maximum PDF pages to extract text from.
    pub max_pages: usize,

    /// Maximum characters of extracted text embedded in the prompt.
    pub prompt_char_budget: usize,

    /// PDF download timeout in seconds.
    pub download_timeout_secs: u64,

    /// Timeout for the Gemini and Graph API calls, in seconds.
    pub api_timeout_secs: u64,

    /// Base URL of the Gemini API. Overridable for tests.
    pub gemini_base_url: String,

    /// Base URL of the Graph API, including the version segment.
    /// Overridable for tests.
    pub graph_base_url: String,

    /// Progress observer. `None` means no progress reporting.
    pub observer: Option<ObserverHandle>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: String::new(),
            fb_page_access_token: String::new(),
            fb_page_id: String::new(),
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            model: DEFAULT_MODEL.to_string(),
            max_pages: DEFAULT_MAX_PAGES,
            prompt_char_budget: DEFAULT_PROMPT_CHAR_BUDGET,
            download_timeout_secs: DEFAULT_DOWNLOAD_TIMEOUT_SECS,
            api_timeout_secs: DEFAULT_API_TIMEOUT_SECS,
            gemini_base_url: "https://generativelanguage.googleapis.com".to_string(),
            graph_base_url: "https://graph.facebook.com/v19.0".to_string(),
            observer: None,
        }
    }
}

impl fmt::Debug for RunConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunConfig")
            .field("gemini_api_key", &"<redacted>")
            .field("fb_page_access_token", &"<redacted>")
            .field("fb_page_id", &self.fb_page_id)
            .field("csv_path", &self.csv_path)
            .field("model", &self.model)
            .field("max_pages", &self.max_pages)
            .field("prompt_char_budget", &self.prompt_char_budget)
            .field("download_timeout_secs", &self.download_timeout_secs)
            .field("api_timeout_secs", &self.api_timeout_secs)
            .field("gemini_base_url", &self.gemini_base_url)
            .field("graph_base_url", &self.graph_base_url)
            .field("observer", &self.observer.as_ref().map(|_| "<dyn RunObserver>"))
            .finish()
    }
}

impl RunConfig {
    /// Create a new builder for `RunConfig`.
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder {
            config: Self::default(),
        }
    }

    /// Turn an existing config back into a builder.
    ///
    /// Overrides applied this way go through `build()` again, so they are
    /// subject to the same validation as any other construction path.
    pub fn into_builder(self) -> RunConfigBuilder {
        RunConfigBuilder { config: self }
    }

    /// Build a config from the environment, failing fast if any required
    /// variable is absent or empty.
    ///
    /// All missing variables are reported in one error, not just the first,
    /// so a fresh deployment can be fixed in a single pass.
    pub fn from_env() -> Result<Self, OncopostError> {
        let mut missing = Vec::new();
        let mut require = |name: &str| match std::env::var(name) {
            Ok(v) if !v.trim().is_empty() => v,
            _ => {
                missing.push(name.to_string());
                String::new()
            }
        };

        let gemini_api_key = require("GEMINI_API_KEY");
        let fb_page_access_token = require("FB_PAGE_ACCESS_TOKEN");
        let fb_page_id = require("FB_PAGE_ID");

        if !missing.is_empty() {
            return Err(OncopostError::MissingConfig { vars: missing });
        }

        Self::builder()
            .gemini_api_key(gemini_api_key)
            .fb_page_access_token(fb_page_access_token)
            .fb_page_id(fb_page_id)
            .build()
    }
}

/// Builder for [`RunConfig`].
pub struct RunConfigBuilder {
    config: RunConfig,
}

impl RunConfigBuilder {
    pub fn gemini_api_key(mut self, key: impl Into<String>) -> Self {
        self.config.gemini_api_key = key.into();
        self
    }

    pub fn fb_page_access_token(mut self, token: impl Into<String>) -> Self {
        self.config.fb_page_access_token = token.into();
        self
    }

    pub fn fb_page_id(mut self, id: impl Into<String>) -> Self {
        self.config.fb_page_id = id.into();
        self
    }

    pub fn csv_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.csv_path = path.into();
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    pub fn max_pages(mut self, n: usize) -> Self {
        self.config.max_pages = n;
        self
    }

    pub fn prompt_char_budget(mut self, n: usize) -> Self {
        self.config.prompt_char_budget = n;
        self
    }

    pub fn download_timeout_secs(mut self, secs: u64) -> Self {
        self.config.download_timeout_secs = secs;
        self
    }

    pub fn api_timeout_secs(mut self, secs: u64) -> Self {
        self.config.api_timeout_secs = secs;
        self
    }

    pub fn gemini_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.gemini_base_url = url.into();
        self
    }

    pub fn graph_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.graph_base_url = url.into();
        self
    }

    pub fn observer(mut self, observer: ObserverHandle) -> Self {
        self.config.observer = Some(observer);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<RunConfig, OncopostError> {
        let c = &self.config;
        if c.gemini_api_key.trim().is_empty() {
            return Err(OncopostError::InvalidConfig(
                "gemini_api_key must not be empty".into(),
            ));
        }
        if c.fb_page_access_token.trim().is_empty() {
            return Err(OncopostError::InvalidConfig(
                "fb_page_access_token must not be empty".into(),
            ));
        }
        if c.fb_page_id.trim().is_empty() {
            return Err(OncopostError::InvalidConfig(
                "fb_page_id must not be empty".into(),
            ));
        }
        if c.max_pages == 0 {
            return Err(OncopostError::InvalidConfig("max_pages must be ≥ 1".into()));
        }
        if c.prompt_char_budget == 0 {
            return Err(OncopostError::InvalidConfig(
                "prompt_char_budget must be ≥ 1".into(),
            ));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_builder() -> RunConfigBuilder {
        RunConfig::builder()
            .gemini_api_key("k")
            .fb_page_access_token("t")
            .fb_page_id("1")
    }

    #[test]
    fn defaults_match_documented_values() {
        let config = minimal_builder().build().unwrap();
        assert_eq!(config.max_pages, 10);
        assert_eq!(config.prompt_char_budget, 15_000);
        assert_eq!(config.download_timeout_secs, 30);
        assert_eq!(config.api_timeout_secs, 60);
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.csv_path, PathBuf::from("nccn_links.csv"));
    }

    #[test]
    fn into_builder_revalidates_overrides() {
        // Overrides on a built config must not bypass build() validation.
        let config = minimal_builder().build().unwrap();
        let err = config.into_builder().max_pages(0).build().unwrap_err();
        assert!(matches!(err, OncopostError::InvalidConfig(_)));
    }

    #[test]
    fn build_rejects_missing_credentials() {
        let err = RunConfig::builder().build().unwrap_err();
        assert!(matches!(err, OncopostError::InvalidConfig(_)));
    }

    #[test]
    fn build_rejects_zero_max_pages() {
        let err = minimal_builder().max_pages(0).build().unwrap_err();
        assert!(err.to_string().contains("max_pages"));
    }

    #[test]
    fn debug_redacts_secrets() {
        let config = minimal_builder()
            .gemini_api_key("super-secret")
            .build()
            .unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
