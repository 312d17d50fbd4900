//! Pipeline stages for the posting run.
//!
//! Each submodule implements exactly one external interaction. Keeping the
//! stages separate makes each independently testable against a mock HTTP
//! server and keeps the orchestrator in [`crate::run`] a plain sequence of
//! calls.
//!
//! ## Data Flow
//!
//! ```text
//! topic.url ──▶ fetch ──▶ generate ──▶ publish
//!              (PDF text)  (Gemini)    (Graph API)
//! ```
//!
//! 1. [`fetch`]    — download the guideline PDF and extract the text of its
//!    first pages
//! 2. [`generate`] — assemble the prompt and request a draft from Gemini
//! 3. [`publish`]  — submit the draft to the Facebook Page feed

pub mod fetch;
pub mod generate;
pub mod publish;
