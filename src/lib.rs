//! PrepDeck
//!
//! Backend core for the PrepDeck interview practice product: builds the
//! evaluation prompt for a practice answer, recovers a structured evaluation
//! record from the raw model reply, and chooses which diagnostic feedback
//! tags to surface per session with recency-aware diversity.
//!
//! The LLM transport itself (HTTP, retries, streaming) and all persistence
//! and UI belong to the embedding application; this crate only consumes the
//! returned text and produces data.
//!
//! ## Module Organization
//!
//! - `evaluation` - Prompt construction, evaluation record schema, typed decode
//! - `feedback` - Diagnostic tag catalog and per-session feedback generation

pub mod evaluation;
pub mod feedback;

// ── Evaluation ─────────────────────────────────────────────────────────
pub use evaluation::prompt::build_evaluation_prompt;
pub use evaluation::schema::{
    decode_evaluation, decode_evaluation_or_fallback, EvaluationRecord, REQUIRED_FIELDS,
};

// ── Feedback ───────────────────────────────────────────────────────────
pub use feedback::catalog::default_tag_catalog;
pub use feedback::generator::FeedbackGenerator;

// ── Workspace re-exports for embedding applications ────────────────────
pub use prepdeck_core::{CoreError, CoreResult, FeedbackTag, Severity};
pub use prepdeck_feedback::TagDiversitySelector;
pub use prepdeck_recovery::{parse, FailureReason, ParseFailure, ParseOutcome};
