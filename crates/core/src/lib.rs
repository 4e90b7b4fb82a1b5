//! PrepDeck Core
//!
//! Foundational error types and the shared feedback-tag model for the
//! PrepDeck workspace. This crate has zero dependencies on application-level
//! code (recovery stages, selection, prompt assembly).
//!
//! ## Module Organization
//!
//! - `error` - Core error types (`CoreError`, `CoreResult`)
//! - `tags` - Diagnostic feedback tag model (`FeedbackTag`, `Severity`)
//!
//! ## Design Principles
//!
//! 1. **Zero external dependencies beyond serde/thiserror** - keeps build times minimal
//! 2. **Unidirectional dependency** - this crate depends on nothing else in the workspace

pub mod error;
pub mod tags;

// ── Error Types ────────────────────────────────────────────────────────
pub use error::{CoreError, CoreResult};

// ── Feedback Tag Model ─────────────────────────────────────────────────
pub use tags::{FeedbackTag, Severity};
