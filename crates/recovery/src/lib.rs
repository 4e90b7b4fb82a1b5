//! PrepDeck Response Recovery
//!
//! LLM text generation is not guaranteed to produce syntactically valid JSON
//! even when explicitly instructed to. Responses arrive wrapped in prose,
//! markdown fences, or with small syntax defects (trailing commas, unquoted
//! keys, doubled quotes). This crate recovers a JSON object from such text
//! through a bounded chain of increasingly aggressive stages, and reports
//! every failure as data instead of an error the caller has to catch.
//!
//! - `outcome` - Parse outcome types (`ParseOutcome`, `FailureReason`, `ParseFailure`)
//! - `stages` - Pure, independently testable recovery stages
//! - `parser` - The ordered fallback chain (`parse`, `parse_into`)

pub mod outcome;
pub mod parser;
pub mod stages;

// Re-export outcome types
pub use outcome::{FailureReason, ParseFailure, ParseOutcome, ParsedRecord};

// Re-export parser entry points
pub use parser::{parse, parse_into};
