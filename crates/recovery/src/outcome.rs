//! Parse Outcome Types
//!
//! The recovery chain never throws: every call produces a tagged outcome the
//! caller branches on. A `Failure` carries a diagnostic string sufficient for
//! logging without re-parsing the input.

use serde::{Deserialize, Serialize};

use prepdeck_core::CoreError;

/// The decoded top-level JSON object.
pub type ParsedRecord = serde_json::Map<String, serde_json::Value>;

/// Why a parse attempt failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    /// Input was empty or whitespace-only
    EmptyInput,
    /// No opening brace anywhere in the input
    NoJsonFound,
    /// Decoding still failed after every repair stage
    MalformedAfterRecovery,
    /// Decoded fine but required fields are absent
    MissingRequiredFields,
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureReason::EmptyInput => write!(f, "empty_input"),
            FailureReason::NoJsonFound => write!(f, "no_json_found"),
            FailureReason::MalformedAfterRecovery => write!(f, "malformed_after_recovery"),
            FailureReason::MissingRequiredFields => write!(f, "missing_required_fields"),
        }
    }
}

/// A failed parse: the reason plus a diagnostic detail.
///
/// For `MissingRequiredFields` the detail is the comma-joined missing keys;
/// otherwise it is a truncated copy of the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseFailure {
    /// Failure classification
    pub reason: FailureReason,
    /// Diagnostic detail for logging
    pub detail: String,
}

impl ParseFailure {
    /// Create a new failure.
    pub fn new(reason: FailureReason, detail: impl Into<String>) -> Self {
        Self {
            reason,
            detail: detail.into(),
        }
    }
}

impl std::fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.detail.is_empty() {
            write!(f, "{}", self.reason)
        } else {
            write!(f, "{}: {}", self.reason, self.detail)
        }
    }
}

impl std::error::Error for ParseFailure {}

impl From<ParseFailure> for CoreError {
    fn from(failure: ParseFailure) -> Self {
        CoreError::parse(failure.to_string())
    }
}

/// Result of one recovery run.
///
/// Constructed and consumed within a single call; never persisted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseOutcome {
    /// A decoded object containing every required field
    Success(ParsedRecord),
    /// The chain gave up; see the failure for why
    Failure(ParseFailure),
}

impl ParseOutcome {
    /// Create a success outcome.
    pub fn success(record: ParsedRecord) -> Self {
        ParseOutcome::Success(record)
    }

    /// Create a failure outcome.
    pub fn failure(reason: FailureReason, detail: impl Into<String>) -> Self {
        ParseOutcome::Failure(ParseFailure::new(reason, detail))
    }

    /// Whether this outcome is a success.
    pub fn is_success(&self) -> bool {
        matches!(self, ParseOutcome::Success(_))
    }

    /// The failure reason, if this is a failure.
    pub fn failure_reason(&self) -> Option<FailureReason> {
        match self {
            ParseOutcome::Success(_) => None,
            ParseOutcome::Failure(f) => Some(f.reason),
        }
    }

    /// Consume the outcome, yielding the record on success.
    pub fn into_record(self) -> Option<ParsedRecord> {
        match self {
            ParseOutcome::Success(record) => Some(record),
            ParseOutcome::Failure(_) => None,
        }
    }
}
