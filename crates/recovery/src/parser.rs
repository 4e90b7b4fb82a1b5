//! Response Recovery Parser
//!
//! The ordered fallback chain. Each stage attempts a strict `serde_json`
//! decode of its candidate text before the next, more aggressive stage runs:
//!
//! 1. Direct decode of the trimmed input
//! 2. Fence/preamble stripping, then slicing to the brace span
//! 3. Syntactic repair of the brace span (see `stages::REPAIR_SEQUENCE`)
//!
//! Empty input short-circuits before stage 1. After any successful decode the
//! object is checked against the caller's required fields. The chain never
//! panics and never returns `Err`; every failure is a tagged outcome.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::outcome::{FailureReason, ParseFailure, ParseOutcome, ParsedRecord};
use crate::stages;

/// Max chars of raw input carried in a diagnostic detail.
const MAX_DIAGNOSTIC_CHARS: usize = 500;

/// Recover a JSON object from raw model output and validate required fields.
pub fn parse(raw: &str, required_fields: &[&str]) -> ParseOutcome {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ParseOutcome::failure(FailureReason::EmptyInput, "");
    }

    // Stage 1: strict decode of the input as-is.
    if let Some(record) = decode_object(trimmed) {
        return validate_required(record, required_fields);
    }

    // Stage 2: strip fences and surrounding prose, slice to the brace span.
    let unfenced = stages::strip_code_fences(trimmed);
    let unfenced = unfenced.trim();
    let sliced = match stages::slice_to_object(unfenced) {
        Some(span) => span,
        // A lone opening brace still deserves a repair attempt; text without
        // any opening brace is not JSON.
        None => match unfenced.find('{') {
            Some(pos) => &unfenced[pos..],
            None => {
                return ParseOutcome::failure(FailureReason::NoJsonFound, diagnostic(raw));
            }
        },
    };
    if let Some(record) = decode_object(sliced) {
        tracing::debug!(stage = "slice", "recovered JSON object after fence stripping");
        return validate_required(record, required_fields);
    }

    // Stage 3: syntactic repair of the brace span, one cumulative step at a
    // time. Decoding between steps keeps a later repair from corrupting text
    // an earlier step already fixed.
    let mut candidate = sliced.to_string();
    for &(stage_name, repair) in stages::REPAIR_SEQUENCE {
        candidate = repair(&candidate);
        if let Some(record) = decode_object(&candidate) {
            tracing::debug!(stage = stage_name, "recovered JSON object after syntactic repair");
            return validate_required(record, required_fields);
        }
    }

    tracing::warn!("recovery chain exhausted without a decodable JSON object");
    ParseOutcome::failure(FailureReason::MalformedAfterRecovery, diagnostic(raw))
}

/// Recover and deserialize into a typed record in one step.
///
/// Serde mismatches after a successful recovery (wrong field type, etc.) are
/// reported as `MalformedAfterRecovery` with the serde message as detail.
pub fn parse_into<T: DeserializeOwned>(
    raw: &str,
    required_fields: &[&str],
) -> Result<T, ParseFailure> {
    match parse(raw, required_fields) {
        ParseOutcome::Success(record) => serde_json::from_value(Value::Object(record))
            .map_err(|e| ParseFailure::new(FailureReason::MalformedAfterRecovery, e.to_string())),
        ParseOutcome::Failure(failure) => Err(failure),
    }
}

/// Strict decode; only a top-level JSON object counts as a usable record.
fn decode_object(text: &str) -> Option<ParsedRecord> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// Check the decoded record against the caller's required field names.
fn validate_required(record: ParsedRecord, required_fields: &[&str]) -> ParseOutcome {
    let missing: Vec<&str> = required_fields
        .iter()
        .filter(|field| !record.contains_key(**field))
        .copied()
        .collect();

    if missing.is_empty() {
        ParseOutcome::success(record)
    } else {
        ParseOutcome::failure(FailureReason::MissingRequiredFields, missing.join(", "))
    }
}

/// First `MAX_DIAGNOSTIC_CHARS` chars of the input, char-boundary safe.
fn diagnostic(raw: &str) -> String {
    raw.chars().take(MAX_DIAGNOSTIC_CHARS).collect()
}
