//! Evaluation Record Schema
//!
//! The typed evaluation record the product expects back from the model, the
//! required-field set used to validate recovered JSON, and the fallback
//! record substituted when recovery fails so downstream display code never
//! sees a hole.

use serde::{Deserialize, Serialize};

use prepdeck_core::CoreResult;

/// Field names a usable evaluation record must contain.
pub const REQUIRED_FIELDS: &[&str] = &["score", "strengths", "improvements", "sample_answer"];

/// A scored evaluation of one practice answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    /// Overall score, 0-100
    pub score: f64,
    /// What the answer did well
    pub strengths: Vec<String>,
    /// Concrete things to improve
    pub improvements: Vec<String>,
    /// A model answer for comparison
    pub sample_answer: String,
}

impl EvaluationRecord {
    /// Score clamped into the displayable 0-100 range.
    pub fn clamped_score(&self) -> f64 {
        self.score.clamp(0.0, 100.0)
    }

    /// Neutral record substituted when the model reply cannot be recovered.
    pub fn fallback() -> Self {
        Self {
            score: 60.0,
            strengths: vec!["You gave a complete answer to the question.".to_string()],
            improvements: vec![
                "We could not fully analyze this answer; try rephrasing it.".to_string(),
            ],
            sample_answer: "A strong answer states the goal, the target user, \
                            the prioritized approach, and the success metric."
                .to_string(),
        }
    }

    /// Compact example used in the evaluation prompt's output contract.
    pub(crate) fn example() -> Self {
        Self {
            score: 78.0,
            strengths: vec![
                "Clear articulation of the user problem".to_string(),
                "Metrics tied to the stated goal".to_string(),
            ],
            improvements: vec!["Discuss at least one trade-off you rejected".to_string()],
            sample_answer: "I would start from the underserved segment...".to_string(),
        }
    }
}

/// Recover a typed evaluation record from raw model output.
///
/// Runs the full recovery chain, validates `REQUIRED_FIELDS`, and
/// deserializes into `EvaluationRecord`. The caller decides whether an error
/// warrants a retry of the generation call or a fallback record.
pub fn decode_evaluation(raw: &str) -> CoreResult<EvaluationRecord> {
    let record = prepdeck_recovery::parse_into(raw, REQUIRED_FIELDS)?;
    Ok(record)
}

/// Recover a typed evaluation record, substituting the fallback on failure.
pub fn decode_evaluation_or_fallback(raw: &str) -> EvaluationRecord {
    match prepdeck_recovery::parse_into(raw, REQUIRED_FIELDS) {
        Ok(record) => record,
        Err(failure) => {
            tracing::warn!(reason = %failure.reason, "substituting fallback evaluation record");
            EvaluationRecord::fallback()
        }
    }
}
