//! Feedback Tag Model
//!
//! Data structures for the diagnostic tags surfaced after a practice session.

use serde::{Deserialize, Serialize};

/// How serious the diagnosed issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Issue that would sink the answer in a real interview
    Critical,
    /// Noticeable weakness, recoverable with practice
    Moderate,
    /// Polish-level improvement
    Minor,
}

impl Severity {
    /// All severities, highest first.
    pub fn all() -> [Severity; 3] {
        [Severity::Critical, Severity::Moderate, Severity::Minor]
    }

    /// Get the lowercase string form
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Moderate => "moderate",
            Severity::Minor => "minor",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A diagnostic feedback tag.
///
/// The `title` is the identity key: selection history and base weights are
/// keyed on it. The remaining fields are payload the selection algorithm
/// never inspects. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackTag {
    /// Identity key, unique within a catalog
    pub title: String,
    /// One-sentence explanation shown to the user
    pub description: String,
    /// Issue severity
    pub severity: Severity,
}

impl FeedbackTag {
    /// Create a new tag.
    pub fn new(title: impl Into<String>, description: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Critical.to_string(), "critical");
        assert_eq!(Severity::Minor.as_str(), "minor");
    }

    #[test]
    fn test_severity_serde_lowercase() {
        let json = serde_json::to_string(&Severity::Moderate).unwrap();
        assert_eq!(json, "\"moderate\"");
        let back: Severity = serde_json::from_str("\"critical\"").unwrap();
        assert_eq!(back, Severity::Critical);
    }

    #[test]
    fn test_tag_roundtrip() {
        let tag = FeedbackTag::new(
            "Vague success metrics",
            "The answer names no measurable outcome.",
            Severity::Critical,
        );
        let json = serde_json::to_string(&tag).unwrap();
        let back: FeedbackTag = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tag);
    }
}
