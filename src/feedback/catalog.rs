//! Diagnostic Tag Catalog
//!
//! The fixed set of diagnostic tags the product can surface after a practice
//! session. Selection state is keyed on tag titles, so titles must stay
//! unique within the catalog.

use prepdeck_core::{FeedbackTag, Severity};

/// Returns the default diagnostic tag catalog.
pub fn default_tag_catalog() -> Vec<FeedbackTag> {
    vec![
        // Critical: would sink the answer in a real interview
        FeedbackTag::new(
            "Vague success metrics",
            "The answer names no measurable outcome, so the interviewer cannot tell what success looks like.",
            Severity::Critical,
        ),
        FeedbackTag::new(
            "No prioritization rationale",
            "Choices are listed without explaining why they come before the alternatives.",
            Severity::Critical,
        ),
        FeedbackTag::new(
            "Ignores the target user",
            "The answer never identifies who the feature is for or what problem it solves for them.",
            Severity::Critical,
        ),
        // Moderate: noticeable weakness, recoverable with practice
        FeedbackTag::new(
            "Missing trade-off discussion",
            "Strong answers name at least one option they rejected and why.",
            Severity::Moderate,
        ),
        FeedbackTag::new(
            "Unstructured answer",
            "Points arrive in the order they were thought of rather than a framework the listener can follow.",
            Severity::Moderate,
        ),
        FeedbackTag::new(
            "No competitive context",
            "The answer treats the product as if it existed in a vacuum.",
            Severity::Moderate,
        ),
        FeedbackTag::new(
            "Weak risk assessment",
            "Launch and model risks are not acknowledged, let alone mitigated.",
            Severity::Moderate,
        ),
        // Minor: polish-level improvements
        FeedbackTag::new(
            "Overlong preamble",
            "The answer takes too long to get to its first substantive point.",
            Severity::Minor,
        ),
        FeedbackTag::new(
            "Jargon without definition",
            "Terms of art are used without a one-line grounding for the listener.",
            Severity::Minor,
        ),
        FeedbackTag::new(
            "No closing summary",
            "The answer ends without restating the recommendation in one sentence.",
            Severity::Minor,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_titles_unique() {
        let catalog = default_tag_catalog();
        let titles: HashSet<&str> = catalog.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles.len(), catalog.len());
    }

    #[test]
    fn test_catalog_covers_every_severity() {
        let catalog = default_tag_catalog();
        for severity in Severity::all() {
            assert!(
                catalog.iter().filter(|t| t.severity == severity).count() >= 2,
                "catalog needs at least two {} tags for backfill substitution",
                severity
            );
        }
    }
}
