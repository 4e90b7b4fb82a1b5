//! Feedback Generator
//!
//! Owns one `TagDiversitySelector` and the round counter for a single user's
//! session stream, and layers the severity backfill on top of the selector's
//! diversity guarantee: when enough slots are requested, at least one tag of
//! each severity is surfaced so the feedback never reads as all-polish or
//! all-doom.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use prepdeck_core::{FeedbackTag, Severity};
use prepdeck_feedback::TagDiversitySelector;

use crate::feedback::catalog::default_tag_catalog;

/// Per-session feedback tag generator.
///
/// One instance per selection stream; construct a fresh one per user session
/// rather than sharing.
pub struct FeedbackGenerator<R: Rng = StdRng> {
    catalog: Vec<FeedbackTag>,
    selector: TagDiversitySelector<R>,
    next_round: u64,
}

impl FeedbackGenerator<StdRng> {
    /// Create a generator over the default catalog with an entropy-seeded
    /// generator.
    pub fn new() -> Self {
        Self::with_rng(default_tag_catalog(), StdRng::from_entropy())
    }
}

impl Default for FeedbackGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> FeedbackGenerator<R> {
    /// Create a generator over a custom catalog with an injected generator.
    pub fn with_rng(catalog: Vec<FeedbackTag>, rng: R) -> Self {
        let titles = catalog.iter().map(|t| t.title.clone()).collect();
        Self {
            catalog,
            selector: TagDiversitySelector::with_rng(titles, rng),
            next_round: 0,
        }
    }

    /// Select the feedback tags for the next practice session.
    pub fn next_feedback(&mut self, count: usize) -> Vec<FeedbackTag> {
        let round = self.next_round;
        self.next_round += 1;

        let mut picked = self.selector.select_tags(&self.catalog, count, round);
        self.backfill_severities(&mut picked, round);
        picked
    }

    /// How many rounds this generator has produced.
    pub fn rounds_played(&self) -> u64 {
        self.next_round
    }

    /// Start a fresh stream of rounds: clears selection history and the
    /// round counter.
    pub fn reset(&mut self) {
        self.selector.reset();
        self.next_round = 0;
    }

    /// Ensure every severity is represented when the slot count allows it.
    ///
    /// A missing severity is filled by swapping in an unpicked catalog tag of
    /// that severity over a slot whose severity is represented more than
    /// once. Among eligible substitutes the least recently surfaced one is
    /// preferred, and the substitute is recorded in selection history so it
    /// decays like a drawn tag.
    fn backfill_severities(&mut self, picked: &mut [FeedbackTag], round: u64) {
        if picked.len() < Severity::all().len() {
            return;
        }

        for severity in Severity::all() {
            if picked.iter().any(|t| t.severity == severity) {
                continue;
            }

            let substitute = match self
                .catalog
                .iter()
                .filter(|t| t.severity == severity && !picked.iter().any(|p| p.title == t.title))
                .min_by_key(|t| {
                    // Never-surfaced tags first, then the longest-quiet one.
                    self.selector
                        .last_selected(&t.title)
                        .map(|r| r + 1)
                        .unwrap_or(0)
                }) {
                Some(tag) => tag.clone(),
                None => continue,
            };

            let slot = match duplicated_severity_slot(picked) {
                Some(idx) => idx,
                None => continue,
            };

            tracing::debug!(
                severity = %severity,
                substitute = %substitute.title,
                "backfilled missing severity"
            );
            self.selector.note_selected(&substitute.title, round);
            picked[slot] = substitute;
        }
    }
}

/// Index of a slot whose severity appears more than once in `picked`.
fn duplicated_severity_slot(picked: &[FeedbackTag]) -> Option<usize> {
    picked.iter().position(|tag| {
        picked
            .iter()
            .filter(|other| other.severity == tag.severity)
            .count()
            > 1
    })
}
