//! Tag Diversity Selector
//!
//! Selects `count` tags per practice round such that recently surfaced tags
//! are strongly disfavored, never-surfaced tags are favored, and the result
//! stays randomized rather than a fixed rotation.
//!
//! ## Selection Flow
//!
//! 1. Score every candidate with the recency-decay formula
//! 2. Sort by score descending, keep the top `min(count * 2, candidates)`
//!    as the working pool
//! 3. Draw without replacement, probability proportional to remaining scores
//! 4. Record the round index for every selected title
//!
//! One instance per selection stream (e.g., per user session). The instance
//! is constructed and owned explicitly by its caller, never shared through a
//! module-level singleton; `select_tags` takes `&mut self`, so concurrent use
//! of a single instance must be serialized by the owner.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use prepdeck_core::FeedbackTag;

use crate::scoring::{diversity_score, DEFAULT_BASE_WEIGHT};

/// Stateful diversity selector for one stream of practice rounds.
pub struct TagDiversitySelector<R: Rng = StdRng> {
    /// Fixed catalog of known titles; base weights are re-seeded from it on reset
    catalog: Vec<String>,
    /// Title -> base weight, seeded at construction, read-only during selection
    base_weights: HashMap<String, f64>,
    /// Title -> round index of the most recent selection.
    /// Grows without bound as new titles appear; `reset` is the only eviction.
    recent_selections: HashMap<String, u64>,
    rng: R,
}

impl TagDiversitySelector<StdRng> {
    /// Create a selector with an entropy-seeded generator.
    pub fn new(catalog: Vec<String>) -> Self {
        Self::with_rng(catalog, StdRng::from_entropy())
    }
}

impl<R: Rng> TagDiversitySelector<R> {
    /// Create a selector with an injected generator (seed it for
    /// deterministic tests).
    pub fn with_rng(catalog: Vec<String>, rng: R) -> Self {
        let base_weights = seed_weights(&catalog);
        Self {
            catalog,
            base_weights,
            recent_selections: HashMap::new(),
            rng,
        }
    }

    /// Select up to `count` tags from `candidates` for the given round.
    ///
    /// Degenerate inputs (empty pool, zero count) return an empty vector; a
    /// `count` beyond the pool size returns every candidate in weighted
    /// shuffle order. Never fails.
    pub fn select_tags(
        &mut self,
        candidates: &[FeedbackTag],
        count: usize,
        round_index: u64,
    ) -> Vec<FeedbackTag> {
        if count == 0 || candidates.is_empty() {
            return Vec::new();
        }

        // Step 1: score every candidate.
        let mut pool: Vec<(usize, f64)> = candidates
            .iter()
            .enumerate()
            .map(|(idx, tag)| {
                let base = self.base_weight(&tag.title);
                let last = self.recent_selections.get(&tag.title).copied();
                (idx, diversity_score(base, last, round_index))
            })
            .collect();

        // Step 2: keep the most diversity-favorable candidates, leaving room
        // for randomness among them.
        pool.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        pool.truncate(count.saturating_mul(2).min(candidates.len()));

        // Step 3: weighted draws without replacement.
        let mut selected = Vec::with_capacity(count.min(pool.len()));
        while selected.len() < count && !pool.is_empty() {
            let drawn = self.weighted_draw(&pool);
            let (candidate_idx, _) = pool.remove(drawn);
            selected.push(candidates[candidate_idx].clone());
        }

        // Step 4: record this round for every selected title.
        for tag in &selected {
            self.recent_selections.insert(tag.title.clone(), round_index);
        }

        tracing::debug!(
            round = round_index,
            pool = candidates.len(),
            picked = selected.len(),
            "selected feedback tags"
        );

        selected
    }

    /// Clear the selection history and re-seed base weights from the catalog,
    /// as for a fresh stream of rounds.
    pub fn reset(&mut self) {
        self.recent_selections.clear();
        self.base_weights = seed_weights(&self.catalog);
    }

    /// Record a title as selected in `round_index` without drawing it.
    ///
    /// Used by callers that substitute a tag after selection (e.g. severity
    /// backfill) so the substitute decays like a drawn tag.
    pub fn note_selected(&mut self, title: &str, round_index: u64) {
        self.recent_selections.insert(title.to_string(), round_index);
    }

    /// Round index of the most recent selection of `title`, if any.
    pub fn last_selected(&self, title: &str) -> Option<u64> {
        self.recent_selections.get(title).copied()
    }

    /// Base weight for a title; titles outside the catalog default to 1.0.
    pub fn base_weight(&self, title: &str) -> f64 {
        self.base_weights
            .get(title)
            .copied()
            .unwrap_or(DEFAULT_BASE_WEIGHT)
    }

    /// Index into `pool` of one weighted draw.
    fn weighted_draw(&mut self, pool: &[(usize, f64)]) -> usize {
        let total: f64 = pool.iter().map(|(_, score)| score).sum();
        if total <= 0.0 {
            return 0;
        }

        let mut x = self.rng.gen_range(0.0..total);
        for (i, (_, score)) in pool.iter().enumerate() {
            if x < *score {
                return i;
            }
            x -= score;
        }

        // Floating-point accumulation can leave x at the boundary.
        pool.len() - 1
    }
}

/// Seed every catalog title at weight 1.0.
fn seed_weights(catalog: &[String]) -> HashMap<String, f64> {
    catalog
        .iter()
        .map(|title| (title.clone(), DEFAULT_BASE_WEIGHT))
        .collect()
}
