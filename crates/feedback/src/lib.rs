//! PrepDeck Feedback Selection
//!
//! Recency-decayed weighted-random selection of diagnostic feedback tags.
//! Pure round-robin exclusion would be predictable and would starve small
//! pools; this crate instead decays the weight of recently surfaced tags and
//! draws randomly from the most diversity-favorable candidates, so repeats
//! are unlikely but never impossible.
//!
//! - `scoring` - The recency-decay scoring formula
//! - `selector` - Stateful per-stream selector (`TagDiversitySelector`)

pub mod scoring;
pub mod selector;

// Re-export the scoring formula
pub use scoring::{
    diversity_score, DEFAULT_BASE_WEIGHT, PRIOR_ROUND_PENALTY, SETTLED_MULTIPLIER,
    TWO_ROUNDS_PENALTY, UNSEEN_BOOST,
};

// Re-export the selector
pub use selector::TagDiversitySelector;
