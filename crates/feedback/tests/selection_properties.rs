//! Property tests for tag selection bounds.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use prepdeck_core::{FeedbackTag, Severity};
use prepdeck_feedback::TagDiversitySelector;

fn make_tags(n: usize) -> Vec<FeedbackTag> {
    (0..n)
        .map(|i| FeedbackTag::new(format!("tag-{}", i), "", Severity::Moderate))
        .collect()
}

proptest! {
    // Output length is always min(count, candidates).
    #[test]
    fn selection_respects_bounds(
        n_candidates in 0usize..16,
        count in 0usize..24,
        seed in any::<u64>(),
    ) {
        let tags = make_tags(n_candidates);
        let mut selector = TagDiversitySelector::with_rng(
            tags.iter().map(|t| t.title.clone()).collect(),
            StdRng::seed_from_u64(seed),
        );

        let picked = selector.select_tags(&tags, count, 0);
        prop_assert_eq!(picked.len(), count.min(n_candidates));
    }

    // A round never returns the same title twice, and only candidate titles.
    #[test]
    fn selection_draws_without_replacement(
        n_candidates in 1usize..16,
        count in 1usize..8,
        seed in any::<u64>(),
        round in 0u64..1000,
    ) {
        let tags = make_tags(n_candidates);
        let candidate_titles: HashSet<String> =
            tags.iter().map(|t| t.title.clone()).collect();
        let mut selector = TagDiversitySelector::with_rng(
            tags.iter().map(|t| t.title.clone()).collect(),
            StdRng::seed_from_u64(seed),
        );

        let picked = selector.select_tags(&tags, count, round);
        let picked_titles: HashSet<String> =
            picked.iter().map(|t| t.title.clone()).collect();

        prop_assert_eq!(picked_titles.len(), picked.len());
        prop_assert!(picked_titles.is_subset(&candidate_titles));
    }

    // Selection across many rounds never panics and always records history.
    #[test]
    fn multi_round_selection_is_total(
        count in 1usize..5,
        seed in any::<u64>(),
    ) {
        let tags = make_tags(8);
        let mut selector = TagDiversitySelector::with_rng(
            tags.iter().map(|t| t.title.clone()).collect(),
            StdRng::seed_from_u64(seed),
        );

        for round in 0..50u64 {
            for tag in selector.select_tags(&tags, count, round) {
                prop_assert_eq!(selector.last_selected(&tag.title), Some(round));
            }
        }
    }
}
