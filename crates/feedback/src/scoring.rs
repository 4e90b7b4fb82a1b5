//! Diversity Scoring
//!
//! The pure scoring formula behind tag selection. Kept separate from the
//! selector so the decay table is independently testable.

/// Base weight assumed for titles outside the seeded catalog.
pub const DEFAULT_BASE_WEIGHT: f64 = 1.0;

/// Multiplier for titles never selected before.
pub const UNSEEN_BOOST: f64 = 2.0;

/// Multiplier for titles selected in the immediately prior round.
pub const PRIOR_ROUND_PENALTY: f64 = 0.1;

/// Multiplier for titles selected two rounds ago.
pub const TWO_ROUNDS_PENALTY: f64 = 0.5;

/// Multiplier once a title has been quiet for three or more rounds.
pub const SETTLED_MULTIPLIER: f64 = 1.0;

/// Diversity scoring formula:
///
///   score = base_weight × recency_multiplier
///
/// Where, with `distance = round_index − last_selected_round`:
///
///   never selected      2.0
///   distance <= 1       0.1
///   distance == 2       0.5
///   distance >= 3       1.0
///
/// A replayed round index (distance 0) gets the strongest penalty: callers
/// pass a monotonically increasing round counter, and a replay must never
/// score higher than a distance-1 repeat.
pub fn diversity_score(
    base_weight: f64,
    last_selected_round: Option<u64>,
    round_index: u64,
) -> f64 {
    let multiplier = match last_selected_round {
        None => UNSEEN_BOOST,
        Some(last) => match round_index.saturating_sub(last) {
            0 | 1 => PRIOR_ROUND_PENALTY,
            2 => TWO_ROUNDS_PENALTY,
            _ => SETTLED_MULTIPLIER,
        },
    };

    base_weight * multiplier
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unseen_title_boosted() {
        assert_eq!(diversity_score(1.0, None, 5), 2.0);
    }

    #[test]
    fn test_prior_round_penalized() {
        assert_eq!(diversity_score(1.0, Some(4), 5), 0.1);
    }

    #[test]
    fn test_two_rounds_ago() {
        assert_eq!(diversity_score(1.0, Some(3), 5), 0.5);
    }

    #[test]
    fn test_three_or_more_rounds_ago() {
        assert_eq!(diversity_score(1.0, Some(2), 5), 1.0);
        assert_eq!(diversity_score(1.0, Some(0), 100), 1.0);
    }

    #[test]
    fn test_replayed_round_index() {
        // distance 0 is treated like distance 1
        assert_eq!(diversity_score(1.0, Some(5), 5), 0.1);
    }

    #[test]
    fn test_score_recovers_monotonically() {
        let d1 = diversity_score(1.0, Some(9), 10);
        let d2 = diversity_score(1.0, Some(8), 10);
        let d3 = diversity_score(1.0, Some(7), 10);
        let unseen = diversity_score(1.0, None, 10);
        assert!(d1 < d2);
        assert!(d2 < d3);
        assert!(d3 < unseen);
    }

    #[test]
    fn test_base_weight_scales_score() {
        assert_eq!(diversity_score(3.0, None, 0), 6.0);
        assert!((diversity_score(0.5, Some(4), 5) - 0.05).abs() < 1e-12);
    }
}
