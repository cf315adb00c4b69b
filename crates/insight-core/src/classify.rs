//! Single-move classification.

use crate::eval::{Classification, PositionEvaluation, CENTIPAWN_TIERS};
use crate::threshold::evaluation_loss_threshold;

/// Classify the move that led from `previous` to `current`.
///
/// Rules are checked in strict priority order: opening move, engine-best
/// match, forced move, mate transitions, then centipawn loss against the
/// tier thresholds. Mate scores dominate centipawn scores whenever present.
///
/// Returns `None` when the centipawn comparison is required but either
/// position has no score (failed engine call). Such plies are skipped by the
/// aggregator rather than defaulted to zero loss.
pub fn classify(
    previous: Option<&PositionEvaluation>,
    current: &PositionEvaluation,
) -> Option<Classification> {
    let previous = match previous {
        // No prior position: opening move.
        None => return Some(Classification::Book),
        Some(p) => p,
    };

    if current.played_engine_best() {
        return Some(Classification::Best);
    }

    // Engine reported exactly one reasonable reply existed.
    if current.continuation.len() == 1 {
        return Some(Classification::Forced);
    }

    // Mate transitions, seen from the side that just moved. Scores are
    // white-positive, so a mate favors the mover when the signs agree.
    let sign = current.mover().sign();
    match (previous.mate_in, current.mate_in) {
        (None, Some(mate)) => {
            return Some(if mate * sign > 0 {
                Classification::Brilliant
            } else {
                Classification::Blunder
            });
        }
        (Some(mate), None) => {
            // A forced mate disappeared. Escaping the opponent's mate is
            // best play; letting your own slip is a blunder.
            return Some(if mate * sign < 0 {
                Classification::Best
            } else {
                Classification::Blunder
            });
        }
        (Some(prev_mate), Some(cur_mate)) => {
            return Some(if prev_mate.signum() == cur_mate.signum() {
                if cur_mate.abs() < prev_mate.abs() {
                    Classification::Best
                } else if cur_mate.abs() == prev_mate.abs() {
                    Classification::Excellent
                } else {
                    // Slower mate, still winning.
                    Classification::Good
                }
            } else {
                Classification::Blunder
            });
        }
        (None, None) => {}
    }

    let prev_eval = previous.eval_cp?;
    let cur_eval = current.eval_cp?;

    // Positive when the position got worse for the mover.
    let eval_loss = f64::from(sign) * (prev_eval - cur_eval);

    for kind in CENTIPAWN_TIERS {
        if evaluation_loss_threshold(kind, prev_eval.abs()) >= eval_loss {
            return Some(kind);
        }
    }
    Some(Classification::Blunder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::Side;

    fn eval(cp: Option<f64>, mate: Option<i32>, side_to_move: Side) -> PositionEvaluation {
        PositionEvaluation {
            fen: String::new(),
            eval_cp: cp,
            mate_in: mate,
            side_to_move,
            best_move_uci: None,
            played_move_uci: None,
            continuation: vec!["e7e5".to_string(), "c7c5".to_string()],
            opening: None,
            depth: None,
        }
    }

    #[test]
    fn test_opening_move_is_book() {
        let current = eval(Some(30.0), None, Side::Black);
        assert_eq!(classify(None, &current), Some(Classification::Book));
    }

    #[test]
    fn test_engine_match_is_best_regardless_of_loss() {
        let previous = eval(Some(50.0), None, Side::White);
        let mut current = eval(Some(-400.0), None, Side::Black);
        current.best_move_uci = Some("g1f3".to_string());
        current.played_move_uci = Some("g1f3".to_string());
        assert_eq!(
            classify(Some(&previous), &current),
            Some(Classification::Best)
        );
    }

    #[test]
    fn test_single_continuation_is_forced() {
        let previous = eval(Some(0.0), None, Side::White);
        let mut current = eval(Some(-90.0), None, Side::Black);
        current.continuation = vec!["e8d8".to_string()];
        assert_eq!(
            classify(Some(&previous), &current),
            Some(Classification::Forced)
        );
    }

    #[test]
    fn test_mate_found_for_mover_is_brilliant() {
        // White just moved and now mates in 3.
        let previous = eval(Some(0.0), None, Side::White);
        let current = eval(None, Some(3), Side::Black);
        assert_eq!(
            classify(Some(&previous), &current),
            Some(Classification::Brilliant)
        );
    }

    #[test]
    fn test_mate_allowed_against_mover_is_blunder() {
        // White just moved and walked into a forced mate.
        let previous = eval(Some(10.0), None, Side::White);
        let current = eval(None, Some(-4), Side::Black);
        assert_eq!(
            classify(Some(&previous), &current),
            Some(Classification::Blunder)
        );
    }

    #[test]
    fn test_escaping_opponent_mate_is_best() {
        // Black had mate in 2 against white; white's move dissolved it.
        let previous = eval(None, Some(-2), Side::White);
        let current = eval(Some(-150.0), None, Side::Black);
        assert_eq!(
            classify(Some(&previous), &current),
            Some(Classification::Best)
        );
    }

    #[test]
    fn test_throwing_away_own_mate_is_blunder() {
        // White had mate in 2 and lost it.
        let previous = eval(None, Some(2), Side::White);
        let current = eval(Some(300.0), None, Side::Black);
        assert_eq!(
            classify(Some(&previous), &current),
            Some(Classification::Blunder)
        );
    }

    #[test]
    fn test_mate_persists_shorter_equal_longer() {
        let previous = eval(None, Some(5), Side::White);

        let shorter = eval(None, Some(3), Side::Black);
        assert_eq!(
            classify(Some(&previous), &shorter),
            Some(Classification::Best)
        );

        let equal = eval(None, Some(5), Side::Black);
        assert_eq!(
            classify(Some(&previous), &equal),
            Some(Classification::Excellent)
        );

        let longer = eval(None, Some(7), Side::Black);
        assert_eq!(
            classify(Some(&previous), &longer),
            Some(Classification::Good)
        );
    }

    #[test]
    fn test_mate_side_flip_is_blunder() {
        let previous = eval(None, Some(4), Side::White);
        let current = eval(None, Some(-2), Side::Black);
        assert_eq!(
            classify(Some(&previous), &current),
            Some(Classification::Blunder)
        );
    }

    #[test]
    fn test_large_loss_is_blunder() {
        // +50 to -400 as white: 450 cp loss exceeds every finite threshold.
        let previous = eval(Some(50.0), None, Side::White);
        let current = eval(Some(-400.0), None, Side::Black);
        assert_eq!(
            classify(Some(&previous), &current),
            Some(Classification::Blunder)
        );
    }

    #[test]
    fn test_small_loss_lands_in_a_decent_tier() {
        let previous = eval(Some(20.0), None, Side::White);
        let current = eval(Some(15.0), None, Side::Black);
        let kind = classify(Some(&previous), &current).unwrap();
        assert!(matches!(
            kind,
            Classification::Brilliant | Classification::Great | Classification::Best
        ));
    }

    #[test]
    fn test_loss_orientation_for_black() {
        // Black just moved; eval swinging toward white is a loss for black.
        let previous = eval(Some(-50.0), None, Side::Black);
        let current = eval(Some(400.0), None, Side::White);
        assert_eq!(
            classify(Some(&previous), &current),
            Some(Classification::Blunder)
        );
    }

    #[test]
    fn test_unscored_position_is_skipped() {
        let previous = eval(Some(0.0), None, Side::White);
        let current = eval(None, None, Side::Black);
        assert_eq!(classify(Some(&previous), &current), None);

        let previous = eval(None, None, Side::White);
        let current = eval(Some(0.0), None, Side::Black);
        assert_eq!(classify(Some(&previous), &current), None);
    }
}
