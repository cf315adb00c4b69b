//! Evaluation-loss thresholds per classification tier.
//!
//! A fixed centipawn cutoff misjudges imbalanced positions: dropping 80 cp
//! from +600 is noise, dropping 80 cp from 0 is not. Each tier's tolerated
//! loss therefore grows quadratically with the magnitude of the previous
//! evaluation, with empirically fit coefficients.

use crate::eval::Classification;

/// Maximum tolerated centipawn loss for `kind` to apply, given the absolute
/// evaluation of the previous position. Never negative. `blunder` (and the
/// non-tier kinds `book`/`forced`) have no finite threshold.
pub fn evaluation_loss_threshold(kind: Classification, previous_abs_eval: f64) -> f64 {
    let x = previous_abs_eval.abs();
    let threshold = match kind {
        Classification::Brilliant => 0.00005 * x * x + 0.0035 * x - 45.0,
        Classification::Great => 0.00008 * x * x + 0.0088 * x + 8.0,
        Classification::Best => 0.0001 * x * x + 0.0236 * x - 3.7143,
        Classification::Excellent => 0.0002 * x * x + 0.1231 * x + 27.5455,
        Classification::Good => 0.0002 * x * x + 0.2643 * x + 60.5455,
        Classification::Inaccuracy => 0.0002 * x * x + 0.3624 * x + 108.0909,
        Classification::Mistake => 0.0003 * x * x + 0.4027 * x + 225.8182,
        Classification::Blunder | Classification::Book | Classification::Forced => f64::INFINITY,
    };
    threshold.max(0.0)
}
