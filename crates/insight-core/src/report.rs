//! Report aggregation: the full evaluation sequence in, one report out.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::classify::classify;
use crate::eval::{Classification, PositionEvaluation, Side};

/// Output of classifying one ply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRecord {
    /// 1-based position in the game's ply sequence.
    pub move_index: usize,
    pub fen: String,
    pub classification: Classification,
    #[serde(rename = "eval")]
    pub eval_cp: Option<f64>,
    #[serde(rename = "mate")]
    pub mate_in: Option<i32>,
}

/// Per-side classification histogram. All ten kinds always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationCounts {
    pub brilliant: u32,
    pub great: u32,
    pub best: u32,
    pub excellent: u32,
    pub good: u32,
    pub book: u32,
    pub forced: u32,
    pub inaccuracy: u32,
    pub mistake: u32,
    pub blunder: u32,
}

impl ClassificationCounts {
    pub fn increment(&mut self, kind: Classification) {
        match kind {
            Classification::Brilliant => self.brilliant += 1,
            Classification::Great => self.great += 1,
            Classification::Best => self.best += 1,
            Classification::Excellent => self.excellent += 1,
            Classification::Good => self.good += 1,
            Classification::Book => self.book += 1,
            Classification::Forced => self.forced += 1,
            Classification::Inaccuracy => self.inaccuracy += 1,
            Classification::Mistake => self.mistake += 1,
            Classification::Blunder => self.blunder += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.brilliant
            + self.great
            + self.best
            + self.excellent
            + self.good
            + self.book
            + self.forced
            + self.inaccuracy
            + self.mistake
            + self.blunder
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SideAccuracies {
    pub white: f64,
    pub black: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideClassifications {
    pub white: ClassificationCounts,
    pub black: ClassificationCounts,
}

/// The aggregate result for one game. Rebuilt wholesale from the evaluation
/// sequence whenever the game or depth changes, never mutated incrementally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub accuracies: SideAccuracies,
    pub classifications: SideClassifications,
    pub moves: Vec<MoveRecord>,
}

#[derive(Default)]
struct AccuracyTally {
    current: f64,
    maximum: u32,
}

impl AccuracyTally {
    fn percentage(&self) -> f64 {
        if self.maximum == 0 {
            return 0.0;
        }
        (self.current / f64::from(self.maximum) * 100.0).clamp(0.0, 100.0)
    }
}

/// Build a report from the ordered evaluation sequence, where
/// `evaluations[0]` is the position after White's first move.
///
/// Deterministic and idempotent: identical input always yields an identical
/// report. Plies the classifier cannot score are skipped with a warning and
/// appear in neither the move list nor the histograms.
pub fn build_report(evaluations: &[PositionEvaluation]) -> Report {
    let mut report = Report::default();
    let mut white = AccuracyTally::default();
    let mut black = AccuracyTally::default();

    for (i, current) in evaluations.iter().enumerate() {
        let previous = if i == 0 {
            None
        } else {
            Some(&evaluations[i - 1])
        };

        let kind = match classify(previous, current) {
            Some(kind) => kind,
            None => {
                warn!(move_index = i + 1, "skipping unscored ply");
                continue;
            }
        };

        let (tally, counts) = match current.mover() {
            Side::White => (&mut white, &mut report.classifications.white),
            Side::Black => (&mut black, &mut report.classifications.black),
        };
        counts.increment(kind);
        tally.current += kind.value();
        tally.maximum += 1;

        report.moves.push(MoveRecord {
            move_index: i + 1,
            fen: current.fen.clone(),
            classification: kind,
            eval_cp: current.eval_cp,
            mate_in: current.mate_in,
        });
    }

    report.accuracies.white = white.percentage();
    report.accuracies.black = black.percentage();
    report
}
