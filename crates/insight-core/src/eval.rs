//! Input types: one engine assessment per position, plus the classification enum.

use serde::{Deserialize, Serialize};

/// Which side a field refers to. Serialized as `"w"` / `"b"` to match the
/// FEN side-to-move field and the engine wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    #[serde(rename = "w")]
    White,
    #[serde(rename = "b")]
    Black,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// +1 for white, -1 for black. Used to orient white-positive scores
    /// toward the side that moved.
    pub fn sign(self) -> i32 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }
}

/// Move quality labels, ordered best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Brilliant,
    Great,
    Best,
    Excellent,
    Good,
    Book,
    Forced,
    Inaccuracy,
    Mistake,
    Blunder,
}

/// The centipawn-loss tiers, checked in order. `blunder` is the catch-all
/// below all of these and is never iterated.
pub const CENTIPAWN_TIERS: [Classification; 7] = [
    Classification::Brilliant,
    Classification::Great,
    Classification::Best,
    Classification::Excellent,
    Classification::Good,
    Classification::Inaccuracy,
    Classification::Mistake,
];

impl Classification {
    /// Weight in [0, 1] used for the accuracy score.
    pub fn value(self) -> f64 {
        match self {
            Classification::Blunder => 0.0,
            Classification::Mistake => 0.2,
            Classification::Inaccuracy => 0.4,
            Classification::Good => 0.65,
            Classification::Excellent => 0.9,
            Classification::Best
            | Classification::Great
            | Classification::Brilliant
            | Classification::Book
            | Classification::Forced => 1.0,
        }
    }
}

/// One engine assessment of the position reached after a specific move.
///
/// Scores are from White's perspective: positive `eval_cp` favors White,
/// positive `mate_in` means White mates in N plies. When `mate_in` is set it
/// dominates `eval_cp`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionEvaluation {
    /// Position after the move. May be empty for malformed engine responses.
    #[serde(default)]
    pub fen: String,

    /// Centipawn score, absent when the engine found a forced mate or the
    /// call failed.
    pub eval_cp: Option<f64>,

    /// Forced mate in N plies, white-positive sign.
    pub mate_in: Option<i32>,

    /// Whose turn it is after the move, i.e. the opponent of the mover.
    pub side_to_move: Side,

    /// Engine's top choice from the position the move was played in.
    pub best_move_uci: Option<String>,

    /// The move actually played, UCI.
    pub played_move_uci: Option<String>,

    /// Candidate replies at this depth; length 1 signals a forced position.
    #[serde(default)]
    pub continuation: Vec<String>,

    /// Matched opening name, cosmetic only.
    pub opening: Option<String>,

    /// Search depth the engine reported, if any.
    pub depth: Option<u32>,
}

impl PositionEvaluation {
    /// The side that played the move leading to this position.
    pub fn mover(&self) -> Side {
        self.side_to_move.opponent()
    }

    /// True when the engine produced neither a centipawn score nor a mate.
    pub fn is_unscored(&self) -> bool {
        self.eval_cp.is_none() && self.mate_in.is_none()
    }

    /// True when the engine's top choice was the move played.
    pub fn played_engine_best(&self) -> bool {
        match (&self.played_move_uci, &self.best_move_uci) {
            (Some(played), Some(best)) => !best.is_empty() && played == best,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::White.opponent(), Side::Black);
        assert_eq!(Side::Black.opponent(), Side::White);
    }

    #[test]
    fn test_classification_values() {
        assert_eq!(Classification::Blunder.value(), 0.0);
        assert_eq!(Classification::Mistake.value(), 0.2);
        assert_eq!(Classification::Inaccuracy.value(), 0.4);
        assert_eq!(Classification::Good.value(), 0.65);
        assert_eq!(Classification::Excellent.value(), 0.9);
        assert_eq!(Classification::Best.value(), 1.0);
        assert_eq!(Classification::Book.value(), 1.0);
        assert_eq!(Classification::Forced.value(), 1.0);
    }

    #[test]
    fn test_classification_serializes_lowercase() {
        let json = serde_json::to_string(&Classification::Brilliant).unwrap();
        assert_eq!(json, "\"brilliant\"");
        let back: Classification = serde_json::from_str("\"inaccuracy\"").unwrap();
        assert_eq!(back, Classification::Inaccuracy);
    }

    #[test]
    fn test_played_engine_best() {
        let mut eval = PositionEvaluation {
            fen: String::new(),
            eval_cp: Some(20.0),
            mate_in: None,
            side_to_move: Side::Black,
            best_move_uci: Some("e2e4".to_string()),
            played_move_uci: Some("e2e4".to_string()),
            continuation: vec![],
            opening: None,
            depth: None,
        };
        assert!(eval.played_engine_best());

        eval.played_move_uci = Some("d2d4".to_string());
        assert!(!eval.played_engine_best());

        eval.best_move_uci = None;
        assert!(!eval.played_engine_best());
    }
}
