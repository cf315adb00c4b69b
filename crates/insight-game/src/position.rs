//! Board replay: turn a SAN move list into per-ply FENs and UCI moves.

use shakmaty::{fen::Fen, san::San, CastlingMode, Chess, EnPassantMode, Position};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PositionError {
    #[error("invalid SAN at ply {ply}: {san}")]
    InvalidSan { ply: usize, san: String },

    #[error("illegal move at ply {ply}: {san}")]
    IllegalMove { ply: usize, san: String },
}

/// One played ply: the position it produced and the move in UCI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedPosition {
    /// FEN after the move.
    pub fen_after: String,
    /// The move played, UCI notation.
    pub uci: String,
}

/// The standard starting position as FEN.
pub fn starting_fen() -> String {
    fen_of(&Chess::default())
}

/// Replay a full game from the starting position. Returns one entry per ply
/// in move order; `result[i]` is the position after ply `i+1`.
pub fn replay_moves(moves: &[String]) -> Result<Vec<PlayedPosition>, PositionError> {
    let mut pos = Chess::default();
    let mut played = Vec::with_capacity(moves.len());

    for (i, move_san) in moves.iter().enumerate() {
        let san: San = move_san.parse().map_err(|_| PositionError::InvalidSan {
            ply: i + 1,
            san: move_san.clone(),
        })?;

        let mv = san.to_move(&pos).map_err(|_| PositionError::IllegalMove {
            ply: i + 1,
            san: move_san.clone(),
        })?;

        let uci = mv.to_uci(CastlingMode::Standard).to_string();
        pos.play_unchecked(mv);

        played.push(PlayedPosition {
            fen_after: fen_of(&pos),
            uci,
        });
    }

    Ok(played)
}

fn fen_of(pos: &Chess) -> String {
    Fen::from_position(pos, EnPassantMode::Legal).to_string()
}
