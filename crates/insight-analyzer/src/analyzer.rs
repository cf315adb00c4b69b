//! Batch game analysis: one engine call per position, reassembled in ply
//! order, classified and aggregated into a report.

use futures::stream::{self, StreamExt};
use serde::Serialize;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{info, warn};

use insight_core::{build_report, PositionEvaluation, Report, Side};
use insight_game::position::starting_fen;
use insight_game::{replay_moves, GameData, OpeningBook, PlayedPosition};

use crate::config::AnalyzerConfig;
use crate::engine::{EngineClient, RawEvaluation};
use crate::error::AnalyzerError;

/// Progress notifications emitted while a game is being analyzed.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnalysisEvent {
    Progress {
        completed: u32,
        total: u32,
        percent: u8,
    },
}

/// Analyze a full game and build its report.
///
/// Evaluates the starting position plus the position after every ply.
/// Requests run concurrently up to `config.max_concurrent_evals` but results
/// are kept in ply order. A failed engine call drops that ply from the
/// report instead of failing the batch. Cancellation is by dropping the
/// future; no partial report is ever returned.
pub async fn analyze_game(
    engine: &EngineClient,
    book: Option<&OpeningBook>,
    game: &GameData,
    config: &AnalyzerConfig,
    progress: Option<UnboundedSender<AnalysisEvent>>,
) -> Result<Report, AnalyzerError> {
    let played = replay_moves(&game.moves)?;
    info!(
        white = %game.metadata.white,
        black = %game.metadata.black,
        plies = played.len(),
        depth = config.depth,
        "Starting analysis"
    );

    // Start position first, then the position after each ply. The start
    // evaluation only contributes the engine's best move for ply 1.
    let mut fens = Vec::with_capacity(played.len() + 1);
    fens.push(starting_fen());
    fens.extend(played.iter().map(|p| p.fen_after.clone()));

    let total = fens.len() as u32;
    let depth = config.depth;

    let mut raw_results: Vec<Option<RawEvaluation>> = Vec::with_capacity(fens.len());
    {
        let mut evals = stream::iter(fens.iter().enumerate().map(|(i, fen)| async move {
            match engine.evaluate(fen, depth).await {
                Ok(raw) => Some(raw),
                Err(e) => {
                    warn!(ply = i, error = %e, "Engine call failed, dropping ply");
                    None
                }
            }
        }))
        .buffered(config.max_concurrent_evals.max(1));

        let mut completed = 0u32;
        while let Some(result) = evals.next().await {
            raw_results.push(result);
            completed += 1;
            if let Some(tx) = &progress {
                let _ = tx.send(AnalysisEvent::Progress {
                    completed,
                    total,
                    percent: (completed * 100 / total) as u8,
                });
            }
        }
    }

    let evaluations = assemble_evaluations(&played, raw_results, book);
    let retained: Vec<PositionEvaluation> = evaluations.into_iter().flatten().collect();

    let dropped = played.len() - retained.len();
    if dropped > 0 {
        warn!(dropped, "Plies excluded from report");
    }

    let report = build_report(&retained);
    info!(
        moves = report.moves.len(),
        white_accuracy = report.accuracies.white,
        black_accuracy = report.accuracies.black,
        "Analysis complete"
    );
    Ok(report)
}

/// Pair raw engine results with the played moves.
///
/// `raw[0]` is the starting position, `raw[i + 1]` the position after ply
/// `i + 1`. Each ply's evaluation carries the engine's best move from the
/// position the move was played in, so a best-move match can be detected.
/// Plies whose own evaluation failed become `None`.
fn assemble_evaluations(
    played: &[PlayedPosition],
    raw: Vec<Option<RawEvaluation>>,
    book: Option<&OpeningBook>,
) -> Vec<Option<PositionEvaluation>> {
    played
        .iter()
        .enumerate()
        .map(|(i, ply)| {
            let current = raw.get(i + 1).and_then(|r| r.as_ref())?;
            let best_before = raw
                .get(i)
                .and_then(|r| r.as_ref())
                .and_then(|r| r.best_move_uci.clone());

            // White moves on even plies (0-based), so the side to move in
            // the resulting position is the opponent.
            let side_to_move = side_from_fen(&ply.fen_after).unwrap_or(if i % 2 == 0 {
                Side::Black
            } else {
                Side::White
            });

            Some(PositionEvaluation {
                fen: ply.fen_after.clone(),
                eval_cp: current.eval_cp,
                mate_in: current.mate_in,
                side_to_move,
                best_move_uci: best_before,
                played_move_uci: Some(ply.uci.clone()),
                continuation: current.continuation.clone(),
                opening: book.and_then(|b| b.find(&ply.fen_after)).map(str::to_string),
                depth: Some(current.depth),
            })
        })
        .collect()
}

fn side_from_fen(fen: &str) -> Option<Side> {
    match fen.split_whitespace().nth(1) {
        Some("w") => Some(Side::White),
        Some("b") => Some(Side::Black),
        _ => None,
    }
}
