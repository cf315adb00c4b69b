//! Analyzer error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("Configuration error: {0}")]
    Config(&'static str),

    #[error("Engine error: {0}")]
    Engine(String),

    #[error("Import error: {0}")]
    Import(String),

    #[error("PGN error: {0}")]
    Pgn(#[from] insight_game::PgnError),

    #[error("Position error: {0}")]
    Position(#[from] insight_game::PositionError),

    #[error("Opening book error: {0}")]
    OpeningBook(#[from] insight_game::OpeningBookError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
