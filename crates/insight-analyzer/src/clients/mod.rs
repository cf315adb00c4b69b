//! Game-history import clients.
//!
//! Each platform has its own wire shape; both are deserialized into typed
//! per-platform structs and converted to [`GameSummary`] at the boundary.
//! Raw platform shapes never leave this module.

pub mod chess_com;
pub mod lichess;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub username: Option<String>,
    pub rating: Option<u32>,
    /// Set when the opponent was an engine (Lichess AI games).
    pub ai_level: Option<u32>,
}

/// Platform-neutral summary of one importable game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSummary {
    pub white: PlayerInfo,
    pub black: PlayerInfo,
    pub time_class: String,
    pub pgn: String,
}
