use chrono::Datelike;
use reqwest::Client;
use serde::Deserialize;

use super::{GameSummary, PlayerInfo};
use crate::error::AnalyzerError;

#[derive(Debug, Deserialize)]
struct ArchiveResponse {
    #[serde(default)]
    games: Vec<ChessComGame>,
}

#[derive(Debug, Deserialize)]
struct ChessComGame {
    rated: Option<bool>,
    rules: Option<String>,
    time_class: Option<String>,
    pgn: Option<String>,
    white: ChessComPlayer,
    black: ChessComPlayer,
}

#[derive(Debug, Deserialize)]
struct ChessComPlayer {
    username: Option<String>,
    rating: Option<u32>,
}

impl ChessComGame {
    fn into_summary(self) -> Option<GameSummary> {
        let pgn = self.pgn?;
        Some(GameSummary {
            white: PlayerInfo {
                username: self.white.username,
                rating: self.white.rating,
                ai_level: None,
            },
            black: PlayerInfo {
                username: self.black.username,
                rating: self.black.rating,
                ai_level: None,
            },
            time_class: self.time_class.unwrap_or_else(|| "unknown".to_string()),
            pgn,
        })
    }
}

pub struct ChessComClient {
    client: Client,
    base_url: String,
}

impl ChessComClient {
    pub fn new() -> Result<Self, AnalyzerError> {
        Self::with_base_url("https://api.chess.com/pub")
    }

    pub fn with_base_url(base_url: &str) -> Result<Self, AnalyzerError> {
        let client = Client::builder()
            .user_agent("ChessInsight/1.0")
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| AnalyzerError::Import(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch a user's games from a monthly archive. Defaults to the current
    /// month. Rated standard-chess games only.
    pub async fn fetch_user_games(
        &self,
        username: &str,
        year: Option<i32>,
        month: Option<u32>,
    ) -> Result<Vec<GameSummary>, AnalyzerError> {
        let now = chrono::Utc::now();
        let year = year.unwrap_or_else(|| now.year());
        let month = month.unwrap_or_else(|| now.month());

        let url = format!(
            "{}/player/{}/games/{}/{:02}",
            self.base_url, username, year, month
        );

        // Rate limit
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AnalyzerError::Import(format!("Request error: {e}")))?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(vec![]);
        }

        if !resp.status().is_success() {
            return Err(AnalyzerError::Import(format!("HTTP {}", resp.status())));
        }

        let archive: ArchiveResponse = resp
            .json()
            .await
            .map_err(|e| AnalyzerError::Import(format!("JSON parse error: {e}")))?;

        Ok(archive
            .games
            .into_iter()
            .filter(|game| game.rated.unwrap_or(true))
            .filter(|game| game.rules.as_deref().unwrap_or("chess") == "chess")
            .filter_map(ChessComGame::into_summary)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archive_deserializes_and_normalizes() {
        let json = r#"{
            "games": [
                {
                    "rated": true,
                    "rules": "chess",
                    "time_class": "blitz",
                    "pgn": "[White \"a\"]\n1. e4 e5 *",
                    "white": {"username": "alice", "rating": 1500},
                    "black": {"username": "bob", "rating": 1480}
                },
                {
                    "rated": true,
                    "rules": "chess960",
                    "pgn": "ignored",
                    "white": {"username": "x"},
                    "black": {"username": "y"}
                }
            ]
        }"#;

        let archive: ArchiveResponse = serde_json::from_str(json).unwrap();
        let summaries: Vec<GameSummary> = archive
            .games
            .into_iter()
            .filter(|g| g.rules.as_deref().unwrap_or("chess") == "chess")
            .filter_map(ChessComGame::into_summary)
            .collect();

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].white.username.as_deref(), Some("alice"));
        assert_eq!(summaries[0].white.rating, Some(1500));
        assert_eq!(summaries[0].time_class, "blitz");
    }

    #[test]
    fn test_game_without_pgn_is_dropped() {
        let json = r#"{
            "rated": true,
            "rules": "chess",
            "white": {"username": "a"},
            "black": {"username": "b"}
        }"#;
        let game: ChessComGame = serde_json::from_str(json).unwrap();
        assert!(game.into_summary().is_none());
    }
}
