use reqwest::Client;
use serde::Deserialize;
use tracing::warn;

use super::{GameSummary, PlayerInfo};
use crate::error::AnalyzerError;

#[derive(Debug, Deserialize)]
struct LichessGame {
    speed: Option<String>,
    pgn: Option<String>,
    players: LichessPlayers,
}

#[derive(Debug, Deserialize)]
struct LichessPlayers {
    white: LichessPlayer,
    black: LichessPlayer,
}

#[derive(Debug, Deserialize)]
struct LichessPlayer {
    user: Option<LichessUser>,
    rating: Option<u32>,
    #[serde(rename = "aiLevel")]
    ai_level: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct LichessUser {
    name: String,
}

impl LichessPlayer {
    fn into_info(self) -> PlayerInfo {
        PlayerInfo {
            username: self.user.map(|u| u.name),
            rating: self.rating,
            ai_level: self.ai_level,
        }
    }
}

impl LichessGame {
    fn into_summary(self) -> Option<GameSummary> {
        let pgn = self.pgn.filter(|p| !p.is_empty())?;
        Some(GameSummary {
            white: self.players.white.into_info(),
            black: self.players.black.into_info(),
            time_class: self.speed.unwrap_or_else(|| "unknown".to_string()),
            pgn,
        })
    }
}

pub struct LichessClient {
    client: Client,
    base_url: String,
}

impl LichessClient {
    pub fn new() -> Result<Self, AnalyzerError> {
        Self::with_base_url("https://lichess.org")
    }

    pub fn with_base_url(base_url: &str) -> Result<Self, AnalyzerError> {
        let client = Client::builder()
            .user_agent("ChessInsight/1.0")
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .map_err(|e| AnalyzerError::Import(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch a user's recent games as NDJSON with inline PGN.
    pub async fn fetch_user_games(
        &self,
        username: &str,
        max_games: Option<usize>,
    ) -> Result<Vec<GameSummary>, AnalyzerError> {
        let url = format!("{}/api/games/user/{}", self.base_url, username);

        let mut params = vec![("pgnInJson", "true".to_string())];
        if let Some(max) = max_games {
            params.push(("max", max.to_string()));
        }

        // Rate limit
        tokio::time::sleep(std::time::Duration::from_secs(1)).await;

        let resp = self
            .client
            .get(&url)
            .query(&params)
            .header("Accept", "application/x-ndjson")
            .send()
            .await
            .map_err(|e| AnalyzerError::Import(format!("Request error: {e}")))?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(AnalyzerError::Import("User not found".to_string()));
        }

        if !resp.status().is_success() {
            return Err(AnalyzerError::Import(format!("HTTP {}", resp.status())));
        }

        let text = resp
            .text()
            .await
            .map_err(|e| AnalyzerError::Import(format!("Body read error: {e}")))?;

        let mut results = Vec::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match serde_json::from_str::<LichessGame>(line) {
                Ok(game) => {
                    if let Some(summary) = game.into_summary() {
                        results.push(summary);
                    }
                }
                Err(e) => {
                    warn!("Failed to parse Lichess game JSON: {e}");
                }
            }
        }

        Ok(results)
    }
}
