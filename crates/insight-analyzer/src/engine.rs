//! Remote engine client: one REST call per position, normalized at the
//! boundary into the analyzer's own evaluation type.

use serde::Deserialize;
use tracing::debug;

use crate::error::AnalyzerError;

/// Wire shape of the evaluation endpoint (stockfish.online v2 style).
#[derive(Debug, Deserialize)]
struct EngineResponse {
    success: bool,
    /// Pawn-unit score, white-positive.
    evaluation: Option<f64>,
    /// Mate in N plies, white-positive.
    mate: Option<i32>,
    /// Full bestmove line, e.g. `"bestmove b7b6 ponder f3e5"`.
    bestmove: Option<String>,
    /// Space-separated candidate continuation.
    continuation: Option<String>,
}

/// One normalized engine result. Centipawns, not pawns; mate dominates.
#[derive(Debug, Clone)]
pub struct RawEvaluation {
    pub eval_cp: Option<f64>,
    pub mate_in: Option<i32>,
    pub best_move_uci: Option<String>,
    pub continuation: Vec<String>,
    pub depth: u32,
}

pub struct EngineClient {
    client: reqwest::Client,
    base_url: String,
}

impl EngineClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, AnalyzerError> {
        let client = reqwest::Client::builder()
            .user_agent("ChessInsight/1.0")
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AnalyzerError::Engine(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    /// Evaluate a single position. Errors here are per-ply: the caller
    /// swallows them into a missing result rather than failing the batch.
    pub async fn evaluate(&self, fen: &str, depth: u32) -> Result<RawEvaluation, AnalyzerError> {
        debug!(fen, depth, "engine request");

        let resp = self
            .client
            .get(&self.base_url)
            .query(&[("fen", fen), ("depth", &depth.to_string())])
            .send()
            .await
            .map_err(|e| AnalyzerError::Engine(format!("Request error: {e}")))?;

        if !resp.status().is_success() {
            return Err(AnalyzerError::Engine(format!("HTTP {}", resp.status())));
        }

        let body: EngineResponse = resp
            .json()
            .await
            .map_err(|e| AnalyzerError::Engine(format!("JSON parse error: {e}")))?;

        if !body.success {
            return Err(AnalyzerError::Engine("engine reported failure".to_string()));
        }

        Ok(normalize_response(body, depth))
    }
}

/// Convert the wire shape to centipawns and split the move fields. When the
/// engine reports a mate the centipawn score is dropped: exactly one of the
/// two carries the true evaluation.
fn normalize_response(body: EngineResponse, depth: u32) -> RawEvaluation {
    let mate_in = body.mate;
    let eval_cp = if mate_in.is_some() {
        None
    } else {
        body.evaluation.map(|pawns| pawns * 100.0)
    };

    RawEvaluation {
        eval_cp,
        mate_in,
        best_move_uci: body.bestmove.as_deref().and_then(parse_best_move),
        continuation: body
            .continuation
            .map(|c| c.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default(),
        depth,
    }
}

/// Extract the move token from a `bestmove <uci> [ponder <uci>]` line.
fn parse_best_move(line: &str) -> Option<String> {
    let mut parts = line.split_whitespace();
    match parts.next() {
        Some("bestmove") => parts.next().map(str::to_string),
        // Some deployments return the bare move.
        Some(token) if !token.is_empty() => Some(token.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_best_move() {
        assert_eq!(
            parse_best_move("bestmove b7b6 ponder f3e5").as_deref(),
            Some("b7b6")
        );
        assert_eq!(parse_best_move("bestmove e2e4").as_deref(), Some("e2e4"));
        assert_eq!(parse_best_move("e2e4").as_deref(), Some("e2e4"));
        assert_eq!(parse_best_move(""), None);
    }

    #[test]
    fn test_normalize_pawns_to_centipawns() {
        let body: EngineResponse = serde_json::from_str(
            r#"{"success":true,"evaluation":1.36,"mate":null,"bestmove":"bestmove b7b6 ponder f3e5","continuation":"b7b6 f3e5 h7h6"}"#,
        )
        .unwrap();
        let raw = normalize_response(body, 12);
        assert_eq!(raw.eval_cp, Some(136.0));
        assert_eq!(raw.mate_in, None);
        assert_eq!(raw.best_move_uci.as_deref(), Some("b7b6"));
        assert_eq!(raw.continuation, vec!["b7b6", "f3e5", "h7h6"]);
        assert_eq!(raw.depth, 12);
    }

    #[test]
    fn test_normalize_mate_dominates() {
        let body: EngineResponse = serde_json::from_str(
            r#"{"success":true,"evaluation":9.99,"mate":-3,"bestmove":"bestmove g6g7","continuation":"g6g7"}"#,
        )
        .unwrap();
        let raw = normalize_response(body, 15);
        assert_eq!(raw.eval_cp, None);
        assert_eq!(raw.mate_in, Some(-3));
        assert_eq!(raw.continuation.len(), 1);
    }

    #[test]
    fn test_normalize_empty_fields() {
        let body: EngineResponse = serde_json::from_str(
            r#"{"success":true,"evaluation":null,"mate":null,"bestmove":null,"continuation":null}"#,
        )
        .unwrap();
        let raw = normalize_response(body, 10);
        assert_eq!(raw.eval_cp, None);
        assert_eq!(raw.mate_in, None);
        assert_eq!(raw.best_move_uci, None);
        assert!(raw.continuation.is_empty());
    }
}
