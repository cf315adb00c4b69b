//! Analyzer configuration from environment variables

use std::env;

use crate::error::AnalyzerError;

/// Default analysis depth, matching the UI default.
pub const DEFAULT_DEPTH: u32 = 12;

#[derive(Clone, Debug)]
pub struct AnalyzerConfig {
    /// Base URL of the engine evaluation endpoint
    pub engine_url: String,

    /// Search depth per position
    pub depth: u32,

    /// Maximum in-flight engine requests per game
    pub max_concurrent_evals: usize,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,

    /// Path to the opening-book JSON, if annotation is wanted
    pub opening_book_path: Option<String>,
}

impl AnalyzerConfig {
    /// Load configuration from environment variables, with defaults suitable
    /// for local use.
    pub fn from_env() -> Result<Self, AnalyzerError> {
        let engine_url = env::var("ENGINE_API_URL")
            .unwrap_or_else(|_| "https://stockfish.online/api/s/v2.php".to_string());

        if engine_url.is_empty() {
            return Err(AnalyzerError::Config("ENGINE_API_URL is empty"));
        }

        let depth = env::var("ANALYSIS_DEPTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_DEPTH);

        let max_concurrent_evals = env::var("MAX_CONCURRENT_EVALS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(4);

        let request_timeout_secs = env::var("ENGINE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let opening_book_path = env::var("OPENING_BOOK_PATH").ok();

        Ok(Self {
            engine_url,
            depth,
            max_concurrent_evals,
            request_timeout_secs,
            opening_book_path,
        })
    }
}
