//! Analysis orchestration: engine REST client, game-history import, and the
//! per-game evaluation pipeline feeding `insight-core`.

pub mod analyzer;
pub mod clients;
pub mod config;
pub mod engine;
pub mod error;
pub mod session;

pub use analyzer::{analyze_game, AnalysisEvent};
pub use config::AnalyzerConfig;
pub use engine::EngineClient;
pub use error::AnalyzerError;
pub use session::AnalysisSession;
