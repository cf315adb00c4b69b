//! Game analysis CLI
//!
//! Analyze a PGN file against a remote engine and print the report as JSON,
//! or list a user's importable games from Chess.com / Lichess.

use anyhow::{bail, Context, Result};
use tracing::info;

use insight_analyzer::analyzer::{analyze_game, AnalysisEvent};
use insight_analyzer::clients::{chess_com::ChessComClient, lichess::LichessClient};
use insight_analyzer::config::AnalyzerConfig;
use insight_analyzer::engine::EngineClient;
use insight_game::{parse_pgn, OpeningBook};

struct CliArgs {
    pgn_path: Option<String>,
    chess_com_user: Option<String>,
    lichess_user: Option<String>,
    depth: Option<u32>,
    max_games: Option<usize>,
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = CliArgs {
        pgn_path: None,
        chess_com_user: None,
        lichess_user: None,
        depth: None,
        max_games: None,
    };

    for i in 0..args.len() {
        match args[i].as_str() {
            "--pgn" => parsed.pgn_path = args.get(i + 1).cloned(),
            "--chess-com" => parsed.chess_com_user = args.get(i + 1).cloned(),
            "--lichess" => parsed.lichess_user = args.get(i + 1).cloned(),
            "--depth" => parsed.depth = args.get(i + 1).and_then(|v| v.parse().ok()),
            "--max" => parsed.max_games = args.get(i + 1).and_then(|v| v.parse().ok()),
            _ => {}
        }
    }
    parsed
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Load .env file for local dev
    let _ = dotenvy::dotenv();

    let args = parse_args();
    let mut config = AnalyzerConfig::from_env()?;
    if let Some(depth) = args.depth {
        config.depth = depth;
    }

    if let Some(username) = args.chess_com_user {
        let client = ChessComClient::new()?;
        let games = client.fetch_user_games(&username, None, None).await?;
        info!(count = games.len(), username = %username, "Fetched Chess.com games");
        println!("{}", serde_json::to_string_pretty(&games)?);
        return Ok(());
    }

    if let Some(username) = args.lichess_user {
        let client = LichessClient::new()?;
        let games = client.fetch_user_games(&username, args.max_games).await?;
        info!(count = games.len(), username = %username, "Fetched Lichess games");
        println!("{}", serde_json::to_string_pretty(&games)?);
        return Ok(());
    }

    let Some(pgn_path) = args.pgn_path else {
        bail!("usage: insight-analyzer --pgn <file> [--depth n] | --chess-com <user> | --lichess <user> [--max n]");
    };

    let pgn = std::fs::read_to_string(&pgn_path)
        .with_context(|| format!("failed to read {pgn_path}"))?;
    let game = parse_pgn(&pgn)?;

    let book = match &config.opening_book_path {
        Some(path) => Some(OpeningBook::load(path).context("failed to load opening book")?),
        None => None,
    };

    let engine = EngineClient::new(&config.engine_url, config.request_timeout_secs)?;

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let progress_task = tokio::spawn(async move {
        while let Some(AnalysisEvent::Progress {
            completed,
            total,
            percent,
        }) = rx.recv().await
        {
            info!(completed, total, percent, "Evaluating positions");
        }
    });

    let report = analyze_game(&engine, book.as_ref(), &game, &config, Some(tx)).await?;
    let _ = progress_task.await;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
