//! Opening-name lookup over a static (FEN prefix, name) catalog.
//!
//! The catalog ships as JSON and is loaded explicitly; lookups are cosmetic
//! annotations only and a miss simply leaves the annotation empty.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpeningBookError {
    #[error("failed to read opening book: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse opening book: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpeningEntry {
    /// Board-only FEN prefix identifying the opening position.
    pub fen: String,
    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct OpeningBook {
    entries: Vec<OpeningEntry>,
}

impl OpeningBook {
    pub fn new(entries: Vec<OpeningEntry>) -> Self {
        Self { entries }
    }

    /// Load from a JSON array of `{ "fen": ..., "name": ... }` objects.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, OpeningBookError> {
        let file = File::open(path)?;
        let entries = serde_json::from_reader(BufReader::new(file))?;
        Ok(Self::new(entries))
    }

    pub fn from_json(json: &str) -> Result<Self, OpeningBookError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Name of the opening whose cataloged prefix appears in `fen`. When
    /// several match, the most specific (longest) prefix wins.
    pub fn find(&self, fen: &str) -> Option<&str> {
        self.entries
            .iter()
            .filter(|entry| !entry.fen.is_empty() && fen.contains(&entry.fen))
            .max_by_key(|entry| entry.fen.len())
            .map(|entry| entry.name.as_str())
    }
}
