//! Game-side plumbing for analysis: PGN parsing, position reconstruction,
//! and opening-book lookup.

pub mod game_data;
pub mod opening;
pub mod pgn;
pub mod position;

pub use game_data::{GameData, GameMetadata};
pub use opening::{OpeningBook, OpeningBookError, OpeningEntry};
pub use pgn::{parse_pgn, PgnError};
pub use position::{replay_moves, PlayedPosition, PositionError};
