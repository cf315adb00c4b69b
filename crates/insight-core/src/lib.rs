//! Move classification and report aggregation for analyzed chess games.
//!
//! Pure, synchronous, deterministic. The engine evaluations themselves come
//! from elsewhere (see `insight-analyzer`); this crate only turns an ordered
//! evaluation sequence into per-move classifications and a game report.

pub mod classify;
pub mod eval;
pub mod report;
pub mod threshold;

pub use classify::classify;
pub use eval::{Classification, PositionEvaluation, Side};
pub use report::{
    build_report, ClassificationCounts, MoveRecord, Report, SideAccuracies, SideClassifications,
};
pub use threshold::evaluation_loss_threshold;
