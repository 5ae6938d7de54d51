//! Error types for dataset loading and report generation.

use thiserror::Error;

/// Failure classes for the embedded dataset invariants. Taxonomy violations
/// are hard errors; an unresolved team in the incident table is not (it is
/// warned about and excluded from division aggregation instead).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DatasetError {
    #[error("division {division:?} has {size} teams, expected 4")]
    InvalidDivisionSize { division: String, size: usize },

    #[error("team {team:?} appears in more than one division")]
    DuplicateTeam { team: String },
}
