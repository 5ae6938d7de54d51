// Export modules for library usage
pub mod cli;
pub mod colors;
pub mod commands;
pub mod core;
pub mod dataset;
pub mod engine;
pub mod errors;
pub mod formatting;
pub mod io;

// Re-export commonly used types
pub use crate::core::{
    BreakdownReport, DivisionBreakdown, RankedReport, RankedRow, ViewSelector,
};

pub use crate::dataset::{
    Dataset, Division, DivisionTaxonomy, IncidentTable, SeasonCounts, DIVISION_COUNT,
    DIVISION_SIZE, TEAM_COUNT,
};

pub use crate::engine::{
    compute_division_totals, compute_team_totals, division_breakdown, list_views, ranked_rows,
};

pub use crate::colors::{resolve_display_color, DEFAULT_COLOR};

pub use crate::errors::DatasetError;

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
