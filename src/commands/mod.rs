//! CLI command implementations.
//!
//! Each submodule handles one subcommand: configuration struct in, report
//! out through an `OutputWriter`.

pub mod breakdown;
pub mod report;
pub mod validate;
pub mod views;

pub use breakdown::{handle_breakdown, BreakdownConfig};
pub use report::{handle_report, ReportConfig};
pub use validate::{check_dataset, validate_dataset, ValidationDetails};
pub use views::handle_views;
