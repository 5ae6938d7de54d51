use crate::cli;
use crate::core::BreakdownReport;
use crate::dataset::Dataset;
use crate::engine;
use crate::io::output::create_writer;
use anyhow::Result;
use std::path::PathBuf;

use super::report::{formatting_for, open_sink};

pub struct BreakdownConfig {
    pub format: cli::OutputFormat,
    pub output: Option<PathBuf>,
    pub plain: bool,
}

pub fn handle_breakdown(config: BreakdownConfig) -> Result<()> {
    formatting_for(config.plain).apply();

    let dataset = Dataset::embedded()?;
    let report = BreakdownReport::new(engine::division_breakdown(dataset));

    let sink = open_sink(&config.output)?;
    let mut writer = create_writer(config.format.into(), sink);
    writer.write_breakdown(&report)
}
