use crate::cli;
use crate::core::{RankedReport, ViewSelector};
use crate::dataset::Dataset;
use crate::engine;
use crate::formatting::FormattingConfig;
use crate::io::output::create_writer;
use anyhow::Result;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

pub struct ReportConfig {
    pub view: String,
    pub format: cli::OutputFormat,
    pub output: Option<PathBuf>,
    pub top: Option<usize>,
    pub plain: bool,
}

pub fn handle_report(config: ReportConfig) -> Result<()> {
    formatting_for(config.plain).apply();

    let dataset = Dataset::embedded()?;
    let selector = ViewSelector::parse(&config.view);
    let mut rows = engine::ranked_rows(dataset, &selector);
    if let Some(top) = config.top {
        rows.truncate(top);
    }
    let report = RankedReport::new(&selector, rows);

    let sink = open_sink(&config.output)?;
    let mut writer = create_writer(config.format.into(), sink);
    writer.write_report(&report)
}

pub(crate) fn formatting_for(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}

pub(crate) fn open_sink(output: &Option<PathBuf>) -> Result<Option<Box<dyn Write>>> {
    match output {
        Some(path) => Ok(Some(Box::new(File::create(path)?))),
        None => Ok(None),
    }
}
