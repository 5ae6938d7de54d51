use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "brawlmap")]
#[command(about = "Ranks NFL teams and divisions by documented fan altercations", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the ranked incident counts for a view
    Report {
        /// View to render: totals, by-division, or a season label (e.g. 2023, Unknown)
        #[arg(long, default_value = "totals")]
        view: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show only the top N rows
        #[arg(long = "top", visible_alias = "head")]
        top: Option<usize>,

        /// Disable colors and other terminal decoration
        #[arg(long)]
        plain: bool,
    },

    /// Print per-division cards: division totals with member team rankings
    Breakdown {
        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Disable colors and other terminal decoration
        #[arg(long)]
        plain: bool,
    },

    /// List the available view selectors in order
    Views,

    /// Check the embedded dataset invariants
    Validate {
        /// Disable colors and other terminal decoration
        #[arg(long)]
        plain: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
