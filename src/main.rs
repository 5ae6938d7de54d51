use anyhow::Result;
use brawlmap::cli::{parse_args, Commands};
use brawlmap::commands::{
    handle_breakdown, handle_report, handle_views, validate_dataset, BreakdownConfig, ReportConfig,
};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = parse_args();

    match cli.command {
        Commands::Report {
            view,
            format,
            output,
            top,
            plain,
        } => handle_report(ReportConfig {
            view,
            format,
            output,
            top,
            plain,
        }),
        Commands::Breakdown {
            format,
            output,
            plain,
        } => handle_breakdown(BreakdownConfig {
            format,
            output,
            plain,
        }),
        Commands::Views => handle_views(),
        Commands::Validate { plain } => validate_dataset(plain),
    }
}
