use crate::core::{BreakdownReport, RankedReport};
use colored::*;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &RankedReport) -> anyhow::Result<()>;
    fn write_breakdown(&mut self, report: &BreakdownReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &RankedReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }

    fn write_breakdown(&mut self, report: &BreakdownReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, title: &str, timestamp: &chrono::DateTime<chrono::Utc>) -> anyhow::Result<()> {
        writeln!(self.writer, "# {title}")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &RankedReport) -> anyhow::Result<()> {
        self.write_header(
            &format!("Fan Incident Ranking — {}", report.view),
            &report.timestamp,
        )?;
        writeln!(self.writer, "Total incidents: {}", report.total_incidents)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Rank | Name | Incidents |")?;
        writeln!(self.writer, "|------|------|-----------|")?;
        for (i, row) in report.rows.iter().enumerate() {
            writeln!(self.writer, "| {} | {} | {} |", i + 1, row.label, row.count)?;
        }
        Ok(())
    }

    fn write_breakdown(&mut self, report: &BreakdownReport) -> anyhow::Result<()> {
        self.write_header("Fan Incidents By Division", &report.timestamp)?;
        writeln!(self.writer, "Total incidents: {}", report.total_incidents)?;
        for card in &report.divisions {
            writeln!(self.writer)?;
            writeln!(self.writer, "## {} ({})", card.division, card.total)?;
            writeln!(self.writer)?;
            writeln!(self.writer, "| Team | Incidents |")?;
            writeln!(self.writer, "|------|-----------|")?;
            for row in &card.teams {
                writeln!(self.writer, "| {} | {} |", row.label, row.count)?;
            }
        }
        Ok(())
    }
}

pub struct TerminalWriter;

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputWriter for TerminalWriter {
    fn write_report(&mut self, report: &RankedReport) -> anyhow::Result<()> {
        print_report_header(&report.view, report.total_incidents, report.rows.len());
        let max = report.rows.first().map(|r| r.count).unwrap_or(0);
        if report.rows.is_empty() {
            println!("  (no data)");
            return Ok(());
        }
        for (i, row) in report.rows.iter().enumerate() {
            println!(
                "  {:>3}. {:<12} {} {}",
                i + 1,
                row.label,
                bar(row.count, max, 40),
                row.count.to_string().bold()
            );
        }
        Ok(())
    }

    fn write_breakdown(&mut self, report: &BreakdownReport) -> anyhow::Result<()> {
        println!("{}", "Fan Incidents By Division".bold().blue());
        println!("{}", "=========================".blue());
        println!("  Total incidents: {}", report.total_incidents);
        for card in &report.divisions {
            println!();
            println!(
                "{} {}",
                card.division.bold(),
                format!("({} total)", card.total).dimmed()
            );
            let max = card.teams.first().map(|r| r.count).unwrap_or(0);
            for row in &card.teams {
                let count = if row.count > 0 {
                    row.count.to_string().normal()
                } else {
                    row.count.to_string().dimmed()
                };
                println!("  {:<12} {} {}", row.label, bar(row.count, max, 20), count);
            }
        }
        Ok(())
    }
}

fn print_report_header(view: &str, total: u32, entries: usize) {
    println!("{}", "Fan Incident Ranking".bold().blue());
    println!("{}", "====================".blue());
    println!("  View: {}", view.bold());
    println!("  Total incidents: {total}");
    println!("  Entries: {entries}");
    println!();
}

/// Proportional text bar, scaled so the top-ranked row fills `width` cells.
fn bar(count: u32, max: u32, width: usize) -> String {
    if max == 0 {
        return " ".repeat(width);
    }
    let filled = ((count as usize * width) + max as usize - 1) / max as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), " ".repeat(width - filled))
}

pub fn create_writer(format: OutputFormat, output: Option<Box<dyn Write>>) -> Box<dyn OutputWriter> {
    match (format, output) {
        (OutputFormat::Json, Some(w)) => Box::new(JsonWriter::new(w)),
        (OutputFormat::Json, None) => Box::new(JsonWriter::new(Box::new(std::io::stdout()) as Box<dyn Write>)),
        (OutputFormat::Markdown, Some(w)) => Box::new(MarkdownWriter::new(w)),
        (OutputFormat::Markdown, None) => {
            Box::new(MarkdownWriter::new(Box::new(std::io::stdout()) as Box<dyn Write>))
        }
        (OutputFormat::Terminal, _) => Box::new(TerminalWriter::new()),
    }
}
