use crate::dataset::{Dataset, DIVISION_COUNT, TEAM_COUNT};
use anyhow::Result;
use colored::*;

use super::report::formatting_for;

/// What the dataset invariant check found.
pub struct ValidationDetails {
    pub division_count: usize,
    pub team_count: usize,
    pub unresolved_teams: Vec<String>,
}

impl ValidationDetails {
    pub fn is_passing(&self) -> bool {
        self.division_count == DIVISION_COUNT
            && self.team_count == TEAM_COUNT
            && self.unresolved_teams.is_empty()
    }
}

/// Inspect a loaded dataset against the partition invariants: eight
/// divisions of four covering all 32 teams, every table team resolvable.
pub fn check_dataset(dataset: &Dataset) -> ValidationDetails {
    let unresolved_teams = dataset
        .table()
        .teams_in_order()
        .into_iter()
        .filter(|team| dataset.division_of(team).is_none())
        .collect();
    ValidationDetails {
        division_count: dataset.taxonomy().divisions().len(),
        team_count: dataset.taxonomy().build_index().len(),
        unresolved_teams,
    }
}

/// Run the invariant checks on the embedded dataset and print a pass/fail
/// report. Fails the process (via the returned error) when an invariant is
/// broken so CI can gate on it.
pub fn validate_dataset(plain: bool) -> Result<()> {
    formatting_for(plain).apply();

    let dataset = Dataset::embedded()?;
    let details = check_dataset(dataset);

    println!("{}", "Dataset Validation".bold().blue());
    println!("{}", "==================".blue());
    print_check(
        "Divisions",
        &format!("{} / {}", details.division_count, DIVISION_COUNT),
        details.division_count == DIVISION_COUNT,
    );
    print_check(
        "Teams in taxonomy",
        &format!("{} / {}", details.team_count, TEAM_COUNT),
        details.team_count == TEAM_COUNT,
    );
    print_check(
        "Unresolved table teams",
        &details.unresolved_teams.len().to_string(),
        details.unresolved_teams.is_empty(),
    );
    for team in &details.unresolved_teams {
        println!("    - {}", team.yellow());
    }
    println!();

    if details.is_passing() {
        println!("{} {}", "✓".green(), "PASS".green().bold());
        Ok(())
    } else {
        println!("{} {}", "✗".red(), "FAIL".red().bold());
        anyhow::bail!("dataset invariants violated")
    }
}

fn print_check(name: &str, value: &str, ok: bool) {
    let status = if ok { "ok".green() } else { "bad".red() };
    println!("  {name}: {value} [{status}]");
}
