//! The aggregation and ranking engine.
//!
//! Every function here is a pure, idempotent query over an incident table
//! and a division taxonomy. No shared mutable state exists: callers may
//! recompute on every view switch or memoize freely. The embedded dataset
//! is just the default argument; tests substitute synthetic tables.

use crate::core::{DivisionBreakdown, RankedRow, ViewSelector};
use crate::dataset::{Dataset, DivisionTaxonomy, IncidentTable};
use im::HashMap;

/// Sum each team's counts across all seasons, including "Unknown".
///
/// Teams never mentioned in the table do not appear in the result; an empty
/// table yields an empty map.
pub fn compute_team_totals(table: &IncidentTable) -> HashMap<String, u32> {
    table
        .seasons()
        .iter()
        .flat_map(|season| season.counts.iter())
        .fold(HashMap::new(), |mut totals, (team, count)| {
            *totals.entry(team.clone()).or_insert(0) += count;
            totals
        })
}

/// Sum team totals into their divisions.
///
/// Every division appears in the result, zero included, so ranked division
/// views are always complete. A team with no resolvable division is warned
/// about and its count excluded from every division total.
pub fn compute_division_totals(
    team_totals: &HashMap<String, u32>,
    taxonomy: &DivisionTaxonomy,
) -> HashMap<String, u32> {
    let index = taxonomy.build_index();
    let mut totals: HashMap<String, u32> = taxonomy
        .divisions()
        .iter()
        .map(|d| (d.name.clone(), 0))
        .collect();
    for (team, count) in team_totals {
        match index.get(team) {
            Some(division) => {
                *totals.entry(division.clone()).or_insert(0) += count;
            }
            None => {
                log::warn!("team {team:?} has no division; dropping {count} incident(s) from division totals");
            }
        }
    }
    totals
}

/// Resolve a view selector into its ranked rows, sorted descending by
/// count. Ties keep first-appearance order in the underlying table (the
/// sort is stable). An unknown season label yields an empty sequence.
pub fn ranked_rows(dataset: &Dataset, selector: &ViewSelector) -> Vec<RankedRow> {
    let table = dataset.table();
    let rows = match selector {
        ViewSelector::Totals => {
            let totals = compute_team_totals(table);
            table
                .teams_in_order()
                .into_iter()
                .filter_map(|team| {
                    let count = *totals.get(&team)?;
                    Some(RankedRow::new(team, count))
                })
                .collect()
        }
        ViewSelector::ByDivision => {
            let totals = compute_division_totals(&compute_team_totals(table), dataset.taxonomy());
            dataset
                .taxonomy()
                .divisions()
                .iter()
                .map(|d| RankedRow::new(d.name.clone(), totals.get(&d.name).copied().unwrap_or(0)))
                .collect()
        }
        ViewSelector::Season(label) => match table.season(label) {
            Some(season) => season
                .counts
                .iter()
                .map(|(team, count)| RankedRow::new(team.clone(), *count))
                .collect(),
            None => {
                log::debug!("unknown season label {label:?}; returning no rows");
                Vec::new()
            }
        },
    };
    sort_descending(rows)
}

/// Build the nested per-division cards: each division's combined total and
/// its four member teams with their all-time totals, teams ranked within
/// the division and divisions ranked among themselves.
pub fn division_breakdown(dataset: &Dataset) -> Vec<DivisionBreakdown> {
    let totals = compute_team_totals(dataset.table());
    let mut breakdown: Vec<DivisionBreakdown> = dataset
        .taxonomy()
        .divisions()
        .iter()
        .map(|division| {
            let teams = sort_descending(
                division
                    .teams
                    .iter()
                    .map(|team| {
                        RankedRow::new(team.clone(), totals.get(team).copied().unwrap_or(0))
                    })
                    .collect(),
            );
            let total = teams.iter().map(|row| row.count).sum();
            DivisionBreakdown {
                division: division.name.clone(),
                total,
                teams,
            }
        })
        .collect();
    breakdown.sort_by(|a, b| b.total.cmp(&a.total));
    breakdown
}

/// The fixed, ordered view enumeration: the two aggregate views followed by
/// every season label in table order ("Unknown" last in the embedded data).
pub fn list_views(table: &IncidentTable) -> Vec<ViewSelector> {
    let mut views = vec![ViewSelector::Totals, ViewSelector::ByDivision];
    views.extend(
        table
            .seasons()
            .iter()
            .map(|season| ViewSelector::Season(season.label.clone())),
    );
    views
}

fn sort_descending(mut rows: Vec<RankedRow>) -> Vec<RankedRow> {
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
}
