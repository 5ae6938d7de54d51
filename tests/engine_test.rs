use brawlmap::{
    compute_division_totals, compute_team_totals, division_breakdown, list_views, ranked_rows,
    resolve_display_color, Dataset, IncidentTable, RankedRow, SeasonCounts, ViewSelector,
    DEFAULT_COLOR,
};
use pretty_assertions::assert_eq;

fn embedded() -> &'static Dataset {
    Dataset::embedded().unwrap()
}

fn dataset_with_table(seasons: Vec<SeasonCounts>) -> Dataset {
    let taxonomy = embedded().taxonomy().clone();
    Dataset::from_parts(IncidentTable::new(seasons), taxonomy).unwrap()
}

#[test]
fn team_totals_match_per_season_sums() {
    let dataset = embedded();
    let totals = compute_team_totals(dataset.table());
    for team in dataset.table().teams_in_order() {
        let expected: u32 = dataset
            .table()
            .seasons()
            .iter()
            .flat_map(|s| s.counts.iter())
            .filter(|(t, _)| *t == team)
            .map(|(_, c)| *c)
            .sum();
        assert_eq!(totals.get(&team), Some(&expected), "totals for {team}");
    }
}

#[test]
fn embedded_dataset_grand_total() {
    let totals = compute_team_totals(embedded().table());
    assert_eq!(totals.len(), 32);
    assert_eq!(totals.values().sum::<u32>(), 277);
}

#[test]
fn division_totals_conserve_resolved_counts() {
    let dataset = embedded();
    let team_totals = compute_team_totals(dataset.table());
    let division_totals = compute_division_totals(&team_totals, dataset.taxonomy());
    // Every embedded team resolves, so the sums are equal.
    assert_eq!(
        division_totals.values().sum::<u32>(),
        team_totals.values().sum::<u32>()
    );
}

#[test]
fn division_totals_drop_unresolved_without_failing() {
    let mut team_totals = im::HashMap::new();
    team_totals.insert("Rams".to_string(), 2);
    team_totals.insert("Oilers".to_string(), 5);
    let division_totals = compute_division_totals(&team_totals, embedded().taxonomy());
    assert!(division_totals.values().sum::<u32>() < team_totals.values().sum::<u32>());
    assert_eq!(division_totals.values().sum::<u32>(), 2);
}

#[test]
fn every_selector_yields_non_increasing_rows() {
    let dataset = embedded();
    for view in list_views(dataset.table()) {
        let rows = ranked_rows(dataset, &view);
        assert!(!rows.is_empty(), "view {view} has rows");
        for pair in rows.windows(2) {
            assert!(
                pair[0].count >= pair[1].count,
                "rows out of order in view {view}"
            );
        }
    }
}

#[test]
fn totals_view_ranks_chargers_first_on_tie() {
    // Chargers and Raiders are both at 24 all-time; Chargers appear first
    // in the table (2021) so the stable sort keeps them on top.
    let rows = ranked_rows(embedded(), &ViewSelector::Totals);
    assert_eq!(rows[0], RankedRow::new("Chargers", 24));
    assert_eq!(rows[1], RankedRow::new("Raiders", 24));
    assert_eq!(rows[2], RankedRow::new("Cowboys", 23));
}

#[test]
fn by_division_view_ranks_divisions() {
    let rows = ranked_rows(embedded(), &ViewSelector::ByDivision);
    assert_eq!(rows.len(), 8);
    assert_eq!(rows[0], RankedRow::new("AFC West", 64));
    assert_eq!(rows[1], RankedRow::new("NFC East", 62));
    assert_eq!(rows.last(), Some(&RankedRow::new("AFC South", 13)));
}

#[test]
fn season_view_uses_raw_counts() {
    let rows = ranked_rows(embedded(), &ViewSelector::Season("2023".into()));
    assert_eq!(rows.len(), 18);
    let total: u32 = rows.iter().map(|r| r.count).sum();
    assert_eq!(total, 36);
}

#[test]
fn unknown_selector_returns_empty() {
    let rows = ranked_rows(embedded(), &ViewSelector::Season("1999".into()));
    assert!(rows.is_empty());
}

#[test]
fn breakdown_is_eight_by_four_and_internally_consistent() {
    let dataset = embedded();
    let breakdown = division_breakdown(dataset);
    assert_eq!(breakdown.len(), 8);
    for card in &breakdown {
        assert_eq!(card.teams.len(), 4);
        assert_eq!(card.total, card.teams.iter().map(|t| t.count).sum::<u32>());
        for pair in card.teams.windows(2) {
            assert!(pair[0].count >= pair[1].count);
        }
    }
    for pair in breakdown.windows(2) {
        assert!(pair[0].total >= pair[1].total);
    }
    // Top division matches the By Division ranking.
    assert_eq!(breakdown[0].division, "AFC West");
    assert_eq!(breakdown[0].total, 64);
}

#[test]
fn breakdown_zero_fills_quiet_teams() {
    let dataset = dataset_with_table(vec![SeasonCounts::new(
        "2021",
        vec![("Rams".into(), 2), ("Chiefs".into(), 2)],
    )]);
    let breakdown = division_breakdown(&dataset);
    assert_eq!(breakdown.len(), 8);
    let quiet: Vec<_> = breakdown.iter().filter(|d| d.total == 0).collect();
    assert_eq!(quiet.len(), 6);
    for card in &breakdown {
        assert_eq!(card.teams.len(), 4);
    }
}

#[test]
fn two_team_table_aggregates_both_sides() {
    let dataset = dataset_with_table(vec![SeasonCounts::new(
        "2021",
        vec![("Rams".into(), 2), ("Chiefs".into(), 2)],
    )]);
    let totals = compute_team_totals(dataset.table());
    assert_eq!(totals.get("Rams"), Some(&2));
    assert_eq!(totals.get("Chiefs"), Some(&2));
    assert_eq!(totals.len(), 2);

    let division_totals = compute_division_totals(&totals, dataset.taxonomy());
    assert_eq!(division_totals.get("NFC West"), Some(&2));
    assert_eq!(division_totals.get("AFC West"), Some(&2));
    assert_eq!(division_totals.len(), 8);
    assert_eq!(division_totals.values().sum::<u32>(), 4);

    let rows = ranked_rows(&dataset, &ViewSelector::Totals);
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.count == 2));
}

#[test]
fn view_enumeration_is_fixed_and_ordered() {
    let views = list_views(embedded().table());
    let labels: Vec<String> = views.iter().map(|v| v.to_string()).collect();
    assert_eq!(
        labels,
        vec![
            "Totals",
            "By Division",
            "2021",
            "2022",
            "2023",
            "2024",
            "2025",
            "Unknown"
        ]
    );
}

#[test]
fn display_color_falls_back_for_unknown_labels() {
    assert_eq!(resolve_display_color("Raiders", false), "#A5ACAF");
    assert_eq!(resolve_display_color("AFC West", true), "#E31837");
    assert_eq!(resolve_display_color("Oilers", false), DEFAULT_COLOR);
    assert_eq!(resolve_display_color("AFC Central", true), DEFAULT_COLOR);
}
