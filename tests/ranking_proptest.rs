//! Property tests for the aggregation engine over generated tables.

use brawlmap::{
    compute_division_totals, compute_team_totals, ranked_rows, Dataset, IncidentTable,
    SeasonCounts, ViewSelector,
};
use proptest::prelude::*;

/// A season of counts drawn from the real 32-team universe plus a few
/// names outside it, so the unresolved-team path gets exercised too.
fn arb_season(label: &'static str) -> impl Strategy<Value = SeasonCounts> {
    let team = prop_oneof![
        4 => prop::sample::select(vec![
            "Bills", "Patriots", "Dolphins", "Jets", "Ravens", "Steelers", "Browns", "Bengals",
            "Texans", "Colts", "Jaguars", "Titans", "Chiefs", "Raiders", "Chargers", "Broncos",
            "Cowboys", "Eagles", "Giants", "Commanders", "Bears", "Lions", "Packers", "Vikings",
            "Saints", "Falcons", "Buccaneers", "Panthers", "Rams", "49ers", "Seahawks", "Cardinals",
        ]),
        1 => prop::sample::select(vec!["Oilers", "Yanks", "Texians"]),
    ];
    prop::collection::vec((team, 0u32..20), 0..16).prop_map(move |mut counts| {
        // One entry per team per season, as in the real table.
        let mut seen = std::collections::HashSet::new();
        counts.retain(|(team, _)| seen.insert(*team));
        SeasonCounts::new(
            label,
            counts
                .into_iter()
                .map(|(team, count)| (team.to_string(), count))
                .collect(),
        )
    })
}

fn arb_dataset() -> impl Strategy<Value = Dataset> {
    (arb_season("2021"), arb_season("2022"), arb_season("Unknown")).prop_map(
        |(a, b, c)| {
            let taxonomy = Dataset::embedded().unwrap().taxonomy().clone();
            Dataset::from_parts(IncidentTable::new(vec![a, b, c]), taxonomy).unwrap()
        },
    )
}

proptest! {
    #[test]
    fn team_totals_conserve_the_table_sum(dataset in arb_dataset()) {
        let table_sum: u32 = dataset
            .table()
            .seasons()
            .iter()
            .flat_map(|s| s.counts.iter())
            .map(|(_, c)| *c)
            .sum();
        let totals = compute_team_totals(dataset.table());
        prop_assert_eq!(totals.values().sum::<u32>(), table_sum);
    }

    #[test]
    fn division_totals_never_exceed_team_totals(dataset in arb_dataset()) {
        let team_totals = compute_team_totals(dataset.table());
        let division_totals = compute_division_totals(&team_totals, dataset.taxonomy());
        prop_assert_eq!(division_totals.len(), 8);
        prop_assert!(
            division_totals.values().sum::<u32>() <= team_totals.values().sum::<u32>()
        );
    }

    #[test]
    fn all_views_sort_non_increasing(dataset in arb_dataset()) {
        for view in [
            ViewSelector::Totals,
            ViewSelector::ByDivision,
            ViewSelector::Season("2021".into()),
            ViewSelector::Season("Unknown".into()),
            ViewSelector::Season("no-such-season".into()),
        ] {
            let rows = ranked_rows(&dataset, &view);
            for pair in rows.windows(2) {
                prop_assert!(pair[0].count >= pair[1].count);
            }
        }
    }

    #[test]
    fn ranking_is_deterministic(dataset in arb_dataset()) {
        let first = ranked_rows(&dataset, &ViewSelector::Totals);
        let second = ranked_rows(&dataset, &ViewSelector::Totals);
        prop_assert_eq!(first, second);
    }
}
