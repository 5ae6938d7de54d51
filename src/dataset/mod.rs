//! Embedded incident dataset and division taxonomy.
//!
//! The incident table and the eight-division taxonomy are compiled-in
//! constants. `Dataset::load` materializes them into owned structures,
//! validates the taxonomy invariants once, and caches the derived
//! team-to-division index for the process lifetime.

use crate::errors::DatasetError;
use once_cell::sync::OnceCell;
use std::collections::HashMap;

/// Documented incidents per team for one season. Season labels are year
/// strings plus the `"Unknown"` sentinel; team order is source order and
/// doubles as the tiebreak for equal counts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeasonCounts {
    pub label: String,
    pub counts: Vec<(String, u32)>,
}

impl SeasonCounts {
    pub fn new(label: impl Into<String>, counts: Vec<(String, u32)>) -> Self {
        Self {
            label: label.into(),
            counts,
        }
    }
}

/// The season -> team -> count table. Immutable after construction; a team
/// absent from a season contributes zero and is not stored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IncidentTable {
    seasons: Vec<SeasonCounts>,
}

impl IncidentTable {
    pub fn new(seasons: Vec<SeasonCounts>) -> Self {
        Self { seasons }
    }

    pub fn seasons(&self) -> &[SeasonCounts] {
        &self.seasons
    }

    pub fn season(&self, label: &str) -> Option<&SeasonCounts> {
        self.seasons.iter().find(|s| s.label == label)
    }

    /// Every team mentioned anywhere in the table, in first-appearance
    /// order. This order is the deterministic tiebreak for ranked views.
    pub fn teams_in_order(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        let mut teams = Vec::new();
        for season in &self.seasons {
            for (team, _) in &season.counts {
                if seen.insert(team.clone()) {
                    teams.push(team.clone());
                }
            }
        }
        teams
    }
}

/// One of the eight fixed four-team divisions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Division {
    pub name: String,
    pub teams: Vec<String>,
}

/// The division -> teams mapping. Valid taxonomies partition the team
/// universe: every division has exactly four members and no team appears
/// twice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DivisionTaxonomy {
    divisions: Vec<Division>,
}

impl DivisionTaxonomy {
    pub fn new(divisions: Vec<Division>) -> Result<Self, DatasetError> {
        let taxonomy = Self { divisions };
        taxonomy.validate()?;
        Ok(taxonomy)
    }

    pub fn divisions(&self) -> &[Division] {
        &self.divisions
    }

    /// Derive the team -> division index. Callers that query repeatedly
    /// should hold on to the result; `Dataset` caches one per process.
    pub fn build_index(&self) -> HashMap<String, String> {
        let mut index = HashMap::new();
        for division in &self.divisions {
            for team in &division.teams {
                index.insert(team.clone(), division.name.clone());
            }
        }
        index
    }

    fn validate(&self) -> Result<(), DatasetError> {
        let mut seen = std::collections::HashSet::new();
        for division in &self.divisions {
            if division.teams.len() != DIVISION_SIZE {
                return Err(DatasetError::InvalidDivisionSize {
                    division: division.name.clone(),
                    size: division.teams.len(),
                });
            }
            for team in &division.teams {
                if !seen.insert(team.clone()) {
                    return Err(DatasetError::DuplicateTeam {
                        team: team.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

pub const DIVISION_COUNT: usize = 8;
pub const DIVISION_SIZE: usize = 4;
pub const TEAM_COUNT: usize = DIVISION_COUNT * DIVISION_SIZE;

/// The loaded dataset: incident table, taxonomy, and the cached
/// team-to-division index derived from it.
#[derive(Clone, Debug)]
pub struct Dataset {
    table: IncidentTable,
    taxonomy: DivisionTaxonomy,
    team_division: HashMap<String, String>,
}

impl Dataset {
    /// Assemble a dataset from parts, validating the taxonomy and flagging
    /// any table team that does not resolve to a division. Unresolved teams
    /// are warned about, not rejected: their counts still appear in team
    /// views but are excluded from division aggregation.
    pub fn from_parts(
        table: IncidentTable,
        taxonomy: DivisionTaxonomy,
    ) -> Result<Self, DatasetError> {
        let team_division = taxonomy.build_index();
        for team in table.teams_in_order() {
            if !team_division.contains_key(&team) {
                log::warn!("team {team:?} is not in any division; its counts will be excluded from division totals");
            }
        }
        Ok(Self {
            table,
            taxonomy,
            team_division,
        })
    }

    /// Load and validate the embedded dataset.
    pub fn load() -> Result<Self, DatasetError> {
        let seasons = RAW_INCIDENTS
            .iter()
            .map(|(label, counts)| {
                SeasonCounts::new(
                    *label,
                    counts
                        .iter()
                        .map(|(team, count)| (team.to_string(), *count))
                        .collect(),
                )
            })
            .collect();
        let divisions = RAW_DIVISIONS
            .iter()
            .map(|(name, teams)| Division {
                name: name.to_string(),
                teams: teams.iter().map(|t| t.to_string()).collect(),
            })
            .collect();
        Self::from_parts(IncidentTable::new(seasons), DivisionTaxonomy::new(divisions)?)
    }

    /// The process-wide embedded dataset, loaded and validated on first use.
    pub fn embedded() -> Result<&'static Self, DatasetError> {
        static EMBEDDED: OnceCell<Dataset> = OnceCell::new();
        EMBEDDED.get_or_try_init(Self::load)
    }

    pub fn table(&self) -> &IncidentTable {
        &self.table
    }

    pub fn taxonomy(&self) -> &DivisionTaxonomy {
        &self.taxonomy
    }

    pub fn division_of(&self, team: &str) -> Option<&str> {
        self.team_division.get(team).map(String::as_str)
    }
}

// Documented fan altercations per team per season. "Unknown" collects
// incidents whose year could not be confirmed.
static RAW_INCIDENTS: &[(&str, &[(&str, u32)])] = &[
    (
        "2021",
        &[
            ("Packers", 1),
            ("Ravens", 1),
            ("Rams", 2),
            ("Titans", 1),
            ("Panthers", 1),
            ("Vikings", 1),
            ("Eagles", 2),
            ("Chiefs", 2),
            ("Steelers", 1),
            ("Chargers", 1),
            ("Commanders", 1),
            ("Buccaneers", 1),
        ],
    ),
    (
        "2022",
        &[
            ("Chargers", 1),
            ("Raiders", 1),
            ("Titans", 1),
            ("Saints", 2),
            ("Cowboys", 4),
            ("Falcons", 1),
            ("Jaguars", 1),
            ("Steelers", 1),
            ("Eagles", 1),
            ("Buccaneers", 1),
            ("Rams", 1),
            ("49ers", 1),
            ("Seahawks", 1),
            ("Panthers", 1),
        ],
    ),
    (
        "2023",
        &[
            ("49ers", 2),
            ("Broncos", 2),
            ("Chargers", 6),
            ("Bills", 1),
            ("Eagles", 3),
            ("Cowboys", 6),
            ("Commanders", 3),
            ("Raiders", 2),
            ("Seahawks", 1),
            ("Giants", 1),
            ("Packers", 1),
            ("Bears", 2),
            ("Patriots", 1),
            ("Dolphins", 1),
            ("Texans", 1),
            ("Vikings", 1),
            ("Ravens", 1),
            ("Jets", 1),
        ],
    ),
    (
        "2024",
        &[
            ("Falcons", 5),
            ("Saints", 3),
            ("Raiders", 6),
            ("Chargers", 7),
            ("Rams", 4),
            ("49ers", 4),
            ("Cowboys", 4),
            ("Cardinals", 2),
            ("Ravens", 2),
            ("Commanders", 6),
            ("Eagles", 2),
            ("Broncos", 2),
            ("Chiefs", 1),
            ("Steelers", 3),
            ("Vikings", 1),
            ("Texans", 2),
        ],
    ),
    (
        "2025",
        &[
            ("Rams", 3),
            ("Texans", 1),
            ("Saints", 1),
            ("Jaguars", 1),
            ("Giants", 1),
            ("Commanders", 4),
            ("Bears", 2),
            ("Packers", 1),
            ("Bengals", 1),
            ("Lions", 2),
            ("Cowboys", 1),
            ("Eagles", 3),
            ("Bills", 2),
            ("Dolphins", 1),
            ("49ers", 1),
            ("Cardinals", 1),
            ("Buccaneers", 1),
            ("Ravens", 2),
            ("Steelers", 2),
            ("Raiders", 1),
            ("Chargers", 1),
            ("Panthers", 1),
            ("Seahawks", 1),
            ("Broncos", 2),
            ("Patriots", 2),
            ("Colts", 1),
        ],
    ),
    (
        "Unknown",
        &[
            ("Raiders", 14),
            ("49ers", 11),
            ("Lions", 2),
            ("Steelers", 5),
            ("Bills", 5),
            ("Eagles", 7),
            ("Cowboys", 8),
            ("Giants", 4),
            ("Dolphins", 1),
            ("Titans", 1),
            ("Chiefs", 6),
            ("Rams", 9),
            ("Chargers", 8),
            ("Seahawks", 3),
            ("Bears", 5),
            ("Packers", 3),
            ("Patriots", 5),
            ("Jaguars", 1),
            ("Texans", 2),
            ("Vikings", 4),
            ("Buccaneers", 2),
            ("Browns", 1),
            ("Commanders", 1),
            ("Bengals", 2),
            ("Cardinals", 1),
            ("Falcons", 1),
            ("Ravens", 1),
            ("Broncos", 1),
        ],
    ),
];

static RAW_DIVISIONS: &[(&str, [&str; 4])] = &[
    ("AFC East", ["Bills", "Patriots", "Dolphins", "Jets"]),
    ("AFC North", ["Ravens", "Steelers", "Browns", "Bengals"]),
    ("AFC South", ["Texans", "Colts", "Jaguars", "Titans"]),
    ("AFC West", ["Chiefs", "Raiders", "Chargers", "Broncos"]),
    ("NFC East", ["Cowboys", "Eagles", "Giants", "Commanders"]),
    ("NFC North", ["Bears", "Lions", "Packers", "Vikings"]),
    ("NFC South", ["Saints", "Falcons", "Buccaneers", "Panthers"]),
    ("NFC West", ["Rams", "49ers", "Seahawks", "Cardinals"]),
];
