use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry in a ranked view: a team or division name paired with its
/// incident count. Recomputed on every query, never persisted.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RankedRow {
    pub label: String,
    pub count: u32,
}

impl RankedRow {
    pub fn new(label: impl Into<String>, count: u32) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// The aggregation mode requested by the caller.
///
/// `Season` carries a season label from the embedded table, including the
/// `"Unknown"` sentinel for incidents whose year could not be confirmed.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ViewSelector {
    Totals,
    ByDivision,
    Season(String),
}

impl ViewSelector {
    /// Parse a selector from its display form. Season labels are accepted
    /// verbatim; whether they exist in the table is the resolver's concern.
    pub fn parse(s: &str) -> Self {
        match s {
            "Totals" | "totals" => ViewSelector::Totals,
            "By Division" | "by-division" | "divisions" => ViewSelector::ByDivision,
            other => ViewSelector::Season(other.to_string()),
        }
    }
}

impl std::fmt::Display for ViewSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewSelector::Totals => write!(f, "Totals"),
            ViewSelector::ByDivision => write!(f, "By Division"),
            ViewSelector::Season(label) => write!(f, "{label}"),
        }
    }
}

/// Per-division card: the division's combined total plus its four member
/// teams ranked by their all-time counts.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DivisionBreakdown {
    pub division: String,
    pub total: u32,
    pub teams: Vec<RankedRow>,
}

/// Top-level report for a single ranked view, produced by the `report`
/// command and consumed by the output writers.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RankedReport {
    pub view: String,
    pub timestamp: DateTime<Utc>,
    pub total_incidents: u32,
    pub rows: Vec<RankedRow>,
}

impl RankedReport {
    pub fn new(view: &ViewSelector, rows: Vec<RankedRow>) -> Self {
        let total_incidents = rows.iter().map(|r| r.count).sum();
        Self {
            view: view.to_string(),
            timestamp: Utc::now(),
            total_incidents,
            rows,
        }
    }
}

/// Report wrapper for the per-division breakdown view.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BreakdownReport {
    pub timestamp: DateTime<Utc>,
    pub total_incidents: u32,
    pub divisions: Vec<DivisionBreakdown>,
}

impl BreakdownReport {
    pub fn new(divisions: Vec<DivisionBreakdown>) -> Self {
        let total_incidents = divisions.iter().map(|d| d.total).sum();
        Self {
            timestamp: Utc::now(),
            total_incidents,
            divisions,
        }
    }
}
