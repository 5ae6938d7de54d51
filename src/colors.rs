//! Static display color tables for the presentation layer.
//!
//! Hex values are each team's primary color; divisions borrow a
//! representative member's color. Unrecognized labels fall back to a
//! neutral gray so the presenter never has to handle a miss.

pub const DEFAULT_COLOR: &str = "#888";

static TEAM_COLORS: &[(&str, &str)] = &[
    ("Raiders", "#A5ACAF"),
    ("49ers", "#AA0000"),
    ("Cowboys", "#003594"),
    ("Eagles", "#004C54"),
    ("Chargers", "#FFC20E"),
    ("Rams", "#003594"),
    ("Commanders", "#5A1414"),
    ("Chiefs", "#E31837"),
    ("Steelers", "#FFB612"),
    ("Bills", "#00338D"),
    ("Patriots", "#002244"),
    ("Bears", "#C83803"),
    ("Packers", "#203731"),
    ("Saints", "#D3BC8D"),
    ("Falcons", "#A71930"),
    ("Ravens", "#241773"),
    ("Broncos", "#FB4F14"),
    ("Texans", "#03202F"),
    ("Vikings", "#4F2683"),
    ("Titans", "#0C2340"),
    ("Dolphins", "#008E97"),
    ("Giants", "#0B2265"),
    ("Jets", "#125740"),
    ("Panthers", "#0085CA"),
    ("Buccaneers", "#D50A0A"),
    ("Jaguars", "#006778"),
    ("Cardinals", "#97233F"),
    ("Seahawks", "#002244"),
    ("Lions", "#0076B6"),
    ("Bengals", "#FB4F14"),
    ("Browns", "#311D00"),
    ("Colts", "#002C5F"),
];

static DIVISION_COLORS: &[(&str, &str)] = &[
    ("AFC East", "#00338D"),
    ("AFC North", "#241773"),
    ("AFC South", "#03202F"),
    ("AFC West", "#E31837"),
    ("NFC East", "#003594"),
    ("NFC North", "#0076B6"),
    ("NFC South", "#A71930"),
    ("NFC West", "#AA0000"),
];

/// Look up the display color for a team or division label.
pub fn resolve_display_color(label: &str, division_view: bool) -> &'static str {
    let table = if division_view {
        DIVISION_COLORS
    } else {
        TEAM_COLORS
    };
    table
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_COLOR)
}
