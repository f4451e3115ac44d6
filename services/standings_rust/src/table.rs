//! Standings rendering for stdout.

use league_rust_core::{Standings, StandingsRow};

/// `+n` for places gained, `-n` for places lost, `=` for no change.
pub fn movement_marker(row: &StandingsRow) -> String {
    match row.movement() {
        0 => "=".to_string(),
        m if m > 0 => format!("+{}", m),
        m => m.to_string(),
    }
}

/// Plain-text table, one line per team, best first.
pub fn render_table(standings: &Standings) -> String {
    let team_width = standings
        .rows
        .iter()
        .map(|r| r.team.chars().count())
        .max()
        .unwrap_or(0)
        .max("Team".len());

    let mut out = format!("Week {}\n", standings.week);
    out.push_str(&format!(
        "{:>3}  {:<4}  {:<team_width$}  {:>4}  {:>6}\n",
        "Pos", "Mv", "Team", "Wk", "Total"
    ));
    for row in &standings.rows {
        out.push_str(&format!(
            "{:>3}  {:<4}  {:<team_width$}  {:>4}  {:>6}\n",
            row.position,
            movement_marker(row),
            row.team,
            row.week_points,
            row.season_points
        ));
    }
    out
}

pub fn render_json(standings: &Standings) -> serde_json::Result<String> {
    serde_json::to_string_pretty(standings)
}
