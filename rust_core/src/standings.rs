//! Standings aggregation.
//!
//! This module provides:
//! - Per-week point tallies from raw match records
//! - Season totals over weeks 1..N, recomputed from scratch on every call
//! - Previous-week ranking for movement
//! - The sorted standings table with unresolved-name diagnostics
//!
//! Everything here is a pure function of (resolver, history, week).

use crate::matching::Resolver;
use crate::models::{MatchHistory, RawMatchRecord, Standings, StandingsRow, TeamPoints};
use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Points for one week plus the raw names that failed to resolve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekTally {
    pub points: TeamPoints,
    pub unmapped: Vec<String>,
}

/// Every canonical team at zero.
pub fn zero_points(resolver: &Resolver) -> TeamPoints {
    resolver
        .registry()
        .teams()
        .iter()
        .map(|t| (t.label().to_string(), 0))
        .collect()
}

/// Tally one week's records.
///
/// Each side of a pairing is handled on its own: a resolved side with a score
/// adds that score, an unresolved side is reported in `unmapped` and adds
/// nothing. Missing scores count as 0 and are not reported. Sides without a
/// team string are skipped silently.
pub fn tally_week(resolver: &Resolver, records: &[RawMatchRecord]) -> WeekTally {
    let mut tally = WeekTally {
        points: zero_points(resolver),
        unmapped: Vec::new(),
    };
    let mut seen: FxHashSet<String> = FxHashSet::default();

    for record in records {
        for (raw, score) in record.sides() {
            if raw.trim().is_empty() {
                continue;
            }
            match resolver.resolve(raw) {
                Some(team) => {
                    if let Some(points) = score {
                        let total = tally.points.entry(team.label().to_string()).or_insert(0);
                        *total = total.saturating_add(points);
                    }
                }
                None => {
                    if seen.insert(raw.to_string()) {
                        tally.unmapped.push(raw.to_string());
                    }
                }
            }
        }
    }

    tally
}

/// Season totals through `through_week` (inclusive). Weeks with no records
/// contribute nothing; week 0 yields all zeros.
pub fn season_totals(resolver: &Resolver, history: &MatchHistory, through_week: u32) -> TeamPoints {
    let mut totals = zero_points(resolver);
    for week in 1..=through_week {
        let Some(records) = history.get(&week) else {
            continue;
        };
        let tally = tally_week(resolver, records);
        add_points(&mut totals, &tally.points);
    }
    totals
}

fn add_points(totals: &mut TeamPoints, week: &TeamPoints) {
    for (team, points) in week {
        let total = totals.entry(team.clone()).or_insert(0);
        *total = total.saturating_add(*points);
    }
}

/// Standings order: season points desc, then week points desc, then label asc.
///
/// Labels compare case-insensitively first; the exact label breaks the
/// remaining ties, so no two distinct teams compare equal.
pub fn standings_order(
    a_team: &str,
    a_season: u32,
    a_week: u32,
    b_team: &str,
    b_season: u32,
    b_week: u32,
) -> Ordering {
    b_season
        .cmp(&a_season)
        .then(b_week.cmp(&a_week))
        .then_with(|| label_order(a_team, b_team))
}

fn label_order(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Row comparator using [`standings_order`].
pub fn compare_rows(a: &StandingsRow, b: &StandingsRow) -> Ordering {
    standings_order(
        &a.team,
        a.season_points,
        a.week_points,
        &b.team,
        b.season_points,
        b.week_points,
    )
}

/// Rank every team (1 = best) by season then week points.
pub fn rank_teams(season: &TeamPoints, week: &TeamPoints) -> BTreeMap<String, u32> {
    let mut order: Vec<(&str, u32, u32)> = season
        .iter()
        .map(|(team, &pts)| (team.as_str(), pts, week.get(team).copied().unwrap_or(0)))
        .collect();
    order.sort_by(|a, b| standings_order(a.0, a.1, a.2, b.0, b.1, b.2));

    order
        .into_iter()
        .enumerate()
        .map(|(idx, (team, _, _))| (team.to_string(), idx as u32 + 1))
        .collect()
}

/// Build the standings table for `current_week`.
///
/// Totals for earlier weeks are recomputed from the full history each time.
pub fn build_standings(resolver: &Resolver, history: &MatchHistory, current_week: u32) -> Standings {
    let previous_week = current_week.saturating_sub(1);

    let previous_totals = season_totals(resolver, history, previous_week);
    let previous_week_points = match history.get(&previous_week) {
        Some(records) if previous_week > 0 => tally_week(resolver, records).points,
        _ => zero_points(resolver),
    };
    let previous_rank = rank_teams(&previous_totals, &previous_week_points);

    let current = match history.get(&current_week) {
        Some(records) if current_week > 0 => tally_week(resolver, records),
        _ => WeekTally {
            points: zero_points(resolver),
            unmapped: Vec::new(),
        },
    };

    let mut season = previous_totals;
    add_points(&mut season, &current.points);

    let mut rows: Vec<StandingsRow> = season
        .iter()
        .map(|(team, &season_points)| StandingsRow {
            position: 0,
            team: team.clone(),
            week_points: current.points.get(team).copied().unwrap_or(0),
            season_points,
            previous_position: previous_rank.get(team).copied().unwrap_or(0),
        })
        .collect();
    rows.sort_by(compare_rows);
    for (idx, row) in rows.iter_mut().enumerate() {
        row.position = idx as u32 + 1;
    }

    let unmapped = collect_unmapped(resolver, history, current_week);
    if !unmapped.is_empty() {
        warn!(
            "Week {}: {} team name(s) could not be resolved",
            current_week,
            unmapped.len()
        );
    }
    debug!(
        "Built standings for week {} ({} teams)",
        current_week,
        rows.len()
    );

    Standings {
        week: current_week,
        rows,
        previous_rank,
        season_totals: season,
        week_points: current.points,
        unmapped,
    }
}

/// Unresolved raw names across weeks 1..=`through_week`, de-duplicated in
/// first-seen order.
pub fn collect_unmapped(resolver: &Resolver, history: &MatchHistory, through_week: u32) -> Vec<String> {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut unmapped = Vec::new();
    for week in 1..=through_week {
        let Some(records) = history.get(&week) else {
            continue;
        };
        for raw in tally_week(resolver, records).unmapped {
            if seen.insert(raw.clone()) {
                unmapped.push(raw);
            }
        }
    }
    unmapped
}
