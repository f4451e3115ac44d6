//! End-to-end league scenarios through the public API.
//!
//! These tests drive resolution, week tallies and standings together, the way
//! the standings service uses them.

use league_rust_core::league_config::{CANONICAL_TEAMS, TEAM_ALIASES};
use league_rust_core::standings::standings_order;
use league_rust_core::utils::matching::clean;
use league_rust_core::{
    build_standings, season_totals, tally_week, Division, MatchHistory, MatchMethod,
    RawMatchRecord, Resolver, TeamRegistry,
};

const NO_ALIASES: [(&str, &str); 0] = [];

fn league() -> Resolver {
    Resolver::new(TeamRegistry::default_league().expect("built-in league should load"))
}

fn lazio_only() -> Resolver {
    Resolver::new(TeamRegistry::new(["Lazio FC 1XI", "Lazio FC 2XI"], NO_ALIASES).unwrap())
}

/// Five weeks of fixtures in the feed's own spelling, with a couple of
/// hand-typed variants and one team nobody registered.
fn season_history() -> MatchHistory {
    let mut history = MatchHistory::new();
    history.insert(
        1,
        vec![
            RawMatchRecord::pairing("1XI - Lazio FC", Some(10), "1XI - Smoke AI", Some(8)),
            RawMatchRecord::pairing("2XI - Lazio FC", Some(4), "2XI - Smoke AI", Some(6)),
            RawMatchRecord::bye("1XI - Hugo First", Some(7)),
        ],
    );
    history.insert(
        2,
        vec![
            RawMatchRecord::pairing("Lazio FC 1st", Some(3), "Middle Earth FC 1XI", Some(11)),
            RawMatchRecord::pairing("lazio fc 2nd", Some(12), "Unknown Team X", Some(40)),
        ],
    );
    history.insert(
        3,
        vec![RawMatchRecord::pairing(
            "1XI - Smoke AI",
            Some(5),
            "1XI - Chicken Cunha",
            None,
        )],
    );
    history.insert(
        5,
        vec![RawMatchRecord::pairing(
            "2XI - Pecorino's",
            Some(9),
            "2XI - Lazio FC",
            Some(1),
        )],
    );
    history
}

#[test]
fn canonical_labels_resolve_to_themselves() {
    let resolver = league();
    for label in CANONICAL_TEAMS {
        assert_eq!(resolver.canonical_label(label), Some(*label), "label {:?}", label);
        assert_eq!(
            resolver.canonical_label(&clean(label)),
            Some(*label),
            "cleaned label {:?}",
            label
        );
    }
}

#[test]
fn aliases_always_win() {
    let resolver = league();
    for (raw, target) in TEAM_ALIASES {
        let resolution = resolver.resolve_detailed(raw).expect("alias should resolve");
        assert_eq!(resolution.team.label(), *target);
        assert_eq!(resolution.method, MatchMethod::Alias);
    }
}

#[test]
fn second_team_markers_never_reach_first_teams() {
    let resolver = league();
    for raw in [
        "2nd Lazio FC",
        "Lazio FC 2XI",
        "smoke ai 2s",
        "Middle Earth FC 2's",
        "2XI - Always the Wright One",
    ] {
        let team = resolver.resolve(raw).expect("marked name should resolve");
        assert_eq!(team.division(), Division::Second, "{:?} -> {:?}", raw, team.label());
    }
    // No second team exists for Hugo First, so the marker rules it out entirely
    assert!(resolver.resolve("Hugo First 2nd").is_none());
}

#[test]
fn lazio_scenario() {
    let resolver = lazio_only();
    let resolution = resolver.resolve_detailed("1XI - Lazio FC").unwrap();
    assert_eq!(resolution.team.label(), "Lazio FC 1XI");
    assert_eq!(resolution.method, MatchMethod::DivisionBase);

    let mut history = MatchHistory::new();
    history.insert(
        1,
        vec![RawMatchRecord::pairing("1XI - Lazio FC", Some(10), "2XI - Lazio FC", Some(4))],
    );
    let standings = build_standings(&resolver, &history, 1);

    assert_eq!(standings.week_points["Lazio FC 1XI"], 10);
    assert_eq!(standings.week_points["Lazio FC 2XI"], 4);
    assert_eq!(standings.season_totals, standings.week_points);
    let order: Vec<(&str, u32)> = standings
        .rows
        .iter()
        .map(|r| (r.team.as_str(), r.season_points))
        .collect();
    assert_eq!(order, vec![("Lazio FC 1XI", 10), ("Lazio FC 2XI", 4)]);
    assert!(standings.unmapped.is_empty());
}

#[test]
fn built_in_bases_are_distinct_within_each_division() {
    let registry = TeamRegistry::default_league().unwrap();
    for division in [Division::First, Division::Second] {
        let mut bases: Vec<&str> = registry.division(division).map(|t| t.base()).collect();
        let total = bases.len();
        bases.sort_unstable();
        bases.dedup();
        assert_eq!(bases.len(), total, "{:?}", division);
    }
}

#[test]
fn bare_name_with_both_squads_is_unmapped() {
    let resolver = lazio_only();
    assert!(resolver.resolve("Lazio FC").is_none());

    let mut history = MatchHistory::new();
    history.insert(1, vec![RawMatchRecord::bye("Lazio FC", Some(9))]);
    let standings = build_standings(&resolver, &history, 1);
    assert_eq!(standings.unmapped, vec!["Lazio FC".to_string()]);
    assert!(standings.season_totals.values().all(|&p| p == 0));
}

#[test]
fn unknown_team_contributes_nothing() {
    let resolver = league();
    let history = season_history();
    assert!(resolver.resolve("Unknown Team X").is_none());

    let standings = build_standings(&resolver, &history, 2);
    assert_eq!(standings.unmapped, vec!["Unknown Team X".to_string()]);
    assert_eq!(standings.rows.len(), 26);
    assert!(standings.row("Unknown Team X").is_none());

    // The 40 points never land anywhere
    let total: u32 = standings.season_totals.values().sum();
    assert_eq!(total, 10 + 8 + 4 + 6 + 7 + 3 + 11 + 12);
}

#[test]
fn season_totals_are_additive() {
    let resolver = league();
    let history = season_history();

    for week in 1..=6 {
        let before = season_totals(&resolver, &history, week - 1);
        let after = season_totals(&resolver, &history, week);
        let this_week = history
            .get(&week)
            .map(|records| tally_week(&resolver, records).points)
            .unwrap_or_default();
        for (team, &points) in &after {
            let expected = before[team] + this_week.get(team).copied().unwrap_or(0);
            assert_eq!(points, expected, "{} week {}", team, week);
        }
    }

    let totals = season_totals(&resolver, &history, 5);
    assert_eq!(totals["Lazio FC 1XI"], 13);
    assert_eq!(totals["Lazio FC 2XI"], 17);
    assert_eq!(totals["Smoke AI 1XI"], 13);
    assert_eq!(totals["Pecorino\u{2019}s 2XI"], 9);
    assert_eq!(totals["Chicken Cunha 1XI"], 0);
}

#[test]
fn standings_order_is_strict_and_stable() {
    let resolver = league();
    let standings = build_standings(&resolver, &season_history(), 5);

    for pair in standings.rows.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert_eq!(
            standings_order(
                &a.team,
                a.season_points,
                a.week_points,
                &b.team,
                b.season_points,
                b.week_points
            ),
            std::cmp::Ordering::Less
        );
    }

    let positions: Vec<u32> = standings.rows.iter().map(|r| r.position).collect();
    assert_eq!(positions, (1..=26).collect::<Vec<u32>>());
    assert_eq!(standings.rows[0].team, "Lazio FC 2XI");
}

#[test]
fn recompute_is_idempotent() {
    let resolver = league();
    let history = season_history();
    assert_eq!(
        build_standings(&resolver, &history, 5),
        build_standings(&resolver, &history, 5)
    );
}
