//! Built-in league configuration.
//!
//! This module provides:
//! - The 26 canonical team labels used for points and display
//! - The curated alias table for fixture-feed spellings

/// Canonical team labels. Each label ends in its division marker.
pub static CANONICAL_TEAMS: &[&str] = &[
    "Time will Tel 1XI",
    "Time will Tel 2XI",
    "Second Wirst 2XI",
    "What's the Wirtz that could happen 1XI",
    "What's the Wirtz that could happen 2XI",
    "Lazio FC 1XI",
    "Lazio FC 2XI",
    "MOBLANDERSON 1XI",
    "MOBLANDERSON 2XI",
    "Porro Ball Defending 1XI",
    "World Club Chumpions 1XI",
    "World Club Chumpions 2XI",
    "Middle Earth FC 1XI",
    "Middle Earth FC 2XI",
    "Ruben Murray 2XI",
    "Pecorino\u{2019}s 1XI",
    "Pecorino\u{2019}s 2XI",
    "Jimmy's Jokers 1XI",
    "Jimmy's Jokers 2XI",
    "Smoke AI 1XI",
    "Smoke AI 2XI",
    "Always the Wright One 1XI",
    "Always the Wright One 2XI",
    "Hugo First 1XI",
    "Chicken Cunha 1XI",
    "Thomas the Frank engine 2XI",
];

/// Raw fixture-feed spelling -> canonical label. Matched byte for byte.
pub static TEAM_ALIASES: &[(&str, &str)] = &[
    // Time will Tel
    ("1XI - Time will Tel", "Time will Tel 1XI"),
    ("2XI - Time will Tel", "Time will Tel 2XI"),
    // Second Wirst
    ("2XI - Second Wirst", "Second Wirst 2XI"),
    // What's the Wirtz that could happen
    (
        "1XI - What's the Wirtz that could happen",
        "What's the Wirtz that could happen 1XI",
    ),
    (
        "2XI - What's the Wirtz that could happen",
        "What's the Wirtz that could happen 2XI",
    ),
    // Lazio FC
    ("1XI - Lazio FC", "Lazio FC 1XI"),
    ("2XI - Lazio FC", "Lazio FC 2XI"),
    // MOBLANDERSON
    ("1XI - MOBLANDERSON", "MOBLANDERSON 1XI"),
    ("2XI - MOBLANDERSON", "MOBLANDERSON 2XI"),
    // Porro Ball Defending
    ("1XI - Porro Ball Defending", "Porro Ball Defending 1XI"),
    // World Club Chumpions
    ("1XI - World Club Chumpions", "World Club Chumpions 1XI"),
    ("2XI - World Club Chumpions", "World Club Chumpions 2XI"),
    // Middle Earth FC
    ("1XI - Middle Earth FC", "Middle Earth FC 1XI"),
    ("2XI - Middle Earth FC", "Middle Earth FC 2XI"),
    // Ruben Murray
    ("2XI - Ruben Murray", "Ruben Murray 2XI"),
    // Pecorino's
    ("1XI - Pecorino\u{2019}s", "Pecorino\u{2019}s 1XI"),
    ("2XI - Pecorino\u{2019}s", "Pecorino\u{2019}s 2XI"),
    // Jimmy's Jokers
    ("1XI - Jimmy's Jokers", "Jimmy's Jokers 1XI"),
    ("2XI - Jimmy's Jokers", "Jimmy's Jokers 2XI"),
    // Smoke AI
    ("1XI - Smoke AI", "Smoke AI 1XI"),
    ("2XI - Smoke AI", "Smoke AI 2XI"),
    // Always the Wright One
    ("1XI - Always the Wright One", "Always the Wright One 1XI"),
    ("2XI - Always the Wright One", "Always the Wright One 2XI"),
    // Hugo First
    ("1XI - Hugo First", "Hugo First 1XI"),
    // Chicken Cunha
    ("1XI - Chicken Cunha", "Chicken Cunha 1XI"),
    // Thomas the Frank engine
    ("2XI - Thomas the Frank engine", "Thomas the Frank engine 2XI"),
];

/// Number of teams in the built-in league.
pub const LEAGUE_SIZE: usize = 26;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_league_size() {
        assert_eq!(CANONICAL_TEAMS.len(), LEAGUE_SIZE);
    }

    #[test]
    fn test_alias_targets_are_canonical() {
        for (alias, target) in TEAM_ALIASES {
            assert!(
                CANONICAL_TEAMS.contains(target),
                "alias {:?} targets unknown team {:?}",
                alias,
                target
            );
        }
    }
}
