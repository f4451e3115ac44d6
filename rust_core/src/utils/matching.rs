//! Text normalization helpers shared by the resolution strategies.
//!
//! All comparisons happen on the output of [`clean`], so canonical labels and
//! raw fixture strings go through exactly the same pipeline.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use strsim::jaro_winkler;

/// Which squad of a club a team entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Division {
    /// "1XI"
    First,
    /// "2XI"
    Second,
}

impl Division {
    pub fn marker(&self) -> &'static str {
        match self {
            Division::First => "1XI",
            Division::Second => "2XI",
        }
    }
}

/// Second-team markers: "2", "2xi", "2nd", "2s", "2's", "2 11" as whole tokens.
static SECOND_XI_PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
/// First-team markers: same shapes with "1" ("1st" instead of "2nd").
static FIRST_XI_PATTERN: OnceLock<Option<Regex>> = OnceLock::new();

fn second_xi_pattern() -> Option<&'static Regex> {
    SECOND_XI_PATTERN
        .get_or_init(|| Regex::new(r"\b2(?:xi|nd|s|'s| 11)?\b").ok())
        .as_ref()
}

fn first_xi_pattern() -> Option<&'static Regex> {
    FIRST_XI_PATTERN
        .get_or_init(|| Regex::new(r"\b1(?:xi|st|s|'s| 11)?\b").ok())
        .as_ref()
}

/// Normalize a team string for comparison.
///
/// Lowercases, folds curly apostrophes to `'`, folds en/em dashes to `-`,
/// collapses whitespace runs and trims.
pub fn clean(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .map(|c| match c {
            '\u{2019}' | '\u{2018}' => '\'',
            '\u{2013}' | '\u{2014}' => '-',
            other => other,
        })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Detect a division marker anywhere in a raw team string.
///
/// The second-team marker is checked first, so a string carrying both
/// ("2XI - Team 1") counts as second team.
pub fn detect_division(raw: &str) -> Option<Division> {
    let cleaned = clean(raw);
    if second_xi_pattern().is_some_and(|re| re.is_match(&cleaned)) {
        return Some(Division::Second);
    }
    if first_xi_pattern().is_some_and(|re| re.is_match(&cleaned)) {
        return Some(Division::First);
    }
    None
}

/// Division implied by a canonical label's trailing marker. Anything not
/// ending in "2XI" is a first team.
pub fn label_division(label: &str) -> Division {
    if clean(label).ends_with("2xi") {
        Division::Second
    } else {
        Division::First
    }
}

/// Cleaned label with a trailing " 1XI"/" 2XI" removed.
pub fn base_of(label: &str) -> String {
    let cleaned = clean(label);
    for marker in ["1xi", "2xi"] {
        if let Some(stripped) = cleaned.strip_suffix(marker) {
            if stripped.ends_with(char::is_whitespace) {
                return stripped.trim_end().to_string();
            }
        }
    }
    cleaned
}

/// Cleaned string with division markers and punctuation dropped, leaving the
/// words a base name would be compared against.
pub fn marker_free(raw: &str) -> String {
    let mut text = clean(raw);
    for pattern in [second_xi_pattern(), first_xi_pattern()].into_iter().flatten() {
        text = pattern.replace_all(&text, " ").into_owned();
    }
    text.chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '\'')
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Jaro-Winkler similarity of two strings after cleaning.
pub fn similarity(a: &str, b: &str) -> f64 {
    jaro_winkler(&clean(a), &clean(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_folds_punctuation_and_whitespace() {
        assert_eq!(clean("  Pecorino\u{2019}s   1XI "), "pecorino's 1xi");
        assert_eq!(clean("2XI \u{2013} Lazio FC"), "2xi - lazio fc");
        assert_eq!(clean("2XI \u{2014}\tLazio\nFC"), "2xi - lazio fc");
        assert_eq!(clean("\u{2018}Quoted\u{2019}"), "'quoted'");
    }

    #[test]
    fn test_clean_is_idempotent() {
        let once = clean("What\u{2019}s the Wirtz  that could happen 2XI");
        assert_eq!(clean(&once), once);
    }

    #[test]
    fn test_detect_division_markers() {
        assert_eq!(detect_division("2XI - Lazio FC"), Some(Division::Second));
        assert_eq!(detect_division("Lazio FC 2nd"), Some(Division::Second));
        assert_eq!(detect_division("Lazio FC 2s"), Some(Division::Second));
        assert_eq!(detect_division("Lazio FC 2's"), Some(Division::Second));
        assert_eq!(detect_division("Lazio FC 2 11"), Some(Division::Second));
        assert_eq!(detect_division("Lazio FC 2"), Some(Division::Second));
        assert_eq!(detect_division("1XI - Lazio FC"), Some(Division::First));
        assert_eq!(detect_division("lazio fc 1st"), Some(Division::First));
        assert_eq!(detect_division("Lazio FC 1xi"), Some(Division::First));
    }

    #[test]
    fn test_detect_division_requires_whole_token() {
        assert_eq!(detect_division("Lazio FC"), None);
        assert_eq!(detect_division("Team 12"), None);
        assert_eq!(detect_division("Team 21xi"), None);
        assert_eq!(detect_division("XI Lazio"), None);
    }

    #[test]
    fn test_second_marker_wins_over_first() {
        assert_eq!(detect_division("2XI - Team 1"), Some(Division::Second));
    }

    #[test]
    fn test_base_and_division_of_labels() {
        assert_eq!(base_of("Lazio FC 1XI"), "lazio fc");
        assert_eq!(base_of("Lazio FC 2XI"), "lazio fc");
        assert_eq!(base_of("Pecorino\u{2019}s 2XI"), "pecorino's");
        assert_eq!(base_of("MOBLANDERSON"), "moblanderson");
        // marker must be its own token
        assert_eq!(base_of("Team2XI"), "team2xi");
        assert_eq!(label_division("Smoke AI 2XI"), Division::Second);
        assert_eq!(label_division("Smoke AI 1XI"), Division::First);
        assert_eq!(label_division("Smoke AI"), Division::First);
    }

    #[test]
    fn test_marker_free_strips_markers_and_dashes() {
        assert_eq!(marker_free("2XI - Midle Erth"), "midle erth");
        assert_eq!(marker_free("Pecorino\u{2019}s 1st"), "pecorino's");
        assert_eq!(marker_free("Lazio FC"), "lazio fc");
    }

    #[test]
    fn test_similarity_ignores_formatting() {
        assert!((similarity("LAZIO FC", "lazio   fc") - 1.0).abs() < 1e-9);
        assert!(similarity("Lazio", "Smoke AI") < 0.7);
    }
}
