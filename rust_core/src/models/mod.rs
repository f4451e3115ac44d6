// Shared models for the league standings engine
use crate::utils::points::{deserialize_lenient_points, deserialize_points_table};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Canonical label -> points.
pub type TeamPoints = BTreeMap<String, u32>;

/// Week number (1-based) -> that week's match records.
pub type MatchHistory = BTreeMap<u32, Vec<RawMatchRecord>>;

// ============================================================================
// Fixtures (external feed)
// ============================================================================

/// One entry of the fixture feed: a pairing or a bye, no scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Fixture {
    Bye {
        bye: String,
    },
    Pairing {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        home: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        away: Option<String>,
    },
}

impl Fixture {
    pub fn pairing(home: &str, away: &str) -> Self {
        Fixture::Pairing {
            home: Some(home.to_string()),
            away: Some(away.to_string()),
        }
    }

    pub fn bye(team: &str) -> Self {
        Fixture::Bye {
            bye: team.to_string(),
        }
    }

    /// Raw team strings present on this fixture.
    pub fn teams(&self) -> Vec<&str> {
        match self {
            Fixture::Bye { bye } => vec![bye.as_str()],
            Fixture::Pairing { home, away } => {
                [home, away].into_iter().flatten().map(|s| s.as_str()).collect()
            }
        }
    }
}

// ============================================================================
// Match records (synthesized results)
// ============================================================================

/// A week's result line: a pairing with optional scores or a bye with an
/// optional score. Team strings are kept exactly as the fixture feed spelled them.
///
/// JSON shape: `{"home","away","homeScore","awayScore"}` or `{"bye","byeScore"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawMatchRecord {
    Bye {
        bye: String,
        #[serde(
            rename = "byeScore",
            default,
            deserialize_with = "deserialize_lenient_points",
            skip_serializing_if = "Option::is_none"
        )]
        bye_score: Option<u32>,
    },
    Pairing {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        home: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        away: Option<String>,
        #[serde(
            rename = "homeScore",
            default,
            deserialize_with = "deserialize_lenient_points",
            skip_serializing_if = "Option::is_none"
        )]
        home_score: Option<u32>,
        #[serde(
            rename = "awayScore",
            default,
            deserialize_with = "deserialize_lenient_points",
            skip_serializing_if = "Option::is_none"
        )]
        away_score: Option<u32>,
    },
}

impl RawMatchRecord {
    pub fn pairing(home: &str, home_score: Option<u32>, away: &str, away_score: Option<u32>) -> Self {
        RawMatchRecord::Pairing {
            home: Some(home.to_string()),
            away: Some(away.to_string()),
            home_score,
            away_score,
        }
    }

    pub fn bye(team: &str, score: Option<u32>) -> Self {
        RawMatchRecord::Bye {
            bye: team.to_string(),
            bye_score: score,
        }
    }

    /// Every (raw team, score) slot on the record. Missing team strings are
    /// skipped; a missing score stays `None`.
    pub fn sides(&self) -> Vec<(&str, Option<u32>)> {
        match self {
            RawMatchRecord::Bye { bye, bye_score } => vec![(bye.as_str(), *bye_score)],
            RawMatchRecord::Pairing {
                home,
                away,
                home_score,
                away_score,
            } => [(home, *home_score), (away, *away_score)]
                .into_iter()
                .filter_map(|(team, score)| team.as_deref().map(|t| (t, score)))
                .collect(),
        }
    }
}

// ============================================================================
// Points entry
// ============================================================================

/// Points typed in for one week, keyed by canonical label or, for older
/// entries, by the raw fixture string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WeekPointsEntry {
    points: BTreeMap<String, u32>,
}

impl WeekPointsEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, team_key: &str, points: u32) {
        self.points.insert(team_key.to_string(), points);
    }

    pub fn get(&self, team_key: &str) -> Option<u32> {
        self.points.get(team_key).copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.points.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: AsRef<str>> FromIterator<(K, u32)> for WeekPointsEntry {
    fn from_iter<I: IntoIterator<Item = (K, u32)>>(iter: I) -> Self {
        Self {
            points: iter
                .into_iter()
                .map(|(k, v)| (k.as_ref().to_string(), v))
                .collect(),
        }
    }
}

impl<'de> Deserialize<'de> for WeekPointsEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Self {
            points: deserialize_points_table(deserializer)?,
        })
    }
}

// ============================================================================
// Standings output
// ============================================================================

/// One line of the standings table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsRow {
    /// 1-based position in this table
    pub position: u32,
    pub team: String,
    pub week_points: u32,
    pub season_points: u32,
    /// Position after the previous week
    pub previous_position: u32,
}

impl StandingsRow {
    /// Places gained since last week (negative = dropped).
    pub fn movement(&self) -> i64 {
        self.previous_position as i64 - self.position as i64
    }
}

/// Full standings for one week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Standings {
    pub week: u32,
    /// One row per canonical team, best first
    pub rows: Vec<StandingsRow>,
    /// Canonical label -> rank after the previous week
    pub previous_rank: BTreeMap<String, u32>,
    pub season_totals: TeamPoints,
    pub week_points: TeamPoints,
    /// Raw names that could not be resolved, first-seen order
    pub unmapped: Vec<String>,
}

impl Standings {
    pub fn row(&self, team: &str) -> Option<&StandingsRow> {
        self.rows.iter().find(|r| r.team == team)
    }
}
