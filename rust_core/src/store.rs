//! League store: entered points and synthesized results, persisted as JSON.
//!
//! This module provides:
//! - Per-week points entries as typed in
//! - Per-week match records synthesized from fixtures + points
//! - Save / clear of a single week
//! - JSON persistence

use crate::error::StoreError;
use crate::matching::Resolver;
use crate::models::{Fixture, MatchHistory, RawMatchRecord, WeekPointsEntry};
use crate::results::synthesize_week;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Persisted league data.
///
/// JSON format: `{ "points": { "1": {team: pts} }, "results": { "1": [records] }, "updated_at": ... }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LeagueStore {
    /// week -> points entry
    #[serde(default)]
    points: BTreeMap<u32, WeekPointsEntry>,
    /// week -> synthesized results
    #[serde(default)]
    results: MatchHistory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

impl LeagueStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a JSON file. A missing file is an empty store.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            debug!("No league store at {}, starting empty", path.display());
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let json_error = |source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        };
        let value: Value = serde_json::from_str(&content).map_err(json_error)?;
        if !value.is_object() {
            return Err(json_error(serde::de::Error::custom(
                "league store must be a JSON object",
            )));
        }
        serde_json::from_value(value).map_err(json_error)
    }

    /// Save to a JSON file, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = serde_json::to_string_pretty(self).map_err(StoreError::Serialize)?;
        fs::write(path, content).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Record a week's points and regenerate that week's results from its fixtures.
    pub fn save_week(
        &mut self,
        week: u32,
        entry: WeekPointsEntry,
        fixtures: &[Fixture],
        resolver: &Resolver,
    ) {
        let records = synthesize_week(resolver, fixtures, &entry);
        info!(
            "Saved week {}: {} team scores, {} results",
            week,
            entry.len(),
            records.len()
        );
        self.points.insert(week, entry);
        self.results.insert(week, records);
        self.updated_at = Some(Utc::now());
    }

    /// Drop a week's points and results. Returns whether anything was removed.
    pub fn clear_week(&mut self, week: u32) -> bool {
        let had_points = self.points.remove(&week).is_some();
        let had_results = self.results.remove(&week).is_some();
        let removed = had_points || had_results;
        if removed {
            info!("Cleared week {}", week);
            self.updated_at = Some(Utc::now());
        }
        removed
    }

    /// Points entry for a week, if one was saved.
    pub fn points(&self, week: u32) -> Option<&WeekPointsEntry> {
        self.points.get(&week)
    }

    /// Results for a week, if any were saved.
    pub fn results(&self, week: u32) -> Option<&[RawMatchRecord]> {
        self.results.get(&week).map(|r| r.as_slice())
    }

    /// All saved results, usable directly as standings history.
    pub fn history(&self) -> &MatchHistory {
        &self.results
    }

    /// Highest week with saved results.
    pub fn latest_week(&self) -> Option<u32> {
        self.results.keys().next_back().copied()
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.results.is_empty()
    }
}
