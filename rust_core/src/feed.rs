//! Fixture feed loading.
//!
//! The feed is a JSON object keyed `"week1"`, `"week2"`, ... with a list of
//! pairings/byes per week. Keys that are not `week<N>` are ignored.

use crate::error::StoreError;
use crate::models::Fixture;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Parsed fixture feed, week number -> fixtures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixtureFeed {
    weeks: BTreeMap<u32, Vec<Fixture>>,
}

/// Parse a `week<N>` key.
pub fn parse_week_key(key: &str) -> Option<u32> {
    key.strip_prefix("week")?.parse().ok()
}

/// Format a week number as a feed key.
pub fn week_key(week: u32) -> String {
    format!("week{}", week)
}

impl FixtureFeed {
    pub fn new(weeks: BTreeMap<u32, Vec<Fixture>>) -> Self {
        Self { weeks }
    }

    /// Parse from a JSON value. Unknown keys and unparseable fixtures are skipped.
    pub fn from_value(value: &Value) -> Self {
        let mut weeks = BTreeMap::new();
        let Some(object) = value.as_object() else {
            warn!("Fixture feed is not a JSON object; treating as empty");
            return Self::default();
        };

        for (key, fixtures) in object {
            let Some(week) = parse_week_key(key) else {
                debug!("Ignoring fixture feed key {:?}", key);
                continue;
            };
            let Some(items) = fixtures.as_array() else {
                warn!("Fixture feed {} is not a list; skipping", key);
                continue;
            };

            let parsed: Vec<Fixture> = items
                .iter()
                .filter_map(|item| match serde_json::from_value::<Fixture>(item.clone()) {
                    Ok(fixture) => Some(fixture),
                    Err(e) => {
                        debug!("Skipping malformed fixture in {}: {}", key, e);
                        None
                    }
                })
                .collect();
            weeks.insert(week, parsed);
        }

        Self { weeks }
    }

    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(content)?;
        Ok(Self::from_value(&value))
    }

    /// Load the feed from a JSON file.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let content = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content).map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Fixtures for a week; empty when the week is not in the feed.
    pub fn week(&self, week: u32) -> &[Fixture] {
        self.weeks.get(&week).map(|f| f.as_slice()).unwrap_or(&[])
    }

    /// Week numbers present in the feed, ascending.
    pub fn week_numbers(&self) -> Vec<u32> {
        self.weeks.keys().copied().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }
}
