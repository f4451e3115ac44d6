//! Load registry, feed and store, then produce standings.

use crate::config::Config;
use anyhow::{Context, Result};
use league_rust_core::results::preview_line;
use league_rust_core::{
    build_standings, AliasSuggestion, FixtureFeed, LeagueStore, Resolver, Standings, TeamRegistry,
    WeekPointsEntry,
};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Everything the service needs for one run.
pub struct League {
    pub resolver: Resolver,
    pub feed: FixtureFeed,
    pub store: LeagueStore,
}

impl League {
    pub fn load(config: &Config) -> Result<Self> {
        let registry = match &config.teams_config_path {
            Some(path) => TeamRegistry::load(path)
                .with_context(|| format!("Failed to load team registry from {}", path.display()))?,
            None => TeamRegistry::default_league().context("Built-in league registry is invalid")?,
        };
        info!("Team registry: {} canonical teams", registry.len());

        let feed = if config.fixtures_path.exists() {
            FixtureFeed::load(&config.fixtures_path).with_context(|| {
                format!(
                    "Failed to load fixture feed from {}",
                    config.fixtures_path.display()
                )
            })?
        } else {
            warn!(
                "Fixture feed {} not found; continuing without fixtures",
                config.fixtures_path.display()
            );
            FixtureFeed::default()
        };
        info!("Fixture feed: weeks {:?}", feed.week_numbers());

        let store = LeagueStore::load(&config.store_path).with_context(|| {
            format!(
                "Failed to load league store from {}",
                config.store_path.display()
            )
        })?;
        info!("League store: latest week {:?}", store.latest_week());

        Ok(Self {
            resolver: Resolver::new(registry),
            feed,
            store,
        })
    }

    /// Week to report: configured, else latest stored, else 1.
    pub fn report_week(&self, configured: Option<u32>) -> u32 {
        configured.or_else(|| self.store.latest_week()).unwrap_or(1)
    }

    /// Score preview lines for a week's fixtures under `entry`.
    pub fn preview(&self, week: u32, entry: &WeekPointsEntry) -> Vec<String> {
        self.feed
            .week(week)
            .iter()
            .map(|fixture| preview_line(&self.resolver, fixture, entry))
            .collect()
    }

    /// Store a week's points and regenerate its results from the feed.
    pub fn record_points(&mut self, week: u32, entry: WeekPointsEntry) {
        if self.feed.week(week).is_empty() {
            warn!("No fixtures for week {}; results will be empty", week);
        }
        self.store
            .save_week(week, entry, self.feed.week(week), &self.resolver);
    }

    /// Record the configured points file for the configured week, then save the
    /// store. Returns the recorded week, or `None` when no points file is set.
    pub fn apply_points_file(&mut self, config: &Config) -> Result<Option<u32>> {
        let Some(points_path) = &config.points_path else {
            return Ok(None);
        };
        let week = config
            .current_week
            .context("CURRENT_WEEK must be set when POINTS_PATH is given")?;
        let entry = load_points_entry(points_path)?;

        for line in self.preview(week, &entry) {
            info!("  {}", line);
        }
        self.record_points(week, entry);
        self.store.save(&config.store_path).with_context(|| {
            format!(
                "Failed to save league store to {}",
                config.store_path.display()
            )
        })?;
        info!("Week {} saved to {}", week, config.store_path.display());
        Ok(Some(week))
    }

    pub fn standings(&self, week: u32) -> Standings {
        build_standings(&self.resolver, self.store.history(), week)
    }

    /// Each unmapped name with its closest canonical label, if any is close enough.
    pub fn unmapped_report(&self, standings: &Standings) -> Vec<(String, Option<AliasSuggestion>)> {
        standings
            .unmapped
            .iter()
            .map(|raw| (raw.clone(), self.resolver.suggest_alias(raw)))
            .collect()
    }
}

/// Read a points table (`{ "<team key>": points }`) from disk.
pub fn load_points_entry(path: &Path) -> Result<WeekPointsEntry> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read points from {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse points from {}", path.display()))
}
