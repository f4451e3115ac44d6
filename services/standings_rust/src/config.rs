//! Configuration for the standings service
//!
//! Paths and the report week come from environment variables with defaults.

use std::env;
use std::path::PathBuf;
use tracing::info;

/// How the standings are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Fixture feed JSON (default: data/fixtures.json)
    pub fixtures_path: PathBuf,
    /// League store JSON (default: data/league_store.json)
    pub store_path: PathBuf,
    /// Optional registry JSON; the built-in league is used when unset
    pub teams_config_path: Option<PathBuf>,
    /// Week to report; defaults to the latest week with stored results
    pub current_week: Option<u32>,
    /// Optional points table to record for `current_week` before reporting
    pub points_path: Option<PathBuf>,
    pub output_format: OutputFormat,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            fixtures_path: non_empty("FIXTURES_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("data/fixtures.json")),
            store_path: non_empty("STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("data/league_store.json")),
            teams_config_path: non_empty("TEAMS_CONFIG_PATH").map(PathBuf::from),
            current_week: non_empty("CURRENT_WEEK")
                .and_then(|v| v.trim().parse().ok())
                .filter(|&week: &u32| week > 0),
            points_path: non_empty("POINTS_PATH").map(PathBuf::from),
            output_format: non_empty("OUTPUT_FORMAT")
                .map(|v| OutputFormat::parse(&v))
                .unwrap_or(OutputFormat::Table),
        }
    }

    pub fn log_config(&self) {
        info!("Standings config loaded:");
        info!("  fixtures_path: {}", self.fixtures_path.display());
        info!("  store_path: {}", self.store_path.display());
        match &self.teams_config_path {
            Some(path) => info!("  teams_config_path: {}", path.display()),
            None => info!("  teams_config_path: <built-in league>"),
        }
        match self.current_week {
            Some(week) => info!("  current_week: {}", week),
            None => info!("  current_week: <latest stored>"),
        }
        if let Some(path) = &self.points_path {
            info!("  points_path: {}", path.display());
        }
        info!("  output_format: {:?}", self.output_format);
    }
}
