//! Canonical team registry.
//!
//! This module provides:
//! - The fixed set of canonical teams with precomputed base names and divisions
//! - The curated alias table (exact raw string -> canonical label)
//! - Load-time validation so resolution can assume unique keys
//! - JSON config loading for leagues other than the built-in one

use crate::error::RegistryError;
use crate::league_config::{CANONICAL_TEAMS, TEAM_ALIASES};
use crate::utils::matching::{base_of, clean, label_division, Division};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// One canonical team. All derived fields are computed once at registry build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalTeam {
    label: String,
    base: String,
    division: Division,
    key: String,
}

impl CanonicalTeam {
    fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            base: base_of(label),
            division: label_division(label),
            key: clean(label),
        }
    }

    /// Display label, e.g. "Lazio FC 1XI".
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Cleaned label without the division marker, e.g. "lazio fc".
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn division(&self) -> Division {
        self.division
    }

    /// Cleaned full label used for exact comparison.
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// On-disk registry format.
///
/// ```json
/// { "teams": ["Lazio FC 1XI", "Lazio FC 2XI"], "aliases": { "1XI - Lazio FC": "Lazio FC 1XI" } }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    pub teams: Vec<String>,
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

/// Immutable table of canonical teams plus alias overrides.
#[derive(Debug, Clone)]
pub struct TeamRegistry {
    teams: Vec<CanonicalTeam>,
    /// cleaned label -> index into `teams`
    by_key: FxHashMap<String, usize>,
    /// exact label -> index into `teams`
    by_label: FxHashMap<String, usize>,
    /// exact raw alias -> index into `teams`
    aliases: FxHashMap<String, usize>,
}

impl TeamRegistry {
    /// Build and validate a registry.
    ///
    /// Rejects empty or duplicate labels, two teams sharing a base name within
    /// one division, and aliases that point at unregistered labels.
    pub fn new<L, A, S, T>(labels: L, aliases: A) -> Result<Self, RegistryError>
    where
        L: IntoIterator<Item = S>,
        S: AsRef<str>,
        A: IntoIterator<Item = (T, T)>,
        T: AsRef<str>,
    {
        let mut teams: Vec<CanonicalTeam> = Vec::new();
        let mut by_key = FxHashMap::default();
        let mut by_label = FxHashMap::default();
        let mut by_base: FxHashMap<(String, Division), usize> = FxHashMap::default();

        for label in labels {
            let label = label.as_ref().trim();
            if label.is_empty() {
                return Err(RegistryError::EmptyLabel);
            }

            let team = CanonicalTeam::new(label);
            if by_key.contains_key(&team.key) {
                return Err(RegistryError::DuplicateLabel {
                    label: label.to_string(),
                });
            }
            if let Some(&existing) = by_base.get(&(team.base.clone(), team.division)) {
                let first: &CanonicalTeam = &teams[existing];
                return Err(RegistryError::DuplicateBase {
                    base: team.base.clone(),
                    first: first.label.clone(),
                    second: label.to_string(),
                });
            }

            let idx = teams.len();
            by_key.insert(team.key.clone(), idx);
            by_label.insert(team.label.clone(), idx);
            by_base.insert((team.base.clone(), team.division), idx);
            teams.push(team);
        }

        let mut alias_index = FxHashMap::default();
        for (alias, target) in aliases {
            let (alias, target) = (alias.as_ref(), target.as_ref());
            let Some(&idx) = by_label.get(target) else {
                return Err(RegistryError::UnknownAliasTarget {
                    alias: alias.to_string(),
                    target: target.to_string(),
                });
            };
            alias_index.insert(alias.to_string(), idx);
        }

        debug!(
            "Team registry built: {} teams, {} aliases",
            teams.len(),
            alias_index.len()
        );

        Ok(Self {
            teams,
            by_key,
            by_label,
            aliases: alias_index,
        })
    }

    /// The built-in 26-team league.
    pub fn default_league() -> Result<Self, RegistryError> {
        Self::new(CANONICAL_TEAMS.iter().copied(), TEAM_ALIASES.iter().copied())
    }

    pub fn from_config(config: &RegistryConfig) -> Result<Self, RegistryError> {
        Self::new(
            config.teams.iter(),
            config.aliases.iter().map(|(a, t)| (a.as_str(), t.as_str())),
        )
    }

    /// Load a registry from a JSON config file.
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        let content = fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: RegistryConfig =
            serde_json::from_str(&content).map_err(|source| RegistryError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_config(&config)
    }

    /// Teams in registration order.
    pub fn teams(&self) -> &[CanonicalTeam] {
        &self.teams
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Exact canonical label lookup.
    pub fn get(&self, label: &str) -> Option<&CanonicalTeam> {
        self.by_label.get(label).map(|&idx| &self.teams[idx])
    }

    /// Lookup by cleaned label (see [`clean`]).
    pub fn get_by_key(&self, cleaned: &str) -> Option<&CanonicalTeam> {
        self.by_key.get(cleaned).map(|&idx| &self.teams[idx])
    }

    /// Exact alias lookup. No normalization is applied to `raw`.
    pub fn alias(&self, raw: &str) -> Option<&CanonicalTeam> {
        self.aliases.get(raw).map(|&idx| &self.teams[idx])
    }

    /// All aliases as (raw, canonical label), sorted by raw string.
    pub fn aliases(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<(&str, &str)> = self
            .aliases
            .iter()
            .map(|(raw, &idx)| (raw.as_str(), self.teams[idx].label.as_str()))
            .collect();
        pairs.sort();
        pairs
    }

    /// Teams of a single division, in registration order.
    pub fn division(&self, division: Division) -> impl Iterator<Item = &CanonicalTeam> {
        self.teams.iter().filter(move |t| t.division == division)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league_config::LEAGUE_SIZE;
    use std::collections::HashSet;

    const NO_ALIASES: [(&str, &str); 0] = [];

    #[test]
    fn test_default_league_loads() {
        let registry = TeamRegistry::default_league().unwrap();
        assert_eq!(registry.len(), LEAGUE_SIZE);
        assert_eq!(registry.aliases().len(), 26);
    }

    #[test]
    fn test_default_league_bases_unique_per_division() {
        let registry = TeamRegistry::default_league().unwrap();
        let keys: HashSet<(&str, Division)> = registry
            .teams()
            .iter()
            .map(|t| (t.base(), t.division()))
            .collect();
        assert_eq!(keys.len(), registry.len());

        for division in [Division::First, Division::Second] {
            let bases: Vec<&str> = registry.division(division).map(|t| t.base()).collect();
            let unique: HashSet<&str> = bases.iter().copied().collect();
            assert_eq!(bases.len(), unique.len(), "{:?} bases not distinct", division);
        }
    }

    #[test]
    fn test_derived_fields() {
        let registry = TeamRegistry::default_league().unwrap();
        let team = registry.get("Pecorino\u{2019}s 2XI").unwrap();
        assert_eq!(team.base(), "pecorino's");
        assert_eq!(team.division(), Division::Second);
        assert_eq!(team.key(), "pecorino's 2xi");
        assert_eq!(registry.get_by_key("pecorino's 2xi").unwrap().label(), team.label());
    }

    #[test]
    fn test_rejects_duplicate_label() {
        let err = TeamRegistry::new(["Lazio FC 1XI", "lazio fc 1xi"], NO_ALIASES).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateLabel { .. }));
    }

    #[test]
    fn test_rejects_shared_base_in_division() {
        let err = TeamRegistry::new(["Lazio FC 1XI", "Lazio FC"], NO_ALIASES).unwrap_err();
        match err {
            RegistryError::DuplicateBase { base, first, second } => {
                assert_eq!(base, "lazio fc");
                assert_eq!(first, "Lazio FC 1XI");
                assert_eq!(second, "Lazio FC");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_same_base_across_divisions_is_allowed() {
        let registry = TeamRegistry::new(["Lazio FC 1XI", "Lazio FC 2XI"], NO_ALIASES).unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_rejects_empty_label() {
        assert!(matches!(
            TeamRegistry::new(["  "], NO_ALIASES).unwrap_err(),
            RegistryError::EmptyLabel
        ));
    }

    #[test]
    fn test_rejects_unknown_alias_target() {
        let err = TeamRegistry::new(["Lazio FC 1XI"], [("Lazio", "Lazio FC 3XI")]).unwrap_err();
        assert!(matches!(err, RegistryError::UnknownAliasTarget { .. }));
    }

    #[test]
    fn test_alias_lookup_is_exact() {
        let registry = TeamRegistry::default_league().unwrap();
        assert_eq!(
            registry.alias("1XI - Lazio FC").map(|t| t.label()),
            Some("Lazio FC 1XI")
        );
        assert!(registry.alias("1xi - lazio fc").is_none());
        assert!(registry.alias("1XI -  Lazio FC").is_none());
    }

    #[test]
    fn test_load_from_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("teams.json");
        fs::write(
            &path,
            r#"{"teams": ["Lazio FC 1XI", "Lazio FC 2XI"], "aliases": {"Lazio Seconds": "Lazio FC 2XI"}}"#,
        )
        .unwrap();

        let registry = TeamRegistry::load(&path).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.alias("Lazio Seconds").unwrap().label(), "Lazio FC 2XI");
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = TeamRegistry::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, RegistryError::Io { .. }));
    }
}
