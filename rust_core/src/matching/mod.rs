//! Team name resolution.
//!
//! Defines the ResolutionStrategy trait and the Resolver that runs an ordered
//! list of strategies against a raw team string. The first strategy to return
//! a team wins; later strategies are never consulted.

use crate::team_registry::{CanonicalTeam, TeamRegistry};
use crate::utils::matching::{clean, detect_division, marker_free, similarity};
use serde::{Deserialize, Serialize};
use tracing::debug;

// Concrete strategy implementations
pub mod team;

/// Minimum Jaro-Winkler score for an alias suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.75;

/// Which strategy produced a resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMethod {
    Alias,
    CleanedExact,
    DivisionBase,
}

/// A resolved team together with the strategy that found it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'r> {
    pub team: &'r CanonicalTeam,
    pub method: MatchMethod,
}

/// Raw input handed to every strategy, cleaned once up front
#[derive(Debug, Clone)]
pub struct RawName<'a> {
    pub raw: &'a str,
    pub cleaned: String,
}

impl<'a> RawName<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            cleaned: clean(raw),
        }
    }
}

/// A single resolution step.
///
/// Implementations are pure: same registry and input, same answer.
pub trait ResolutionStrategy: Send + Sync {
    /// Try to place `name` in the registry
    fn resolve<'r>(&self, registry: &'r TeamRegistry, name: &RawName<'_>)
        -> Option<&'r CanonicalTeam>;

    fn method(&self) -> MatchMethod;

    /// Strategy name for logging and debugging
    fn strategy_name(&self) -> &str;
}

/// Closest canonical label for an unresolved string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AliasSuggestion {
    pub raw: String,
    pub label: String,
    pub score: f64,
}

/// Resolver over a fixed registry.
///
/// Runs alias -> cleaned exact -> division-aware base containment.
pub struct Resolver {
    registry: TeamRegistry,
    strategies: Vec<Box<dyn ResolutionStrategy>>,
}

impl Resolver {
    /// Create a resolver with the default strategy order
    pub fn new(registry: TeamRegistry) -> Self {
        Self {
            registry,
            strategies: team::default_strategies(),
        }
    }

    pub fn registry(&self) -> &TeamRegistry {
        &self.registry
    }

    /// Map a raw team string to its canonical team, or `None` when unresolved.
    pub fn resolve(&self, raw: &str) -> Option<&CanonicalTeam> {
        self.resolve_detailed(raw).map(|r| r.team)
    }

    /// Like [`Resolver::resolve`], also reporting which strategy matched.
    pub fn resolve_detailed(&self, raw: &str) -> Option<Resolution<'_>> {
        if raw.trim().is_empty() {
            return None;
        }

        let name = RawName::new(raw);
        for strategy in &self.strategies {
            if let Some(team) = strategy.resolve(&self.registry, &name) {
                debug!(
                    "Resolved {:?} -> {:?} via {}",
                    raw,
                    team.label(),
                    strategy.strategy_name()
                );
                return Some(Resolution {
                    team,
                    method: strategy.method(),
                });
            }
        }

        debug!("Could not resolve team name {:?}", raw);
        None
    }

    /// Canonical label for `raw`, if any
    pub fn canonical_label(&self, raw: &str) -> Option<&str> {
        self.resolve(raw).map(|t| t.label())
    }

    /// Suggest the closest canonical label for a string that failed to resolve.
    ///
    /// Division markers are stripped before comparing against base names, and
    /// candidates are restricted to the detected division when one is present.
    pub fn suggest_alias(&self, raw: &str) -> Option<AliasSuggestion> {
        if raw.trim().is_empty() {
            return None;
        }

        let division = detect_division(raw);
        let words = marker_free(raw);
        if words.is_empty() {
            return None;
        }

        self.registry
            .teams()
            .iter()
            .filter(|t| division.map_or(true, |d| t.division() == d))
            .map(|t| (t, similarity(&words, t.base())))
            .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| {
                a.1.total_cmp(&b.1)
                    // ties go to the earlier label alphabetically
                    .then_with(|| b.0.label().cmp(a.0.label()))
            })
            .map(|(team, score)| AliasSuggestion {
                raw: raw.to_string(),
                label: team.label().to_string(),
                score,
            })
    }
}
