//! Team resolution strategies.
//!
//! Three strategies, tried in this order:
//! 1. `AliasStrategy` - exact raw string in the curated alias table
//! 2. `CleanedExactStrategy` - cleaned raw string equals a cleaned label
//! 3. `DivisionBaseStrategy` - longest base name contained in the cleaned raw
//!    string, restricted to the detected division

use super::{MatchMethod, RawName, ResolutionStrategy};
use crate::team_registry::{CanonicalTeam, TeamRegistry};
use crate::utils::matching::detect_division;
use tracing::debug;

/// Strategies in precedence order
pub fn default_strategies() -> Vec<Box<dyn ResolutionStrategy>> {
    vec![
        Box::new(AliasStrategy),
        Box::new(CleanedExactStrategy),
        Box::new(DivisionBaseStrategy),
    ]
}

/// Exact alias table hit. The raw string is not normalized.
pub struct AliasStrategy;

impl ResolutionStrategy for AliasStrategy {
    fn resolve<'r>(
        &self,
        registry: &'r TeamRegistry,
        name: &RawName<'_>,
    ) -> Option<&'r CanonicalTeam> {
        registry.alias(name.raw)
    }

    fn method(&self) -> MatchMethod {
        MatchMethod::Alias
    }

    fn strategy_name(&self) -> &str {
        "AliasStrategy"
    }
}

/// Cleaned raw string equals a cleaned canonical label.
pub struct CleanedExactStrategy;

impl ResolutionStrategy for CleanedExactStrategy {
    fn resolve<'r>(
        &self,
        registry: &'r TeamRegistry,
        name: &RawName<'_>,
    ) -> Option<&'r CanonicalTeam> {
        registry.get_by_key(&name.cleaned)
    }

    fn method(&self) -> MatchMethod {
        MatchMethod::CleanedExact
    }

    fn strategy_name(&self) -> &str {
        "CleanedExactStrategy"
    }
}

/// Longest contained base name within the detected division.
///
/// With no detectable division every team is a candidate. When the longest
/// matching base length is shared by more than one team the name is
/// ambiguous and stays unresolved; "Lazio FC" with both squads registered is
/// the typical case.
pub struct DivisionBaseStrategy;

impl ResolutionStrategy for DivisionBaseStrategy {
    fn resolve<'r>(
        &self,
        registry: &'r TeamRegistry,
        name: &RawName<'_>,
    ) -> Option<&'r CanonicalTeam> {
        let division = detect_division(name.raw);

        let mut best: Option<&'r CanonicalTeam> = None;
        let mut tied = false;
        for team in registry.teams() {
            if division.is_some_and(|d| team.division() != d) {
                continue;
            }
            if !name.cleaned.contains(team.base()) {
                continue;
            }
            match best {
                Some(current) if team.base().len() < current.base().len() => {}
                Some(current) if team.base().len() == current.base().len() => tied = true,
                _ => {
                    best = Some(team);
                    tied = false;
                }
            }
        }

        if tied {
            debug!(
                "Ambiguous team name {:?}: several teams share the longest base match",
                name.raw
            );
            return None;
        }
        best
    }

    fn method(&self) -> MatchMethod {
        MatchMethod::DivisionBase
    }

    fn strategy_name(&self) -> &str {
        "DivisionBaseStrategy"
    }
}
