//! League Core - team-name resolution and standings aggregation.
//!
//! This module provides:
//! - Canonical team registry with alias table (26-team, two-division league)
//! - Layered name resolution (alias, cleaned exact, division + base heuristic)
//! - Lenient score handling for hand-maintained match records
//! - Week and season point aggregation with unmapped-name reporting
//! - Standings ordering and previous-week rank / movement
//! - Result synthesis from fixtures + entered points
//! - JSON persistence for the fixture feed and the league store

pub mod error;
pub mod feed;
pub mod league_config;
pub mod matching;
pub mod models;
pub mod results;
pub mod standings;
pub mod store;
pub mod team_registry;
pub mod utils;

pub use error::{RegistryError, StoreError};
pub use feed::FixtureFeed;
pub use matching::{AliasSuggestion, MatchMethod, Resolution, Resolver};
pub use models::{Fixture, MatchHistory, RawMatchRecord, Standings, StandingsRow, TeamPoints, WeekPointsEntry};
pub use standings::{build_standings, collect_unmapped, season_totals, tally_week, WeekTally};
pub use store::LeagueStore;
pub use team_registry::{CanonicalTeam, TeamRegistry};
pub use utils::matching::Division;
