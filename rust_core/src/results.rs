//! Weekly result synthesis.
//!
//! Turns the fixture list for a week plus the points typed in for that week
//! into match records. Fixture team strings are kept verbatim so the results
//! read the same as the feed; only the score lookup goes through the resolver.

use crate::matching::Resolver;
use crate::models::{Fixture, RawMatchRecord, WeekPointsEntry};
use tracing::debug;

/// Points lookup for one week's entry.
///
/// Tries the canonical label first, then the raw fixture string (entries
/// saved before names were canonicalized), then falls back to 0.
pub struct PointsLookup<'a> {
    resolver: &'a Resolver,
    entry: &'a WeekPointsEntry,
}

impl<'a> PointsLookup<'a> {
    pub fn new(resolver: &'a Resolver, entry: &'a WeekPointsEntry) -> Self {
        Self { resolver, entry }
    }

    pub fn points_for(&self, raw: &str) -> u32 {
        if raw.is_empty() {
            return 0;
        }
        if let Some(points) = self
            .resolver
            .canonical_label(raw)
            .and_then(|label| self.entry.get(label))
        {
            return points;
        }
        self.entry.get(raw).unwrap_or(0)
    }
}

/// Build the week's match records from its fixtures and points entry.
///
/// Every team string present on a fixture gets a score; absent sides stay absent.
pub fn synthesize_week(
    resolver: &Resolver,
    fixtures: &[Fixture],
    entry: &WeekPointsEntry,
) -> Vec<RawMatchRecord> {
    let lookup = PointsLookup::new(resolver, entry);

    let records: Vec<RawMatchRecord> = fixtures
        .iter()
        .map(|fixture| match fixture {
            Fixture::Bye { bye } => RawMatchRecord::Bye {
                bye: bye.clone(),
                bye_score: Some(lookup.points_for(bye)),
            },
            Fixture::Pairing { home, away } => RawMatchRecord::Pairing {
                home: home.clone(),
                away: away.clone(),
                home_score: home.as_deref().map(|h| lookup.points_for(h)),
                away_score: away.as_deref().map(|a| lookup.points_for(a)),
            },
        })
        .collect();

    debug!(
        "Synthesized {} records from {} entered team scores",
        records.len(),
        entry.len()
    );
    records
}

/// Score preview line for a fixture, e.g. `"1XI - Lazio FC vs 2XI - Lazio FC  10-4"`.
pub fn preview_line(resolver: &Resolver, fixture: &Fixture, entry: &WeekPointsEntry) -> String {
    let lookup = PointsLookup::new(resolver, entry);
    match fixture {
        Fixture::Bye { bye } => format!("BYE: {} ({})", bye, lookup.points_for(bye)),
        Fixture::Pairing { home, away } => {
            let home = home.as_deref().unwrap_or("?");
            let away = away.as_deref().unwrap_or("?");
            format!(
                "{} vs {}  {}-{}",
                home,
                away,
                lookup.points_for(home),
                lookup.points_for(away)
            )
        }
    }
}
