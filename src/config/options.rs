// src/config/options.rs
use chrono::{TimeZone, Utc};

use super::dialect::Dialect;

/// Caller-supplied knobs for one `Extractor`.
///
/// `Tz` is the zone the game server prints message dates in; any
/// `chrono::TimeZone` works (`Utc`, a `FixedOffset`, a tz database zone).
#[derive(Clone, Debug, PartialEq)]
pub struct ExtractOptions<Tz: TimeZone = Utc> {
    pub dialect: Dialect,
    pub source_zone: Tz,
}

impl Default for ExtractOptions<Utc> {
    fn default() -> Self {
        Self { dialect: Dialect::default(), source_zone: Utc }
    }
}

impl<Tz: TimeZone> ExtractOptions<Tz> {
    pub fn new(dialect: Dialect, source_zone: Tz) -> Self {
        Self { dialect, source_zone }
    }

    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }
}
