// src/extractor.rs
//! Byte-level entry points.
//!
//! An `Extractor` only holds its options; every call parses the document it
//! is given and returns a fresh value, so one instance can be shared across
//! threads freely.

use chrono::{TimeZone, Utc};

use crate::config::{Dialect, ExtractOptions};
use crate::core::Doc;
use crate::error::Result;
use crate::model::{CelestialSnapshot, EspionageReport, Quantifiable, ResourceReading};
use crate::specs::{self, CancelInfo};

#[derive(Clone, Debug)]
pub struct Extractor<Tz: TimeZone = Utc> {
    options: ExtractOptions<Tz>,
}

/// v9 without lifeform, dates read as UTC.
impl Default for Extractor<Utc> {
    fn default() -> Self {
        Self::new(ExtractOptions::default())
    }
}

impl<Tz: TimeZone> Extractor<Tz> {
    pub fn new(options: ExtractOptions<Tz>) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExtractOptions<Tz> {
        &self.options
    }

    pub fn dialect(&self) -> &Dialect {
        &self.options.dialect
    }

    /// Resource bar of any in-game page.
    pub fn resources(&self, page: &[u8]) -> Result<ResourceReading> {
        specs::extract_resources(&Doc::parse(page)?, self.dialect())
    }

    /// Shipyard queue, active item first.
    pub fn production_queue(&self, page: &[u8]) -> Result<Vec<Quantifiable>> {
        specs::extract_production_queue(&Doc::parse(page)?, self.dialect())
    }

    /// Accepts the empire page or just its JSON object.
    pub fn empire(&self, page: &[u8]) -> Result<Vec<CelestialSnapshot>> {
        specs::extract_empire(page)
    }

    /// See [`specs::espionage`] for when this returns `ExtractionBlocked`.
    pub fn espionage_report(&self, page: &[u8]) -> Result<EspionageReport> {
        specs::extract_espionage_report(&Doc::parse(page)?, &self.options.source_zone)
    }

    pub fn cancel_research(&self, page: &[u8]) -> Result<CancelInfo> {
        specs::extract_cancel_research_infos(&Doc::parse(page)?, self.dialect())
    }

    pub fn cancel_lf_building(&self, page: &[u8]) -> Result<CancelInfo> {
        specs::extract_cancel_lf_building_infos(&Doc::parse(page)?, self.dialect())
    }
}
