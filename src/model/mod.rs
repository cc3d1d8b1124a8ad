// src/model/mod.rs
// Typed results. Everything is a plain value built by one extractor call and
// handed to the caller.

mod celestial;
mod coordinate;
mod levels;
mod report;
mod resources;

pub use celestial::{CelestialSnapshot, Fields, Quantifiable, Temperature};
pub use coordinate::{CelestialKind, Coordinate};
pub use levels::{Levels, ReportSection};
pub use report::{AllianceClass, CharacterClass, EspionageReport, ReportKind};
pub use resources::{DarkMatterReading, EnergyReading, ResourceReading, Resources, StoredResource};
