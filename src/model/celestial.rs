// src/model/celestial.rs

use serde::{Deserialize, Serialize};

use super::{CelestialKind, Coordinate, Levels, Resources};
use crate::catalog::{Building, Defense, EntityKind, Research, Ship};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fields {
    pub built: i64,
    pub total: i64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Temperature {
    pub min: i64,
    pub max: i64,
}

/// One row of the empire overview: a planet or moon with every catalogued
/// level/count. Groups are total: a kind missing from the page reads 0.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CelestialSnapshot {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub kind: CelestialKind,
    pub coordinate: Coordinate,
    pub diameter: i64,
    pub fields: Fields,
    pub temperature: Temperature,
    pub resources: Resources,
    pub supplies: Levels<Building>,
    pub facilities: Levels<Building>,
    pub defenses: Levels<Defense>,
    pub researches: Levels<Research>,
    pub ships: Levels<Ship>,
}

/// A queued (or in-progress) production entry. Queue order is list order and
/// the same kind may appear more than once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quantifiable {
    pub kind: EntityKind,
    pub count: i64,
}

impl Quantifiable {
    pub fn new(kind: EntityKind, count: i64) -> Self {
        Self { kind, count }
    }
}
