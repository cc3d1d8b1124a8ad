// src/model/coordinate.rs

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CelestialKind {
    #[default]
    Planet,
    Moon,
}

impl CelestialKind {
    /// Numeric type code used by the game's JSON (1 planet, 3 moon). Anything
    /// that is not the moon code reads as a planet.
    pub fn from_code(code: i64) -> Self {
        match code {
            3 => CelestialKind::Moon,
            _ => CelestialKind::Planet,
        }
    }

    pub fn code(self) -> i64 {
        match self {
            CelestialKind::Planet => 1,
            CelestialKind::Moon => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub galaxy: i64,
    pub system: i64,
    pub position: i64,
    pub kind: CelestialKind,
}

impl Coordinate {
    pub fn new(galaxy: i64, system: i64, position: i64, kind: CelestialKind) -> Self {
        Self { galaxy, system, position, kind }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.kind {
            CelestialKind::Planet => "P",
            CelestialKind::Moon => "M",
        };
        write!(f, "{}:{}:{}{}", self.galaxy, self.system, self.position, tag)
    }
}
