// src/model/resources.rs
// Zero is a real game value here, so absent sub-metrics are simply zero.

use serde::{Deserialize, Serialize};

/// Flat amounts, as carried by a report or an empire row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resources {
    pub metal: i64,
    pub crystal: i64,
    pub deuterium: i64,
    pub energy: i64,
    pub darkmatter: i64,
}

/// Metal, crystal and deuterium tooltips share one shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredResource {
    pub available: i64,
    pub storage_capacity: i64,
    pub current_production: i64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyReading {
    pub available: i64,
    pub current_production: i64,
    pub consumption: i64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DarkMatterReading {
    pub available: i64,
    pub purchased: i64,
    pub found: i64,
}

/// Everything the overview's resource bar tooltips expose.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceReading {
    pub metal: StoredResource,
    pub crystal: StoredResource,
    pub deuterium: StoredResource,
    pub energy: EnergyReading,
    pub darkmatter: DarkMatterReading,
}

impl ResourceReading {
    pub fn available(&self) -> Resources {
        Resources {
            metal: self.metal.available,
            crystal: self.crystal.available,
            deuterium: self.deuterium.available,
            energy: self.energy.available,
            darkmatter: self.darkmatter.available,
        }
    }
}
