// src/catalog/mod.rs
//! # Catalog mapping tables
//!
//! The game tags entities in markup with small numeric ids (`building14`,
//! `tech204`, JSON key `"401"`, `openTech=202`). This module owns the closed
//! vocabulary those ids map to, one enum per category:
//!
//! - [`Building`]: supply buildings and facilities (plus the solar satellite,
//!   which the empire page files under supplies),
//! - [`Research`],
//! - [`Ship`],
//! - [`Defense`].
//!
//! Every enum implements [`Catalog`], so extractors never switch on raw ids:
//! they resolve through `K::from_id` and store into a [`Levels<K>`].
//! An unknown id is `None` ("not one of ours"), never an error. When a
//! context could hold more than one category, try the most specific table
//! first and fall back ([`EntityKind::from_id`] does this for queue items).
//!
//! Display-name lookups (`ship_from_name`, `defense_from_name`,
//! `character_class_from_name`) live in [`names`].
//!
//! [`Levels<K>`]: crate::model::Levels

mod names;
mod tables;

pub use names::{character_class_from_name, defense_from_name, ship_from_name};
pub use tables::{Building, BuildingGroup, Defense, Research, Ship};

use serde::{Deserialize, Serialize};

/// A closed id → kind table.
pub trait Catalog: Copy + Ord + Sized + 'static {
    const ALL: &'static [Self];

    fn id(self) -> u32;
    fn from_id(id: u32) -> Option<Self>;
    fn name(self) -> &'static str;
}

/// Any catalogued entity, tagged with its category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Ship(Ship),
    Defense(Defense),
    Building(Building),
    Research(Research),
}

impl EntityKind {
    /// Resolve an id across all tables: ship, then defense, then building, then
    /// research. 212 therefore resolves to the ship, not the supply entry.
    pub fn from_id(id: u32) -> Option<Self> {
        Ship::from_id(id).map(EntityKind::Ship)
            .or_else(|| Defense::from_id(id).map(EntityKind::Defense))
            .or_else(|| Building::from_id(id).map(EntityKind::Building))
            .or_else(|| Research::from_id(id).map(EntityKind::Research))
    }

    pub fn id(self) -> u32 {
        match self {
            EntityKind::Ship(k) => k.id(),
            EntityKind::Defense(k) => k.id(),
            EntityKind::Building(k) => k.id(),
            EntityKind::Research(k) => k.id(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EntityKind::Ship(k) => k.name(),
            EntityKind::Defense(k) => k.name(),
            EntityKind::Building(k) => k.name(),
            EntityKind::Research(k) => k.name(),
        }
    }
}
