// src/model/levels.rs
//! Per-category level/count storage shared by snapshots and reports.
//!
//! `Levels<K>` is sparse: a kind that was never set reads back as `None`
//! through [`Levels::get`], which is how a report says "not mentioned" as
//! opposed to a confirmed zero. Snapshot groups set every kind of their
//! group, so there `get` is always `Some`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Levels<K: Catalog> {
    map: BTreeMap<K, i64>,
}

impl<K: Catalog> Default for Levels<K> {
    fn default() -> Self {
        Self { map: BTreeMap::new() }
    }
}

impl<K: Catalog> Levels<K> {
    pub fn set(&mut self, kind: K, value: i64) {
        self.map.insert(kind, value);
    }

    /// Resolve a raw markup id through the catalog and store it.
    /// Returns the kind when the id is ours, `None` (and stores nothing) otherwise.
    pub fn set_id(&mut self, id: u32, value: i64) -> Option<K> {
        let kind = K::from_id(id)?;
        self.set(kind, value);
        Some(kind)
    }

    pub fn get(&self, kind: K) -> Option<i64> {
        self.map.get(&kind).copied()
    }

    /// Value or 0 when unset.
    pub fn level(&self, kind: K) -> i64 {
        self.get(kind).unwrap_or(0)
    }

    pub fn contains(&self, kind: K) -> bool {
        self.map.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, i64)> + '_ {
        self.map.iter().map(|(&k, &v)| (k, v))
    }
}

/// One category of an espionage report.
///
/// `information_available` is false when the page marked the section as a
/// failed reveal, or when the section never appeared. It says nothing about
/// individual entries: an available section can still leave kinds unset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSection<K: Catalog> {
    pub information_available: bool,
    pub levels: Levels<K>,
}

impl<K: Catalog> Default for ReportSection<K> {
    fn default() -> Self {
        Self { information_available: false, levels: Levels::default() }
    }
}

impl<K: Catalog> ReportSection<K> {
    pub fn get(&self, kind: K) -> Option<i64> {
        self.levels.get(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Building, BuildingGroup, Ship};

    #[test]
    fn sparse_levels_distinguish_unset_from_zero() {
        let mut l: Levels<Ship> = Levels::default();
        assert_eq!(l.set_id(204, 0), Some(Ship::LightFighter));
        assert_eq!(l.set_id(401, 7), None);
        assert_eq!(l.get(Ship::LightFighter), Some(0));
        assert_eq!(l.get(Ship::Cruiser), None);
        assert_eq!(l.level(Ship::Cruiser), 0);
        assert_eq!(l.len(), 1);
    }

    #[test]
    fn iteration_follows_catalog_order() {
        let mut l: Levels<Building> = Levels::default();
        l.set(Building::Shipyard, 8);
        l.set(Building::MetalMine, 30);
        let got: Vec<_> = l.iter().collect();
        assert_eq!(got, vec![(Building::MetalMine, 30), (Building::Shipyard, 8)]);
        assert_eq!(Building::in_group(BuildingGroup::Supply).count(), 9);
    }
}
