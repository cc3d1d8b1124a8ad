// src/catalog/names.rs
// Display name → kind lookups for the places where the page only gives us a
// localized label (queue image alt text, the character class line).

use std::collections::HashMap;
use std::sync::LazyLock;

use super::{Catalog, Defense, Ship};
use crate::core::sanitize::name_key;
use crate::model::CharacterClass;

const SHIP_NAMES_DE: &[(&str, Ship)] = &[
    ("Kleiner Transporter", Ship::SmallCargo),
    ("Großer Transporter", Ship::LargeCargo),
    ("Leichter Jäger", Ship::LightFighter),
    ("Schwerer Jäger", Ship::HeavyFighter),
    ("Kreuzer", Ship::Cruiser),
    ("Schlachtschiff", Ship::Battleship),
    ("Kolonieschiff", Ship::ColonyShip),
    ("Spionagesonde", Ship::EspionageProbe),
    ("Solarsatellit", Ship::SolarSatellite),
    ("Zerstörer", Ship::Destroyer),
    ("Todesstern", Ship::Deathstar),
    ("Schlachtkreuzer", Ship::Battlecruiser),
];

const DEFENSE_NAMES_DE: &[(&str, Defense)] = &[
    ("Raketenwerfer", Defense::RocketLauncher),
    ("Leichtes Lasergeschütz", Defense::LightLaser),
    ("Schweres Lasergeschütz", Defense::HeavyLaser),
    ("Gaußkanone", Defense::GaussCannon),
    ("Ionengeschütz", Defense::IonCannon),
    ("Plasmawerfer", Defense::PlasmaTurret),
    ("Kleine Schildkuppel", Defense::SmallShieldDome),
    ("Große Schildkuppel", Defense::LargeShieldDome),
    ("Abfangrakete", Defense::AntiBallisticMissiles),
    ("Interplanetarrakete", Defense::InterplanetaryMissiles),
];

const CLASS_NAMES: &[(&str, CharacterClass)] = &[
    ("Collector", CharacterClass::Collector),
    ("Kollektor", CharacterClass::Collector),
    ("General", CharacterClass::General),
    ("Discoverer", CharacterClass::Discoverer),
    ("Entdecker", CharacterClass::Discoverer),
];

/// English names come from the catalog itself; localized ones are added on top.
fn index<K: Catalog>(localized: &[(&str, K)]) -> HashMap<String, K> {
    K::ALL
        .iter()
        .map(|&k| (name_key(k.name()), k))
        .chain(localized.iter().map(|&(name, k)| (name_key(name), k)))
        .collect()
}

static SHIPS: LazyLock<HashMap<String, Ship>> = LazyLock::new(|| index(SHIP_NAMES_DE));
static DEFENSES: LazyLock<HashMap<String, Defense>> = LazyLock::new(|| index(DEFENSE_NAMES_DE));
static CLASSES: LazyLock<HashMap<String, CharacterClass>> = LazyLock::new(|| {
    CLASS_NAMES.iter().map(|&(name, c)| (name_key(name), c)).collect()
});

pub fn ship_from_name(name: &str) -> Option<Ship> {
    SHIPS.get(&name_key(name)).copied()
}

pub fn defense_from_name(name: &str) -> Option<Defense> {
    DEFENSES.get(&name_key(name)).copied()
}

/// Unknown or empty labels resolve to `CharacterClass::None`.
pub fn character_class_from_name(name: &str) -> CharacterClass {
    CLASSES.get(&name_key(name)).copied().unwrap_or(CharacterClass::None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ship_names() {
        assert_eq!(ship_from_name("Light Fighter"), Some(Ship::LightFighter));
        assert_eq!(ship_from_name("light fighter"), Some(Ship::LightFighter));
        assert_eq!(ship_from_name("Großer Transporter"), Some(Ship::LargeCargo));
        assert_eq!(ship_from_name("Rocket Launcher"), None);
        assert_eq!(ship_from_name(""), None);
    }

    #[test]
    fn defense_names() {
        assert_eq!(defense_from_name("Rocket Launcher"), Some(Defense::RocketLauncher));
        assert_eq!(defense_from_name("Anti-Ballistic Missiles"), Some(Defense::AntiBallisticMissiles));
        assert_eq!(defense_from_name("Plasmawerfer"), Some(Defense::PlasmaTurret));
        assert_eq!(defense_from_name("Cruiser"), None);
    }

    #[test]
    fn class_names() {
        assert_eq!(character_class_from_name("Discoverer"), CharacterClass::Discoverer);
        assert_eq!(character_class_from_name(" kollektor "), CharacterClass::Collector);
        assert_eq!(character_class_from_name("No class selected"), CharacterClass::None);
    }
}
