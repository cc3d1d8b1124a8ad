// src/catalog/tables.rs

use serde::{Deserialize, Serialize};

use super::Catalog;

catalog! {
    /// Supply buildings and facilities. `SolarSatellite` is listed here because
    /// the empire page files it under supplies; it shares id 212 with the ship.
    pub enum Building {
        MetalMine = 1 => "Metal Mine",
        CrystalMine = 2 => "Crystal Mine",
        DeuteriumSynthesizer = 3 => "Deuterium Synthesizer",
        SolarPlant = 4 => "Solar Plant",
        FusionReactor = 12 => "Fusion Reactor",
        RoboticsFactory = 14 => "Robotics Factory",
        NaniteFactory = 15 => "Nanite Factory",
        Shipyard = 21 => "Shipyard",
        MetalStorage = 22 => "Metal Storage",
        CrystalStorage = 23 => "Crystal Storage",
        DeuteriumTank = 24 => "Deuterium Tank",
        ResearchLab = 31 => "Research Lab",
        Terraformer = 33 => "Terraformer",
        AllianceDepot = 34 => "Alliance Depot",
        SpaceDock = 36 => "Space Dock",
        LunarBase = 41 => "Lunar Base",
        SensorPhalanx = 42 => "Sensor Phalanx",
        JumpGate = 43 => "Jump Gate",
        MissileSilo = 44 => "Missile Silo",
        SolarSatellite = 212 => "Solar Satellite",
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildingGroup {
    Supply,
    Facility,
}

impl Building {
    pub fn group(self) -> BuildingGroup {
        use Building::*;
        match self {
            MetalMine | CrystalMine | DeuteriumSynthesizer | SolarPlant | FusionReactor
            | MetalStorage | CrystalStorage | DeuteriumTank | SolarSatellite => BuildingGroup::Supply,
            _ => BuildingGroup::Facility,
        }
    }

    pub fn in_group(group: BuildingGroup) -> impl Iterator<Item = Building> {
        Building::ALL.iter().copied().filter(move |b| b.group() == group)
    }
}

catalog! {
    pub enum Research {
        EspionageTechnology = 106 => "Espionage Technology",
        ComputerTechnology = 108 => "Computer Technology",
        WeaponsTechnology = 109 => "Weapons Technology",
        ShieldingTechnology = 110 => "Shielding Technology",
        ArmourTechnology = 111 => "Armour Technology",
        EnergyTechnology = 113 => "Energy Technology",
        HyperspaceTechnology = 114 => "Hyperspace Technology",
        CombustionDrive = 115 => "Combustion Drive",
        ImpulseDrive = 117 => "Impulse Drive",
        HyperspaceDrive = 118 => "Hyperspace Drive",
        LaserTechnology = 120 => "Laser Technology",
        IonTechnology = 121 => "Ion Technology",
        PlasmaTechnology = 122 => "Plasma Technology",
        IntergalacticResearchNetwork = 123 => "Intergalactic Research Network",
        Astrophysics = 124 => "Astrophysics",
        GravitonTechnology = 199 => "Graviton Technology",
    }
}

catalog! {
    pub enum Ship {
        SmallCargo = 202 => "Small Cargo",
        LargeCargo = 203 => "Large Cargo",
        LightFighter = 204 => "Light Fighter",
        HeavyFighter = 205 => "Heavy Fighter",
        Cruiser = 206 => "Cruiser",
        Battleship = 207 => "Battleship",
        ColonyShip = 208 => "Colony Ship",
        Recycler = 209 => "Recycler",
        EspionageProbe = 210 => "Espionage Probe",
        Bomber = 211 => "Bomber",
        SolarSatellite = 212 => "Solar Satellite",
        Destroyer = 213 => "Destroyer",
        Deathstar = 214 => "Deathstar",
        Battlecruiser = 215 => "Battlecruiser",
        Crawler = 217 => "Crawler",
        Reaper = 218 => "Reaper",
        Pathfinder = 219 => "Pathfinder",
    }
}

catalog! {
    pub enum Defense {
        RocketLauncher = 401 => "Rocket Launcher",
        LightLaser = 402 => "Light Laser",
        HeavyLaser = 403 => "Heavy Laser",
        GaussCannon = 404 => "Gauss Cannon",
        IonCannon = 405 => "Ion Cannon",
        PlasmaTurret = 406 => "Plasma Turret",
        SmallShieldDome = 407 => "Small Shield Dome",
        LargeShieldDome = 408 => "Large Shield Dome",
        AntiBallisticMissiles = 502 => "Anti-Ballistic Missiles",
        InterplanetaryMissiles = 503 => "Interplanetary Missiles",
    }
}
