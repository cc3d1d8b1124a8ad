// src/model/report.rs

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::{Coordinate, ReportSection, Resources};
use crate::catalog::{Building, Defense, Research, Ship};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportKind {
    /// Our own probe's report.
    #[default]
    Report,
    /// Notice that someone probed us.
    Action,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    #[default]
    None,
    Collector,
    General,
    Discoverer,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AllianceClass {
    #[default]
    None,
    Warrior,
    Trader,
    Researcher,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EspionageReport {
    pub id: i64,
    pub coordinate: Coordinate,
    /// Name of the probed planet/moon, as shown in the title.
    pub target_name: String,
    pub date: Option<DateTime<Local>>,
    pub kind: ReportKind,

    pub username: String,
    pub character_class: CharacterClass,
    pub alliance_class: AllianceClass,
    pub is_bandit: bool,
    pub is_starlord: bool,
    pub honorable_target: bool,
    pub is_inactive: bool,
    pub is_long_inactive: bool,

    pub api_key: Option<String>,
    /// Minutes since the target was last active, when the page shows it.
    pub last_activity: Option<i64>,
    pub counter_espionage: Option<i64>,

    pub has_resources_information: bool,
    pub resources: Resources,
    pub buildings: ReportSection<Building>,
    pub research: ReportSection<Research>,
    pub ships: ReportSection<Ship>,
    pub defenses: ReportSection<Defense>,
}
