// src/specs/empire.rs
//! Empire page: one `CelestialSnapshot` per planet/moon from the embedded JSON.
//!
//! Decoding is two-step so the error taxonomy stays honest:
//! 1. locate the object and parse it as JSON (syntax error → `Unparsable`),
//! 2. decode it into `EmpirePayload` (shape error → `MalformedPayload`).
//!
//! Scalar leaves go through `core::lenient`. Catalog levels sit under numeric
//! keys (`"1"`, `"202"`, …) and default to 0; this page has no notion of
//! "information unavailable".

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::catalog::{Building, BuildingGroup, Catalog, Defense, Research, Ship};
use crate::config::consts::EMPIRE_ENERGY_VALUE;
use crate::core::parse::{captures, parse_int};
use crate::core::{Doc, lenient, patterns};
use crate::error::{ExtractError, Result};
use crate::model::{CelestialKind, CelestialSnapshot, Coordinate, Fields, Levels, Resources, Temperature};

#[derive(Deserialize)]
struct EmpirePayload {
    planets: Vec<RawCelestial>,
}

#[derive(Deserialize)]
struct RawCelestial {
    #[serde(default, deserialize_with = "lenient::int")]
    id: i64,
    #[serde(default, deserialize_with = "lenient::text")]
    name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    image: String,
    #[serde(rename = "type", default, deserialize_with = "lenient::int")]
    kind: i64,
    #[serde(default, deserialize_with = "lenient::int")]
    galaxy: i64,
    #[serde(default, deserialize_with = "lenient::int")]
    system: i64,
    #[serde(default, deserialize_with = "lenient::int")]
    position: i64,
    #[serde(default, deserialize_with = "lenient::text")]
    diameter: String,
    #[serde(rename = "fieldUsed", default, deserialize_with = "lenient::int")]
    field_used: i64,
    #[serde(rename = "fieldMax", default, deserialize_with = "lenient::int")]
    field_max: i64,
    #[serde(default, deserialize_with = "lenient::text")]
    temperature: String,
    #[serde(default, deserialize_with = "lenient::int")]
    metal: i64,
    #[serde(default, deserialize_with = "lenient::int")]
    crystal: i64,
    #[serde(default, deserialize_with = "lenient::int")]
    deuterium: i64,
    /// Inline markup, e.g. `<div><span class="overmark">-1.234</span></div>`.
    #[serde(default, deserialize_with = "lenient::text")]
    energy: String,
    #[serde(flatten)]
    rest: HashMap<String, Value>,
}

pub fn extract_empire(bytes: &[u8]) -> Result<Vec<CelestialSnapshot>> {
    let value = locate_payload(bytes)?;
    if !value.is_object() {
        return Err(ExtractError::malformed("empire payload is not an object"));
    }
    let payload = EmpirePayload::deserialize(&value)
        .map_err(|e| ExtractError::malformed(e.to_string()))?;

    payload.planets.into_iter().map(snapshot).collect()
}

/// The object passed to `createImperiumHtml(...)`, or the whole input when it
/// already is a bare JSON object.
fn locate_payload(bytes: &[u8]) -> Result<Value> {
    let text = std::str::from_utf8(bytes).map_err(|e| ExtractError::Unparsable(e.to_string()))?;
    let json = match patterns::EMPIRE_JSON.captures(text).and_then(|c| c.get(1)) {
        Some(m) => m.as_str(),
        None if text.trim_start().starts_with('{') => text,
        None => return Err(ExtractError::mismatch("empire data not found on page")),
    };
    serde_json::from_str(json).map_err(|e| ExtractError::Unparsable(e.to_string()))
}

fn snapshot(raw: RawCelestial) -> Result<CelestialSnapshot> {
    let kind = CelestialKind::from_code(raw.kind);

    let temperature = match captures(&patterns::TEMPERATURE, &raw.temperature).as_deref() {
        Some([min, max]) => Temperature { min: parse_int(min), max: parse_int(max) },
        _ => Temperature::default(),
    };
    let diameter = captures(&patterns::DIAMETER, &raw.diameter)
        .and_then(|c| c.first().map(|d| parse_int(d)))
        .unwrap_or(0);

    let level = |id: u32| -> Result<i64> {
        match raw.rest.get(&id.to_string()) {
            Some(v) => lenient::int(v)
                .map_err(|e| ExtractError::malformed(format!("celestial {} key {id}: {e}", raw.id))),
            None => Ok(0),
        }
    };

    Ok(CelestialSnapshot {
        id: raw.id,
        name: raw.name.clone(),
        image: raw.image.clone(),
        kind,
        coordinate: Coordinate::new(raw.galaxy, raw.system, raw.position, kind),
        diameter,
        fields: Fields { built: raw.field_used, total: raw.field_max },
        temperature,
        resources: Resources {
            metal: raw.metal,
            crystal: raw.crystal,
            deuterium: raw.deuterium,
            energy: energy_value(&raw.energy)?,
            darkmatter: 0,
        },
        supplies: group(Building::in_group(BuildingGroup::Supply), &level)?,
        facilities: group(Building::in_group(BuildingGroup::Facility), &level)?,
        defenses: group(Defense::ALL.iter().copied(), &level)?,
        researches: group(Research::ALL.iter().copied(), &level)?,
        ships: group(Ship::ALL.iter().copied(), &level)?,
    })
}

fn group<K: Catalog>(kinds: impl Iterator<Item = K>, level: &impl Fn(u32) -> Result<i64>) -> Result<Levels<K>> {
    let mut out = Levels::default();
    for k in kinds {
        out.set(k, level(k.id())?);
    }
    Ok(out)
}

fn energy_value(markup: &str) -> Result<i64> {
    let doc = Doc::parse_fragment(markup);
    let text = match doc.select_first(EMPIRE_ENERGY_VALUE)? {
        Some(span) => span.text(),
        None => doc.root().text(),
    };
    Ok(parse_int(&text))
}
