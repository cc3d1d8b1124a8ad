// src/specs/espionage.rs
//! Scraping *spec* for espionage reports (message detail view).
//!
//! Purpose:
//! - Turn one report's detail markup into an `EspionageReport`.
//!
//! Reading order (each step reads its own region and has its own absence rule):
//! 1. **Identity**: `data-msg-id`, title link `Name [G:S:P]`, planet/moon
//!    figure, message date. No coordinate match aborts the whole extraction.
//! 2. **Kind**: `span.espionageDefText` anywhere means someone probed *us*.
//! 3. **Target profile**: the `div.detail_txt` blocks, by position:
//!    `[0]` username + status/honor markers, `[1]` character class,
//!    `[2]` alliance class + counter-espionage percent, `[3]` activity.
//!    A missing marker is a plain `false`.
//! 4. **API key**: an `<input>` hidden inside the key icon's `title`.
//! 5. **Sections**: `ul.detail_list[data-type=…]`, first of each type wins.
//!    `li.detail_list_fail` flips `information_available` off. Every listed
//!    entity must carry an `img` whose class names its catalog id; a missing
//!    `img` means the game is hiding pictures to block readers like us.
//!
//! Hidden pictures are not fatal on the spot: the section stops at the blank
//! entry, the remaining sections are still read, and the report comes back
//! inside `ExtractError::ExtractionBlocked` so the caller can decide whether
//! the partial data is good enough.

use chrono::TimeZone;
use regex::Regex;

use crate::catalog::{Building, Catalog, character_class_from_name};
use crate::config::consts::*;
use crate::core::html::any_has_class;
use crate::core::parse::{capture_id, captures, parse_int, parse_int_strict, parse_timestamp};
use crate::core::sanitize::cut_at;
use crate::core::{Doc, Node, patterns};
use crate::error::{ExtractError, Result};
use crate::model::{AllianceClass, CelestialKind, EspionageReport, ReportKind, ReportSection};

pub fn extract_espionage_report<Tz: TimeZone>(doc: &Doc, zone: &Tz) -> Result<EspionageReport> {
    let mut report = EspionageReport::default();

    read_identity(doc, zone, &mut report)?;

    report.kind = if doc.exists(ACTION_MARKER)? { ReportKind::Action } else { ReportKind::Report };

    let blocks = doc.select(DETAIL_TXT)?;
    read_target(&blocks, &mut report)?;
    report.api_key = read_api_key(doc)?;
    report.last_activity = read_last_activity(blocks.get(3))?;
    report.counter_espionage = blocks
        .get(2)
        .and_then(|b| captures(&patterns::PERCENT, &b.raw_text()).map(|c| parse_int(c[0])));

    if read_sections(doc, &mut report)? {
        return Err(ExtractError::ExtractionBlocked { partial: Box::new(report) });
    }
    Ok(report)
}

fn read_identity<Tz: TimeZone>(doc: &Doc, zone: &Tz, report: &mut EspionageReport) -> Result<()> {
    // An unreadable message id is 0; only the coordinate is mandatory.
    report.id = doc.select_first(REPORT_ROOT)?.map_or(0, |n| parse_int(n.attr_or("data-msg-id", "0")));

    let link = doc
        .select_first(REPORT_TITLE_LINK)?
        .ok_or_else(|| ExtractError::mismatch("report title link not found"))?;
    let title = link.text();
    let Some(c) = captures(&patterns::COORD_TITLE, &title) else {
        return Err(ExtractError::mismatch(format!("cannot establish report subject from {title:?}")));
    };
    report.target_name = c[0].trim().to_string();
    report.coordinate.galaxy = parse_int_strict(c[1])?;
    report.coordinate.system = parse_int_strict(c[2])?;
    report.coordinate.position = parse_int_strict(c[3])?;

    if let Some(figure) = link.select_first("figure")? {
        if figure.has_class("moon") {
            report.coordinate.kind = CelestialKind::Moon;
        } else if figure.has_class("planet") {
            report.coordinate.kind = CelestialKind::Planet;
        }
    }

    let date = doc.text_of(REPORT_DATE)?;
    report.date = match parse_timestamp(&date, zone) {
        Ok(at) => Some(at),
        Err(e) => {
            logd!("report {}: no date ({e})", report.id);
            None
        }
    };
    Ok(())
}

fn read_target(blocks: &[Node<'_>], report: &mut EspionageReport) -> Result<()> {
    if let Some(first) = blocks.first() {
        if let Some(name) = first.select_first("span span")? {
            report.username = cut_at(&name.text(), USERNAME_STATUS_MARKER).to_string();
        }

        let spans = first.select("span")?;
        if any_has_class(&spans, "honorRank") {
            report.is_bandit = ["rank_bandit1", "rank_bandit2", "rank_bandit3"]
                .iter()
                .any(|c| any_has_class(&spans, c));
            report.is_starlord = ["rank_starlord1", "rank_starlord2", "rank_starlord3"]
                .iter()
                .any(|c| any_has_class(&spans, c));
        }
        report.honorable_target = first.exists("span.status_abbr_honorableTarget")?;

        if any_has_class(&spans, "status_abbr_longinactive") {
            report.is_inactive = true;
            report.is_long_inactive = true;
        } else if any_has_class(&spans, "status_abbr_inactive") {
            report.is_inactive = true;
        }
    }

    if let Some(class_block) = blocks.get(1) {
        let label = class_block.select_first("span span")?.map(|n| n.text()).unwrap_or_default();
        report.character_class = character_class_from_name(&label);
    }

    if let Some(alliance_block) = blocks.get(2) {
        let spans = alliance_block.select("span.alliance_class")?;
        if any_has_class(&spans, "trader") {
            report.alliance_class = AllianceClass::Trader;
        } else if any_has_class(&spans, "warrior") {
            report.alliance_class = AllianceClass::Warrior;
        } else if any_has_class(&spans, "researcher") {
            report.alliance_class = AllianceClass::Researcher;
        }
    }
    Ok(())
}

fn read_api_key(doc: &Doc) -> Result<Option<String>> {
    let Some(icon) = doc.select_first(API_KEY_ICON)? else {
        return Ok(None);
    };
    let snippet = icon.attr_doc("title");
    let key = snippet
        .select_first("input")?
        .and_then(|input| input.attr("value"))
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string);
    Ok(key)
}

/// Two-character minute counter, taken as-is (no trimming); anything else
/// leaves the field unset.
fn read_last_activity(block: Option<&Node<'_>>) -> Result<Option<i64>> {
    let Some(block) = block else { return Ok(None) };
    let Some(font) = block.select_first("font")? else { return Ok(None) };
    let txt = font.raw_text();
    if txt.chars().count() != 2 {
        return Ok(None);
    }
    Ok(txt.parse().ok())
}

#[derive(Default)]
struct Seen {
    resources: bool,
    buildings: bool,
    research: bool,
    ships: bool,
    defense: bool,
}

impl Seen {
    /// `Some(true)` the first time a known section type comes by, `Some(false)`
    /// after that, `None` for types we do not read.
    fn first(&mut self, data_type: &str) -> Option<bool> {
        let flag = match data_type {
            "resources" => &mut self.resources,
            "buildings" => &mut self.buildings,
            "research" => &mut self.research,
            "ships" => &mut self.ships,
            "defense" => &mut self.defense,
            _ => return None,
        };
        Some(!std::mem::replace(flag, true))
    }
}

/// Returns true when any section hit a hidden picture.
fn read_sections(doc: &Doc, report: &mut EspionageReport) -> Result<bool> {
    let mut seen = Seen::default();
    let mut blocked = false;

    for list in doc.select(DETAIL_LIST)? {
        let data_type = list.attr_or("data-type", "");
        match seen.first(data_type) {
            Some(true) => {}
            Some(false) => {
                logd!("report {}: duplicate {data_type:?} section ignored", report.id);
                continue;
            }
            None => continue,
        }
        match data_type {
            "resources" => read_resources(&list, report)?,
            // The satellite is a ship in reports, never a building.
            "buildings" => {
                blocked |= read_section(&list, &patterns::BUILDING_CLASS, &mut report.buildings, |b| {
                    b != Building::SolarSatellite
                })?
            }
            "research" => blocked |= read_section(&list, &patterns::RESEARCH_CLASS, &mut report.research, |_| true)?,
            "ships" => blocked |= read_section(&list, &patterns::SHIP_CLASS, &mut report.ships, |_| true)?,
            "defense" => blocked |= read_section(&list, &patterns::DEFENSE_CLASS, &mut report.defenses, |_| true)?,
            _ => {}
        }
    }
    Ok(blocked)
}

fn read_resources(list: &Node<'_>, report: &mut EspionageReport) -> Result<()> {
    let items = list.select("li")?;
    let title = |i: usize| items.get(i).map_or(0, |li| parse_int(li.attr_or("title", "0")));
    report.resources.metal = title(0);
    report.resources.crystal = title(1);
    report.resources.deuterium = title(2);
    report.resources.energy = title(3);
    report.has_resources_information = true;
    Ok(())
}

/// Fill one leveled section with the kinds `accept` lets through. Returns true
/// if an entry had no picture; entries before it are kept, the rest of the
/// section is left unread.
fn read_section<K: Catalog>(
    list: &Node<'_>,
    token: &Regex,
    section: &mut ReportSection<K>,
    accept: impl Fn(K) -> bool,
) -> Result<bool> {
    section.information_available = !list.exists(DETAIL_FAIL)?;

    for entry in list.select(DETAIL_ENTRY)? {
        let Some(img) = entry.select_first("img")? else {
            logd!("entity picture missing; section cut short");
            return Ok(true);
        };
        let class = img.attr_or("class", "");
        let Some(id) = capture_id(token, class) else {
            logd!("entity class {class:?} carries no id");
            continue;
        };
        let Some(kind) = K::from_id(id).filter(|&k| accept(k)) else {
            logd!("entity id {id} is not catalogued here");
            continue;
        };
        let value = entry.select_first(DETAIL_VALUE)?.map_or(0, |v| parse_int(&v.text()));
        section.levels.set(kind, value);
    }
    Ok(false)
}
