// src/specs/overview.rs
//! Overview page: resource bar and the shipyard production queue.
//!
//! Resource boxes:
//! - Each of the five boxes carries its tooltip as markup in `title`.
//! - Tooltip rows 0..2, first `td` each: available / capacity / production
//!   (energy: available / production / consumption; dark matter: available /
//!   purchased / found).
//! - A missing box reads as zeros; the overview shell is always there even when
//!   a feature is switched off.
//!
//! Production queue:
//! - Active region is `table.construction` at the dialect's shipyard index.
//! - The in-progress item comes from `openTech=<id>` in its link plus the
//!   `shipSumCount` badge; without it the queue is empty.
//! - Waiting entries are the `table.queue` cells next to it, read in order and
//!   resolved by image `alt` through ship then defense names.

use crate::catalog::{EntityKind, defense_from_name, ship_from_name};
use crate::config::Dialect;
use crate::config::consts::*;
use crate::core::parse::{capture_id, parse_int};
use crate::core::{Doc, Node, patterns};
use crate::error::Result;
use crate::model::{DarkMatterReading, EnergyReading, Quantifiable, ResourceReading, StoredResource};

pub fn extract_resources(doc: &Doc, dialect: &Dialect) -> Result<ResourceReading> {
    let boxes = &dialect.resource_boxes;

    let [a, b, c] = tooltip_rows(doc, &boxes.metal)?;
    let metal = StoredResource { available: a, storage_capacity: b, current_production: c };

    let [a, b, c] = tooltip_rows(doc, &boxes.crystal)?;
    let crystal = StoredResource { available: a, storage_capacity: b, current_production: c };

    let [a, b, c] = tooltip_rows(doc, &boxes.deuterium)?;
    let deuterium = StoredResource { available: a, storage_capacity: b, current_production: c };

    let [a, b, c] = tooltip_rows(doc, &boxes.energy)?;
    let energy = EnergyReading { available: a, current_production: b, consumption: c };

    let [a, b, c] = tooltip_rows(doc, &boxes.darkmatter)?;
    let darkmatter = DarkMatterReading { available: a, purchased: b, found: c };

    Ok(ResourceReading { metal, crystal, deuterium, energy, darkmatter })
}

/// First cell of the first three tooltip rows of one resource box.
fn tooltip_rows(doc: &Doc, box_selector: &str) -> Result<[i64; 3]> {
    let Some(bx) = doc.select_first(box_selector)? else {
        logd!("resource box {box_selector} not on page");
        return Ok([0; 3]);
    };
    let tooltip = bx.attr_doc("title");
    let rows = tooltip.select(TOOLTIP_ROWS)?;

    let mut out = [0i64; 3];
    for (slot, row) in out.iter_mut().zip(rows.iter()) {
        if let Some(td) = row.select_first("td")? {
            *slot = parse_int(&td.text());
        }
    }
    Ok(out)
}

/// The `table.construction` at `index`. A page with fewer regions than the
/// dialect lays out is logged; the lookup itself still decides.
pub(crate) fn construction_region<'d>(doc: &'d Doc, dialect: &Dialect, index: usize) -> Result<Option<Node<'d>>> {
    let regions = doc.select(CONSTRUCTION_TABLE)?;
    if regions.len() < dialect.region_count() {
        logd!("page has {} construction regions, dialect lays out {}", regions.len(), dialect.region_count());
    }
    Ok(regions.get(index).copied())
}

pub fn extract_production_queue(doc: &Doc, dialect: &Dialect) -> Result<Vec<Quantifiable>> {
    let Some(active) = construction_region(doc, dialect, dialect.construction.shipyard)? else {
        logd!("no construction region at index {}", dialect.construction.shipyard);
        return Ok(Vec::new());
    };

    let href = active.select_first(ACTIVE_LINK)?.and_then(|a| a.attr("href")).unwrap_or("");
    let Some(id) = capture_id(&patterns::OPEN_TECH, href) else {
        return Ok(Vec::new());
    };
    let Some(kind) = EntityKind::from_id(id) else {
        logd!("active production id {id} is not catalogued");
        return Ok(Vec::new());
    };
    let count = active.select_first(ACTIVE_COUNT)?.map(|n| parse_int(&n.text())).unwrap_or(0);

    let mut queue = vec![Quantifiable::new(kind, count)];

    let Some(region) = active.parent() else {
        return Ok(queue);
    };
    for cell in region.select(QUEUE_CELLS)? {
        let alt = cell.select_first("img")?.and_then(|img| img.attr("alt")).unwrap_or("");
        let kind = ship_from_name(alt)
            .map(EntityKind::Ship)
            .or_else(|| defense_from_name(alt).map(EntityKind::Defense));
        match kind {
            Some(kind) => queue.push(Quantifiable::new(kind, parse_int(&cell.text()))),
            None => { logd!("queue entry {alt:?} skipped"); }
        }
    }
    Ok(queue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tooltip_rows_zero_filled_when_short() {
        let doc = Doc::parse(
            br#"<div id="metal_box" title="&lt;table&gt;&lt;tr&gt;&lt;td&gt;12&lt;/td&gt;&lt;/tr&gt;&lt;/table&gt;"></div>"#,
        )
        .unwrap();
        assert_eq!(tooltip_rows(&doc, METAL_BOX).unwrap(), [12, 0, 0]);
        assert_eq!(tooltip_rows(&doc, CRYSTAL_BOX).unwrap(), [0, 0, 0]);
    }

    #[test]
    fn short_page_has_no_region_past_its_end() {
        let doc = Doc::parse(
            b"<table class='construction'><tr><td>a</td></tr></table>\
              <table class='construction'><tr><td>b</td></tr></table>",
        )
        .unwrap();
        let dialect = Dialect::default();
        assert!(doc.select(CONSTRUCTION_TABLE).unwrap().len() < dialect.region_count());

        let second = construction_region(&doc, &dialect, 1).unwrap().unwrap();
        assert_eq!(second.text(), "b");
        assert!(construction_region(&doc, &dialect, dialect.construction.shipyard).unwrap().is_none());
    }
}
