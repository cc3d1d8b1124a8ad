// tests/overview.rs
//
// Resource bar and shipyard queue on saved overview markup.
//
use og_scrape::catalog::{Defense, EntityKind, Ship};
use og_scrape::core::Doc;
use og_scrape::model::{Quantifiable, Resources};
use og_scrape::specs::{extract_production_queue, extract_resources};
use og_scrape::{Dialect, Extractor, Features};

/// A resource box whose `title` carries the tooltip table, escaped the way the
/// game serves it.
fn resource_box(id: &str, rows: [&str; 3]) -> String {
    let table = format!(
        "<table class='resourceTooltip'>\
         <tr><th>Available:</th><td><span class='overmark'>{}</span></td></tr>\
         <tr><th>Storage capacity:</th><td><span>{}</span></td></tr>\
         <tr><th>Current production:</th><td><span>{}</span></td></tr>\
         </table>",
        rows[0], rows[1], rows[2]
    );
    let escaped = table.replace('<', "&lt;").replace('>', "&gt;");
    format!(r#"<div id="{id}" class="tooltipHTML" title="{escaped}"><span class="value">x</span></div>"#)
}

fn page(boxes: &[String], body: &str) -> Vec<u8> {
    format!("<html><body><div id='resources'>{}</div>{body}</body></html>", boxes.concat()).into_bytes()
}

#[test]
fn reads_every_tooltip_row() {
    let html = page(
        &[
            resource_box("metal_box", ["1,234,567", "5,000,000", "+150"]),
            resource_box("crystal_box", ["500.000", "1.000.000", "75"]),
            resource_box("deuterium_box", ["12", "100", "-3"]),
            resource_box("energy_box", ["-40", "1.200", "1.240"]),
            resource_box("darkmatter_box", ["8.000", "5.000", "3.000"]),
        ],
        "",
    );

    let got = Extractor::default().resources(&html).unwrap();

    assert_eq!(got.metal.available, 1_234_567);
    assert_eq!(got.metal.storage_capacity, 5_000_000);
    assert_eq!(got.metal.current_production, 150);
    assert_eq!(got.crystal.available, 500_000);
    assert_eq!(got.deuterium.current_production, -3);
    assert_eq!(got.energy.available, -40);
    assert_eq!(got.energy.current_production, 1_200);
    assert_eq!(got.energy.consumption, 1_240);
    assert_eq!(got.darkmatter.available, 8_000);
    assert_eq!(got.darkmatter.purchased, 5_000);
    assert_eq!(got.darkmatter.found, 3_000);

    assert_eq!(
        got.available(),
        Resources { metal: 1_234_567, crystal: 500_000, deuterium: 12, energy: -40, darkmatter: 8_000 }
    );
}

#[test]
fn missing_boxes_read_as_zero() {
    let html = page(&[resource_box("metal_box", ["10", "20", "30"])], "");
    let got = Extractor::default().resources(&html).unwrap();

    assert_eq!(got.metal.available, 10);
    assert_eq!(got.crystal.available, 0);
    assert_eq!(got.crystal.storage_capacity, 0);
    assert_eq!(got.energy.consumption, 0);
    assert_eq!(got.darkmatter.found, 0);
}

// --- production queue ---

const IDLE_REGION: &str = "<table class='construction'><tr><td>idle</td></tr></table>";

/// Four idle regions, then the shipyard region at index 4.
fn shipyard_page(shipyard: &str) -> Vec<u8> {
    page(&[], &format!("{}{shipyard}", IDLE_REGION.repeat(4)))
}

const BUSY_SHIPYARD: &str = r#"
<div id="productionboxshipyardcomponent">
  <table class="construction active"><tr><td>
    <a href="index.php?page=ingame&amp;component=shipyard&amp;openTech=204"><img alt="Light Fighter"></a>
    <div class="shipSumCount">12</div>
  </td></tr></table>
  <table class="queue"><tr>
    <td class="queue_item"><img alt="Cruiser"><br>3</td>
    <td class="queue_item"><img alt="Rocket Launcher"><br>1.500</td>
    <td class="queue_item"><img alt="Mystery Hull"><br>9</td>
    <td class="queue_item"><img alt="Light Fighter"><br>7</td>
  </tr></table>
</div>"#;

#[test]
fn queue_starts_with_the_active_item_and_keeps_order() {
    let doc = Doc::parse(&shipyard_page(BUSY_SHIPYARD)).unwrap();
    let queue = extract_production_queue(&doc, &Dialect::default()).unwrap();

    assert_eq!(
        queue,
        vec![
            Quantifiable::new(EntityKind::Ship(Ship::LightFighter), 12),
            Quantifiable::new(EntityKind::Ship(Ship::Cruiser), 3),
            Quantifiable::new(EntityKind::Defense(Defense::RocketLauncher), 1_500),
            // unknown alt skipped, repeated kind kept as its own entry
            Quantifiable::new(EntityKind::Ship(Ship::LightFighter), 7),
        ]
    );
}

#[test]
fn queue_is_empty_without_an_active_item() {
    let idle = r#"<div><table class="construction"><tr><td>Nothing is being built.</td></tr></table>
        <table class="queue"><tr><td><img alt="Cruiser">3</td></tr></table></div>"#;
    let doc = Doc::parse(&shipyard_page(idle)).unwrap();
    assert!(extract_production_queue(&doc, &Dialect::default()).unwrap().is_empty());
}

#[test]
fn queue_is_empty_when_region_is_missing() {
    let doc = Doc::parse(&page(&[], IDLE_REGION)).unwrap();
    assert!(extract_production_queue(&doc, &Dialect::default()).unwrap().is_empty());
}

#[test]
fn german_queue_names_resolve() {
    let shipyard = r#"<div>
      <table class="construction"><tr><td><a href="?openTech=401">x</a><div class="shipSumCount">4</div></td></tr></table>
      <table class="queue"><tr><td><img alt="Großer Transporter">2</td><td><img alt="Plasmawerfer">1</td></tr></table>
    </div>"#;
    let doc = Doc::parse(&shipyard_page(shipyard)).unwrap();
    let queue = extract_production_queue(&doc, &Dialect::v9(Features { lifeform: true })).unwrap();

    assert_eq!(
        queue,
        vec![
            Quantifiable::new(EntityKind::Defense(Defense::RocketLauncher), 4),
            Quantifiable::new(EntityKind::Ship(Ship::LargeCargo), 2),
            Quantifiable::new(EntityKind::Defense(Defense::PlasmaTurret), 1),
        ]
    );
}
