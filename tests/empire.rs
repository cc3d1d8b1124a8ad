// tests/empire.rs
//
// Empire page JSON into per-celestial snapshots.
//
use og_scrape::catalog::{Building, Catalog, Defense, Research, Ship};
use og_scrape::model::{CelestialKind, Coordinate, Fields, Temperature};
use og_scrape::specs::extract_empire;
use og_scrape::{ExtractError, Extractor};

const PAYLOAD: &str = r#"{
  "planets": [
    {
      "id": 33620229, "name": "Homeworld", "image": "normal_2", "type": 1,
      "galaxy": 1, "system": 234, "position": 7,
      "diameter": "12.800km (163/188)", "fieldUsed": 163, "fieldMax": "188",
      "temperature": "-12°C to 28°C",
      "metal": 1234567.8, "crystal": "500.000", "deuterium": 12,
      "energy": "<div><span class=\"overmark\">-1.234</span></div>",
      "1": 30, "2": "25", "4": 28.0, "14": 10, "21": 8, "212": 40,
      "113": 12, "202": 5, "401": 100, "503": null,
      "equipment": {"ignored": true}
    },
    {
      "id": 33620300, "name": "Moon", "image": "moon_1", "type": 3,
      "galaxy": 1, "system": 234, "position": 7,
      "diameter": "8.944km", "fieldUsed": 4, "fieldMax": 5,
      "temperature": "-52 °C – -12 °C",
      "metal": 0, "crystal": 0, "deuterium": 0, "energy": "0",
      "41": 3, "42": 2
    }
  ]
}"#;

fn page(payload: &str) -> Vec<u8> {
    format!(
        r##"<html><body><div id="mainContent"></div><script type="text/javascript">
        $(document).ready(function() {{
            createImperiumHtml("#mainContent", "#loading", {payload}, 0);
        }});
        </script></body></html>"##
    )
    .into_bytes()
}

#[test]
fn one_snapshot_per_array_entry() {
    let snaps = Extractor::default().empire(&page(PAYLOAD)).unwrap();
    assert_eq!(snaps.len(), 2);

    let home = &snaps[0];
    assert_eq!(home.id, 33620229);
    assert_eq!(home.name, "Homeworld");
    assert_eq!(home.image, "normal_2");
    assert_eq!(home.kind, CelestialKind::Planet);
    assert_eq!(home.coordinate, Coordinate::new(1, 234, 7, CelestialKind::Planet));
    assert_eq!(home.diameter, 12_800);
    assert_eq!(home.fields, Fields { built: 163, total: 188 });
    assert_eq!(home.temperature, Temperature { min: -12, max: 28 });

    assert_eq!(home.resources.metal, 1_234_567);
    assert_eq!(home.resources.crystal, 500_000);
    assert_eq!(home.resources.deuterium, 12);
    assert_eq!(home.resources.energy, -1_234);
    assert_eq!(home.resources.darkmatter, 0);

    assert_eq!(home.supplies.get(Building::MetalMine), Some(30));
    assert_eq!(home.supplies.get(Building::CrystalMine), Some(25));
    assert_eq!(home.supplies.get(Building::SolarPlant), Some(28));
    assert_eq!(home.supplies.get(Building::SolarSatellite), Some(40));
    assert_eq!(home.facilities.get(Building::RoboticsFactory), Some(10));
    assert_eq!(home.facilities.get(Building::Shipyard), Some(8));
    assert_eq!(home.researches.get(Research::EnergyTechnology), Some(12));
    assert_eq!(home.ships.get(Ship::SmallCargo), Some(5));
    assert_eq!(home.ships.get(Ship::SolarSatellite), Some(40));
    assert_eq!(home.defenses.get(Defense::RocketLauncher), Some(100));
    assert_eq!(home.defenses.get(Defense::InterplanetaryMissiles), Some(0));

    let moon = &snaps[1];
    assert_eq!(moon.kind, CelestialKind::Moon);
    assert_eq!(moon.coordinate.kind, CelestialKind::Moon);
    assert_eq!(moon.diameter, 8_944);
    assert_eq!(moon.temperature, Temperature { min: -52, max: -12 });
    assert_eq!(moon.facilities.get(Building::LunarBase), Some(3));
    assert_eq!(moon.facilities.get(Building::SensorPhalanx), Some(2));
}

#[test]
fn missing_keys_default_to_zero_and_groups_are_complete() {
    let snaps = extract_empire(PAYLOAD.as_bytes()).unwrap();
    let home = &snaps[0];

    assert_eq!(home.supplies.get(Building::DeuteriumSynthesizer), Some(0));
    assert_eq!(home.ships.get(Ship::Deathstar), Some(0));
    assert_eq!(home.researches.get(Research::GravitonTechnology), Some(0));

    for snap in &snaps {
        assert_eq!(snap.supplies.len() + snap.facilities.len(), Building::ALL.len());
        assert_eq!(snap.researches.len(), Research::ALL.len());
        assert_eq!(snap.ships.len(), Ship::ALL.len());
        assert_eq!(snap.defenses.len(), Defense::ALL.len());
        assert!(!snap.supplies.contains(Building::RoboticsFactory));
        assert!(!snap.facilities.contains(Building::MetalMine));
    }
}

#[test]
fn bare_payload_and_page_agree() {
    let from_page = extract_empire(&page(PAYLOAD)).unwrap();
    let bare = extract_empire(PAYLOAD.as_bytes()).unwrap();
    assert_eq!(from_page, bare);
}

#[test]
fn empty_planet_list() {
    assert!(extract_empire(br#"{"planets": []}"#).unwrap().is_empty());
}

#[test]
fn wrong_shapes_are_malformed() {
    let cases: &[&str] = &[
        r#"{"planets": {"0": {}}}"#,
        r#"{"nope": []}"#,
        r#"{"planets": [{"id": 1, "type": 1, "202": [5]}]}"#,
        r#"{"planets": [{"id": 1, "type": 1, "metal": {"v": 1}}]}"#,
    ];
    for case in cases {
        let err = extract_empire(case.as_bytes()).unwrap_err();
        assert!(matches!(err, ExtractError::MalformedPayload(_)), "{case}: {err:?}");
    }
}

#[test]
fn odd_type_codes_read_as_planets() {
    let snaps = extract_empire(br#"{"planets": [{"id": 1}, {"id": 2, "type": null}, {"id": 3, "type": 2}, {"id": 4, "type": "3"}]}"#)
        .unwrap();
    assert_eq!(snaps.len(), 4);
    let kinds: Vec<_> = snaps.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![CelestialKind::Planet, CelestialKind::Planet, CelestialKind::Planet, CelestialKind::Moon]
    );
    assert_eq!(snaps[0].coordinate, Coordinate::new(0, 0, 0, CelestialKind::Planet));
}

#[test]
fn same_bytes_same_result() {
    let ok = page(PAYLOAD);
    assert_eq!(extract_empire(&ok), extract_empire(&ok));

    let malformed = br#"{"planets": [{"id": 1, "type": 1, "202": [5]}]}"#;
    let first = extract_empire(malformed);
    assert!(matches!(first, Err(ExtractError::MalformedPayload(_))));
    assert_eq!(first, extract_empire(malformed));

    let broken = page(r#"{"planets": [}"#);
    assert_eq!(extract_empire(&broken), extract_empire(&broken));
}

#[test]
fn broken_json_is_unparsable() {
    let err = extract_empire(&page(r#"{"planets": [}"#)).unwrap_err();
    assert!(matches!(err, ExtractError::Unparsable(_)), "{err:?}");
}

#[test]
fn page_without_payload_is_a_mismatch() {
    let err = extract_empire(b"<html><body>Maintenance</body></html>").unwrap_err();
    assert!(matches!(err, ExtractError::StructuralMismatch(_)), "{err:?}");
}
